//! Software raster canvas.
//!
//! All drawing lands in an RGB pixel buffer backed by the `image` crate,
//! which also handles JPEG encoding when a frame is persisted. Writes
//! outside the canvas are clipped silently -- zoomed views routinely push
//! geometry far off screen.

use std::path::Path;

use image::RgbImage;
use spyglass_map::Rgb;

use crate::glyph;

/// An RGB canvas with clipped primitive rasterization.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// A white canvas of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Reset every pixel to white.
    pub fn clear(&mut self) {
        for px in self.img.pixels_mut() {
            *px = image::Rgb([255, 255, 255]);
        }
    }

    /// Read one pixel. Panics outside the canvas; test helper.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let p = self.img.get_pixel(x, y);
        Rgb(p[0], p[1], p[2])
    }

    /// Write one pixel, ignoring coordinates outside the canvas.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= i64::from(self.img.width()) || y >= i64::from(self.img.height()) {
            return;
        }
        self.img
            .put_pixel(x as u32, y as u32, image::Rgb([color.0, color.1, color.2]));
    }

    /// Stamp a `width`-sized square brush centered on the point.
    fn brush(&mut self, x: i64, y: i64, color: Rgb, width: u32) {
        if width <= 1 {
            self.put_pixel(x, y, color);
            return;
        }
        let half = i64::from(width) / 2;
        for dy in -half..=half {
            for dx in -half..=half {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Bresenham line between two screen-space points.
    pub fn line(&mut self, a: (f64, f64), b: (f64, f64), color: Rgb, width: u32) {
        let (mut x0, mut y0) = (a.0.round() as i64, a.1.round() as i64);
        let (x1, y1) = (b.0.round() as i64, b.1.round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.brush(x0, y0, color, width);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Outline a polygon, closing the last edge back to the first vertex.
    pub fn outline_polygon(&mut self, points: &[(f64, f64)], color: Rgb, width: u32) {
        if points.len() < 2 {
            return;
        }
        for i in 0..points.len() {
            let next = (i + 1) % points.len();
            self.line(points[i], points[next], color, width);
        }
    }

    /// Scanline-fill a polygon.
    ///
    /// Edges are sampled at pixel-row centers (`y + 0.5`), which handles
    /// vertices that sit exactly on a scanline without double-counting.
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgb) {
        if points.len() < 3 {
            return;
        }

        let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let y_lo = (y_min.floor() as i64).max(0);
        let y_hi = (y_max.ceil() as i64).min(i64::from(self.img.height()) - 1);

        let mut crossings: Vec<f64> = Vec::new();
        for y in y_lo..=y_hi {
            let yc = y as f64 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let (x1, y1) = points[i];
                let (x2, y2) = points[(i + 1) % points.len()];
                if (y1 <= yc && yc < y2) || (y2 <= yc && yc < y1) {
                    crossings.push(x1 + (yc - y1) * (x2 - x1) / (y2 - y1));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            for pair in crossings.chunks_exact(2) {
                let x_start = pair[0].round() as i64;
                let x_end = pair[1].round() as i64;
                for x in x_start..=x_end {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Fill a screen-space circle (used for point markers).
    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb) {
        let r = radius.max(0.5);
        let x_lo = (center.0 - r).floor() as i64;
        let x_hi = (center.0 + r).ceil() as i64;
        let y_lo = (center.1 - r).floor() as i64;
        let y_hi = (center.1 + r).ceil() as i64;
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let dx = x as f64 + 0.5 - center.0;
                let dy = y as f64 + 0.5 - center.1;
                if dx * dx + dy * dy <= r * r {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Stamp a string at the given screen-space origin (top-left of the
    /// first glyph cell). Characters without a glyph are skipped.
    pub fn text(&mut self, text: &str, origin: (f64, f64), color: Rgb) {
        let ox = origin.0.round() as i64;
        let oy = origin.1.round() as i64;
        let mut col = 0i64;
        for ch in text.chars() {
            let Some(rows) = glyph::glyph(ch) else {
                col += i64::from(glyph::ADVANCE);
                continue;
            };
            for (r, bits) in rows.iter().enumerate() {
                for c in 0..glyph::WIDTH {
                    if (bits >> (glyph::WIDTH - 1 - c)) & 1 == 1 {
                        self.put_pixel(ox + col + i64::from(c), oy + r as i64, color);
                    }
                }
            }
            col += i64::from(glyph::ADVANCE);
        }
    }

    /// Pack the canvas into the `0x00RRGGBB` buffer minifb presents.
    pub fn to_argb(&self) -> Vec<u32> {
        self.img
            .pixels()
            .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
            .collect()
    }

    /// Encode the canvas as JPEG at `path`. The parent directory must
    /// already exist.
    pub fn save_jpeg(&self, path: &Path) -> Result<(), image::ImageError> {
        self.img.save_with_format(path, image::ImageFormat::Jpeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(255, 0, 0);

    #[test]
    fn new_canvas_is_white() {
        let c = Canvas::new(8, 4);
        assert_eq!(c.pixel(0, 0), Rgb(255, 255, 255));
        assert_eq!(c.pixel(7, 3), Rgb(255, 255, 255));
    }

    #[test]
    fn out_of_bounds_writes_are_clipped() {
        let mut c = Canvas::new(4, 4);
        c.put_pixel(-1, 0, RED);
        c.put_pixel(0, -1, RED);
        c.put_pixel(4, 0, RED);
        c.put_pixel(0, 4, RED);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(c.pixel(x, y), Rgb(255, 255, 255));
            }
        }
    }

    #[test]
    fn line_touches_both_endpoints() {
        let mut c = Canvas::new(16, 16);
        c.line((1.0, 1.0), (12.0, 9.0), RED, 1);
        assert_eq!(c.pixel(1, 1), RED);
        assert_eq!(c.pixel(12, 9), RED);
    }

    #[test]
    fn filled_polygon_covers_interior_not_exterior() {
        let mut c = Canvas::new(20, 20);
        let square = [(4.0, 4.0), (14.0, 4.0), (14.0, 14.0), (4.0, 14.0)];
        c.fill_polygon(&square, RED);
        assert_eq!(c.pixel(9, 9), RED, "center of the square should be filled");
        assert_eq!(c.pixel(1, 1), Rgb(255, 255, 255), "outside must stay white");
        assert_eq!(c.pixel(17, 9), Rgb(255, 255, 255));
    }

    #[test]
    fn outline_polygon_leaves_interior_empty() {
        let mut c = Canvas::new(20, 20);
        let square = [(4.0, 4.0), (14.0, 4.0), (14.0, 14.0), (4.0, 14.0)];
        c.outline_polygon(&square, RED, 1);
        assert_eq!(c.pixel(4, 9), RED, "left edge should be drawn");
        assert_eq!(c.pixel(9, 9), Rgb(255, 255, 255), "interior must stay white");
    }

    #[test]
    fn circle_fill_is_centered() {
        let mut c = Canvas::new(16, 16);
        c.fill_circle((8.0, 8.0), 3.0, RED);
        assert_eq!(c.pixel(8, 8), RED);
        assert_eq!(c.pixel(0, 0), Rgb(255, 255, 255));
    }

    #[test]
    fn text_stamps_glyph_pixels() {
        let mut c = Canvas::new(16, 16);
        c.text("1", (2.0, 2.0), RED);
        // Row 0 of '1' is 0b00100: single pixel at column 2.
        assert_eq!(c.pixel(4, 2), RED);
        assert_eq!(c.pixel(2, 2), Rgb(255, 255, 255));
    }

    #[test]
    fn argb_packing_keeps_channel_order() {
        let mut c = Canvas::new(2, 1);
        c.put_pixel(0, 0, Rgb(0x12, 0x34, 0x56));
        let buf = c.to_argb();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf[0], 0x0012_3456);
        assert_eq!(buf[1], 0x00FF_FFFF);
    }

    #[test]
    fn clear_restores_white() {
        let mut c = Canvas::new(4, 4);
        c.fill_circle((2.0, 2.0), 2.0, RED);
        c.clear();
        assert_eq!(c.pixel(2, 2), Rgb(255, 255, 255));
    }
}
