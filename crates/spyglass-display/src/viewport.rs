//! Display sizing and world-to-screen projections.
//!
//! The viewport owns three mappings from world space to screen pixels:
//!
//! - *unzoomed*: the whole map scaled linearly to the display;
//! - *zoomed*: a focus box magnified to fill the display (active only while
//!   a [`ZoomFocus`] is set);
//! - *mini-map*: the whole map scaled to the quarter-size inset, regardless
//!   of zoom state.
//!
//! The display aspect ratio is fixed to the map's height/width ratio at
//! construction and never changes afterwards.

/// Which projection a draw operation goes through.
///
/// `Active` resolves to the zoomed mapping while a focus is set and to the
/// unzoomed mapping otherwise. `Mini` always targets the mini-map inset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Active,
    Mini,
}

/// A world-space point magnified to fill the display.
///
/// `half_box` is the x half-extent of the magnified region in world units;
/// the y half-extent is `half_box * ratio` so the region fills the display
/// without stretching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFocus {
    pub center: (f64, f64),
    pub half_box: f64,
}

/// Display geometry bound to one map's dimensions.
#[derive(Debug, Clone)]
pub struct Viewport {
    display_width: u32,
    display_height: u32,
    minimap_width: u32,
    minimap_height: u32,
    map_width: f64,
    ratio: f64,
    zoom: Option<ZoomFocus>,
}

impl Viewport {
    /// Size the display from a fixed pixel width and the map's aspect
    /// ratio. The mini-map is a quarter of the display in each dimension.
    pub fn new(map_width: f64, map_height: f64, display_width: u32) -> Self {
        let ratio = map_height / map_width;
        let display_height = (f64::from(display_width) * ratio) as u32;
        Self {
            display_width,
            display_height,
            minimap_width: display_width / 4,
            minimap_height: display_height / 4,
            map_width,
            ratio,
            zoom: None,
        }
    }

    /// Display size in pixels, `(width, height)`.
    pub fn display_size(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }

    /// Mini-map inset size in pixels, `(width, height)`.
    pub fn minimap_size(&self) -> (u32, u32) {
        (self.minimap_width, self.minimap_height)
    }

    /// Map height over width, fixed at construction.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn zoom(&self) -> Option<ZoomFocus> {
        self.zoom
    }

    pub fn zoomed(&self) -> bool {
        self.zoom.is_some()
    }

    /// Enable or move the zoom focus.
    pub fn set_zoom(&mut self, focus: ZoomFocus) {
        self.zoom = Some(focus);
    }

    /// Drop back to the unzoomed full-map view.
    pub fn clear_zoom(&mut self) {
        self.zoom = None;
    }

    /// Project a world-space point to screen pixels through the given
    /// projection.
    pub fn project(&self, point: (f64, f64), scale: Scale) -> (f64, f64) {
        let (x, y) = point;
        match (scale, self.zoom) {
            (Scale::Mini, _) => {
                let s = f64::from(self.minimap_width) / self.map_width;
                (x * s, y * s)
            }
            (Scale::Active, None) => {
                let s = f64::from(self.display_width) / self.map_width;
                (x * s, y * s)
            }
            (Scale::Active, Some(z)) => {
                let low_x = z.center.0 - z.half_box;
                let low_y = z.center.1 - z.half_box * self.ratio;
                let s = f64::from(self.display_width) / (2.0 * z.half_box);
                ((x - low_x) * s, (y - low_y) * s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_sizing_from_map_ratio() {
        // Map 100x50 at display width 1200 -> 1200x600 display, 300x150 mini.
        let vp = Viewport::new(100.0, 50.0, 1200);
        assert_eq!(vp.display_size(), (1200, 600));
        assert_eq!(vp.minimap_size(), (300, 150));
        assert!((vp.ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unzoomed_projection_is_linear() {
        let vp = Viewport::new(100.0, 50.0, 1200);
        let (x0, y0) = vp.project((0.0, 0.0), Scale::Active);
        let (x1, y1) = vp.project((10.0, 5.0), Scale::Active);
        let (x2, y2) = vp.project((20.0, 10.0), Scale::Active);
        assert_eq!((x0, y0), (0.0, 0.0));
        assert!((x2 - 2.0 * x1).abs() < 1e-9, "x should scale linearly");
        assert!((y2 - 2.0 * y1).abs() < 1e-9, "y should scale linearly");
    }

    #[test]
    fn unzoomed_projection_preserves_order() {
        let vp = Viewport::new(100.0, 50.0, 1200);
        let a = vp.project((3.0, 7.0), Scale::Active);
        let b = vp.project((4.0, 9.0), Scale::Active);
        assert!(a.0 < b.0);
        assert!(a.1 < b.1);
    }

    #[test]
    fn zoomed_focus_box_corner_maps_to_origin() {
        let mut vp = Viewport::new(100.0, 50.0, 1200);
        vp.set_zoom(ZoomFocus {
            center: (40.0, 20.0),
            half_box: 30.0,
        });
        // Corner (cx - box, cy - box * ratio) lands exactly on (0, 0).
        let corner = (40.0 - 30.0, 20.0 - 30.0 * 0.5);
        let (sx, sy) = vp.project(corner, Scale::Active);
        assert!(sx.abs() < 1e-9, "corner x should map to 0, got {sx}");
        assert!(sy.abs() < 1e-9, "corner y should map to 0, got {sy}");
    }

    #[test]
    fn zoomed_focus_box_fills_display() {
        let mut vp = Viewport::new(100.0, 50.0, 1200);
        vp.set_zoom(ZoomFocus {
            center: (40.0, 20.0),
            half_box: 30.0,
        });
        // Opposite corner lands on (display_width, display_height).
        let far = (40.0 + 30.0, 20.0 + 30.0 * 0.5);
        let (sx, sy) = vp.project(far, Scale::Active);
        assert!((sx - 1200.0).abs() < 1e-9, "far x should map to 1200, got {sx}");
        assert!((sy - 600.0).abs() < 1e-9, "far y should map to 600, got {sy}");
    }

    #[test]
    fn minimap_projection_ignores_zoom_state() {
        let mut vp = Viewport::new(100.0, 50.0, 1200);
        let before = vp.project((33.0, 11.0), Scale::Mini);
        vp.set_zoom(ZoomFocus {
            center: (40.0, 20.0),
            half_box: 30.0,
        });
        let during = vp.project((33.0, 11.0), Scale::Mini);
        vp.clear_zoom();
        let after = vp.project((33.0, 11.0), Scale::Mini);
        assert_eq!(before, during, "zoom must not move mini-map points");
        assert_eq!(before, after);
    }

    #[test]
    fn clear_zoom_restores_unzoomed_mapping() {
        let mut vp = Viewport::new(100.0, 50.0, 1200);
        let plain = vp.project((10.0, 10.0), Scale::Active);
        vp.set_zoom(ZoomFocus {
            center: (50.0, 25.0),
            half_box: 10.0,
        });
        assert_ne!(plain, vp.project((10.0, 10.0), Scale::Active));
        vp.clear_zoom();
        assert_eq!(plain, vp.project((10.0, 10.0), Scale::Active));
    }
}
