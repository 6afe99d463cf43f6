//! Recorded draw operations.
//!
//! Primitives do not rasterize immediately: the renderer records a
//! [`DrawOp`] per call (two while zoom is active -- see the dual-draw rule
//! on [`FrameRenderer`](crate::FrameRenderer)) and rasterizes the whole
//! list when the frame is flushed. Keeping ops as plain data makes the
//! dual-draw behavior testable without a window or a pixel in sight.

use spyglass_map::Rgb;

use crate::viewport::Scale;

/// How a polygon is rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Solid interior.
    Solid,
    /// Edges only, with the given stroke width in pixels.
    Outline(u32),
}

/// One recorded draw operation. Coordinates are world-space except where
/// noted; `scale` picks the projection used at rasterization time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        start: (f64, f64),
        end: (f64, f64),
        color: Rgb,
        width: u32,
        scale: Scale,
    },
    Poly {
        points: Vec<(f64, f64)>,
        color: Rgb,
        fill: Fill,
        scale: Scale,
    },
    /// A world-space position marked with a fixed-size screen-space dot.
    Point {
        at: (f64, f64),
        color: Rgb,
        /// Dot radius in *pixels*, independent of the projection.
        size: f64,
        scale: Scale,
    },
    /// Text is exempt from the dual-draw rule and always records once.
    Text {
        at: (f64, f64),
        text: String,
        color: Rgb,
        scale: Scale,
    },
}

impl DrawOp {
    /// The projection this op rasterizes through.
    pub fn scale(&self) -> Scale {
        match self {
            DrawOp::Line { scale, .. }
            | DrawOp::Poly { scale, .. }
            | DrawOp::Point { scale, .. }
            | DrawOp::Text { scale, .. } => *scale,
        }
    }
}

/// Approximate a circle as a closed polygon in world space.
///
/// All three projections scale both axes uniformly, so the projected
/// vertices still trace a circle on screen.
pub fn circle_points(center: (f64, f64), radius: f64, segments: u32) -> Vec<(f64, f64)> {
    let n = segments.max(3);
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * f64::from(i) / f64::from(n);
            (
                center.0 + radius * theta.cos(),
                center.1 + radius * theta.sin(),
            )
        })
        .collect()
}
