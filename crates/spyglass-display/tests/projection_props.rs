//! Property tests for the viewport projections.
//!
//! The projection math is the part of the renderer where an off-by-one or
//! a flipped sign silently produces plausible-looking but wrong frames,
//! so the core guarantees are checked over randomized inputs.

use proptest::prelude::*;
use spyglass_display::{Scale, Viewport, ZoomFocus};

/// World coordinates comfortably inside and around a 100x50 map.
fn world_coord() -> impl Strategy<Value = f64> {
    -50.0..200.0f64
}

proptest! {
    /// Unzoomed projection is strictly order-preserving on both axes.
    #[test]
    fn unzoomed_projection_preserves_order(
        x1 in world_coord(), x2 in world_coord(),
        y1 in world_coord(), y2 in world_coord(),
    ) {
        prop_assume!(x2 - x1 > 1e-9 && y2 - y1 > 1e-9);
        let vp = Viewport::new(100.0, 50.0, 1200);
        let a = vp.project((x1, y1), Scale::Active);
        let b = vp.project((x2, y2), Scale::Active);
        prop_assert!(a.0 < b.0, "x order flipped: {} !< {}", a.0, b.0);
        prop_assert!(a.1 < b.1, "y order flipped: {} !< {}", a.1, b.1);
    }

    /// Unzoomed projection is linear: scaling a world vector scales the
    /// screen vector by the same factor (origin maps to origin).
    #[test]
    fn unzoomed_projection_is_linear(x in world_coord(), y in world_coord(), k in 0.1..4.0f64) {
        let vp = Viewport::new(100.0, 50.0, 1200);
        let p = vp.project((x, y), Scale::Active);
        let kp = vp.project((k * x, k * y), Scale::Active);
        prop_assert!((kp.0 - k * p.0).abs() < 1e-6);
        prop_assert!((kp.1 - k * p.1).abs() < 1e-6);
    }

    /// The mini-map mapping of any point is identical with and without a
    /// zoom focus set.
    #[test]
    fn minimap_is_invariant_to_zoom(
        x in world_coord(), y in world_coord(),
        fx in 0.0..100.0f64, fy in 0.0..50.0f64,
        half_box in 1.0..60.0f64,
    ) {
        let mut vp = Viewport::new(100.0, 50.0, 1200);
        let before = vp.project((x, y), Scale::Mini);
        vp.set_zoom(ZoomFocus { center: (fx, fy), half_box });
        let during = vp.project((x, y), Scale::Mini);
        prop_assert_eq!(before, during);
    }

    /// The focus-box corner always lands on the screen origin, and the
    /// opposite corner on the far display corner.
    #[test]
    fn zoom_maps_focus_box_onto_display(
        fx in 0.0..100.0f64, fy in 0.0..50.0f64,
        half_box in 1.0..60.0f64,
    ) {
        let mut vp = Viewport::new(100.0, 50.0, 1200);
        vp.set_zoom(ZoomFocus { center: (fx, fy), half_box });
        let ratio = vp.ratio();

        let near = vp.project((fx - half_box, fy - half_box * ratio), Scale::Active);
        prop_assert!(near.0.abs() < 1e-9 && near.1.abs() < 1e-9,
            "near corner should map to the origin, got {near:?}");

        let far = vp.project((fx + half_box, fy + half_box * ratio), Scale::Active);
        prop_assert!((far.0 - 1200.0).abs() < 1e-6, "far x: {}", far.0);
        prop_assert!((far.1 - 600.0).abs() < 1e-6, "far y: {}", far.1);
    }

    /// Zoomed projection keeps the uniform scale on both axes: circles
    /// stay circles.
    #[test]
    fn zoomed_scale_is_uniform(
        fx in 0.0..100.0f64, fy in 0.0..50.0f64,
        half_box in 1.0..60.0f64,
        dx in -10.0..10.0f64, dy in -10.0..10.0f64,
    ) {
        let mut vp = Viewport::new(100.0, 50.0, 1200);
        vp.set_zoom(ZoomFocus { center: (fx, fy), half_box });

        let origin = vp.project((fx, fy), Scale::Active);
        let moved = vp.project((fx + dx, fy + dy), Scale::Active);
        let sx = moved.0 - origin.0;
        let sy = moved.1 - origin.1;
        let s = 1200.0 / (2.0 * half_box);
        prop_assert!((sx - dx * s).abs() < 1e-6);
        prop_assert!((sy - dy * s).abs() < 1e-6);
    }
}
