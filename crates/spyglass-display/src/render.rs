//! The frame renderer.
//!
//! [`FrameRenderer`] binds to one map's geometry at construction and turns
//! each per-turn snapshot into a frame: planets and ships as
//! ownership-colored circles with id labels, mini-map separators while
//! zoomed, presentation to the window (feature `window`), and a JPEG saved
//! as `stats/botthought<turn>.jpeg`.
//!
//! # Dual-draw rule
//!
//! While a zoom focus is active, every primitive records itself twice:
//! once through the active (zoomed) projection and once through the
//! mini-map projection. The recording methods re-invoke themselves with
//! [`Scale::Mini`] substituted and terminate when the scale is already
//! `Mini`, so nothing ever double-draws inside the mini-map. Text labels
//! are exempt and record once.
//!
//! The renderer never clears between frames; ship movement leaves visible
//! trails until the hosting bot calls [`clear`](FrameRenderer::clear).

use std::path::{Path, PathBuf};

use spyglass_map::{Entity, EntityId, GameMap, Rgb};

use crate::canvas::Canvas;
use crate::color::{entity_color, BLACK};
use crate::error::DisplayError;
use crate::ops::{circle_points, DrawOp, Fill};
use crate::viewport::{Scale, Viewport, ZoomFocus};
#[cfg(feature = "window")]
use crate::window::Presenter;

/// Vertices used to approximate an entity's circular footprint.
const CIRCLE_SEGMENTS: u32 = 32;

/// World-space offset of a ship's id label above its hull.
const SHIP_LABEL_LIFT: f64 = 3.0;

// ---------------------------------------------------------------------------
// DisplayConfig
// ---------------------------------------------------------------------------

/// Renderer configuration.
///
/// The defaults reproduce the classic debug view: a 1200-pixel-wide
/// display, no zoom, frames under `stats/`.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Display width in pixels; height follows the map's aspect ratio.
    pub display_width: u32,
    /// Ship to zoom in on and track. `None` disables zoom entirely.
    pub focus_ship: Option<EntityId>,
    /// Half-size of the magnified region in world units.
    pub focus_box: f64,
    /// World coordinate to center on when the focus ship is configured
    /// but absent from the snapshot.
    pub fallback_focus: (f64, f64),
    /// Directory frames are written into. Must exist; the renderer does
    /// not create it.
    pub stats_dir: PathBuf,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_width: 1200,
            focus_ship: None,
            focus_box: 30.0,
            fallback_focus: (117.0626, 67.3018),
            stats_dir: PathBuf::from("stats"),
        }
    }
}

// ---------------------------------------------------------------------------
// FrameRenderer
// ---------------------------------------------------------------------------

/// Renders one frame per turn from a [`GameMap`] snapshot.
///
/// Constructed once per run; the display aspect ratio is fixed from the
/// map handed to [`new`](Self::new) and never changes afterwards.
pub struct FrameRenderer {
    viewport: Viewport,
    canvas: Canvas,
    ops: Vec<DrawOp>,
    focus_ship: Option<EntityId>,
    stats_dir: PathBuf,
    #[cfg(feature = "window")]
    presenter: Option<Presenter>,
}

impl FrameRenderer {
    /// Bind to a map's geometry and size the display from it.
    ///
    /// When `config.focus_ship` is set, zoom is enabled: centered on that
    /// ship if the local player owns it, otherwise on
    /// `config.fallback_focus`.
    pub fn new(map: &GameMap, config: DisplayConfig) -> Self {
        let mut viewport = Viewport::new(map.width(), map.height(), config.display_width);

        if let Some(ship_id) = config.focus_ship {
            let tracked = map.get_me().and_then(|me| me.ship(ship_id));
            let center = match tracked {
                Some(ship) => {
                    tracing::debug!(ship = %ship_id, "found focus ship");
                    ship.position()
                }
                None => {
                    tracing::debug!(
                        ship = %ship_id,
                        fallback = ?config.fallback_focus,
                        "focus ship not in snapshot, using fallback focus"
                    );
                    config.fallback_focus
                }
            };
            viewport.set_zoom(ZoomFocus {
                center,
                half_box: config.focus_box,
            });
        }

        let (width, height) = viewport.display_size();
        Self {
            viewport,
            canvas: Canvas::new(width, height),
            ops: Vec::new(),
            focus_ship: config.focus_ship,
            stats_dir: config.stats_dir,
            #[cfg(feature = "window")]
            presenter: None,
        }
    }

    /// Open a minifb window mirroring the canvas and start polling input.
    #[cfg(feature = "window")]
    pub fn attach_window(&mut self, title: &str) -> Result<(), DisplayError> {
        let (width, height) = self.viewport.display_size();
        self.presenter = Some(Presenter::new(title, width, height)?);
        Ok(())
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Canvas read access, mostly for tests inspecting pixels.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Operations recorded since the last frame flush. Useful for tests
    /// and introspection.
    pub fn pending_ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Move the zoom focus to an arbitrary world point.
    pub fn set_zoom(&mut self, focus: ZoomFocus) {
        self.viewport.set_zoom(focus);
    }

    /// Disable zoom and return to the full-map view.
    pub fn clear_zoom(&mut self) {
        self.viewport.clear_zoom();
    }

    /// Reset the canvas to white and drop any recorded ops.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.ops.clear();
    }

    // -----------------------------------------------------------------------
    // Overlay primitives (dual-draw applies)
    // -----------------------------------------------------------------------

    /// Record a world-space line.
    pub fn draw_line(&mut self, start: (f64, f64), end: (f64, f64), color: Rgb, width: u32) {
        self.record_line(start, end, color, width, Scale::Active);
    }

    fn record_line(
        &mut self,
        start: (f64, f64),
        end: (f64, f64),
        color: Rgb,
        width: u32,
        scale: Scale,
    ) {
        self.ops.push(DrawOp::Line {
            start,
            end,
            color,
            width,
            scale,
        });
        if self.viewport.zoomed() && scale != Scale::Mini {
            self.record_line(start, end, color, width, Scale::Mini);
        }
    }

    /// Record a world-space polygon.
    pub fn draw_poly(&mut self, points: Vec<(f64, f64)>, color: Rgb, fill: Fill) {
        self.record_poly(points, color, fill, Scale::Active);
    }

    fn record_poly(&mut self, points: Vec<(f64, f64)>, color: Rgb, fill: Fill, scale: Scale) {
        let mirror = self.viewport.zoomed() && scale != Scale::Mini;
        if mirror {
            self.ops.push(DrawOp::Poly {
                points: points.clone(),
                color,
                fill,
                scale,
            });
            self.record_poly(points, color, fill, Scale::Mini);
        } else {
            self.ops.push(DrawOp::Poly {
                points,
                color,
                fill,
                scale,
            });
        }
    }

    /// Record a world-space point, rendered as a `size`-pixel dot.
    pub fn draw_point(&mut self, at: (f64, f64), color: Rgb, size: f64) {
        self.record_point(at, color, size, Scale::Active);
    }

    fn record_point(&mut self, at: (f64, f64), color: Rgb, size: f64, scale: Scale) {
        self.ops.push(DrawOp::Point {
            at,
            color,
            size,
            scale,
        });
        if self.viewport.zoomed() && scale != Scale::Mini {
            self.record_point(at, color, size, Scale::Mini);
        }
    }

    /// Record a text label anchored at a world-space point. Labels are
    /// exempt from the dual-draw rule.
    pub fn draw_text(&mut self, at: (f64, f64), text: impl Into<String>, color: Rgb) {
        self.ops.push(DrawOp::Text {
            at,
            text: text.into(),
            color,
            scale: Scale::Active,
        });
    }

    // -----------------------------------------------------------------------
    // Frame rendering
    // -----------------------------------------------------------------------

    /// Render one frame from the snapshot and persist it.
    ///
    /// Polls input before and after rendering (a quit signal aborts with
    /// [`DisplayError::Quit`] before anything is drawn), draws every
    /// planet and ship over whatever overlays the bot recorded, presents
    /// to the window when one is attached, and saves the frame as
    /// `botthought<turn>.jpeg` in the configured stats directory.
    /// Returns the path of the saved frame.
    pub fn render(&mut self, map: &GameMap) -> Result<PathBuf, DisplayError> {
        self.poll_input()?;
        self.track_focus(map);

        for planet in map.all_planets() {
            let color = entity_color(map, planet);
            self.record_poly(
                circle_points(planet.position(), planet.radius(), CIRCLE_SEGMENTS),
                color,
                Fill::Solid,
                Scale::Active,
            );
            self.draw_text(planet.position(), planet.id().to_string(), BLACK);
        }

        for player in map.all_players() {
            for ship in player.all_ships() {
                let color = entity_color(map, ship);
                self.record_poly(
                    circle_points(ship.position(), ship.radius(), CIRCLE_SEGMENTS),
                    color,
                    Fill::Solid,
                    Scale::Active,
                );
                let (x, y) = ship.position();
                self.draw_text((x, y - SHIP_LABEL_LIFT), ship.id().to_string(), color);
            }
        }

        self.flush();

        if self.viewport.zoomed() {
            self.draw_minimap_frame();
        }

        self.present()?;
        let path = self.save_frame(map.turn_num())?;
        self.poll_input()?;
        Ok(path)
    }

    /// Keep the zoom centered on the focus ship while it is alive. A dead
    /// or missing ship leaves the previous focus in place.
    fn track_focus(&mut self, map: &GameMap) {
        let Some(ship_id) = self.focus_ship else {
            return;
        };
        let Some(zoom) = self.viewport.zoom() else {
            return;
        };
        if let Some(ship) = map.get_me().and_then(|me| me.ship(ship_id)) {
            self.viewport.set_zoom(ZoomFocus {
                center: ship.position(),
                ..zoom
            });
        }
    }

    /// Rasterize and drop all recorded ops, in recording order (so the
    /// mini-map copy of each primitive lands on top of main-view geometry
    /// that strays into the corner).
    fn flush(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        for op in ops {
            match op {
                DrawOp::Line {
                    start,
                    end,
                    color,
                    width,
                    scale,
                } => {
                    let a = self.viewport.project(start, scale);
                    let b = self.viewport.project(end, scale);
                    self.canvas.line(a, b, color, width);
                }
                DrawOp::Poly {
                    points,
                    color,
                    fill,
                    scale,
                } => {
                    let projected: Vec<(f64, f64)> = points
                        .iter()
                        .map(|&p| self.viewport.project(p, scale))
                        .collect();
                    match fill {
                        Fill::Solid => self.canvas.fill_polygon(&projected, color),
                        Fill::Outline(width) => {
                            self.canvas.outline_polygon(&projected, color, width)
                        }
                    }
                }
                DrawOp::Point {
                    at,
                    color,
                    size,
                    scale,
                } => {
                    let center = self.viewport.project(at, scale);
                    self.canvas.fill_circle(center, size, color);
                }
                DrawOp::Text {
                    at,
                    text,
                    color,
                    scale,
                } => {
                    let origin = self.viewport.project(at, scale);
                    self.canvas.text(&text, origin, color);
                }
            }
        }
    }

    /// Two screen-space separator lines fencing off the mini-map corner.
    fn draw_minimap_frame(&mut self) {
        let (mm_w, mm_h) = self.viewport.minimap_size();
        let (w, h) = (f64::from(mm_w), f64::from(mm_h));
        self.canvas.line((0.0, h), (w, h), BLACK, 1);
        self.canvas.line((w, 0.0), (w, h), BLACK, 1);
    }

    fn save_frame(&self, turn: u32) -> Result<PathBuf, DisplayError> {
        let path = self.stats_dir.join(format!("botthought{turn}.jpeg"));
        self.canvas
            .save_jpeg(&path)
            .map_err(|source| DisplayError::Save {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), turn, "frame saved");
        Ok(path)
    }

    /// Where the frame for a given turn ends up.
    pub fn frame_path(&self, turn: u32) -> PathBuf {
        self.stats_dir.join(format!("botthought{turn}.jpeg"))
    }

    /// Stats directory frames are written into.
    pub fn stats_dir(&self) -> &Path {
        &self.stats_dir
    }

    #[cfg(feature = "window")]
    fn poll_input(&mut self) -> Result<(), DisplayError> {
        match &mut self.presenter {
            Some(presenter) => presenter.poll(),
            None => Ok(()),
        }
    }

    #[cfg(not(feature = "window"))]
    fn poll_input(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    #[cfg(feature = "window")]
    fn present(&mut self) -> Result<(), DisplayError> {
        match &mut self.presenter {
            Some(presenter) => presenter.present(&self.canvas),
            None => Ok(()),
        }
    }

    #[cfg(not(feature = "window"))]
    fn present(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
