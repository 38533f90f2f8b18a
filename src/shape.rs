//! Shape entity - the animated polygram
//!
//! `PolygramShape` owns the animation state (angle, angular velocity,
//! side count, radius, display flags) and builds on the geometry module
//! for its vertex math. It is a long-lived singleton for the session:
//! the app constructs one, UI handlers mutate it, and the tick loop
//! drives `advance` and `render`.

use crate::geometry::{polygram_chains, regular_polygon_points, rotate_point};
use crate::render::{Palette, Surface};

/// Minimum number of polygon sides
pub const MIN_SIDES: usize = 3;
/// Maximum number of polygon sides
pub const MAX_SIDES: usize = 50;
/// Default number of polygon sides
pub const DEFAULT_SIDES: usize = 10;

/// Logical drawing surface is a fixed square of this many units
pub const SURFACE_SIZE: f32 = 600.0;

/// Minimum circumscribing-circle radius
pub const MIN_RADIUS: f32 = 25.0;
/// Maximum radius, leaving a small margin inside the surface
pub const MAX_RADIUS: f32 = SURFACE_SIZE / 2.0 - 5.0;
/// Default radius
pub const DEFAULT_RADIUS: f32 = 150.0;

/// Magnitude bound on the UI-facing speed value
pub const VELOCITY_LIMIT: f32 = 300.0;
/// UI-facing speed values are scaled by this before storage
pub const VELOCITY_SCALE: f32 = 0.01;
/// Default UI-facing speed (stored velocity 0.25 degrees/tick)
pub const DEFAULT_VELOCITY: f32 = 25.0;

/// Half-extent of the center mark, in logical units (a 2x2 square)
const MARK_HALF_EXTENT: f32 = 1.0;

/// The animated rotating polygon with optional polygram and circle
pub struct PolygramShape {
    /// Fixed at the surface center for the shape's lifetime
    center: (f32, f32),
    /// Current rotation in degrees
    angle: f32,
    /// Rotation per tick in degrees; sign gives direction
    angular_velocity: f32,
    side_count: usize,
    radius: f32,
    /// Origin-centered vertices, regenerated wholesale by `configure`
    base_vertices: Vec<(f32, f32)>,
    show_circle: bool,
    show_polygram: bool,
    /// Colors used by `render`
    pub palette: Palette,
}

impl Default for PolygramShape {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygramShape {
    /// Create a shape with default side count, radius and speed,
    /// centered on the logical surface.
    pub fn new() -> Self {
        let mut shape = Self {
            center: (SURFACE_SIZE / 2.0, SURFACE_SIZE / 2.0),
            angle: 0.0,
            angular_velocity: DEFAULT_VELOCITY * VELOCITY_SCALE,
            side_count: DEFAULT_SIDES,
            radius: DEFAULT_RADIUS,
            base_vertices: Vec::new(),
            show_circle: true,
            show_polygram: true,
            palette: Palette::default(),
        };
        shape.configure(DEFAULT_SIDES, DEFAULT_RADIUS);
        shape
    }

    /// Set side count and radius, regenerating the vertex list
    ///
    /// Out-of-range values clamp silently - a live slider hands over
    /// transient out-of-range values mid-drag and must not fault. The
    /// current rotation angle is left alone.
    pub fn configure(&mut self, side_count: usize, radius: f32) {
        self.side_count = side_count.clamp(MIN_SIDES, MAX_SIDES);
        self.radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
        self.base_vertices = regular_polygon_points(self.side_count, self.radius);
    }

    /// Set the rotation speed from the UI-facing value
    ///
    /// The value is clamped to `[-VELOCITY_LIMIT, VELOCITY_LIMIT]`, then
    /// scaled by `VELOCITY_SCALE`; the stored velocity is one-hundredth
    /// of what the slider shows.
    pub fn set_velocity(&mut self, ui_value: f32) {
        self.angular_velocity = ui_value.clamp(-VELOCITY_LIMIT, VELOCITY_LIMIT) * VELOCITY_SCALE;
    }

    pub fn set_show_circle(&mut self, flag: bool) {
        self.show_circle = flag;
    }

    pub fn set_show_polygram(&mut self, flag: bool) {
        self.show_polygram = flag;
    }

    /// Step the rotation by one tick
    ///
    /// Wrapping is single-step, not a modulo: one overshooting tick
    /// survives until the next call, which subtracts (or adds) a single
    /// 360 so continued motion stays smooth. The wrap check runs before
    /// the increment; the angle observed between ticks may briefly sit
    /// outside [0, 360), which is harmless since rotation is periodic.
    pub fn advance(&mut self) {
        if self.angle > 360.0 {
            self.angle -= 360.0;
        } else if self.angle < 0.0 {
            self.angle += 360.0;
        }
        self.angle += self.angular_velocity;
    }

    /// Draw the current frame onto `surface`
    ///
    /// Draw order: background clear, center mark, circumscribing circle
    /// (if enabled), polygon outline, polygram chains (if enabled).
    /// Reads no state besides the shape itself and writes none; safe to
    /// call any number of times per tick.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.palette.background);
        surface.mark(self.center, MARK_HALF_EXTENT, self.palette.primary);

        if self.show_circle {
            surface.stroke_circle(self.center, self.radius, self.palette.secondary);
        }

        // This frame's vertex positions
        let points: Vec<(f32, f32)> = self
            .base_vertices
            .iter()
            .map(|p| rotate_point(*p, self.center, self.angle))
            .collect();

        // The plain polygon is always drawn
        surface.stroke_closed_path(&points, self.palette.primary);

        if self.show_polygram {
            for chain in polygram_chains(self.side_count) {
                let chain_points: Vec<(f32, f32)> =
                    chain.iter().map(|&i| points[i]).collect();
                surface.stroke_closed_path(&chain_points, self.palette.secondary);
            }
        }
    }

    pub fn side_count(&self) -> usize {
        self.side_count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Stored angular velocity, in degrees per tick
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn show_circle(&self) -> bool {
        self.show_circle
    }

    pub fn show_polygram(&self) -> bool {
        self.show_polygram
    }
}
