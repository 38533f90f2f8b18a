//! Surface trait - the drawing seam between the shape entity and egui
//!
//! The shape entity issues drawing operations against this trait instead
//! of an `egui::Painter` directly, so render order and connectivity can
//! be tested without a windowing context.
//!
//! ## Coordinate System
//!
//! All coordinates are logical surface units: a fixed square of
//! `SURFACE_SIZE` x `SURFACE_SIZE`, origin at the top-left, y growing
//! downward. Implementations map logical units to whatever pixels they
//! actually own.

use eframe::egui::Color32;

/// A 2D drawing surface the shape entity renders onto
pub trait Surface {
    /// Fill the entire surface with `color`
    fn clear(&mut self, color: Color32);

    /// Fill a small fixed-size square mark centered at `pos`
    ///
    /// `half_extent` is in logical units; the mark decorates the shape's
    /// center and does not scale with the shape's radius.
    fn mark(&mut self, pos: (f32, f32), half_extent: f32, color: Color32);

    /// Stroke a circle of `radius` centered at `center`
    fn stroke_circle(&mut self, center: (f32, f32), radius: f32, color: Color32);

    /// Stroke a closed outline through `points` in order
    ///
    /// The final point connects back to the first; `points` must not
    /// repeat the first point at the end.
    fn stroke_closed_path(&mut self, points: &[(f32, f32)], color: Color32);
}

/// Three-color scheme for the shape: background fill, primary stroke
/// (outline and center mark), secondary stroke (circle and polygram).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub primary: Color32,
    pub secondary: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0, 0, 0),
            primary: Color32::from_rgb(255, 127, 0),
            secondary: Color32::from_rgb(0, 127, 255),
        }
    }
}
