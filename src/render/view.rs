//! Polygram display widget
//!
//! Renders the shape entity into an egui panel. The widget negotiates a
//! square screen region, then exposes it to the entity as a [`Surface`]
//! over the fixed logical coordinate space, scaling as needed.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use crate::shape::{PolygramShape, SURFACE_SIZE};

use super::surface::Surface;

/// Display settings for the polygram view
#[derive(Clone)]
pub struct ViewSettings {
    /// Stroke thickness in pixels
    pub line_width: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self { line_width: 1.5 }
    }
}

/// Widget that draws a [`PolygramShape`] into the UI
pub struct PolygramView {
    /// Display settings
    pub settings: ViewSettings,
}

impl Default for PolygramView {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygramView {
    pub fn new() -> Self {
        Self {
            settings: ViewSettings::default(),
        }
    }

    /// Draw the shape, using the largest square that fits the available
    /// space (capped at the logical surface size).
    pub fn show(&self, ui: &mut egui::Ui, shape: &PolygramShape) -> egui::Response {
        let available = ui.available_size();
        let side = available.x.min(available.y).min(SURFACE_SIZE);
        let size = Vec2::new(side, side);

        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());

        let mut surface = PainterSurface {
            painter: &painter,
            rect: response.rect,
            scale: side / SURFACE_SIZE,
            line_width: self.settings.line_width,
        };
        shape.render(&mut surface);

        response
    }
}

/// [`Surface`] implementation over an `egui::Painter`
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
    scale: f32,
    line_width: f32,
}

impl PainterSurface<'_> {
    /// Map a logical surface point to screen pixels
    fn to_screen(&self, (x, y): (f32, f32)) -> Pos2 {
        Pos2::new(
            self.rect.left() + x * self.scale,
            self.rect.top() + y * self.scale,
        )
    }

    fn stroke(&self, color: Color32) -> Stroke {
        Stroke::new(self.line_width, color)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn mark(&mut self, pos: (f32, f32), half_extent: f32, color: Color32) {
        // The mark is a fixed-size decoration; it scales with the view,
        // not with the shape.
        let size = Vec2::splat(2.0 * half_extent * self.scale);
        let rect = Rect::from_center_size(self.to_screen(pos), size);
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn stroke_circle(&mut self, center: (f32, f32), radius: f32, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius * self.scale, self.stroke(color));
    }

    fn stroke_closed_path(&mut self, points: &[(f32, f32)], color: Color32) {
        if points.len() < 2 {
            return;
        }

        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::closed_line(screen, self.stroke(color)));
    }
}
