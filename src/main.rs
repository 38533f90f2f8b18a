//! polygram-rs - Animated Star-Polygon Viewer
//!
//! Draws a rotating regular polygon, its inscribed {n/2} polygram, and
//! its circumscribing circle, with live control over side count, radius,
//! and rotation speed.

use std::time::{Duration, Instant};

use eframe::egui;

mod geometry;
mod render;
mod settings;
mod shape;

use render::{Palette, PolygramView};
use settings::AppSettings;
use shape::{
    PolygramShape, DEFAULT_RADIUS, DEFAULT_SIDES, DEFAULT_VELOCITY, MAX_RADIUS, MAX_SIDES,
    MIN_RADIUS, MIN_SIDES, VELOCITY_LIMIT,
};

/// Animation ticks per second
const TICK_RATE: u64 = 50;
/// Duration of one animation tick
const TICK: Duration = Duration::from_millis(1000 / TICK_RATE);

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting polygram-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([880.0, 680.0])
            .with_title("polygram-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "polygram-rs",
        options,
        Box::new(|cc| Ok(Box::new(PolygramApp::new(cc)))),
    )
}

/// UI-facing shape parameters, bound to the control sliders
pub struct ShapeParams {
    pub side_count: usize,
    pub radius: f32,
    /// Slider value; the entity stores this scaled down by 100
    pub velocity: f32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            side_count: DEFAULT_SIDES,
            radius: DEFAULT_RADIUS,
            velocity: DEFAULT_VELOCITY,
        }
    }
}

/// Main application state
pub struct PolygramApp {
    pub shape: PolygramShape,
    pub view: PolygramView,
    pub params: ShapeParams,
    show_controls: bool,
    last_tick: Instant,
}

impl PolygramApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::with_defaults();
        AppSettings::load().apply(&mut app);
        app
    }

    /// Fresh app state without touching stored settings
    pub fn with_defaults() -> Self {
        Self {
            shape: PolygramShape::new(),
            view: PolygramView::new(),
            params: ShapeParams::default(),
            show_controls: true,
            last_tick: Instant::now(),
        }
    }

    /// Advance the animation for every tick that has elapsed
    ///
    /// Rendering happens on every egui frame, but rotation steps only on
    /// the fixed cadence, so speed is independent of display refresh.
    fn run_ticks(&mut self) {
        // Resync after a long stall (minimized window) instead of
        // replaying every missed tick
        if self.last_tick.elapsed() > Duration::from_millis(250) {
            self.last_tick = Instant::now();
            self.shape.advance();
            return;
        }

        while self.last_tick.elapsed() >= TICK {
            self.shape.advance();
            self.last_tick += TICK;
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Shape");
        ui.separator();

        if ui
            .add(egui::Slider::new(&mut self.params.side_count, MIN_SIDES..=MAX_SIDES).text("Sides"))
            .changed()
        {
            self.shape.configure(self.params.side_count, self.params.radius);
        }

        if ui
            .add(egui::Slider::new(&mut self.params.radius, MIN_RADIUS..=MAX_RADIUS).text("Radius"))
            .changed()
        {
            self.shape.configure(self.params.side_count, self.params.radius);
        }

        if ui
            .add(
                egui::Slider::new(&mut self.params.velocity, -VELOCITY_LIMIT..=VELOCITY_LIMIT)
                    .text("Speed"),
            )
            .changed()
        {
            self.shape.set_velocity(self.params.velocity);
        }

        ui.separator();

        // Display settings
        ui.collapsing("Display", |ui| {
            let mut show_circle = self.shape.show_circle();
            if ui.checkbox(&mut show_circle, "Show circle").changed() {
                self.shape.set_show_circle(show_circle);
            }

            let mut show_polygram = self.shape.show_polygram();
            if ui.checkbox(&mut show_polygram, "Show polygram").changed() {
                self.shape.set_show_polygram(show_polygram);
            }

            ui.add(
                egui::Slider::new(&mut self.view.settings.line_width, 0.5..=5.0)
                    .text("Line width"),
            );
        });

        ui.separator();

        // Color presets
        ui.collapsing("Color", |ui| {
            ui.horizontal(|ui| {
                if ui.button("Ember").clicked() {
                    self.shape.palette = Palette::default();
                }
                if ui.button("Phosphor").clicked() {
                    self.shape.palette = Palette {
                        background: egui::Color32::from_rgb(10, 20, 10),
                        primary: egui::Color32::from_rgb(100, 255, 100),
                        secondary: egui::Color32::from_rgb(40, 160, 40),
                    };
                }
            });
        });
    }
}

impl eframe::App for PolygramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("polygram-rs");
                ui.separator();
                ui.toggle_value(&mut self.show_controls, "⚙ Controls");
            });
        });

        // Controls panel
        if self.show_controls {
            egui::SidePanel::left("controls_panel")
                .min_width(220.0)
                .show(ctx, |ui| self.controls_panel(ui));
        }

        // Main display
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show(ui, &self.shape);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    ui.small(format!("Sides: {}", self.shape.side_count()));
                    ui.separator();
                    ui.small(format!("Radius: {:.0}", self.shape.radius()));
                    ui.separator();
                    ui.small(format!(
                        "Speed: {:.2}°/tick",
                        self.shape.angular_velocity()
                    ));
                    ui.separator();
                    ui.small(format!("Angle: {:.1}°", self.shape.angle()));
                });
            });
        });

        // The frame above drew the current state; step the rotation for
        // whatever ticks have elapsed and schedule the next one.
        self.run_ticks();
        ctx.request_repaint_after(TICK);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        AppSettings::from_app(self).save();
        log::info!("Saved settings");
    }
}
