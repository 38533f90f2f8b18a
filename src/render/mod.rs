//! Render module - drawing surface abstraction and egui widget
//!
//! This module provides:
//! - `Surface` trait the shape entity draws through
//! - `Palette` color scheme
//! - `PolygramView` egui display widget

mod surface;
mod view;

pub use surface::{Palette, Surface};
pub use view::{PolygramView, ViewSettings};
