#![allow(clippy::new_without_default, clippy::derive_partial_eq_without_eq)]

pub mod compositor;
pub mod config;
pub mod dirty;
pub mod error;
pub mod event;
pub mod gate;
pub mod graphics;
pub mod path;
pub mod style;
pub mod surface;

pub extern crate tiny_skia;

use crate::{graphics::Rect, path::StrokePath};

pub use crate::{
    event::{PointerAction, PointerEvent, ToolType},
    surface::PaintSurface,
};

pub const DEFAULT_BRUSH_WIDTH: f32 = 10.;

/// What a [`PaintSurface`] needs from whoever is hosting it.
pub trait PaintHost {
    /// Redraw at least this region.
    fn request_repaint(&mut self, rect: Rect);

    fn request_full_repaint(&mut self);

    /// Called once per gesture, after the stroke has (maybe) been committed. The path is handed
    /// over, the surface keeps nothing of it.
    fn on_stroke_completed(&mut self, path: StrokePath);

    /// `true` when stylus-only input is being attempted with something else.
    fn on_warning_state_changed(&mut self, is_on: bool);
}
