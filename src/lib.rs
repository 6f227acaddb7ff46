// src/lib.rs
//! Procedural art on a fixed 400×400 canvas.
//!
//! A [`PatternType`] plus a [`RandomSource`] drive [`generate`], which
//! repaints any [`Surface`]: the pixel [`Canvas`] used for PNG export, or a
//! [`Recorder`] that keeps the draw calls for inspection.

pub mod app;
pub mod canvas;
pub mod color;
pub mod error;
pub mod export;
pub mod pattern;
pub mod prefs;
pub mod random;
pub mod surface;
pub mod utils;

pub use app::ArtGenerator;
pub use canvas::Canvas;
pub use color::Rgb;
pub use error::{ArtError, Result};
pub use export::{encode_png, export_canvas, export_filename, Export};
pub use pattern::{generate, PatternType};
pub use prefs::{PreferenceStore, Theme};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use surface::{DrawCall, Recorder, Surface, CANVAS_SIZE};
