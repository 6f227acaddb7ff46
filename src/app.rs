// src/app.rs
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::export::{export_canvas, Export};
use crate::pattern::{generate, PatternType};
use crate::random::{RandomSource, RngSource};
use rand::rngs::StdRng;

/// The interactive side of the tool: the user's current selections and the
/// canvas they are drawn on.
///
/// The canvas does not exist until the first generation, so exporting before
/// anything has been drawn does nothing.
pub struct ArtGenerator<R = RngSource<StdRng>> {
    pattern: PatternType,
    color: Rgb,
    canvas: Option<Canvas>,
    random: R,
}

impl ArtGenerator {
    pub fn new() -> Self {
        Self::with_random(RngSource::from_entropy())
    }
}

impl Default for ArtGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> ArtGenerator<R> {
    pub fn with_random(random: R) -> Self {
        ArtGenerator {
            pattern: PatternType::default(),
            color: Rgb::BLACK,
            canvas: None,
            random,
        }
    }

    pub fn pattern(&self) -> PatternType {
        self.pattern
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Change the selected pattern. Takes effect on the next generation.
    pub fn select_pattern(&mut self, pattern: PatternType) {
        self.pattern = pattern;
    }

    /// Change the accent color. Takes effect on the next generation.
    pub fn select_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Repaint the canvas with a fresh pattern of the selected type.
    pub fn on_generate_requested(&mut self) -> &Canvas {
        let canvas = self.canvas.get_or_insert_with(Canvas::new);
        generate(canvas, &mut self.random, self.pattern, self.color);
        log::debug!("Generated {} pattern", self.pattern);
        canvas
    }

    /// Encode the current canvas, named after the selected pattern.
    ///
    /// Returns `Ok(None)` if nothing has been generated yet.
    pub fn on_export_requested(&self) -> Result<Option<Export>> {
        let Some(canvas) = self.canvas.as_ref() else {
            log::debug!("Export requested before the first generation, ignoring");
            return Ok(None);
        };
        export_canvas(canvas, self.pattern).map(Some)
    }
}
