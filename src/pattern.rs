// src/pattern.rs
use crate::color::Rgb;
use crate::error::ArtError;
use crate::random::RandomSource;
use crate::surface::{Surface, CANVAS_SIZE};
use std::fmt;
use std::str::FromStr;

const SIZE: f64 = CANVAS_SIZE as f64;

const ELLIPSE_COUNT: usize = 10;
const MAX_ELLIPSE_DIAMETER: f64 = 100.0;
const LINE_COUNT: usize = 20;
const PIXEL_CELL: u32 = 10;
const MOSAIC_CELL: u32 = 20;

/// Deepest recursion a fractal pass can start at.
pub const MAX_FRACTAL_DEPTH: u32 = 5;

/// The pattern families the generator knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    #[default]
    Abstract,
    Pixelated,
    Lines,
    Fractal,
    Mosaic,
}

impl PatternType {
    pub const ALL: [PatternType; 5] = [
        PatternType::Abstract,
        PatternType::Pixelated,
        PatternType::Lines,
        PatternType::Fractal,
        PatternType::Mosaic,
    ];

    /// Stable identifier, used on the command line and in export filenames.
    pub fn id(self) -> &'static str {
        match self {
            PatternType::Abstract => "abstract",
            PatternType::Pixelated => "pixel",
            PatternType::Lines => "lines",
            PatternType::Fractal => "fractals",
            PatternType::Mosaic => "mosaic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PatternType::Abstract => "Abstract",
            PatternType::Pixelated => "Pixelated",
            PatternType::Lines => "Lines",
            PatternType::Fractal => "Fractals",
            PatternType::Mosaic => "Mosaic/Geometric",
        }
    }

    /// Only fractals are drawn in the user's accent color.
    pub fn uses_accent_color(self) -> bool {
        self == PatternType::Fractal
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PatternType {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abstract" => Ok(PatternType::Abstract),
            "pixel" | "pixelated" => Ok(PatternType::Pixelated),
            "lines" => Ok(PatternType::Lines),
            "fractals" | "fractal" => Ok(PatternType::Fractal),
            "mosaic" | "geometric" => Ok(PatternType::Mosaic),
            _ => Err(ArtError::UnknownPattern(s.to_string())),
        }
    }
}

/// Draw one pattern onto `surface`, repainting it from a white background.
///
/// Every random number comes from `random`, so the sequence of calls made on
/// `surface` is fully determined by `pattern`, `accent` and the draws.
/// `accent` is only used for [`PatternType::Fractal`].
pub fn generate<S, R>(surface: &mut S, random: &mut R, pattern: PatternType, accent: Rgb)
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    surface.clear(Rgb::WHITE);

    let base = if pattern.uses_accent_color() {
        accent
    } else {
        random_color(random)
    };
    surface.fill(base);
    surface.stroke(base);

    match pattern {
        PatternType::Abstract => draw_abstract(surface, random),
        PatternType::Pixelated => draw_pixelated(surface, random),
        PatternType::Lines => draw_lines(surface, random),
        PatternType::Fractal => draw_random_fractal(surface, random),
        PatternType::Mosaic => draw_mosaic(surface, random),
    }
}

/// Three independent channel draws in [0, 255), red first.
pub fn random_color<R: RandomSource + ?Sized>(random: &mut R) -> Rgb {
    let r = random.uniform(0.0, 255.0);
    let g = random.uniform(0.0, 255.0);
    let b = random.uniform(0.0, 255.0);
    Rgb::from_levels(r, g, b)
}

fn draw_abstract<S, R>(surface: &mut S, random: &mut R)
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    for _ in 0..ELLIPSE_COUNT {
        let cx = random.uniform(0.0, SIZE);
        let cy = random.uniform(0.0, SIZE);
        let d = random.uniform(0.0, MAX_ELLIPSE_DIAMETER);
        surface.ellipse(cx, cy, d);
    }
}

fn draw_pixelated<S, R>(surface: &mut S, random: &mut R)
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    let cell = PIXEL_CELL as f64;
    for x in (0..CANVAS_SIZE).step_by(PIXEL_CELL as usize) {
        for y in (0..CANVAS_SIZE).step_by(PIXEL_CELL as usize) {
            surface.fill(random_color(random));
            surface.no_stroke();
            surface.rect(x as f64, y as f64, cell, cell);
        }
    }
}

fn draw_lines<S, R>(surface: &mut S, random: &mut R)
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    for _ in 0..LINE_COUNT {
        let x1 = random.uniform(0.0, SIZE);
        let y1 = random.uniform(0.0, SIZE);
        let x2 = random.uniform(0.0, SIZE);
        let y2 = random.uniform(0.0, SIZE);
        surface.line(x1, y1, x2, y2);
    }
}

fn draw_random_fractal<S, R>(surface: &mut S, random: &mut R)
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    let x = random.uniform(100.0, 300.0);
    let y = random.uniform(100.0, 300.0);
    let side = random.uniform(50.0, 150.0);
    let depth = random.uniform(3.0, (MAX_FRACTAL_DEPTH + 1) as f64).floor() as u32;
    draw_fractal(surface, x, y, side, depth.min(MAX_FRACTAL_DEPTH));
}

/// Draw a square at `(x, y)`, then four squares a third of its size placed
/// diagonally outside each corner, one level shallower each time.
///
/// Starting at `depth` draws `(4^depth - 1) / 3` squares.
pub fn draw_fractal<S: Surface + ?Sized>(surface: &mut S, x: f64, y: f64, side: f64, depth: u32) {
    if depth == 0 {
        return;
    }
    surface.rect(x, y, side, side);

    let child = side / 3.0;
    let near = -child;
    let far = side + child;
    for (dx, dy) in [(near, near), (far, near), (near, far), (far, far)] {
        draw_fractal(surface, x + dx, y + dy, child, depth - 1);
    }
}

fn draw_mosaic<S, R>(surface: &mut S, random: &mut R)
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    let cell = MOSAIC_CELL as f64;
    for x in (0..CANVAS_SIZE).step_by(MOSAIC_CELL as usize) {
        for y in (0..CANVAS_SIZE).step_by(MOSAIC_CELL as usize) {
            surface.fill(random_color(random));
            surface.rect(x as f64, y as f64, cell, cell);
        }
    }
}
