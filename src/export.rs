// src/export.rs
//! Turning the canvas into a downloadable PNG.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::pattern::PatternType;
use image::ImageOutputFormat;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// An encoded image ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub png: Vec<u8>,
}

impl Export {
    /// Write the PNG into `dir` under its own filename.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.png)?;
        log::info!("Saved {} ({} bytes)", path.display(), self.png.len());
        Ok(path)
    }
}

/// `random-art-<id>.png`
pub fn export_filename(pattern: PatternType) -> String {
    format!("random-art-{}.png", pattern.id())
}

/// Encode the canvas as an 8-bit RGB PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let img = canvas.to_image();
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

pub fn export_canvas(canvas: &Canvas, pattern: PatternType) -> Result<Export> {
    Ok(Export {
        filename: export_filename(pattern),
        png: encode_png(canvas)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::surface::Surface;

    #[test]
    fn test_export_filenames() {
        assert_eq!(export_filename(PatternType::Abstract), "random-art-abstract.png");
        assert_eq!(export_filename(PatternType::Pixelated), "random-art-pixel.png");
        assert_eq!(export_filename(PatternType::Lines), "random-art-lines.png");
        assert_eq!(export_filename(PatternType::Fractal), "random-art-fractals.png");
        assert_eq!(export_filename(PatternType::Mosaic), "random-art-mosaic.png");
    }

    #[test]
    fn test_png_decodes_to_same_pixels() {
        let mut canvas = Canvas::new();
        let red = Rgb::new(255, 0, 0);
        canvas.fill(red);
        canvas.no_stroke();
        canvas.rect(0.0, 0.0, 200.0, 400.0);

        let bytes = encode_png(&canvas).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (400, 400));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgb([255, 0, 0]));
        assert_eq!(decoded.get_pixel(199, 399), &image::Rgb([255, 0, 0]));
        assert_eq!(decoded.get_pixel(200, 0), &image::Rgb([255, 255, 255]));
        assert_eq!(decoded, canvas.to_image());
    }

    #[test]
    fn test_save_to_writes_file() {
        let dir = std::env::temp_dir().join(format!("random-art-export-{}", std::process::id()));
        let export = export_canvas(&Canvas::new(), PatternType::Lines).unwrap();

        let path = export.save_to(&dir).unwrap();
        assert_eq!(path.file_name().unwrap(), "random-art-lines.png");
        assert_eq!(fs::read(&path).unwrap(), export.png);

        fs::remove_dir_all(&dir).unwrap();
    }
}
