// src/canvas.rs
use crate::color::Rgb;
use crate::surface::{Surface, CANVAS_SIZE};
use crate::utils::{disc_row_extent, line_points, pixel_span, span_difference};
use image::{ImageBuffer, Rgb as ImageRgb};
use ndarray::{s, Array3};
use std::ops::Range;

/// A fixed-size RGB raster.
///
/// Pixels live in an `(height, width, 3)` array, row-major, which is the
/// same layout `image` uses for `Rgb<u8>` buffers.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Array3<u8>,
    fill: Rgb,
    stroke: Option<Rgb>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// A 400×400 white canvas with a white fill and a black stroke.
    pub fn new() -> Self {
        let side = CANVAS_SIZE as usize;
        Canvas {
            pixels: Array3::from_elem((side, side, 3), 255),
            fill: Rgb::WHITE,
            stroke: Some(Rgb::BLACK),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.pixels.dim().0 as u32
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let (x, y) = (x as usize, y as usize);
        Rgb::new(
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
        )
    }

    pub fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Copy the raster into an `image` buffer.
    pub fn to_image(&self) -> ImageBuffer<ImageRgb<u8>, Vec<u8>> {
        let mut img = ImageBuffer::new(self.width(), self.height());
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = self.pixel(x, y).into();
        }
        img
    }

    fn paint_span(&mut self, row: usize, cols: Range<usize>, color: Rgb) {
        if cols.is_empty() {
            return;
        }
        for (c, value) in color.channels().into_iter().enumerate() {
            self.pixels.slice_mut(s![row, cols.clone(), c]).fill(value);
        }
    }

    fn paint_block(&mut self, rows: Range<usize>, cols: Range<usize>, color: Rgb) {
        if rows.is_empty() || cols.is_empty() {
            return;
        }
        for (c, value) in color.channels().into_iter().enumerate() {
            self.pixels
                .slice_mut(s![rows.clone(), cols.clone(), c])
                .fill(value);
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        let (h, w, _) = self.pixels.dim();
        if x < 0 || y < 0 || x as usize >= w || y as usize >= h {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        for (c, value) in color.channels().into_iter().enumerate() {
            self.pixels[[y, x, c]] = value;
        }
    }

    /// Paint the part of row `row` covered by a disc, minus an optional inner disc.
    fn paint_disc_row(&mut self, row: usize, cx: f64, cy: f64, outer: f64, inner: f64, color: Rgb) {
        let w = self.pixels.dim().1;
        let yc = row as f64 + 0.5;
        let Some((l, r)) = disc_row_extent(cx, cy, outer, yc) else {
            return;
        };
        let outer_span = pixel_span(l, r, w);
        let hole = disc_row_extent(cx, cy, inner, yc)
            .map(|(l, r)| pixel_span(l, r, w))
            .unwrap_or(0..0);
        for span in span_difference(outer_span, hole) {
            self.paint_span(row, span, color);
        }
    }
}

impl Surface for Canvas {
    fn clear(&mut self, color: Rgb) {
        let (h, w, _) = self.pixels.dim();
        self.paint_block(0..h, 0..w, color);
    }

    fn fill(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn stroke(&mut self, color: Rgb) {
        self.stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.stroke = None;
    }

    fn ellipse(&mut self, cx: f64, cy: f64, diameter: f64) {
        let h = self.pixels.dim().0;
        let radius = diameter.abs() / 2.0;
        let reach = radius + 0.5;
        let rows = pixel_span(cy - reach, cy + reach, h);

        let fill = self.fill;
        for row in rows.clone() {
            self.paint_disc_row(row, cx, cy, radius, 0.0, fill);
        }
        // one unit wide ring centered on the outline
        if let Some(stroke) = self.stroke {
            for row in rows {
                self.paint_disc_row(row, cx, cy, radius + 0.5, radius - 0.5, stroke);
            }
        }
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let (rows_max, cols_max, _) = self.pixels.dim();
        let (x0, x1) = (x.min(x + w), x.max(x + w));
        let (y0, y1) = (y.min(y + h), y.max(y + h));

        let fill = self.fill;
        self.paint_block(
            pixel_span(y0, y1, rows_max),
            pixel_span(x0, x1, cols_max),
            fill,
        );

        if let Some(stroke) = self.stroke {
            let outer_rows = pixel_span(y0 - 0.5, y1 + 0.5, rows_max);
            let outer_cols = pixel_span(x0 - 0.5, x1 + 0.5, cols_max);
            let inner_rows = pixel_span(y0 + 0.5, y1 - 0.5, rows_max);
            let inner_cols = pixel_span(x0 + 0.5, x1 - 0.5, cols_max);
            for row in outer_rows {
                if inner_rows.contains(&row) {
                    for span in span_difference(outer_cols.clone(), inner_cols.clone()) {
                        self.paint_span(row, span, stroke);
                    }
                } else {
                    self.paint_span(row, outer_cols.clone(), stroke);
                }
            }
        }
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let Some(stroke) = self.stroke else {
            return;
        };
        for (x, y) in line_points(x1, y1, x2, y2) {
            self.plot(x, y, stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_pixels(canvas: &Canvas, color: Rgb) -> usize {
        let mut n = 0;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y) == color {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_new_canvas_is_white_400() {
        let canvas = Canvas::new();
        assert_eq!(canvas.width(), 400);
        assert_eq!(canvas.height(), 400);
        assert_eq!(canvas.pixels().shape(), &[400, 400, 3]);
        assert_eq!(count_pixels(&canvas, Rgb::WHITE), 400 * 400);
    }

    #[test]
    fn test_clear_paints_everything() {
        let mut canvas = Canvas::new();
        let teal = Rgb::new(0, 128, 128);
        canvas.clear(teal);
        assert_eq!(count_pixels(&canvas, teal), 400 * 400);
    }

    #[test]
    fn test_unstroked_rect_covers_exact_cells() {
        let mut canvas = Canvas::new();
        let red = Rgb::new(255, 0, 0);
        canvas.fill(red);
        canvas.no_stroke();
        canvas.rect(10.0, 20.0, 10.0, 10.0);

        assert_eq!(count_pixels(&canvas, red), 100);
        assert_eq!(canvas.pixel(10, 20), red);
        assert_eq!(canvas.pixel(19, 29), red);
        assert_eq!(canvas.pixel(9, 20), Rgb::WHITE);
        assert_eq!(canvas.pixel(20, 20), Rgb::WHITE);
        assert_eq!(canvas.pixel(10, 30), Rgb::WHITE);
    }

    #[test]
    fn test_stroked_rect_has_outline() {
        let mut canvas = Canvas::new();
        let fill = Rgb::new(0, 0, 255);
        let stroke = Rgb::new(0, 255, 0);
        canvas.fill(fill);
        canvas.stroke(stroke);
        canvas.rect(100.0, 100.0, 20.0, 20.0);

        // outline straddles the edges: columns/rows 99 and 119
        assert_eq!(canvas.pixel(99, 99), stroke);
        assert_eq!(canvas.pixel(99, 110), stroke);
        assert_eq!(canvas.pixel(119, 119), stroke);
        assert_eq!(canvas.pixel(110, 110), fill);
        assert_eq!(canvas.pixel(100, 100), fill);
        assert_eq!(canvas.pixel(98, 110), Rgb::WHITE);
        assert_eq!(canvas.pixel(120, 120), Rgb::WHITE);
        assert_eq!(count_pixels(&canvas, fill), 19 * 19);
        assert_eq!(count_pixels(&canvas, stroke), 21 * 21 - 19 * 19);
    }

    #[test]
    fn test_stroked_sub_unit_rect_paints_stroke() {
        let mut canvas = Canvas::new();
        let fill = Rgb::new(0, 0, 255);
        let stroke = Rgb::new(255, 0, 0);
        canvas.fill(fill);
        canvas.stroke(stroke);
        canvas.rect(10.2, 10.2, 0.2, 0.2);

        // no pixel center lies inside the rect itself, but the stroke covers (10, 10)
        assert_eq!(canvas.pixel(10, 10), stroke);
        assert_eq!(count_pixels(&canvas, stroke), 1);
        assert_eq!(count_pixels(&canvas, fill), 0);
        assert_eq!(count_pixels(&canvas, Rgb::WHITE), 400 * 400 - 1);
    }

    #[test]
    fn test_negative_size_rect_is_normalized() {
        let mut canvas = Canvas::new();
        let red = Rgb::new(255, 0, 0);
        canvas.fill(red);
        canvas.no_stroke();
        canvas.rect(20.0, 20.0, -10.0, -10.0);
        assert_eq!(count_pixels(&canvas, red), 100);
        assert_eq!(canvas.pixel(10, 10), red);
        assert_eq!(canvas.pixel(20, 20), Rgb::WHITE);
    }

    #[test]
    fn test_rect_partly_off_canvas_is_clipped() {
        let mut canvas = Canvas::new();
        let red = Rgb::new(255, 0, 0);
        canvas.fill(red);
        canvas.no_stroke();
        canvas.rect(-50.0, 390.0, 60.0, 60.0);
        assert_eq!(count_pixels(&canvas, red), 10 * 10);

        canvas.rect(1000.0, 1000.0, 5.0, 5.0);
        assert_eq!(count_pixels(&canvas, red), 10 * 10);
    }

    #[test]
    fn test_ellipse_fill_and_stroke() {
        let mut canvas = Canvas::new();
        let fill = Rgb::new(200, 10, 10);
        let stroke = Rgb::new(10, 10, 200);
        canvas.fill(fill);
        canvas.stroke(stroke);
        canvas.ellipse(200.0, 200.0, 40.0);

        assert_eq!(canvas.pixel(200, 200), fill);
        assert_eq!(canvas.pixel(219, 200), stroke);
        assert_eq!(canvas.pixel(180, 200), stroke);
        assert_eq!(canvas.pixel(230, 200), Rgb::WHITE);
        assert_eq!(canvas.pixel(0, 0), Rgb::WHITE);

        // roughly pi * 19.5^2 fill pixels
        let filled = count_pixels(&canvas, fill) as f64;
        let expected = std::f64::consts::PI * 19.5 * 19.5;
        assert!((filled - expected).abs() / expected < 0.05, "{}", filled);
    }

    #[test]
    fn test_zero_diameter_ellipse_draws_at_most_a_dot() {
        let mut canvas = Canvas::new();
        canvas.fill(Rgb::BLACK);
        canvas.no_stroke();
        canvas.ellipse(50.0, 50.0, 0.0);
        assert_eq!(count_pixels(&canvas, Rgb::BLACK), 0);
    }

    #[test]
    fn test_line_uses_stroke_and_respects_no_stroke() {
        let mut canvas = Canvas::new();
        let stroke = Rgb::new(1, 2, 3);
        canvas.stroke(stroke);
        canvas.line(0.5, 10.5, 99.5, 10.5);
        assert_eq!(count_pixels(&canvas, stroke), 100);
        assert_eq!(canvas.pixel(50, 10), stroke);

        canvas.no_stroke();
        canvas.line(0.5, 20.5, 99.5, 20.5);
        assert_eq!(count_pixels(&canvas, stroke), 100);
    }

    #[test]
    fn test_to_image_matches_pixels() {
        let mut canvas = Canvas::new();
        let red = Rgb::new(255, 0, 0);
        canvas.fill(red);
        canvas.no_stroke();
        canvas.rect(0.0, 0.0, 1.0, 1.0);

        let img = canvas.to_image();
        assert_eq!(img.dimensions(), (400, 400));
        assert_eq!(img.get_pixel(0, 0), &image::Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(1, 0), &image::Rgb([255, 255, 255]));
    }
}
