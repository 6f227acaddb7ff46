// src/utils.rs
//! Rasterization helpers shared by the canvas.
//!
//! A pixel `(i, j)` is covered by a shape when its center `(i + 0.5, j + 0.5)`
//! lies inside the shape. All spans are half-open and clamped to the raster.

use std::ops::Range;

/// Pixel indices whose centers fall in `[start, end)`, clamped to `0..limit`.
/// Empty when `end <= start`.
pub fn pixel_span(start: f64, end: f64, limit: usize) -> Range<usize> {
    if end <= start {
        return 0..0;
    }
    let first = (start - 0.5).ceil().max(0.0);
    let last = (end - 0.5).ceil().max(0.0);
    let first = (first as usize).min(limit);
    let last = (last as usize).min(limit);
    first..last.max(first)
}

/// Horizontal extent `[left, right)` of a disc on the row whose center is `y`.
#[inline(always)]
pub fn disc_row_extent(cx: f64, cy: f64, radius: f64, y: f64) -> Option<(f64, f64)> {
    if radius <= 0.0 {
        return None;
    }
    let dy = y - cy;
    let sq = radius * radius - dy * dy;
    if sq < 0.0 {
        return None;
    }
    let half = sq.sqrt();
    Some((cx - half, cx + half))
}

/// Split `outer` around `inner`, returning the parts of `outer` that do not
/// overlap it (left piece first).
pub fn span_difference(outer: Range<usize>, inner: Range<usize>) -> [Range<usize>; 2] {
    if inner.start >= inner.end || inner.end <= outer.start || inner.start >= outer.end {
        return [outer.clone(), outer.end..outer.end];
    }
    [
        outer.start..inner.start.max(outer.start),
        inner.end.min(outer.end)..outer.end,
    ]
}

/// Points visited when stepping from `(x1, y1)` to `(x2, y2)` one unit at a
/// time along the major axis, as integer pixel coordinates. Both endpoints
/// are included. Coordinates may be negative or past the raster edge.
pub fn line_points(x1: f64, y1: f64, x2: f64, y2: f64) -> impl Iterator<Item = (i64, i64)> {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
    (0..=steps).map(move |i| {
        let t = i as f64 / steps as f64;
        ((x1 + dx * t).floor() as i64, (y1 + dy * t).floor() as i64)
    })
}
