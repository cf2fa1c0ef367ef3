//! Owned RGB pixel buffer.
//!
//! Everything draws here first. Output backends (terminal half-blocks, PNG
//! export) convert the finished canvas to their own format.

use std::ops::RangeInclusive;

use crate::surface::{DrawingSurface, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl PixelCanvas {
    /// Creates a canvas cleared to black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Rgb::BLACK; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (x, y), or `None` outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.width.max(1))
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Shrinks the canvas by `scale`, keeping the center pixel of every
    /// `scale x scale` block. Partial blocks at the edges are dropped.
    #[must_use]
    pub fn downsample(&self, scale: usize) -> PixelCanvas {
        if scale <= 1 {
            return self.clone();
        }
        let width = self.width / scale;
        let height = self.height / scale;
        let center = scale / 2;
        let mut out = PixelCanvas::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let src = (y * scale + center) * self.width + x * scale + center;
                out.pixels[y * width + x] = self.pixels[src];
            }
        }
        out
    }

    /// Clips a span to `[0, limit)` and returns it as usize bounds.
    fn clip(start: i64, len: i64, limit: usize) -> Option<(usize, usize)> {
        let lo = start.max(0);
        let hi = start.saturating_add(len).min(limit as i64);
        (lo < hi).then_some((lo as usize, hi as usize))
    }

    /// Offsets from a circle's center that land on the canvas, per axis.
    fn circle_span(
        &self,
        cx: i64,
        cy: i64,
        radius: i64,
    ) -> Option<(RangeInclusive<i64>, RangeInclusive<i64>)> {
        let axis = |center: i64, limit: usize| {
            let lo = (-radius).max(center.saturating_neg());
            let hi = radius.min((limit as i64 - 1).saturating_sub(center));
            (lo <= hi).then_some(lo..=hi)
        };
        Some((axis(cy, self.height)?, axis(cx, self.width)?))
    }
}

fn dist2(dx: i64, dy: i64) -> i64 {
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
}

impl DrawingSurface for PixelCanvas {
    fn size(&self) -> (i64, i64) {
        (self.width as i64, self.height as i64)
    }

    fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Rgb) {
        let Some((x0, x1)) = Self::clip(x, width, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::clip(y, height, self.height) else {
            return;
        };
        for row in y0..y1 {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(color);
        }
    }

    fn fill_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Rgb) {
        if radius < 0 {
            return;
        }
        let r2 = radius.saturating_mul(radius);
        let Some((dys, dxs)) = self.circle_span(cx, cy, radius) else {
            return;
        };
        for dy in dys {
            for dx in dxs.clone() {
                if dist2(dx, dy) <= r2 {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn stroke_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Rgb) {
        if radius <= 0 {
            self.put(cx, cy, color);
            return;
        }
        let outer = radius.saturating_mul(radius);
        let inner = (radius - 1).saturating_mul(radius - 1);
        let Some((dys, dxs)) = self.circle_span(cx, cy, radius) else {
            return;
        };
        for dy in dys {
            for dx in dxs.clone() {
                let d2 = dist2(dx, dy);
                if d2 > inner && d2 <= outer {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(255, 0, 0);
    const BLUE: Rgb = Rgb(0, 0, 255);

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = PixelCanvas::new(4, 3);
        canvas.fill_rect(-2, 1, 4, 10, RED);
        assert_eq!(canvas.get(0, 0), Some(Rgb::BLACK));
        assert_eq!(canvas.get(0, 1), Some(RED));
        assert_eq!(canvas.get(1, 2), Some(RED));
        assert_eq!(canvas.get(2, 1), Some(Rgb::BLACK));
    }

    #[test]
    fn test_fill_circle_covers_center_and_axis() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.fill_circle(10, 10, 3, RED);
        assert_eq!(canvas.get(10, 10), Some(RED));
        assert_eq!(canvas.get(13, 10), Some(RED));
        assert_eq!(canvas.get(10, 7), Some(RED));
        assert_eq!(canvas.get(14, 10), Some(Rgb::BLACK));
        // Corner of the bounding box is outside the disc.
        assert_eq!(canvas.get(13, 13), Some(Rgb::BLACK));
    }

    #[test]
    fn test_stroke_circle_leaves_center_empty() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.stroke_circle(10, 10, 4, BLUE);
        assert_eq!(canvas.get(10, 10), Some(Rgb::BLACK));
        assert_eq!(canvas.get(14, 10), Some(BLUE));
        assert_eq!(canvas.get(6, 10), Some(BLUE));
        assert_eq!(canvas.get(10, 14), Some(BLUE));
    }

    #[test]
    fn test_circle_partly_off_canvas() {
        let mut canvas = PixelCanvas::new(5, 5);
        canvas.fill_circle(-1, -1, 3, RED);
        canvas.stroke_circle(100, 100, 3, RED);
        assert_eq!(canvas.get(0, 0), Some(RED));
        assert_eq!(canvas.get(4, 4), Some(Rgb::BLACK));
    }

    #[test]
    fn test_huge_circle_only_visits_canvas() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_circle(5, 5, 20_000, RED);
        assert!(canvas.rows().flatten().all(|&p| p == RED));

        let mut canvas = PixelCanvas::new(10, 10);
        canvas.stroke_circle(5, 5, 20_000, BLUE);
        assert!(canvas.rows().flatten().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_downsample_samples_block_centers() {
        let mut canvas = PixelCanvas::new(6, 6);
        canvas.fill_rect(3, 0, 3, 3, RED);
        canvas.fill_rect(0, 3, 3, 3, BLUE);
        let small = canvas.downsample(3);
        assert_eq!((small.width(), small.height()), (2, 2));
        assert_eq!(small.get(0, 0), Some(Rgb::BLACK));
        assert_eq!(small.get(1, 0), Some(RED));
        assert_eq!(small.get(0, 1), Some(BLUE));
    }

    #[test]
    fn test_rows_iterates_top_down() {
        let mut canvas = PixelCanvas::new(2, 3);
        canvas.fill_rect(0, 2, 2, 1, RED);
        let rows: Vec<&[Rgb]> = canvas.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[RED, RED]);
    }
}
