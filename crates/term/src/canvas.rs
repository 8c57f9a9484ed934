//! In-memory RGB raster implementing [`Surface`].
//!
//! Rectangles are rasterized over the span between `x` and `x + w` (likewise
//! for `y`/`h`), whichever way round the extent points, so an inverted parcel
//! covers the same pixels as its upright mirror. A zero extent covers
//! nothing. Everything is clipped to the canvas.

use std::convert::Infallible;

use crate::core::{ScreenRect, Surface};
use crate::types::{Rgb, BACKGROUND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    /// Color of the most recent clear.
    background: Rgb,
    presented: u64,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width as usize * height as usize],
            background: BACKGROUND,
            presented: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Count of pixels not equal to the background.
    pub fn painted(&self) -> usize {
        self.pixels.iter().filter(|p| **p != self.background).count()
    }

    /// First non-background pixel in `[x0, x1) x [y0, y1)`, scanning rows top
    /// to bottom, or the background if the block is empty.
    pub fn sample_block(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> Rgb {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                let p = self.pixels[row + x as usize];
                if p != self.background {
                    return p;
                }
            }
        }
        self.background
    }

    /// Fill the half-open box `[x0, x1) x [y0, y1)` after clipping.
    fn paint(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb) {
        let x0 = x0.clamp(0, self.width as i64) as usize;
        let x1 = x1.clamp(0, self.width as i64) as usize;
        let y0 = y0.clamp(0, self.height as i64) as usize;
        let y1 = y1.clamp(0, self.height as i64) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let stride = self.width as usize;
        for y in y0..y1 {
            self.pixels[y * stride + x0..y * stride + x1].fill(color);
        }
    }
}

/// Normalized `[lo, hi)` covered by `origin` and `origin + extent`.
fn span(origin: i64, extent: i64) -> (i64, i64) {
    let end = origin.saturating_add(extent);
    (origin.min(end), origin.max(end))
}

impl Surface for Canvas {
    type Error = Infallible;

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.background = color;
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb) {
        let (x0, x1) = span(rect.x, rect.w);
        let (y0, y1) = span(rect.y, rect.h);
        self.paint(x0, y0, x1, y1, color);
    }

    fn outline_rect(&mut self, rect: ScreenRect, color: Rgb) {
        let (x0, x1) = span(rect.x, rect.w);
        let (y0, y1) = span(rect.y, rect.h);
        if x0 == x1 || y0 == y1 {
            return;
        }
        self.paint(x0, y0, x1, y0 + 1, color);
        self.paint(x0, y1 - 1, x1, y1, color);
        self.paint(x0, y0, x0 + 1, y1, color);
        self.paint(x1 - 1, y0, x1, y1, color);
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.presented += 1;
        Ok(())
    }
}
