//! MapView: maps a composited [`Canvas`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The canvas is scaled down uniformly to fit the viewport and centered.
//! Each terminal cell shows two canvas "rows" through a half-block glyph, which
//! roughly squares up pixels on terminals whose glyphs are twice as tall as
//! they are wide. The bottom row is reserved for the status line.

use crate::canvas::Canvas;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Color around the letterboxed map.
const MARGIN: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the status line reports about ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IngestStatusView {
    #[default]
    Pending,
    Loaded {
        parcels: usize,
        skipped: usize,
    },
    Failed {
        message: String,
    },
}

/// Where the scaled canvas lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MapLayout {
    origin_x: u16,
    origin_y: u16,
    cols: u16,
    /// Half-cell rows covered by the map.
    half_rows: u32,
    /// Canvas pixels per half cell along both axes.
    scale: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MapView;

impl MapView {
    pub fn new() -> Self {
        Self
    }

    /// Render the canvas and status line into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(
        &self,
        canvas: &Canvas,
        status: &IngestStatusView,
        frame: u64,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::pixels(MARGIN, MARGIN));

        if let Some(layout) = layout(canvas, viewport) {
            draw_map(canvas, layout, fb);
        }
        if viewport.height > 0 {
            draw_status(fb, status, frame, viewport.height - 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        canvas: &Canvas,
        status: &IngestStatusView,
        frame: u64,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, status, frame, viewport, &mut fb);
        fb
    }
}

fn layout(canvas: &Canvas, viewport: Viewport) -> Option<MapLayout> {
    let avail_cols = viewport.width as u32;
    let avail_half_rows = viewport.height.saturating_sub(1) as u32 * 2;
    if avail_cols == 0 || avail_half_rows == 0 || canvas.width() == 0 || canvas.height() == 0 {
        return None;
    }

    let scale = f64::max(
        canvas.width() as f64 / avail_cols as f64,
        canvas.height() as f64 / avail_half_rows as f64,
    );
    let cols = ((canvas.width() as f64 / scale).ceil() as u32).min(avail_cols);
    let half_rows = ((canvas.height() as f64 / scale).ceil() as u32).min(avail_half_rows);
    let rows = half_rows.div_ceil(2);

    Some(MapLayout {
        origin_x: ((avail_cols - cols) / 2) as u16,
        origin_y: ((avail_half_rows / 2 - rows) / 2) as u16,
        cols: cols as u16,
        half_rows,
        scale,
    })
}

/// Canvas pixel range `[lo, hi)` shown by half-cell `index`; never empty.
fn block(index: u32, scale: f64) -> (u32, u32) {
    let lo = (index as f64 * scale).floor() as u32;
    let hi = ((index + 1) as f64 * scale).floor() as u32;
    (lo, hi.max(lo + 1))
}

fn draw_map(canvas: &Canvas, layout: MapLayout, fb: &mut FrameBuffer) {
    let sample = |col: u32, half_row: u32| -> Rgb {
        if half_row >= layout.half_rows {
            return MARGIN;
        }
        let (x0, x1) = block(col, layout.scale);
        let (y0, y1) = block(half_row, layout.scale);
        canvas.sample_block(x0, y0, x1, y1)
    };

    for row in 0..layout.half_rows.div_ceil(2) {
        for col in 0..layout.cols as u32 {
            let upper = sample(col, row * 2);
            let lower = sample(col, row * 2 + 1);
            fb.set(
                layout.origin_x + col as u16,
                layout.origin_y + row as u16,
                Cell::pixels(upper, lower),
            );
        }
    }
}

fn draw_status(fb: &mut FrameBuffer, status: &IngestStatusView, frame: u64, y: u16) {
    let base = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(24, 24, 32));
    let label = base.bold();
    let alert = CellStyle::new(Rgb::new(255, 110, 110), base.bg).bold();

    fb.fill_row(0, y, Cell { ch: ' ', style: base });

    let x = match status {
        IngestStatusView::Pending => fb.put_str(1, y, "fetching parcels...", base),
        IngestStatusView::Loaded { parcels, skipped } => {
            let x = fb.put_str(1, y, &parcels.to_string(), label);
            let x = fb.put_str(x, y, " parcels", base);
            if *skipped > 0 {
                let x = fb.put_str(x, y, ", ", base);
                let x = fb.put_str(x, y, &skipped.to_string(), alert);
                fb.put_str(x, y, " skipped", base)
            } else {
                x
            }
        }
        IngestStatusView::Failed { message } => {
            let x = fb.put_str(1, y, "fetch failed: ", alert);
            fb.put_str(x, y, message, base)
        }
    };

    let right = format!("frame {frame}  q quit");
    let width = right.chars().count() as u16;
    let start = fb.width().saturating_sub(width + 1);
    if start > x {
        fb.put_str(start, y, &right, base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScreenRect, Surface};

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn one_to_one_layout_maps_two_rows_per_cell() {
        // 8x6 canvas, 8x4 viewport: 3 map rows = 6 half rows, scale 1.
        let mut canvas = Canvas::new(8, 6);
        canvas.fill_rect(ScreenRect::new(0, 0, 1, 1), RED);

        let fb = MapView::new().render(&canvas, &IngestStatusView::Pending, 0, Viewport::new(8, 4));

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.upper(), RED);
        assert_eq!(cell.lower(), canvas.background());
        assert_eq!(fb.get(1, 0).unwrap().upper(), canvas.background());
    }

    #[test]
    fn downscaling_keeps_thin_features() {
        // 800x600 into 40x16 (15 map rows): scale 20 pixels per half cell.
        let mut canvas = Canvas::new(800, 600);
        canvas.outline_rect(ScreenRect::new(395, 0, 2, 600), RED);

        let fb = MapView::new().render(&canvas, &IngestStatusView::Pending, 0, Viewport::new(40, 16));

        let hits = (0..fb.width())
            .filter(|x| fb.get(*x, 5).unwrap().upper() == RED)
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn wide_viewport_letterboxes_horizontally() {
        let canvas = Canvas::new(8, 6);
        // 20 columns available but the canvas only needs 8 at scale 1.
        let fb = MapView::new().render(&canvas, &IngestStatusView::Pending, 0, Viewport::new(20, 4));

        assert_eq!(fb.get(5, 0).unwrap().upper(), MARGIN);
        assert_eq!(fb.get(6, 0).unwrap().upper(), canvas.background());
        assert_eq!(fb.get(13, 0).unwrap().upper(), canvas.background());
        assert_eq!(fb.get(14, 0).unwrap().upper(), MARGIN);
    }

    #[test]
    fn status_line_reports_counts() {
        let canvas = Canvas::new(8, 6);
        let status = IngestStatusView::Loaded {
            parcels: 12,
            skipped: 3,
        };
        let fb = MapView::new().render(&canvas, &status, 42, Viewport::new(60, 4));
        let line = fb.row_text(3);
        assert!(line.contains("12 parcels, 3 skipped"), "{line}");
        assert!(line.contains("frame 42"), "{line}");
    }

    #[test]
    fn status_line_reports_failure() {
        let canvas = Canvas::new(8, 6);
        let status = IngestStatusView::Failed {
            message: "HTTP failure status code: 404".to_string(),
        };
        let fb = MapView::new().render(&canvas, &status, 0, Viewport::new(60, 4));
        assert!(fb.row_text(3).contains("fetch failed: HTTP failure status code: 404"));
    }

    #[test]
    fn tiny_viewports_do_not_panic() {
        let canvas = Canvas::new(800, 600);
        for (w, h) in [(0, 0), (1, 1), (0, 5), (5, 0), (1, 2), (3, 2)] {
            let fb = MapView::new().render(&canvas, &IngestStatusView::Pending, 0, Viewport::new(w, h));
            assert_eq!((fb.width(), fb.height()), (w, h));
        }
    }
}
