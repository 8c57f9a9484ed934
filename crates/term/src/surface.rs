//! TerminalSurface: the [`Surface`] the frame loop draws on.
//!
//! Drawing goes to a [`Canvas`]; `present` downsamples the canvas through
//! [`MapView`] and flushes the result with [`TerminalRenderer`].

use std::io::{self, Write};

use anyhow::Result;

use crate::canvas::Canvas;
use crate::config::DisplayConfig;
use crate::core::{ScreenRect, Surface};
use crate::fb::FrameBuffer;
use crate::map_view::{IngestStatusView, MapView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Rgb;

pub struct TerminalSurface<W: Write = io::Stdout> {
    canvas: Canvas,
    view: MapView,
    fb: FrameBuffer,
    renderer: TerminalRenderer<W>,
    viewport: Viewport,
    status: IngestStatusView,
    presented: u64,
}

impl TerminalSurface<io::Stdout> {
    pub fn new(config: &DisplayConfig) -> Self {
        Self::with_renderer(config, TerminalRenderer::new())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn with_renderer(config: &DisplayConfig, renderer: TerminalRenderer<W>) -> Self {
        let viewport = Viewport::new(80, 24);
        Self {
            canvas: Canvas::new(config.canvas_width, config.canvas_height),
            view: MapView::new(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            renderer,
            viewport,
            status: IngestStatusView::default(),
            presented: 0,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Terminal size to present into from the next frame on.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.renderer.invalidate();
        }
    }

    pub fn set_status(&mut self, status: IngestStatusView) {
        self.status = status;
    }

    pub fn status(&self) -> &IngestStatusView {
        &self.status
    }

    /// Repaint every cell on the next present.
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The frame currently on screen.
    pub fn on_screen(&self) -> Option<&FrameBuffer> {
        self.renderer.last_frame()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    type Error = anyhow::Error;

    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb) {
        self.canvas.fill_rect(rect, color);
    }

    fn outline_rect(&mut self, rect: ScreenRect, color: Rgb) {
        self.canvas.outline_rect(rect, color);
    }

    fn present(&mut self) -> Result<()> {
        self.view.render_into(
            &self.canvas,
            &self.status,
            self.presented,
            self.viewport,
            &mut self.fb,
        );
        self.renderer.draw_swap(&mut self.fb)?;
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RenderLoop;
    use crate::types::{Parcel, PARCEL_COLOR};

    #[test]
    fn frame_reaches_the_writer() {
        let config = DisplayConfig::default();
        let mut surface =
            TerminalSurface::with_renderer(&config, TerminalRenderer::with_writer(Vec::<u8>::new()));
        surface.set_viewport(Viewport::new(80, 31));
        surface.set_status(IngestStatusView::Loaded {
            parcels: 1,
            skipped: 0,
        });

        // A large parcel so it survives downscaling to 80 columns.
        let parcels = [Parcel::new(Some(1), [0, 0, 0], [100, 0, 100])];
        let mut rl = RenderLoop::new();
        rl.frame(&mut surface, &parcels).unwrap();

        assert_eq!(
            surface.status(),
            &IngestStatusView::Loaded {
                parcels: 1,
                skipped: 0
            }
        );
        assert_eq!(surface.canvas().presented(), 0);
        assert_eq!(surface.canvas().pixel(225, 353), Some(PARCEL_COLOR));

        let shown = surface.on_screen().unwrap();
        assert_eq!((shown.width(), shown.height()), (80, 31));
        assert!(shown.cells().iter().any(|c| c.upper() == PARCEL_COLOR));
        assert!(shown.row_text(30).contains("1 parcels"));
    }
}
