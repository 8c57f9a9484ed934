//! The drawing capability a frame is rendered onto.

use std::convert::Infallible;

use crate::camera::ScreenRect;
use crate::types::Rgb;

/// Minimal 2D surface: clear, fill, outline, present.
///
/// Rectangles are passed exactly as projected. Implementations decide what a
/// negative or zero extent looks like; they must not panic on one.
pub trait Surface {
    type Error;

    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb);
    fn outline_rect(&mut self, rect: ScreenRect, color: Rgb);

    /// Make the composited frame visible.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Rgb),
    Fill(ScreenRect, Rgb),
    Outline(ScreenRect, Rgb),
    Present,
}

/// Surface that records every command instead of drawing.
///
/// Useful for headless runs and for asserting on exactly what a frame asked
/// the surface to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the most recent `Present`, excluding it.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let end = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Present)
            .unwrap_or(self.commands.len());
        let start = self.commands[..end]
            .iter()
            .rposition(|c| *c == DrawCommand::Present)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..end]
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb) {
        self.commands.push(DrawCommand::Fill(rect, color));
    }

    fn outline_rect(&mut self, rect: ScreenRect, color: Rgb) {
        self.commands.push(DrawCommand::Outline(rect, color));
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
