//! Per-frame driver state.
//!
//! The loop carries a single piece of state across frames, the frame counter.
//! Everything else a frame needs (the parcels) is passed in, so a frame never
//! waits on ingestion and always renders whatever the grid held when the
//! snapshot was taken, including nothing.

use crate::camera::{camera_offset, project, CameraOffset};
use crate::surface::Surface;
use crate::types::{Parcel, BACKGROUND, PARCEL_COLOR};

/// What a completed frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame counter value the frame was rendered with.
    pub iteration: u64,
    pub offset: CameraOffset,
    /// Number of parcels drawn.
    pub drawn: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RenderLoop {
    iteration: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a given frame counter.
    pub fn starting_at(iteration: u64) -> Self {
        Self { iteration }
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Render and present one frame.
    ///
    /// Parcels are drawn in slice order, so later parcels end up on top. The
    /// counter only advances once the surface has presented.
    pub fn frame<S: Surface>(
        &mut self,
        surface: &mut S,
        parcels: &[Parcel],
    ) -> Result<FrameStats, S::Error> {
        let offset = camera_offset(self.iteration);

        surface.clear(BACKGROUND);
        for parcel in parcels {
            let rect = project(parcel, offset);
            surface.fill_rect(rect, PARCEL_COLOR);
            surface.outline_rect(rect, PARCEL_COLOR);
        }
        surface.present()?;

        let stats = FrameStats {
            iteration: self.iteration,
            offset,
            drawn: parcels.len(),
        };
        self.iteration = self.iteration.wrapping_add(1);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ScreenRect;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn empty_grid_still_clears_and_presents() {
        let mut surface = RecordingSurface::default();
        let mut rl = RenderLoop::new();
        let stats = rl.frame(&mut surface, &[]).unwrap();

        assert_eq!(stats.drawn, 0);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Clear(BACKGROUND), DrawCommand::Present]
        );
        assert_eq!(rl.iteration(), 1);
    }

    #[test]
    fn each_parcel_is_filled_then_outlined() {
        let parcels = [Parcel::new(Some(1), [0, 0, 0], [10, 5, 20])];
        let mut surface = RecordingSurface::default();
        let mut rl = RenderLoop::new();
        rl.frame(&mut surface, &parcels).unwrap();

        let rect = ScreenRect::new(225, 353, 10, 20);
        assert_eq!(
            surface.last_frame(),
            &[
                DrawCommand::Clear(BACKGROUND),
                DrawCommand::Fill(rect, PARCEL_COLOR),
                DrawCommand::Outline(rect, PARCEL_COLOR),
            ]
        );
    }

    #[test]
    fn counter_drives_the_camera() {
        let parcels = [Parcel::new(None, [0, 0, 0], [1, 1, 1])];
        let mut surface = RecordingSurface::default();
        let mut rl = RenderLoop::starting_at(1);
        let stats = rl.frame(&mut surface, &parcels).unwrap();

        assert_eq!(stats.iteration, 1);
        assert_eq!(stats.offset, camera_offset(1));
        assert_eq!(rl.iteration(), 2);
    }

    struct FailingSurface;

    impl Surface for FailingSurface {
        type Error = &'static str;
        fn clear(&mut self, _: crate::types::Rgb) {}
        fn fill_rect(&mut self, _: ScreenRect, _: crate::types::Rgb) {}
        fn outline_rect(&mut self, _: ScreenRect, _: crate::types::Rgb) {}
        fn present(&mut self) -> Result<(), &'static str> {
            Err("gone")
        }
    }

    #[test]
    fn failed_present_does_not_advance_counter() {
        let mut rl = RenderLoop::new();
        assert_eq!(rl.frame(&mut FailingSurface, &[]), Err("gone"));
        assert_eq!(rl.iteration(), 0);
    }
}
