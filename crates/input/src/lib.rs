//! Terminal input module.
//!
//! Maps `crossterm` key events into [`ViewerCommand`]s for the frame loop.
//! The view is not interactive beyond quitting and forcing a redraw; the
//! camera is driven by the frame counter alone.

pub mod map;

pub use map::{map_key, ViewerCommand};
