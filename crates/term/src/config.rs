//! Display configuration.

use std::env;
use std::time::Duration;

use crate::types::{CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Logical canvas size in pixels.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Target time between frames.
    pub frame_period: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            frame_period: Duration::from_millis(FRAME_MS),
        }
    }
}

impl DisplayConfig {
    /// Create from environment variables.
    ///
    /// - `PARCEL_GRID_WIDTH` / `PARCEL_GRID_HEIGHT`: canvas size (default 800x600)
    /// - `PARCEL_GRID_FRAME_MS`: frame period (default 16)
    ///
    /// Zero or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
        };
        let defaults = Self::default();

        Self {
            canvas_width: positive("PARCEL_GRID_WIDTH")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(defaults.canvas_width),
            canvas_height: positive("PARCEL_GRID_HEIGHT")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(defaults.canvas_height),
            frame_period: positive("PARCEL_GRID_FRAME_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.frame_period),
        }
    }
}
