//! Core types module - shared data structures and constants
//!
//! This module defines the parcel entity, colors, and the named constants that
//! make up the observable rendering contract. Everything here is plain data
//! with no external dependencies, so it can be used by the store, the
//! ingestion pipeline and the terminal layer alike.
//!
//! # Canvas
//!
//! Frames are composited into a logical pixel canvas before being presented:
//!
//! - **Width**: 800 pixels
//! - **Height**: 600 pixels
//!
//! # Camera Animation
//!
//! The camera drifts along two decoupled oscillations driven by the frame
//! counter `i`:
//!
//! | Axis | Formula |
//! |------|---------|
//! | x | `225 + 128 * sin(i / 23)` |
//! | y | `225 + 128 * cos(i / 31)` |
//!
//! # Examples
//!
//! ```
//! use parcel_grid_types::{Parcel, CANVAS_WIDTH};
//!
//! let p = Parcel::new(Some(1), [0, 0, 0], [10, 5, 20]);
//! assert_eq!(p.width(), 10);
//! assert_eq!(p.height(), 5);
//! assert_eq!(p.depth(), 20);
//!
//! // Inverted boxes are legal.
//! let inverted = Parcel::new(None, [5, 0, 0], [2, 0, 0]);
//! assert_eq!(inverted.width(), -3);
//!
//! assert_eq!(CANVAS_WIDTH, 800);
//! ```

/// Canvas width in logical pixels.
pub const CANVAS_WIDTH: u32 = 800;

/// Canvas height in logical pixels.
pub const CANVAS_HEIGHT: u32 = 600;

/// Frame period in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u64 = 16;

/// Resting position of the camera on both axes, in pixels.
pub const CAMERA_ORIGIN: f64 = 225.0;

/// Peak camera displacement from [`CAMERA_ORIGIN`], in pixels.
pub const CAMERA_AMPLITUDE: f64 = 128.0;

/// Frames per radian of horizontal camera drift.
pub const CAMERA_PERIOD_X: f64 = 23.0;

/// Frames per radian of vertical camera drift.
pub const CAMERA_PERIOD_Y: f64 = 31.0;

/// Frame clear color.
pub const BACKGROUND: Rgb = Rgb::new(32, 32, 32);

/// Fill and outline color for every parcel.
pub const PARCEL_COLOR: Rgb = Rgb::new(255, 0, 192);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An axis-aligned box region defined by two corners.
///
/// Bounds are stored verbatim; nothing requires `x2 >= x1` (and likewise for
/// the other axes), so extents may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parcel {
    pub id: Option<i64>,
    pub x1: i32,
    pub y1: i32,
    pub z1: i32,
    pub x2: i32,
    pub y2: i32,
    pub z2: i32,
}

impl Parcel {
    /// Build a parcel from its `[x, y, z]` corners.
    pub const fn new(id: Option<i64>, min: [i32; 3], max: [i32; 3]) -> Self {
        Self {
            id,
            x1: min[0],
            y1: min[1],
            z1: min[2],
            x2: max[0],
            y2: max[1],
            z2: max[2],
        }
    }

    /// Extent along x (`x2 - x1`).
    #[inline]
    pub const fn width(&self) -> i64 {
        self.x2 as i64 - self.x1 as i64
    }

    /// Extent along y (`y2 - y1`).
    #[inline]
    pub const fn height(&self) -> i64 {
        self.y2 as i64 - self.y1 as i64
    }

    /// Extent along z (`z2 - z1`).
    #[inline]
    pub const fn depth(&self) -> i64 {
        self.z2 as i64 - self.z1 as i64
    }
}
