//! Camera drift and top-down projection.
//!
//! Both functions are pure: the same `(parcel, iteration)` always yields the
//! same screen rectangle.

use crate::types::{Parcel, CAMERA_AMPLITUDE, CAMERA_ORIGIN, CAMERA_PERIOD_X, CAMERA_PERIOD_Y};

/// Screen-space translation applied to every parcel in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraOffset {
    pub x: i32,
    pub y: i32,
}

/// Screen rectangle handed to the surface. `w`/`h` may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl ScreenRect {
    pub const fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }
}

/// Camera offset for frame `iteration`.
///
/// Fractions are truncated toward zero, matching an integer pixel grid.
pub fn camera_offset(iteration: u64) -> CameraOffset {
    let t = iteration as f64;
    let x = CAMERA_ORIGIN + (t / CAMERA_PERIOD_X).sin() * CAMERA_AMPLITUDE;
    let y = CAMERA_ORIGIN + (t / CAMERA_PERIOD_Y).cos() * CAMERA_AMPLITUDE;
    CameraOffset {
        x: x as i32,
        y: y as i32,
    }
}

/// Project a parcel onto the screen: x from the x bound, screen y from the z
/// bound (top-down), size from width and depth.
pub fn project(parcel: &Parcel, offset: CameraOffset) -> ScreenRect {
    ScreenRect {
        x: parcel.x1 as i64 + offset.x as i64,
        y: parcel.z1 as i64 + offset.y as i64,
        w: parcel.width(),
        h: parcel.depth(),
    }
}
