//! Geometry and rendering settings shared by the picker controls.

use euclid::default::Size2D;

use crate::RgbColor;

/// Size in pixels of the triangular handle markers drawn on gradient tracks.
/// Positions are inset by half a marker at both ends of an axis.
pub const MARKER_SIZE: i32 = 7;

/// Number of hue stops around the rim of the color wheel.
pub const WHEEL_TESSELLATION: usize = 80;

/// Settings for a picker session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Size of the handle markers on every gradient track.
    pub marker_size: i32,
    /// Number of hue stops used to draw the wheel.
    pub wheel_tessellation: usize,
    /// Bounds of the color wheel in pixels.
    pub wheel_size: Size2D<i32>,
    /// Opaque color that translucent gradients are composited over.
    pub backdrop: RgbColor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_size: MARKER_SIZE,
            wheel_tessellation: WHEEL_TESSELLATION,
            wheel_size: Size2D::new(150, 150),
            backdrop: RgbColor::rgb(240, 240, 240),
        }
    }
}
