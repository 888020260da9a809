//! Math utility functions.

use euclid::{default::Vector2D, Angle};
use num_traits::Float;

use crate::{Component, Error, Result};

pub type Vector = Vector2D<Component>;

/// Linearly interpolate from `a` to `b` using `t` as the progress between
/// them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Check that `value` is a byte value.
pub fn channel(name: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::OutOfRange {
        name,
        value: value.into(),
        min: 0,
        max: u8::MAX.into(),
    })
}

/// Scale a normalized component to `[0, 255]`, rounding to the nearest
/// integer and clamping.
pub fn round_to_byte(value: Component) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Split a vector into its angle from the positive x axis, in `[0, 2pi)`,
/// and its length.
pub fn to_polar(v: Vector) -> (Angle<Component>, Component) {
    (v.angle_from_x_axis().positive(), v.length())
}

/// Build a vector from an angle and a radius.
pub fn from_polar(angle: Angle<Component>, radius: Component) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(radius * cos, radius * sin)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn channel_range() {
        assert_eq!(channel("alpha", 255), Ok(255));
        assert!(channel("alpha", 256).is_err());
        assert!(channel("alpha", -1).is_err());
    }

    #[test]
    fn round_to_byte_clamps() {
        assert_eq!(round_to_byte(0.5), 128);
        assert_eq!(round_to_byte(1.5), 255);
        assert_eq!(round_to_byte(-0.5), 0);
    }

    #[test]
    fn polar_round_trip() {
        let (angle, radius) = to_polar(Vector::new(0.0, -2.0));
        assert_abs_diff_eq!(angle.get(), 1.5 * std::f32::consts::PI as Component, epsilon = 1e-5);
        assert_abs_diff_eq!(radius, 2.0);

        let v = from_polar(angle, radius);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(v.y, -2.0, epsilon = 1e-5);
    }
}
