//! Conversions between [`RgbColor`] and [`HsvColor`].
//!
//! Both directions land on integer grids (8-bit channels one way, whole
//! degrees and percentages the other), so a round trip is only approximately
//! stable. Canonical colors (black, white, primaries and secondaries) survive
//! exactly.
//!
//! ```rust
//! use tincture::{HsvColor, RgbColor};
//! let hsv = RgbColor::YELLOW.to_hsv();
//! assert_eq!(hsv, HsvColor::new(60, 100, 100).unwrap());
//! assert_eq!(hsv.to_rgb(), RgbColor::YELLOW);
//! ```

use crate::{HsvColor, Result, RgbColor};

/// How a normalized component is mapped back onto its integer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quantize {
    /// Drop the fractional part. Bit-compatible with the classic picker.
    #[default]
    Truncate,
    /// Round to the nearest integer, halves away from zero.
    Round,
}

impl Quantize {
    fn apply(self, value: f64) -> f64 {
        match self {
            Quantize::Truncate => value.trunc(),
            Quantize::Round => value.round(),
        }
    }
}

impl RgbColor {
    /// Convert this color to the HSV notation. Achromatic colors get a hue
    /// and saturation of 0.
    pub fn to_hsv(&self) -> HsvColor {
        let [hue, saturation, value] = util::rgb_to_hsv(self.to_array().map(f64::from));
        HsvColor::new_unchecked(hue as u16, saturation as u8, value as u8)
    }
}

impl HsvColor {
    /// Convert this color to RGB, truncating each channel.
    pub fn to_rgb(&self) -> RgbColor {
        self.to_rgb_with(Quantize::Truncate)
    }

    /// Convert this color to RGB with the given quantization.
    pub fn to_rgb_with(&self, quantize: Quantize) -> RgbColor {
        let [red, green, blue] =
            util::hsv_to_rgb(self.to_array().map(f64::from)).map(|c| {
                quantize.apply(c * 255.0).clamp(0.0, 255.0) as u8
            });
        RgbColor::new_unchecked(red, green, blue)
    }
}

/// Convert range-checked RGB channels to HSV channels.
pub fn rgb_to_hsv(red: i32, green: i32, blue: i32) -> Result<(i32, i32, i32)> {
    let [h, s, v] = RgbColor::new(red, green, blue)?.to_hsv().to_array();
    Ok((h, s, v))
}

/// Convert range-checked HSV channels to RGB channels, truncating.
pub fn hsv_to_rgb(hue: i32, saturation: i32, value: i32) -> Result<(i32, i32, i32)> {
    let [r, g, b] = HsvColor::new(hue, saturation, value)?.to_rgb().to_array();
    Ok((r, g, b))
}

// Always computed in double precision so truncation lands on the same
// integers regardless of the `f64` feature.
mod util {
    /// Convert 8-bit RGB channels to hue in `[0, 360)` and saturation and
    /// value in `[0, 100]`, each truncated.
    pub fn rgb_to_hsv(from: [f64; 3]) -> [f64; 3] {
        let [red, green, blue] = from.map(|c| c / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        if max == 0.0 || delta == 0.0 {
            return [0.0, 0.0, (max * 100.0).trunc()];
        }

        let saturation = delta / max;

        let sector = if red == max {
            (green - blue) / delta
        } else if green == max {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };

        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        [
            hue.trunc(),
            (saturation * 100.0).trunc(),
            (max * 100.0).trunc(),
        ]
    }

    /// Convert HSV channels to normalized RGB components in `[0, 1]`.
    pub fn hsv_to_rgb(from: [f64; 3]) -> [f64; 3] {
        let hue = from[0] % 360.0;
        let saturation = from[1] / 100.0;
        let value = from[2] / 100.0;

        if saturation == 0.0 {
            return [value; 3];
        }

        let position = hue / 60.0;
        let sector = position.floor();
        let fraction = position - sector;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        match sector as u8 % 6 {
            0 => [value, t, p],
            1 => [q, value, p],
            2 => [p, value, t],
            3 => [p, q, value],
            4 => [t, p, value],
            _ => [value, p, q],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const CANONICAL: [(RgbColor, [i32; 3]); 8] = [
        (RgbColor::BLACK, [0, 0, 0]),
        (RgbColor::WHITE, [0, 0, 100]),
        (RgbColor::RED, [0, 100, 100]),
        (RgbColor::GREEN, [120, 100, 100]),
        (RgbColor::BLUE, [240, 100, 100]),
        (RgbColor::YELLOW, [60, 100, 100]),
        (RgbColor::CYAN, [180, 100, 100]),
        (RgbColor::MAGENTA, [300, 100, 100]),
    ];

    #[test]
    fn canonical_colors_convert_exactly() {
        for (rgb, hsv) in CANONICAL {
            assert_eq!(rgb.to_hsv().to_array(), hsv, "{rgb}");
            assert_eq!(rgb.to_hsv().to_rgb(), rgb, "{rgb}");
        }
    }

    #[test]
    fn grays_have_no_saturation() {
        for c in 0..=255u8 {
            let hsv = RgbColor::rgb(c, c, c).to_hsv();
            assert_eq!(hsv.saturation, 0);
            assert_eq!(hsv.hue, 0);
        }
    }

    #[test]
    fn zero_saturation_is_gray_for_any_hue() {
        for hue in [0, 90, 200, 360] {
            let rgb = HsvColor::new(hue, 0, 50).unwrap().to_rgb();
            assert_eq!(rgb, RgbColor::rgb(127, 127, 127));
        }
    }

    #[test]
    fn hue_360_wraps_to_red() {
        assert_eq!(HsvColor::new(360, 100, 100).unwrap().to_rgb(), RgbColor::RED);
    }

    #[test]
    fn truncation_versus_rounding() {
        let hsv = HsvColor::new(120, 50, 50).unwrap();
        assert_eq!(hsv.to_rgb(), RgbColor::rgb(63, 127, 63));
        assert_eq!(hsv.to_rgb_with(Quantize::Round), RgbColor::rgb(64, 128, 64));
    }

    #[test]
    fn sectors() {
        let rgb = |h| HsvColor::new(h, 100, 100).unwrap().to_rgb();
        assert_eq!(rgb(30), RgbColor::rgb(255, 127, 0));
        assert_eq!(rgb(90), RgbColor::rgb(127, 255, 0));
        assert_eq!(rgb(150), RgbColor::rgb(0, 255, 127));
        assert_eq!(rgb(210), RgbColor::rgb(0, 127, 255));
        assert_eq!(rgb(270), RgbColor::rgb(127, 0, 255));
        assert_eq!(rgb(330), RgbColor::rgb(255, 0, 127));
    }

    #[test]
    fn negative_hue_is_lifted() {
        // Red is the max channel and blue exceeds green.
        let hsv = RgbColor::rgb(255, 0, 128).to_hsv();
        assert_eq!(hsv.to_array(), [329, 100, 100]);
    }

    #[test]
    fn round_trip_stays_within_grid_error() {
        // Saturation and value only have 101 steps, so a round trip can
        // move a channel by several units. 7 is the exhaustive worst case
        // when truncating and 6 when rounding.
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let rgb = RgbColor::rgb(r, g, b);
                    let hsv = rgb.to_hsv();
                    assert_channels_near!(hsv.to_rgb(), rgb, 7);
                    assert_channels_near!(hsv.to_rgb_with(Quantize::Round), rgb, 6);
                }
            }
        }
    }

    #[test]
    fn free_functions_check_ranges() {
        assert_eq!(rgb_to_hsv(255, 0, 0), Ok((0, 100, 100)));
        assert_eq!(hsv_to_rgb(120, 100, 100), Ok((0, 255, 0)));
        assert!(matches!(
            rgb_to_hsv(0, 0, 300),
            Err(Error::OutOfRange { name: "blue", .. })
        ));
        assert!(matches!(
            hsv_to_rgb(0, 0, 101),
            Err(Error::OutOfRange { name: "value", .. })
        ));
    }
}
