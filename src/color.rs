//! The integer color models the picker works with: [`RgbColor`] with 8-bit
//! channels, [`HsvColor`] in the polar form shown by the wheel and the HSV
//! sliders, and [`Rgba`], an RGB color carrying a straight alpha channel.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for intermediate color math.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for intermediate color math.
pub type Component = f64;

tincture_macros::gen_model! {
    /// A color with red, green and blue channels in `[0, 255]`.
    pub struct RgbColor {
        /// The red channel.
        #[range(0, 255)]
        red: u8,
        /// The green channel.
        #[range(0, 255)]
        green: u8,
        /// The blue channel.
        #[range(0, 255)]
        blue: u8,
    }
}

tincture_macros::gen_model! {
    /// A color in the HSV notation: hue in degrees `[0, 360]`, saturation and
    /// value as percentages `[0, 100]`.
    pub struct HsvColor {
        /// The hue in degrees.
        #[range(0, 360)]
        hue: u16,
        /// The saturation as a percentage.
        #[range(0, 100)]
        saturation: u8,
        /// The value (brightness) as a percentage.
        #[range(0, 100)]
        value: u8,
    }
}

impl RgbColor {
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Create a color from 8-bit channels, which can never be out of range.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Attach an alpha channel to this color.
    pub const fn with_alpha(self, alpha: u8) -> Rgba {
        Rgba { color: self, alpha }
    }

    /// Return a copy with the red channel replaced.
    pub const fn with_red(self, red: u8) -> Self {
        Self { red, ..self }
    }

    /// Return a copy with the green channel replaced.
    pub const fn with_green(self, green: u8) -> Self {
        Self { green, ..self }
    }

    /// Return a copy with the blue channel replaced.
    pub const fn with_blue(self, blue: u8) -> Self {
        Self { blue, ..self }
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Default for HsvColor {
    fn default() -> Self {
        Self::new_unchecked(0, 0, 0)
    }
}

/// An [`RgbColor`] with a straight (not premultiplied) alpha channel, where
/// 0 is fully transparent and 255 fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// The color channels.
    pub color: RgbColor,
    /// The opacity.
    pub alpha: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = RgbColor::BLACK.with_alpha(0);

    /// Create a color from 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        RgbColor::rgb(red, green, blue).with_alpha(alpha)
    }

    /// Create a fully opaque color.
    pub const fn opaque(color: RgbColor) -> Self {
        color.with_alpha(u8::MAX)
    }

    /// Create a color from `i32` channels, failing when any of them is not
    /// a byte value.
    pub fn try_new(red: i32, green: i32, blue: i32, alpha: i32) -> crate::Result<Self> {
        let color = RgbColor::new(red, green, blue)?;
        let alpha = crate::math::channel("alpha", alpha)?;
        Ok(color.with_alpha(alpha))
    }
}

impl From<RgbColor> for Rgba {
    fn from(value: RgbColor) -> Self {
        Self::opaque(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn create_color_with_correct_channels() {
        let c = RgbColor::new(10, 20, 30).unwrap();
        assert_eq!((c.red, c.green, c.blue), (10, 20, 30));
        assert_eq!(c.to_array(), [10, 20, 30]);

        let c = HsvColor::new(360, 100, 0).unwrap();
        assert_eq!((c.hue, c.saturation, c.value), (360, 100, 0));
    }

    #[test]
    fn out_of_range_channels_are_rejected() {
        assert_eq!(
            RgbColor::new(0, 256, 0),
            Err(Error::OutOfRange {
                name: "green",
                value: 256,
                min: 0,
                max: 255,
            })
        );
        assert!(RgbColor::new(-1, 0, 0).is_err());
        assert!(HsvColor::new(361, 0, 0).is_err());
        assert!(HsvColor::new(0, 101, 0).is_err());
        assert!(HsvColor::new(0, 0, -1).is_err());
        assert!(Rgba::try_new(0, 0, 0, 300).is_err());
    }

    #[test]
    fn generated_limits() {
        assert_eq!(RgbColor::RED_MAX, 255);
        assert_eq!(HsvColor::HUE_MAX, 360);
        assert_eq!(HsvColor::SATURATION_MIN, 0);
        assert_eq!(HsvColor::VALUE_MAX, 100);
    }

    #[test]
    fn equality_is_structural() {
        let a = HsvColor::new(120, 50, 50).unwrap();
        let b = HsvColor::try_from([120, 50, 50]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, HsvColor::new(120, 50, 51).unwrap());
    }

    #[test]
    fn display() {
        assert_eq!(RgbColor::RED.to_string(), "(255, 0, 0)");
        assert_eq!(HsvColor::new(240, 100, 50).unwrap().to_string(), "(240, 100, 50)");
    }

    #[test]
    fn alpha_is_carried_separately() {
        let c = RgbColor::CYAN.with_alpha(128);
        assert_eq!(c.color, RgbColor::CYAN);
        assert_eq!(c.alpha, 128);
        assert_eq!(Rgba::from(RgbColor::CYAN).alpha, 255);
    }
}
