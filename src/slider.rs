//! A color slider pairs a numeric value with a one handle gradient track.
//!
//! The track always works in `[0, 255]`; the numeric value lives in the
//! range of the slider's [`SliderMode`] and is converted with integer
//! arithmetic in both directions.

use crate::{
    interpolate::GradientFill,
    track::{Axis, GradientTrack},
    Error, Result,
};

/// What kind of quantity a slider edits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SliderMode {
    /// An 8-bit channel in `[0, 255]`.
    #[default]
    Channel,
    /// An angle in whole degrees, `[0, 360]`.
    Degrees,
    /// A percentage, `[0, 100]`.
    Total,
}

impl SliderMode {
    /// Largest value a slider in this mode accepts. The smallest is 0.
    pub fn maximum(self) -> i32 {
        match self {
            SliderMode::Channel => 255,
            SliderMode::Degrees => 360,
            SliderMode::Total => 100,
        }
    }

    /// Convert a track position in `[0, 255]` to a value in this mode.
    pub fn from_track(self, track: i32) -> i32 {
        track * self.maximum() / 255
    }

    /// Convert a value in this mode to a track position in `[0, 255]`.
    pub fn to_track(self, value: i32) -> i32 {
        value * 255 / self.maximum()
    }
}

/// The model behind one slider of the picker.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSlider {
    name: &'static str,
    mode: SliderMode,
    value: i32,
    track: GradientTrack,
    fill: GradientFill,
}

impl ColorSlider {
    /// Create a slider at value 0. `name` is used in range errors.
    pub fn new(name: &'static str, mode: SliderMode) -> Self {
        Self {
            name,
            mode,
            value: 0,
            track: GradientTrack::from_values(vec![0]),
            fill: GradientFill::default(),
        }
    }

    /// The name of the quantity this slider edits.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The mode of this slider.
    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    /// The numeric value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The handle track.
    pub fn track(&self) -> &GradientTrack {
        &self.track
    }

    /// The fill painted behind the track.
    pub fn fill(&self) -> &GradientFill {
        &self.fill
    }

    /// Replace the fill. Returns whether it changed.
    pub fn set_fill(&mut self, fill: GradientFill) -> bool {
        if self.fill == fill {
            return false;
        }
        self.fill = fill;
        true
    }

    /// Set the numeric value, failing when it is outside the range of the
    /// slider's mode. The handle follows. Returns whether the value changed.
    pub fn set_value(&mut self, value: i32) -> Result<bool> {
        let max = self.mode.maximum();
        if !(0..=max).contains(&value) {
            return Err(Error::OutOfRange {
                name: self.name,
                value: value.into(),
                min: 0,
                max: max.into(),
            });
        }

        if value == self.value {
            return Ok(false);
        }

        self.value = value;
        self.track.set_value(self.mode.to_track(value))?;

        Ok(true)
    }

    fn sync_from_track(&mut self, moved: bool) -> Result<Option<i32>> {
        if !moved {
            return Ok(None);
        }

        let value = self.mode.from_track(self.track.value()?.into());
        if value == self.value {
            return Ok(None);
        }

        self.value = value;
        Ok(Some(value))
    }

    /// Pointer pressed on the track. Returns the new value if it changed.
    pub fn press(&mut self, position: i32, axis: &Axis) -> Result<Option<i32>> {
        let moved = self.track.press(position, axis)?;
        self.sync_from_track(moved)
    }

    /// Pointer moved over the track. Returns the new value if it changed.
    pub fn motion(&mut self, position: i32, axis: &Axis) -> Result<Option<i32>> {
        let moved = self.track.motion(position, axis)?;
        self.sync_from_track(moved)
    }

    /// Pointer released. Returns the new value if it changed.
    pub fn release(&mut self, position: i32, axis: &Axis) -> Result<Option<i32>> {
        let moved = self.track.release(position, axis)?;
        self.sync_from_track(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Orientation;

    #[test]
    fn mode_conversions() {
        assert_eq!(SliderMode::Channel.from_track(200), 200);
        assert_eq!(SliderMode::Degrees.from_track(255), 360);
        assert_eq!(SliderMode::Degrees.from_track(128), 180);
        assert_eq!(SliderMode::Total.from_track(128), 50);

        assert_eq!(SliderMode::Degrees.to_track(360), 255);
        assert_eq!(SliderMode::Degrees.to_track(120), 85);
        assert_eq!(SliderMode::Total.to_track(50), 127);
    }

    #[test]
    fn new_slider_starts_at_zero() {
        let slider = ColorSlider::new("alpha", SliderMode::Channel);
        assert_eq!(slider.value(), 0);
        assert_eq!(slider.track().values(), &[0]);
        assert_eq!(slider.track().value(), Ok(0));
    }

    #[test]
    fn set_value_checks_mode_range() {
        let mut hue = ColorSlider::new("hue", SliderMode::Degrees);
        assert_eq!(hue.set_value(360), Ok(true));
        assert_eq!(hue.track().value(), Ok(255));
        assert_eq!(hue.set_value(360), Ok(false));
        assert_eq!(
            hue.set_value(361),
            Err(Error::OutOfRange {
                name: "hue",
                value: 361,
                min: 0,
                max: 360,
            })
        );

        let mut saturation = ColorSlider::new("saturation", SliderMode::Total);
        assert!(saturation.set_value(101).is_err());
        assert_eq!(saturation.set_value(100), Ok(true));
    }

    #[test]
    fn dragging_updates_value() {
        let axis = Axis::new(262, Orientation::Horizontal);
        let mut value = ColorSlider::new("value", SliderMode::Total);

        // Position 258 is the top of the track.
        assert_eq!(value.press(258, &axis), Ok(Some(100)));
        assert_eq!(value.motion(130, &axis), Ok(Some(49)));
        assert_eq!(value.motion(131, &axis), Ok(Some(50)));
        // The handle moves but the percentage does not.
        assert_eq!(value.motion(132, &axis), Ok(None));
        assert_eq!(value.release(3, &axis), Ok(Some(0)));
        assert_eq!(value.value(), 0);
    }

    #[test]
    fn set_fill_reports_changes() {
        let mut slider = ColorSlider::new("red", SliderMode::Channel);
        let fill = slider.fill().clone();
        assert!(!slider.set_fill(fill));
        assert!(slider.set_fill(GradientFill::custom(Vec::new())));
    }
}
