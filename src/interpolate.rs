//! Sampling colors along a gradient.
//!
//! A gradient is either a plain two color ramp from a min color to a max
//! color, or a custom list of stops, each carrying its own alpha. Custom
//! stops are blended in straight alpha space, so a transparent stop does not
//! darken its neighbors, and the result is composited over an opaque
//! backdrop for display.

use crate::{
    math::{lerp, round_to_byte},
    Component, RgbColor, Rgba,
};

/// Sample a list of at least two stops at `t`, where 0 is the first stop and
/// 1 the last. `t` is clamped to `[0, 1]`. Returns `None` when there are
/// fewer than two stops.
///
/// Sampling exactly on a stop returns that stop, except for a fully
/// transparent stop: any sample with zero alpha is [`Rgba::TRANSPARENT`],
/// whatever color the stop carries.
pub fn color_at(t: Component, stops: &[Rgba]) -> Option<Rgba> {
    if stops.len() < 2 {
        return None;
    }

    let last = stops.len() - 1;
    let index = t.clamp(0.0, 1.0) * last as Component;

    let left = (index.floor() as usize).min(last);
    let right = (index.ceil() as usize).min(last);
    let weight = 1.0 - (index - left as Component);

    Some(blend(stops[left], stops[right], weight))
}

/// Blend two straight alpha colors, giving `weight` to `left` and the rest
/// to `right`.
fn blend(left: Rgba, right: Rgba, weight: Component) -> Rgba {
    let normalize = |c: u8| c as Component / 255.0;

    let left_alpha = normalize(left.alpha);
    let right_alpha = normalize(right.alpha);
    let alpha = weight * left_alpha + (1.0 - weight) * right_alpha;

    if alpha == 0.0 {
        return Rgba::TRANSPARENT;
    }

    let channel = |l: u8, r: u8| {
        round_to_byte(
            (weight * left_alpha * normalize(l) + (1.0 - weight) * right_alpha * normalize(r))
                / alpha,
        )
    };

    Rgba::new(
        channel(left.color.red, right.color.red),
        channel(left.color.green, right.color.green),
        channel(left.color.blue, right.color.blue),
        round_to_byte(alpha),
    )
}

/// Sample a plain two color ramp at `t`, clamped to `[0, 1]`.
pub fn color_between(t: Component, min: RgbColor, max: RgbColor) -> RgbColor {
    let t = t.clamp(0.0, 1.0);
    let [red, green, blue] = [
        (min.red, max.red),
        (min.green, max.green),
        (min.blue, max.blue),
    ]
    .map(|(a, b)| lerp(a as Component, b as Component, t).round() as u8);

    RgbColor::rgb(red, green, blue)
}

/// Composite a translucent color over an opaque backdrop.
pub fn over(source: Rgba, backdrop: RgbColor) -> RgbColor {
    let alpha = u32::from(source.alpha);
    let mix = |s: u8, b: u8| ((u32::from(s) * alpha + u32::from(b) * (255 - alpha)) / 255) as u8;

    RgbColor::rgb(
        mix(source.color.red, backdrop.red),
        mix(source.color.green, backdrop.green),
        mix(source.color.blue, backdrop.blue),
    )
}

/// The colors painted behind a slider's track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientFill {
    min_color: RgbColor,
    max_color: RgbColor,
    custom: Option<Vec<Rgba>>,
}

impl Default for GradientFill {
    fn default() -> Self {
        Self::linear(RgbColor::RED, RgbColor::BLUE)
    }
}

impl GradientFill {
    /// A plain ramp from `min_color` at value 0 to `max_color` at 255.
    pub fn linear(min_color: RgbColor, max_color: RgbColor) -> Self {
        Self {
            min_color,
            max_color,
            custom: None,
        }
    }

    /// A ramp through custom stops, evenly spaced along the track.
    pub fn custom(stops: Vec<Rgba>) -> Self {
        Self {
            custom: Some(stops),
            ..Self::default()
        }
    }

    /// The color at value 0 of the plain ramp.
    pub fn min_color(&self) -> RgbColor {
        self.min_color
    }

    /// The color at value 255 of the plain ramp.
    pub fn max_color(&self) -> RgbColor {
        self.max_color
    }

    /// Change the color at value 0 of the plain ramp.
    pub fn set_min_color(&mut self, color: RgbColor) {
        self.min_color = color;
    }

    /// Change the color at value 255 of the plain ramp.
    pub fn set_max_color(&mut self, color: RgbColor) {
        self.max_color = color;
    }

    /// The custom stops, if any.
    pub fn custom_stops(&self) -> Option<&[Rgba]> {
        self.custom.as_deref()
    }

    /// Replace all custom stops at once. `None` goes back to the plain ramp.
    pub fn set_custom_stops(&mut self, stops: Option<Vec<Rgba>>) {
        self.custom = stops;
    }

    /// Sample the fill at `t`. Custom stops are used when there are at least
    /// two of them; otherwise the plain min/max ramp is.
    pub fn color_at(&self, t: Component) -> Rgba {
        self.custom
            .as_deref()
            .and_then(|stops| color_at(t, stops))
            .unwrap_or_else(|| Rgba::opaque(color_between(t, self.min_color, self.max_color)))
    }

    /// Render `length` evenly spaced samples from value 0 to 255, each
    /// composited over `backdrop`.
    pub fn render(&self, length: usize, backdrop: RgbColor) -> Vec<RgbColor> {
        let last = length.saturating_sub(1).max(1) as Component;
        (0..length)
            .map(|x| over(self.color_at(x as Component / last), backdrop))
            .collect()
    }
}
