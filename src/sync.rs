//! Keeps the RGB sliders, the HSV sliders, the alpha slider and the color
//! wheel of a picker in agreement.
//!
//! The controller owns a single anchor color. Every input event replaces the
//! anchor (or leaves it alone when the event echoes what the controls already
//! show) and then fans the result out to the other controls in one pass. The
//! pass is returned as a [`SyncUpdate`] which the caller pushes into its real
//! widgets through [`SyncController::apply`]. While an update is being
//! applied, change notifications coming back from those widgets are ignored.

use bitflags::bitflags;
use euclid::default::Point2D;
use log::{debug, trace};

use crate::{
    config::Config,
    interpolate::GradientFill,
    math::channel,
    slider::{ColorSlider, SliderMode},
    track::Axis,
    wheel::ColorWheel,
    HsvColor, Result, RgbColor, Rgba,
};

/// Identifies one of the picker sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderId {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The hue, in degrees.
    Hue,
    /// The saturation, in percent.
    Saturation,
    /// The value, in percent.
    Value,
    /// The opacity channel.
    Alpha,
}

impl SliderId {
    /// Every slider, in storage order.
    pub const ALL: [SliderId; 7] = [
        SliderId::Red,
        SliderId::Green,
        SliderId::Blue,
        SliderId::Hue,
        SliderId::Saturation,
        SliderId::Value,
        SliderId::Alpha,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Name used in range errors.
    pub fn name(self) -> &'static str {
        match self {
            SliderId::Red => "red",
            SliderId::Green => "green",
            SliderId::Blue => "blue",
            SliderId::Hue => "hue",
            SliderId::Saturation => "saturation",
            SliderId::Value => "value",
            SliderId::Alpha => "alpha",
        }
    }

    /// The kind of quantity the slider edits.
    pub fn mode(self) -> SliderMode {
        match self {
            SliderId::Red | SliderId::Green | SliderId::Blue | SliderId::Alpha => {
                SliderMode::Channel
            }
            SliderId::Hue => SliderMode::Degrees,
            SliderId::Saturation | SliderId::Value => SliderMode::Total,
        }
    }

    /// The flag marking this slider in a [`Controls`] set.
    pub fn control(self) -> Controls {
        match self {
            SliderId::Red => Controls::RED,
            SliderId::Green => Controls::GREEN,
            SliderId::Blue => Controls::BLUE,
            SliderId::Hue => Controls::HUE,
            SliderId::Saturation => Controls::SATURATION,
            SliderId::Value => Controls::VALUE,
            SliderId::Alpha => Controls::ALPHA,
        }
    }
}

bitflags! {
    /// A set of picker controls.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Controls : u8 {
        /// The red slider.
        const RED = 1 << 0;
        /// The green slider.
        const GREEN = 1 << 1;
        /// The blue slider.
        const BLUE = 1 << 2;
        /// The hue slider.
        const HUE = 1 << 3;
        /// The saturation slider.
        const SATURATION = 1 << 4;
        /// The value slider.
        const VALUE = 1 << 5;
        /// The alpha slider.
        const ALPHA = 1 << 6;
        /// The color wheel.
        const WHEEL = 1 << 7;
        /// All three RGB sliders.
        const RGB = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        /// All three HSV sliders.
        const HSV = Self::HUE.bits() | Self::SATURATION.bits() | Self::VALUE.bits();
    }
}

/// One change the caller has to push into a widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlUpdate {
    /// A slider shows a new value.
    Slider {
        /// Which slider.
        id: SliderId,
        /// The value in the slider's own range.
        value: i32,
    },
    /// A slider paints a new gradient behind its track.
    Fill {
        /// Which slider.
        id: SliderId,
        /// The new fill.
        fill: GradientFill,
    },
    /// The wheel selects a new color.
    Wheel {
        /// The selected color.
        color: HsvColor,
        /// Pixel position of the selection marker.
        marker: Point2D<i32>,
    },
}

/// The result of one synchronization pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncUpdate {
    /// The reconciled color in RGB.
    pub rgb: RgbColor,
    /// The reconciled color in HSV.
    pub hsv: HsvColor,
    /// The reconciled opacity.
    pub alpha: u8,
    /// Changes to push into the widgets, in order.
    pub updates: Vec<ControlUpdate>,
    /// Every control touched by `updates`.
    pub changed: Controls,
}

impl SyncUpdate {
    /// True if no control has to change.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Pointer events forwarded from a slider track or the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pointer {
    /// Button pressed.
    Press,
    /// Pointer moved.
    Motion,
    /// Button released.
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    Rgb(RgbColor),
    Hsv(HsvColor),
}

impl Anchor {
    fn rgb(self) -> RgbColor {
        match self {
            Anchor::Rgb(rgb) => rgb,
            Anchor::Hsv(hsv) => hsv.to_rgb(),
        }
    }

    fn hsv(self) -> HsvColor {
        match self {
            Anchor::Rgb(rgb) => rgb.to_hsv(),
            Anchor::Hsv(hsv) => hsv,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Origin {
    Rgb,
    Hsv,
    Wheel,
    Alpha,
    Program,
}

/// The synchronization state of one picker session.
#[derive(Clone, Debug)]
pub struct SyncController {
    anchor: Anchor,
    alpha: u8,
    sliders: [ColorSlider; 7],
    wheel: ColorWheel,
    config: Config,
    ignore_events: usize,
}

impl SyncController {
    /// Create a controller showing opaque white.
    pub fn new(config: Config) -> Self {
        let wheel =
            ColorWheel::new(config.wheel_size).with_tessellation(config.wheel_tessellation);

        let mut controller = Self {
            anchor: Anchor::Rgb(RgbColor::WHITE),
            alpha: u8::MAX,
            sliders: SliderId::ALL.map(|id| ColorSlider::new(id.name(), id.mode())),
            wheel,
            config,
            ignore_events: 0,
        };
        controller.fan_out(Origin::Program);

        controller
    }

    /// The settings this controller was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The anchor color in RGB.
    pub fn rgb(&self) -> RgbColor {
        self.anchor.rgb()
    }

    /// The anchor color in HSV.
    pub fn hsv(&self) -> HsvColor {
        self.anchor.hsv()
    }

    /// The opacity.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// The color the picker currently shows, with its opacity.
    pub fn color(&self) -> Rgba {
        self.rgb().with_alpha(self.alpha)
    }

    /// The model of one slider.
    pub fn slider(&self, id: SliderId) -> &ColorSlider {
        &self.sliders[id.index()]
    }

    /// The model of the wheel.
    pub fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }

    /// True while an update is being applied.
    pub fn is_applying(&self) -> bool {
        self.ignore_events > 0
    }

    fn ignored(&self, event: &str) -> bool {
        if self.ignore_events > 0 {
            trace!("ignoring {event} while an update is applied");
            return true;
        }
        false
    }

    /// Replace the color from code rather than from a control. Always runs,
    /// even while an update is being applied.
    pub fn set_color(&mut self, color: Rgba) -> SyncUpdate {
        if color.color != self.rgb() {
            self.anchor = Anchor::Rgb(color.color);
        }
        self.alpha = color.alpha;
        self.fan_out(Origin::Program)
    }

    /// The RGB group or the alpha slider reported a change.
    pub fn on_rgb_changed(
        &mut self,
        red: i32,
        green: i32,
        blue: i32,
        alpha: i32,
    ) -> Result<Option<SyncUpdate>> {
        if self.ignored("rgb change") {
            return Ok(None);
        }

        let rgb = RgbColor::new(red, green, blue)?;
        let alpha = channel("alpha", alpha)?;

        if rgb != self.rgb() {
            self.anchor = Anchor::Rgb(rgb);
        }
        self.alpha = alpha;

        Ok(Some(self.fan_out(Origin::Rgb)))
    }

    /// The HSV group reported a change.
    pub fn on_hsv_changed(
        &mut self,
        hue: i32,
        saturation: i32,
        value: i32,
    ) -> Result<Option<SyncUpdate>> {
        if self.ignored("hsv change") {
            return Ok(None);
        }

        let hsv = HsvColor::new(hue, saturation, value)?;
        self.anchor_hsv(hsv);

        Ok(Some(self.fan_out(Origin::Hsv)))
    }

    /// The wheel picked a color.
    pub fn on_wheel_changed(&mut self, color: HsvColor) -> Result<Option<SyncUpdate>> {
        if self.ignored("wheel change") {
            return Ok(None);
        }

        self.anchor_hsv(color);

        Ok(Some(self.fan_out(Origin::Wheel)))
    }

    /// Pick the color under `point` on the wheel.
    pub fn on_wheel_grab(&mut self, point: Point2D<i32>) -> Result<Option<SyncUpdate>> {
        let color = self.wheel.color_at(point);
        self.on_wheel_changed(color)
    }

    /// Forward a pointer event on the wheel.
    pub fn on_wheel_pointer(
        &mut self,
        event: Pointer,
        point: Point2D<i32>,
    ) -> Result<Option<SyncUpdate>> {
        if self.ignored("wheel pointer") {
            return Ok(None);
        }

        let picked = match event {
            Pointer::Press => {
                self.wheel.press();
                None
            }
            Pointer::Motion => self.wheel.motion(point),
            Pointer::Release => self.wheel.release(point),
        };

        match picked {
            Some(color) => self.on_wheel_changed(color),
            None => Ok(None),
        }
    }

    /// The alpha slider reported a change.
    pub fn on_alpha_changed(&mut self, alpha: i32) -> Result<Option<SyncUpdate>> {
        if self.ignored("alpha change") {
            return Ok(None);
        }

        self.alpha = channel("alpha", alpha)?;

        Ok(Some(self.fan_out(Origin::Alpha)))
    }

    /// A single slider reported a new value in its own range.
    pub fn on_slider_changed(&mut self, id: SliderId, value: i32) -> Result<Option<SyncUpdate>> {
        let rgb = self.rgb();
        let hsv = self.hsv();
        let [red, green, blue] = [rgb.red, rgb.green, rgb.blue].map(i32::from);
        let alpha = i32::from(self.alpha);

        match id {
            SliderId::Red => self.on_rgb_changed(value, green, blue, alpha),
            SliderId::Green => self.on_rgb_changed(red, value, blue, alpha),
            SliderId::Blue => self.on_rgb_changed(red, green, value, alpha),
            SliderId::Hue => {
                self.on_hsv_changed(value, hsv.saturation.into(), hsv.value.into())
            }
            SliderId::Saturation => self.on_hsv_changed(hsv.hue.into(), value, hsv.value.into()),
            SliderId::Value => self.on_hsv_changed(hsv.hue.into(), hsv.saturation.into(), value),
            SliderId::Alpha => self.on_alpha_changed(value),
        }
    }

    /// Forward a pointer event on a slider track.
    pub fn on_slider_pointer(
        &mut self,
        id: SliderId,
        event: Pointer,
        position: i32,
        axis: &Axis,
    ) -> Result<Option<SyncUpdate>> {
        if self.ignored("slider pointer") {
            return Ok(None);
        }

        let slider = &mut self.sliders[id.index()];
        let moved = match event {
            Pointer::Press => slider.press(position, axis)?,
            Pointer::Motion => slider.motion(position, axis)?,
            Pointer::Release => slider.release(position, axis)?,
        };

        match moved {
            Some(value) => self.on_slider_changed(id, value),
            None => Ok(None),
        }
    }

    /// Run `f` once for every change in `update`, ignoring any change
    /// notification raised meanwhile.
    pub fn apply<F>(&mut self, update: &SyncUpdate, mut f: F)
    where
        F: FnMut(&mut Self, &ControlUpdate),
    {
        self.ignore_events += 1;
        for change in &update.updates {
            f(self, change);
        }
        self.ignore_events -= 1;
    }

    /// The full state of every control, for the first paint.
    pub fn snapshot(&self) -> SyncUpdate {
        let mut updates = Vec::with_capacity(SliderId::ALL.len() * 2 + 1);
        for id in SliderId::ALL {
            let slider = self.slider(id);
            updates.push(ControlUpdate::Slider {
                id,
                value: slider.value(),
            });
            updates.push(ControlUpdate::Fill {
                id,
                fill: slider.fill().clone(),
            });
        }
        updates.push(ControlUpdate::Wheel {
            color: self.wheel.color(),
            marker: self.wheel.marker(),
        });

        SyncUpdate {
            rgb: self.rgb(),
            hsv: self.hsv(),
            alpha: self.alpha,
            updates,
            changed: Controls::all(),
        }
    }

    /// Anchor on `hsv` unless it is what the controls already show.
    fn anchor_hsv(&mut self, hsv: HsvColor) {
        if hsv != self.hsv() {
            self.anchor = Anchor::Hsv(hsv);
        }
    }

    fn fan_out(&mut self, origin: Origin) -> SyncUpdate {
        let mut update = SyncUpdate {
            rgb: self.rgb(),
            hsv: self.hsv(),
            alpha: self.alpha,
            updates: Vec::new(),
            changed: Controls::empty(),
        };

        match origin {
            Origin::Rgb | Origin::Program => {
                self.push_rgb(&mut update);
                self.push_alpha(&mut update);
                self.push_hsv(&mut update);
                self.push_wheel(&mut update);
            }
            Origin::Hsv => {
                self.push_hsv(&mut update);
                self.push_wheel(&mut update);
                self.push_rgb(&mut update);
                self.push_alpha(&mut update);
            }
            Origin::Wheel => {
                self.push_wheel(&mut update);
                self.push_hsv(&mut update);
                self.push_rgb(&mut update);
                self.push_alpha(&mut update);
            }
            Origin::Alpha => self.push_alpha(&mut update),
        }

        debug!(
            "sync from {origin:?}: rgb {}, hsv {}, alpha {}, {} updates",
            update.rgb,
            update.hsv,
            update.alpha,
            update.updates.len()
        );

        update
    }

    fn push_value(&mut self, id: SliderId, value: i32, update: &mut SyncUpdate) {
        let result = self.sliders[id.index()].set_value(value);
        debug_assert!(result.is_ok(), "{} out of range: {value}", id.name());
        if let Ok(true) = result {
            update.updates.push(ControlUpdate::Slider { id, value });
            update.changed |= id.control();
        }
    }

    fn push_fill(&mut self, id: SliderId, fill: GradientFill, update: &mut SyncUpdate) {
        let slider = &mut self.sliders[id.index()];
        if slider.set_fill(fill) {
            update.updates.push(ControlUpdate::Fill {
                id,
                fill: slider.fill().clone(),
            });
            update.changed |= id.control();
        }
    }

    fn push_rgb(&mut self, update: &mut SyncUpdate) {
        let rgb = update.rgb;

        self.push_value(SliderId::Red, rgb.red.into(), update);
        self.push_value(SliderId::Green, rgb.green.into(), update);
        self.push_value(SliderId::Blue, rgb.blue.into(), update);

        let ramp = |set: fn(RgbColor, u8) -> RgbColor| {
            GradientFill::linear(set(rgb, u8::MIN), set(rgb, u8::MAX))
        };
        self.push_fill(SliderId::Red, ramp(RgbColor::with_red), update);
        self.push_fill(SliderId::Green, ramp(RgbColor::with_green), update);
        self.push_fill(SliderId::Blue, ramp(RgbColor::with_blue), update);
    }

    fn push_alpha(&mut self, update: &mut SyncUpdate) {
        self.push_value(SliderId::Alpha, update.alpha.into(), update);
        self.push_fill(
            SliderId::Alpha,
            GradientFill::linear(RgbColor::BLACK, update.rgb),
            update,
        );
    }

    fn push_hsv(&mut self, update: &mut SyncUpdate) {
        let hsv = update.hsv;

        self.push_value(SliderId::Hue, hsv.hue.into(), update);
        self.push_value(SliderId::Saturation, hsv.saturation.into(), update);
        self.push_value(SliderId::Value, hsv.value.into(), update);

        self.push_fill(SliderId::Hue, hue_fill(), update);
        self.push_fill(SliderId::Saturation, saturation_fill(hsv), update);
        self.push_fill(SliderId::Value, value_fill(hsv), update);
    }

    fn push_wheel(&mut self, update: &mut SyncUpdate) {
        if self.wheel.set_color(update.hsv) {
            update.updates.push(ControlUpdate::Wheel {
                color: update.hsv,
                marker: self.wheel.marker(),
            });
            update.changed |= Controls::WHEEL;
        }
    }
}

impl Default for SyncController {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Every hue at full saturation and value, one stop per degree.
fn hue_fill() -> GradientFill {
    GradientFill::custom(
        (0..=360)
            .map(|hue| Rgba::opaque(HsvColor::new_unchecked(hue, 100, 100).to_rgb()))
            .collect(),
    )
}

/// Every saturation of `hsv`'s hue and value, one stop per percent.
fn saturation_fill(hsv: HsvColor) -> GradientFill {
    GradientFill::custom(
        (0..=100)
            .map(|saturation| {
                Rgba::opaque(HsvColor::new_unchecked(hsv.hue, saturation, hsv.value).to_rgb())
            })
            .collect(),
    )
}

fn value_fill(hsv: HsvColor) -> GradientFill {
    let at = |value| HsvColor::new_unchecked(hsv.hue, hsv.saturation, value).to_rgb();
    GradientFill::linear(at(0), at(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{track::Orientation, Error};

    fn controller() -> SyncController {
        SyncController::default()
    }

    fn hsv(h: i32, s: i32, v: i32) -> HsvColor {
        HsvColor::new(h, s, v).unwrap()
    }

    fn rgb(r: i32, g: i32, b: i32) -> RgbColor {
        RgbColor::new(r, g, b).unwrap()
    }

    /// Shorthand for the kind of each update, to check ordering.
    fn kinds(update: &SyncUpdate) -> Vec<String> {
        update
            .updates
            .iter()
            .map(|u| match u {
                ControlUpdate::Slider { id, .. } => format!("value {}", id.name()),
                ControlUpdate::Fill { id, .. } => format!("fill {}", id.name()),
                ControlUpdate::Wheel { .. } => "wheel".to_string(),
            })
            .collect()
    }

    fn slider_values(c: &SyncController) -> Vec<i32> {
        SliderId::ALL.map(|id| c.slider(id).value()).to_vec()
    }

    #[test]
    fn starts_opaque_white() {
        let c = controller();
        assert_eq!(c.color(), Rgba::opaque(RgbColor::WHITE));
        assert_eq!(c.hsv(), hsv(0, 0, 100));
        assert_eq!(slider_values(&c), vec![255, 255, 255, 0, 0, 100, 255]);
        assert_eq!(c.wheel().color(), hsv(0, 0, 100));
        assert_eq!(c.wheel().marker(), Point2D::new(75, 75));
        assert!(!c.is_applying());
    }

    #[test]
    fn rgb_red_updates_hsv_and_wheel() {
        let mut c = controller();
        let update = c.on_rgb_changed(255, 0, 0, 255).unwrap().unwrap();

        assert_eq!(update.rgb, RgbColor::RED);
        assert_eq!(update.hsv, hsv(0, 100, 100));
        assert_eq!(update.alpha, 255);
        assert!(update.updates.contains(&ControlUpdate::Wheel {
            color: hsv(0, 100, 100),
            marker: Point2D::new(149, 75),
        }));
        assert_eq!(slider_values(&c), vec![255, 0, 0, 0, 100, 100, 255]);
    }

    #[test]
    fn rgb_origin_order() {
        let mut c = controller();
        let update = c.on_rgb_changed(255, 0, 0, 255).unwrap().unwrap();

        assert_eq!(
            kinds(&update),
            vec![
                "value green",
                "value blue",
                "fill red",
                "fill green",
                "fill blue",
                "fill alpha",
                "value saturation",
                "fill value",
                "wheel",
            ]
        );
        assert_eq!(
            update.changed,
            Controls::RGB
                | Controls::ALPHA
                | Controls::SATURATION
                | Controls::VALUE
                | Controls::WHEEL
        );
    }

    #[test]
    fn hsv_origin_order() {
        let mut c = controller();
        let update = c.on_hsv_changed(0, 100, 100).unwrap().unwrap();

        assert_eq!(
            kinds(&update),
            vec![
                "value saturation",
                "fill value",
                "wheel",
                "value green",
                "value blue",
                "fill red",
                "fill green",
                "fill blue",
                "fill alpha",
            ]
        );
    }

    #[test]
    fn fills_follow_the_anchor() {
        let mut c = controller();
        c.on_rgb_changed(10, 20, 30, 128).unwrap();

        let fill = c.slider(SliderId::Green).fill();
        assert_eq!(fill.min_color(), rgb(10, 0, 30));
        assert_eq!(fill.max_color(), rgb(10, 255, 30));

        let fill = c.slider(SliderId::Alpha).fill();
        assert_eq!(fill.min_color(), RgbColor::BLACK);
        assert_eq!(fill.max_color(), rgb(10, 20, 30));

        let hue = c.slider(SliderId::Hue).fill().custom_stops().unwrap();
        assert_eq!(hue.len(), 361);
        assert_eq!(hue[120], Rgba::opaque(RgbColor::GREEN));

        let current = c.hsv();
        let saturation = c.slider(SliderId::Saturation).fill().custom_stops().unwrap();
        assert_eq!(saturation.len(), 101);
        assert_eq!(saturation[0].color, hsv(current.hue.into(), 0, current.value.into()).to_rgb());

        let value = c.slider(SliderId::Value).fill();
        assert_eq!(value.min_color(), RgbColor::BLACK);
        assert_eq!(
            value.max_color(),
            hsv(current.hue.into(), current.saturation.into(), 100).to_rgb()
        );
    }

    #[test]
    fn hsv_origin_is_consistent() {
        let mut c = controller();
        let update = c.on_hsv_changed(120, 50, 50).unwrap().unwrap();

        assert_eq!(update.hsv, hsv(120, 50, 50));
        assert_eq!(update.rgb, hsv(120, 50, 50).to_rgb());
        assert_eq!(update.rgb, rgb(63, 127, 63));
        assert_eq!(slider_values(&c), vec![63, 127, 63, 120, 50, 50, 255]);
    }

    #[test]
    fn rgb_origin_is_consistent() {
        let mut c = controller();
        for (r, g, b) in [(12, 200, 99), (255, 0, 128), (1, 2, 3)] {
            let update = c.on_rgb_changed(r, g, b, 255).unwrap().unwrap();
            assert_eq!(update.rgb, rgb(r, g, b));
            assert_eq!(update.hsv, rgb(r, g, b).to_hsv());
        }
    }

    #[test]
    fn echoes_are_fixed_points() {
        let mut c = controller();
        c.on_hsv_changed(120, 50, 50).unwrap();

        // The RGB group reports the values it was just given.
        let echo = c.on_rgb_changed(63, 127, 63, 255).unwrap().unwrap();
        assert!(echo.is_empty());
        assert_eq!(echo.changed, Controls::empty());
        // The HSV anchor is not re-quantized through RGB.
        assert_eq!(c.hsv(), hsv(120, 50, 50));

        c.on_rgb_changed(255, 0, 128, 255).unwrap();
        let echo = c.on_hsv_changed(329, 100, 100).unwrap().unwrap();
        assert!(echo.is_empty());
        assert_eq!(c.rgb(), rgb(255, 0, 128));
    }

    #[test]
    fn alpha_only_touches_alpha() {
        let mut c = controller();
        let update = c.on_alpha_changed(64).unwrap().unwrap();
        assert_eq!(
            update.updates,
            vec![ControlUpdate::Slider {
                id: SliderId::Alpha,
                value: 64,
            }]
        );
        assert_eq!(update.changed, Controls::ALPHA);
        assert_eq!(c.color(), Rgba::new(255, 255, 255, 64));

        assert!(c.on_alpha_changed(64).unwrap().unwrap().is_empty());
    }

    #[test]
    fn changes_are_ignored_while_applying() {
        let mut c = controller();
        let update = c.on_rgb_changed(0, 0, 255, 255).unwrap().unwrap();

        let mut seen = 0;
        c.apply(&update, |c, change| {
            seen += 1;
            assert!(c.is_applying());
            // A widget echoing the change back must not start a new pass.
            if let ControlUpdate::Slider { id, value } = change {
                assert_eq!(c.on_slider_changed(*id, *value), Ok(None));
            }
            assert_eq!(c.on_rgb_changed(1, 2, 3, 4), Ok(None));
            assert_eq!(c.on_wheel_grab(Point2D::new(0, 0)), Ok(None));
        });

        assert_eq!(seen, update.updates.len());
        assert!(!c.is_applying());
        assert_eq!(c.rgb(), RgbColor::BLUE);
        assert!(c.on_rgb_changed(1, 2, 3, 4).unwrap().is_some());
    }

    #[test]
    fn set_color_runs_while_applying() {
        let mut c = controller();
        let update = c.snapshot();
        c.apply(&update, |c, _| {
            c.set_color(Rgba::new(0, 255, 0, 10));
        });
        assert_eq!(c.color(), Rgba::new(0, 255, 0, 10));
        assert_eq!(c.hsv(), hsv(120, 100, 100));
    }

    #[test]
    fn range_errors() {
        let mut c = controller();
        assert_eq!(
            c.on_rgb_changed(256, 0, 0, 255),
            Err(Error::OutOfRange {
                name: "red",
                value: 256,
                min: 0,
                max: 255,
            })
        );
        assert!(matches!(
            c.on_rgb_changed(0, 0, 0, -1),
            Err(Error::OutOfRange { name: "alpha", .. })
        ));
        assert!(matches!(
            c.on_slider_changed(SliderId::Hue, 361),
            Err(Error::OutOfRange { name: "hue", .. })
        ));
        assert!(c.on_hsv_changed(0, 101, 0).is_err());
        assert!(c.on_alpha_changed(256).is_err());

        // Nothing changed.
        assert_eq!(c.color(), Rgba::opaque(RgbColor::WHITE));
    }

    #[test]
    fn single_slider_changes() {
        let mut c = controller();
        c.on_slider_changed(SliderId::Green, 0).unwrap();
        assert_eq!(c.rgb(), RgbColor::MAGENTA);

        c.on_slider_changed(SliderId::Hue, 60).unwrap();
        assert_eq!(c.hsv(), hsv(60, 100, 100));
        assert_eq!(c.rgb(), RgbColor::YELLOW);

        c.on_slider_changed(SliderId::Alpha, 0).unwrap();
        assert_eq!(c.color(), Rgba::new(255, 255, 0, 0));
    }

    #[test]
    fn wheel_grab_keeps_value_at_full() {
        let mut c = controller();
        let update = c.on_wheel_grab(Point2D::new(0, 75)).unwrap().unwrap();

        assert_eq!(update.hsv, hsv(180, 100, 100));
        assert_eq!(update.rgb, RgbColor::CYAN);
        assert_eq!(kinds(&update)[0], "wheel");
        assert!(update.changed.contains(Controls::WHEEL | Controls::HUE | Controls::RED));
    }

    #[test]
    fn wheel_drag_is_not_echoed_to_the_wheel() {
        let mut c = controller();
        assert_eq!(c.on_wheel_pointer(Pointer::Motion, Point2D::new(150, 75)), Ok(None));
        assert_eq!(c.on_wheel_pointer(Pointer::Press, Point2D::new(150, 75)), Ok(None));

        let update = c
            .on_wheel_pointer(Pointer::Motion, Point2D::new(150, 75))
            .unwrap()
            .unwrap();
        assert_eq!(update.rgb, RgbColor::RED);
        assert!(!update.changed.contains(Controls::WHEEL));

        c.on_wheel_pointer(Pointer::Release, Point2D::new(150, 75))
            .unwrap();
        assert!(!c.wheel().is_tracking());
    }

    #[test]
    fn slider_drag_drives_the_anchor() {
        let mut c = controller();
        let axis = Axis::new(262, Orientation::Horizontal);

        let update = c
            .on_slider_pointer(SliderId::Red, Pointer::Press, 3, &axis)
            .unwrap()
            .unwrap();
        assert_eq!(update.rgb, RgbColor::CYAN);
        // The red slider already shows 0.
        assert!(!update.changed.contains(Controls::RED));
        assert_eq!(c.slider(SliderId::Red).value(), 0);

        assert_eq!(
            c.on_slider_pointer(SliderId::Red, Pointer::Release, 3, &axis),
            Ok(None)
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "hue out of range: 361")]
    fn out_of_range_slider_value_is_caught() {
        let mut c = controller();
        let mut update = c.snapshot();
        c.push_value(SliderId::Hue, 361, &mut update);
    }

    #[test]
    fn snapshot_lists_every_control() {
        let c = controller();
        let snapshot = c.snapshot();
        assert_eq!(snapshot.updates.len(), 15);
        assert_eq!(snapshot.changed, Controls::all());
        assert_eq!(snapshot.rgb, RgbColor::WHITE);
    }
}
