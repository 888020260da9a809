//! The polar hue/saturation wheel. Hue runs around the center, clockwise on
//! screen starting at the positive x axis, and saturation grows from the
//! center outwards. Grabbing a point always picks a color at full value.

use euclid::{
    default::{Point2D, Size2D},
    Angle,
};

use crate::{
    config::WHEEL_TESSELLATION,
    math::{from_polar, to_polar, Vector},
    Component, HsvColor, RgbColor,
};

/// The state of a color wheel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorWheel {
    color: HsvColor,
    size: Size2D<i32>,
    tessellation: usize,
    tracking: bool,
}

impl ColorWheel {
    /// Create a wheel of the given size showing black.
    pub fn new(size: Size2D<i32>) -> Self {
        Self {
            color: HsvColor::default(),
            size,
            tessellation: WHEEL_TESSELLATION,
            tracking: false,
        }
    }

    /// Use `tessellation` hue stops around the rim.
    pub fn with_tessellation(self, tessellation: usize) -> Self {
        Self {
            tessellation: tessellation.max(1),
            ..self
        }
    }

    /// The selected color.
    pub fn color(&self) -> HsvColor {
        self.color
    }

    /// Select a color. Returns whether it changed.
    pub fn set_color(&mut self, color: HsvColor) -> bool {
        if self.color == color {
            return false;
        }
        self.color = color;
        true
    }

    /// Bounds of the wheel.
    pub fn size(&self) -> Size2D<i32> {
        self.size
    }

    /// Resize the wheel.
    pub fn set_size(&mut self, size: Size2D<i32>) {
        self.size = size;
    }

    fn radius(&self) -> Component {
        (self.size.width as Component / 2.0).min(self.size.height as Component / 2.0)
    }

    /// The color under `point`. Points beyond the rim are fully saturated.
    pub fn color_at(&self, point: Point2D<i32>) -> HsvColor {
        let offset = Vector::new(
            (point.x - self.size.width / 2) as Component,
            (point.y - self.size.height / 2) as Component,
        );
        let (angle, distance) = to_polar(offset);

        let hue = angle.to_degrees().trunc().clamp(0.0, 360.0);
        let half_width = (self.size.width / 2) as Component;
        let saturation = (distance / half_width * 100.0).min(100.0).trunc();

        HsvColor::new_unchecked(hue as u16, saturation as u8, 100)
    }

    /// Pixel position of the marker drawn for `color`.
    pub fn marker_position(&self, color: HsvColor) -> Point2D<i32> {
        let radius = self.radius();
        let angle = Angle::degrees(color.hue as Component);
        let reach = color.saturation as Component / 100.0 * (radius - 1.0);

        let offset = from_polar(angle, reach);
        Point2D::new((offset.x + radius) as i32, (offset.y + radius) as i32)
    }

    /// Position of the marker for the selected color.
    pub fn marker(&self) -> Point2D<i32> {
        self.marker_position(self.color)
    }

    /// The fully saturated colors around the rim, starting at hue 0.
    pub fn ring_colors(&self) -> Vec<RgbColor> {
        (0..self.tessellation)
            .map(|i| {
                let hue = i * 360 / self.tessellation;
                HsvColor::new_unchecked(hue as u16, 100, 100).to_rgb()
            })
            .collect()
    }

    /// The color at the center of the wheel.
    pub fn center_color(&self) -> RgbColor {
        RgbColor::WHITE
    }

    /// Whether the pointer is held down on the wheel.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    fn grab(&mut self, point: Point2D<i32>) -> Option<HsvColor> {
        let color = self.color_at(point);
        self.set_color(color).then_some(color)
    }

    /// Pointer pressed on the wheel. Nothing is picked until it moves or is
    /// released.
    pub fn press(&mut self) {
        self.tracking = true;
    }

    /// Pointer moved. Returns the newly picked color while tracking.
    pub fn motion(&mut self, point: Point2D<i32>) -> Option<HsvColor> {
        if !self.tracking {
            return None;
        }
        self.grab(point)
    }

    /// Pointer released. Picks the color under `point` one last time.
    pub fn release(&mut self, point: Point2D<i32>) -> Option<HsvColor> {
        if !self.tracking {
            return None;
        }
        self.tracking = false;
        self.grab(point)
    }
}
