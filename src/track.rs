//! A gradient track holds up to [`MAX_HANDLES`] draggable handles along a
//! one dimensional axis. Handle values live in `[0, 255]` and are kept
//! strictly ordered: a handle can never cross or touch its neighbors.
//!
//! Pixel positions are mapped onto values through an [`Axis`], which knows
//! the axis length, its orientation and the size of the handle markers. Up
//! and right always mean a higher value.

use euclid::default::Point2D;

use crate::{config::MARKER_SIZE, Error, Result};

/// Largest number of handles a track can hold.
pub const MAX_HANDLES: usize = 16;

/// Largest handle value.
pub const MAX_VALUE: i32 = 255;

/// Direction in which a track runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Values grow from left to right.
    Horizontal,
    /// Values grow from bottom to top.
    #[default]
    Vertical,
}

/// The pixel geometry of a track along its main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    /// Length of the control along the axis in pixels.
    pub length: i32,
    /// Direction the track runs in.
    pub orientation: Orientation,
    /// Size of the handle markers; half a marker is inset at both ends.
    pub marker_size: i32,
}

impl Axis {
    /// Create an axis using the default marker size.
    pub fn new(length: i32, orientation: Orientation) -> Self {
        Self {
            length,
            orientation,
            marker_size: MARKER_SIZE,
        }
    }

    /// Return a copy of this axis using a different marker size.
    pub fn with_marker_size(self, marker_size: i32) -> Self {
        Self {
            marker_size,
            ..self
        }
    }

    fn inset(&self) -> i64 {
        (i64::from(self.marker_size) - 1) / 2
    }

    /// Number of pixels between the first and the last reachable position.
    fn span(&self) -> Result<i64> {
        let span = i64::from(self.length) - i64::from(self.marker_size);
        if span <= 0 {
            return Err(Error::AxisTooShort {
                length: self.length,
                marker_size: self.marker_size,
            });
        }
        Ok(span)
    }

    /// Pick the coordinate of `point` that lies along this axis.
    pub fn coordinate(&self, point: Point2D<i32>) -> i32 {
        match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    fn reverse(&self, value: i64) -> i64 {
        match self.orientation {
            Orientation::Horizontal => i64::from(MAX_VALUE) - value,
            Orientation::Vertical => value,
        }
    }

    /// Map a pixel position to a handle value. Positions outside the track
    /// produce values outside `[0, 255]`; callers clamp as needed.
    pub fn position_to_value(&self, position: i32) -> Result<i32> {
        let span = self.span()?;
        let offset = i64::from(position) - self.inset();
        let value = (span - offset) * i64::from(MAX_VALUE) / span;

        Ok(saturate(self.reverse(value)))
    }

    /// Map a handle value to the pixel position of its marker.
    pub fn value_to_position(&self, value: i32) -> Result<i32> {
        let span = self.span()?;
        let value = self.reverse(i64::from(value));

        Ok(saturate(
            self.inset() + (span - value * span / i64::from(MAX_VALUE)),
        ))
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Pointer interaction state of a track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Drag {
    /// No handle is held. Pointer motion only moves the highlight.
    #[default]
    Idle,
    /// The handle at this index follows the pointer.
    Dragging(usize),
}

/// An ordered set of handles along a gradient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientTrack {
    values: Vec<u8>,
    drag: Drag,
    highlight: Option<usize>,
}

impl Default for GradientTrack {
    fn default() -> Self {
        Self::with_count(1)
    }
}

impl GradientTrack {
    /// Create a track with `count` evenly distributed handles. Counts above
    /// [`MAX_HANDLES`] are clamped.
    pub fn with_count(count: usize) -> Self {
        let mut track = Self {
            values: Vec::with_capacity(MAX_HANDLES),
            drag: Drag::Idle,
            highlight: None,
        };
        track.distribute(count.min(MAX_HANDLES));
        track
    }

    /// Create a track holding exactly `values`, which must be strictly
    /// increasing and at most [`MAX_HANDLES`] long.
    pub(crate) fn from_values(values: Vec<u8>) -> Self {
        debug_assert!(values.len() <= MAX_HANDLES, "too many handles");
        debug_assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "handles out of order"
        );

        Self {
            values,
            drag: Drag::Idle,
            highlight: None,
        }
    }

    /// Replace every handle with `count` evenly distributed ones. A single
    /// handle sits in the middle of the track.
    pub fn resize(&mut self, count: usize) -> Result<()> {
        if count > MAX_HANDLES {
            return Err(Error::OutOfRange {
                name: "count",
                value: count as i64,
                min: 0,
                max: MAX_HANDLES as i64,
            });
        }

        self.distribute(count);
        log::debug!("GradientTrack: resized to {:?}", self.values);

        Ok(())
    }

    fn distribute(&mut self, count: usize) {
        self.values.clear();
        match count {
            0 => {}
            1 => self.values.push(128),
            _ => self
                .values
                .extend((0..count).map(|i| (i * 255 / (count - 1)) as u8)),
        }

        if let Drag::Dragging(index) = self.drag {
            if index >= count {
                self.drag = Drag::Idle;
            }
        }
        self.highlight = self.highlight.filter(|&index| index < count);
    }

    /// Number of handles.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the track has no handles.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All handle values in order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.values.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.values.len(),
            });
        }
        Ok(())
    }

    /// Return the value of the handle at `index`.
    pub fn get(&self, index: usize) -> Result<u8> {
        self.check_index(index)?;
        Ok(self.values[index])
    }

    /// Move the handle at `index` towards `value`, clamped so that it stays
    /// strictly between its neighbors (or within `[0, 255]` at the ends).
    /// Returns whether the handle moved.
    pub fn set(&mut self, index: usize, value: i32) -> Result<bool> {
        self.check_index(index)?;

        let lower = match index {
            0 => -1,
            _ => i32::from(self.values[index - 1]),
        };
        let upper = self
            .values
            .get(index + 1)
            .map_or(MAX_VALUE + 1, |&v| i32::from(v));

        let clamped = value.clamp(lower + 1, upper - 1);
        if clamped == i32::from(self.values[index]) {
            return Ok(false);
        }

        log::trace!("GradientTrack: handle {index} {value} -> {clamped}");
        self.values[index] = clamped as u8;

        Ok(true)
    }

    /// The value of the first handle, for single handle tracks.
    pub fn value(&self) -> Result<u8> {
        self.get(0)
    }

    /// Move the first handle, for single handle tracks.
    pub fn set_value(&mut self, value: i32) -> Result<bool> {
        self.set(0, value)
    }

    /// Index of the handle closest to the value under `position`. Ties go to
    /// the lower index.
    pub fn nearest_handle(&self, position: i32, axis: &Axis) -> Result<Option<usize>> {
        let target = axis.position_to_value(position)?;

        let mut best: Option<(usize, i32)> = None;
        for (index, &value) in self.values.iter().enumerate() {
            let distance = (i32::from(value) - target).abs();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }

        Ok(best.map(|(index, _)| index))
    }

    /// Current pointer interaction state.
    pub fn drag(&self) -> Drag {
        self.drag
    }

    /// The handle under the pointer while no handle is dragged.
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Start dragging the handle nearest to `position` and move it there.
    /// Returns whether a handle moved.
    pub fn press(&mut self, position: i32, axis: &Axis) -> Result<bool> {
        self.drag = match self.nearest_handle(position, axis)? {
            Some(index) => {
                log::debug!("GradientTrack: dragging handle {index}");
                Drag::Dragging(index)
            }
            None => Drag::Idle,
        };

        self.motion(position, axis)
    }

    /// Follow the pointer. While dragging, the held handle moves to
    /// `position`; otherwise only the highlight changes.
    pub fn motion(&mut self, position: i32, axis: &Axis) -> Result<bool> {
        match self.drag {
            Drag::Dragging(index) => {
                let value = axis.position_to_value(position)?;
                self.set(index, value)
            }
            Drag::Idle => {
                self.highlight = self.nearest_handle(position, axis)?;
                Ok(false)
            }
        }
    }

    /// Apply the final pointer position and stop dragging.
    pub fn release(&mut self, position: i32, axis: &Axis) -> Result<bool> {
        let moved = self.motion(position, axis)?;
        if let Drag::Dragging(index) = self.drag {
            log::debug!("GradientTrack: released handle {index}");
        }
        self.drag = Drag::Idle;
        Ok(moved)
    }

    /// The pointer left the control.
    pub fn leave(&mut self) {
        self.highlight = None;
    }
}
