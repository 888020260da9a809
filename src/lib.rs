//! tincture provides the model behind an interactive color picker: integer
//! RGB and HSV colors, gradient tracks with draggable handles, multi-stop
//! gradient fills, a polar hue/saturation wheel and a controller that keeps
//! all of them showing the same color.
//!
//! Nothing here draws or owns widgets. The caller forwards input events to a
//! [`SyncController`] and pushes the returned [`SyncUpdate`] into its own
//! controls.

#![deny(missing_docs)]


mod color;
mod config;
mod convert;
mod error;
pub mod interpolate;
mod math;
pub mod slider;
pub mod sync;
pub mod track;
pub mod wheel;

pub use color::{Component, HsvColor, Rgba, RgbColor};
pub use config::{Config, MARKER_SIZE, WHEEL_TESSELLATION};
pub use convert::{hsv_to_rgb, rgb_to_hsv, Quantize};
pub use error::{Error, Result};
pub use interpolate::GradientFill;
pub use slider::{ColorSlider, SliderMode};
pub use sync::{ControlUpdate, Controls, Pointer, SliderId, SyncController, SyncUpdate};
pub use track::{Axis, Drag, GradientTrack, Orientation};
pub use wheel::ColorWheel;
