pub mod animation;
mod color;
pub mod constants;
mod pointer;
pub mod rank;
mod render;
#[cfg(feature = "serde")]
mod settings;
pub mod svg;
mod ticks;
mod types;

pub use animation::{Animated, Interpolate, Transition, interpolate, target_alpha};
pub use color::Argb;
pub use pointer::{PointerGeometry, format_reading, pointer_reading};
pub use render::*;
#[cfg(feature = "serde")]
pub use settings::Settings;
pub use ticks::{imperial_ticks, metric_ticks, ticks};
pub use types::*;
