//! Radial hue/shade colour picker core.

pub mod bounds;
pub mod color;
pub mod config;
pub mod geometry;
pub mod render;
pub mod sampler;
pub mod selection;
pub mod shades;
pub mod surface;
pub mod wheel;

#[cfg(test)]
pub(crate) mod testing;

pub use bounds::{Region, RingBounds, RingLayout};
pub use color::{ParseColorError, RgbColor};
pub use config::{ConfigError, WheelConfig, WheelOptions};
pub use geometry::{Point, SurfaceBox};
pub use selection::{CursorStyle, Phase, SelectionState};
pub use surface::{CairoSurface, Surface, SurfaceError};
pub use wheel::{ColourWheel, Selection, WheelControl, WheelError};
