use crate::color::{DEFAULT_HUES, RgbColor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_RADIUS: f64 = 200.0;
pub const DEFAULT_LINE_WIDTH: f64 = 50.0;
pub const DEFAULT_SHADE_COUNT: usize = 16;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WheelOptions {
    pub radius: f64,
    pub line_width: f64,
    pub padding: f64,
    pub hue_colors: Vec<RgbColor>,
    pub shade_count: usize,
    pub use_string_format: bool,
    pub dynamic_cursor: bool,
}

impl Default for WheelOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
            padding: 0.0,
            hue_colors: DEFAULT_HUES.to_vec(),
            shade_count: DEFAULT_SHADE_COUNT,
            use_string_format: true,
            dynamic_cursor: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("padding must not be negative, got {0}")]
    NegativePadding(f64),
    #[error("hue palette is empty")]
    EmptyPalette,
    #[error("shade count must be at least 1")]
    NoShades,
    #[error(
        "ring geometry is degenerate: {name} radius is {value} (radius {radius}, line width {line_width}, padding {padding})"
    )]
    DegenerateRing {
        name: &'static str,
        value: f64,
        radius: f64,
        line_width: f64,
        padding: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "WheelOptions")]
pub struct WheelConfig {
    radius: f64,
    line_width: f64,
    hue_colors: Vec<RgbColor>,
    shade_count: usize,
    use_string_format: bool,
    dynamic_cursor: bool,
    inner_radius: f64,
    center_radius: f64,
}

impl WheelConfig {
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn center_radius(&self) -> f64 {
        self.center_radius
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn hue_colors(&self) -> &[RgbColor] {
        &self.hue_colors
    }

    pub fn shade_count(&self) -> usize {
        self.shade_count
    }

    pub fn use_string_format(&self) -> bool {
        self.use_string_format
    }

    pub fn dynamic_cursor(&self) -> bool {
        self.dynamic_cursor
    }

    pub fn surface_side(&self) -> f64 {
        self.radius * 2.0
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

impl TryFrom<WheelOptions> for WheelConfig {
    type Error = ConfigError;

    fn try_from(opts: WheelOptions) -> Result<Self, Self::Error> {
        let radius = positive("radius", opts.radius)?;
        let line_width = positive("line width", opts.line_width)?;
        if !(opts.padding.is_finite() && opts.padding >= 0.0) {
            return Err(ConfigError::NegativePadding(opts.padding));
        }
        if opts.hue_colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if opts.shade_count == 0 {
            return Err(ConfigError::NoShades);
        }

        let padding = opts.padding;
        let inner_radius = radius - line_width - padding;
        let center_radius = inner_radius - line_width - padding;

        for (name, value) in [("inner", inner_radius), ("center", center_radius)] {
            if value <= 0.0 {
                return Err(ConfigError::DegenerateRing {
                    name,
                    value,
                    radius,
                    line_width,
                    padding,
                });
            }
        }

        Ok(Self {
            radius,
            line_width,
            hue_colors: opts.hue_colors,
            shade_count: opts.shade_count,
            use_string_format: opts.use_string_format,
            dynamic_cursor: opts.dynamic_cursor,
            inner_radius,
            center_radius,
        })
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
            hue_colors: DEFAULT_HUES.to_vec(),
            shade_count: DEFAULT_SHADE_COUNT,
            use_string_format: true,
            dynamic_cursor: false,
            inner_radius: DEFAULT_RADIUS - DEFAULT_LINE_WIDTH,
            center_radius: DEFAULT_RADIUS - 2.0 * DEFAULT_LINE_WIDTH,
        }
    }
}
