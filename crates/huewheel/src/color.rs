use derive_more::Display;
use palette::Srgb;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, SerializeDisplay, DeserializeFromStr,
)]
#[display("rgb({r}, {g}, {b})")]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_unit(&self) -> (f64, f64, f64) {
        Srgb::new(self.r, self.g, self.b)
            .into_format::<f64>()
            .into_components()
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            // #rgb expands each digit: "f" -> "ff"
            3 => Some(Self::new(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    fn parse_functional(args: &str) -> Option<Self> {
        let mut parts = args.split(',').map(|p| p.trim().parse::<u8>().ok());
        let color = Self::new(parts.next()??, parts.next()??, parts.next()??);
        parts.next().is_none().then_some(color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour '{0}', expected #rgb, #rrggbb or rgb(r, g, b)")]
pub struct ParseColorError(pub String);

impl FromStr for RgbColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            Self::parse_hex(hex)
        } else {
            trimmed
                .strip_prefix("rgb(")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(Self::parse_functional)
        };
        parsed.ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl From<RgbColor> for Srgb<f32> {
    fn from(color: RgbColor) -> Self {
        Srgb::new(color.r, color.g, color.b).into_format()
    }
}

impl From<Srgb<f32>> for RgbColor {
    fn from(color: Srgb<f32>) -> Self {
        let c: Srgb<u8> = color.into_format();
        Self::new(c.red, c.green, c.blue)
    }
}

pub const DEFAULT_HUES: [RgbColor; 24] = [
    RgbColor::new(0xff, 0x00, 0x00),
    RgbColor::new(0xff, 0x40, 0x00),
    RgbColor::new(0xff, 0x80, 0x00),
    RgbColor::new(0xff, 0xbf, 0x00),
    RgbColor::new(0xff, 0xff, 0x00),
    RgbColor::new(0xbf, 0xff, 0x00),
    RgbColor::new(0x80, 0xff, 0x00),
    RgbColor::new(0x40, 0xff, 0x00),
    RgbColor::new(0x00, 0xff, 0x00),
    RgbColor::new(0x00, 0xff, 0x40),
    RgbColor::new(0x00, 0xff, 0x80),
    RgbColor::new(0x00, 0xff, 0xbf),
    RgbColor::new(0x00, 0xff, 0xff),
    RgbColor::new(0x00, 0xbf, 0xff),
    RgbColor::new(0x00, 0x80, 0xff),
    RgbColor::new(0x00, 0x40, 0xff),
    RgbColor::new(0x00, 0x00, 0xff),
    RgbColor::new(0x40, 0x00, 0xff),
    RgbColor::new(0x80, 0x00, 0xff),
    RgbColor::new(0xbf, 0x00, 0xff),
    RgbColor::new(0xff, 0x00, 0xff),
    RgbColor::new(0xff, 0x00, 0xbf),
    RgbColor::new(0xff, 0x00, 0x80),
    RgbColor::new(0xff, 0x00, 0x40),
];
