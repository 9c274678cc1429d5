//! Shade ramps for the inner ring.
//!
//! A ramp runs from a pale tint of the base colour, through the base colour
//! itself, down to a deep shade of it. Both halves are linear interpolations
//! in sRGB, so every channel is non-increasing along the ramp and the hue's
//! channel ratios survive on the dark side.

use crate::color::RgbColor;
use palette::{Mix, Srgb};

pub const TINT_LIMIT: f32 = 0.9;
pub const SHADE_LIMIT: f32 = 0.9;

pub fn produce_shades(base: RgbColor, count: usize) -> Vec<RgbColor> {
    let base: Srgb<f32> = base.into();
    let light = base.mix(Srgb::new(1.0, 1.0, 1.0), TINT_LIMIT);
    let dark = base.mix(Srgb::new(0.0, 0.0, 0.0), SHADE_LIMIT);

    match count {
        0 => Vec::new(),
        1 => vec![base.into()],
        _ => {
            let last = (count - 1) as f32;
            (0..count)
                .map(|i| ramp_at(light, base, dark, i as f32 / last).into())
                .collect()
        }
    }
}

fn ramp_at(light: Srgb<f32>, base: Srgb<f32>, dark: Srgb<f32>, t: f32) -> Srgb<f32> {
    if t <= 0.5 {
        light.mix(base, t * 2.0)
    } else {
        base.mix(dark, (t - 0.5) * 2.0)
    }
}
