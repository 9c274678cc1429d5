use crate::bounds::Region;
use crate::color::RgbColor;
use crate::shades::produce_shades;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Phase {
    HueUnselected,
    HueSelected,
    ShadeSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Pick {
    Hue,
    Shade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CursorStyle {
    Crosshair,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    HueUnselected,
    HueSelected {
        hue: RgbColor,
        shades: Vec<RgbColor>,
    },
    ShadeSelected {
        hue: RgbColor,
        shades: Vec<RgbColor>,
        shade: RgbColor,
    },
}

impl SelectionState {
    pub fn phase(&self) -> Phase {
        match self {
            Self::HueUnselected => Phase::HueUnselected,
            Self::HueSelected { .. } => Phase::HueSelected,
            Self::ShadeSelected { .. } => Phase::ShadeSelected,
        }
    }

    pub fn current_color(&self) -> Option<RgbColor> {
        match self {
            Self::HueUnselected => None,
            Self::HueSelected { hue, .. } => Some(*hue),
            Self::ShadeSelected { shade, .. } => Some(*shade),
        }
    }

    pub fn hue(&self) -> Option<RgbColor> {
        match self {
            Self::HueUnselected => None,
            Self::HueSelected { hue, .. } | Self::ShadeSelected { hue, .. } => Some(*hue),
        }
    }

    pub fn shade_ramp(&self) -> &[RgbColor] {
        match self {
            Self::HueUnselected => &[],
            Self::HueSelected { shades, .. } | Self::ShadeSelected { shades, .. } => shades,
        }
    }

    pub fn inner_ring_open(&self) -> bool {
        !matches!(self, Self::HueUnselected)
    }

    pub fn pick_for(&self, region: Region) -> Option<Pick> {
        match region {
            Region::OuterRing => Some(Pick::Hue),
            Region::InnerRing if self.inner_ring_open() => Some(Pick::Shade),
            _ => None,
        }
    }

    /// Next state after `sampled` was read under a click resolved to `pick`.
    /// Returns `None` for a shade pick before any hue exists.
    pub fn transition(&self, pick: Pick, sampled: RgbColor, shade_count: usize) -> Option<Self> {
        match (pick, self) {
            (Pick::Hue, _) => Some(Self::HueSelected {
                hue: sampled,
                shades: produce_shades(sampled, shade_count),
            }),
            (Pick::Shade, Self::HueUnselected) => None,
            (Pick::Shade, Self::HueSelected { hue, shades })
            | (Pick::Shade, Self::ShadeSelected { hue, shades, .. }) => Some(Self::ShadeSelected {
                hue: *hue,
                shades: shades.clone(),
                shade: sampled,
            }),
        }
    }

    pub fn cursor_for(&self, region: Region) -> CursorStyle {
        match self.pick_for(region) {
            Some(_) => CursorStyle::Crosshair,
            None => CursorStyle::Default,
        }
    }
}
