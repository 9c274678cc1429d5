use crate::bounds::{BoundsError, Region, RingLayout};
use crate::color::RgbColor;
use crate::config::WheelConfig;
use crate::geometry::{self, Point, PointerPosition, SurfaceBox, effective_radius, surface_center};
use crate::render::{SHADE_RING_OFFSET, WheelRenderer};
use crate::sampler::sample_at;
use crate::selection::{CursorStyle, Pick, SelectionState};
use crate::surface::{Surface, SurfaceError};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Rgb(RgbColor),
    Text(String),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => write!(f, "{} {} {}", c.r, c.g, c.b),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Selection {
    fn new(color: RgbColor, use_string_format: bool) -> Self {
        if use_string_format {
            Self::Text(color.to_string())
        } else {
            Self::Rgb(color)
        }
    }
}

pub type SelectionCallback = Box<dyn FnMut(&Selection)>;

pub struct ColourWheel<S: Surface> {
    config: WheelConfig,
    layout: RingLayout,
    surface: S,
    state: SelectionState,
    on_select: SelectionCallback,
}

impl<S: Surface> ColourWheel<S> {
    pub fn new(
        config: WheelConfig,
        mut surface: S,
        on_select: impl FnMut(&Selection) + 'static,
    ) -> Result<Self, WheelError> {
        let layout = RingLayout::new(&config)?;
        WheelRenderer::new(&config).draw_hue_ring(&mut surface)?;

        Ok(Self {
            config,
            layout,
            surface,
            state: SelectionState::default(),
            on_select: Box::new(on_select),
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn classify(&self, position: &PointerPosition) -> Region {
        self.layout
            .classify(position.from_center, self.state.inner_ring_open())
    }

    pub fn click(
        &mut self,
        client: Point,
        surface_box: SurfaceBox,
    ) -> Result<Option<Selection>, WheelError> {
        let position = geometry::map_pointer(client, surface_box, self.config.radius());
        self.click_at(position)
    }

    pub fn hover(&self, client: Point, surface_box: SurfaceBox) -> Option<CursorStyle> {
        if !self.config.dynamic_cursor() {
            return None;
        }
        let position = geometry::map_pointer(client, surface_box, self.config.radius());
        Some(self.state.cursor_for(self.classify(&position)))
    }

    pub fn control(&mut self) -> WheelControl<'_, S> {
        WheelControl { wheel: self }
    }

    fn click_at(&mut self, position: PointerPosition) -> Result<Option<Selection>, WheelError> {
        let region = self.classify(&position);
        let Some(pick) = self.state.pick_for(region) else {
            log::debug!("Click in {region} ignored in phase {}", self.state.phase());
            return Ok(None);
        };

        let Some(sampled) = sample_at(&self.surface, position.on_surface)? else {
            log::debug!("Nothing painted under click in {region}");
            return Ok(None);
        };

        let Some(next) = self
            .state
            .transition(pick, sampled, self.config.shade_count())
        else {
            return Ok(None);
        };

        let renderer = WheelRenderer::new(&self.config);
        match pick {
            Pick::Hue => renderer.draw_shade_ring(&mut self.surface, next.shade_ramp())?,
            Pick::Shade => renderer.draw_center_swatch(&mut self.surface, sampled)?,
        }

        log::debug!("{} -> {} ({pick} {sampled})", self.state.phase(), next.phase());
        self.state = next;

        let selection = Selection::new(sampled, self.config.use_string_format());
        (self.on_select)(&selection);
        Ok(Some(selection))
    }

    fn ring_midpoint(
        &self,
        index: usize,
        count: usize,
        radius: f64,
        offset: f64,
    ) -> Option<PointerPosition> {
        let ring_radius = effective_radius(radius, self.config.line_width());
        let center = surface_center(self.config.radius());
        geometry::segment_midpoint(index, count, offset, center, ring_radius).map(|on_surface| {
            PointerPosition {
                on_surface,
                from_center: ring_radius,
            }
        })
    }
}

pub struct WheelControl<'a, S: Surface> {
    wheel: &'a mut ColourWheel<S>,
}

impl<S: Surface> WheelControl<'_, S> {
    /// Picks hue segment `index` as if its middle had been clicked.
    pub fn select_hue(&mut self, index: usize) -> Result<Option<Selection>, WheelError> {
        let config = &self.wheel.config;
        let position = self.wheel.ring_midpoint(
            index,
            config.hue_colors().len(),
            config.outer_radius(),
            0.0,
        );
        match position {
            Some(position) => self.wheel.click_at(position),
            None => Ok(None),
        }
    }

    /// Picks shade segment `index`; does nothing until a hue has been picked.
    pub fn select_shade(&mut self, index: usize) -> Result<Option<Selection>, WheelError> {
        let position = self.wheel.ring_midpoint(
            index,
            self.wheel.state.shade_ramp().len(),
            self.wheel.config.inner_radius(),
            SHADE_RING_OFFSET,
        );
        match position {
            Some(position) => self.wheel.click_at(position),
            None => Ok(None),
        }
    }

    pub fn reset(&mut self) -> Result<(), WheelError> {
        WheelRenderer::new(&self.wheel.config).draw_hue_ring(&mut self.wheel.surface)?;
        self.wheel.state = SelectionState::default();
        Ok(())
    }
}
