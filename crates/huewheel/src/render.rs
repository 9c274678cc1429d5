use crate::color::RgbColor;
use crate::config::WheelConfig;
use crate::geometry::{self, QUARTER_CIRCLE, effective_radius, surface_center};
use crate::surface::{Surface, SurfaceError};

/// Border stroked around the center swatch to seal its anti-aliased edge.
pub const SWATCH_BORDER_WIDTH: f64 = 0.1;

/// Shade segments start a quarter turn in, so the ramp begins at the bottom.
pub const SHADE_RING_OFFSET: f64 = QUARTER_CIRCLE;

// Equal-angle partitioning in floating point can leave a sub-pixel seam at
// the last segment of either ring. Left as is.
pub struct WheelRenderer<'a> {
    config: &'a WheelConfig,
}

impl<'a> WheelRenderer<'a> {
    pub fn new(config: &'a WheelConfig) -> Self {
        Self { config }
    }

    pub fn draw_hue_ring<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.clear()?;
        self.draw_ring(
            surface,
            self.config.outer_radius(),
            self.config.hue_colors(),
            0.0,
        )
    }

    /// Redraws the hue ring underneath, so anything inside it is wiped first.
    pub fn draw_shade_ring<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        shades: &[RgbColor],
    ) -> Result<(), SurfaceError> {
        self.draw_hue_ring(surface)?;
        self.draw_ring(
            surface,
            self.config.inner_radius(),
            shades,
            SHADE_RING_OFFSET,
        )
    }

    pub fn draw_center_swatch<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        color: RgbColor,
    ) -> Result<(), SurfaceError> {
        let center = surface_center(self.config.radius());
        let radius = self.config.center_radius();
        surface.fill_circle(center, radius, color)?;
        surface.stroke_circle(center, radius, SWATCH_BORDER_WIDTH, color)
    }

    fn draw_ring<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        radius: f64,
        colors: &[RgbColor],
        offset: f64,
    ) -> Result<(), SurfaceError> {
        let center = surface_center(self.config.radius());
        let line_width = self.config.line_width();
        let stroke_radius = effective_radius(radius, line_width);

        for (segment, &color) in geometry::segments(colors.len(), offset).zip(colors) {
            surface.stroke_arc(
                center,
                stroke_radius,
                segment.start,
                segment.end,
                line_width,
                color,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WheelOptions;
    use crate::geometry::{FULL_CIRCLE, Point};
    use crate::surface::CairoSurface;
    use crate::testing::{DrawOp, RasterSurface};
    use std::f64::consts::PI;

    const RED: RgbColor = RgbColor::new(255, 0, 0);
    const GREEN: RgbColor = RgbColor::new(0, 255, 0);
    const BLUE: RgbColor = RgbColor::new(0, 0, 255);

    fn rgb_config() -> WheelConfig {
        WheelConfig::try_from(WheelOptions {
            hue_colors: vec![RED, GREEN, BLUE],
            ..WheelOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn test_hue_ring_arcs() {
        let config = rgb_config();
        let mut surface = RasterSurface::new(400);
        WheelRenderer::new(&config).draw_hue_ring(&mut surface).unwrap();

        assert_eq!(surface.ops()[0], DrawOp::Clear);
        let arcs = surface.arcs();
        assert_eq!(arcs.len(), 3);
        let expected = [(0.0, RED), (2.0 * PI / 3.0, GREEN), (4.0 * PI / 3.0, BLUE)];
        for ((start, end, color), (want_start, want_color)) in arcs.iter().zip(expected) {
            assert!((start - want_start).abs() < 1e-12);
            assert!((end - start - FULL_CIRCLE / 3.0).abs() < 1e-12);
            assert_eq!(*color, want_color);
        }

        for op in surface.visible_ops() {
            if let DrawOp::Arc {
                center,
                radius,
                line_width,
                ..
            } = op
            {
                assert_eq!(*center, Point::new(200.0, 200.0));
                assert_eq!(*radius, 175.0);
                assert_eq!(*line_width, 50.0);
            }
        }
    }

    #[test]
    fn test_shade_ring_redraws_hue_ring_first() {
        let config = rgb_config();
        let mut surface = RasterSurface::new(400);
        let shades = vec![RgbColor::WHITE, RED, RgbColor::BLACK, GREEN];
        WheelRenderer::new(&config)
            .draw_shade_ring(&mut surface, &shades)
            .unwrap();

        let arcs = surface.arcs();
        assert_eq!(arcs.len(), 7);
        let shade_arcs = &arcs[3..];
        for (i, (start, _, color)) in shade_arcs.iter().enumerate() {
            let want = QUARTER_CIRCLE + FULL_CIRCLE / 4.0 * i as f64;
            assert!((start - want).abs() < 1e-12);
            assert_eq!(*color, shades[i]);
        }

        let inner_radii: Vec<_> = surface.visible_ops()[3..]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Arc { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(inner_radii, vec![125.0; 4]);
    }

    #[test]
    fn test_center_swatch() {
        let config = rgb_config();
        let mut surface = RasterSurface::new(400);
        WheelRenderer::new(&config)
            .draw_center_swatch(&mut surface, GREEN)
            .unwrap();

        assert_eq!(
            surface.ops(),
            &[
                DrawOp::Disc {
                    center: Point::new(200.0, 200.0),
                    radius: 100.0,
                    color: GREEN,
                },
                DrawOp::Arc {
                    center: Point::new(200.0, 200.0),
                    radius: 100.0,
                    start: 0.0,
                    end: FULL_CIRCLE,
                    line_width: SWATCH_BORDER_WIDTH,
                    color: GREEN,
                },
            ]
        );
    }

    #[test]
    fn test_cairo_hue_ring_samples_segment_colors() {
        let config = rgb_config();
        let mut surface = CairoSurface::new(config.surface_side()).unwrap();
        WheelRenderer::new(&config).draw_hue_ring(&mut surface).unwrap();

        let center = surface_center(config.radius());
        for (segment, want) in geometry::segments(3, 0.0).zip([RED, GREEN, BLUE]) {
            let p = geometry::point_at(center, 175.0, segment.mid());
            let got = surface.pixel(p.x as u32, p.y as u32).unwrap();
            assert_eq!(got, Some(want));
        }
        assert_eq!(surface.pixel(200, 200).unwrap(), None);
    }
}
