//! Test double for [`Surface`]: records draw calls and answers pixel reads by
//! replaying them geometrically at the pixel center, without anti-aliasing.

use crate::color::RgbColor;
use crate::geometry::{FULL_CIRCLE, Point};
use crate::surface::{Surface, SurfaceError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Clear,
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        line_width: f64,
        color: RgbColor,
    },
    Disc {
        center: Point,
        radius: f64,
        color: RgbColor,
    },
}

impl DrawOp {
    fn covers(&self, p: Point) -> Option<RgbColor> {
        match *self {
            Self::Clear => None,
            Self::Arc {
                center,
                radius,
                start,
                end,
                line_width,
                color,
            } => {
                let on_ring = (p.distance_to(center) - radius).abs() <= line_width / 2.0;
                let angle = (p.y - center.y).atan2(p.x - center.x);
                let swept = end - start;
                let in_arc = swept >= FULL_CIRCLE || (angle - start).rem_euclid(FULL_CIRCLE) <= swept;
                (on_ring && in_arc).then_some(color)
            }
            Self::Disc {
                center,
                radius,
                color,
            } => (p.distance_to(center) <= radius).then_some(color),
        }
    }
}

#[derive(Debug, Default)]
pub struct RasterSurface {
    side: u32,
    ops: Vec<DrawOp>,
}

impl RasterSurface {
    pub fn new(side: u32) -> Self {
        Self {
            side,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn visible_ops(&self) -> &[DrawOp] {
        let from = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |i| i + 1);
        &self.ops[from..]
    }

    pub fn arcs(&self) -> Vec<(f64, f64, RgbColor)> {
        self.visible_ops()
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Arc {
                    start, end, color, ..
                } => Some((start, end, color)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.side, self.side)
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        line_width: f64,
        color: RgbColor,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Arc {
            center,
            radius,
            start,
            end,
            line_width,
            color,
        });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: RgbColor,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Disc {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn pixel(&self, x: u32, y: u32) -> Result<Option<RgbColor>, SurfaceError> {
        let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
        Ok(self
            .visible_ops()
            .iter()
            .rev()
            .find_map(|op| op.covers(p)))
    }
}
