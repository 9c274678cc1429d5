use crate::color::RgbColor;
use crate::geometry::Point;
use cairo::{Context, Format, ImageSurface};
use std::f64::consts::TAU;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Borrow(#[from] cairo::BorrowError),
    #[error("surface side must be positive, got {0}")]
    InvalidSize(f64),
}

pub trait Surface {
    fn size(&self) -> (u32, u32);

    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Strokes the arc from `start` to `end` (radians, clockwise in screen space).
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        line_width: f64,
        color: RgbColor,
    ) -> Result<(), SurfaceError>;

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: RgbColor,
    ) -> Result<(), SurfaceError>;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        line_width: f64,
        color: RgbColor,
    ) -> Result<(), SurfaceError> {
        self.stroke_arc(center, radius, 0.0, TAU, line_width, color)
    }

    /// Composited colour of the pixel at `(x, y)`; `None` when nothing opaque was painted there.
    /// Callers guarantee the coordinate is within `size()`.
    fn pixel(&self, x: u32, y: u32) -> Result<Option<RgbColor>, SurfaceError>;
}

pub struct CairoSurface {
    image: ImageSurface,
}

impl CairoSurface {
    pub fn new(side: f64) -> Result<Self, SurfaceError> {
        if !(side.is_finite() && side >= 1.0) {
            return Err(SurfaceError::InvalidSize(side));
        }
        let px = side.ceil() as i32;
        let image = ImageSurface::create(Format::ARgb32, px, px)?;
        Ok(Self { image })
    }

    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    fn context(&self, color: RgbColor) -> Result<Context, SurfaceError> {
        let cr = Context::new(&self.image)?;
        let (r, g, b) = color.to_unit();
        cr.set_source_rgb(r, g, b);
        Ok(cr)
    }
}

impl Surface for CairoSurface {
    fn size(&self) -> (u32, u32) {
        (self.image.width() as u32, self.image.height() as u32)
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        let cr = Context::new(&self.image)?;
        cr.set_operator(cairo::Operator::Clear);
        cr.paint()?;
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
        let cr = self.context(color)?;
        cr.set_line_width(line_width);
        cr.arc(center.x, center.y, radius, start, end);
        cr.stroke()?;
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: RgbColor,
    ) -> Result<(), SurfaceError> {
        let cr = self.context(color)?;
        cr.arc(center.x, center.y, radius, 0.0, TAU);
        cr.fill()?;
        Ok(())
    }

    fn pixel(&self, x: u32, y: u32) -> Result<Option<RgbColor>, SurfaceError> {
        self.image.flush();
        let stride = self.image.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;

        let mut argb = 0u32;
        self.image.with_data(|data| {
            if let Some(bytes) = data.get(offset..offset + 4) {
                argb = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            }
        })?;

        Ok(unpremultiply(argb))
    }
}

/// ARGB32 stores premultiplied channels in a native-endian `u32`.
fn unpremultiply(argb: u32) -> Option<RgbColor> {
    let alpha = argb >> 24;
    if alpha == 0 {
        return None;
    }
    let channel = |shift: u32| {
        let c = (argb >> shift) & 0xff;
        ((c * 255 + alpha / 2) / alpha).min(255) as u8
    };
    Some(RgbColor::new(channel(16), channel(8), channel(0)))
}
