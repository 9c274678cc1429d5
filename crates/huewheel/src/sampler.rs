use crate::color::RgbColor;
use crate::geometry::Point;
use crate::surface::{Surface, SurfaceError};

/// Reads back what was actually painted under `point`, anti-aliasing included.
/// Returns `None` off the surface or over unpainted pixels.
pub fn sample_at<S: Surface + ?Sized>(
    surface: &S,
    point: Point,
) -> Result<Option<RgbColor>, SurfaceError> {
    let (width, height) = surface.size();
    let (x, y) = (point.x.floor(), point.y.floor());

    if !(x >= 0.0 && y >= 0.0 && x < width as f64 && y < height as f64) {
        log::debug!("Sample at ({}, {}) is off the surface", point.x, point.y);
        return Ok(None);
    }

    surface.pixel(x as u32, y as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RasterSurface;

    #[test]
    fn test_off_surface_is_none() {
        let mut surface = RasterSurface::new(10);
        surface
            .fill_circle(Point::new(5.0, 5.0), 20.0, RgbColor::WHITE)
            .unwrap();

        for p in [
            Point::new(-0.5, 3.0),
            Point::new(3.0, -1.0),
            Point::new(10.0, 3.0),
            Point::new(3.0, 10.0),
            Point::new(f64::NAN, 3.0),
        ] {
            assert_eq!(sample_at(&surface, p).unwrap(), None, "{p:?}");
        }
        assert_eq!(
            sample_at(&surface, Point::new(9.99, 0.0)).unwrap(),
            Some(RgbColor::WHITE)
        );
    }

    #[test]
    fn test_unpainted_is_none() {
        let surface = RasterSurface::new(10);
        assert_eq!(sample_at(&surface, Point::new(5.0, 5.0)).unwrap(), None);
    }
}
