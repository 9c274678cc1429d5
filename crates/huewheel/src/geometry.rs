use std::f64::consts::{FRAC_PI_2, TAU};

pub const FULL_CIRCLE: f64 = TAU;
pub const QUARTER_CIRCLE: f64 = FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceBox {
    pub left: f64,
    pub top: f64,
}

impl SurfaceBox {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub on_surface: Point,
    pub from_center: f64,
}

pub fn surface_center(radius: f64) -> Point {
    Point::new(radius, radius)
}

pub fn map_pointer(client: Point, surface_box: SurfaceBox, radius: f64) -> PointerPosition {
    let on_surface = Point::new(client.x - surface_box.left, client.y - surface_box.top);
    PointerPosition {
        on_surface,
        from_center: on_surface.distance_to(surface_center(radius)),
    }
}

pub fn effective_radius(radius: f64, line_width: f64) -> f64 {
    radius - line_width / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

pub fn segments(count: usize, offset: f64) -> impl Iterator<Item = Segment> {
    let step = FULL_CIRCLE / count.max(1) as f64;
    (0..count).map(move |i| Segment {
        start: step * i as f64 + offset,
        end: step * (i + 1) as f64 + offset,
    })
}

pub fn point_at(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

pub fn segment_midpoint(
    index: usize,
    count: usize,
    offset: f64,
    center: Point,
    ring_radius: f64,
) -> Option<Point> {
    segments(count, offset)
        .nth(index)
        .map(|segment| point_at(center, ring_radius, segment.mid()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_map_pointer_offsets_by_surface_box() {
        let pos = map_pointer(Point::new(310.0, 120.0), SurfaceBox::new(10.0, 20.0), 200.0);
        assert_eq!(pos.on_surface, Point::new(300.0, 100.0));
        assert!((pos.from_center - 100.0_f64.hypot(100.0)).abs() < EPS);
    }

    #[test]
    fn test_map_pointer_dead_center() {
        let pos = map_pointer(Point::new(250.0, 250.0), SurfaceBox::new(50.0, 50.0), 200.0);
        assert_eq!(pos.from_center, 0.0);
    }

    #[test]
    fn test_effective_radius() {
        assert_eq!(effective_radius(200.0, 50.0), 175.0);
        assert_eq!(effective_radius(10.0, 3.0), 8.5);
    }

    #[test]
    fn test_segments_partition_full_turn() {
        let n = 7;
        let segs: Vec<_> = segments(n, 0.0).collect();
        assert_eq!(segs.len(), n);
        assert_eq!(segs[0].start, 0.0);
        for (i, seg) in segs.iter().enumerate() {
            assert!((seg.start - FULL_CIRCLE / n as f64 * i as f64).abs() < EPS);
            assert!((seg.end - seg.start - FULL_CIRCLE / n as f64).abs() < EPS);
        }
        for pair in segs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!((segs[n - 1].end - FULL_CIRCLE).abs() < EPS);
    }

    #[test]
    fn test_three_hues_start_at_thirds() {
        let starts: Vec<_> = segments(3, 0.0).map(|s| s.start).collect();
        assert_eq!(starts[0], 0.0);
        assert!((starts[1] - 2.0 * std::f64::consts::PI / 3.0).abs() < EPS);
        assert!((starts[2] - 4.0 * std::f64::consts::PI / 3.0).abs() < EPS);
    }

    #[test]
    fn test_segment_midpoint() {
        let center = surface_center(100.0);
        // one segment per quadrant, offset a quarter turn: index 0 spans [pi/2, pi)
        let p = segment_midpoint(0, 4, QUARTER_CIRCLE, center, 50.0).unwrap();
        let angle = 3.0 * std::f64::consts::FRAC_PI_4;
        assert!((p.x - (100.0 + 50.0 * angle.cos())).abs() < EPS);
        assert!((p.y - (100.0 + 50.0 * angle.sin())).abs() < EPS);
        assert!((p.distance_to(center) - 50.0).abs() < EPS);
        assert!(segment_midpoint(4, 4, 0.0, center, 50.0).is_none());
    }
}
