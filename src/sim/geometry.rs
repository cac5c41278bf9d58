//! Planar geometry helpers
//!
//! Only what the claim engine needs: polygon area, axis-aligned boxes,
//! segment tests and the region collision approximation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square box of half-extent `half` around `center`
    pub fn from_center(center: Vec2, half: f32) -> Self {
        Self {
            min: center - Vec2::splat(half),
            max: center + Vec2::splat(half),
        }
    }

    /// Bounding box of a point set (None when empty)
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut rect = Self::new(*first, *first);
        for p in rest {
            rect.min = rect.min.min(*p);
            rect.max = rect.max.max(*p);
        }
        Some(rect)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Interior overlap. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Closed containment test
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.min.x && x <= self.max.x
    }

    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.min.y && y <= self.max.y
    }
}

/// Unsigned polygon area (shoelace formula). Accumulates in f64 so that
/// arena-sized polygons keep integer precision.
pub fn polygon_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += f64::from(a.x) * f64::from(b.y) - f64::from(b.x) * f64::from(a.y);
    }
    (sum.abs() * 0.5) as f32
}

/// Vertices of a regular polygon centred on the origin, first vertex at
/// `rotation` radians
pub fn regular_polygon(radius: f32, sides: usize, rotation: f32) -> Vec<Vec2> {
    let step = std::f32::consts::TAU / sides as f32;
    (0..sides)
        .map(|i| {
            let angle = rotation + i as f32 * step;
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Check whether segment `a`-`b` touches `rect` (Liang-Barsky clip)
pub fn segment_intersects_rect(a: Vec2, b: Vec2, rect: &Rect) -> bool {
    let d = b - a;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    let edges = [
        (-d.x, a.x - rect.min.x),
        (d.x, rect.max.x - a.x),
        (-d.y, a.y - rect.min.y),
        (d.y, rect.max.y - a.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return false;
        }
    }
    true
}

/// Check whether segments `a`-`b` and `c`-`d` share at least one point,
/// including collinear overlap
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let d1 = orientation(c, d, a);
    let d2 = orientation(c, d, b);
    let d3 = orientation(a, b, c);
    let d4 = orientation(a, b, d);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(c, d, a))
        || (d2 == 0.0 && on_segment(c, d, b))
        || (d3 == 0.0 && on_segment(a, b, c))
        || (d4 == 0.0 && on_segment(a, b, d))
}

#[inline]
fn orientation(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

/// `p` is known collinear with `a`-`b`; check it lies within the segment box
#[inline]
fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Collision test between a probe box and a claimed region.
///
/// Hazard bounces go through this trait so that an exact polygon test can
/// replace the bounding-box approximation without touching the physics.
pub trait RegionTest {
    /// Does `probe` collide with the region outlined by `vertices`?
    /// `bounds` is the region's precomputed bounding box.
    fn collides(&self, probe: &Rect, vertices: &[Vec2], bounds: &Rect) -> bool;
}

/// Treats every claimed region as its axis-aligned bounding box
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxTest;

impl RegionTest for BoundingBoxTest {
    fn collides(&self, probe: &Rect, _vertices: &[Vec2], bounds: &Rect) -> bool {
        probe.overlaps(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_area_rectangle() {
        let square = [
            Vec2::new(10.0, 10.0),
            Vec2::new(110.0, 10.0),
            Vec2::new(110.0, 60.0),
            Vec2::new(10.0, 60.0),
        ];
        assert!((polygon_area(&square) - 5000.0).abs() < 0.001);

        // Winding does not change the unsigned area
        let mut reversed = square;
        reversed.reverse();
        assert!((polygon_area(&reversed) - 5000.0).abs() < 0.001);
    }

    #[test]
    fn test_polygon_area_degenerate() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[Vec2::ZERO, Vec2::ONE]), 0.0);
        // Collinear points enclose nothing
        let line = [Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0)];
        assert_eq!(polygon_area(&line), 0.0);
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), 5.0);
        let touching = Rect::from_center(Vec2::new(10.0, 0.0), 5.0);
        let overlapping = Rect::from_center(Vec2::new(9.0, 0.0), 5.0);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
        assert!(overlapping.overlaps(&a));
    }

    #[test]
    fn test_rect_from_points() {
        assert!(Rect::from_points(&[]).is_none());
        let rect = Rect::from_points(&[
            Vec2::new(3.0, 9.0),
            Vec2::new(-1.0, 4.0),
            Vec2::new(7.0, 5.0),
        ])
        .unwrap();
        assert_eq!(rect.min, Vec2::new(-1.0, 4.0));
        assert_eq!(rect.max, Vec2::new(7.0, 9.0));
        assert!(rect.contains(Vec2::new(0.0, 5.0)));
        assert!(!rect.contains(Vec2::new(8.0, 5.0)));
    }

    #[test]
    fn test_segment_intersects_rect() {
        let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));

        // Crosses straight through
        assert!(segment_intersects_rect(Vec2::new(0.0, 15.0), Vec2::new(30.0, 15.0), &rect));
        // Ends inside
        assert!(segment_intersects_rect(Vec2::new(0.0, 0.0), Vec2::new(15.0, 15.0), &rect));
        // Passes above
        assert!(!segment_intersects_rect(Vec2::new(0.0, 5.0), Vec2::new(30.0, 5.0), &rect));
        // Vertical segment beside the box
        assert!(!segment_intersects_rect(Vec2::new(25.0, 0.0), Vec2::new(25.0, 30.0), &rect));
        // Stops short
        assert!(!segment_intersects_rect(Vec2::new(0.0, 15.0), Vec2::new(9.0, 15.0), &rect));
    }

    #[test]
    fn test_segments_intersect() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);

        // Perpendicular crossing
        assert!(segments_intersect(a, b, Vec2::new(5.0, -5.0), Vec2::new(5.0, 5.0)));
        // T-junction touching
        assert!(segments_intersect(a, b, Vec2::new(5.0, 0.0), Vec2::new(5.0, 5.0)));
        // Collinear overlap
        assert!(segments_intersect(a, b, Vec2::new(8.0, 0.0), Vec2::new(15.0, 0.0)));
        // Collinear but disjoint
        assert!(!segments_intersect(a, b, Vec2::new(11.0, 0.0), Vec2::new(15.0, 0.0)));
        // Parallel
        assert!(!segments_intersect(a, b, Vec2::new(0.0, 1.0), Vec2::new(10.0, 1.0)));
    }

    #[test]
    fn test_regular_polygon() {
        let pts = regular_polygon(10.0, 5, 0.0);
        assert_eq!(pts.len(), 5);
        assert!((pts[0] - Vec2::new(10.0, 0.0)).length() < 0.001);
        for p in &pts {
            assert!((p.length() - 10.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_bounding_box_test_uses_bounds_only() {
        // L-shaped region: the probe sits in the notch, outside the polygon
        // but inside its bounding box
        let l_shape = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 20.0),
            Vec2::new(20.0, 20.0),
            Vec2::new(20.0, 100.0),
            Vec2::new(0.0, 100.0),
        ];
        let bounds = Rect::from_points(&l_shape).unwrap();
        let probe = Rect::from_center(Vec2::new(70.0, 70.0), 5.0);
        assert!(BoundingBoxTest.collides(&probe, &l_shape, &bounds));

        let outside = Rect::from_center(Vec2::new(200.0, 70.0), 5.0);
        assert!(!BoundingBoxTest.collides(&outside, &l_shape, &bounds));
    }
}
