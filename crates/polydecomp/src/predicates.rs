//! Geometric predicates on raw `f64` points.
//!
//! Purpose
//! - Orientation (`side`), strict containment in a convex polygon (`is_inside`),
//!   and the interior-angle convexity test (`is_convex_turn`) used by notch
//!   detection and chain growth.
//! - `Bounds2` and `signed_area` support pruning and input validation.
//!
//! Conventions
//! - Polygons are clockwise: the interior lies to the right of every directed edge.
//! - No epsilons. Every predicate works on full-precision `f64` values and only an
//!   exact zero counts as collinear.

use nalgebra::Vector2;

/// Position of a point relative to a directed line `a → b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}

/// Side of `p` relative to the directed line `a → b` (sign of `(b−a) × (p−a)`).
#[inline]
pub fn side(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> Side {
    let c = cross(a, b, p);
    if c > 0.0 {
        Side::Left
    } else if c < 0.0 {
        Side::Right
    } else {
        Side::On
    }
}

/// True iff `p` lies strictly right of every edge of the clockwise convex polygon.
///
/// Boundary points and exterior points both return false.
pub fn is_inside(p: Vector2<f64>, convex: &[Vector2<f64>]) -> bool {
    let n = convex.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| side(convex[i], convex[(i + 1) % n], p) == Side::Right)
}

/// True iff the interior angle at `p2` (walking `p1 → p2 → p3` clockwise) is at most 180°.
///
/// The angle is `atan2(det, dot)` of `(p1−p2)` and `(p3−p2)` mapped to `[0°, 360°)`.
/// Two degenerate shapes always count as convex:
/// - three points on one horizontal or vertical line;
/// - a straight angle whose cosine evaluates to exactly −1.
pub fn is_convex_turn(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> bool {
    if p1.y == p2.y && p2.y == p3.y {
        return true;
    }
    if p1.x == p2.x && p2.x == p3.x {
        return true;
    }
    let u = p1 - p2;
    let v = p3 - p2;
    let dot = u.dot(&v);
    let det = u.x * v.y - u.y * v.x;
    let theta = det.atan2(dot);
    if theta.cos() == -1.0 {
        return true;
    }
    let degrees = if theta < 0.0 {
        theta.to_degrees() + 360.0
    } else {
        theta.to_degrees()
    };
    degrees <= 180.0
}

/// Shoelace signed area; positive for counter-clockwise order.
pub fn signed_area(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Axis-aligned bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    /// Smallest rectangle containing `points`; `None` for an empty slice.
    pub fn of(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut b = Bounds2 {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }

    /// Inclusive on all four sides.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
