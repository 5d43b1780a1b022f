use std::ops;

use crate::consts::*;
use crate::r3::vector::Vector;
use crate::s1::angle::Angle;
use crate::sphere::cap::Cap;
use crate::sphere::cell::Cell;
use crate::sphere::latlng::LatLng;
use crate::sphere::predicates::{robust_sign, Direction};
use crate::sphere::rect::Rect;
use crate::sphere::region::Region;

/// Point represents a point on the unit sphere as a normalized 3D vector.
/// Fields should be treated as read-only; use one of the factory methods for
/// creation.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point(pub Vector);

impl ops::Add<Point> for Point {
    type Output = Point;
    fn add(self, other: Point) -> Self::Output {
        Point(self.0 + other.0)
    }
}

impl ops::Sub<Point> for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Self::Output {
        Point(self.0 - other.0)
    }
}

impl ops::Mul<f64> for Point {
    type Output = Point;
    fn mul(self, m: f64) -> Self::Output {
        Point(self.0 * m)
    }
}

impl ops::Neg for Point {
    type Output = Point;
    fn neg(self) -> Self::Output {
        Point(-self.0)
    }
}

/// ORIGIN is a unique "origin" on the sphere for operations that need a fixed
/// reference point, in particular the point at infinity for point-in-polygon
/// testing by edge-crossing parity.
///
/// It is not a point commonly supplied to edge tests (which rules out the
/// poles), and it is not on the boundary of any low-level cell, so using it
/// never triggers degenerate-case handling.
pub const ORIGIN: Point = Point(Vector {
    x: 0.00456762077230,
    y: 0.99947476613078,
    z: 0.03208315302933,
});

impl Point {
    /// from_coords creates a new normalized point from coordinates.
    ///
    /// This always returns a valid point: the zero vector, which cannot be
    /// normalized, maps to the fixed origin point.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        if x == 0. && y == 0. && z == 0. {
            Point::origin()
        } else {
            Point(Vector { x, y, z }.normalize())
        }
    }

    pub fn origin() -> Self {
        ORIGIN
    }

    /// cross returns a point orthogonal to both self and other. This is
    /// similar to the plain cross product of the underlying vectors except
    /// that it does a better job of ensuring orthogonality when the points
    /// are nearly parallel, and it returns a non-zero result even when
    /// self == other or self == -other.
    ///
    /// It satisfies the following properties (f == cross):
    ///
    /// ```text
    /// (1) f(p, op) != 0 for all p, op
    /// (2) f(op, p) == -f(p, op) unless p == op or p == -op
    /// (3) f(-p, op) == -f(p, op) unless p == op or p == -op
    /// (4) f(p, -op) == -f(p, op) unless p == op or p == -op
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let v = (self.0 + other.0).cross(&(other.0 - self.0));

        // Compare exactly to the zero vector.
        if v.x == 0. && v.y == 0. && v.z == 0. {
            // The only result that makes sense mathematically is zero, but an
            // arbitrary orthogonal vector is more convenient downstream.
            Point(self.0.ortho())
        } else {
            Point(v)
        }
    }

    /// distance returns the angle between the two points.
    pub fn distance(&self, b: &Point) -> Angle {
        self.0.angle(&b.0)
    }

    /// approx_eq reports whether the two points are similar enough to be
    /// considered equal.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.0.angle(&other.0).0 <= EPSILON
    }

    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    /// contains reports whether this point region consists of the other.
    pub fn contains(&self, other: &Point) -> bool {
        self == other
    }
}

/// ordered_ccw returns true if the edges OA, OB, and OC are encountered in
/// that order while sweeping CCW around the point O.
///
/// Equivalently, it tests whether B is contained in the range of angles
/// (inclusive) that starts at A and extends CCW to C. Properties:
///
///  (1) If ordered_ccw(a,b,c,o) && ordered_ccw(b,a,c,o), then a == b
///  (2) If ordered_ccw(a,b,c,o) && ordered_ccw(a,c,b,o), then b == c
///  (3) If ordered_ccw(a,b,c,o) && ordered_ccw(c,b,a,o), then a == b == c
///  (4) If a == b or b == c, then ordered_ccw(a,b,c,o) is true
///  (5) Otherwise if a == c, then ordered_ccw(a,b,c,o) is false
pub fn ordered_ccw(a: &Point, b: &Point, c: &Point, o: &Point) -> bool {
    let mut sum = 0;
    if robust_sign(b, o, a) != Direction::Clockwise {
        sum += 1;
    }
    if robust_sign(c, o, b) != Direction::Clockwise {
        sum += 1;
    }
    if robust_sign(a, o, c) == Direction::CounterClockwise {
        sum += 1;
    }
    sum >= 2
}

/// point_area returns the area on the unit sphere of the triangle defined by
/// the given points.
///
/// The method is based on l'Huilier's theorem,
///
///   tan(E/4) = sqrt(tan(s/2) tan((s-a)/2) tan((s-b)/2) tan((s-c)/2))
///
/// where E is the spherical excess of the triangle (i.e. its area), a, b, c
/// are the side lengths and s is the semiperimeter (a + b + c) / 2.
///
/// The only significant source of error in l'Huilier's method is the
/// cancellation of the terms (s-a), (s-b), (s-c), giving a *relative* error
/// of about 1e-16 · s / min(s-a, s-b, s-c). Girard's formula has a relative
/// error of about 1e-15 / E, which degrades badly for small triangles (a
/// triangle with true area 1e-30 can evaluate to 1e-5), so l'Huilier is
/// preferred except when dmin = min(s-a, s-b, s-c) < s · (0.1 · E) — i.e.
/// for extremely long and skinny triangles.
///
/// Since E is not known in advance, a conservative bound
/// E <= k1 · s · sqrt(s · dmin) with k1 = 2·sqrt(3)/π (about 1) shows that
/// l'Huilier is always the right choice when dmin >= k2 · s⁵ with k2 about
/// 1e-2. When dmin < k2 · s⁵ the area is at most k3 · s⁴ with k3 about 0.1,
/// so Girard is not even worth considering unless s >= 3e-4 or so.
pub fn point_area(a: &Point, b: &Point, c: &Point) -> f64 {
    let sa = b.0.angle(&c.0).0;
    let sb = c.0.angle(&a.0).0;
    let sc = a.0.angle(&b.0).0;
    let s = 0.5 * (sa + sb + sc);
    if s >= 3e-4 {
        // Consider whether Girard's formula might be more accurate.
        let dmin = s - sa.max(sb.max(sc));
        if dmin < 1e-2 * s * s * s * s * s {
            // This triangle is skinny enough for Girard's formula.
            let ab = a.cross(b);
            let bc = b.cross(c);
            let ac = a.cross(c);
            let area = (ab.0.angle(&ac.0).0 - ab.0.angle(&bc.0).0 + bc.0.angle(&ac.0).0).max(0.);

            if dmin < s * 0.1 * area {
                return area;
            }
        }
    }

    // Use l'Huilier's formula.
    4. * ((0.5 * s).tan()
        * (0.5 * (s - sa)).tan()
        * (0.5 * (s - sb)).tan()
        * (0.5 * (s - sc)).tan())
    .max(0.)
    .sqrt()
    .atan()
}

/// true_centroid returns the true centroid of the spherical triangle ABC
/// multiplied by the signed area of the triangle. The result is not
/// normalized. All points must have unit length.
///
/// The true centroid (mass centroid) is the surface integral over the
/// triangle of (x,y,z) divided by the triangle area; it is the quantity to
/// sum when computing the centroid of a union or difference of triangles,
/// because unlike the planar and surface centroids it behaves linearly as
/// regions are added and subtracted.
pub fn true_centroid(a: &Point, b: &Point, c: &Point) -> Point {
    let sa = b.distance(c).0;
    let sb = c.distance(a).0;
    let sc = a.distance(b).0;
    let ra = if sa == 0. { 1. } else { sa / sa.sin() };
    let rb = if sb == 0. { 1. } else { sb / sb.sin() };
    let rc = if sc == 0. { 1. } else { sc / sc.sin() };

    // Now compute a point M such that
    //
    //   [Ax Ay Az] [Mx]                       [ra]
    //   [Bx By Bz] [My]  = 0.5 * det(A,B,C) * [rb]
    //   [Cx Cy Cz] [Mz]                       [rc]
    //
    // To improve the numerical stability, subtract the first row (A) from the
    // other two; this reduces cancellation when A, B and C are very close
    // together. Then solve with Cramer's rule.
    let x = Vector::new(a.0.x, b.0.x - a.0.x, c.0.x - a.0.x);
    let y = Vector::new(a.0.y, b.0.y - a.0.y, c.0.y - a.0.y);
    let z = Vector::new(a.0.z, b.0.z - a.0.z, c.0.z - a.0.z);
    let r = Vector::new(ra, rb - ra, rc - ra);

    Point(
        Vector::new(
            y.cross(&z).dot(&r),
            z.cross(&x).dot(&r),
            x.cross(&y).dot(&r),
        ) * 0.5,
    )
}

/// planar_centroid returns the centroid of the planar triangle ABC, not
/// normalized. It can be normalized to unit length to obtain the "surface
/// centroid" of the corresponding spherical triangle, i.e. the intersection
/// of the three medians.
///
/// Note that for large triangles the surface centroid can be nowhere near the
/// intuitive center: for the quarter-sphere triangle A=(1,eps,0), B=(0,0,1),
/// C=(-1,eps,0) it lies within 2·eps of B, while the true centroid is at
/// (0, 0.5, 0.5) before projection.
pub fn planar_centroid(a: &Point, b: &Point, c: &Point) -> Point {
    Point((a.0 + b.0 + c.0) * (1. / 3.))
}

impl Region for Point {
    /// cap_bound returns a zero-radius cap at this point.
    fn cap_bound(&self) -> Cap {
        Cap::from_point(self)
    }

    /// rect_bound returns a degenerate rectangle at this point.
    fn rect_bound(&self) -> Rect {
        Rect::from(LatLng::from(self))
    }

    /// contains_cell returns false: a point contains no cell.
    fn contains_cell(&self, _: &Cell) -> bool {
        false
    }

    /// intersects_cell reports whether this point is inside the given cell.
    fn intersects_cell(&self, c: &Cell) -> bool {
        c.contains_point(self)
    }
}
