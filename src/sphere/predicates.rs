/*
Copyright 2016 Google Inc. All rights reserved.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Orientation predicates that produce correct, consistent results on every
//! input, at reasonable cost. Consistency is achieved by computing a
//! conservative error bound for the straightforward evaluation and falling
//! back to a numerically stable reformulation when the bound is exceeded.
//!
//! The final fallback would be exact arithmetic; see `robust_sign` for what
//! callers must tolerate until that exists.

use crate::consts::DBL_EPSILON;
use crate::sphere::point::Point;

/// MAX_DETERMINANT_ERROR is the maximum error in computing the determinant
/// (C ⨯ A) · B where all vectors are unit length. From standard inequalities,
///
///   fl(A ⨯ B) = A ⨯ B + D  where  |D| <= (|A ⨯ B| + (2/sqrt(3))·|A|·|B|) · e
///
/// where fl() denotes floating-point evaluation and e is the rounding unit.
/// Similarly for the dot product,
///
///   fl(B · C) = B · C + d  where  |d| <= (|B · C| + 2·|B|·|C|) · e .
///
/// Applying both bounds to unit-length inputs and dropping the relative terms
/// (which cannot affect the sign) gives |error| <= (3 + 2/sqrt(3))·e, and a
/// further ulp of slack for the normalization error of the inputs.
pub const MAX_DETERMINANT_ERROR: f64 = 4.6125e-16;

/// DET_ERROR_MULTIPLIER scales the edge-length magnitudes when checking the
/// sign of the reformulated determinant ((A-C) ⨯ (B-C)) · C. By the same
/// technique the error is at most
///
///   |d| <= (3 + 6/sqrt(3)) · |A-C| · |B-C| · e
///
/// so a determinant larger in magnitude than this multiplier times
/// |A-C|·|B-C| has a certain sign.
pub const DET_ERROR_MULTIPLIER: f64 = 3.2321 * DBL_EPSILON;

/// Direction is the ordering of three points around a great circle.
/// Indeterminate is not an error: it marks a tie the caller must break.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Clockwise,
    Indeterminate,
    CounterClockwise,
}

impl Direction {
    /// reverse maps CCW to CW and back, fixing Indeterminate.
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Indeterminate => Direction::Indeterminate,
        }
    }
}

/// sign returns true if the points A, B, C are strictly counterclockwise and
/// false if they are clockwise or collinear (all on some great circle).
///
/// The determinant is evaluated as (C ⨯ A) · B rather than the textbook
/// (A ⨯ B) · C. The two are equal mathematically but not in floating point,
/// and this form makes swapping A and C a numerical negation:
///
///     (1) x ⨯ y == -(y ⨯ x)
///     (2) -x · y == -(x · y)
///
/// so sign(a,b,c) implies !sign(c,b,a) — there is no rounding regime where
/// both ABC and CBA report counterclockwise.
pub fn sign(a: &Point, b: &Point, c: &Point) -> bool {
    c.0.cross(&a.0).dot(&b.0) > 0.
}

/// robust_sign returns the ordering of the points: CounterClockwise,
/// Clockwise, or Indeterminate when two of the points are equal or the sign
/// could not be determined at the available precision.
///
/// The result satisfies:
///
///  (1) robust_sign(a,b,c) == Indeterminate if and only if a == b, b == c,
///      or c == a — up to ties the exact level would resolve, see below
///  (2) robust_sign(b,c,a) == robust_sign(a,b,c) for all a, b, c
///  (3) robust_sign(c,b,a) == robust_sign(a,b,c).reverse() for all a, b, c
///
/// It is not true in general that robust_sign(-a,b,c) is the reverse of
/// robust_sign(a,b,c), or any similar identity involving antipodal points.
///
/// The exact-arithmetic level is not implemented: three distinct, truly
/// collinear points (a measure-zero configuration that the stable level
/// cannot decide) also produce Indeterminate. Callers must treat that as a
/// tie rather than an error.
pub fn robust_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    match triage_sign(a, b, c) {
        Direction::Indeterminate => expensive_sign(a, b, c),
        sign => sign,
    }
}

/// triage_sign computes the determinant directly and returns its sign when
/// the magnitude exceeds MAX_DETERMINANT_ERROR, and Indeterminate otherwise.
pub fn triage_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    let det = c.0.cross(&a.0).dot(&b.0);
    if det > MAX_DETERMINANT_ERROR {
        Direction::CounterClockwise
    } else if det < -MAX_DETERMINANT_ERROR {
        Direction::Clockwise
    } else {
        Direction::Indeterminate
    }
}

/// stable_sign reports the direction of the points using the numerically
/// stable formulation of the determinant. Unlike triage_sign this can usually
/// find the sign even when the three points are nearly collinear: for points
/// spaced 1km apart along a random great circle, rounded to the nearest
/// representable points, it fails only about 0.4% of the time, and the rate
/// falls further as the points get closer together.
///
/// Nearly-antipodal point pairs are not special-cased; those fall through to
/// the exact level like any other undecidable input.
pub fn stable_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    let ab = b.0 - a.0;
    let bc = c.0 - b.0;
    let ca = a.0 - c.0;
    let ab2 = ab.norm2();
    let bc2 = bc.norm2();
    let ca2 = ca.norm2();

    // Cyclically permute the vertices so that AB is the longest edge; the
    // determinant is then ((A-C) ⨯ (B-C)) · C with the smallest-magnitude
    // cross product among the three choices. e1 and e2 are the two shortest
    // edges, pointing away from their shared vertex op.
    let (e1, e2, op) = if ab2 >= bc2 && ab2 >= ca2 {
        (ca, bc, &c.0)
    } else if bc2 >= ca2 {
        (ab, ca, &a.0)
    } else {
        (bc, ab, &b.0)
    };

    let det = -e1.cross(&e2).dot(op);
    let max_err = DET_ERROR_MULTIPLIER * (e1.norm2() * e2.norm2()).sqrt();

    if det > max_err {
        Direction::CounterClockwise
    } else if det < -max_err {
        Direction::Clockwise
    } else {
        Direction::Indeterminate
    }
}

/// expensive_sign resolves the cases triage_sign could not. It returns
/// Indeterminate if two of the input points are equal, and otherwise works
/// through progressively more precise (and expensive) evaluations.
fn expensive_sign(a: &Point, b: &Point, c: &Point) -> Direction {
    // Equal inputs are the only inputs for which Indeterminate is the
    // contractual answer; settle them before spending anything.
    if a == b || b == c || c == a {
        return Direction::Indeterminate;
    }

    // The stable recomputation is much cheaper than exact arithmetic and
    // decides virtually every input except truly collinear triples.
    match stable_sign(a, b, c) {
        Direction::Indeterminate => exact_sign(a, b, c),
        sign => sign,
    }
}

/// exact_sign would evaluate the determinant in arbitrary-precision
/// arithmetic, which never equivocates for distinct points.
///
/// TODO: implement over a bignum rational type. Until then truly collinear
/// triples get a tie result, and consumers of robust_sign have to tolerate
/// the rare Indeterminate for distinct inputs.
fn exact_sign(_a: &Point, _b: &Point, _c: &Point) -> Direction {
    Direction::Indeterminate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r3::vector::Vector;

    fn point(x: f64, y: f64, z: f64) -> Point {
        Point::from_coords(x, y, z)
    }

    #[test]
    fn test_sign() {
        let a = point(1., 0., 0.);
        let b = point(0., 1., 0.);
        let c = point(0., 0., 1.);
        assert!(sign(&a, &b, &c));
        assert!(!sign(&c, &b, &a));
        // swapping any two arguments flips the answer
        assert!(!sign(&b, &a, &c));
        assert!(!sign(&a, &c, &b));
        // rotation preserves it
        assert!(sign(&b, &c, &a));
        assert!(sign(&c, &a, &b));
    }

    #[test]
    fn test_robust_sign_on_orthogonal_frame() {
        let a = point(1., 0., 0.);
        let b = point(0., 1., 0.);
        let c = point(0., 0., 1.);
        assert_eq!(robust_sign(&a, &b, &c), Direction::CounterClockwise);
        assert_eq!(robust_sign(&c, &b, &a), Direction::Clockwise);
    }

    #[test]
    fn test_robust_sign_equal_points_indeterminate() {
        let a = point(1., 0., 0.);
        let b = point(0., 1., 0.);
        assert_eq!(robust_sign(&a, &a, &b), Direction::Indeterminate);
        assert_eq!(robust_sign(&a, &b, &b), Direction::Indeterminate);
        assert_eq!(robust_sign(&b, &a, &b), Direction::Indeterminate);
        assert_eq!(robust_sign(&a, &a, &a), Direction::Indeterminate);
    }

    #[test]
    fn test_robust_sign_collinear_stub_is_tie() {
        // Distinct but exactly collinear points: the triage and stable levels
        // both reject, and the exact level is a stub, so the result is a tie.
        let eps = 1e-20;
        let a = Point(Vector::new(1., eps, 0.));
        let b = Point(Vector::new(1., 2. * eps, 0.));
        let c = Point(Vector::new(1., 3. * eps, 0.));
        assert_eq!(robust_sign(&a, &b, &c), Direction::Indeterminate);
    }

    #[test]
    fn test_robust_sign_properties_on_perturbed_points() {
        // Points that differ in the last placeable bit still order
        // consistently under rotation and reversal.
        let cases = [
            (point(1., 0., 0.), point(0., 1., 0.), point(0., 0., 1.)),
            (point(-3., -1., 4.), point(2., -1., -3.), point(1., -2., 0.)),
            (
                point(0.72571927877036835, 0.46058825605889098, 0.51106749730504852),
                point(0.7257192746638208, 0.46058826573818168, 0.51106749441312738),
                point(0.72571927671709457, 0.46058826089853633, 0.51106749585908795),
            ),
        ];
        for (a, b, c) in &cases {
            let abc = robust_sign(a, b, c);
            assert_eq!(abc, robust_sign(b, c, a));
            assert_eq!(abc, robust_sign(c, a, b));
            assert_eq!(abc.reverse(), robust_sign(c, b, a));
            assert_eq!(abc.reverse(), robust_sign(b, a, c));
            assert_eq!(abc.reverse(), robust_sign(a, c, b));
        }
    }

    #[test]
    fn test_stable_sign_decides_close_points() {
        // Nearby but clearly non-collinear points defeat the triage bound
        // but not the stable one.
        let a = point(0.999, 0.001, 0.);
        let b = point(0.999, 0.001 + 1e-13, 1e-13);
        let c = point(0.999, 0.001 + 2e-13, 0.);
        let d = stable_sign(&a, &b, &c);
        assert_ne!(d, Direction::Indeterminate);
        assert_eq!(d, robust_sign(&a, &b, &c));
    }
}
