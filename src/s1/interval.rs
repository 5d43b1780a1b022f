/*
Copyright 2014 Google Inc. All rights reserved.

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

use std::f64::consts::PI;
use std::fmt;
use std::ops;

use crate::consts::{remainder, EPSILON};

/// Interval represents a closed interval on a unit circle, the arc travelled
/// counterclockwise from lo to hi. Both endpoints lie in [-π, π]; an interval
/// with lo > hi is "inverted" and wraps through the point ±π.
///
/// The point -π is normalized to +π on construction, so that only full and
/// empty intervals (and intervals reaching through the branch cut) ever carry
/// a -π endpoint. The empty interval is (π, -π) and the full interval is
/// (-π, π); both are invariant under complement and must keep their canonical
/// representation through unions and intersections.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

/// The empty interval.
pub const EMPTY: Interval = Interval { lo: PI, hi: -PI };

/// The full interval.
pub const FULL: Interval = Interval { lo: -PI, hi: PI };

impl Interval {
    /// new constructs an interval from its endpoints, normalizing -π to +π
    /// except where that would change an empty or full interval.
    pub fn new(lo: f64, hi: f64) -> Self {
        let mut i = Interval { lo, hi };
        if lo == -PI && hi != PI {
            i.lo = PI;
        }
        if hi == -PI && lo != PI {
            i.hi = PI;
        }
        i
    }

    /// from_point_pair returns the minimal interval containing the two given
    /// points. Both points must be in [-π, π].
    pub fn from_point_pair(mut a: f64, mut b: f64) -> Self {
        if a == -PI {
            a = PI;
        }
        if b == -PI {
            b = PI;
        }
        if positive_distance(a, b) <= PI {
            Interval { lo: a, hi: b }
        } else {
            Interval { lo: b, hi: a }
        }
    }

    pub fn empty() -> Self {
        EMPTY
    }

    pub fn full() -> Self {
        FULL
    }

    pub fn is_valid(&self) -> bool {
        self.lo.abs() <= PI
            && self.hi.abs() <= PI
            && !(self.lo == -PI && self.hi != PI)
            && !(self.hi == -PI && self.lo != PI)
    }

    pub fn is_full(&self) -> bool {
        self.lo == -PI && self.hi == PI
    }

    pub fn is_empty(&self) -> bool {
        self.lo == PI && self.hi == -PI
    }

    /// is_inverted reports whether the interval wraps through the point ±π.
    pub fn is_inverted(&self) -> bool {
        self.lo > self.hi
    }

    /// invert returns the complement of the interior of the interval. An
    /// interval and its inversion share their boundary.
    pub fn invert(&self) -> Self {
        // Swapping endpoints is sufficient; it maps empty to full and back.
        Interval {
            lo: self.hi,
            hi: self.lo,
        }
    }

    /// center returns the midpoint of the interval, which for an inverted
    /// interval lies on the far side of the circle from the naive midpoint.
    pub fn center(&self) -> f64 {
        let c = 0.5 * (self.lo + self.hi);
        if !self.is_inverted() {
            c
        } else if c <= 0. {
            c + PI
        } else {
            c - PI
        }
    }

    /// len returns the length of the interval, in [0, 2π]. The empty
    /// interval has length 0.
    pub fn len(&self) -> f64 {
        let mut l = self.hi - self.lo;
        if l >= 0. {
            return l;
        }
        l += 2. * PI;
        if l > 0. {
            l
        } else {
            // only the empty interval wraps to a non-positive length
            0.
        }
    }

    /// fast_contains assumes p has already been normalized away from -π.
    fn fast_contains(&self, p: f64) -> bool {
        if self.is_inverted() {
            (p >= self.lo || p <= self.hi) && !self.is_empty()
        } else {
            p >= self.lo && p <= self.hi
        }
    }

    /// contains reports whether the interval contains p, for p in [-π, π].
    pub fn contains(&self, mut p: f64) -> bool {
        if p == -PI {
            p = PI;
        }
        self.fast_contains(p)
    }

    /// interior_contains reports whether the interior of the interval
    /// contains p, for p in [-π, π].
    pub fn interior_contains(&self, mut p: f64) -> bool {
        if p == -PI {
            p = PI;
        }
        if self.is_inverted() {
            p > self.lo || p < self.hi
        } else {
            (p > self.lo && p < self.hi) || self.is_full()
        }
    }

    /// contains_interval reports whether the interval contains the other.
    pub fn contains_interval(&self, other: &Self) -> bool {
        if self.is_inverted() {
            if other.is_inverted() {
                other.lo >= self.lo && other.hi <= self.hi
            } else {
                (other.lo >= self.lo || other.hi <= self.hi) && !self.is_empty()
            }
        } else if other.is_inverted() {
            self.is_full() || other.is_empty()
        } else {
            other.lo >= self.lo && other.hi <= self.hi
        }
    }

    /// interior_contains_interval reports whether the interior of the
    /// interval contains the entire other interval.
    pub fn interior_contains_interval(&self, other: &Self) -> bool {
        if self.is_inverted() {
            if other.is_inverted() {
                (other.lo > self.lo && other.hi < self.hi) || other.is_empty()
            } else {
                other.lo > self.lo || other.hi < self.hi
            }
        } else if other.is_inverted() {
            self.is_full() || other.is_empty()
        } else {
            (other.lo > self.lo && other.hi < self.hi) || self.is_full()
        }
    }

    /// intersects reports whether the two intervals share any points.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            false
        } else if self.is_inverted() {
            other.is_inverted() || other.lo <= self.hi || other.hi >= self.lo
        } else if other.is_inverted() {
            other.lo <= self.hi || other.hi >= self.lo
        } else {
            other.lo <= self.hi && other.hi >= self.lo
        }
    }

    /// interior_intersects reports whether the interior of this interval
    /// shares any points with the other interval, including its boundary.
    pub fn interior_intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() || self.lo == self.hi {
            false
        } else if self.is_inverted() {
            other.is_inverted() || other.lo < self.hi || other.hi > self.lo
        } else if other.is_inverted() {
            other.lo < self.hi || other.hi > self.lo
        } else {
            (other.lo < self.hi && other.hi > self.lo) || self.is_full()
        }
    }

    /// union returns the smallest interval that contains both intervals. If
    /// the intervals overlap at both ends the result is full; for disjoint
    /// intervals the union closes the smaller of the two gaps.
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }

        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                // Either other ⊂ self, or the union is the whole circle.
                if self.contains_interval(other) {
                    return *self;
                }
                return FULL;
            }
            return Interval {
                lo: self.lo,
                hi: other.hi,
            };
        }

        if self.fast_contains(other.hi) {
            return Interval {
                lo: other.lo,
                hi: self.hi,
            };
        }

        // Neither endpoint of other is inside self: either self ⊂ other, or
        // the intervals are disjoint.
        if self.is_empty() || other.fast_contains(self.lo) {
            return *other;
        }

        // The intervals are disjoint; close the smaller gap.
        if positive_distance(other.hi, self.lo) < positive_distance(self.hi, other.lo) {
            Interval {
                lo: other.lo,
                hi: self.hi,
            }
        } else {
            Interval {
                lo: self.lo,
                hi: other.hi,
            }
        }
    }

    /// intersection returns the smallest interval that contains the
    /// intersection of the two intervals.
    pub fn intersection(&self, other: &Self) -> Self {
        if other.is_empty() {
            return EMPTY;
        }

        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                // Either other ⊂ self, or the regions intersect twice. In the
                // second case one of the intervals is inverted, and the
                // minimal covering interval is the shorter of the two inputs.
                if other.len() < self.len() {
                    return *other;
                }
                return *self;
            }
            return Interval {
                lo: other.lo,
                hi: self.hi,
            };
        }

        if self.fast_contains(other.hi) {
            return Interval {
                lo: self.lo,
                hi: other.hi,
            };
        }

        // Neither endpoint of other is inside self: either self ⊂ other, or
        // the intervals are disjoint.
        if other.fast_contains(self.lo) {
            return *self;
        }
        EMPTY
    }

    /// expanded returns an interval expanded on each side by margin, or
    /// shrunk if margin is negative. The result saturates to full or empty
    /// when the length would pass 2π or 0, allowing for a rounding error in
    /// each endpoint computation.
    pub fn expanded(&self, margin: f64) -> Self {
        if margin >= 0. {
            if self.is_empty() {
                return *self;
            }
            if self.len() + 2. * margin + 2. * EPSILON >= 2. * PI {
                return FULL;
            }
        } else {
            if self.is_full() {
                return *self;
            }
            if self.len() + 2. * margin - 2. * EPSILON <= 0. {
                return EMPTY;
            }
        }

        let mut result = Interval::new(
            remainder(self.lo - margin, 2. * PI),
            remainder(self.hi + margin, 2. * PI),
        );
        if result.lo <= -PI {
            result.lo = PI;
        }
        result
    }

    /// approx_eq reports whether the two intervals are equal after moving
    /// each endpoint by at most EPSILON along the circle.
    pub fn approx_eq(&self, other: &Self) -> bool {
        // Full and empty intervals require special handling since the
        // endpoint values are not meaningful distances.
        if self.is_empty() {
            other.len() <= 2. * EPSILON
        } else if other.is_empty() {
            self.len() <= 2. * EPSILON
        } else if self.is_full() {
            other.len() >= 2. * (PI - EPSILON)
        } else if other.is_full() {
            self.len() >= 2. * (PI - EPSILON)
        } else {
            remainder(other.lo - self.lo, 2. * PI).abs() <= EPSILON
                && remainder(other.hi - self.hi, 2. * PI).abs() <= EPSILON
                && (self.len() - other.len()).abs() <= 2. * EPSILON
        }
    }
}

impl ops::Add<f64> for Interval {
    type Output = Interval;
    /// expands the interval to include the given point, extending whichever
    /// side yields the shorter result (ties extend the lo side).
    fn add(self, mut p: f64) -> Self::Output {
        if p.abs() > PI {
            return self;
        }
        if p == -PI {
            p = PI;
        }
        if self.fast_contains(p) {
            return self;
        }
        if self.is_empty() {
            return Interval { lo: p, hi: p };
        }
        if positive_distance(p, self.lo) < positive_distance(self.hi, p) {
            Interval { lo: p, hi: self.hi }
        } else {
            Interval { lo: self.lo, hi: p }
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:.7}, {:.7}]", self.lo, self.hi)
    }
}

/// positive_distance computes the distance from a to b travelling CCW, in
/// [0, 2π). This is slightly subtle: it works correctly for antipodal points
/// where the naive b - a - 2π would round to -2π instead of 0.
fn positive_distance(a: f64, b: f64) -> f64 {
    let d = b - a;
    if d >= 0. {
        d
    } else {
        (b + PI) - (a - PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::f64_eq;

    // Standard intervals used throughout the tests, named by their endpoints
    // in units of π/2 on the circle.
    const QUAD2: Interval = Interval { lo: PI / 2., hi: PI };
    const QUAD3: Interval = Interval {
        lo: PI,
        hi: -PI / 2.,
    };
    const QUAD12: Interval = Interval { lo: 0., hi: PI };
    const QUAD23: Interval = Interval {
        lo: PI / 2.,
        hi: -PI / 2.,
    };
    const QUAD34: Interval = Interval { lo: PI, hi: 0. };
    const QUAD41: Interval = Interval {
        lo: -PI / 2.,
        hi: PI / 2.,
    };
    const QUAD123: Interval = Interval {
        lo: 0.,
        hi: -PI / 2.,
    };
    const QUAD234: Interval = Interval { lo: PI / 2., hi: 0. };
    const MID12: Interval = Interval {
        lo: PI / 2. - 0.01,
        hi: PI / 2. + 0.02,
    };
    const MID23: Interval = Interval {
        lo: PI - 0.01,
        hi: -PI + 0.02,
    };
    const MID34: Interval = Interval {
        lo: -PI / 2. - 0.01,
        hi: -PI / 2. + 0.02,
    };
    const MID41: Interval = Interval {
        lo: -0.01,
        hi: 0.02,
    };

    #[test]
    fn test_constructors_normalize_negative_pi() {
        // new() rewrites a -π endpoint as +π, except for empty and full.
        let i = Interval::new(-PI, 0.);
        assert_eq!(i.lo, PI);
        let i = Interval::new(0., -PI);
        assert_eq!(i.hi, PI);
        assert!(Interval::new(-PI, PI).is_full());
        assert!(Interval::new(PI, -PI).is_empty());

        let i = Interval::from_point_pair(-PI, -PI);
        assert_eq!(i, Interval { lo: PI, hi: PI });
        assert_eq!(
            Interval::from_point_pair(0., PI / 2.),
            Interval { lo: 0., hi: PI / 2. }
        );
        // the pair spans the shorter arc
        assert_eq!(
            Interval::from_point_pair(PI - 0.1, -PI + 0.1),
            Interval {
                lo: PI - 0.1,
                hi: -PI + 0.1
            }
        );
    }

    #[test]
    fn test_simple_predicates() {
        assert!(EMPTY.is_valid() && EMPTY.is_empty() && !EMPTY.is_full());
        assert!(FULL.is_valid() && FULL.is_full() && !FULL.is_empty());
        assert!(EMPTY.is_inverted());
        assert!(!FULL.is_inverted());
        assert!(QUAD23.is_inverted());
        assert!(!QUAD12.is_inverted());
        assert!(QUAD12.is_valid() && QUAD23.is_valid());
    }

    #[test]
    fn test_invariants_for_empty() {
        assert_eq!(EMPTY.len(), 0.);
        assert!(!EMPTY.contains(0.));
        assert!(!EMPTY.contains(PI));
    }

    #[test]
    fn test_center() {
        assert_eq!(QUAD12.center(), PI / 2.);
        assert!(f64_eq(
            Interval {
                lo: 3.1,
                hi: 2.9
            }
            .center(),
            3. - PI
        ));
        assert!(f64_eq(
            Interval {
                lo: -2.9,
                hi: -3.1
            }
            .center(),
            PI - 3.
        ));
        assert!(f64_eq(
            Interval {
                lo: 2.1,
                hi: -2.1
            }
            .center(),
            PI
        ));
        assert_eq!(QUAD23.center(), PI);
        assert!(f64_eq(QUAD123.center(), 0.75 * PI));
    }

    #[test]
    fn test_len() {
        assert_eq!(QUAD12.len(), PI);
        assert_eq!(Interval { lo: PI, hi: PI }.len(), 0.);
        assert!(f64_eq(MID12.len(), 0.03));
        assert!(f64_eq(QUAD23.len(), PI));
        assert!(f64_eq(FULL.len(), 2. * PI));
    }

    #[test]
    fn test_inverted_interval_through_pi() {
        // (3, -3) wraps through π.
        let i = Interval { lo: 3., hi: -3. };
        assert!(i.is_inverted());
        assert!(i.contains(PI));
        assert!(i.contains(-PI));
        assert!(i.contains(3.1));
        assert!(i.contains(-3.1));
        assert!(!i.contains(0.));
        assert!(!i.contains(2.9));
        assert!(f64_eq(i.len(), 2. * PI - 6.));
    }

    #[test]
    fn test_contains_point() {
        assert!(!EMPTY.contains(0.) && !EMPTY.contains(PI) && !EMPTY.contains(-PI));
        assert!(!EMPTY.interior_contains(PI) && !EMPTY.interior_contains(-PI));
        assert!(FULL.contains(0.) && FULL.contains(PI) && FULL.contains(-PI));
        assert!(FULL.interior_contains(PI) && FULL.interior_contains(-PI));
        assert!(QUAD12.contains(0.) && QUAD12.contains(PI) && QUAD12.contains(-PI));
        assert!(QUAD12.interior_contains(PI / 2.) && !QUAD12.interior_contains(0.));
        assert!(!QUAD12.interior_contains(PI) && !QUAD12.interior_contains(-PI));
        assert!(QUAD23.contains(PI / 2.) && QUAD23.contains(-PI / 2.));
        assert!(QUAD23.contains(PI) && QUAD23.contains(-PI));
        assert!(!QUAD23.contains(0.));
        assert!(!QUAD23.interior_contains(PI / 2.) && !QUAD23.interior_contains(-PI / 2.));
        assert!(QUAD23.interior_contains(PI) && QUAD23.interior_contains(-PI));
        assert!(!QUAD23.interior_contains(0.));
    }

    fn interval_ops_case(
        x: &Interval,
        y: &Interval,
        relations: &str,
        want_union: &Interval,
        want_intersection: &Interval,
    ) {
        let mut s = String::with_capacity(4);
        s.push(if x.contains_interval(y) { 'T' } else { 'F' });
        s.push(if x.interior_contains_interval(y) { 'T' } else { 'F' });
        s.push(if x.intersects(y) { 'T' } else { 'F' });
        s.push(if x.interior_intersects(y) { 'T' } else { 'F' });
        assert_eq!(s, relations, "x={} y={}", x, y);
        assert_eq!(x.union(y), *want_union, "x={} y={}", x, y);
        assert_eq!(x.intersection(y), *want_intersection, "x={} y={}", x, y);
    }

    #[test]
    fn test_interval_ops() {
        let quad12eps = Interval {
            lo: QUAD12.lo,
            hi: MID23.hi,
        };
        let quad2hi = Interval {
            lo: MID23.lo,
            hi: QUAD12.hi,
        };
        let quad412eps = Interval {
            lo: MID34.lo,
            hi: QUAD12.hi,
        };
        let quadeps12 = Interval {
            lo: MID41.lo,
            hi: QUAD12.hi,
        };
        let quad1lo = Interval {
            lo: QUAD12.lo,
            hi: MID41.hi,
        };
        let quad2lo = Interval {
            lo: QUAD2.lo,
            hi: MID12.hi,
        };
        let quad3hi = Interval {
            lo: MID34.lo,
            hi: QUAD3.hi,
        };
        let quadeps23 = Interval {
            lo: MID12.lo,
            hi: QUAD23.hi,
        };
        let quad23eps = Interval {
            lo: QUAD23.lo,
            hi: MID34.hi,
        };
        let quadeps123 = Interval {
            lo: MID41.lo,
            hi: QUAD23.hi,
        };

        interval_ops_case(&EMPTY, &EMPTY, "TTFF", &EMPTY, &EMPTY);
        interval_ops_case(&EMPTY, &FULL, "FFFF", &FULL, &EMPTY);
        interval_ops_case(&EMPTY, &QUAD12, "FFFF", &QUAD12, &EMPTY);
        interval_ops_case(&FULL, &EMPTY, "TTFF", &FULL, &EMPTY);
        interval_ops_case(&FULL, &FULL, "TTTT", &FULL, &FULL);
        interval_ops_case(&FULL, &QUAD12, "TTTT", &FULL, &QUAD12);
        interval_ops_case(&FULL, &QUAD23, "TTTT", &FULL, &QUAD23);

        let pt0 = Interval { lo: 0., hi: 0. };
        let ptpi = Interval { lo: PI, hi: PI };
        let ptmid12 = Interval {
            lo: PI / 2.,
            hi: PI / 2.,
        };
        interval_ops_case(&pt0, &pt0, "TFTF", &pt0, &pt0);
        interval_ops_case(
            &pt0,
            &Interval { lo: PI, hi: 0. },
            "FFTF",
            &Interval { lo: PI, hi: 0. },
            &pt0,
        );
        interval_ops_case(&ptpi, &ptpi, "TFTF", &ptpi, &ptpi);
        interval_ops_case(&ptpi, &pt0, "FFFF", &QUAD34, &EMPTY);

        interval_ops_case(&QUAD12, &QUAD12, "TFTT", &QUAD12, &QUAD12);
        interval_ops_case(&QUAD12, &QUAD23, "FFTT", &QUAD123, &QUAD2);
        // The intersection is the two points {0, π}; the minimal covering
        // interval is whichever input is no longer than the other.
        interval_ops_case(&QUAD12, &QUAD34, "FFTF", &FULL, &QUAD12);
        interval_ops_case(&QUAD12, &QUAD2, "TFTT", &QUAD12, &QUAD2);
        interval_ops_case(&QUAD12, &ptmid12, "TTTT", &QUAD12, &ptmid12);
        interval_ops_case(&QUAD12, &ptpi, "TFTF", &QUAD12, &ptpi);
        interval_ops_case(&QUAD12, &pt0, "TFTF", &QUAD12, &pt0);

        interval_ops_case(&QUAD23, &QUAD123, "FFTT", &QUAD123, &QUAD23);
        interval_ops_case(&QUAD23, &QUAD234, "FFTT", &QUAD234, &QUAD23);
        interval_ops_case(&QUAD23, &ptmid12, "TFTF", &QUAD23, &ptmid12);

        interval_ops_case(&quad12eps, &quad2hi, "TTTT", &quad12eps, &quad2hi);
        interval_ops_case(&quad2lo, &quad412eps, "FFTT", &quad412eps, &quad2lo);
        interval_ops_case(&quad1lo, &quadeps12, "FFTT", &quadeps12, &quad1lo);
        interval_ops_case(&QUAD2, &quadeps23, "FFTT", &quadeps23, &QUAD2);
        interval_ops_case(&quad23eps, &quad3hi, "TTTT", &quad23eps, &quad3hi);
        interval_ops_case(&quadeps123, &quadeps23, "TFTT", &quadeps123, &quadeps23);
    }

    #[test]
    fn test_add_point() {
        assert_eq!(EMPTY + 0., Interval { lo: 0., hi: 0. });
        assert_eq!(EMPTY + PI, Interval { lo: PI, hi: PI });
        assert_eq!(EMPTY + -PI, Interval { lo: PI, hi: PI });
        assert_eq!((EMPTY + PI) + -PI, Interval { lo: PI, hi: PI });
        assert_eq!(
            (EMPTY + 0.) + PI / 2.,
            Interval { lo: 0., hi: PI / 2. }
        );
        // the shorter extension wins: from {π} the CCW arc to -π/2 is π/2
        assert_eq!(
            ((EMPTY + PI) + -PI / 2.),
            Interval {
                lo: PI,
                hi: -PI / 2.
            }
        );
        assert_eq!(FULL + 0., FULL);
        assert_eq!(QUAD12 + -0.1, Interval { lo: -0.1, hi: PI });
        assert_eq!(QUAD12 + PI / 2., QUAD12);
        // points outside [-π, π] are ignored
        assert_eq!(QUAD12 + 7., QUAD12);
    }

    #[test]
    fn test_add_point_matches_hull_of_points() {
        // Accumulating points one at a time produces the convex hull.
        let pts = [0.1, -0.3, 0.25, 0.05];
        let mut i = EMPTY;
        for &p in &pts {
            i = i + p;
        }
        assert!(f64_eq(i.lo, -0.3));
        assert!(f64_eq(i.hi, 0.25));
        for &p in &pts {
            assert!(i.contains(p));
        }
    }

    #[test]
    fn test_expanded() {
        assert_eq!(EMPTY.expanded(1.), EMPTY);
        assert_eq!(FULL.expanded(1.), FULL);
        assert_eq!(
            Interval { lo: 0., hi: 0. }.expanded(PI - 0.1),
            Interval {
                lo: -(PI - 0.1),
                hi: PI - 0.1
            }
        );
        assert_eq!(Interval { lo: 0., hi: 0. }.expanded(PI), FULL);
        assert_eq!(Interval { lo: PI, hi: PI }.expanded(PI), FULL);

        // negative margins shrink, saturating to empty; the full interval
        // has no boundary to shrink from
        assert_eq!(FULL.expanded(-1.), FULL);
        assert_eq!(
            QUAD12.expanded(-0.1),
            Interval {
                lo: 0.1,
                hi: PI - 0.1
            }
        );
        assert_eq!(QUAD12.expanded(-0.51 * PI), EMPTY);
        assert_eq!(EMPTY.expanded(-1.), EMPTY);
    }

    #[test]
    fn test_approx_eq() {
        assert!(EMPTY.approx_eq(&EMPTY));
        assert!(Interval { lo: 1., hi: 1. }.approx_eq(&EMPTY));
        assert!(FULL.approx_eq(&FULL));
        assert!(Interval {
            lo: 1e-15,
            hi: -1e-15
        }
        .approx_eq(&FULL));
        assert!(QUAD12.approx_eq(&Interval {
            lo: 1e-15,
            hi: PI
        }));
        assert!(!QUAD12.approx_eq(&QUAD23));
    }

    #[test]
    fn test_invert() {
        assert_eq!(EMPTY.invert(), FULL);
        assert_eq!(FULL.invert(), EMPTY);
        assert_eq!(QUAD12.invert(), QUAD34);
        assert_eq!(QUAD12.invert().invert(), QUAD12);
        assert_eq!(QUAD34.invert(), QUAD12);
    }

    #[test]
    fn test_union_keeps_canonical_forms() {
        // overlapping at both gap ends yields the canonical full interval
        assert_eq!(QUAD12.union(&QUAD34), FULL);
        assert_eq!(QUAD23.union(&QUAD41), FULL);
        // union with empty preserves the input exactly
        assert_eq!(QUAD23.union(&EMPTY), QUAD23);
        assert_eq!(EMPTY.union(&EMPTY), EMPTY);
    }
}
