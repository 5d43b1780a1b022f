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

use crate::consts::*;
use crate::r1;
use crate::s1::angle::Angle;
use crate::s1::interval as s1interval;
use crate::sphere::cell::Cell;
use crate::sphere::point::Point;
use crate::sphere::rect::Rect;
use crate::sphere::region::Region;

/// ROUND_UP slightly exceeds one ulp above 1.0. Heights derived from distance
/// computations are multiplied by it so that the containment post-conditions
/// of add_point and add_cap survive the rounding of those computations.
const ROUND_UP: f64 = 1.0 + DBL_EPSILON;

/// Cap represents a disc-shaped region on the unit sphere: all points within
/// the given angular radius of the center, boundary included.
///
/// The interior is stored as a height, the distance from the center point to
/// the cutoff plane: height = 1 - cos(radius). This representation is
/// preferred over (center, radius) because containment then reduces to a
/// comparison of squared chord lengths, with no trigonometry.
///
/// A negative height denotes the empty cap (by convention -1); height 2 is
/// the full sphere. Zero-height caps (single points) are legal and contain
/// exactly their center.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cap {
    pub center: Point,
    pub height: f64,
}

const EMPTY_HEIGHT: f64 = -1.;
const FULL_HEIGHT: f64 = 2.;

impl Cap {
    /// empty returns a cap that contains no points.
    pub fn empty() -> Self {
        Cap {
            center: Point::origin(),
            height: EMPTY_HEIGHT,
        }
    }

    /// full returns a cap that contains all points.
    pub fn full() -> Self {
        Cap {
            center: Point::origin(),
            height: FULL_HEIGHT,
        }
    }

    /// from_point constructs a cap containing the single given point.
    pub fn from_point(p: &Point) -> Self {
        Cap {
            center: *p,
            height: 0.,
        }
    }

    /// from_center_height constructs a cap with the given center and height.
    /// The center must be unit length.
    pub fn from_center_height(center: &Point, height: f64) -> Self {
        Cap {
            center: *center,
            height,
        }
    }

    /// from_center_angle constructs a cap with the given center and angular
    /// radius.
    pub fn from_center_angle(center: &Point, radius: &Angle) -> Self {
        Cap::from_center_height(center, radius_to_height(radius))
    }

    /// from_center_area constructs a cap with the given center and surface
    /// area. A negative area yields an empty cap; an area of 4π or more
    /// yields a full cap.
    pub fn from_center_area(center: &Point, area: f64) -> Self {
        Cap::from_center_height(center, (area / (2. * PI)).min(FULL_HEIGHT))
    }

    pub fn is_valid(&self) -> bool {
        self.center.0.is_unit() && self.height <= FULL_HEIGHT
    }

    pub fn is_empty(&self) -> bool {
        self.height < 0.
    }

    pub fn is_full(&self) -> bool {
        self.height == FULL_HEIGHT
    }

    /// radius returns the cap's angular radius; an empty cap reports the
    /// sentinel -1 radians.
    pub fn radius(&self) -> Angle {
        if self.is_empty() {
            Angle(-1.)
        } else {
            // This accuracy is better than using acos(1 - height), which
            // loses half the bits of precision for very small angles.
            Angle(2. * (0.5 * self.height).sqrt().asin())
        }
    }

    /// area returns the surface area of the cap on the unit sphere.
    pub fn area(&self) -> f64 {
        2. * PI * self.height.max(0.)
    }

    /// contains_point reports whether the point is inside the cap, by the
    /// squared-chord comparison ‖center − p‖² ≤ 2·height.
    pub fn contains_point(&self, p: &Point) -> bool {
        (self.center - *p).0.norm2() <= 2. * self.height
    }

    /// interior_contains_point reports whether the point is strictly inside
    /// the cap.
    pub fn interior_contains_point(&self, p: &Point) -> bool {
        self.is_full() || (self.center - *p).0.norm2() < 2. * self.height
    }

    /// contains reports whether this cap contains the other.
    pub fn contains(&self, other: &Cap) -> bool {
        if self.is_full() || other.is_empty() {
            true
        } else {
            self.radius().0 >= self.center.distance(&other.center).0 + other.radius().0
        }
    }

    /// intersects reports whether the two caps share at least one point.
    pub fn intersects(&self, other: &Cap) -> bool {
        if self.is_empty() || other.is_empty() {
            false
        } else {
            self.radius().0 + other.radius().0 >= self.center.distance(&other.center).0
        }
    }

    /// interior_intersects reports whether the interior of this cap shares a
    /// point with the other cap (boundary included).
    pub fn interior_intersects(&self, other: &Cap) -> bool {
        // This cap must have an interior and the other must be non-empty.
        if self.height <= 0. || other.is_empty() {
            false
        } else {
            self.radius().0 + other.radius().0 > self.center.distance(&other.center).0
        }
    }

    /// add_point returns a cap extended to include the given point. If the
    /// cap is empty the result is positioned at the point with zero height.
    /// The height is rounded up so that the result always contains the point.
    pub fn add_point(&self, p: &Point) -> Self {
        if self.is_empty() {
            Cap {
                center: *p,
                height: 0.,
            }
        } else {
            let dist2 = (self.center - *p).0.norm2();
            Cap {
                center: self.center,
                height: self.height.max((ROUND_UP * 0.5 * dist2).min(FULL_HEIGHT)),
            }
        }
    }

    /// add_cap returns a cap extended to include the other cap.
    pub fn add_cap(&self, other: &Cap) -> Self {
        if other.is_empty() {
            *self
        } else if self.is_empty() {
            *other
        } else {
            // Grow to the far rim of the other cap, rounding up as for
            // add_point.
            let angle = self.center.distance(&other.center).0 + other.radius().0;
            Cap {
                center: self.center,
                height: self
                    .height
                    .max((ROUND_UP * (1. - angle.cos())).min(FULL_HEIGHT)),
            }
        }
    }

    /// complement returns the cap with the same boundary and the opposite
    /// interior: the antipodal center, and height 2 − max(height, 0). The
    /// complement of a full cap is empty, not a degenerate point cap.
    pub fn complement(&self) -> Self {
        let height = if self.is_full() {
            EMPTY_HEIGHT
        } else {
            FULL_HEIGHT - self.height.max(0.)
        };
        Cap {
            center: -self.center,
            height,
        }
    }

    /// approx_eq reports whether the two caps have nearly equal centers and
    /// heights; empty and full caps compare by height alone.
    pub fn approx_eq(&self, other: &Cap) -> bool {
        (self.center.approx_eq(&other.center) && (self.height - other.height).abs() <= EPSILON)
            || (self.is_empty() && other.height <= EPSILON)
            || (other.is_empty() && self.height <= EPSILON)
            || (self.is_full() && other.height >= FULL_HEIGHT - EPSILON)
            || (other.is_full() && self.height >= FULL_HEIGHT - EPSILON)
    }

    /// intersects_cell_excluding_vertices reports whether the cap intersects
    /// any point of the cell other than the given cell vertices, which must
    /// already have been checked for containment.
    fn intersects_cell_excluding_vertices(&self, cell: &Cell, vertices: &[Point; 4]) -> bool {
        // A cap of at least hemisphere size has a convex complement, so with
        // no vertex contained, no other cell point can be contained either.
        if self.height >= 1. {
            return false;
        }

        if self.is_empty() {
            return false;
        }

        // The cell containing the cap center intersects trivially, and
        // checking it here lets the edge walk below consider only the edges
        // on the center's far side.
        if cell.contains_point(&self.center) {
            return true;
        }

        // The cap intersects the cell iff it crosses the interior of some
        // edge. sin²(radius) = h(2 − h) follows from h = 1 − cos(radius).
        let sin2_angle = self.height * (2. - self.height);
        for k in 0..4 {
            let edge = cell.edge(k).0;
            let dot = self.center.0.dot(&edge);
            if dot > 0. {
                // The center is in the half-space of this edge's interior
                // normal. The cap cannot cross this edge without also
                // crossing the one on the cell's opposite side, so skip it.
                continue;
            }
            // The norm2 factor compensates for the edge normal not being
            // unit length.
            if dot * dot > sin2_angle * edge.norm2() {
                return false;
            }
            // The great circle through this edge enters the cap. Check
            // whether the point of closest approach lies between the two
            // edge endpoints.
            let dir = edge.cross(&self.center.0);
            if dir.dot(&vertices[k].0) < 0. && dir.dot(&vertices[(k + 1) & 3].0) > 0. {
                return true;
            }
        }
        false
    }
}

/// radius_to_height converts an angular radius to the corresponding cap
/// height, via 2·sin²(r/2), which keeps full precision for small radii where
/// 1 − cos(r) would cancel.
pub fn radius_to_height(radius: &Angle) -> f64 {
    if radius.0 < 0. {
        EMPTY_HEIGHT
    } else if radius.0 >= PI {
        FULL_HEIGHT
    } else {
        let d = (0.5 * radius.0).sin();
        2. * d * d
    }
}

impl<'a> From<&'a Point> for Cap {
    fn from(p: &'a Point) -> Self {
        Cap::from_point(p)
    }
}
impl From<Point> for Cap {
    fn from(p: Point) -> Self {
        Cap::from_point(&p)
    }
}

impl ops::Add<Point> for Cap {
    type Output = Cap;
    /// extends the cap to include the given point.
    fn add(self, p: Point) -> Self::Output {
        self.add_point(&p)
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[center={:?}, radius={:?}]",
            self.center.0,
            self.radius()
        )
    }
}

impl Region for Cap {
    /// cap_bound returns the cap itself.
    fn cap_bound(&self) -> Cap {
        *self
    }

    /// rect_bound returns a bounding latitude-longitude rectangle. The
    /// bounds are not guaranteed to be tight.
    fn rect_bound(&self) -> Rect {
        if self.is_empty() {
            return Rect::empty();
        }

        let cap_angle = self.radius().0;
        let center_lat = self.center.latitude().0;
        let mut all_longitudes = false;
        let mut lat = r1::Interval {
            lo: center_lat - cap_angle,
            hi: center_lat + cap_angle,
        };
        let mut lng = s1interval::FULL;

        // Check whether the cap covers a pole.
        if lat.lo <= -PI / 2. {
            lat.lo = -PI / 2.;
            all_longitudes = true;
        }
        if lat.hi >= PI / 2. {
            lat.hi = PI / 2.;
            all_longitudes = true;
        }

        if !all_longitudes {
            // Compute the range of longitudes covered by the cap using the
            // law of sines for spherical triangles. Consider the triangle
            // ABC where A is the north pole, B is the center of the cap, and
            // C is the point of tangency between the cap boundary and a line
            // of longitude. Then C is a right angle, and letting a, b, c be
            // the sides opposite A, B, C, sin(a)/sin(A) = sin(c)/sin(C), so
            // sin(A) = sin(a)/sin(c). Here a is the cap radius and c the
            // colatitude (90 degrees minus the center's latitude); the
            // formula also works for negative latitudes.
            //
            // sin(a) = sqrt(h·(2−h)) follows from h = 1 − cos(a).
            let sin_a = (self.height * (2. - self.height)).sqrt();
            let sin_c = center_lat.cos();
            if sin_a <= sin_c {
                let angle_a = (sin_a / sin_c).asin();
                let center_lng = self.center.longitude().0;
                lng = s1interval::Interval::new(
                    remainder(center_lng - angle_a, PI * 2.),
                    remainder(center_lng + angle_a, PI * 2.),
                );
            }
        }

        Rect { lat, lng }
    }

    /// contains_cell reports whether the cap contains the given cell.
    fn contains_cell(&self, cell: &Cell) -> bool {
        // The cap contains the cell iff it contains all four vertices and
        // its complement touches no other point of the cell.
        let mut vertices = [Point::default(); 4];
        for k in 0..4 {
            vertices[k] = cell.vertex(k);
            if !self.contains_point(&vertices[k]) {
                return false;
            }
        }
        !self
            .complement()
            .intersects_cell_excluding_vertices(cell, &vertices)
    }

    /// intersects_cell reports whether the cap intersects the given cell.
    fn intersects_cell(&self, cell: &Cell) -> bool {
        // Any contained vertex settles it; otherwise the cap can only reach
        // the cell through the interior of an edge.
        let mut vertices = [Point::default(); 4];
        for k in 0..4 {
            vertices[k] = cell.vertex(k);
            if self.contains_point(&vertices[k]) {
                return true;
            }
        }
        self.intersects_cell_excluding_vertices(cell, &vertices)
    }
}
