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

use crate::consts::DBL_EPSILON;
use crate::r1;
use crate::r2;
use crate::s1;
use crate::sphere::cap::Cap;
use crate::sphere::cellid::{self, CellId};
use crate::sphere::latlng::LatLng;
use crate::sphere::point::Point;
use crate::sphere::rect::Rect;
use crate::sphere::region::Region;
use crate::sphere::stuv::*;

lazy_static! {
    /// POLE_MIN_LAT is the latitude reached by the lowest vertices of the two
    /// polar face cells, rounded down by half an ulp so the tabulated face
    /// bounds below remain conservative.
    pub static ref POLE_MIN_LAT: f64 = (1f64 / 3f64).sqrt().asin() - 0.5 * DBL_EPSILON;
}

/// Cell is the geometric realization of a CellId: a quadrilateral bounded by
/// four geodesics, carrying the face, level and (u,v) rectangle that the id
/// encodes. Immutable after construction.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub face: u8,
    pub level: u8,
    pub orientation: u8,
    pub id: CellId,
    pub uv: r2::Rect,
}

impl From<CellId> for Cell {
    fn from(id: CellId) -> Self {
        Cell::from(&id)
    }
}
impl<'a> From<&'a CellId> for Cell {
    fn from(id: &'a CellId) -> Self {
        let (f, i, j, o) = id.face_ij_orientation();
        let level = id.level();
        Cell {
            face: f,
            level: level as u8,
            orientation: o,
            id: *id,
            uv: cellid::ij_level_to_bound_uv(i, j, level),
        }
    }
}

impl From<Point> for Cell {
    /// The leaf cell containing the point.
    fn from(p: Point) -> Self {
        Cell::from(&p)
    }
}
impl<'a> From<&'a Point> for Cell {
    fn from(p: &'a Point) -> Self {
        Cell::from(CellId::from(p))
    }
}

impl From<LatLng> for Cell {
    fn from(ll: LatLng) -> Self {
        Cell::from(CellId::from(ll))
    }
}

impl Cell {
    pub fn is_leaf(&self) -> bool {
        self.level == MAX_LEVEL as u8
    }

    /// size_ij returns the edge length of this cell in (i,j) coordinates.
    pub fn size_ij(&self) -> u64 {
        cellid::size_ij(self.level as u64)
    }

    /// vertex returns the normalized k-th vertex (k in 0..4) in CCW order
    /// from the lower left corner of the (u,v) rectangle.
    pub fn vertex(&self, k: usize) -> Point {
        let v = self.uv.vertices()[k];
        Point(face_uv_to_xyz(self.face, v.x, v.y).normalize())
    }

    /// edge returns the inward-facing unit normal of the great circle passing
    /// through the CCW-ordered edge from vertex k to vertex k+1 (mod 4).
    pub fn edge(&self, k: usize) -> Point {
        let n = match k {
            0 => v_norm(self.face, self.uv.y.lo, false), // bottom
            1 => u_norm(self.face, self.uv.x.hi, false), // right
            2 => v_norm(self.face, self.uv.y.hi, true),  // top
            3 => u_norm(self.face, self.uv.x.lo, true),  // left
            _ => unreachable!(),
        };
        Point(n.normalize())
    }

    /// center returns the direction vector corresponding to the center of
    /// the cell.
    pub fn center(&self) -> Point {
        Point(self.id.raw_point().normalize())
    }

    /// contains_point reports whether this cell contains the given point.
    /// Cells are closed sets, and the (u,v) bound is expanded by one ulp to
    /// absorb the round-off in the coordinate conversions, so that
    /// Cell::from(&p).contains_point(&p) always holds.
    pub fn contains_point(&self, p: &Point) -> bool {
        let uv = match face_xyz_to_uv(self.face, &p.0) {
            None => return false,
            Some((u, v)) => r2::Point { x: u, y: v },
        };

        self.uv
            .expanded_by_margin(DBL_EPSILON)
            .contains_point(&uv)
    }

    /// contains reports whether this cell contains the other.
    pub fn contains(&self, other: &Cell) -> bool {
        self.id.contains(&other.id)
    }

    /// intersects reports whether the two cells share any point.
    pub fn intersects(&self, other: &Cell) -> bool {
        self.id.intersects(&other.id)
    }

    /// latitude returns the latitude of the (i,j) cell corner, i and j in
    /// {0, 1}.
    fn latitude(&self, i: usize, j: usize) -> f64 {
        let p = self.uv.vertex_ij(i, j);
        Point(face_uv_to_xyz(self.face, p.x, p.y)).latitude().0
    }

    /// longitude returns the longitude of the (i,j) cell corner.
    fn longitude(&self, i: usize, j: usize) -> f64 {
        let p = self.uv.vertex_ij(i, j);
        Point(face_uv_to_xyz(self.face, p.x, p.y)).longitude().0
    }
}

impl Region for Cell {
    /// cap_bound returns a cap centered at the cell's (u,v) center, grown to
    /// cover all four vertices. The (u,v) center is very close to the true
    /// center and cheaper to compute; neither yields the minimal-area cap
    /// but both are close.
    fn cap_bound(&self) -> Cap {
        let center = self.uv.center();
        let mut cap = Cap::from_point(&Point(
            face_uv_to_xyz(self.face, center.x, center.y).normalize(),
        ));
        for k in 0..4 {
            cap = cap.add_point(&self.vertex(k));
        }
        cap
    }

    /// rect_bound returns the bounding latitude-longitude rectangle.
    fn rect_bound(&self) -> Rect {
        if self.level > 0 {
            // Except for face cells, the latitude and longitude extremes are
            // attained at the vertices: the latitude range comes from one
            // pair of diagonally opposite vertices and the longitude range
            // from the other pair.
            //
            // The corner (i,j) with the largest absolute latitude maximizes
            // |z| while minimizing |x| and |y|; which corner that is follows
            // from the face axis directions and the signs of the cell's
            // (u,v) quadrant.
            let u = self.uv.x.lo + self.uv.x.hi;
            let v = self.uv.y.lo + self.uv.y.hi;
            let i = if u_axis(self.face).z == 0. {
                (u < 0.) as usize
            } else {
                (u > 0.) as usize
            };
            let j = if v_axis(self.face).z == 0. {
                (v < 0.) as usize
            } else {
                (v > 0.) as usize
            };

            let lat = r1::Interval::from_point(self.latitude(i, j)) + self.latitude(1 - i, 1 - j);
            let lng =
                s1::interval::EMPTY + self.longitude(i, 1 - j) + self.longitude(1 - i, j);

            // Grow the bounds slightly so the rectangle also contains the
            // computed LatLng of every contained point, not just the
            // infinite-precision one. Normalization can change a direction
            // by up to 0.5 ulp, and the vertex latitudes above are only
            // accurate to within 1.5 ulp, hence the 2 ulp margin; the polar
            // closure keeps longitude errors at the poles from escaping.
            return Rect { lat, lng }
                .expanded(&LatLng {
                    lat: s1::Angle(2. * DBL_EPSILON),
                    lng: s1::Angle(2. * DBL_EPSILON),
                })
                .polar_closure();
        }

        // The 4 cells around the equator extend to ±45 degrees latitude at
        // the midpoints of their top and bottom edges. The two polar cells
        // extend down to ±35.26 degrees at their vertices. The maximum error
        // in this calculation is 0.5 * DBL_EPSILON.
        let bound = match self.face {
            0 => Rect {
                lat: r1::Interval::new(-PI / 4., PI / 4.),
                lng: s1::Interval::new(-PI / 4., PI / 4.),
            },
            1 => Rect {
                lat: r1::Interval::new(-PI / 4., PI / 4.),
                lng: s1::Interval::new(PI / 4., 3. * PI / 4.),
            },
            2 => Rect {
                lat: r1::Interval::new(*POLE_MIN_LAT, PI / 2.),
                lng: s1::interval::FULL,
            },
            3 => Rect {
                lat: r1::Interval::new(-PI / 4., PI / 4.),
                lng: s1::Interval::new(3. * PI / 4., -3. * PI / 4.),
            },
            4 => Rect {
                lat: r1::Interval::new(-PI / 4., PI / 4.),
                lng: s1::Interval::new(-3. * PI / 4., -PI / 4.),
            },
            5 => Rect {
                lat: r1::Interval::new(-PI / 2., -*POLE_MIN_LAT),
                lng: s1::interval::FULL,
            },
            _ => unreachable!(),
        };

        // Expand the latitude to compensate for the error when a point is
        // converted to a LatLng for a containment test. Longitude needs no
        // expansion because it comes from a single atan2 call, which is
        // semi-monotonic.
        bound.expanded(&LatLng {
            lat: s1::Angle(2. * DBL_EPSILON),
            lng: s1::Angle(0.),
        })
    }

    fn contains_cell(&self, c: &Cell) -> bool {
        self.contains(c)
    }

    fn intersects_cell(&self, c: &Cell) -> bool {
        self.intersects(c)
    }
}
