use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::ops;

use crate::consts::*;
use crate::r1;
use crate::s1::angle::{Angle, Deg, Rad};
use crate::s1::interval;
use crate::sphere::cap::Cap;
use crate::sphere::cell::Cell;
use crate::sphere::edgeutil;
use crate::sphere::latlng::LatLng;
use crate::sphere::point::Point;
use crate::sphere::region::Region;

/// Rect represents a closed latitude-longitude rectangle: the product of a
/// latitude interval in [-π/2, π/2] and a longitude interval on the circle.
/// It can span all longitudes, and it crosses the 180 degree meridian when
/// its longitude interval is inverted.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub lat: r1::Interval,
    pub lng: interval::Interval,
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[lo{:?}, hi{:?}]", self.lo(), self.hi())
    }
}

const VALID_RECT_LAT_RANGE: r1::Interval = r1::Interval {
    lo: -FRAC_PI_2,
    hi: FRAC_PI_2,
};

impl Rect {
    pub fn empty() -> Rect {
        Rect {
            lat: r1::EMPTY,
            lng: interval::EMPTY,
        }
    }

    pub fn full() -> Rect {
        Rect {
            lat: VALID_RECT_LAT_RANGE,
            lng: interval::FULL,
        }
    }

    pub fn from_center_size(center: LatLng, size: LatLng) -> Self {
        let half = LatLng::new(size.lat * 0.5, size.lng * 0.5);
        Rect::from(center).expanded(&half)
    }

    pub fn from_degrees(lat_lo: f64, lng_lo: f64, lat_hi: f64, lng_hi: f64) -> Self {
        Rect {
            lat: r1::Interval {
                lo: Angle::from(Deg(lat_lo)).rad(),
                hi: Angle::from(Deg(lat_hi)).rad(),
            },
            lng: interval::Interval::new(
                Angle::from(Deg(lng_lo)).rad(),
                Angle::from(Deg(lng_hi)).rad(),
            ),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.lo.abs() <= FRAC_PI_2
            && self.lat.hi <= FRAC_PI_2
            && self.lng.is_valid()
            && self.lat.is_empty() == self.lng.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lat == VALID_RECT_LAT_RANGE && self.lng.is_full()
    }

    pub fn is_point(&self) -> bool {
        self.lat.lo == self.lat.hi && self.lng.lo == self.lng.hi
    }

    /// is_inverted reports whether the rectangle crosses the 180 degree
    /// meridian.
    pub fn is_inverted(&self) -> bool {
        self.lng.is_inverted()
    }

    /// vertex returns the k-th vertex (k in 0..4) in CCW order, starting
    /// from the lower left corner.
    pub fn vertex(&self, k: usize) -> LatLng {
        let (lat, lng) = match k {
            0 => (self.lat.lo, self.lng.lo),
            1 => (self.lat.lo, self.lng.hi),
            2 => (self.lat.hi, self.lng.hi),
            3 => (self.lat.hi, self.lng.lo),
            _ => unreachable!(),
        };
        LatLng::new(Rad(lat).into(), Rad(lng).into())
    }

    pub fn lo(&self) -> LatLng {
        self.vertex(0)
    }

    pub fn hi(&self) -> LatLng {
        self.vertex(2)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(Rad(self.lat.center()).into(), Rad(self.lng.center()).into())
    }

    pub fn size(&self) -> LatLng {
        LatLng::new(Rad(self.lat.len()).into(), Rad(self.lng.len()).into())
    }

    /// area returns the surface area of the rectangle on the unit sphere.
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.
        } else {
            self.lng.len() * (self.lat.hi.sin() - self.lat.lo.sin()).abs()
        }
    }

    /// expanded returns a rectangle expanded by margin.lat on each side in
    /// the latitude direction and margin.lng in the longitude direction;
    /// negative margins shrink. The latitude is clamped into the valid range
    /// afterwards. A shrink that empties either axis empties the rectangle.
    pub fn expanded(&self, margin: &LatLng) -> Self {
        let lat = self.lat.expanded(margin.lat.rad());
        let lng = self.lng.expanded(margin.lng.rad());

        if lat.is_empty() || lng.is_empty() {
            Rect::empty()
        } else {
            Rect {
                lat: lat.intersection(&VALID_RECT_LAT_RANGE),
                lng,
            }
        }
    }

    /// polar_closure widens the longitude span to full if the rectangle
    /// touches either pole, since a rectangle containing a pole contains all
    /// longitudes there.
    pub fn polar_closure(&self) -> Self {
        if self.lat.lo == -FRAC_PI_2 || self.lat.hi == FRAC_PI_2 {
            Rect {
                lat: self.lat,
                lng: interval::FULL,
            }
        } else {
            *self
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Rect {
            lat: self.lat.union(&other.lat),
            lng: self.lng.union(&other.lng),
        }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let lat = self.lat.intersection(&other.lat);
        let lng = self.lng.intersection(&other.lng);
        if lat.is_empty() || lng.is_empty() {
            Rect::empty()
        } else {
            Rect { lat, lng }
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.lat.intersects(&other.lat) && self.lng.intersects(&other.lng)
    }

    pub fn interior_intersects(&self, other: &Rect) -> bool {
        self.lat.interior_intersects(&other.lat) && self.lng.interior_intersects(&other.lng)
    }

    /// contains reports whether this rectangle contains the other.
    pub fn contains(&self, other: &Self) -> bool {
        self.lat.contains_interval(&other.lat) && self.lng.contains_interval(&other.lng)
    }

    /// contains_latlng reports whether the given location is inside the
    /// rectangle. The location must be valid.
    pub fn contains_latlng(&self, ll: &LatLng) -> bool {
        ll.is_valid() && self.lat.contains(ll.lat.rad()) && self.lng.contains(ll.lng.rad())
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.contains_latlng(&LatLng::from(p))
    }

    /// interior_contains reports whether the interior of this rectangle
    /// contains all points of the other rectangle, boundary included.
    pub fn interior_contains(&self, other: &Self) -> bool {
        self.lat.interior_contains_interval(&other.lat)
            && self.lng.interior_contains_interval(&other.lng)
    }

    pub fn interior_contains_latlng(&self, ll: &LatLng) -> bool {
        self.lat.interior_contains(ll.lat.rad()) && self.lng.interior_contains(ll.lng.rad())
    }

    pub fn interior_contains_point(&self, p: &Point) -> bool {
        self.interior_contains_latlng(&LatLng::from(p))
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.lat.approx_eq(&other.lat) && self.lng.approx_eq(&other.lng)
    }
}

impl<'a> ops::Add<&'a LatLng> for Rect {
    type Output = Rect;
    /// expands the rectangle to include the given location, by the minimum
    /// amount possible. Invalid locations are ignored.
    fn add(self, ll: &'a LatLng) -> Self::Output {
        if !ll.is_valid() {
            self
        } else {
            Rect {
                lat: self.lat + ll.lat.rad(),
                lng: self.lng + ll.lng.rad(),
            }
        }
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl From<LatLng> for Rect {
    fn from(ll: LatLng) -> Self {
        Rect {
            lat: r1::Interval::from_point(ll.lat.rad()),
            lng: interval::Interval {
                lo: ll.lng.rad(),
                hi: ll.lng.rad(),
            },
        }
    }
}

impl Region for Rect {
    /// cap_bound returns a cap that contains the rectangle.
    fn cap_bound(&self) -> Cap {
        // Consider two possible bounding caps, one whose axis passes through
        // the center of the rectangle and one whose axis is a pole, and
        // return the smaller.
        if self.is_empty() {
            return Cap::empty();
        }

        let (pole_z, pole_angle) = if self.lat.hi + self.lat.lo < 0. {
            // South pole axis yields the smaller cap.
            (-1., FRAC_PI_2 + self.lat.hi)
        } else {
            (1., FRAC_PI_2 - self.lat.lo)
        };
        let pole_cap = Cap::from_center_angle(
            &Point::from_coords(0., 0., pole_z),
            &Rad(pole_angle).into(),
        );

        // For rectangles that span 180 degrees or less in longitude the
        // maximum cap size is achieved at one of the vertices. For wider
        // rectangles we always return a polar cap.
        if remainder(self.lng.hi - self.lng.lo, 2. * PI) >= 0. && self.lng.hi - self.lng.lo < 2. * PI
        {
            let mid_cap = Cap::from(Point::from(self.center()))
                + Point::from(self.lo())
                + Point::from(self.hi());
            if mid_cap.height < pole_cap.height {
                return mid_cap;
            }
        }
        pole_cap
    }

    /// rect_bound returns the rectangle itself.
    fn rect_bound(&self) -> Rect {
        *self
    }

    /// contains_cell reports whether the given cell is contained by this
    /// rectangle, by testing the cell's bounding rectangle. The test is exact
    /// as long as cell bounds are tight.
    fn contains_cell(&self, c: &Cell) -> bool {
        self.contains(&c.rect_bound())
    }

    /// intersects_cell reports whether this rectangle intersects the given
    /// cell. This is an exact test and may be fairly expensive.
    fn intersects_cell(&self, cell: &Cell) -> bool {
        // Dispose of the cases where one region completely contains the
        // other; after that, the regions intersect iff their boundaries do.
        if self.is_empty() {
            return false;
        }

        if self.contains_point(&Point(cell.id.raw_point())) {
            return true;
        }
        if cell.contains_point(&Point::from(self.center())) {
            return true;
        }

        // Quick rejection (not required for correctness).
        if !self.intersects(&cell.rect_bound()) {
            return false;
        }

        // Precompute the cell vertices and check the corner-in-region cases
        // both ways, since the edge tests below only cover edge interiors.
        let mut vertices = [Point::default(); 4];
        let mut latlngs = [LatLng::default(); 4];
        for k in 0..4 {
            vertices[k] = cell.vertex(k);
            latlngs[k] = LatLng::from(&vertices[k]);
            if self.contains_latlng(&latlngs[k]) {
                return true;
            }
            if cell.contains_point(&Point::from(self.vertex(k))) {
                return true;
            }
        }

        // Finally check whether the boundaries intersect. A latitude-
        // longitude rectangle does not have straight edges: two edges are
        // curved, and at least one of them is concave.
        for k in 0..4 {
            let edge_lng = interval::Interval::from_point_pair(
                latlngs[k].lng.rad(),
                latlngs[(k + 1) & 3].lng.rad(),
            );
            if !self.lng.intersects(&edge_lng) {
                continue;
            }

            let a = &vertices[k];
            let b = &vertices[(k + 1) & 3];
            if edge_lng.contains(self.lng.lo)
                && intersects_lng_edge(a, b, self.lat, Angle(self.lng.lo))
            {
                return true;
            }
            if edge_lng.contains(self.lng.hi)
                && intersects_lng_edge(a, b, self.lat, Angle(self.lng.hi))
            {
                return true;
            }
            if intersects_lat_edge(a, b, Angle(self.lat.lo), self.lng) {
                return true;
            }
            if intersects_lat_edge(a, b, Angle(self.lat.hi), self.lng) {
                return true;
            }
        }
        false
    }
}

/// intersects_lat_edge reports whether the edge AB intersects the given edge
/// of constant latitude. The points must be unit length.
fn intersects_lat_edge(a: &Point, b: &Point, lat: Angle, lng: interval::Interval) -> bool {
    // Lines of constant latitude are curves on the sphere; a geodesic edge
    // can meet one in 0, 1 or 2 points.

    // Compute the normal to the plane AB that points vaguely north.
    let mut z = Point(a.0.cross(&b.0).normalize());
    if z.0.z < 0. {
        z = -z;
    }

    // Extend to an orthonormal frame (x,y,z) where x is the direction in
    // which the great circle through AB attains its maximum latitude.
    let y = Point(z.0.cross(&Point::from_coords(0., 0., 1.).0).normalize());
    let x = Point(y.0.cross(&z.0).normalize());

    // The angle from the x axis, in its x-y plane, at which the great circle
    // crosses the given line of latitude.
    let sin_lat = lat.rad().sin();
    if sin_lat.abs() >= x.0.z {
        // The great circle does not reach the latitude.
        return false;
    }

    let cos_theta = sin_lat / x.0.z;
    let sin_theta = (1. - cos_theta * cos_theta).sqrt();
    let theta = sin_theta.atan2(cos_theta);

    // The two candidate crossings are at ±theta. Each is a real crossing if
    // it lies in the interior of the edge AB and within the longitude span.
    let ab_theta = interval::Interval::from_point_pair(
        a.0.dot(&y.0).atan2(a.0.dot(&x.0)),
        b.0.dot(&y.0).atan2(b.0.dot(&x.0)),
    );

    if ab_theta.contains(theta) {
        let isect = x.0 * cos_theta + y.0 * sin_theta;
        if lng.contains(isect.y.atan2(isect.x)) {
            return true;
        }
    }
    if ab_theta.contains(-theta) {
        let isect = x.0 * cos_theta - y.0 * sin_theta;
        if lng.contains(isect.y.atan2(isect.x)) {
            return true;
        }
    }
    false
}

/// intersects_lng_edge reports whether the edge AB intersects the given edge
/// of constant longitude. Edges of constant longitude are geodesics, so a
/// plain crossing test suffices.
fn intersects_lng_edge(a: &Point, b: &Point, lat: r1::Interval, lng: Angle) -> bool {
    edgeutil::simple_crossing(
        a,
        b,
        &Point::from(LatLng::new(Rad(lat.lo).into(), lng)),
        &Point::from(LatLng::new(Rad(lat.hi).into(), lng)),
    )
}
