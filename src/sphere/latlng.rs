use std::f64::consts::PI;
use std::fmt;

use crate::consts::remainder;
use crate::r3::vector::Vector;
use crate::s1::angle::{Angle, Deg};
use crate::sphere::point::Point;

const NORTH_POLE_LAT: f64 = PI / 2.;
const SOUTH_POLE_LAT: f64 = -PI / 2.;

/// LatLng represents a point on the unit sphere as a pair of angles:
/// latitude in [-π/2, π/2] and longitude in (-π, π].
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
    pub lat: Angle,
    pub lng: Angle,
}

impl fmt::Debug for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.lat, self.lng)
    }
}

impl LatLng {
    pub fn new(lat: Angle, lng: Angle) -> Self {
        LatLng { lat, lng }
    }

    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        LatLng {
            lat: Deg(lat).into(),
            lng: Deg(lng).into(),
        }
    }

    /// is_valid reports whether the latitude and longitude are within range.
    pub fn is_valid(&self) -> bool {
        self.lat.0.abs() <= PI / 2. && self.lng.0.abs() <= PI
    }

    /// normalized returns the location with latitude clamped to
    /// [-π/2, π/2] and longitude reduced into (-π, π].
    pub fn normalized(&self) -> Self {
        let lat = if self.lat.0 > NORTH_POLE_LAT {
            Angle(NORTH_POLE_LAT)
        } else if self.lat.0 < SOUTH_POLE_LAT {
            Angle(SOUTH_POLE_LAT)
        } else {
            self.lat
        };
        LatLng {
            lat,
            lng: Angle(remainder(self.lng.0, PI * 2.)),
        }
    }

    /// distance returns the angle between two locations.
    pub fn distance(&self, other: &Self) -> Angle {
        // The haversine formula: numerically stable for small distances, and
        // accurate to within 3.7e-13 radians everywhere.
        let dlat = (0.5 * (other.lat.0 - self.lat.0)).sin();
        let dlng = (0.5 * (other.lng.0 - self.lng.0)).sin();

        let x = dlat * dlat + dlng * dlng * self.lat.0.cos() * other.lat.0.cos();
        Angle(2. * x.sqrt().atan2((1. - x).max(0.).sqrt()))
    }
}

impl Point {
    /// latitude returns the latitude of this point.
    pub fn latitude(&self) -> Angle {
        let v = &self.0;
        Angle(v.z.atan2((v.x * v.x + v.y * v.y).sqrt()))
    }

    /// longitude returns the longitude of this point.
    pub fn longitude(&self) -> Angle {
        Angle(self.0.y.atan2(self.0.x))
    }
}

impl From<LatLng> for Point {
    fn from(ll: LatLng) -> Self {
        Point::from(&ll)
    }
}

impl<'a> From<&'a LatLng> for Point {
    fn from(ll: &'a LatLng) -> Self {
        let phi = ll.lat.0;
        let theta = ll.lng.0;
        let cosphi = phi.cos();
        Point(Vector {
            x: theta.cos() * cosphi,
            y: theta.sin() * cosphi,
            z: phi.sin(),
        })
    }
}

impl From<Point> for LatLng {
    fn from(p: Point) -> Self {
        LatLng::from(&p)
    }
}

impl<'a> From<&'a Point> for LatLng {
    fn from(p: &'a Point) -> Self {
        LatLng {
            lat: p.latitude(),
            lng: p.longitude(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::f64_eq;
    use crate::s1::angle::Deg;

    macro_rules! ll {
        ($lat:expr, $lng:expr) => {
            LatLng::from_degrees($lat, $lng)
        };
    }
    macro_rules! p {
        ($x:expr, $y:expr, $z:expr) => {
            Point(Vector {
                x: $x as f64,
                y: $y as f64,
                z: $z as f64,
            })
        };
    }

    fn normalized_case(desc: &str, pos: LatLng, want: LatLng) {
        let normalized = pos.normalized();
        assert!(normalized.is_valid(), "{}", desc);
        let distance = normalized.distance(&want);
        assert!(distance < Deg(1e-13).into(), "{}", desc);
    }

    #[test]
    fn test_latlng_normalized() {
        normalized_case(
            "Valid lat/lng",
            ll!(21.8275043, 151.1979675),
            ll!(21.8275043, 151.1979675),
        );
        normalized_case(
            "Valid lat/lng in the West",
            ll!(21.8275043, -151.1979675),
            ll!(21.8275043, -151.1979675),
        );
        normalized_case(
            "Beyond the North pole",
            ll!(95., 151.1979675),
            ll!(90., 151.1979675),
        );
        normalized_case(
            "Beyond the South pole",
            ll!(-95., 151.1979675),
            ll!(-90., 151.1979675),
        );
        normalized_case(
            "At the date line (from East)",
            ll!(21.8275043, 180.),
            ll!(21.8275043, 180.),
        );
        normalized_case(
            "At the date line (from West)",
            ll!(21.8275043, -180.),
            ll!(21.8275043, -180.),
        );
        normalized_case(
            "Across the date line going East",
            ll!(21.8275043, 181.0012),
            ll!(21.8275043, -178.9988),
        );
        normalized_case(
            "Across the date line going West",
            ll!(21.8275043, -181.0012),
            ll!(21.8275043, 178.9988),
        );
        normalized_case("All wrong", ll!(256., 256.), ll!(90., -104.));
    }

    fn conversion_case(ll: LatLng, p: Point) {
        let llp: Point = ll.into();
        assert!(f64_eq(llp.0.x, p.0.x));
        assert!(f64_eq(llp.0.y, p.0.y));
        assert!(f64_eq(llp.0.z, p.0.z));

        let pll: LatLng = p.into();
        assert!(f64_eq(pll.lat.0, ll.lat.0));
        let is_polar = ll.lat.0 == PI / 2. || ll.lat.0 == -PI / 2.;
        if !is_polar {
            assert!(f64_eq(pll.lng.0, ll.lng.0));
        }
    }

    #[test]
    fn test_latlng_point_conversion() {
        conversion_case(ll!(0., 0.), p!(1, 0, 0));
        conversion_case(ll!(90., 0.), p!(6.12323e-17, 0, 1));
        conversion_case(ll!(-90., 0.), p!(6.12323e-17, 0, -1));
        conversion_case(ll!(0., 180.), p!(-1, 1.22465e-16, 0));
        conversion_case(ll!(0., -180.), p!(-1, -1.22465e-16, 0));
        conversion_case(ll!(90., 180.), p!(-6.12323e-17, 7.4988e-33, 1));
        conversion_case(ll!(-90., -180.), p!(-6.12323e-17, -7.4988e-33, -1));
        conversion_case(
            ll!(-81.82750430354997, 151.19796752929685),
            p!(-0.12456788151479525, 0.0684875268284729, -0.989844584550441),
        );
    }

    #[test]
    fn test_latlng_point_round_trip_is_identity() {
        let pts = [
            p!(1, 0, 0),
            p!(0.3, -0.4, 0.5),
            p!(-0.7, 0.1, 0.2),
            p!(0.01, 0.02, -0.99),
        ];
        for p in &pts {
            let p = Point(p.0.normalize());
            let round: Point = LatLng::from(&p).into();
            assert!((round.0.x - p.0.x).abs() <= 1e-15);
            assert!((round.0.y - p.0.y).abs() <= 1e-15);
            assert!((round.0.z - p.0.z).abs() <= 1e-15);
        }
    }

    #[test]
    fn test_latlng_distance() {
        let cases = [
            (ll!(90., 0.), ll!(90., 0.), 0., 0.),
            (ll!(-37., 25.), ll!(-66., -155.), 77., 1e-13),
            (ll!(0., 165.), ll!(0., -80.), 115., 1e-13),
            (ll!(47., -127.), ll!(-47., 53.), 180., 2e-6),
        ];
        for (ll1, ll2, want, tolerance) in &cases {
            let distance: Deg = ll1.distance(ll2).into();
            assert!((distance.0 - want).abs() <= *tolerance);
        }
    }
}
