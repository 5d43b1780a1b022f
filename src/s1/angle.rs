use std::f64::consts::PI;
use std::fmt;
use std::ops;

/// Angle represents a 1D angle in radians.
///
/// The conversion wrappers Rad and Deg make the unit at a construction site
/// explicit: `Angle::from(Deg(90.))` and `Angle::from(Rad(PI / 2.))` denote
/// the same angle.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle(pub f64);

/// Rad wraps a value in radians.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Rad(pub f64);

/// Deg wraps a value in degrees.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Deg(pub f64);

impl Angle {
    /// rad returns the angle in radians.
    pub fn rad(&self) -> f64 {
        self.0
    }

    /// deg returns the angle in degrees.
    pub fn deg(&self) -> f64 {
        self.0 * 180. / PI
    }

    pub fn abs(&self) -> Self {
        Angle(self.0.abs())
    }

    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    pub fn inf() -> Self {
        Angle(std::f64::INFINITY)
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }
}

impl From<Rad> for Angle {
    fn from(r: Rad) -> Self {
        Angle(r.0)
    }
}

impl From<Deg> for Angle {
    fn from(d: Deg) -> Self {
        Angle(d.0 * PI / 180.)
    }
}

impl From<Angle> for Deg {
    fn from(a: Angle) -> Self {
        Deg(a.deg())
    }
}

impl From<Angle> for Rad {
    fn from(a: Angle) -> Self {
        Rad(a.0)
    }
}

impl ops::Add<Angle> for Angle {
    type Output = Angle;
    fn add(self, other: Angle) -> Self::Output {
        Angle(self.0 + other.0)
    }
}

impl ops::Sub<Angle> for Angle {
    type Output = Angle;
    fn sub(self, other: Angle) -> Self::Output {
        Angle(self.0 - other.0)
    }
}

impl ops::Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, m: f64) -> Self::Output {
        Angle(self.0 * m)
    }
}

impl ops::Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.7}", self.deg())
    }
}
