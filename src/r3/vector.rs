use std::ops;

use crate::consts::EPSILON;
use crate::s1::angle::Angle;

/// Vector represents a point in ℝ³.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ops::Add<Vector> for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Self::Output {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl ops::Sub<Vector> for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl ops::Mul<Vector> for Vector {
    type Output = Vector;
    /// componentwise product
    fn mul(self, other: Vector) -> Self::Output {
        Vector {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, m: f64) -> Self::Output {
        Vector {
            x: self.x * m,
            y: self.y * m,
            z: self.z * m,
        }
    }
}

impl ops::Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Self::Output {
        self * -1.
    }
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    pub fn approx_eq(&self, other: &Vector) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
    }

    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    /// norm2 returns the exact dot product of the vector with itself. Error
    /// bounds elsewhere rely on this not being computed any other way.
    pub fn norm2(&self) -> f64 {
        self.dot(self)
    }

    /// normalize returns a unit vector in the same direction, or the zero
    /// vector unchanged.
    pub fn normalize(&self) -> Self {
        if self.x == 0. && self.y == 0. && self.z == 0. {
            *self
        } else {
            *self * (1.0 / self.norm())
        }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn is_unit(&self) -> bool {
        const EPSILON2: f64 = 5e-14;
        (self.norm2() - 1.).abs() < EPSILON2
    }

    pub fn abs(&self) -> Self {
        Vector {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    pub fn cross(&self, other: &Self) -> Self {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    pub fn angle(&self, other: &Self) -> Angle {
        Angle(self.cross(other).norm().atan2(self.dot(other)))
    }

    /// ortho returns a unit vector orthogonal to this one. The fixed crossing
    /// partner is perturbed on an axis other than the argument's largest
    /// component, so the cross product is never zero.
    pub fn ortho(&self) -> Self {
        let mut ov = Vector {
            x: 0.012,
            y: 0.0053,
            z: 0.00457,
        };
        match self.largest_component() {
            Axis::X => ov.z = 1.0,
            Axis::Y => ov.x = 1.0,
            Axis::Z => ov.y = 1.0,
        };
        self.cross(&ov).normalize()
    }

    /// largest_component returns the axis holding the component with the
    /// largest magnitude.
    pub fn largest_component(&self) -> Axis {
        let a = self.abs();
        if a.x > a.y {
            if a.x > a.z {
                Axis::X
            } else {
                Axis::Z
            }
        } else if a.y > a.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// smallest_component returns the axis holding the component with the
    /// smallest magnitude.
    pub fn smallest_component(&self) -> Axis {
        let a = self.abs();
        if a.x < a.y {
            if a.x < a.z {
                Axis::X
            } else {
                Axis::Z
            }
        } else if a.y < a.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}
