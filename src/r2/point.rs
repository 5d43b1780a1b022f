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

use std::ops;

/// Point represents a point in ℝ².
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl ops::Add<Point> for Point {
    type Output = Point;
    fn add(self, other: Point) -> Self::Output {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl ops::Sub<Point> for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Self::Output {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl ops::Mul<f64> for Point {
    type Output = Point;
    fn mul(self, m: f64) -> Self::Output {
        Point {
            x: self.x * m,
            y: self.y * m,
        }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// ortho returns the counterclockwise orthogonal point with the same norm.
    pub fn ortho(&self) -> Self {
        Point {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// cross returns the magnitude of the cross product of the two points
    /// viewed as 3-vectors in the plane.
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn normalize(&self) -> Self {
        if self.x == 0. && self.y == 0. {
            *self
        } else {
            *self * (1.0 / self.norm())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::f64_eq;

    macro_rules! p {
        ($x:expr, $y:expr) => {
            Point {
                x: $x as f64,
                y: $y as f64,
            }
        };
    }

    #[test]
    fn test_point_ortho() {
        assert_eq!(p!(0, 0).ortho(), p!(0, 0));
        assert_eq!(p!(0, 1).ortho(), p!(-1, 0));
        assert_eq!(p!(1, 1).ortho(), p!(-1, 1));
        assert_eq!(p!(-4, 7).ortho(), p!(-7, -4));
    }

    #[test]
    fn test_point_dot_cross() {
        assert_eq!(p!(1, 1).dot(&p!(4, 3)), 7.);
        assert_eq!(p!(-4, 7).dot(&p!(1, 5)), 31.);
        assert_eq!(p!(1, 1).cross(&p!(-1, -1)), 0.);
        assert_eq!(p!(1, 1).cross(&p!(4, 3)), -1.);
        assert_eq!(p!(1, 5).cross(&p!(-2, 3)), 13.);
    }

    #[test]
    fn test_point_norm() {
        assert_eq!(p!(0, 0).norm(), 0.);
        assert_eq!(p!(3, 4).norm(), 5.);
        assert_eq!(p!(3, -4).norm(), 5.);
        assert!(f64_eq(p!(1., 3f64.sqrt()).norm(), 2.));
    }

    #[test]
    fn test_point_normalize() {
        let n = p!(3, 4).normalize();
        assert!(f64_eq(n.x, 0.6));
        assert!(f64_eq(n.y, 0.8));
        assert_eq!(p!(0, 0).normalize(), p!(0, 0));
    }

    #[test]
    fn test_point_arith() {
        assert_eq!(p!(1, 2) + p!(3, 4), p!(4, 6));
        assert_eq!(p!(1, 2) - p!(3, 4), p!(-2, -2));
        assert_eq!(p!(1, -3) * 2., p!(2, -6));
    }
}
