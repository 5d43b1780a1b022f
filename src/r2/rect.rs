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

use crate::r1::interval::{self, Interval};
use crate::r2::point::Point;

/// Rect represents a closed axis-aligned rectangle in the (x,y) plane.
///
/// A rectangle is empty when either axis interval is empty; the constructors
/// and set operations keep the two axes empty together, so a valid rectangle
/// has both axes empty or neither.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: Interval,
    pub y: Interval,
}

/// The canonical empty rectangle.
pub const EMPTY: Rect = Rect {
    x: interval::EMPTY,
    y: interval::EMPTY,
};

impl Rect {
    /// from_points constructs the minimal rectangle containing the two given
    /// points. Larger point sets are accumulated with the `+` operator.
    pub fn from_points(a: &Point, b: &Point) -> Self {
        Rect {
            x: Interval::from_point_pair(a.x, b.x),
            y: Interval::from_point_pair(a.y, b.y),
        }
    }

    /// from_center_size constructs a rectangle with the given center and
    /// size. Both dimensions of size must be non-negative.
    pub fn from_center_size(center: &Point, size: &Point) -> Self {
        Rect {
            x: Interval::from_point(center.x).expanded(size.x / 2.),
            y: Interval::from_point(center.y).expanded(size.y / 2.),
        }
    }

    /// empty constructs the canonical empty rectangle. Use is_empty to test
    /// for empty rectangles, since they have more than one representation.
    pub fn empty() -> Self {
        EMPTY
    }

    /// is_valid reports whether the rectangle is valid; the x interval must
    /// be empty iff the y interval is empty.
    pub fn is_valid(&self) -> bool {
        self.x.is_empty() == self.y.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// vertices returns all four vertices of the rectangle, in CCW direction
    /// starting with the lower left corner.
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point {
                x: self.x.lo,
                y: self.y.lo,
            },
            Point {
                x: self.x.hi,
                y: self.y.lo,
            },
            Point {
                x: self.x.hi,
                y: self.y.hi,
            },
            Point {
                x: self.x.lo,
                y: self.y.hi,
            },
        ]
    }

    /// vertex_ij returns the vertex in direction i along the x axis (0=left,
    /// 1=right) and direction j along the y axis (0=down, 1=up).
    pub fn vertex_ij(&self, i: usize, j: usize) -> Point {
        Point {
            x: if i == 0 { self.x.lo } else { self.x.hi },
            y: if j == 0 { self.y.lo } else { self.y.hi },
        }
    }

    pub fn lo(&self) -> Point {
        Point {
            x: self.x.lo,
            y: self.y.lo,
        }
    }

    pub fn hi(&self) -> Point {
        Point {
            x: self.x.hi,
            y: self.y.hi,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x.center(),
            y: self.y.center(),
        }
    }

    /// size returns the width and height of the rectangle. Empty rectangles
    /// have a negative width and height.
    pub fn size(&self) -> Point {
        Point {
            x: self.x.len(),
            y: self.y.len(),
        }
    }

    /// contains_point reports whether the rectangle contains the given point.
    /// Rectangles are closed regions, i.e. they contain their boundary.
    pub fn contains_point(&self, p: &Point) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    pub fn interior_contains_point(&self, p: &Point) -> bool {
        self.x.interior_contains(p.x) && self.y.interior_contains(p.y)
    }

    pub fn contains(&self, r: &Self) -> bool {
        self.x.contains_interval(&r.x) && self.y.contains_interval(&r.y)
    }

    pub fn interior_contains(&self, r: &Self) -> bool {
        self.x.interior_contains_interval(&r.x) && self.y.interior_contains_interval(&r.y)
    }

    pub fn intersects(&self, r: &Self) -> bool {
        self.x.intersects(&r.x) && self.y.intersects(&r.y)
    }

    pub fn interior_intersects(&self, r: &Self) -> bool {
        self.x.interior_intersects(&r.x) && self.y.interior_intersects(&r.y)
    }

    /// clamp_point returns the closest point in the rectangle to the given
    /// point. The rectangle must be non-empty; a caller that clamps against
    /// an empty rectangle gets an unspecified point back.
    pub fn clamp_point(&self, p: &Point) -> Point {
        Point {
            x: self.x.clamp_point(p.x),
            y: self.y.clamp_point(p.y),
        }
    }

    /// expanded returns a rectangle expanded in the x direction by margin.x
    /// and in the y direction by margin.y. Negative margins shrink; a shrink
    /// past either midpoint gives the empty rectangle. Any expansion of an
    /// empty rectangle remains empty.
    pub fn expanded(&self, margin: &Point) -> Self {
        let x = self.x.expanded(margin.x);
        let y = self.y.expanded(margin.y);
        if x.is_empty() || y.is_empty() {
            EMPTY
        } else {
            Rect { x, y }
        }
    }

    /// expanded_by_margin returns the rectangle expanded by the amount on
    /// all sides.
    pub fn expanded_by_margin(&self, margin: f64) -> Self {
        self.expanded(&Point {
            x: margin,
            y: margin,
        })
    }

    /// union returns the smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        Rect {
            x: self.x.union(&other.x),
            y: self.y.union(&other.y),
        }
    }

    /// intersection returns the smallest rectangle containing the
    /// intersection of the two rectangles.
    pub fn intersection(&self, other: &Self) -> Self {
        let x = self.x.intersection(&other.x);
        let y = self.y.intersection(&other.y);
        if x.is_empty() || y.is_empty() {
            EMPTY
        } else {
            Rect { x, y }
        }
    }

    /// approx_eq reports whether the x and y intervals of the two rectangles
    /// are the same up to a small tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.x.approx_eq(&other.x) && self.y.approx_eq(&other.y)
    }
}

impl ops::Add<&Point> for Rect {
    type Output = Rect;
    /// expands the rectangle to include the given point, by the minimum
    /// amount possible.
    fn add(self, p: &Point) -> Self::Output {
        Rect {
            x: self.x + p.x,
            y: self.y + p.y,
        }
    }
}
