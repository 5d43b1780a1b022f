/*
Copyright 2015 Google Inc. All rights reserved.

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

use crate::sphere::point::Point;

/// simple_crossing reports whether edge AB crosses CD at a point interior to
/// both edges. Properties:
///
///  (1) simple_crossing(b,a,c,d) == simple_crossing(a,b,c,d)
///  (2) simple_crossing(c,d,a,b) == simple_crossing(a,b,c,d)
pub fn simple_crossing(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
    // Compute the equivalent of the orientation sign for the triangles ACB,
    // CBD, BDA, and DAC. All four must have the same orientation (CW or CCW)
    // for an interior crossing to exist.
    let ab = a.0.cross(&b.0);
    let acb = -ab.dot(&c.0);
    let bda = ab.dot(&d.0);
    if acb * bda <= 0. {
        return false;
    }

    let cd = c.0.cross(&d.0);
    let cbd = -cd.dot(&b.0);
    let dac = cd.dot(&a.0);

    (acb * cbd > 0.) && (acb * dac > 0.)
}
