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

//! The projection between the unit sphere and the six faces of the unit cube.
//!
//! Points on the sphere pass through several coordinate systems on their way
//! to a cell id:
//!
//!  - (x, y, z): a point on the unit sphere.
//!  - (face, u, v): the cube face containing the point and the coordinates of
//!    its central projection onto that face, each in [-1, 1].
//!  - (face, s, t): the cube-space coordinates warped by a quadratic so that
//!    equal-area regions of the sphere map to more nearly equal areas of the
//!    face, each in [0, 1].
//!  - (face, i, j): leaf-cell coordinates, integers in [0, 2^30 - 1].
//!
//! The quadratic warp trades a little accuracy in cell-size uniformity for an
//! algebraic inverse; the tangent warp is more uniform but needs a tan() per
//! conversion.

use crate::consts::clamp;
use crate::r3::vector::{Axis, Vector};

/// The deepest subdivision level, and the number of bits in an i or j
/// coordinate.
pub const MAX_LEVEL: u64 = 30;

/// The number of leaf cells spanning one edge of a face.
pub const MAX_SIZE: u64 = 1 << MAX_LEVEL;

/// The maximum value of an si or ti coordinate. The (si, ti) grid is twice as
/// fine as the (i, j) grid so that cell centers land on grid points.
pub const MAX_SITI: u64 = MAX_SIZE << 1;

/// siti_to_st converts an si or ti value to the corresponding s or t value.
/// Values beyond the grid saturate to 1.
pub fn siti_to_st(si: u64) -> f64 {
    if si > MAX_SITI {
        1.
    } else {
        (si as f64) / (MAX_SITI as f64)
    }
}

/// st_to_siti converts the s or t value to the nearest si or ti coordinate.
/// The result may be outside the range of valid (si, ti) values for s or t
/// outside [0, 1].
pub fn st_to_siti(s: f64) -> u64 {
    if s < 0. {
        (s * (MAX_SITI as f64) - 0.5) as u64
    } else {
        (s * (MAX_SITI as f64) + 0.5) as u64
    }
}

/// st_to_uv converts an s or t value in [0, 1] to the corresponding u or v
/// value in [-1, 1] by the inverse of the quadratic warp.
pub fn st_to_uv(s: f64) -> f64 {
    if s >= 0.5 {
        (1. / 3.) * (4. * s * s - 1.)
    } else {
        (1. / 3.) * (1. - 4. * (1. - s) * (1. - s))
    }
}

/// uv_to_st converts a u or v value in [-1, 1] to the corresponding s or t
/// value in [0, 1] by the quadratic warp.
pub fn uv_to_st(u: f64) -> f64 {
    if u >= 0. {
        0.5 * (1. + 3. * u).sqrt()
    } else {
        1. - 0.5 * (1. - 3. * u).sqrt()
    }
}

/// st_to_ij converts an s or t value in [0, 1] to the i or j coordinate of
/// the leaf cell containing it, clamped into [0, 2^30 - 1].
pub fn st_to_ij(s: f64) -> i32 {
    clamp((MAX_SIZE as f64 * s).floor() as i32, 0, (MAX_SIZE as i32) - 1)
}

/// ij_to_stmin converts the i or j index of a leaf cell to the minimum s or t
/// value contained by that cell. The argument must be in [0, 2^30], i.e. up
/// to one position beyond the normal range of valid leaf cell indices.
pub fn ij_to_stmin(i: i32) -> f64 {
    (i as f64) / (MAX_SIZE as f64)
}

/// face returns the face containing the given direction vector. For a
/// direction along a face boundary the result is one of the adjacent faces,
/// deterministically.
pub fn face(v: &Vector) -> u8 {
    let mut f = match v.largest_component() {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    };
    match f {
        0 if v.x < 0. => f += 3,
        1 if v.y < 0. => f += 3,
        2 if v.z < 0. => f += 3,
        _ => (),
    }
    f
}

/// valid_face_xyz_to_uv computes the (u, v) coordinates of the projection of
/// the point onto the given face. Requires that the point is actually visible
/// from that face, i.e. its dot product with the face normal is positive.
pub fn valid_face_xyz_to_uv(face: u8, v: &Vector) -> (f64, f64) {
    match face {
        0 => (v.y / v.x, v.z / v.x),
        1 => (-v.x / v.y, v.z / v.y),
        2 => (-v.x / v.z, -v.y / v.z),
        3 => (v.z / v.x, v.y / v.x),
        4 => (v.z / v.y, -v.x / v.y),
        5 => (-v.y / v.z, -v.x / v.z),
        _ => unreachable!(),
    }
}

/// xyz_to_face_uv converts a direction vector (not necessarily unit length)
/// to the face containing it and the (u, v) coordinates on that face.
pub fn xyz_to_face_uv(v: &Vector) -> (u8, f64, f64) {
    let f = face(v);
    let (u, v) = valid_face_xyz_to_uv(f, v);
    (f, u, v)
}

/// face_uv_to_xyz turns face and (u, v) coordinates into an unnormalized
/// direction vector.
pub fn face_uv_to_xyz(face: u8, u: f64, v: f64) -> Vector {
    match face {
        0 => Vector::new(1., u, v),
        1 => Vector::new(-u, 1., v),
        2 => Vector::new(-u, -v, 1.),
        3 => Vector::new(-1., -v, -u),
        4 => Vector::new(v, -1., -u),
        5 => Vector::new(v, u, -1.),
        _ => unreachable!(),
    }
}

/// face_xyz_to_uv returns the (u, v) coordinates of the point projected onto
/// the given face, or None when the point's largest-magnitude component does
/// not put it on that face's hemisphere.
pub fn face_xyz_to_uv(face: u8, v: &Vector) -> Option<(f64, f64)> {
    let visible = match face {
        0 => v.x > 0.,
        1 => v.y > 0.,
        2 => v.z > 0.,
        3 => v.x < 0.,
        4 => v.y < 0.,
        5 => v.z < 0.,
        _ => unreachable!(),
    };
    if !visible {
        return None;
    }
    Some(valid_face_xyz_to_uv(face, v))
}

/// u_axis returns the u axis for the given face.
pub fn u_axis(face: u8) -> Vector {
    uvw_axis(face, 0)
}

/// v_axis returns the v axis for the given face.
pub fn v_axis(face: u8) -> Vector {
    uvw_axis(face, 1)
}

/// unit_norm returns the outward-facing unit normal of the given face.
pub fn unit_norm(face: u8) -> Vector {
    uvw_axis(face, 2)
}

/// u_norm returns the right-handed normal (not necessarily unit length) of
/// the great circle through the edge of constant u on the given face. When
/// invert is set the normal faces the other way, which yields the
/// inward-facing normal of the left cell edge.
pub fn u_norm(face: u8, u: f64, invert: bool) -> Vector {
    let n = match face {
        0 => Vector::new(u, -1., 0.),
        1 => Vector::new(1., u, 0.),
        2 => Vector::new(1., 0., u),
        3 => Vector::new(-u, 0., 1.),
        4 => Vector::new(0., -u, 1.),
        5 => Vector::new(0., -1., -u),
        _ => unreachable!(),
    };
    if invert {
        -n
    } else {
        n
    }
}

/// v_norm returns the right-handed normal (not necessarily unit length) of
/// the great circle through the edge of constant v on the given face. When
/// invert is set the normal faces the other way, which yields the
/// inward-facing normal of the top cell edge.
pub fn v_norm(face: u8, v: f64, invert: bool) -> Vector {
    let n = match face {
        0 => Vector::new(-v, 0., 1.),
        1 => Vector::new(0., -v, 1.),
        2 => Vector::new(0., -1., -v),
        3 => Vector::new(v, -1., 0.),
        4 => Vector::new(1., v, 0.),
        5 => Vector::new(1., 0., v),
        _ => unreachable!(),
    };
    if invert {
        -n
    } else {
        n
    }
}

// The u, v and normal axes for each face, in that order.
const FACE_UVW_AXES: [[Vector; 3]; 6] = [
    [
        Vector { x: 0., y: 1., z: 0. },
        Vector { x: 0., y: 0., z: 1. },
        Vector { x: 1., y: 0., z: 0. },
    ],
    [
        Vector { x: -1., y: 0., z: 0. },
        Vector { x: 0., y: 0., z: 1. },
        Vector { x: 0., y: 1., z: 0. },
    ],
    [
        Vector { x: -1., y: 0., z: 0. },
        Vector { x: 0., y: -1., z: 0. },
        Vector { x: 0., y: 0., z: 1. },
    ],
    [
        Vector { x: 0., y: 0., z: -1. },
        Vector { x: 0., y: -1., z: 0. },
        Vector { x: -1., y: 0., z: 0. },
    ],
    [
        Vector { x: 0., y: 0., z: -1. },
        Vector { x: 1., y: 0., z: 0. },
        Vector { x: 0., y: -1., z: 0. },
    ],
    [
        Vector { x: 0., y: 1., z: 0. },
        Vector { x: 1., y: 0., z: 0. },
        Vector { x: 0., y: 0., z: -1. },
    ],
];

/// uvw_axis returns the given axis of the given face.
fn uvw_axis(face: u8, axis: usize) -> Vector {
    FACE_UVW_AXES[face as usize][axis]
}
