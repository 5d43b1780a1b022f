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

use std::fmt;

use crate::consts::clamp;
use crate::r2;
use crate::r3::vector::Vector;
use crate::sphere::latlng::LatLng;
use crate::sphere::point::Point;
use crate::sphere::stuv::*;

/// CellId uniquely identifies a cell in the hierarchical decomposition of
/// the sphere. The most significant 3 bits encode the face number (0-5); the
/// remaining 61 bits encode the position of the center of this cell along a
/// Hilbert curve over that face. The zero value and the value 2^64-1 are
/// invalid cell ids; the first compares less than any valid id, the second
/// greater.
///
/// Sequentially increasing cell ids follow a continuous space-filling curve
/// over the entire sphere, with these properties:
///
///  - The id of a cell at level k consists of the 3-bit face number followed
///    by k bit pairs that recursively select one of the four children of
///    each cell. The next bit — the lsb marker — is always 1, and all lower
///    bits are 0. The level of a cell is therefore the position of its
///    lowest set bit: 2 * (MAX_LEVEL - k) for a cell at level k, so exactly
///    one marker bit is ever set in positions 0..60.
///
///  - The id of a parent cell is at the midpoint of the range of ids spanned
///    by its children (or by its descendants at any level).
///
/// Leaf cells (level 30, marker in bit 0) are often used to represent points
/// on the sphere; this type converts directly to and from that form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellId(pub u64);

const FACE_BITS: u64 = 3;
pub const NUM_FACES: u8 = 6;
pub const POS_BITS: u64 = 2 * MAX_LEVEL + 1;
pub use crate::sphere::stuv::{MAX_LEVEL, MAX_SIZE};

const WRAP_OFFSET: u64 = (NUM_FACES as u64) << POS_BITS;

const MAX_SIZE_I32: i32 = MAX_SIZE as i32;
const MAX_SIZE_F64: f64 = MAX_SIZE as f64;

const LOOKUP_BITS: u64 = 4;
pub const SWAP_MASK: u8 = 0x01;
pub const INVERT_MASK: u8 = 0x02;

/// lsb_for_level returns the marker bit for the given level.
fn lsb_for_level(level: u64) -> u64 {
    1 << (2 * (MAX_LEVEL - level))
}

/// size_ij returns the edge length of cells at the given level in (i,j)
/// coordinates.
pub fn size_ij(level: u64) -> u64 {
    1 << (MAX_LEVEL - level)
}

impl CellId {
    /// from_face_pos_level returns a cell given its face in the range [0,5],
    /// the 61-bit Hilbert curve position pos within that face, and the level
    /// in the range [0,MAX_LEVEL]. The position in the returned cell id is
    /// truncated to the Hilbert curve position at the center of the cell.
    pub fn from_face_pos_level(face: u64, pos: u64, level: u64) -> Self {
        CellId((face << POS_BITS) + (pos | 1)).parent(level)
    }

    /// from_face returns the cell covering the given cube face.
    pub fn from_face(face: u64) -> Self {
        CellId((face << POS_BITS) + lsb_for_level(0))
    }

    /// from_face_ij returns a leaf cell given its face and (i,j) coordinates
    /// on that face.
    pub fn from_face_ij(f: u8, i: i32, j: i32) -> Self {
        // The curve position is built 4 bits of i and j at a time through the
        // lookup table; bits carries the orientation between iterations.
        let mut n = (f as u64) << (POS_BITS - 1);
        let mut bits = (f & SWAP_MASK) as i32;

        let mask = (1 << LOOKUP_BITS) - 1;
        let mut k = 7;
        loop {
            bits += ((i >> (k * LOOKUP_BITS)) & mask) << (LOOKUP_BITS + 2);
            bits += ((j >> (k * LOOKUP_BITS)) & mask) << 2;
            bits = LOOKUP_POS[bits as usize] as i32;
            n |= ((bits >> 2) as u64) << ((k as u64) * 2 * LOOKUP_BITS);
            bits &= (SWAP_MASK | INVERT_MASK) as i32;

            if k == 0 {
                break;
            }
            k -= 1;
        }
        CellId(n * 2 + 1)
    }

    /// from_face_ij_wrap returns the leaf cell at the given (i,j) coordinates
    /// of the given face, where i and j may lie up to one cell outside the
    /// face; such coordinates are projected onto the adjacent face.
    fn from_face_ij_wrap(face: u8, i: i32, j: i32) -> Self {
        // Convert i and j to the coordinates of a leaf cell just beyond the
        // boundary of this face. This prevents 32-bit overflow when finding
        // the neighbors of a face cell.
        let i = clamp(i, -1i32, MAX_SIZE_I32);
        let j = clamp(j, -1i32, MAX_SIZE_I32);

        const SCALE: f64 = 1.0 / MAX_SIZE_F64;
        const LIMIT: f64 = 1. + std::f64::EPSILON;

        let u = clamp(SCALE * (2. * (i as f64) + 1. - MAX_SIZE_F64), -LIMIT, LIMIT);
        let v = clamp(SCALE * (2. * (j as f64) + 1. - MAX_SIZE_F64), -LIMIT, LIMIT);

        // Find the leaf cell coordinates on the adjacent face and convert
        // them to a cell id at the appropriate level.
        let (f, u, v) = xyz_to_face_uv(&face_uv_to_xyz(face, u, v));
        CellId::from_face_ij(f, st_to_ij(0.5 * (u + 1.)), st_to_ij(0.5 * (v + 1.)))
    }

    fn from_face_ij_same(f: u8, i: i32, j: i32, same_face: bool) -> Self {
        if same_face {
            CellId::from_face_ij(f, i, j)
        } else {
            CellId::from_face_ij_wrap(f, i, j)
        }
    }

    /// from_token returns a cell given the hex-encoded string of its id.
    pub fn from_token(s: &str) -> CellId {
        match u64::from_str_radix(s, 16) {
            Err(_) => CellId(0),
            Ok(mut v) => {
                if s.len() < 16 {
                    v <<= 4 * (16 - s.len());
                }
                CellId(v)
            }
        }
    }

    /// to_token returns a hex-encoded string of the id, with leading zeros
    /// included but trailing zeros stripped. In this form truncating digits
    /// corresponds to taking an ancestor cell.
    pub fn to_token(&self) -> String {
        if self.0 == 0 {
            "X".into()
        } else {
            format!("{:016x}", self.0).trim_end_matches('0').into()
        }
    }

    /// is_valid reports whether this is a well-formed cell id: a valid face
    /// and exactly one marker bit in an even position.
    pub fn is_valid(&self) -> bool {
        self.face() < NUM_FACES && (self.lsb() & 0x1555555555555555 != 0)
    }

    /// face returns the cube face for this cell id, in the range [0,5].
    pub fn face(&self) -> u8 {
        (self.0 >> POS_BITS) as u8
    }

    /// pos returns the position along the Hilbert curve, in [0, 2^61-1].
    pub fn pos(&self) -> u64 {
        self.0 & ((!0u64) >> FACE_BITS)
    }

    /// level returns the subdivision level, in [0, MAX_LEVEL].
    pub fn level(&self) -> u64 {
        MAX_LEVEL - (self.0.trailing_zeros() >> 1) as u64
    }

    /// is_leaf reports whether this cell is at the deepest level.
    pub fn is_leaf(&self) -> bool {
        self.0 & 1 != 0
    }

    /// is_face reports whether this is a top-level (face) cell.
    pub fn is_face(&self) -> bool {
        self.0 & (lsb_for_level(0) - 1) == 0
    }

    /// lsb returns the marker bit: the least significant bit that is set.
    pub fn lsb(&self) -> u64 {
        self.0 & self.0.wrapping_neg()
    }

    /// child_position returns the child position (0..3) of this cell's
    /// ancestor at the given level, relative to its parent. The argument
    /// should be in the range 1..=MAX_LEVEL. For example child_position(1)
    /// returns the position of this cell's level-1 ancestor within its
    /// top-level face cell.
    pub fn child_position(&self, level: u64) -> u64 {
        (self.0 >> (2 * (MAX_LEVEL - level) + 1)) & 3
    }

    /// parent returns the ancestor at the given level, which must be no
    /// greater than the current level.
    pub fn parent(&self, level: u64) -> Self {
        let lsb = lsb_for_level(level);
        CellId((self.0 & lsb.wrapping_neg()) | lsb)
    }

    /// immediate_parent is cheaper than parent, but requires !is_face().
    pub fn immediate_parent(&self) -> Self {
        let nlsb = self.lsb() << 2;
        CellId((self.0 & nlsb.wrapping_neg()) | nlsb)
    }

    /// children returns the four immediate children of this cell. If this is
    /// a leaf it returns four identical ids that are not the children.
    pub fn children(&self) -> [CellId; 4] {
        let mut lsb = self.lsb();
        let ch0 = self.0 - lsb + (lsb >> 2);
        lsb >>= 1;
        let ch1 = ch0 + lsb;
        let ch2 = ch1 + lsb;
        let ch3 = ch2 + lsb;
        [CellId(ch0), CellId(ch1), CellId(ch2), CellId(ch3)]
    }

    /// range_min returns the minimum cell id contained within this cell.
    pub fn range_min(&self) -> Self {
        CellId(self.0 - (self.lsb() - 1))
    }

    /// range_max returns the maximum cell id contained within this cell.
    pub fn range_max(&self) -> Self {
        CellId(self.0 + (self.lsb() - 1))
    }

    /// contains returns true iff this cell contains the other. Containment
    /// is an integer interval test against [range_min, range_max].
    pub fn contains(&self, other: &CellId) -> bool {
        self.range_min() <= *other && *other <= self.range_max()
    }

    /// intersects returns true iff this cell and the other share any cell,
    /// i.e. their [range_min, range_max] intervals overlap.
    pub fn intersects(&self, other: &CellId) -> bool {
        other.range_min() <= self.range_max() && other.range_max() >= self.range_min()
    }

    /// face_ij_orientation decodes the face, (i,j) coordinates and Hilbert
    /// curve orientation of this cell, using the global lookup table to
    /// unfiddle 4 bit-pairs at a time.
    pub fn face_ij_orientation(&self) -> (u8, i32, i32, u8) {
        let f = self.face();
        let mut i = 0i32;
        let mut j = 0i32;
        let mut orientation = (f & SWAP_MASK) as u64;
        let mut nbits = MAX_LEVEL - 7 * LOOKUP_BITS;

        let mut k = 7;
        loop {
            orientation +=
                ((self.0 >> (k * 2 * LOOKUP_BITS + 1)) & ((1 << (2 * nbits)) - 1)) << 2;
            orientation = LOOKUP_IJ[orientation as usize];
            i += ((orientation as i32) >> (LOOKUP_BITS + 2)) << (k * LOOKUP_BITS);
            j += (((orientation as i32) >> 2) & ((1 << LOOKUP_BITS) - 1)) << (k * LOOKUP_BITS);
            orientation &= (SWAP_MASK | INVERT_MASK) as u64;
            nbits = LOOKUP_BITS; // following iterations decode a full 4 pairs

            if k == 0 {
                break;
            }
            k -= 1;
        }

        // The position of the lsb marker alternates the swap bit at odd
        // levels.
        if self.lsb() & 0x1111111111111110 != 0 {
            orientation ^= SWAP_MASK as u64;
        }
        (f, i, j, orientation as u8)
    }

    /// edge_neighbors returns the four cells adjacent across this cell's
    /// four edges. Edges 0, 1, 2, 3 are in the down, right, up, left
    /// directions in face space. All neighbors are distinct.
    pub fn edge_neighbors(&self) -> [CellId; 4] {
        let level = self.level();
        let size = size_ij(level) as i32;
        let (f, i, j, _) = self.face_ij_orientation();

        [
            CellId::from_face_ij_wrap(f, i, j - size).parent(level),
            CellId::from_face_ij_wrap(f, i + size, j).parent(level),
            CellId::from_face_ij_wrap(f, i, j + size).parent(level),
            CellId::from_face_ij_wrap(f, i - size, j).parent(level),
        ]
    }

    /// face_siti returns the (face, si, ti) coordinates of the center of
    /// this cell. Although (si,ti) coordinates cover [0, 2^31] in general,
    /// cell centers always lie in [1, 2^31-1].
    fn face_siti(&self) -> (u8, u64, u64) {
        let (face, i, j, _) = self.face_ij_orientation();
        let delta = if self.is_leaf() {
            1
        } else if ((i as i64) ^ ((self.0 as i64) >> 2)) & 1 == 1 {
            2
        } else {
            0
        };
        (face, (2 * i + delta) as u64, (2 * j + delta) as u64)
    }

    /// raw_point returns the unnormalized direction vector to the center of
    /// this cell.
    pub fn raw_point(&self) -> Vector {
        let (face, si, ti) = self.face_siti();
        face_uv_to_xyz(face, st_to_uv(siti_to_st(si)), st_to_uv(siti_to_st(ti)))
    }

    /// child_begin returns the first child in a traversal of this cell's
    /// children in Hilbert curve order.
    ///
    /// ```text
    /// for id in c.child_iter() { ... }
    /// ```
    pub fn child_begin(&self) -> Self {
        let ol = self.lsb();
        CellId(self.0 - ol + (ol >> 2))
    }

    /// child_begin_at_level returns the first cell in a traversal of the
    /// descendants at the given level, in Hilbert curve order. The level must
    /// be no smaller than this cell's.
    pub fn child_begin_at_level(&self, level: u64) -> Self {
        assert!(self.level() <= level);
        CellId(self.0 - self.lsb() + lsb_for_level(level))
    }

    /// child_end returns the first cell after a traversal of this cell's
    /// children in Hilbert curve order. The returned cell may be invalid.
    pub fn child_end(&self) -> Self {
        let ol = self.lsb();
        CellId(self.0 + ol + (ol >> 2))
    }

    /// child_end_at_level returns the first cell after the last descendant
    /// at the given level. The level must be no smaller than this cell's.
    /// The returned cell may be invalid.
    pub fn child_end_at_level(&self, level: u64) -> Self {
        assert!(self.level() <= level);
        CellId(self.0 + self.lsb() + lsb_for_level(level))
    }

    /// next returns the next cell along the Hilbert curve at this level.
    /// Intended for iteration bounded by child_end / child_end_at_level; the
    /// result may be invalid past the end of the curve.
    pub fn next(&self) -> Self {
        CellId(self.0.wrapping_add(self.lsb() << 1))
    }

    /// prev returns the previous cell along the Hilbert curve at this level.
    pub fn prev(&self) -> Self {
        CellId(self.0.wrapping_sub(self.lsb() << 1))
    }

    /// advance advances or retreats the indicated number of steps along the
    /// Hilbert curve at the current level. The position is never moved past
    /// the ends of the curve.
    pub fn advance(&self, mut steps: i64) -> Self {
        if steps == 0 {
            return *self;
        }

        let step_shift = 2 * (MAX_LEVEL - self.level()) + 1;
        if steps < 0 {
            let min_steps = -((self.0 >> step_shift) as i64);
            if steps < min_steps {
                steps = min_steps;
            }
        } else {
            let max_steps = ((WRAP_OFFSET + self.lsb() - self.0) >> step_shift) as i64;
            if steps > max_steps {
                steps = max_steps;
            }
        }
        CellId(self.0.wrapping_add((steps as u64) << step_shift))
    }

    /// center_st returns the center of this cell in (s,t) space.
    fn center_st(&self) -> r2::Point {
        let (_, si, ti) = self.face_siti();
        r2::Point {
            x: siti_to_st(si),
            y: siti_to_st(ti),
        }
    }

    /// size_st returns the edge length of cells at the given level in (s,t)
    /// space.
    fn size_st(&self, level: u64) -> f64 {
        ij_to_stmin(size_ij(level) as i32)
    }

    /// bound_st returns the bound of this cell in (s,t) space.
    pub fn bound_st(&self) -> r2::Rect {
        let s = self.size_st(self.level());
        r2::Rect::from_center_size(&self.center_st(), &r2::Point { x: s, y: s })
    }

    /// center_uv returns the center of this cell in (u,v) space. The center
    /// of a cell is the point at which it is subdivided into four children,
    /// which in general is not the midpoint of the (u,v) rectangle covered
    /// by the cell.
    pub fn center_uv(&self) -> r2::Point {
        let (_, si, ti) = self.face_siti();
        r2::Point {
            x: st_to_uv(siti_to_st(si)),
            y: st_to_uv(siti_to_st(ti)),
        }
    }

    /// bound_uv returns the bound of this cell in (u,v) space.
    pub fn bound_uv(&self) -> r2::Rect {
        let (_, i, j, _) = self.face_ij_orientation();
        ij_level_to_bound_uv(i, j, self.level())
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/", self.face())?;
        for level in 1..=self.level() {
            write!(f, "{}", self.child_position(level))?;
        }
        Ok(())
    }
}

impl From<CellId> for Point {
    /// The center of the cell on the sphere, as a point. The maximum
    /// directional error compared to the exact mathematical result is
    /// 1.5 * DBL_EPSILON radians, and the maximum length error 2 * DBL_EPSILON
    /// (the same as normalize).
    fn from(id: CellId) -> Self {
        Point::from(&id)
    }
}
impl<'a> From<&'a CellId> for Point {
    fn from(id: &'a CellId) -> Self {
        Point(id.raw_point().normalize())
    }
}

impl From<CellId> for LatLng {
    /// The center of the cell, as a LatLng.
    fn from(id: CellId) -> Self {
        LatLng::from(&id)
    }
}
impl<'a> From<&'a CellId> for LatLng {
    fn from(id: &'a CellId) -> Self {
        LatLng::from(Point::from(id))
    }
}

impl From<LatLng> for CellId {
    fn from(ll: LatLng) -> Self {
        CellId::from(Point::from(ll))
    }
}

impl<'a> From<&'a Point> for CellId {
    /// Returns the leaf cell containing the point. Usually there is exactly
    /// one such cell, but for points on a cell boundary any adjacent cell
    /// may be (deterministically) chosen; cells are closed sets, so the
    /// returned cell always contains the point.
    fn from(p: &'a Point) -> Self {
        let (f, u, v) = xyz_to_face_uv(&p.0);
        let i = st_to_ij(uv_to_st(u));
        let j = st_to_ij(uv_to_st(v));
        CellId::from_face_ij(f, i, j)
    }
}
impl From<Point> for CellId {
    fn from(p: Point) -> Self {
        CellId::from(&p)
    }
}

/// An iterator over a contiguous Hilbert-curve range of cells at one level.
pub struct CellIdIter {
    cur: CellId,
    end: CellId,
}

impl Iterator for CellIdIter {
    type Item = CellId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == self.end {
            None
        } else {
            let res = self.cur;
            self.cur = self.cur.next();
            Some(res)
        }
    }
}

impl CellId {
    /// child_iter iterates over the four immediate children.
    pub fn child_iter(&self) -> CellIdIter {
        CellIdIter {
            cur: self.child_begin(),
            end: self.child_end(),
        }
    }

    /// child_iter_at_level iterates over the descendants at the given level.
    pub fn child_iter_at_level(&self, level: u64) -> CellIdIter {
        CellIdIter {
            cur: self.child_begin_at_level(level),
            end: self.child_end_at_level(level),
        }
    }
}

// The following lookup tables translate between a 2-bit Hilbert curve
// position within a cell and the (i,j) quadrant of its child, for each of
// the four possible curve orientations.
pub const IJ_TO_POS: [[u8; 4]; 4] = [[0, 1, 3, 2], [0, 3, 1, 2], [2, 3, 1, 0], [2, 1, 3, 0]];
pub const POS_TO_IJ: [[u8; 4]; 4] = [[0, 1, 3, 2], [0, 2, 3, 1], [3, 2, 0, 1], [3, 1, 0, 2]];
pub const POS_TO_ORIENTATION: [u8; 4] = [SWAP_MASK, 0, 0, INVERT_MASK | SWAP_MASK];

lazy_static! {
    static ref LOOKUP_TBL: [Vec<u64>; 2] = {
        let size = 1 << (2 * LOOKUP_BITS + 2);
        let mut lookup_pos = vec![0u64; size];
        let mut lookup_ij = vec![0u64; size];

        init_lookup_cell(0, 0, 0, 0, 0, 0, &mut lookup_pos, &mut lookup_ij);
        init_lookup_cell(0, 0, 0, SWAP_MASK, 0, SWAP_MASK, &mut lookup_pos, &mut lookup_ij);
        init_lookup_cell(0, 0, 0, INVERT_MASK, 0, INVERT_MASK, &mut lookup_pos, &mut lookup_ij);
        init_lookup_cell(
            0,
            0,
            0,
            SWAP_MASK | INVERT_MASK,
            0,
            SWAP_MASK | INVERT_MASK,
            &mut lookup_pos,
            &mut lookup_ij,
        );
        [lookup_pos, lookup_ij]
    };
    static ref LOOKUP_POS: &'static [u64] = LOOKUP_TBL[0].as_slice();
    static ref LOOKUP_IJ: &'static [u64] = LOOKUP_TBL[1].as_slice();
}

/// init_lookup_cell recursively fills the position and (i,j) lookup tables,
/// 4 levels of the curve at a time.
#[allow(clippy::too_many_arguments)]
fn init_lookup_cell(
    level: u64,
    i: i32,
    j: i32,
    orig_orientation: u8,
    pos: usize,
    orientation: u8,
    lookup_pos: &mut [u64],
    lookup_ij: &mut [u64],
) {
    if level == LOOKUP_BITS {
        let ij = ((i << LOOKUP_BITS) + j) as usize;
        lookup_pos[(ij << 2) + orig_orientation as usize] = ((pos << 2) as u64) + orientation as u64;
        lookup_ij[(pos << 2) + orig_orientation as usize] = ((ij << 2) as u64) + orientation as u64;
        return;
    }

    let r = &POS_TO_IJ[orientation as usize];
    for idx in 0..4 {
        init_lookup_cell(
            level + 1,
            (i << 1) + (r[idx] >> 1) as i32,
            (j << 1) + (r[idx] & 1) as i32,
            orig_orientation,
            (pos << 2) + idx,
            orientation ^ POS_TO_ORIENTATION[idx],
            lookup_pos,
            lookup_ij,
        )
    }
}

/// ij_level_to_bound_uv returns the (u,v)-space bound of the cell at the
/// given level containing the leaf cell with the given (i,j) coordinates.
pub fn ij_level_to_bound_uv(i: i32, j: i32, level: u64) -> r2::Rect {
    let cell_size = size_ij(level) as i32;
    let x_lo = i & -cell_size;
    let y_lo = j & -cell_size;

    r2::Rect {
        x: crate::r1::Interval {
            lo: st_to_uv(ij_to_stmin(x_lo)),
            hi: st_to_uv(ij_to_stmin(x_lo + cell_size)),
        },
        y: crate::r1::Interval {
            lo: st_to_uv(ij_to_stmin(y_lo)),
            hi: st_to_uv(ij_to_stmin(y_lo + cell_size)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s1::angle::Deg;
    use crate::sphere::random;

    #[test]
    fn test_cellid_from_face() {
        for face in 0..6 {
            let fpl = CellId::from_face_pos_level(face, 0, 0);
            let f = CellId::from_face(face);
            assert_eq!(fpl, f);
        }
        // The marker of a face cell sits in bit 60, below the 3 face bits.
        assert_eq!(CellId::from_face_pos_level(3, 0, 0).0, 0x7000000000000000);
        assert_eq!(CellId::from_face(5).0, 0xb000000000000000);
    }

    #[test]
    fn test_cellid_parent_child_relationships() {
        let ci = CellId::from_face_pos_level(3, 0x12345678, MAX_LEVEL - 4);
        assert!(ci.is_valid());
        assert_eq!(ci.face(), 3);
        assert_eq!(ci.pos(), 0x12345700);
        assert_eq!(ci.level(), 26);
        assert!(!ci.is_leaf());

        assert_eq!(ci.child_begin_at_level(ci.level() + 2).pos(), 0x12345610);
        assert_eq!(ci.child_begin().pos(), 0x12345640);
        assert_eq!(ci.children()[0].pos(), 0x12345640);
        assert_eq!(ci.immediate_parent().pos(), 0x12345400);
        assert_eq!(ci.parent(ci.level() - 2).pos(), 0x12345000);

        assert!(ci.child_begin() < ci);
        assert!(ci.child_end() > ci);
        assert_eq!(ci.child_end(), ci.child_begin().next().next().next().next());

        assert_eq!(ci.range_min(), ci.child_begin_at_level(MAX_LEVEL));
        assert_eq!(ci.range_max().next(), ci.child_end_at_level(MAX_LEVEL));
    }

    #[test]
    fn test_cellid_ancestors_contain_descendants() {
        let mut rng = random::rng();
        for _ in 0..100 {
            let id = random::cellid(&mut rng);
            for k in 0..id.level() {
                let parent = id.parent(k);
                assert!(parent.contains(&id));
                assert!(parent.intersects(&id));
                assert!(!id.contains(&parent) || k == id.level());
            }
        }
    }

    fn containment_case(x: &CellId, y: &CellId, x_contains_y: bool, y_contains_x: bool, x_intersects_y: bool) {
        assert_eq!(x.contains(y), x_contains_y);
        assert_eq!(y.contains(x), y_contains_x);
        assert_eq!(x.intersects(y), x_intersects_y);
        assert_eq!(y.intersects(x), x_intersects_y);
    }

    #[test]
    fn test_cellid_containment() {
        let a = CellId(0x80855c0000000000); // Pittsburgh
        let b = CellId(0x80855d0000000000); // child of a
        let c = CellId(0x80855dc000000000); // child of b
        let d = CellId(0x8085630000000000); // part of Pittsburgh disjoint from a

        containment_case(&a, &a, true, true, true);
        containment_case(&a, &b, true, false, true);
        containment_case(&a, &c, true, false, true);
        containment_case(&a, &d, false, false, false);
        containment_case(&b, &b, true, true, true);
        containment_case(&b, &c, true, false, true);
        containment_case(&b, &d, false, false, false);
        containment_case(&c, &c, true, true, true);
        containment_case(&c, &d, false, false, false);
        containment_case(&d, &d, true, true, true);
    }

    #[test]
    fn test_cellid_debug() {
        let ci = CellId(0xbb04000000000000);
        assert_eq!(format!("{:?}", ci), "5/31200");
    }

    fn latlng_case(ci: CellId, lat: f64, lng: f64) {
        let ll = LatLng {
            lat: Deg(lat).into(),
            lng: Deg(lng).into(),
        };
        let l2: LatLng = ci.into();

        let distance = ll.distance(&l2);
        assert!(distance < Deg(1.0e-9).into());

        let ci2: CellId = ll.into();
        assert_eq!(ci, ci2);
    }

    #[test]
    fn test_cellid_latlng() {
        latlng_case(CellId(0x47a1cbd595522b39), 49.703498679, 11.770681595);
        latlng_case(CellId(0x46525318b63be0f9), 55.685376759, 12.588490937);
        latlng_case(CellId(0x52b30b71698e729d), 45.486546517, -93.449700022);
        latlng_case(CellId(0x46ed8886cfadda85), 58.299984854, 23.049300056);
        latlng_case(CellId(0x3663f18a24cbe857), 34.364439040, 108.330699969);
        latlng_case(CellId(0x10a06c0a948cf5d), -30.694551352, -30.048758753);
        latlng_case(CellId(0x2b2bfd076787c5df), -25.285264027, 133.823116966);
        latlng_case(CellId(0xb09dff882a7809e1), -75.000000031, 0.000000133);
        latlng_case(CellId(0x94daa3d000000001), -24.694439215, -47.537363213);
        latlng_case(CellId(0x87a1000000000001), 38.899730392, -99.901813021);
        latlng_case(CellId(0x4fc76d5000000001), 81.647200334, -55.631712940);
        latlng_case(CellId(0x3b00955555555555), 10.050986518, 78.293170610);
        latlng_case(CellId(0x1dcc469991555555), -34.055420593, 18.551140038);
        latlng_case(CellId(0xb112966aaaaaaaab), -69.219262171, 49.670072392);
    }

    #[test]
    fn test_cellid_edge_neighbors() {
        // Check the edge neighbors of face 1.
        let faces = [5, 3, 2, 0];
        for (i, nbr) in CellId::from_face_ij(1, 0, 0)
            .parent(0)
            .edge_neighbors()
            .iter()
            .enumerate()
        {
            assert!(nbr.is_face());
            assert_eq!(nbr.face(), faces[i]);
        }

        // Check the edge neighbors of the corner cells at all levels. This
        // case is trickier because it requires projecting onto adjacent
        // faces.
        let max_ij = MAX_SIZE_I32 - 1;
        for level in 1..=MAX_LEVEL {
            let id = CellId::from_face_ij(1, 0, 0).parent(level);
            let level_size_ij = size_ij(level) as i32;
            let want = [
                CellId::from_face_ij(5, max_ij, max_ij).parent(level),
                CellId::from_face_ij(1, level_size_ij, 0).parent(level),
                CellId::from_face_ij(1, 0, level_size_ij).parent(level),
                CellId::from_face_ij(0, max_ij, 0).parent(level),
            ];
            assert_eq!(want, id.edge_neighbors());
        }
    }

    fn token_case(s: &str, id: CellId) {
        assert_eq!(CellId::from_token(s), id);
        assert_eq!(s, id.to_token());
    }

    #[test]
    fn test_cellid_tokens_nominal() {
        token_case("1", CellId(0x1000000000000000));
        token_case("3", CellId(0x3000000000000000));
        token_case("14", CellId(0x1400000000000000));
        token_case("41", CellId(0x4100000000000000));
        token_case("094", CellId(0x0940000000000000));
        token_case("537", CellId(0x5370000000000000));
        token_case("3fec", CellId(0x3fec000000000000));
        token_case("72f3", CellId(0x72f3000000000000));
        token_case("52b8c", CellId(0x52b8c00000000000));
        token_case("990ed", CellId(0x990ed00000000000));
        token_case("4476dc", CellId(0x4476dc0000000000));
        token_case("7d4afc4", CellId(0x7d4afc4000000000));
        token_case("b675785", CellId(0xb675785000000000));
        token_case("40cd6124", CellId(0x40cd612400000000));
        token_case("3ba32f81", CellId(0x3ba32f8100000000));
        token_case("08f569b5c", CellId(0x08f569b5c0000000));
        token_case("166c4d1954", CellId(0x166c4d1954000000));
        token_case("96f48d8c39", CellId(0x96f48d8c39000000));
        token_case("0bca3c7f74c", CellId(0x0bca3c7f74c00000));
        token_case("07a77802a3fc", CellId(0x07a77802a3fc0000));
        token_case("4e7887ec1801", CellId(0x4e7887ec18010000));
        token_case("4adad7ae74124", CellId(0x4adad7ae74124000));
        token_case("8ffc3f02af305c", CellId(0x8ffc3f02af305c00));
        token_case("6fa47550938183", CellId(0x6fa4755093818300));
        token_case("aa80a565df5e7fc", CellId(0xaa80a565df5e7fc0));
        token_case("01614b5e968e121", CellId(0x01614b5e968e1210));
        token_case("aa05238e7bd3ee7c", CellId(0xaa05238e7bd3ee7c));
        token_case("48a23db9c2963e5b", CellId(0x48a23db9c2963e5b));
    }

    #[test]
    fn test_cellid_tokens_error_case() {
        assert_eq!("X", CellId(0).to_token());
        assert_eq!(CellId(0), CellId::from_token("X"));

        assert_eq!(CellId(0), CellId::from_token("876b e99"));
        assert_eq!(CellId(0), CellId::from_token("876bee99\n"));
        assert_eq!(CellId(0), CellId::from_token("876[ee99"));
        assert_eq!(CellId(0), CellId::from_token(" 876bee99"));
    }

    fn assert_f64_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-14, "{} != {}", a, b);
    }

    const MAX_IJ: i32 = MAX_SIZE_I32 - 1;

    fn bound_uv_case(i: i32, j: i32, level: u64, x_lo: f64, y_lo: f64, x_hi: f64, y_hi: f64) {
        let uv = ij_level_to_bound_uv(i, j, level);
        assert_f64_close(uv.x.lo, x_lo.min(x_hi));
        assert_f64_close(uv.x.hi, x_lo.max(x_hi));
        assert_f64_close(uv.y.lo, y_lo.min(y_hi));
        assert_f64_close(uv.y.hi, y_lo.max(y_hi));
    }

    #[test]
    fn test_ij_level_to_bound_uv() {
        // The i,j space is [0, 2^30) but bounds can be queried slightly
        // outside it.
        bound_uv_case(-1, -1, 0, -5., -5., -1., -1.);
        bound_uv_case(
            -1,
            -1,
            MAX_LEVEL,
            -1.0000000024835267,
            -1.0000000024835267,
            -1.,
            -1.,
        );

        // Minimum i,j at different levels.
        bound_uv_case(0, 0, 0, -1., -1., 1., 1.);
        bound_uv_case(
            0,
            0,
            MAX_LEVEL / 2,
            -1.,
            -1.,
            -0.999918621033430099,
            -0.999918621033430099,
        );
        bound_uv_case(
            0,
            0,
            MAX_LEVEL,
            -1.,
            -1.,
            -0.999999997516473060,
            -0.999999997516473060,
        );

        // Center of the i,j space.
        bound_uv_case(
            MAX_IJ / 2,
            MAX_IJ / 2,
            MAX_LEVEL,
            -0.000000001241763433,
            -0.000000001241763433,
            0.,
            0.,
        );

        // Maximum i,j.
        bound_uv_case(MAX_IJ, MAX_IJ, 0, -1., -1., 1., 1.);
        bound_uv_case(
            MAX_IJ,
            MAX_IJ,
            MAX_LEVEL,
            0.999999997516473060,
            0.999999997516473060,
            1.,
            1.,
        );
    }

    #[test]
    fn test_cellid_point_round_trip_at_leaf_level() {
        let mut rng = random::rng();
        for _ in 0..100 {
            let id = random::cellid_for_level(&mut rng, MAX_LEVEL);
            let p = Point::from(&id);
            let id2 = CellId::from(&p);
            assert_eq!(id, id2);
        }
    }

    #[test]
    fn test_cellid_advance() {
        let id = CellId::from_face_pos_level(3, 0x12345678, MAX_LEVEL - 4);
        assert_eq!(id.advance(0), id);
        assert_eq!(id.advance(1), id.next());
        assert_eq!(id.advance(-1), id.prev());
        assert_eq!(id.advance(3).advance(-3), id);

        // advancing past the ends of the curve clamps
        let begin = CellId::from_face(0).child_begin_at_level(5);
        let end = CellId::from_face(5).child_end_at_level(5);
        assert_eq!(begin.advance(-500), begin);
        assert_eq!(end.prev().advance(500), end.prev().advance(1));
    }

    #[test]
    fn test_cellid_child_iter() {
        let id = CellId::from_face_pos_level(2, 0, 4);
        let children: Vec<CellId> = id.child_iter().collect();
        assert_eq!(children.len(), 4);
        assert_eq!(children[0], id.children()[0]);
        assert_eq!(children[3], id.children()[3]);
        for ch in &children {
            assert_eq!(ch.level(), id.level() + 1);
            assert!(id.contains(ch));
        }

        let grandchildren: Vec<CellId> = id.child_iter_at_level(id.level() + 2).collect();
        assert_eq!(grandchildren.len(), 16);
    }

    #[test]
    fn test_cellid_face_cell_ranges() {
        // A face cell contains any of its descendants by plain integer
        // comparison against the marker-derived range.
        let face3 = CellId::from_face(3);
        assert_eq!(face3.range_min().0, face3.0 - (face3.lsb() - 1));
        assert_eq!(face3.range_max().0, face3.0 + (face3.lsb() - 1));
        let deep = CellId::from_face_pos_level(3, 0x12345678, 27);
        assert!(face3.contains(&deep));
        assert!(!CellId::from_face(2).contains(&deep));
    }
}
