//! Seeded random generators for tests. Deterministic so that test failures
//! reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sphere::cap::Cap;
use crate::sphere::cellid::{CellId, MAX_LEVEL, NUM_FACES, POS_BITS};
use crate::sphere::point::Point;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// point returns a random unit-length point.
pub fn point<R: Rng>(rng: &mut R) -> Point {
    Point::from_coords(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
}

/// cap returns a cap with a random axis such that the log of its area is
/// uniformly distributed between the logs of the two given values. The log
/// of the cap angle is also approximately uniformly distributed.
pub fn cap<R: Rng>(rng: &mut R, min_area: f64, max_area: f64) -> Cap {
    let cap_area = max_area * (min_area / max_area).powf(rng.gen_range(0.0..1.0));
    Cap::from_center_area(&point(rng), cap_area)
}

/// cellid returns a random cell id at a random level.
pub fn cellid<R: Rng>(rng: &mut R) -> CellId {
    let level = rng.gen_range(0..=MAX_LEVEL);
    cellid_for_level(rng, level)
}

/// cellid_for_level returns a random cell id at the given level.
pub fn cellid_for_level<R: Rng>(rng: &mut R, level: u64) -> CellId {
    let face = rng.gen_range(0..NUM_FACES as u64);
    let pos = rng.gen::<u64>() & ((1 << POS_BITS) - 1);
    let cellid = CellId::from_face_pos_level(face, pos, level);
    assert_eq!(face, cellid.face() as u64);
    assert_eq!(level, cellid.level());
    cellid
}
