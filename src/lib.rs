//! Spherical geometry on the unit sphere: a hierarchical decomposition of the
//! sphere into cells via a cube-face projection, together with the robust
//! orientation predicates and region primitives (caps, lat/lng rectangles,
//! cells) that spatial algorithms are built from.
//!
//! All public entities are immutable values; operations are pure functions of
//! their inputs and safe to call concurrently without synchronization.

#[macro_use]
extern crate lazy_static;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub mod consts;

pub mod r1;
pub mod r2;
pub mod r3;

pub mod s1;

// export sphere modules directly
mod sphere;
pub use crate::sphere::*;
