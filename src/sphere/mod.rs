pub mod stuv;

pub mod cell;
pub mod cellid;

pub mod cap;
pub mod latlng;
pub mod point;
pub mod rect;

pub mod region;

pub mod edgeutil;
pub mod predicates;

#[cfg(test)]
mod random;

pub use self::cap::Cap;
pub use self::cell::Cell;
pub use self::cellid::CellId;
pub use self::latlng::LatLng;
pub use self::point::Point;
pub use self::rect::Rect;
pub use self::region::Region;
