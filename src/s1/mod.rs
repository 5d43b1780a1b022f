pub mod angle;
pub mod interval;

pub use self::angle::{Angle, Deg, Rad};
pub use self::interval::Interval;
