pub mod plant;
pub mod schedule;

pub use plant::{Plant, WateringInfo};
pub use schedule::Status;
