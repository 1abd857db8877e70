pub mod colors;
pub mod date;
pub mod duration;
pub mod table;

pub use date::{format_epoch, parse_datetime};
pub use duration::{format_minutes, parse_minutes};
