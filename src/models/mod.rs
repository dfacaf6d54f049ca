pub mod calendar;
pub mod record;


pub use calendar::*;
pub use record::*;
