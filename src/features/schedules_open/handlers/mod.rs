pub mod schedule_open_handler;

pub use schedule_open_handler::*;
