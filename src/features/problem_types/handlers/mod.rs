pub mod problem_type_handler;

pub use problem_type_handler::*;
