pub mod problem_category_handler;

pub use problem_category_handler::*;
