pub mod issue_open_handler;

pub use issue_open_handler::*;
