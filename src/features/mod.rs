pub mod issues_open;
pub mod problem_categories;
pub mod problem_types;
pub mod schedules_open;
