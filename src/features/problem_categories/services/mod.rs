mod problem_category_service;

pub use problem_category_service::{ProblemCategoryResolver, ProblemCategoryService};
