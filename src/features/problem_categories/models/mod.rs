mod problem_category;

pub use problem_category::ProblemCategory;
