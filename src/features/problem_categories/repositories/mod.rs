mod problem_category_repository;

#[cfg(test)]
pub use problem_category_repository::mock;
pub use problem_category_repository::{PgProblemCategoryRepository, ProblemCategoryRepository};
