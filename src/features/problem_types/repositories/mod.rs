mod problem_type_repository;

#[cfg(test)]
pub use problem_type_repository::mock;
pub use problem_type_repository::{
    load_linked_problem_types, replace_linked_problem_types, PgProblemTypeRepository,
    ProblemTypeLink, ProblemTypeRepository,
};
