mod problem_type_service;

pub use problem_type_service::{ProblemTypeResolver, ProblemTypesService};
