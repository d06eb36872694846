pub mod problem_type_dto;

pub use problem_type_dto::{CreateProblemTypeDto, ProblemTypeResponseDto, UpdateProblemTypeDto};
