pub mod problem_category_dto;

pub use problem_category_dto::{
    CreateProblemCategoryDto, ProblemCategoryResponseDto, UpdateProblemCategoryDto,
};
