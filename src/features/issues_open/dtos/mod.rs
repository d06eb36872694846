pub mod issue_open_dto;

pub use issue_open_dto::{CreateIssueOpenDto, IssueOpenResponseDto, UpdateIssueOpenDto};
