mod issue_open_repository;

#[cfg(test)]
pub use issue_open_repository::mock;
pub use issue_open_repository::{IssueOpenRepository, PgIssueOpenRepository};
