mod issue_open_service;

pub use issue_open_service::{IssueResolver, IssuesOpenService};
