mod issue_open;

pub use issue_open::{IssueOpen, IssueStatus};
