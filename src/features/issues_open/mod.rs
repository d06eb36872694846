//! Issue tickets ("issue-open") feature.
//!
//! An issue belongs to one problem category and lists the problem types it
//! concerns. Both references are resolved through sibling capabilities before
//! the issue is written. Schedules look issues up through [`IssueResolver`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/issues-open` | Open an issue |
//! | GET | `/api/issues-open` | List issues |
//! | GET | `/api/issues-open/{id}` | Get issue |
//! | PUT | `/api/issues-open/{id}` | Update issue (partial) |
//! | DELETE | `/api/issues-open/{id}` | Delete issue and its schedules |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgIssueOpenRepository;
pub use services::{IssueResolver, IssuesOpenService};
