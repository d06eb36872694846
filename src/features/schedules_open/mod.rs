//! Scheduled follow-ups ("open schedules") tied to an issue.
//!
//! Every schedule references exactly one existing issue, checked through
//! [`IssueResolver`](crate::features::issues_open::IssueResolver) on create
//! and update. Updates overwrite every field; there is no partial update.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/schedules-open` | Create schedule |
//! | GET | `/api/schedules-open` | List schedules |
//! | GET | `/api/schedules-open/{id}` | Get schedule |
//! | PUT | `/api/schedules-open/{id}` | Overwrite schedule |
//! | DELETE | `/api/schedules-open/{id}` | Delete schedule |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgScheduleOpenRepository;
pub use services::SchedulesOpenService;
