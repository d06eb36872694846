//! Problem types feature.
//!
//! A problem type is an independently owned record that categories and
//! issues reference. Besides CRUD, this feature resolves lists of type IDs
//! into records for sibling features through [`ProblemTypeResolver`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/problem-types` | Create problem type |
//! | GET | `/api/problem-types` | List problem types |
//! | GET | `/api/problem-types/{id}` | Get problem type |
//! | PUT | `/api/problem-types/{id}` | Update problem type (partial) |
//! | DELETE | `/api/problem-types/{id}` | Delete problem type |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgProblemTypeRepository;
pub use services::{ProblemTypeResolver, ProblemTypesService};
