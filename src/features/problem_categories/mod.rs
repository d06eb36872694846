//! Problem categories feature.
//!
//! A category groups an ordered list of problem types. Type IDs supplied on
//! create/update are resolved through [`ProblemTypeResolver`] before anything
//! is written, so a persisted category only ever references existing types.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/problem-categories` | Create category |
//! | GET | `/api/problem-categories` | List categories (404 when none exist) |
//! | GET | `/api/problem-categories/{id}` | Get category |
//! | PUT | `/api/problem-categories/{id}` | Update category (partial) |
//! | DELETE | `/api/problem-categories/{id}` | Delete category |
//!
//! [`ProblemTypeResolver`]: crate::features::problem_types::ProblemTypeResolver

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgProblemCategoryRepository;
pub use services::{ProblemCategoryResolver, ProblemCategoryService};
