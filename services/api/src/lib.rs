//! HTTP surface of the user directory service
//!
//! A thin JSON-over-HTTP wrapper around the `users` table: request parsing,
//! repository calls, and response serialization. The router and state are
//! exported so integration tests can drive the exact production wiring.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
