//! Common library for the user directory service
//!
//! This crate provides the infrastructure shared by the HTTP service:
//! database connectivity, connection pooling, and the error types that
//! go with them.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, health_check, init_pool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config)?;
//!     let is_healthy = health_check(&pool).await.is_ok();
//!     println!("Database health check: {}", is_healthy);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
