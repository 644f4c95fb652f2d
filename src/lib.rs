pub mod app;
pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod forwarder;
pub mod handlers;
pub mod models;
pub mod routes;

// Re-export key functions for convenience
pub use app::{create_app, create_app_with_forwarder, init_tracing};
