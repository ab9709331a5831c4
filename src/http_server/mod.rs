//! # HTTP Server Module
//!
//! Binds the query gateway to an Axum server.
//!
//! # Endpoints
//!
//! - `/` - Landing page
//! - `/health` - Health check
//! - `/restaurants/*`, `/dishes/*` - Read-only queries
//! - anything else - Static assets

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{shutdown_signal, HttpServer};
