//! Observability for the restaurant finder
//!
//! Structured logging through `tracing`. HTTP request spans are added by the
//! server's `TraceLayer`; everything else logs events directly.
//!
//! # Usage
//!
//! ```ignore
//! use restaurant_finder::observability::{init_logging, LogFormat};
//!
//! init_logging(LogFormat::Json);
//! tracing::info!(port = 3000, "listening");
//! ```

mod logger;

pub use logger::{init_logging, LogFormat};
