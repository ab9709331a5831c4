//! # Restaurant Finder REST API Module
//!
//! Read-only GET endpoints over the `restaurants` and `dishes` tables.
//! Every request parameter is bound into a prepared statement; responses are
//! 200 with rows, 404 with a message, or 500 with the store error.

pub mod errors;
pub mod filter;
pub mod handler;
pub mod response;
pub mod server;

pub use errors::{RestError, RestResult};
pub use filter::{DishFilter, RestaurantFilter};
pub use handler::QueryGateway;
pub use response::{ErrorResponse, MessageResponse, RowsResponse};
pub use server::rest_routes;
