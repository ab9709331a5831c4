//! restaurant-finder - A read-only JSON query service over restaurant and dish tables

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod store;
