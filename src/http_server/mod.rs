//! # HTTP Server Module
//!
//! Axum server exposing the book API.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /books`, `GET /books` - Create and list
//! - `GET|PUT|DELETE /books/:id` - Fetch, overwrite and remove by hex id

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use book_routes::{book_routes, BookState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
