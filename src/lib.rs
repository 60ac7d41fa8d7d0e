//! bookstore - HTTP record service for books backed by MongoDB

pub mod cli;
pub mod http_server;
pub mod model;
pub mod store;
