//! In-memory CRUD service for post records, addressed by position.

pub mod api;
pub mod config;
pub mod models;
pub mod store;
