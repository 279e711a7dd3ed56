//! SQLite backend for the Faculty lecturer records store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on the connection's
//! dedicated thread without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
