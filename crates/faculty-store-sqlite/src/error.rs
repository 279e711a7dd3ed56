//! Error type for `faculty-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] faculty_core::Error),

  /// Any failure raised by the database driver, passed through unchanged:
  /// lost connection, constraint violation, malformed statement.
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A bulk insert would bind more parameters than the connection allows.
  #[error("batch of {rows} rows exceeds the limit of {max_rows} rows per statement")]
  BatchTooLarge { rows: usize, max_rows: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
