//! The time source used to stamp `created_at` / `updated_at`.
//!
//! Stores never call [`Utc::now`] directly; they ask an injected [`Clock`] so
//! tests can control the passage of time.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Storage format for row timestamps: `YYYY/MM/DD HH:MM:SS`, always UTC.
///
/// The format sorts lexicographically in chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A source of "now".
pub trait Clock: Send + Sync + 'static {
  fn now(&self) -> DateTime<Utc>;

  /// The current time rendered in [`TIMESTAMP_FORMAT`].
  fn now_formatted(&self) -> String { format_timestamp(self.now()) }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now() }
}

pub fn format_timestamp(dt: DateTime<Utc>) -> String {
  dt.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
  NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Timelike};

  use super::*;

  #[test]
  fn formats_with_24_hour_clock() {
    let dt = Utc.with_ymd_and_hms(2023, 7, 4, 15, 5, 9).unwrap();
    assert_eq!(format_timestamp(dt), "2023/07/04 15:05:09");
  }

  #[test]
  fn parse_inverts_format() {
    let dt = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 58).unwrap();
    assert_eq!(parse_timestamp(&format_timestamp(dt)).unwrap(), dt);
  }

  #[test]
  fn parse_rejects_other_layouts() {
    assert!(parse_timestamp("2023-07-04T15:05:09Z").is_err());
  }

  #[test]
  fn system_clock_formats_without_subseconds() {
    let now = SystemClock.now_formatted();
    let parsed = parse_timestamp(&now).unwrap();
    assert_eq!(parsed.nanosecond(), 0);
  }
}
