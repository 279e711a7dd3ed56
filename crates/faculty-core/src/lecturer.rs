//! Lecturer records: the profile of one lecturer and its read projections.
//!
//! The store owns `id`, `created_at`, `updated_at` and `is_deleted`. Every
//! other column is supplied by the caller as [`LecturerFields`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned row identifier.
pub type LecturerId = i64;

// ─── Gender ──────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
  Other,
}

impl Gender {
  pub fn as_str(self) -> &'static str { self.into() }

  pub fn parse(s: &str) -> Result<Self> {
    s.parse::<Self>().map_err(|_| Error::UnknownGender(s.to_owned()))
  }
}

// ─── Caller-owned fields ─────────────────────────────────────────────────────

/// Everything a caller supplies when creating a lecturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LecturerFields {
  pub account_id:               i64,
  pub name:                     String,
  pub gender:                   Gender,
  /// A URI or binary reference to the profile picture.
  pub avatar:                   Option<String>,
  pub date_of_birth:            NaiveDate,
  pub academic_rank_id:         Option<i64>,
  pub academic_rank_gain_year:  Option<i32>,
  pub academic_title_id:        Option<i64>,
  pub academic_title_gain_year: Option<i32>,
  /// Free-form extension data. Opaque to the store.
  pub expand_column:            Option<serde_json::Value>,
}

impl LecturerFields {
  /// Fields with only the required columns set.
  pub fn new(
    account_id: i64,
    name: impl Into<String>,
    gender: Gender,
    date_of_birth: NaiveDate,
  ) -> Self {
    Self {
      account_id,
      name: name.into(),
      gender,
      avatar: None,
      date_of_birth,
      academic_rank_id: None,
      academic_rank_gain_year: None,
      academic_title_id: None,
      academic_title_gain_year: None,
      expand_column: None,
    }
  }
}

/// A full-replace update: every caller-owned column plus the deletion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LecturerUpdate {
  #[serde(flatten)]
  pub fields:     LecturerFields,
  pub is_deleted: bool,
}

// ─── Stored record ───────────────────────────────────────────────────────────

/// A lecturer row as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecturer {
  pub id:         LecturerId,
  #[serde(flatten)]
  pub fields:     LecturerFields,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub is_deleted: bool,
}

// ─── Projections ─────────────────────────────────────────────────────────────

/// Row bookkeeping appended to every basic projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// The list view of a lecturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LecturerSummary {
  pub id:            LecturerId,
  pub name:          String,
  pub gender:        Gender,
  pub avatar:        Option<String>,
  /// Formatted as `DD-MM-YYYY`.
  pub date_of_birth: String,
  #[serde(flatten)]
  pub metadata:      RecordMetadata,
}

/// Result of [`update_by_id`](crate::store::LecturerStore::update_by_id).
///
/// Zero affected rows means no lecturer had the requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
  pub affected_rows: usize,
}

impl UpdateOutcome {
  pub fn found(&self) -> bool { self.affected_rows > 0 }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn gender_text_roundtrip() {
    for g in [Gender::Male, Gender::Female, Gender::Other] {
      assert_eq!(Gender::parse(g.as_str()).unwrap(), g);
    }
    assert_eq!(Gender::Female.to_string(), "female");
  }

  #[test]
  fn gender_rejects_unknown_text() {
    let err = Gender::parse("robot").unwrap_err();
    assert!(matches!(err, Error::UnknownGender(ref s) if s == "robot"));
  }

  #[test]
  fn update_body_flattens_fields() {
    let update: LecturerUpdate = serde_json::from_value(json!({
      "account_id":    3,
      "name":          "Ada",
      "gender":        "female",
      "date_of_birth": "1815-12-10",
      "is_deleted":    false,
      "expand_column": { "office": "B12" },
    }))
    .unwrap();

    assert_eq!(update.fields.account_id, 3);
    assert_eq!(update.fields.avatar, None);
    assert_eq!(update.fields.expand_column, Some(json!({ "office": "B12" })));
    assert!(!update.is_deleted);
  }

  #[test]
  fn update_body_requires_deletion_flag() {
    let result = serde_json::from_value::<LecturerUpdate>(json!({
      "account_id":    3,
      "name":          "Ada",
      "gender":        "female",
      "date_of_birth": "1815-12-10",
    }));
    assert!(result.is_err());
  }

  #[test]
  fn update_outcome_found() {
    assert!(!UpdateOutcome { affected_rows: 0 }.found());
    assert!(UpdateOutcome { affected_rows: 1 }.found());
  }
}
