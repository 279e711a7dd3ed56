//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps use [`TIMESTAMP_FORMAT`]. Dates of birth are ISO `YYYY-MM-DD`.
//! `expand_column` is compact JSON.

use chrono::{DateTime, NaiveDate, Utc};
use faculty_core::{
  clock::{TIMESTAMP_FORMAT, parse_timestamp},
  lecturer::{Gender, Lecturer, LecturerFields, LecturerSummary, RecordMetadata},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  parse_timestamp(s).map_err(|e| {
    Error::DateParse(format!("{s:?} is not {TIMESTAMP_FORMAT}: {e}"))
  })
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date of birth as shown in list projections.
const SUMMARY_DATE_FORMAT: &str = "%d-%m-%Y";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Gender ──────────────────────────────────────────────────────────────────

pub fn encode_gender(g: Gender) -> &'static str { g.as_str() }

pub fn decode_gender(s: &str) -> Result<Gender> { Ok(Gender::parse(s)?) }

// ─── Expand column ───────────────────────────────────────────────────────────

pub fn encode_expand(v: Option<&serde_json::Value>) -> Result<Option<String>> {
  Ok(v.map(serde_json::to_string).transpose()?)
}

pub fn decode_expand(s: Option<&str>) -> Result<Option<serde_json::Value>> {
  Ok(s.map(serde_json::from_str).transpose()?)
}

// ─── Bound row values ────────────────────────────────────────────────────────

/// The caller-owned columns of one row, encoded and ready to bind, in
/// `account_id, name, gender, avatar, date_of_birth, academic_rank_id,
/// academic_rank_gain_year, academic_title_id, academic_title_gain_year,
/// expand_column` order.
pub struct EncodedFields {
  pub account_id:               i64,
  pub name:                     String,
  pub gender:                   &'static str,
  pub avatar:                   Option<String>,
  pub date_of_birth:            String,
  pub academic_rank_id:         Option<i64>,
  pub academic_rank_gain_year:  Option<i32>,
  pub academic_title_id:        Option<i64>,
  pub academic_title_gain_year: Option<i32>,
  pub expand_column:            Option<String>,
}

impl EncodedFields {
  pub fn encode(fields: LecturerFields) -> Result<Self> {
    Ok(Self {
      expand_column:            encode_expand(fields.expand_column.as_ref())?,
      account_id:               fields.account_id,
      name:                     fields.name,
      gender:                   encode_gender(fields.gender),
      avatar:                   fields.avatar,
      date_of_birth:            encode_date(fields.date_of_birth),
      academic_rank_id:         fields.academic_rank_id,
      academic_rank_gain_year:  fields.academic_rank_gain_year,
      academic_title_id:        fields.academic_title_id,
      academic_title_gain_year: fields.academic_title_gain_year,
    })
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a full `lecturer_information` row.
pub struct RawLecturer {
  pub id:                       i64,
  pub account_id:               i64,
  pub name:                     String,
  pub gender:                   String,
  pub avatar:                   Option<String>,
  pub date_of_birth:            String,
  pub academic_rank_id:         Option<i64>,
  pub academic_rank_gain_year:  Option<i32>,
  pub academic_title_id:        Option<i64>,
  pub academic_title_gain_year: Option<i32>,
  pub created_at:               String,
  pub updated_at:               String,
  pub is_deleted:               bool,
  pub expand_column:            Option<String>,
}

impl RawLecturer {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                       row.get(0)?,
      account_id:               row.get(1)?,
      name:                     row.get(2)?,
      gender:                   row.get(3)?,
      avatar:                   row.get(4)?,
      date_of_birth:            row.get(5)?,
      academic_rank_id:         row.get(6)?,
      academic_rank_gain_year:  row.get(7)?,
      academic_title_id:        row.get(8)?,
      academic_title_gain_year: row.get(9)?,
      created_at:               row.get(10)?,
      updated_at:               row.get(11)?,
      is_deleted:               row.get(12)?,
      expand_column:            row.get(13)?,
    })
  }

  pub fn into_lecturer(self) -> Result<Lecturer> {
    Ok(Lecturer {
      id:         self.id,
      fields:     LecturerFields {
        account_id:               self.account_id,
        name:                     self.name,
        gender:                   decode_gender(&self.gender)?,
        avatar:                   self.avatar,
        date_of_birth:            decode_date(&self.date_of_birth)?,
        academic_rank_id:         self.academic_rank_id,
        academic_rank_gain_year:  self.academic_rank_gain_year,
        academic_title_id:        self.academic_title_id,
        academic_title_gain_year: self.academic_title_gain_year,
        expand_column:            decode_expand(self.expand_column.as_deref())?,
      },
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
      is_deleted: self.is_deleted,
    })
  }
}

/// Raw values read from the basic list projection.
pub struct RawSummary {
  pub id:            i64,
  pub name:          String,
  pub gender:        String,
  pub avatar:        Option<String>,
  pub date_of_birth: String,
  pub created_at:    String,
  pub updated_at:    String,
}

impl RawSummary {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      name:          row.get(1)?,
      gender:        row.get(2)?,
      avatar:        row.get(3)?,
      date_of_birth: row.get(4)?,
      created_at:    row.get(5)?,
      updated_at:    row.get(6)?,
    })
  }

  pub fn into_summary(self) -> Result<LecturerSummary> {
    Ok(LecturerSummary {
      id:            self.id,
      name:          self.name,
      gender:        decode_gender(&self.gender)?,
      avatar:        self.avatar,
      date_of_birth: decode_date(&self.date_of_birth)?
        .format(SUMMARY_DATE_FORMAT)
        .to_string(),
      metadata:      RecordMetadata {
        created_at: decode_dt(&self.created_at)?,
        updated_at: decode_dt(&self.updated_at)?,
      },
    })
  }
}
