//! [`SqliteStore`], the SQLite implementation of [`LecturerStore`].

use std::{path::Path, rc::Rc, sync::Arc};

use faculty_core::{
  clock::{Clock, SystemClock},
  lecturer::{
    Lecturer, LecturerFields, LecturerId, LecturerSummary, LecturerUpdate, UpdateOutcome,
  },
  store::{LecturerStore, Page},
};
use rusqlite::{OptionalExtension as _, limits::Limit, types::Value};

use crate::{
  Error, Result,
  encode::{EncodedFields, RawLecturer, RawSummary},
  schema::SCHEMA,
};

// ─── SQL fragments ───────────────────────────────────────────────────────────

/// Bookkeeping columns appended to every basic projection.
const METADATA_COLUMNS: &str = "created_at, updated_at";

/// Excludes soft-deleted rows.
const LIVE_ROWS: &str = "is_deleted = 0";

const LECTURER_COLUMNS: &str = "id, account_id, name, gender, avatar, date_of_birth,
  academic_rank_id, academic_rank_gain_year, academic_title_id,
  academic_title_gain_year, created_at, updated_at, is_deleted, expand_column";

const INSERT_COLUMNS: &str = "account_id, name, gender, avatar, date_of_birth,
  academic_rank_id, academic_rank_gain_year, academic_title_id,
  academic_title_gain_year, created_at, updated_at, is_deleted, expand_column";

const INSERT_ROW_PLACEHOLDERS: &str = "(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// Bound parameters per inserted row.
const INSERT_ROW_PARAMS: usize = 13;

fn summary_select() -> String {
  format!(
    "SELECT id, name, gender, avatar, date_of_birth, {METADATA_COLUMNS}
     FROM lecturer_information
     WHERE {LIVE_ROWS}
     ORDER BY id ASC"
  )
}

/// Bind values for one inserted row, in [`INSERT_COLUMNS`] order.
fn insert_values(row: EncodedFields, now: &str) -> [Value; INSERT_ROW_PARAMS] {
  [
    row.account_id.into(),
    row.name.into(),
    row.gender.to_owned().into(),
    row.avatar.into(),
    row.date_of_birth.into(),
    row.academic_rank_id.into(),
    row.academic_rank_gain_year.into(),
    row.academic_title_id.into(),
    row.academic_title_gain_year.into(),
    now.to_owned().into(),
    now.to_owned().into(),
    false.into(),
    row.expand_column.into(),
  ]
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A lecturer records store backed by a SQLite connection.
///
/// Cloning is cheap: the inner connection and clock are reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:  tokio_rusqlite::Connection,
  clock: Arc<dyn Clock>,
}

impl SqliteStore {
  /// Wrap an already-open connection and run schema initialisation.
  ///
  /// The connection stays owned by the caller's lifecycle: close it through
  /// [`connection`](Self::connection) at shutdown.
  pub async fn new(
    conn: tokio_rusqlite::Connection,
    clock: Arc<dyn Clock>,
  ) -> Result<Self> {
    let store = Self { conn, clock };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open (or create) a store at `path` using the system clock.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::new(conn, Arc::new(SystemClock)).await
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::new(conn, Arc::new(SystemClock)).await
  }

  /// The shared connection handle.
  pub fn connection(&self) -> &tokio_rusqlite::Connection { &self.conn }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        rusqlite::vtab::array::load_module(conn)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn query_summaries(&self, page: Option<Page>) -> Result<Vec<LecturerSummary>> {
    let raws: Vec<RawSummary> = self
      .conn
      .call(move |conn| {
        let rows = if let Some(page) = page {
          let mut stmt = conn.prepare(&format!("{} LIMIT ?1 OFFSET ?2", summary_select()))?;
          stmt
            .query_map(rusqlite::params![page.limit, page.offset], RawSummary::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&summary_select())?;
          stmt
            .query_map([], RawSummary::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSummary::into_summary).collect()
  }
}

// ─── LecturerStore impl ──────────────────────────────────────────────────────

impl LecturerStore for SqliteStore {
  type Error = crate::Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_basic(&self) -> Result<Vec<LecturerSummary>> {
    self.query_summaries(None).await
  }

  async fn list_paginated(&self, page: Page) -> Result<Vec<LecturerSummary>> {
    self.query_summaries(Some(page)).await
  }

  async fn get_lecturer(
    &self,
    id:              LecturerId,
    include_deleted: bool,
  ) -> Result<Option<Lecturer>> {
    let raw: Option<RawLecturer> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {LECTURER_COLUMNS}
               FROM lecturer_information
               WHERE id = ?1 AND (?2 OR {LIVE_ROWS})
               LIMIT 1"
            ),
            rusqlite::params![id, include_deleted],
            RawLecturer::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawLecturer::into_lecturer).transpose()
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn bulk_create(&self, records: Vec<LecturerFields>) -> Result<Vec<LecturerId>> {
    if records.is_empty() {
      return Ok(Vec::new());
    }

    let now  = self.clock.now_formatted();
    let rows = records
      .into_iter()
      .map(EncodedFields::encode)
      .collect::<Result<Vec<_>>>()?;
    let count = rows.len();

    let max_params = self
      .conn
      .call(|conn| Ok(conn.limit(Limit::SQLITE_LIMIT_VARIABLE_NUMBER)))
      .await?;
    let max_rows = usize::try_from(max_params).unwrap_or(0) / INSERT_ROW_PARAMS;
    if count > max_rows {
      return Err(Error::BatchTooLarge { rows: count, max_rows });
    }

    let sql = format!(
      "INSERT INTO lecturer_information ({INSERT_COLUMNS})
       VALUES {}
       RETURNING id",
      vec![INSERT_ROW_PLACEHOLDERS; count].join(", ")
    );
    let values: Vec<Value> = rows
      .into_iter()
      .flat_map(|row| insert_values(row, &now))
      .collect();

    let mut ids: Vec<LecturerId> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let ids = stmt
          .query_map(rusqlite::params_from_iter(values), |row| row.get::<_, LecturerId>(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
      })
      .await?;

    // RETURNING order is unspecified; a single multi-row insert assigns
    // ascending ids in VALUES order.
    ids.sort_unstable();

    tracing::debug!(count, first_id = ?ids.first(), "inserted lecturers");
    Ok(ids)
  }

  async fn update_by_id(
    &self,
    id:     LecturerId,
    update: LecturerUpdate,
  ) -> Result<UpdateOutcome> {
    let row        = EncodedFields::encode(update.fields)?;
    let is_deleted = update.is_deleted;
    let now        = self.clock.now_formatted();

    let affected_rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE lecturer_information
           SET account_id = ?1, name = ?2, gender = ?3, avatar = ?4,
               date_of_birth = ?5, academic_rank_id = ?6,
               academic_rank_gain_year = ?7, academic_title_id = ?8,
               academic_title_gain_year = ?9, is_deleted = ?10,
               updated_at = ?11, expand_column = ?12
           WHERE id = ?13",
          rusqlite::params![
            row.account_id,
            row.name,
            row.gender,
            row.avatar,
            row.date_of_birth,
            row.academic_rank_id,
            row.academic_rank_gain_year,
            row.academic_title_id,
            row.academic_title_gain_year,
            is_deleted,
            now,
            row.expand_column,
            id,
          ],
        )?)
      })
      .await?;

    Ok(UpdateOutcome { affected_rows })
  }

  async fn bulk_soft_delete(&self, ids: Vec<LecturerId>) -> Result<usize> {
    if ids.is_empty() {
      return Ok(0);
    }

    let now       = self.clock.now_formatted();
    let requested = ids.len();
    let values: Vec<Value> = ids.into_iter().map(Value::from).collect();

    // The id list is bound as one `rarray` parameter, so its length is not
    // capped by SQLite's variable limit.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          &format!(
            "UPDATE lecturer_information
             SET is_deleted = 1, updated_at = ?1
             WHERE {LIVE_ROWS} AND id IN rarray(?2)"
          ),
          rusqlite::params![now, Rc::new(values)],
        )?)
      })
      .await?;

    tracing::debug!(requested, changed, "soft-deleted lecturers");
    Ok(changed)
  }
}
