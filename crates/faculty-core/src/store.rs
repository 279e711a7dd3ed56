//! The `LecturerStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `faculty-store-sqlite`). The request layer depends on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::lecturer::{
  Lecturer, LecturerFields, LecturerId, LecturerSummary, LecturerUpdate, UpdateOutcome,
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// A window over the id-ordered lecturer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
  /// Number of rows to skip.
  pub offset: u32,
  /// Maximum number of rows to return.
  pub limit:  u32,
}

impl Page {
  pub fn new(offset: u32, limit: u32) -> Self { Self { offset, limit } }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a lecturer records backend.
///
/// Soft-deleted lecturers are invisible to every read unless a method takes
/// an explicit flag asking for them. Nothing is ever physically deleted.
///
/// Each method is a single statement against the backing store: bulk writes
/// either apply to every row or fail as a whole. Failures from the backend are
/// surfaced unchanged, once, with no retry.
pub trait LecturerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// All live lecturers in insertion order.
  fn list_basic(
    &self,
  ) -> impl Future<Output = Result<Vec<LecturerSummary>, Self::Error>> + Send + '_;

  /// Live lecturers ordered by ascending id, windowed by `page`.
  ///
  /// `page` is trusted; callers validate it.
  fn list_paginated(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<LecturerSummary>, Self::Error>> + Send + '_;

  /// Retrieve one lecturer. Returns `None` if the id does not exist, or if it
  /// is soft-deleted and `include_deleted` is `false`.
  fn get_lecturer(
    &self,
    id: LecturerId,
    include_deleted: bool,
  ) -> impl Future<Output = Result<Option<Lecturer>, Self::Error>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert `records` in one statement and return their generated ids, in the
  /// same order as the input. All rows share one `created_at`/`updated_at`.
  fn bulk_create(
    &self,
    records: Vec<LecturerFields>,
  ) -> impl Future<Output = Result<Vec<LecturerId>, Self::Error>> + Send + '_;

  /// Replace every caller-owned column of lecturer `id` and refresh
  /// `updated_at`. A missing id is reported as zero affected rows.
  fn update_by_id(
    &self,
    id: LecturerId,
    update: LecturerUpdate,
  ) -> impl Future<Output = Result<UpdateOutcome, Self::Error>> + Send + '_;

  /// Flag every live lecturer in `ids` as deleted. Returns how many rows
  /// changed; missing or already-deleted ids are not counted.
  fn bulk_soft_delete(
    &self,
    ids: Vec<LecturerId>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
