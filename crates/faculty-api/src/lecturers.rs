//! Handlers for `/lecturers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/fetch-all` | Every live lecturer, basic projection |
//! | `GET`  | `/fetch` | `?pageOffset=<rows to skip>&limitSize=<max rows>` |
//! | `GET`  | `/{id}` | 404 if missing or deleted |
//! | `POST` | `/create` | Body: array of lecturers; returns 201 + `{"ids":[…]}` |
//! | `PUT`  | `/{id}/update` | Body: every field plus `is_deleted`; 404 if missing |
//! | `POST` | `/delete` | Body: `{"ids":[…]}`; returns `{"deleted":n}` |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use faculty_core::{
  lecturer::{Lecturer, LecturerFields, LecturerId, LecturerSummary, LecturerUpdate, UpdateOutcome},
  store::{LecturerStore, Page},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

fn check_id(id: LecturerId) -> Result<LecturerId, ApiError> {
  if id > 0 {
    Ok(id)
  } else {
    Err(ApiError::BadRequest(format!("lecturer id must be positive, got {id}")))
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /fetch-all`
pub async fn list_all<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<LecturerSummary>>, ApiError>
where
  S: LecturerStore,
{
  let lecturers = state.store.list_basic().await.map_err(ApiError::store)?;
  Ok(Json(lecturers))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
  /// Rows to skip. Defaults to 0.
  #[serde(default)]
  pub page_offset: u32,
  /// Maximum rows to return. Defaults to the configured page size.
  pub limit_size:  Option<u32>,
}

/// `GET /fetch?pageOffset=<n>&limitSize=<n>`
pub async fn list_page<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<PageParams>,
) -> Result<Json<Vec<LecturerSummary>>, ApiError>
where
  S: LecturerStore,
{
  let max   = state.config.max_page_size;
  let limit = params.limit_size.unwrap_or(state.config.default_page_size);
  if limit == 0 || limit > max {
    return Err(ApiError::BadRequest(format!(
      "limitSize must be between 1 and {max}, got {limit}"
    )));
  }

  let lecturers = state
    .store
    .list_paginated(Page::new(params.page_offset, limit))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(lecturers))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<LecturerId>,
) -> Result<Json<Lecturer>, ApiError>
where
  S: LecturerStore,
{
  let id = check_id(id)?;
  let lecturer = state
    .store
    .get_lecturer(id, false)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("lecturer {id} not found")))?;
  Ok(Json(lecturer))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
  pub ids: Vec<LecturerId>,
}

/// `POST /create`. Body: `[{"account_id":1,"name":"…",…}, …]`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Vec<LecturerFields>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LecturerStore,
{
  if body.is_empty() {
    return Err(ApiError::BadRequest("no lecturers to create".into()));
  }

  let ids = state.store.bulk_create(body).await.map_err(ApiError::store)?;
  tracing::info!(count = ids.len(), "created lecturers");
  Ok((StatusCode::CREATED, Json(Created { ids })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /{id}/update`
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<LecturerId>,
  Json(body): Json<LecturerUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError>
where
  S: LecturerStore,
{
  let id = check_id(id)?;
  let outcome = state
    .store
    .update_by_id(id, body)
    .await
    .map_err(ApiError::store)?;

  if !outcome.found() {
    return Err(ApiError::NotFound(format!("lecturer {id} not found")));
  }
  Ok(Json(outcome))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DeleteBody {
  pub ids: Vec<LecturerId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
  pub deleted: usize,
}

/// `POST /delete`. Body: `{"ids":[1,2,3]}`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<DeleteBody>,
) -> Result<Json<Deleted>, ApiError>
where
  S: LecturerStore,
{
  if body.ids.is_empty() {
    return Err(ApiError::BadRequest("no lecturer ids given".into()));
  }
  for &id in &body.ids {
    check_id(id)?;
  }

  let deleted = state
    .store
    .bulk_soft_delete(body.ids)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(Deleted { deleted }))
}
