//! JSON REST API for the Faculty lecturer records store.
//!
//! Exposes an axum [`Router`] backed by any
//! [`faculty_core::store::LecturerStore`]. Authentication is the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = faculty_api::app(state, &config.cors_origins);
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod lecturers;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json, Router,
  http::{HeaderValue, Method, StatusCode, header},
  response::IntoResponse,
  routing::{get, post, put},
};
use faculty_core::store::LecturerStore;
use serde::Deserialize;
use serde_json::json;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

pub use error::ApiError;

/// Prefix under which every versioned route is mounted.
pub const ROOT_API_URL: &str = "/api/v1";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FACULTY_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:              String,
  #[serde(default = "default_port")]
  pub port:              u16,
  #[serde(default = "default_store_path")]
  pub store_path:        PathBuf,
  #[serde(default = "default_page_size")]
  pub default_page_size: u32,
  #[serde(default = "default_max_page_size")]
  pub max_page_size:     u32,
  /// Origins allowed to make cross-origin requests.
  #[serde(default = "default_cors_origins")]
  pub cors_origins:      Vec<String>,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 5000 }
fn default_store_path() -> PathBuf { PathBuf::from("faculty.db") }
fn default_page_size() -> u32 { 20 }
fn default_max_page_size() -> u32 { 100 }

fn default_cors_origins() -> Vec<String> {
  ["http://localhost:3001", "http://localhost:5000", "http://localhost:8080"]
    .into_iter()
    .map(String::from)
    .collect()
}

impl ServerConfig {
  pub fn api_config(&self) -> ApiConfig {
    ApiConfig {
      default_page_size: self.default_page_size,
      max_page_size:     self.max_page_size,
    }
  }
}

/// The subset of configuration the handlers need.
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
  pub default_page_size: u32,
  pub max_page_size:     u32,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      default_page_size: default_page_size(),
      max_page_size:     default_max_page_size(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub config: Arc<ApiConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), config: self.config.clone() }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the `/lecturers` router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn lecturer_router<S>(state: AppState<S>) -> Router<()>
where
  S: LecturerStore + 'static,
{
  Router::new()
    .route("/fetch-all", get(lecturers::list_all::<S>))
    .route("/fetch", get(lecturers::list_page::<S>))
    .route("/create", post(lecturers::create::<S>))
    .route("/delete", post(lecturers::delete::<S>).delete(lecturers::delete::<S>))
    .route("/{id}", get(lecturers::get_one::<S>))
    .route("/{id}/update", put(lecturers::update::<S>).post(lecturers::update::<S>))
    .with_state(state)
}

/// The complete application: versioned routes, JSON 404 fallback, request
/// tracing and the CORS origin whitelist.
pub fn app<S>(state: AppState<S>, cors_origins: &[String]) -> Router<()>
where
  S: LecturerStore + 'static,
{
  Router::new()
    .nest(&format!("{ROOT_API_URL}/lecturers"), lecturer_router(state))
    .fallback(not_found)
    .layer(cors_layer(cors_origins))
    .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
  (StatusCode::NOT_FOUND, Json(json!({ "error": "404 Not Found" })))
}

/// Allow only the listed origins. Entries that are not valid header values
/// are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let allowed: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|o| match HeaderValue::from_str(o) {
      Ok(v) => Some(v),
      Err(_) => {
        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::list(allowed))
    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
    .allow_headers([header::CONTENT_TYPE])
}
