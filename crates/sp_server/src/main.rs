//! SetPoint HTTP server.
//!
//! Thin axum surface over the `sp_core` JSON handlers. Request semantics
//! (lenient parsing, status mapping) live in the core crate; this binary only
//! wires routes, state, and configuration.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use sp_core::{ApiResponse, FsStore, MatchStore};

/// Shared application state: the injected store handle. No globals.
#[derive(Clone)]
struct AppState {
    store: Arc<dyn MatchStore>,
}

fn to_response(api: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(api.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(api.body)).into_response()
}

async fn create_match(State(state): State<AppState>, body: String) -> Response {
    to_response(sp_core::create_match_json(state.store.as_ref(), &body))
}

async fn get_match(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    to_response(sp_core::get_match_json(state.store.as_ref(), &id))
}

async fn update_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Response {
    to_response(sp_core::update_score_json(state.store.as_ref(), &id, &body))
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/matches", post(create_match))
        .route("/matches/:id", get(get_match))
        .route("/matches/:id/score", post(update_score))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data_dir =
        std::env::var("SETPOINT_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let addr: SocketAddr = std::env::var("SETPOINT_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()
        .context("invalid SETPOINT_ADDR")?;

    let store = FsStore::open(&data_dir)
        .with_context(|| format!("opening match store at {}", data_dir))?;
    let state = AppState {
        store: Arc::new(store),
    };

    log::info!("listening on {}, match store at {}", addr, data_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
