//! JSON request handlers for the scoreboard API.
//!
//! Handlers are gateway-agnostic: they take the raw request body plus an
//! injected [`MatchStore`] and return a status code with a JSON body, so the
//! same code path serves the HTTP binary, the CLI, and tests. All request
//! validation happens here; the engine only ever sees typed input.

use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

use crate::engine::factory::{create_match, MatchParams};
use crate::engine::scoring::{apply_point, finish_match};
use crate::error::EngineError;
use crate::models::Team;
use crate::store::{MatchStore, StoreError, Versioned};

/// Status code plus JSON body, mapped onto the transport by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn with(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn error(status: u16, message: impl std::fmt::Display) -> Self {
        Self {
            status,
            body: json!({ "error": message.to_string() }),
        }
    }
}

// ============================================================================
// Request schemas
// ============================================================================

/// Creation request body. `sets` and `maxPoints` accept numbers or numeric
/// strings; anything else is a client error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateMatchRequest {
    pub name: Option<String>,
    #[serde(rename = "teamA")]
    pub team_a: Option<String>,
    #[serde(rename = "teamB")]
    pub team_b: Option<String>,
    pub sets: Option<Value>,
    #[serde(rename = "maxPoints")]
    pub max_points: Option<Value>,
    #[serde(rename = "timeLimit")]
    pub time_limit: Option<Value>,
}

/// Scoring action body.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScoreRequest {
    /// `"point"` or `"finish"`.
    pub action: String,
    /// `"A"` or `"B"`; required for `point`.
    pub team: Option<String>,
    #[serde(deserialize_with = "lenient_delta")]
    pub delta: i64,
}

impl Default for ScoreRequest {
    fn default() -> Self {
        Self {
            action: "point".to_string(),
            team: None,
            delta: 1,
        }
    }
}

/// `delta` tolerates junk: absent, null, or unparsable values fall back to 1.
fn lenient_delta<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(1),
        Value::String(s) => s.trim().parse().unwrap_or(1),
        _ => 1,
    })
}

/// Accept an integer, a numeric string, or absence (yielding `default`).
fn int_field(value: Option<&Value>, default: i64) -> Option<i64> {
    match value {
        None | Some(Value::Null) => Some(default),
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    }
}

fn parse_team(token: Option<&str>) -> Option<Team> {
    match token {
        Some("A") => Some(Team::A),
        Some("B") => Some(Team::B),
        _ => None,
    }
}

fn or_empty(body: &str) -> &str {
    if body.trim().is_empty() {
        "{}"
    } else {
        body
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a match and persist it. 201 with `{"match": …}` on success.
pub fn create_match_json(store: &dyn MatchStore, body: &str) -> ApiResponse {
    let request: CreateMatchRequest = match serde_json::from_str(or_empty(body)) {
        Ok(request) => request,
        Err(_) => return ApiResponse::error(400, "invalid json"),
    };

    let sets = int_field(request.sets.as_ref(), 3);
    let max_points = int_field(request.max_points.as_ref(), 25);
    let (sets, max_points) = match (sets, max_points) {
        (Some(sets), Some(max_points)) => (sets, max_points),
        _ => return ApiResponse::error(400, "invalid numeric fields"),
    };

    let record = match create_match(MatchParams {
        name: request.name,
        team_a: request.team_a,
        team_b: request.team_b,
        sets_total: sets,
        max_points_per_set: max_points,
        time_limit: request.time_limit,
    }) {
        Ok(record) => record,
        Err(e) => return ApiResponse::error(400, e),
    };

    if let Err(e) = store.save(&record) {
        log::error!("failed to store match {}: {}", record.id, e);
        return ApiResponse::error(500, "store error");
    }

    ApiResponse::with(201, json!({ "match": record }))
}

/// Apply a scoring action to a stored match. 200 with `{"match": …}` on
/// success; the write is conditional on the revision the match was read at,
/// so a lost race surfaces as 409 instead of silently dropping an update.
pub fn update_score_json(store: &dyn MatchStore, id: &str, body: &str) -> ApiResponse {
    let request: ScoreRequest = match serde_json::from_str(or_empty(body)) {
        Ok(request) => request,
        Err(_) => return ApiResponse::error(400, "invalid json"),
    };

    let Versioned {
        value: mut record,
        revision,
    } = match store.load(id) {
        Ok(versioned) => versioned,
        Err(StoreError::NotFound { .. }) => return ApiResponse::error(404, "match not found"),
        Err(e) => {
            log::error!("failed to load match {}: {}", id, e);
            return ApiResponse::error(500, "store error");
        }
    };

    match request.action.as_str() {
        "point" => {
            let team = match parse_team(request.team.as_deref()) {
                Some(team) => team,
                None => return ApiResponse::error(400, "team must be 'A' or 'B'"),
            };
            match apply_point(&mut record, team, request.delta) {
                Ok(()) => {}
                Err(EngineError::AlreadyFinished) => {
                    // Return the record so clients can resync their view.
                    return ApiResponse::with(
                        400,
                        json!({ "error": "match already finished", "match": record }),
                    );
                }
                Err(e) => return ApiResponse::error(400, e),
            }
        }
        "finish" => finish_match(&mut record),
        other => return ApiResponse::error(400, format!("unknown action: {}", other)),
    }

    match store.save_if(&record, &revision) {
        Ok(_) => ApiResponse::with(200, json!({ "match": record })),
        Err(StoreError::Conflict { .. }) => {
            ApiResponse::error(409, "match was updated concurrently, retry")
        }
        Err(e) => {
            log::error!("failed to store match {}: {}", record.id, e);
            ApiResponse::error(500, "store error")
        }
    }
}

/// Fetch a stored match. 200 with `{"match": …}` or 404.
pub fn get_match_json(store: &dyn MatchStore, id: &str) -> ApiResponse {
    match store.load(id) {
        Ok(versioned) => ApiResponse::with(200, json!({ "match": versioned.value })),
        Err(StoreError::NotFound { .. }) => ApiResponse::error(404, "match not found"),
        Err(e) => {
            log::error!("failed to load match {}: {}", id, e);
            ApiResponse::error(500, "store error")
        }
    }
}
