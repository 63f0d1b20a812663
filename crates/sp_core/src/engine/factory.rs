//! Match factory: validates creation parameters and produces a fresh record.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::models::{Match, MatchStatus};

/// Placeholder names used when a creation request leaves a team blank.
pub const DEFAULT_TEAM_A: &str = "Team A";
pub const DEFAULT_TEAM_B: &str = "Team B";

/// Creation parameters as they arrive from the request layer.
///
/// Numeric fields are already parsed integers; range checks happen in
/// [`create_match`]. Blank or missing strings fall back to defaults.
#[derive(Debug, Clone)]
pub struct MatchParams {
    pub name: Option<String>,
    pub team_a: Option<String>,
    pub team_b: Option<String>,
    pub sets_total: i64,
    pub max_points_per_set: i64,
    pub time_limit: Option<serde_json::Value>,
}

fn new_match_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("match-{}", &uuid[..8])
}

fn non_blank(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => fallback.to_string(),
    }
}

/// Build a new match in its initial state.
///
/// Pure construction: no side effects beyond generating the id and creation
/// timestamp. Persisting the record is the caller's responsibility.
pub fn create_match(params: MatchParams) -> Result<Match> {
    if params.sets_total < 1 {
        return Err(EngineError::Validation(
            "sets must be greater than 0".to_string(),
        ));
    }
    if params.max_points_per_set < 1 {
        return Err(EngineError::Validation(
            "maxPoints must be greater than 0".to_string(),
        ));
    }

    let team_a = non_blank(params.team_a, DEFAULT_TEAM_A);
    let team_b = non_blank(params.team_b, DEFAULT_TEAM_B);
    let name = match params.name.map(|n| n.trim().to_string()) {
        Some(n) if !n.is_empty() => n,
        _ => format!("{} x {}", team_a, team_b),
    };

    let record = Match {
        id: new_match_id(),
        name,
        team_a,
        team_b,
        sets_total: params.sets_total as u32,
        max_points_per_set: params.max_points_per_set as u32,
        time_limit: params.time_limit,
        sets: Vec::new(),
        sets_a: 0,
        sets_b: 0,
        status: MatchStatus::InProgress,
        winner: None,
        created_at: Utc::now().timestamp(),
    };

    log::debug!("created match {} ({})", record.id, record.name);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> MatchParams {
        MatchParams {
            name: None,
            team_a: None,
            team_b: None,
            sets_total: 3,
            max_points_per_set: 25,
            time_limit: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let m = create_match(params()).unwrap();
        assert_eq!(m.status, MatchStatus::InProgress);
        assert!(m.sets.is_empty());
        assert_eq!((m.sets_a, m.sets_b), (0, 0));
        assert_eq!(m.winner, None);
        assert_eq!(m.sets_total, 3);
        assert_eq!(m.max_points_per_set, 25);
        assert!(m.created_at > 0);
    }

    #[test]
    fn test_id_shape() {
        let m = create_match(params()).unwrap();
        assert!(m.id.starts_with("match-"));
        assert_eq!(m.id.len(), "match-".len() + 8);

        let other = create_match(params()).unwrap();
        assert_ne!(m.id, other.id);
    }

    #[test]
    fn test_team_and_name_defaults() {
        let m = create_match(params()).unwrap();
        assert_eq!(m.team_a, "Team A");
        assert_eq!(m.team_b, "Team B");
        assert_eq!(m.name, "Team A x Team B");
    }

    #[test]
    fn test_blank_strings_fall_back() {
        let m = create_match(MatchParams {
            name: Some("   ".to_string()),
            team_a: Some("".to_string()),
            team_b: Some("  Blues ".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(m.team_a, "Team A");
        assert_eq!(m.team_b, "Blues");
        assert_eq!(m.name, "Team A x Blues");
    }

    #[test]
    fn test_explicit_name_kept() {
        let m = create_match(MatchParams {
            name: Some("Finals".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(m.name, "Finals");
    }

    #[test]
    fn test_rejects_non_positive_config() {
        assert!(matches!(
            create_match(MatchParams { sets_total: 0, ..params() }),
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            create_match(MatchParams { sets_total: -3, ..params() }),
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            create_match(MatchParams { max_points_per_set: 0, ..params() }),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn test_time_limit_passes_through() {
        let m = create_match(MatchParams {
            time_limit: Some(serde_json::json!("45m")),
            ..params()
        })
        .unwrap();
        assert_eq!(m.time_limit, Some(serde_json::json!("45m")));
    }
}
