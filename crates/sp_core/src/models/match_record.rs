//! Match and set wire model.
//!
//! Stored records and API responses are plain JSON objects with camelCase
//! keys, one object per match. Everything here is passive data; state
//! transitions live in [`crate::engine`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One sub-contest within a match, won by whichever team first reaches
/// `maxPointsPerSet` points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    /// 1-based position in play order, assigned when the set is opened.
    pub index: u32,
    pub score_a: u32,
    pub score_b: u32,
    pub finished: bool,
}

impl Set {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            score_a: 0,
            score_b: 0,
            finished: false,
        }
    }

    /// Score for one side of this set.
    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::A => self.score_a,
            Team::B => self.score_b,
        }
    }
}

/// Match lifecycle status. `Finished` is terminal: no engine operation
/// transitions out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    InProgress,
    Finished,
}

/// Team token used in scoring actions.
///
/// Deliberately not a wire type: request bodies carry `"A"`/`"B"` strings
/// that are validated into this enum before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    A,
    B,
}

/// One ongoing or completed contest between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    pub name: String,
    pub team_a: String,
    pub team_b: String,
    /// Total sets configured; only feeds the majority threshold, never a hard
    /// cap on sets actually played.
    pub sets_total: u32,
    /// A set finishes the instant either score reaches this value. No
    /// win-by-two rule.
    pub max_points_per_set: u32,
    /// Opaque client value, stored and returned unmodified.
    pub time_limit: Option<Value>,
    /// Play order, 1-indexed. At most one unfinished set at any time.
    pub sets: Vec<Set>,
    /// Derived: finished sets with a strict majority for team A.
    pub sets_a: u32,
    /// Derived: finished sets with a strict majority for team B.
    pub sets_b: u32,
    pub status: MatchStatus,
    /// Winning team's display name, set only on a finished match with a
    /// strict set lead.
    pub winner: Option<String>,
    /// Unix seconds, immutable after creation.
    pub created_at: i64,
}

impl Match {
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Display name for one side.
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Match {
        Match {
            id: "match-0011aabb".to_string(),
            name: "Reds x Blues".to_string(),
            team_a: "Reds".to_string(),
            team_b: "Blues".to_string(),
            sets_total: 3,
            max_points_per_set: 25,
            time_limit: None,
            sets: vec![Set::new(1)],
            sets_a: 0,
            sets_b: 0,
            status: MatchStatus::InProgress,
            winner: None,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "name",
            "teamA",
            "teamB",
            "setsTotal",
            "maxPointsPerSet",
            "timeLimit",
            "sets",
            "setsA",
            "setsB",
            "status",
            "winner",
            "createdAt",
        ] {
            assert!(obj.contains_key(key), "missing wire field {}", key);
        }
        assert_eq!(value["status"], "in_progress");
        assert_eq!(value["winner"], Value::Null);
        for key in ["index", "scoreA", "scoreB", "finished"] {
            assert!(value["sets"][0].get(key).is_some(), "missing set field {}", key);
        }
    }

    #[test]
    fn test_status_roundtrip() {
        let finished: MatchStatus = serde_json::from_str("\"finished\"").unwrap();
        assert_eq!(finished, MatchStatus::Finished);
        assert_eq!(
            serde_json::to_string(&MatchStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    #[test]
    fn test_time_limit_passthrough() {
        let mut m = sample();
        m.time_limit = Some(serde_json::json!({ "minutes": 90 }));
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["timeLimit"]["minutes"], 90);
        let back: Match = serde_json::from_value(value).unwrap();
        assert_eq!(back.time_limit, m.time_limit);
    }
}
