//! Point-by-point scoring state machine.
//!
//! States are `{in_progress, finished}` and `finished` is terminal. A point
//! either mutates the trailing set, closes it, or closes the whole match once
//! one side holds a strict majority of `setsTotal`.

use crate::error::{EngineError, Result};
use crate::models::{Match, MatchStatus, Set, Team};

/// Sets needed to clinch the match: strict majority of the configured total.
pub fn sets_needed_to_win(sets_total: u32) -> u32 {
    sets_total / 2 + 1
}

/// Count finished sets holding a strict per-set majority for each side.
///
/// Pure and idempotent. The record's `setsA`/`setsB` are always refreshed
/// from this, never mutated independently.
pub fn compute_sets_won(record: &Match) -> (u32, u32) {
    let mut a = 0;
    let mut b = 0;
    for set in record.sets.iter().filter(|s| s.finished) {
        if set.score_a > set.score_b {
            a += 1;
        } else if set.score_b > set.score_a {
            b += 1;
        }
    }
    (a, b)
}

/// Apply one scoring action for `team`, advancing set and match state.
///
/// `delta` may be negative (score corrections); the affected score is clamped
/// at zero rather than rejected. Fails with [`EngineError::AlreadyFinished`]
/// on a finished match, leaving the record untouched.
pub fn apply_point(record: &mut Match, team: Team, delta: i64) -> Result<()> {
    if record.is_finished() {
        return Err(EngineError::AlreadyFinished);
    }

    let max_points = record.max_points_per_set;

    // Current unfinished set, or open a fresh one. The previous set (if any)
    // closed on its final point, so a new one starts on the next.
    let idx = match record.sets.iter().position(|s| !s.finished) {
        Some(i) => i,
        None => {
            let index = record.sets.len() as u32 + 1;
            log::debug!("match {}: opening set {}", record.id, index);
            record.sets.push(Set::new(index));
            record.sets.len() - 1
        }
    };

    let (set_index, set_score, set_finished) = {
        let set = &mut record.sets[idx];

        let next = (set.score(team) as i64 + delta).max(0) as u32;
        match team {
            Team::A => set.score_a = next,
            Team::B => set.score_b = next,
        }

        // A set ends the instant either side reaches the cap. No win-by-two.
        if max_points > 0 && (set.score_a >= max_points || set.score_b >= max_points) {
            set.finished = true;
        }
        (set.index, (set.score_a, set.score_b), set.finished)
    };

    // Derived counters are refreshed on every point, finished set or not.
    let (a, b) = compute_sets_won(record);
    record.sets_a = a;
    record.sets_b = b;

    if set_finished {
        log::info!(
            "match {}: set {} finished {}-{} (sets {}-{})",
            record.id,
            set_index,
            set_score.0,
            set_score.1,
            a,
            b
        );
        let needed = sets_needed_to_win(record.sets_total);
        if a >= needed || b >= needed {
            record.status = MatchStatus::Finished;
            record.winner = if a > b {
                Some(record.team_a.clone())
            } else if b > a {
                Some(record.team_b.clone())
            } else {
                None
            };
            log::info!("match {}: finished, winner {:?}", record.id, record.winner);
        }
    }

    Ok(())
}

/// Force a match to its terminal state (forfeit, early stop).
///
/// The trailing set may still be open; derived counters are recomputed as-is
/// and the winner decided by strict comparison, left unset on a tie. Safe to
/// call on an already-finished match: it recomputes the same outcome.
pub fn finish_match(record: &mut Match) {
    let (a, b) = compute_sets_won(record);
    record.sets_a = a;
    record.sets_b = b;
    record.winner = if a > b {
        Some(record.team_a.clone())
    } else if b > a {
        Some(record.team_b.clone())
    } else {
        None
    };
    record.status = MatchStatus::Finished;
    log::info!(
        "match {}: finished manually at sets {}-{}, winner {:?}",
        record.id,
        a,
        b,
        record.winner
    );
}
