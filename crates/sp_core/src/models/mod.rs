pub mod match_record;

pub use match_record::{Match, MatchStatus, Set, Team};
