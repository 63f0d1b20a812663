pub mod match_json;

pub use match_json::{
    create_match_json, get_match_json, update_score_json, ApiResponse, CreateMatchRequest,
    ScoreRequest,
};
