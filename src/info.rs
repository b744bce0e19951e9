use serde::Serialize;

use crate::request::MatchData;

pub const SERVICE_STATUS: &str = "AI Service Running";
pub const RECOMMENDATION: &str = "Build more resource collectors.";
pub const WIN_PROBABILITY: f64 = 0.45;
pub const NEXT_MOVE: &str = "Attack player 2 base";

#[derive(Serialize, Debug)]
pub struct ServiceStatus {
    pub status: &'static str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub game_id: String,
    pub recommendation: &'static str,
    pub win_probability: f64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub game_id: String,
    pub next_move: &'static str,
}

pub fn service_status() -> ServiceStatus {
    ServiceStatus { status: SERVICE_STATUS }
}

/// The analysis is a placeholder: only `game_id` is read from the match.
pub fn analyze_match(data: MatchData) -> MatchAnalysis {
    MatchAnalysis {
        game_id: data.game_id,
        recommendation: RECOMMENDATION,
        win_probability: WIN_PROBABILITY,
    }
}

pub fn recommendation_for(game_id: String) -> Recommendation {
    Recommendation {
        game_id,
        next_move: NEXT_MOVE,
    }
}
