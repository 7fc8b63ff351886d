//! JSON boundary for host applications.
//!
//! Mirrors the in-process contracts over schema-versioned JSON payloads so
//! UI layers can invoke the engine without linking against the model types.
//! Errors are returned as `"CODE: message"` strings built from the
//! centralized codes in [`crate::rules::error_codes`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::{compute_standings, ScoreValidator};
use crate::error::StandingsError;
use crate::models::{Group, MatchRecord, StandingsRow};
use crate::rules::error_codes;
use crate::SCHEMA_VERSION;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsRequest {
    pub schema_version: u8,
    pub group: Group,
    pub roster: Vec<String>,
    pub matches: Vec<MatchRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub schema_version: u8,
    pub group: Group,
    pub standings: Vec<StandingsRow>,
}

/// Verdict payload of [`validate_score_json`].
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreCheckResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Compute a group table from a JSON request.
pub fn compute_standings_json(request_json: &str) -> Result<String, String> {
    let request: StandingsRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::MALFORMED_REQUEST, e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA_VERSION,
            format!("expected {}, got {}", SCHEMA_VERSION, request.schema_version),
        ));
    }

    debug!(
        group = request.group.code(),
        matches = request.matches.len(),
        roster = request.roster.len(),
        "computing standings"
    );

    let standings = compute_standings(&request.matches, &request.roster, request.group)
        .map_err(|e| {
            warn!(group = request.group.code(), "standings computation refused: {e}");
            match e {
                StandingsError::UnknownTeam { .. } => err_code(error_codes::UNKNOWN_TEAM, e),
                StandingsError::DuplicateTeam { .. } => err_code(error_codes::DUPLICATE_TEAM, e),
            }
        })?;

    let response =
        StandingsResponse { schema_version: SCHEMA_VERSION, group: request.group, standings };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::RESPONSE_ENCODING, e))
}

/// Validate one side's raw score text. Always returns a JSON verdict; a
/// rejection is a normal response, not an error.
pub fn validate_score_json(raw: &str) -> String {
    let response = match ScoreValidator::validate(raw) {
        Ok(_) => ScoreCheckResponse { valid: true, code: None, message: None },
        Err(err) => {
            debug!(code = err.code(), "score rejected");
            ScoreCheckResponse {
                valid: false,
                code: Some(err.code().to_string()),
                message: Some(err.to_string()),
            }
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|_| r#"{"valid":false}"#.to_string())
}
