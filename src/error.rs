use std::net::AddrParseError;
use std::num::ParseIntError;

use serde::Serialize;
use warp::reject::Reject;

/// One violated field of a request body.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &'static str) -> Self {
        FieldError {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind,
        }
    }
}

#[derive(Debug)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl Reject for ValidationError {}

#[derive(Debug)]
pub struct BodyTooLargeError;

impl Reject for BodyTooLargeError {}

#[derive(Debug)]
pub struct BodyReadError;

impl Reject for BodyReadError {}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost { value: String, source: AddrParseError },

    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    #[error("invalid MAX_BODY_BYTES {value:?}: {source}")]
    InvalidBodyLimit { value: String, source: ParseIntError },

    #[error("MAX_BODY_BYTES must be greater than zero")]
    ZeroBodyLimit,
}
