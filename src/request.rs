use futures::{Stream, TryStreamExt};
use serde::Deserialize;
use serde_json::{Map, Value};
use warp::hyper::body::Buf;
use warp::{Filter, Rejection};

use crate::error::{BodyReadError, BodyTooLargeError};
use crate::validation::parse_match_data;

/// Body of `POST /analyze-match`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
    pub game_id: String,
    // contents are never inspected
    pub game_state: Map<String, Value>,
}

/// Extracts a validated `MatchData` from the request body, rejecting with
/// `ValidationError` when the body has the wrong shape.
///
/// Bodies may be sent with or without `Content-Length` (chunked); either way at
/// most `max_body_bytes` are read.
pub fn with_match_data(max_body_bytes: u64) -> impl Filter<Extract = (MatchData,), Error = Rejection> + Clone {
    warp::any()
        .map(move || max_body_bytes)
        .and(warp::header::optional::<u64>("content-length"))
        .and(warp::body::stream())
        .and_then(read_match_data)
        .boxed()
}

async fn read_match_data<S, B>(max_body_bytes: u64, content_length: Option<u64>, body: S) -> Result<MatchData, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    if content_length.map_or(false, |length| length > max_body_bytes) {
        return Err(warp::reject::custom(BodyTooLargeError));
    }
    let body = read_limited(body, max_body_bytes).await?;
    parse_match_data(&body).map_err(warp::reject::custom)
}

async fn read_limited<S, B>(body: S, max_body_bytes: u64) -> Result<Vec<u8>, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    futures::pin_mut!(body);
    let mut buf = Vec::new();
    while let Some(mut chunk) = body.try_next().await.map_err(|err| {
        tracing::debug!("failed to read request body: {}", err);
        warp::reject::custom(BodyReadError)
    })? {
        if (buf.len() + chunk.remaining()) as u64 > max_body_bytes {
            return Err(warp::reject::custom(BodyTooLargeError));
        }
        while chunk.has_remaining() {
            let part = chunk.chunk();
            let len = part.len();
            buf.extend_from_slice(part);
            chunk.advance(len);
        }
    }
    Ok(buf)
}
