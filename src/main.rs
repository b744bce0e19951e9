use config::Config;
use dotenvy::dotenv;
use error::{BodyReadError, BodyTooLargeError, ValidationError};
use info::{analyze_match, recommendation_for, service_status};
use percent_encoding::percent_decode_str;
use request::{with_match_data, MatchData};
use serde_json::json;
use std::convert::Infallible;
use std::process;
use tracing_subscriber::EnvFilter;
use warp::reject::MethodNotAllowed;
use warp::{http::StatusCode, reject::Rejection, reply::Reply, Filter};
pub mod config;
pub mod error;
pub mod info;
pub mod request;
pub mod validation;

async fn root_handler() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&service_status()))
}
async fn analyze_match_handler(data: MatchData) -> Result<impl Reply, Rejection> {
    tracing::debug!(game_id = %data.game_id, state_keys = data.game_state.len(), "analyzing match");
    Ok(warp::reply::json(&analyze_match(data)))
}
async fn recommendations_handler(raw_game_id: String) -> Result<impl Reply, Rejection> {
    // warp hands path params over still percent-encoded
    let game_id = percent_decode_str(&raw_game_id)
        .decode_utf8()
        .map_err(|_| warp::reject::not_found())?
        .into_owned();
    // an encoded slash would span two segments once decoded
    if game_id.contains('/') {
        return Err(warp::reject::not_found());
    }
    tracing::debug!(game_id = %game_id, "recommending next move");
    Ok(warp::reply::json(&recommendation_for(game_id)))
}
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, body) = if let Some(validation) = err.find::<ValidationError>() {
        tracing::debug!(errors = validation.errors.len(), "request body failed validation");
        (StatusCode::UNPROCESSABLE_ENTITY, json!({ "detail": validation.errors }))
    } else if err.find::<BodyTooLargeError>().is_some() {
        tracing::debug!("payload too large");
        (StatusCode::PAYLOAD_TOO_LARGE, json!({ "detail": "Payload Too Large" }))
    } else if err.find::<BodyReadError>().is_some() {
        (StatusCode::BAD_REQUEST, json!({ "detail": "Bad Request" }))
    } else if err.find::<MethodNotAllowed>().is_some() {
        tracing::debug!("method not allowed");
        (StatusCode::METHOD_NOT_ALLOWED, json!({ "detail": "Method Not Allowed" }))
    } else if err.is_not_found() {
        tracing::debug!("not found");
        (StatusCode::NOT_FOUND, json!({ "detail": "Not Found" }))
    } else {
        tracing::error!("unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": "Internal Server Error" }))
    };
    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

/// Builds the full filter tree served by the AI service.
pub fn routes(config: &Config) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let root_route = warp::path::end().and(warp::get()).and_then(root_handler);
    let analyze_match_route = warp::path!("analyze-match")
        .and(warp::post())
        .and(with_match_data(config.max_body_bytes))
        .and_then(analyze_match_handler);
    let recommendations_route = warp::path!("recommendations" / String)
        .and(warp::get())
        .and_then(recommendations_handler);
    root_route
        .or(analyze_match_route)
        .or(recommendations_route)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("cannot listen for shutdown signal: {}", err);
        // keep serving rather than exiting on a broken signal handler
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            process::exit(1);
        }
    };

    match warp::serve(routes(&config)).try_bind_with_graceful_shutdown(config.addr, shutdown_signal()) {
        Ok((addr, server)) => {
            tracing::info!("Starting AI service at {}", addr);
            server.await;
        }
        Err(err) => {
            tracing::error!("failed to bind {}: {}", config.addr, err);
            process::exit(1);
        }
    }
}
