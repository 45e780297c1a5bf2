use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, any};
use serde::Serialize;
use tracing::error;

use crate::error::Result;
use crate::state::{ReadMode, StatusHolder};

/// Handler serving the holder's record on every method. The response is
/// always 200; severity is only reported in the body.
pub fn status_route(holder: StatusHolder, mode: ReadMode) -> MethodRouter {
    any(move || {
        let holder = holder.clone();
        async move { status_response(&holder, mode) }
    })
}

/// For slowly changing status: the timestamp is the time of the request.
pub fn refreshing_route(holder: StatusHolder) -> MethodRouter {
    status_route(holder, ReadMode::Refresh)
}

/// For status kept up to date by a background task: the timestamp is when
/// that task last reported.
pub fn background_route(holder: StatusHolder) -> MethodRouter {
    status_route(holder, ReadMode::Raw)
}

pub fn status_response(holder: &StatusHolder, mode: ReadMode) -> Response {
    json_response(&holder.read(mode))
}

fn json_response<T: Serialize>(value: &T) -> Response {
    let body = match encode(value) {
        Ok(body) => body,
        Err(e) => {
            error!("Couldn't encode/write status: {e}");
            Vec::new()
        }
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}
