//! Route handlers.
//!
//! Each handler resolves its own outcome locally and writes the matching
//! response; there is no shared error-translation layer. Validation failures
//! answer 500 and missing records answer 404, matching the original wire
//! contract (the 500 is unconventional but behavior-defining; see DESIGN.md).

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::friends::{FilterCriteria, Friend, FriendCandidate, FriendError};
use crate::http::headers::HeaderInfo;
use crate::http::server::AppState;

/// GET `/` — the full record sequence.
pub async fn list_friends(State(state): State<AppState>) -> Json<Vec<Friend>> {
    let store = state.store.lock().await;
    Json(store.all().to_vec())
}

/// GET `/filter?gender=..&letter=..` — filtered view, 404 on zero matches.
pub async fn filter_friends(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Response {
    tracing::debug!(gender = ?criteria.gender, letter = ?criteria.letter, "Filtering friends");

    let store = state.store.lock().await;
    let matches = criteria.apply(store.all());

    if matches.is_empty() {
        let body = json!({ "error": criteria.no_match_message() });
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    } else {
        Json(matches).into_response()
    }
}

/// GET `/info` — project user-agent, content-type and accept.
pub async fn headers_info(headers: HeaderMap) -> Json<HeaderInfo> {
    tracing::debug!(header_count = headers.len(), "Inspecting request headers");
    Json(HeaderInfo::extract(&headers))
}

/// GET `/{id}` — single record lookup.
pub async fn get_friend(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    tracing::debug!(id = %id, "Resolving friend by id");

    let store = state.store.lock().await;
    match store.find_by_id(&id) {
        Some(friend) => Json(json!({ "result": friend })).into_response(),
        None => {
            let body = json!({ "result": FriendError::NotFound(id).to_string() });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

/// POST `/` — validate and append a new record.
pub async fn create_friend(State(state): State<AppState>, body: Bytes) -> Response {
    let candidate = parse_candidate(&body);
    tracing::debug!(?candidate, "Creating friend");

    let mut store = state.store.lock().await;
    match store.create(candidate) {
        Ok(friend) => Json(friend).into_response(),
        Err(err) => validation_failure(err),
    }
}

/// PUT `/{id}` — validate and mutate name/gender of an existing record.
pub async fn update_friend(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let candidate = parse_candidate(&body);
    tracing::debug!(id = %id, ?candidate, "Updating friend");

    let mut store = state.store.lock().await;
    match store.update(&id, &candidate) {
        Ok(()) => {
            // Echo the candidate exactly as received
            let body = json!({
                "result": format!("Updated friend with ID {}", id),
                "data": candidate,
            });
            Json(body).into_response()
        }
        Err(err @ FriendError::MissingFields) => validation_failure(err),
        Err(err @ FriendError::NotFound(_)) => {
            let body = json!({ "result": err.to_string() });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

/// Lenient body parsing: malformed or absent JSON degrades to the all-absent
/// candidate, which then fails the presence check. Never a 400 from the
/// extractor.
fn parse_candidate(body: &Bytes) -> FriendCandidate {
    serde_json::from_slice(body).unwrap_or_default()
}

fn validation_failure(err: FriendError) -> Response {
    let body = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
