//! Header inspection.
//!
//! # Responsibilities
//! - Project exactly three fields out of the inbound header set:
//!   user-agent, content-type, accept
//!
//! # Design Decisions
//! - Missing headers serialize as null rather than being dropped, so the
//!   response object always carries exactly these three keys
//! - Pure projection; header lookup is case-insensitive via HeaderMap

use axum::http::{header, HeaderMap, HeaderName};
use serde::Serialize;

/// The three contract-relevant request headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderInfo {
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    #[serde(rename = "content-type")]
    pub content_type: Option<String>,

    pub accept: Option<String>,
}

impl HeaderInfo {
    /// Extract the projection from an inbound header map.
    pub fn extract(headers: &HeaderMap) -> Self {
        Self {
            user_agent: text_header(headers, header::USER_AGENT),
            content_type: text_header(headers, header::CONTENT_TYPE),
            accept: text_header(headers, header::ACCEPT),
        }
    }
}

fn text_header(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
