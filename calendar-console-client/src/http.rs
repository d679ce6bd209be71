//! Shared HTTP request processing.
//!
//! Unifies the request flow for every resource call: send, log, read the
//! body, map the status code into [`ApiError`]. The resource modules build
//! the `RequestBuilder` themselves and hand it over; parsing stays flexible.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Maximum body length echoed into debug logs.
const LOG_BODY_LIMIT: usize = 2048;

pub(crate) fn truncate_for_log(body: &str) -> &str {
    if body.len() <= LOG_BODY_LIMIT {
        body
    } else {
        // Back off to a char boundary so slicing cannot panic.
        let mut end = LOG_BODY_LIMIT;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        &body[..end]
    }
}

/// Performs an HTTP request and returns `(status, body)`.
///
/// Transport failures map to [`ApiError::Timeout`] or [`ApiError::Network`];
/// the status code is not interpreted here — callers decide which statuses
/// are errors via [`check_status`].
pub(crate) async fn execute(
    request: RequestBuilder,
    method: &str,
    path: &str,
) -> Result<(u16, String), ApiError> {
    log::debug!("{method} {path}");

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ApiError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("{method} {path} -> HTTP {status}");

    let body = response.text().await.map_err(|e| ApiError::Network {
        detail: format!("failed to read response body: {e}"),
    })?;

    log::debug!("Response Body: {}", truncate_for_log(&body));

    Ok((status, body))
}

/// Maps a non-success status into the error taxonomy.
///
/// `resource`/`id` feed the `NotFound` variant so the UI can say *what*
/// was missing, not just that something was.
pub(crate) fn check_status(
    status: u16,
    body: &str,
    resource: &str,
    id: Option<&str>,
) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let detail = error_detail(body);
    let err = match status {
        400 => ApiError::Validation { detail },
        401 => ApiError::Unauthorized { detail },
        403 => ApiError::Forbidden { detail },
        404 => ApiError::NotFound {
            resource: resource.to_string(),
            id: id.unwrap_or("<unknown>").to_string(),
        },
        500..=599 => ApiError::Server { status, detail },
        _ => ApiError::Unexpected { status, detail },
    };

    if err.is_expected() {
        log::warn!("{resource}: HTTP {status}: {err}");
    } else {
        log::error!("{resource}: HTTP {status}: {err}");
    }

    Err(err)
}

/// Parses a JSON response body.
pub(crate) fn parse_json<T>(body: &str, resource: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("{resource}: JSON parse failed: {e}");
        log::error!("{resource}: raw response: {}", truncate_for_log(body));
        ApiError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Extracts a human-readable message from a problem-details error body.
///
/// The server answers errors with RFC-7807-ish JSON (`title`, `detail`,
/// sometimes `message`); fall back to the raw body when it is not JSON.
fn error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "title", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    if body.is_empty() {
        "<empty body>".to_string()
    } else {
        truncate_for_log(body).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_statuses_pass() {
        assert!(check_status(200, "", "calendar", None).is_ok());
        assert!(check_status(201, "", "calendar", None).is_ok());
    }

    #[test]
    fn maps_400_to_validation() {
        let result = check_status(400, r#"{"title":"idexists"}"#, "calendar", None);
        let Err(ApiError::Validation { detail }) = result else {
            panic!("expected Validation, got {result:?}");
        };
        assert_eq!(detail, "idexists");
    }

    #[test]
    fn maps_401_to_unauthorized() {
        let result = check_status(401, "", "calendar", None);
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }

    #[test]
    fn maps_403_to_forbidden() {
        let result = check_status(403, "", "calendar-event", None);
        assert!(matches!(result, Err(ApiError::Forbidden { .. })));
    }

    #[test]
    fn maps_404_to_not_found_with_id() {
        let result = check_status(404, "", "calendar", Some("7"));
        let Err(ApiError::NotFound { resource, id }) = result else {
            panic!("expected NotFound, got {result:?}");
        };
        assert_eq!(resource, "calendar");
        assert_eq!(id, "7");
    }

    #[test]
    fn maps_5xx_to_server() {
        let result = check_status(503, "unavailable", "calendar", None);
        assert!(matches!(
            result,
            Err(ApiError::Server { status: 503, .. })
        ));
    }

    #[test]
    fn error_detail_prefers_structured_fields() {
        assert_eq!(
            error_detail(r#"{"title":"Bad Request","detail":"time is required"}"#),
            "time is required"
        );
        assert_eq!(error_detail("plain text"), "plain text");
        assert_eq!(error_detail(""), "<empty body>");
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = parse_json("not json", "test");
        assert!(matches!(&result, Err(ApiError::Parse { .. })));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "好".repeat(LOG_BODY_LIMIT);
        let truncated = truncate_for_log(&body);
        assert!(truncated.len() <= LOG_BODY_LIMIT);
        assert!(body.starts_with(truncated));
    }
}
