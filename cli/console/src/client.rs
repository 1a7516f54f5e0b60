//! HTTP access to the companies analytics API.
//!
//! Wraps a [`reqwest::Client`] with one method per backend query and maps
//! request failures into [`ApiClientError`]. Non-success responses echo the
//! server's own `{"error": msg}` description when the body decodes; anything
//! else falls back to the status line plus a compacted body preview so
//! failures stay legible without dumping whole payloads into the terminal.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::dto::{CountDto, ErrorDto, ItemsDto};

/// Longest body excerpt echoed into an error message.
const BODY_PREVIEW_LIMIT: usize = 160;

/// Failures surfaced by [`ApiClient`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiClientError {
    /// The configured base URL cannot address API routes.
    #[error("base URL {url} cannot address API routes")]
    BaseUrl {
        /// The offending URL as configured.
        url: String,
    },
    /// The server answered with a non-success status. `message` carries the
    /// server's own error description when the body decodes as one.
    #[error("{message}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Server-sent description, or the status line plus a body preview.
        message: String,
    },
    /// The request did not complete.
    #[error("request failed: {message}")]
    Transport {
        /// Transport-level failure description.
        message: String,
    },
    /// The request ran past the configured deadline.
    #[error("request timed out: {message}")]
    Timeout {
        /// Timeout description as reported by the transport.
        message: String,
    },
    /// A success response carried a body that did not decode.
    #[error("invalid response body: {message}")]
    Decode {
        /// Decoder failure description.
        message: String,
    },
}

/// Typed client over the read-only companies endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    /// Builds a client rooted at `base_url` with a per-request `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// `GET /api/companies/count`
    pub async fn count(&self) -> Result<CountDto, ApiClientError> {
        let url = self.endpoint(&["count"])?;
        self.get_json(url).await
    }

    /// `GET /api/companies/top-paid`
    pub async fn top_paid(&self, limit: Option<i64>) -> Result<ItemsDto, ApiClientError> {
        let mut url = self.endpoint(&["top-paid"])?;
        if let Some(value) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &value.to_string());
        }
        self.get_json(url).await
    }

    /// `GET /api/companies/headcount-range`
    pub async fn headcount_range(
        &self,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<ItemsDto, ApiClientError> {
        let mut url = self.endpoint(&["headcount-range"])?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(value) = min {
                query.append_pair("min", &value.to_string());
            }
            if let Some(value) = max {
                query.append_pair("max", &value.to_string());
            }
        }
        self.get_json(url).await
    }

    /// `GET /api/companies/by-location/{location}`
    pub async fn by_location(&self, location: &str) -> Result<ItemsDto, ApiClientError> {
        let url = self.endpoint(&["by-location", location])?;
        self.get_json(url).await
    }

    /// `GET /api/companies/by-skill/{skill}`
    pub async fn by_skill(&self, skill: &str) -> Result<ItemsDto, ApiClientError> {
        let url = self.endpoint(&["by-skill", skill])?;
        self.get_json(url).await
    }

    /// `GET /api/companies/benefit/{benefit}`
    pub async fn by_benefit(&self, benefit: &str) -> Result<ItemsDto, ApiClientError> {
        let url = self.endpoint(&["benefit", benefit])?;
        self.get_json(url).await
    }

    /// Joins `/api/companies` plus `segments` onto the base URL,
    /// percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiClientError::BaseUrl {
                    url: self.base_url.to_string(),
                })?;
            path.pop_if_empty();
            path.extend(["api", "companies"]);
            path.extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiClientError> {
        debug!(%url, "requesting");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        serde_json::from_slice(&body).map_err(|error| ApiClientError::Decode {
            message: error.to_string(),
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiClientError {
    if error.is_timeout() {
        ApiClientError::Timeout {
            message: error.to_string(),
        }
    } else {
        ApiClientError::Transport {
            message: error.to_string(),
        }
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiClientError {
    let message = serde_json::from_slice::<ErrorDto>(body)
        .ok()
        .map(|dto| dto.error)
        .filter(|error| !error.trim().is_empty())
        .unwrap_or_else(|| match body_preview(body) {
            preview if preview.is_empty() => format!("status {status}"),
            preview => format!("status {status}: {preview}"),
        });
    ApiClientError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Collapses whitespace runs and truncates so error messages stay one line.
fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let compact = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.chars().count() <= BODY_PREVIEW_LIMIT {
        return compact;
    }
    let truncated: String = compact.chars().take(BODY_PREVIEW_LIMIT).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn client(base: &str) -> ApiClient {
        let url = Url::parse(base).expect("base URL");
        ApiClient::new(url, Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn endpoint_joins_api_prefix_and_segments() {
        let url = client("http://localhost:8080")
            .endpoint(&["count"])
            .expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:8080/api/companies/count");
    }

    #[test]
    fn endpoint_percent_encodes_path_terms() {
        let url = client("http://localhost:8080")
            .endpoint(&["by-location", "New Delhi"])
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/companies/by-location/New%20Delhi"
        );
    }

    #[test]
    fn endpoint_preserves_a_base_path() {
        let url = client("http://gateway.internal/companies-api/")
            .endpoint(&["top-paid"])
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "http://gateway.internal/companies-api/api/companies/top-paid"
        );
    }

    #[test]
    fn endpoint_rejects_a_base_url_without_paths() {
        let error = client("mailto:ops@example.com")
            .endpoint(&["count"])
            .expect_err("cannot-be-a-base URL");
        assert!(matches!(error, ApiClientError::BaseUrl { .. }));
    }

    #[rstest]
    #[case::server_message(
        StatusCode::BAD_REQUEST,
        br#"{"error": "min must be an integer"}"#.as_slice(),
        "min must be an integer"
    )]
    #[case::redacted_internal(
        StatusCode::INTERNAL_SERVER_ERROR,
        br#"{"error": "Internal Server Error"}"#.as_slice(),
        "Internal Server Error"
    )]
    #[case::non_json_body(
        StatusCode::BAD_GATEWAY,
        b"<html>upstream  down</html>".as_slice(),
        "status 502 Bad Gateway: <html>upstream down</html>"
    )]
    #[case::empty_body(
        StatusCode::NOT_FOUND,
        b"".as_slice(),
        "status 404 Not Found"
    )]
    fn status_errors_prefer_the_server_message(
        #[case] status: StatusCode,
        #[case] body: &[u8],
        #[case] expected: &str,
    ) {
        let error = map_status_error(status, body);
        assert_eq!(
            error,
            ApiClientError::Status {
                status: status.as_u16(),
                message: expected.to_owned(),
            }
        );
    }

    #[test]
    fn blank_server_message_falls_back_to_the_preview() {
        let error = map_status_error(StatusCode::BAD_REQUEST, br#"{"error": "  "}"#);
        let ApiClientError::Status { message, .. } = error else {
            panic!("expected a status error");
        };
        assert!(message.starts_with("status 400 Bad Request:"));
    }

    #[test]
    fn body_preview_compacts_and_truncates() {
        assert_eq!(body_preview(b"  spread \n out\tbody  "), "spread out body");

        let long = "a".repeat(BODY_PREVIEW_LIMIT + 40);
        let preview = body_preview(long.as_bytes());
        assert_eq!(preview.chars().count(), BODY_PREVIEW_LIMIT + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn status_error_renders_just_the_message() {
        let error = ApiClientError::Status {
            status: 400,
            message: "limit must be an integer".to_owned(),
        };
        assert_eq!(error.to_string(), "limit must be an integer");
    }
}
