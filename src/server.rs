//! HTTP front for the name parser.
//!
//! One route, `POST /api/ParseFullName`. The name comes from the `name`
//! query parameter, or from `{"name": "..."}` in the body when the
//! parameter is absent.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
};
use name_parser_types::{NameFields, ParseNameRequest};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::InvalidInputError;
use crate::parser;

pub const PARSE_ROUTE: &str = "/api/ParseFullName";

pub const MISSING_NAME_MESSAGE: &str = "Expected a non-empty value for a 'name' query parameter or 'name' property in a JSON object in the request body.";

#[derive(Debug, Default, Deserialize)]
pub struct ParseNameQuery {
    pub name: Option<String>,
    /// Function key
    pub code: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}", MISSING_NAME_MESSAGE)]
    MissingName,

    #[error("Cannot parse name: {0}.")]
    InvalidName(#[from] InvalidInputError),

    #[error("Missing or invalid function key.")]
    Unauthorized,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingName | ApiError::InvalidName(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "rejected request");
        (status, self.to_string()).into_response()
    }
}

/// Build the application router.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route(PARSE_ROUTE, post(parse_full_name))
        .with_state(Arc::new(config))
        .layer(TraceLayer::new_for_http())
}

/// Bind `config.addr` and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;

    tracing::info!(%addr, key_required = config.requires_key(), "name parser listening");

    axum::serve(listener, router(config))
        .await
        .context("server stopped unexpectedly")
}

/// POST /api/ParseFullName
async fn parse_full_name(
    State(config): State<Arc<ServerConfig>>,
    query: Result<Query<ParseNameQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<NameFields>, ApiError> {
    // A query string that doesn't fit (e.g. `name` given twice) has no
    // usable name, and no trustworthy `code` either.
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable query string");
            return Err(if config.requires_key() {
                ApiError::Unauthorized
            } else {
                ApiError::MissingName
            });
        }
    };

    if !config.authorizes(query.code.as_deref()) {
        return Err(ApiError::Unauthorized);
    }

    // A blank `name` parameter is still the caller's answer; the body is
    // only consulted when the parameter is missing altogether.
    let name = query
        .name
        .or_else(|| name_from_body(&body))
        .filter(|n| !n.trim().is_empty())
        .ok_or(ApiError::MissingName)?;

    tracing::debug!(%name, "received name");

    let parsed = parser::parse(&name)?;
    Ok(Json(NameFields::from(&parsed)))
}

fn name_from_body(body: &[u8]) -> Option<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<ParseNameRequest>(body) {
        Ok(request) => request.name,
        Err(e) => {
            tracing::debug!(error = %e, "request body is not a name object");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn post_name(uri: &str, body: &str) -> (StatusCode, String) {
        send(router(ServerConfig::default()), "POST", uri, body).await
    }

    fn fields(json: &str) -> NameFields {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_name_from_query() {
        let (status, body) = post_name("/api/ParseFullName?name=Mr%20Fred%20Blogs", "").await;
        assert_eq!(status, StatusCode::OK);

        let f = fields(&body);
        assert_eq!(f.title, "Mr");
        assert_eq!(f.first_name, "Fred");
        assert_eq!(f.middle_name, "");
        assert_eq!(f.last_name, "Blogs");
        assert_eq!(f.suffixes, "");
        assert_eq!(f.nickname, "");
    }

    #[tokio::test]
    async fn test_every_key_present() {
        let (_, body) = post_name("/api/ParseFullName?name=Blogs", "").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        for key in ["title", "firstName", "middleName", "lastName", "nickname", "suffixes"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[tokio::test]
    async fn test_name_from_body() {
        let (status, body) =
            post_name("/api/ParseFullName", r#"{"name": "Dr Jane Q. Public PhD"}"#).await;
        assert_eq!(status, StatusCode::OK);

        let f = fields(&body);
        assert_eq!(f.title, "Dr");
        assert_eq!(f.first_name, "Jane");
        assert_eq!(f.middle_name, "Q.");
        assert_eq!(f.last_name, "Public");
        assert_eq!(f.suffixes, "PhD");
    }

    #[tokio::test]
    async fn test_query_wins_over_body() {
        let (status, body) =
            post_name("/api/ParseFullName?name=Blogs,%20Fred", r#"{"name": "John Smith"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fields(&body).last_name, "Blogs");
    }

    #[tokio::test]
    async fn test_missing_name() {
        let (status, body) = post_name("/api/ParseFullName", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, MISSING_NAME_MESSAGE);

        let (status, body) = post_name("/api/ParseFullName", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, MISSING_NAME_MESSAGE);
    }

    #[tokio::test]
    async fn test_blank_query_does_not_fall_back_to_body() {
        let (status, body) =
            post_name("/api/ParseFullName?name=%20%20", r#"{"name": "John Smith"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, MISSING_NAME_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        for body in ["not json", r#"{"name": 42}"#, r#""Fred Blogs""#, r#"{"name": "   "}"#] {
            let (status, text) = post_name("/api/ParseFullName", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(text, MISSING_NAME_MESSAGE, "{body}");
        }
    }

    #[tokio::test]
    async fn test_repeated_name_parameter() {
        let (status, body) = post_name("/api/ParseFullName?name=a&name=b", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, MISSING_NAME_MESSAGE);
    }

    #[tokio::test]
    async fn test_name_without_letters() {
        let (status, body) = post_name("/api/ParseFullName?name=1234", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("alphabetic"), "{body}");
    }

    #[tokio::test]
    async fn test_get_not_allowed() {
        let app = router(ServerConfig::default());
        let (status, _) = send(app, "GET", "/api/ParseFullName?name=Fred", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_function_key_enforced_when_configured() {
        let config = ServerConfig {
            api_key: Some("s3cret".into()),
            ..Default::default()
        };

        let (status, _) = send(
            router(config.clone()),
            "POST",
            "/api/ParseFullName?name=Fred",
            "",
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            router(config.clone()),
            "POST",
            "/api/ParseFullName?name=a&name=b&code=s3cret",
            "",
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            router(config.clone()),
            "POST",
            "/api/ParseFullName?name=Fred&code=wrong",
            "",
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            router(config),
            "POST",
            "/api/ParseFullName?name=Fred&code=s3cret",
            "",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fields(&body).last_name, "Fred");
    }
}
