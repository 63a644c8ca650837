use crate::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

/// `Json` body extractor that rejects with [`ApiError::Validation`]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request as HttpRequest, StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        count: u32,
    }

    async fn echo(AppJson(payload): AppJson<Payload>) -> String {
        payload.count.to_string()
    }

    async fn post_body(content_type: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/", post(echo));
        let request = HttpRequest::post("/")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let (status, body) = post_body("application/json", r#"{"count":3}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"3");
    }

    #[tokio::test]
    async fn bad_bodies_are_json_validation_errors() {
        for (content_type, body) in [
            ("application/json", r#"{"count":"three"}"#),
            ("application/json", r#"{}"#),
            ("application/json", "{"),
            ("text/plain", r#"{"count":3}"#),
        ] {
            let (status, bytes) = post_body(content_type, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");

            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"], "validation");
            assert!(!body["message"].as_str().unwrap().is_empty());
        }
    }
}
