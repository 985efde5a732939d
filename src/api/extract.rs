use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};

use crate::models::ShortenRequest;
use crate::shortener::ShortenerError;

/// JSON body for `POST /api/shorten`.
///
/// A request without a JSON content type or with an empty body is read as
/// `{}`, so it reaches the allocator and fails as a missing URL. Malformed
/// JSON is a 400 with the usual `{"error": ...}` body instead of axum's
/// plain-text rejections.
pub struct ShortenPayload(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = ShortenerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ShortenerError::Validation(e.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(ShortenRequest::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ShortenerError::Validation(format!("Invalid JSON body: {e}")))
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
