use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted short code -> URL mapping.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Public short URL for this mapping under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.short_code)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn new(mapping: Mapping, base_url: &str) -> Self {
        let short_url = mapping.short_url(base_url);
        Self {
            original_url: mapping.original_url,
            short_url,
            short_code: mapping.short_code,
            created_at: mapping.created_at,
        }
    }
}

/// Per-link stats projection returned by `GET /api/stats/{code}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingStats {
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Mapping> for MappingStats {
    fn from(mapping: Mapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_code: mapping.short_code,
            clicks: mapping.clicks,
            created_at: mapping.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(code: &str) -> Mapping {
        Mapping {
            id: 7,
            original_url: "https://example.com/long/path".to_string(),
            short_code: code.to_string(),
            clicks: 3,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn short_url_joins_base_and_code() {
        let m = mapping("aB3xY9");
        assert_eq!(m.short_url("http://localhost:5000"), "http://localhost:5000/aB3xY9");
        assert_eq!(m.short_url("https://sn.ip/"), "https://sn.ip/aB3xY9");
    }

    #[test]
    fn mapping_serializes_camel_case() {
        let value = serde_json::to_value(mapping("aB3xY9")).unwrap();
        assert_eq!(value["originalUrl"], "https://example.com/long/path");
        assert_eq!(value["shortCode"], "aB3xY9");
        assert_eq!(value["clicks"], 3);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("original_url").is_none());
    }

    #[test]
    fn shorten_request_tolerates_missing_url() {
        let req: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());
    }
}
