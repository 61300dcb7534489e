use std::time::Duration;

use serde_json::Value;

use bookdash_core::config::ApiConfig;
use bookdash_core::models::{BookSummary, UNKNOWN_AUTHOR};

use crate::error::{ApiError, Result};
use crate::http::ApiClient;

pub const PLACEHOLDER_COVER_M: &str = "https://via.placeholder.com/150x200?text=No+Cover";

/// Fetches the fixed-size dashboard collection and normalizes each work
/// into a [`BookSummary`]. Owned by the dashboard view; a fetch failure is
/// terminal for that view.
pub struct CollectionLoader {
    client: ApiClient,
    base_url: String,
    covers_base_url: String,
    subject: String,
    limit: usize,
}

impl CollectionLoader {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: ApiClient::new(
                Duration::from_millis(config.min_request_interval_ms),
                &config.user_agent,
            ),
            base_url: config.base_url.clone(),
            covers_base_url: config.covers_base_url.clone(),
            subject: config.subject.clone(),
            limit: config.limit,
        }
    }

    /// Fetch the collection: at most `limit` works for the configured subject.
    pub async fn fetch(&self) -> Result<Vec<BookSummary>> {
        let url = format!(
            "{}/subjects/{}.json?limit={}",
            self.base_url, self.subject, self.limit
        );
        let json: Value = self.client.get_json(&url).await?;

        let works = json
            .get("works")
            .and_then(Value::as_array)
            .ok_or_else(|| ApiError::Parse("missing 'works' array in subject response".into()))?;

        Ok(works
            .iter()
            .map(|work| summary_from_work(work, &self.covers_base_url))
            .collect())
    }
}

/// Normalize one raw `works[]` entry. Missing fields get their documented
/// fallbacks: sentinel author list, placeholder cover, 0 editions, no year.
pub fn summary_from_work(v: &Value, covers_base_url: &str) -> BookSummary {
    let key = v
        .get("key")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let id = key.rsplit('/').next().unwrap_or_default().to_string();

    let title = v
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut authors: Vec<String> = v
        .get("authors")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|item| item.get("name").and_then(Value::as_str))
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();
    if authors.is_empty() {
        authors.push(UNKNOWN_AUTHOR.to_string());
    }

    let first_publish_year = v
        .get("first_publish_year")
        .and_then(Value::as_i64)
        .map(|year| year as i32)
        .filter(|&year| year > 0);

    let cover_image_url = v
        .get("cover_id")
        .and_then(Value::as_i64)
        .map(|id| format!("{covers_base_url}/b/id/{id}-M.jpg"))
        .unwrap_or_else(|| PLACEHOLDER_COVER_M.to_string());

    let subjects = v
        .get("subject")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .take(5)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let edition_count = v
        .get("edition_count")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;

    BookSummary {
        key,
        id,
        title,
        authors,
        first_publish_year,
        cover_image_url,
        subjects,
        edition_count,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn test_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            min_request_interval_ms: 0,
            ..ApiConfig::default()
        }
    }

    #[test]
    fn parses_full_work_entry() {
        let work = json!({
            "key": "/works/OL15427057W",
            "title": "The Rust Programming Language",
            "authors": [{"name": "Steve Klabnik"}, {"name": "Carol Nichols"}],
            "first_publish_year": 2019,
            "cover_id": 12345,
            "subject": ["Rust", "Programming", "Systems", "Computers", "Languages", "Extra"],
            "edition_count": 7
        });

        let book = summary_from_work(&work, "https://covers.openlibrary.org");
        assert_eq!(book.id, "OL15427057W");
        assert_eq!(book.key, "/works/OL15427057W");
        assert_eq!(book.title, "The Rust Programming Language");
        assert_eq!(book.authors, vec!["Steve Klabnik", "Carol Nichols"]);
        assert_eq!(book.first_publish_year, Some(2019));
        assert_eq!(
            book.cover_image_url,
            "https://covers.openlibrary.org/b/id/12345-M.jpg"
        );
        assert_eq!(book.subjects.len(), 5);
        assert_eq!(book.edition_count, 7);
    }

    #[test]
    fn missing_fields_get_fallbacks() {
        let work = json!({
            "key": "/works/OL1W",
            "title": "Bare Minimum"
        });

        let book = summary_from_work(&work, "https://covers.openlibrary.org");
        assert_eq!(book.authors, vec![UNKNOWN_AUTHOR]);
        assert_eq!(book.first_publish_year, None);
        assert_eq!(book.cover_image_url, PLACEHOLDER_COVER_M);
        assert!(book.subjects.is_empty());
        assert_eq!(book.edition_count, 0);
    }

    #[test]
    fn non_positive_year_becomes_none() {
        let work = json!({"key": "/works/OL2W", "title": "x", "first_publish_year": 0});
        let book = summary_from_work(&work, "");
        assert_eq!(book.first_publish_year, None);
    }

    #[tokio::test]
    async fn fetch_returns_normalized_collection() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/subjects/programming.json?limit=50")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                "works": [
                    {
                        "key": "/works/OL1W",
                        "title": "First",
                        "authors": [{"name": "Alice"}],
                        "first_publish_year": 1999,
                        "cover_id": 1,
                        "edition_count": 12
                    },
                    {
                        "key": "/works/OL2W",
                        "title": "Second"
                    }
                ]
            }"#,
            )
            .create_async()
            .await;

        let loader = CollectionLoader::new(&test_config(&server.url()));
        let books = loader.fetch().await.unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "First");
        assert_eq!(books[0].edition_count, 12);
        assert_eq!(books[1].authors, vec![UNKNOWN_AUTHOR]);
    }

    #[tokio::test]
    async fn fetch_failure_is_terminal() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/subjects/programming.json?limit=50")
            .with_status(500)
            .create_async()
            .await;

        let loader = CollectionLoader::new(&test_config(&server.url()));
        let err = loader.fetch().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/subjects/programming.json?limit=50")
            .with_status(200)
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let loader = CollectionLoader::new(&test_config(&server.url()));
        let err = loader.fetch().await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
