use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;

use bookdash_core::config::ApiConfig;
use bookdash_core::models::{AuthorDetail, BookDetail, ExternalLink, UNKNOWN_AUTHOR_NAME};

use crate::error::Result;
use crate::http::ApiClient;

pub const PLACEHOLDER_COVER_L: &str = "https://via.placeholder.com/300x400?text=No+Cover";

const MAX_AUTHORS: usize = 3;
const MAX_SUBJECTS: usize = 10;
const MAX_EXCERPTS: usize = 2;
const MAX_LINKS: usize = 5;

/// Fetches one work record plus up to 3 author records and assembles the
/// detail view-model. Owned by the detail view; the work fetch is fatal for
/// it, author fetches degrade per-branch.
pub struct DetailLoader {
    client: ApiClient,
    base_url: String,
    covers_base_url: String,
}

impl DetailLoader {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: ApiClient::new(
                Duration::from_millis(config.min_request_interval_ms),
                &config.user_agent,
            ),
            base_url: config.base_url.clone(),
            covers_base_url: config.covers_base_url.clone(),
        }
    }

    /// Fetch the full detail for one work id (e.g. `OL45883W`).
    ///
    /// A 404 on the work record surfaces as [`crate::ApiError::NotFound`].
    /// Author fetches run concurrently; each failing branch is replaced by
    /// the sentinel record without failing the others.
    pub async fn fetch(&self, work_id: &str) -> Result<BookDetail> {
        let url = format!("{}/works/{}.json", self.base_url, work_id);
        let work: Value = self.client.get_json(&url).await?;

        let author_keys: Vec<String> = work
            .get("authors")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(|entry| {
                        entry
                            .get("author")
                            .and_then(|a| a.get("key"))
                            .and_then(Value::as_str)
                    })
                    .take(MAX_AUTHORS)
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let authors = join_all(author_keys.iter().map(|key| self.fetch_author(key))).await;

        Ok(detail_from_work(&work, authors, &self.covers_base_url))
    }

    /// Fetch one author record, degrading to the sentinel on any failure.
    async fn fetch_author(&self, author_key: &str) -> AuthorDetail {
        let url = format!("{}{}.json", self.base_url, author_key);
        match self.client.get_json::<Value>(&url).await {
            Ok(json) => author_from_json(&json),
            Err(e) => {
                tracing::warn!(author_key, error = %e, "author fetch failed, using fallback");
                AuthorDetail::unknown()
            }
        }
    }
}

/// Upstream uses both plain strings and `{"type": ..., "value": "..."}`
/// wrappers for free-text fields.
fn text_or_value(v: Option<&Value>) -> Option<String> {
    let v = v?;
    v.as_str()
        .map(ToOwned::to_owned)
        .or_else(|| v.get("value").and_then(Value::as_str).map(ToOwned::to_owned))
}

pub fn author_from_json(v: &Value) -> AuthorDetail {
    AuthorDetail {
        name: v
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_AUTHOR_NAME)
            .to_string(),
        bio: text_or_value(v.get("bio")).unwrap_or_else(|| "No biography available".to_string()),
        birth_date: v
            .get("birth_date")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string(),
        photo_id: v
            .get("photos")
            .and_then(Value::as_array)
            .and_then(|arr| arr.first())
            .and_then(Value::as_i64),
    }
}

pub fn detail_from_work(v: &Value, authors: Vec<AuthorDetail>, covers_base_url: &str) -> BookDetail {
    let title = v
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let description = text_or_value(v.get("description"))
        .unwrap_or_else(|| "No description available.".to_string());

    let cover_image_url = v
        .get("covers")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .and_then(Value::as_i64)
        .map(|id| format!("{covers_base_url}/b/id/{id}-L.jpg"))
        .unwrap_or_else(|| PLACEHOLDER_COVER_L.to_string());

    let subjects = v
        .get("subjects")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .take(MAX_SUBJECTS)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let first_publish_date = v
        .get("first_publish_date")
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string();

    let excerpts = v
        .get("excerpts")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|e| {
                    e.get("excerpt")
                        .and_then(Value::as_str)
                        .or_else(|| e.get("text").and_then(Value::as_str))
                })
                .take(MAX_EXCERPTS)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let links = v
        .get("links")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|l| {
                    let url = l.get("url").and_then(Value::as_str)?;
                    let title = l
                        .get("title")
                        .and_then(Value::as_str)
                        .unwrap_or(url)
                        .to_string();
                    Some(ExternalLink {
                        title,
                        url: url.to_string(),
                    })
                })
                .take(MAX_LINKS)
                .collect()
        })
        .unwrap_or_default();

    BookDetail {
        title,
        description,
        cover_image_url,
        subjects,
        first_publish_date,
        authors,
        excerpts,
        links,
    }
}
