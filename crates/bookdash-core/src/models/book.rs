use serde::{Deserialize, Serialize};

/// Sentinel substituted when the catalog gives no authors for a work.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One normalized entry of the fetched collection.
///
/// Invariants upheld by the loader:
/// - `authors` is never empty (the sentinel fills the gap),
/// - `first_publish_year` is `Some(y)` only for `y > 0`,
/// - `cover_image_url` always resolves (placeholder fallback).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    /// Full catalog key, e.g. `/works/OL123W`.
    pub key: String,
    /// Last path segment of the key, used for detail navigation.
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    /// `None` renders as `N/A`.
    pub first_publish_year: Option<i32>,
    pub cover_image_url: String,
    /// At most 5 entries.
    pub subjects: Vec<String>,
    pub edition_count: u32,
}

impl BookSummary {
    /// Whether the author list is real catalog data rather than the sentinel.
    pub fn has_known_authors(&self) -> bool {
        self.authors
            .first()
            .is_some_and(|first| first != UNKNOWN_AUTHOR)
    }

    /// Publish year for display, `N/A` when the catalog has none.
    pub fn year_label(&self) -> String {
        match self.first_publish_year {
            Some(year) => year.to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_author_is_not_known() {
        let book = BookSummary {
            key: "/works/OL1W".into(),
            id: "OL1W".into(),
            title: "Untitled".into(),
            authors: vec![UNKNOWN_AUTHOR.to_string()],
            first_publish_year: None,
            cover_image_url: String::new(),
            subjects: vec![],
            edition_count: 0,
        };
        assert!(!book.has_known_authors());
        assert_eq!(book.year_label(), "N/A");
    }
}
