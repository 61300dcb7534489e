use serde::{Deserialize, Serialize};

/// Sentinel name for an author whose record could not be fetched.
pub const UNKNOWN_AUTHOR_NAME: &str = "Unknown";

/// Biographical record for one author of a work, at most 3 per detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDetail {
    pub name: String,
    pub bio: String,
    pub birth_date: String,
    pub photo_id: Option<i64>,
}

impl AuthorDetail {
    /// Fallback record used when an author fetch fails.
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_AUTHOR_NAME.to_string(),
            bio: "No information available".to_string(),
            birth_date: "N/A".to_string(),
            photo_id: None,
        }
    }
}

/// External resource link attached to a work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalLink {
    pub title: String,
    pub url: String,
}

/// Extended view-model for a single work, built on navigation to a detail
/// view and discarded on navigation away. Never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetail {
    pub title: String,
    pub description: String,
    pub cover_image_url: String,
    /// At most 10 entries.
    pub subjects: Vec<String>,
    pub first_publish_date: String,
    /// At most 3 entries.
    pub authors: Vec<AuthorDetail>,
    /// At most 2 entries.
    pub excerpts: Vec<String>,
    /// At most 5 entries.
    pub links: Vec<ExternalLink>,
}
