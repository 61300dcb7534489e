mod book;
mod detail;

pub use book::{BookSummary, UNKNOWN_AUTHOR};
pub use detail::{AuthorDetail, BookDetail, ExternalLink, UNKNOWN_AUTHOR_NAME};
