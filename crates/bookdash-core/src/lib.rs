pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod stats;

pub use config::AppConfig;
pub use error::{ConfigError, Result};
pub use models::*;

pub use filter::{filter_books, filter_books_now, EraFilter};
pub use stats::{compute_stats, decade_distribution, edition_range_distribution};
