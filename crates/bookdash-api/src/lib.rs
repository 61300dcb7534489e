//! Open Library client — collection and detail loaders over a rate-limited
//! reqwest wrapper.

pub mod collection;
pub mod detail;
pub mod error;
pub mod http;

pub use collection::CollectionLoader;
pub use detail::DetailLoader;
pub use error::{ApiError, Result};
