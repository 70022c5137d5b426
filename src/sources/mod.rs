mod cache;
mod feed;
mod fetcher;
mod loader;
pub mod models;
pub mod sheet;
mod source_error;

pub use cache::CachedFetcher;
pub use fetcher::{Fetch, HttpFetcher};
pub use loader::{load_sources, SourceWarning};
pub use source_error::SourceError;
