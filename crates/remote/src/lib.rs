mod fetcher;
mod metadata;
mod resolver;

pub use fetcher::HttpMetadataFetcher;
pub use metadata::extract_release_version;
pub use resolver::{RemoteMetadataResolver, ServerVersionResolver};
