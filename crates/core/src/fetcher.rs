use anyhow::Result;
use async_trait::async_trait;

/// Capability for fetching a metadata document over the network.
///
/// Boxed at use sites so tests can inject canned bodies or simulated I/O
/// failures deterministically.
#[async_trait]
pub trait MetadataFetcher: std::fmt::Debug + Send + Sync {
    /// # Errors
    /// Returns error on any transport failure, timeout or non-success
    /// status. Callers are expected to degrade to absence, not propagate.
    async fn fetch(&self, url: &str) -> Result<String>;
}
