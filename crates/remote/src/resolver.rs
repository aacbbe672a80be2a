use buildstamp_core::{DependencyConstraint, MetadataFetcher, ResolvedDependencyVersion};
use buildstamp_manifest::format_constraint;
use tracing::warn;

use crate::metadata::extract_release_version;

/// Resolves the wildcard dependency specifier against a remote metadata
/// document. Failure degrades to absence with a single warning so offline
/// builds keep working.
#[derive(Debug)]
pub struct RemoteMetadataResolver {
    fetcher: Box<dyn MetadataFetcher>,
}

impl RemoteMetadataResolver {
    pub fn new(fetcher: Box<dyn MetadataFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn fetch_latest(&self, url: &str) -> Option<String> {
        match self.fetcher.fetch(url).await {
            Ok(body) => extract_release_version(&body),
            Err(e) => {
                warn!("failed to fetch server metadata from {url}: {e:#}");
                None
            }
        }
    }
}

/// Combines the configured constraint with the remote lookup to produce a
/// concrete server version plus its manifest-formatted form.
#[derive(Debug)]
pub struct ServerVersionResolver {
    remote: RemoteMetadataResolver,
    metadata_url: String,
}

impl ServerVersionResolver {
    pub fn new(fetcher: Box<dyn MetadataFetcher>, metadata_url: impl Into<String>) -> Self {
        Self {
            remote: RemoteMetadataResolver::new(fetcher),
            metadata_url: metadata_url.into(),
        }
    }

    /// No constraint means no output at all. A literal constraint is passed
    /// through; only the exact wildcard token triggers the network lookup,
    /// and when that lookup fails the manifest form falls back to the
    /// wildcard itself.
    pub async fn resolve(&self, constraint: &DependencyConstraint) -> ResolvedDependencyVersion {
        let Some(raw) = constraint.raw.as_deref() else {
            return ResolvedDependencyVersion::default();
        };

        if !constraint.is_wildcard() {
            return ResolvedDependencyVersion {
                concrete: Some(raw.to_string()),
                manifest_form: format_constraint(Some(raw)),
            };
        }

        let concrete = self.remote.fetch_latest(&self.metadata_url).await;
        let manifest_form = format_constraint(concrete.as_deref().or(Some(raw)));
        ResolvedDependencyVersion {
            concrete,
            manifest_form,
        }
    }
}
