pub mod config;
pub mod constraint;
pub mod descriptor;
pub mod fetcher;
pub mod identifier;
pub mod resolved;
pub mod runner;

// Re-export the types every resolver crate needs
pub use config::{BuildConfig, get_build_config};
pub use constraint::{DependencyConstraint, ResolvedDependencyVersion, WILDCARD};
pub use descriptor::VersionDescriptor;
pub use fetcher::MetadataFetcher;
pub use identifier::{BuildIdentifier, UNKNOWN_REVISION};
pub use resolved::{ResolvedVersion, VersionSource};
pub use runner::{CommandOutput, ProcessRunner};
