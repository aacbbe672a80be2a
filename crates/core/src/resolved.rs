use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Which precedence level produced the effective version.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VersionSource {
    /// Explicit override from configuration or CLI flag
    ExplicitOverride,
    /// Derived from `git describe` output
    GitDerived,
    /// The configured static fallback version
    StaticDefault,
}

impl Display for VersionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::ExplicitOverride => "override",
                Self::GitDerived => "git",
                Self::StaticDefault => "default",
            }
        )
    }
}

/// Effective version plus the precedence level that won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub value: String,
    pub source: VersionSource,
}
