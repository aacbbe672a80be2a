use std::fmt::Display;

/// Revision token used when git cannot report a short hash.
pub const UNKNOWN_REVISION: &str = "unknown";

/// Opaque identifier for one build invocation's output: effective version,
/// compact UTC timestamp and short revision joined with dashes. Inputs are
/// not validated; callers guarantee non-empty values via defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIdentifier {
    pub version: String,
    pub timestamp_utc: String,
    pub revision: String,
}

impl BuildIdentifier {
    pub fn new(
        version: impl Into<String>,
        timestamp_utc: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            timestamp_utc: timestamp_utc.into(),
            revision: revision.into(),
        }
    }
}

impl Display for BuildIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.version, self.timestamp_utc, self.revision)
    }
}
