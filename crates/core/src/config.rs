use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Metadata document queried when the server constraint is the wildcard.
pub const DEFAULT_SERVER_METADATA_URL: &str =
    "https://maven.hypixel.net/releases/com/hypixel/hytale/Server/maven-metadata.xml";

/// Relative path of the config file inside the repository root.
pub const CONFIG_PATH: &str = ".buildstamp/config.json";

/// Loaded from `.buildstamp/config.json`, controls version precedence and
/// server dependency resolution. Every field has a default so a missing or
/// partial file still yields a working configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Explicit version override; wins over git-derived versions when set
    #[serde(default)]
    pub version_override: Option<String>,

    /// Fallback version when git has no usable tag information
    #[serde(default = "default_base_version")]
    pub base_version: String,

    /// Server dependency constraint, possibly the wildcard token `*`
    #[serde(default)]
    pub server_version: Option<String>,

    /// Enables server dependency resolution at all (default: off, so
    /// builds stay reproducible offline)
    #[serde(default)]
    pub resolve_server: bool,

    /// Metadata document consulted for wildcard resolution
    #[serde(default = "default_server_metadata_url")]
    pub server_metadata_url: String,
}

fn default_base_version() -> String {
    "0.1.0".to_string()
}

fn default_server_metadata_url() -> String {
    DEFAULT_SERVER_METADATA_URL.to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            version_override: None,
            base_version: default_base_version(),
            server_version: None,
            resolve_server: false,
            server_metadata_url: default_server_metadata_url(),
        }
    }
}

/// Load the config from the repository root, falling back to defaults when
/// no config file exists.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_build_config(repo_root: &Path) -> Result<BuildConfig> {
    let path = repo_root.join(CONFIG_PATH);
    if !path.exists() {
        return Ok(BuildConfig::default());
    }
    let content = tokio::fs::read_to_string(&path).await?;
    Ok(serde_json::from_str(&content)?)
}
