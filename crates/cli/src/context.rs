use std::path::PathBuf;

use anyhow::Result;
use buildstamp_core::{BuildConfig, get_build_config};
use buildstamp_git::find_repo_root;
use clap::Args;

/// Configuration fields every command can override from the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Use this version instead of deriving one from git
    #[arg(long)]
    pub version_override: Option<String>,

    /// Fallback version when git has no usable tag information
    #[arg(long)]
    pub base_version: Option<String>,

    /// Server dependency constraint ("*" resolves the latest release)
    #[arg(long)]
    pub server_version: Option<String>,

    /// Enable server dependency resolution
    #[arg(long)]
    pub resolve_server: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut BuildConfig) {
        if let Some(version_override) = &self.version_override {
            config.version_override = Some(version_override.clone());
        }
        if let Some(base_version) = &self.base_version {
            config.base_version = base_version.clone();
        }
        if let Some(server_version) = &self.server_version {
            config.server_version = Some(server_version.clone());
        }
        if self.resolve_server {
            config.resolve_server = true;
        }
    }
}

/// Shared command state: repository root plus the effective configuration
/// after CLI overrides.
pub struct CommandContext {
    pub repo_root_path: PathBuf,
    pub config: BuildConfig,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory is not inside a git
    /// repository or the config file cannot be read.
    pub async fn new(overrides: &ConfigOverrides) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let repo_root_path = find_repo_root(&current_dir)?;
        let mut config = get_build_config(&repo_root_path).await?;
        overrides.apply(&mut config);

        Ok(Self {
            repo_root_path,
            config,
        })
    }
}
