use anyhow::Result;
use buildstamp_git::{GitCommandRunner, GitVersionResolver};
use clap::Args;
use colored::Colorize;

use crate::{
    context::{CommandContext, ConfigOverrides},
    options::FormatOptions,
};

#[derive(Args, Debug)]
#[command(about = "Resolve and print the effective version")]
pub struct VersionArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

pub async fn handle_version(args: &VersionArgs) -> Result<()> {
    let context = CommandContext::new(&args.overrides).await?;
    let resolver = GitVersionResolver::new(
        Box::new(GitCommandRunner),
        context.repo_root_path.clone(),
    );
    let version = resolver
        .resolve(
            context.config.version_override.as_deref(),
            &context.config.base_version,
        )
        .await;

    match args.format {
        FormatOptions::Stdout => {
            println!(
                "{} {}",
                version.value,
                format!("({})", version.source).dimmed()
            );
        }
        FormatOptions::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "version": version.value,
                    "source": version.source,
                })
            );
        }
    }
    Ok(())
}
