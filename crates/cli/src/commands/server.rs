use anyhow::Result;
use buildstamp_core::DependencyConstraint;
use buildstamp_remote::{HttpMetadataFetcher, ServerVersionResolver};
use clap::Args;
use colored::Colorize;

use crate::{
    context::{CommandContext, ConfigOverrides},
    options::FormatOptions,
};

#[derive(Args, Debug)]
#[command(about = "Resolve the server dependency version and its manifest form")]
pub struct ServerArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Explicitly requested resolution ignores the `resolveServer` gate; the
/// gate only controls the default stamp flow.
pub async fn handle_server(args: &ServerArgs) -> Result<()> {
    let context = CommandContext::new(&args.overrides).await?;

    let constraint = DependencyConstraint::new(context.config.server_version.clone());
    if constraint.raw.is_none() {
        args.format.print(
            &"No server version constraint configured".yellow().to_string(),
            "{}",
        );
        return Ok(());
    }

    let resolver = ServerVersionResolver::new(
        Box::new(HttpMetadataFetcher::new()?),
        context.config.server_metadata_url.clone(),
    );
    let resolved = resolver.resolve(&constraint).await;

    match args.format {
        FormatOptions::Stdout => {
            match &resolved.concrete {
                Some(concrete) => println!("{} {}", "version:".bold(), concrete),
                None => println!("{} {}", "version:".bold(), "unresolved".yellow()),
            }
            if let Some(manifest_form) = &resolved.manifest_form {
                println!("{} {}", "manifest:".bold(), manifest_form);
            }
        }
        FormatOptions::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "version": resolved.concrete,
                    "manifest": resolved.manifest_form,
                })
            );
        }
    }
    Ok(())
}
