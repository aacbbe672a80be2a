use anyhow::Result;
use buildstamp_core::{BuildIdentifier, DependencyConstraint};
use buildstamp_git::{GitCommandRunner, GitVersionResolver};
use buildstamp_manifest::{BuildStamp, implementation_version_from_env, utc_build_timestamp};
use buildstamp_remote::{HttpMetadataFetcher, ServerVersionResolver};
use clap::Args;
use colored::Colorize;

use crate::{
    context::{CommandContext, ConfigOverrides},
    options::FormatOptions,
};

#[derive(Args, Debug)]
#[command(about = "Resolve the full build identity and print the substitution map")]
pub struct StampArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Full resolution flow: version, revision, timestamp, optional server
/// dependency, then the composed build identifier.
pub async fn handle_stamp(args: &StampArgs) -> Result<()> {
    let context = CommandContext::new(&args.overrides).await?;
    let stamp = resolve_stamp(&context).await?;

    match args.format {
        FormatOptions::Stdout => {
            for (key, value) in stamp.substitution_map() {
                println!("{} {}", format!("{key}:").bold(), value);
            }
        }
        FormatOptions::Json => {
            println!("{}", serde_json::to_string_pretty(&stamp.substitution_map())?);
        }
    }
    Ok(())
}

pub(crate) async fn resolve_stamp(context: &CommandContext) -> Result<BuildStamp> {
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
    let revision = resolver.short_revision().await;
    let timestamp = utc_build_timestamp();

    let server_version = if context.config.resolve_server {
        let fetcher = HttpMetadataFetcher::new()?;
        let server_resolver = ServerVersionResolver::new(
            Box::new(fetcher),
            context.config.server_metadata_url.clone(),
        );
        let constraint = DependencyConstraint::new(context.config.server_version.clone());
        server_resolver.resolve(&constraint).await.manifest_form
    } else {
        None
    };

    let build_id =
        BuildIdentifier::new(version.value.clone(), timestamp.clone(), revision.clone())
            .to_string();
    let implementation_version = implementation_version_from_env(&version.value);

    Ok(BuildStamp {
        plugin_version: version.value,
        server_version,
        build_id,
        git_revision: revision,
        build_timestamp: timestamp,
        implementation_version,
    })
}
