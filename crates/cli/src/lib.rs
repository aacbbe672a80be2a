use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    commands::{
        ConfigArgs, ServerArgs, StampArgs, VersionArgs, handle_config, handle_server,
        handle_stamp, handle_version,
    },
    options::FormatOptions,
};

pub mod commands;
mod context;
pub mod options;

pub use context::{CommandContext, ConfigOverrides};

#[derive(Parser, Debug)]
#[command(
    name = "buildstamp",
    author,
    version,
    about = "Build-identity resolution: derive versions, build ids and manifest constraints from git state",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Version(VersionArgs),
    Server(ServerArgs),
    Config(ConfigArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Version(args) => handle_version(&args).await?,
            Commands::Server(args) => handle_server(&args).await?,
            Commands::Config(args) => handle_config(&args).await?,
        }
    } else {
        handle_stamp(&StampArgs {
            overrides: cli.overrides,
            format: cli.format,
        })
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_default() {
        let cli = Cli::parse_from(["buildstamp"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::parse_from(["buildstamp", "version"]);
        assert!(matches!(cli.command, Some(Commands::Version(_))));
    }

    #[test]
    fn test_cli_parsing_server() {
        let cli = Cli::parse_from(["buildstamp", "server", "--server-version", "*"]);
        let Some(Commands::Server(args)) = cli.command else {
            panic!("expected server command");
        };
        assert_eq!(args.overrides.server_version.as_deref(), Some("*"));
    }

    #[test]
    fn test_cli_parsing_config() {
        let cli = Cli::parse_from(["buildstamp", "config"]);
        assert!(matches!(cli.command, Some(Commands::Config(_))));
    }

    #[test]
    fn test_cli_parsing_default_with_overrides() {
        let cli = Cli::parse_from([
            "buildstamp",
            "--version-override",
            "9.9.9",
            "--resolve-server",
            "--format",
            "json",
        ]);
        assert!(cli.command.is_none());
        assert_eq!(cli.overrides.version_override.as_deref(), Some("9.9.9"));
        assert!(cli.overrides.resolve_server);
        assert!(matches!(cli.format, FormatOptions::Json));
    }

    #[test]
    fn test_cli_parsing_version_with_base_version() {
        let cli = Cli::parse_from(["buildstamp", "version", "--base-version", "2.0.0"]);
        let Some(Commands::Version(args)) = cli.command else {
            panic!("expected version command");
        };
        assert_eq!(args.overrides.base_version.as_deref(), Some("2.0.0"));
    }
}
