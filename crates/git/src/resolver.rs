use std::path::PathBuf;
use std::time::Duration;

use buildstamp_core::{
    ProcessRunner, ResolvedVersion, UNKNOWN_REVISION, VersionDescriptor, VersionSource,
};

const DESCRIBE_TIMEOUT: Duration = Duration::from_secs(5);
const REVISION_TIMEOUT: Duration = Duration::from_secs(3);

/// Derives the effective version and short revision from git state.
///
/// Nothing here is ever a hard error: a missing binary, timeout, non-zero
/// exit or unparseable output just moves resolution to the next-lower
/// precedence source.
#[derive(Debug)]
pub struct GitVersionResolver {
    runner: Box<dyn ProcessRunner>,
    repo_root: PathBuf,
}

impl GitVersionResolver {
    pub fn new(runner: Box<dyn ProcessRunner>, repo_root: PathBuf) -> Self {
        Self { runner, repo_root }
    }

    /// Precedence, highest first: non-blank explicit override, git-derived
    /// version, then the static default.
    pub async fn resolve(
        &self,
        explicit_override: Option<&str>,
        base_default: &str,
    ) -> ResolvedVersion {
        if let Some(value) = explicit_override.map(str::trim).filter(|v| !v.is_empty()) {
            return ResolvedVersion {
                value: value.to_string(),
                source: VersionSource::ExplicitOverride,
            };
        }
        if let Some(descriptor) = self.describe().await {
            return ResolvedVersion {
                value: descriptor.version(),
                source: VersionSource::GitDerived,
            };
        }
        ResolvedVersion {
            value: base_default.to_string(),
            source: VersionSource::StaticDefault,
        }
    }

    async fn describe(&self) -> Option<VersionDescriptor> {
        let output = self
            .runner
            .run(
                "git",
                &["describe", "--tags", "--long", "--dirty"],
                &self.repo_root,
                DESCRIBE_TIMEOUT,
            )
            .await
            .ok()?;
        if !output.success() {
            return None;
        }
        let describe = output.stdout.trim();
        if describe.is_empty() {
            return None;
        }
        Some(VersionDescriptor::parse(describe))
    }

    /// Short hash of HEAD, or the literal `unknown` when git cannot answer.
    pub async fn short_revision(&self) -> String {
        let Ok(output) = self
            .runner
            .run(
                "git",
                &["rev-parse", "--short", "HEAD"],
                &self.repo_root,
                REVISION_TIMEOUT,
            )
            .await
        else {
            return UNKNOWN_REVISION.to_string();
        };
        if !output.success() {
            return UNKNOWN_REVISION.to_string();
        }
        let revision = output.stdout.trim();
        if revision.is_empty() {
            UNKNOWN_REVISION.to_string()
        } else {
            revision.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use buildstamp_core::CommandOutput;
    use std::path::Path;

    /// Canned runner: one response for describe, one for rev-parse.
    #[derive(Debug)]
    struct MockRunner {
        describe: Result<CommandOutput>,
        rev_parse: Result<CommandOutput>,
    }

    impl MockRunner {
        fn describing(stdout: &str) -> Self {
            Self {
                describe: Ok(ok_output(stdout)),
                rev_parse: Ok(ok_output("abc1234\n")),
            }
        }

        fn failing() -> Self {
            Self {
                describe: Err(anyhow!("launch failed")),
                rev_parse: Err(anyhow!("launch failed")),
            }
        }

        fn exiting_nonzero() -> Self {
            Self {
                describe: Ok(CommandOutput {
                    exit_code: Some(128),
                    stdout: "fatal: no names found\n".to_string(),
                }),
                rev_parse: Ok(CommandOutput {
                    exit_code: Some(128),
                    stdout: String::new(),
                }),
            }
        }
    }

    fn ok_output(stdout: &str) -> CommandOutput {
        CommandOutput {
            exit_code: Some(0),
            stdout: stdout.to_string(),
        }
    }

    fn clone_result(result: &Result<CommandOutput>) -> Result<CommandOutput> {
        match result {
            Ok(output) => Ok(output.clone()),
            Err(e) => Err(anyhow!("{e}")),
        }
    }

    #[async_trait]
    impl ProcessRunner for MockRunner {
        async fn run(
            &self,
            _program: &str,
            args: &[&str],
            _cwd: &Path,
            _timeout: Duration,
        ) -> Result<CommandOutput> {
            if args.first() == Some(&"describe") {
                clone_result(&self.describe)
            } else {
                clone_result(&self.rev_parse)
            }
        }
    }

    fn resolver(runner: MockRunner) -> GitVersionResolver {
        GitVersionResolver::new(Box::new(runner), PathBuf::from("."))
    }

    #[tokio::test]
    async fn test_explicit_override_wins() {
        let resolver = resolver(MockRunner::describing("v1.2.3-0-gabcdef\n"));
        let resolved = resolver.resolve(Some("9.9.9"), "0.1.0").await;
        assert_eq!(resolved.value, "9.9.9");
        assert_eq!(resolved.source, VersionSource::ExplicitOverride);
    }

    #[tokio::test]
    async fn test_explicit_override_is_idempotent() {
        let resolver = resolver(MockRunner::describing("v1.2.3-0-gabcdef\n"));
        let first = resolver.resolve(Some("9.9.9"), "0.1.0").await;
        let second = resolver.resolve(Some("9.9.9"), "0.1.0").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_blank_override_falls_through_to_git() {
        let resolver = resolver(MockRunner::describing("v1.2.3-5-gabcdef\n"));
        let resolved = resolver.resolve(Some("   "), "0.1.0").await;
        assert_eq!(resolved.value, "1.2.3-dev-5");
        assert_eq!(resolved.source, VersionSource::GitDerived);
    }

    #[tokio::test]
    async fn test_git_derived_clean_tag() {
        let resolver = resolver(MockRunner::describing("v1.2.3-0-gabcdef\n"));
        let resolved = resolver.resolve(None, "0.1.0").await;
        assert_eq!(resolved.value, "1.2.3");
        assert_eq!(resolved.source, VersionSource::GitDerived);
    }

    #[tokio::test]
    async fn test_git_derived_dirty_zero_distance() {
        let resolver = resolver(MockRunner::describing("v1.2.3-0-gabcdef-dirty\n"));
        let resolved = resolver.resolve(None, "0.1.0").await;
        assert_eq!(resolved.value, "1.2.3-dev");
    }

    #[tokio::test]
    async fn test_launch_failure_falls_back_to_default() {
        let resolver = resolver(MockRunner::failing());
        let resolved = resolver.resolve(None, "0.1.0").await;
        assert_eq!(resolved.value, "0.1.0");
        assert_eq!(resolved.source, VersionSource::StaticDefault);
    }

    #[tokio::test]
    async fn test_nonzero_exit_falls_back_to_default() {
        let resolver = resolver(MockRunner::exiting_nonzero());
        let resolved = resolver.resolve(None, "0.1.0").await;
        assert_eq!(resolved.value, "0.1.0");
        assert_eq!(resolved.source, VersionSource::StaticDefault);
    }

    #[tokio::test]
    async fn test_blank_describe_output_falls_back_to_default() {
        let resolver = resolver(MockRunner::describing("   \n"));
        let resolved = resolver.resolve(None, "0.1.0").await;
        assert_eq!(resolved.source, VersionSource::StaticDefault);
    }

    #[tokio::test]
    async fn test_short_revision() {
        let resolver = resolver(MockRunner::describing("v1.2.3-0-gabcdef\n"));
        assert_eq!(resolver.short_revision().await, "abc1234");
    }

    #[tokio::test]
    async fn test_short_revision_unknown_on_failure() {
        let resolver = resolver(MockRunner::failing());
        assert_eq!(resolver.short_revision().await, UNKNOWN_REVISION);
    }

    #[tokio::test]
    async fn test_short_revision_unknown_on_nonzero_exit() {
        let resolver = resolver(MockRunner::exiting_nonzero());
        assert_eq!(resolver.short_revision().await, UNKNOWN_REVISION);
    }
}
