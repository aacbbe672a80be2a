/// CI-provided short commit sha appended to the implementation-version
/// manifest attribute when present.
pub const COMMIT_SHA_ENV: &str = "COMMIT_SHA_SHORT";

/// Implementation-version attribute value: the resolved version, suffixed
/// with the short commit sha when one was provided.
pub fn implementation_version(version: &str, commit_sha: Option<&str>) -> String {
    match commit_sha.map(str::trim).filter(|sha| !sha.is_empty()) {
        Some(sha) => format!("{version}-{sha}"),
        None => version.to_string(),
    }
}

/// Env-reading wrapper around [`implementation_version`].
pub fn implementation_version_from_env(version: &str) -> String {
    let sha = std::env::var(COMMIT_SHA_ENV).ok();
    implementation_version(version, sha.as_deref())
}
