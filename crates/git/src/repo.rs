use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gix::discover;

/// Locate the work-tree root of the repository containing `current_dir`
/// using gix discovery.
///
/// # Errors
/// Returns error if `current_dir` is not inside a git working directory.
pub fn find_repo_root(current_dir: &Path) -> Result<PathBuf> {
    let repo = discover(current_dir)?.into_sync();
    let root = repo
        .work_dir()
        .context("Not a git working directory. Ensure you are inside a git repository.")?
        .to_path_buf();
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_git_repo(path: &Path) {
        std::process::Command::new("git")
            .arg("init")
            .current_dir(path)
            .output()
            .unwrap();
    }

    #[test]
    fn test_find_repo_root_success() {
        let temp_dir = TempDir::new().unwrap();
        init_git_repo(temp_dir.path());

        let root = find_repo_root(temp_dir.path()).unwrap();
        assert!(root.join(".git").exists());
    }

    #[test]
    fn test_find_repo_root_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        init_git_repo(temp_dir.path());

        let nested = temp_dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let root = find_repo_root(&nested).unwrap();
        assert_eq!(
            root.canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_find_repo_root_without_git_repo() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_repo_root(temp_dir.path()).is_err());
    }
}
