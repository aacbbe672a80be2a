mod repo;
mod resolver;
mod runner;

pub use repo::find_repo_root;
pub use resolver::GitVersionResolver;
pub use runner::GitCommandRunner;
