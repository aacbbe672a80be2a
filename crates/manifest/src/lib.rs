mod attributes;
mod constraint;
mod stamp;
mod timestamp;

pub use attributes::{COMMIT_SHA_ENV, implementation_version, implementation_version_from_env};
pub use constraint::format_constraint;
pub use stamp::BuildStamp;
pub use timestamp::utc_build_timestamp;
