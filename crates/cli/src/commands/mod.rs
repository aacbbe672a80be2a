mod config;
mod server;
mod stamp;
mod version;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use server::ServerArgs;
pub use server::handle_server;
pub use stamp::StampArgs;
pub use stamp::handle_stamp;
pub use version::VersionArgs;
pub use version::handle_version;
