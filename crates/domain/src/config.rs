pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod runtime;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use runtime::RuntimeConfig;
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

/// Lower and upper bound, in seconds, for every collaborator timeout.
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 30;

pub(crate) fn clamp_timeout(secs: u64) -> u64 {
    secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
}
