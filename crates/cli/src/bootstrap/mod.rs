mod config;
mod logging;
mod runtime;

pub use config::load_config;
pub use logging::init_logging;
pub use runtime::connect_runtime;
