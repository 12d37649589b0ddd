pub mod docker_mock;
pub mod doh_server_mock;
pub mod http_stub;
pub mod mock_ports;

pub use docker_mock::MockDockerDaemon;
pub use doh_server_mock::{DohBehavior, MockDohServer};
pub use mock_ports::{FixedUpstream, StaticDirectory, WEB_ID};
