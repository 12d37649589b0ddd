pub mod docker;
pub mod endpoint;

pub use docker::DockerWorkloadDirectory;
pub use endpoint::RuntimeEndpoint;
