//! Read-only client for the Docker Engine API.
//!
//! One HTTP/1.1 connection per request, over the Unix socket or plain TCP.
//! Nothing is cached: every lookup lists the inventory again.

use super::endpoint::RuntimeEndpoint;
use async_trait::async_trait;
use berth_dns_application::ports::WorkloadDirectory;
use berth_dns_domain::{DomainError, Workload, WorkloadStatus};
use bytes::Bytes;
use http::{header, Method, Request, StatusCode};
use http_body_util::{BodyExt, Empty, LengthLimitError, Limited};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpStream, UnixStream};
use tracing::{debug, instrument};

const CONTAINERS_PATH: &str = "/containers/json";
const PING_PATH: &str = "/_ping";
const MAX_ERROR_BODY: usize = 256;
const DEFAULT_MAX_BODY: usize = 8 * 1024 * 1024;

/// Subset of the `/containers/json` summary we rely on.
#[derive(Debug, Deserialize)]
struct ContainerSummary {
    #[serde(rename = "Id")]
    id: String,

    #[serde(rename = "Names", default)]
    names: Option<Vec<String>>,

    #[serde(rename = "State", default)]
    state: Option<String>,

    #[serde(rename = "Status", default)]
    status: Option<String>,
}

impl ContainerSummary {
    /// `State` when the daemon reports it; older daemons only have the
    /// human `Status`, where running containers read `Up 5 minutes`.
    fn workload_status(&self) -> WorkloadStatus {
        if let Some(state) = self.state.as_deref().filter(|s| !s.is_empty()) {
            return state.parse().unwrap_or(WorkloadStatus::Unknown);
        }
        match self.status.as_deref() {
            Some(status) if status.starts_with("Up") => WorkloadStatus::Running,
            _ => WorkloadStatus::Unknown,
        }
    }

    fn into_workload(self) -> Workload {
        let status = self.workload_status();
        Workload::new(self.id, status, self.names.unwrap_or_default())
    }
}

pub struct DockerWorkloadDirectory {
    endpoint: RuntimeEndpoint,
    timeout: Duration,
    max_body: usize,
}

impl DockerWorkloadDirectory {
    pub fn new(endpoint: RuntimeEndpoint, timeout: Duration) -> Self {
        Self {
            endpoint,
            timeout,
            max_body: DEFAULT_MAX_BODY,
        }
    }

    /// Caps the size of any response body read from the daemon.
    pub fn with_max_body(mut self, max_body: usize) -> Self {
        self.max_body = max_body;
        self
    }

    pub fn endpoint(&self) -> &RuntimeEndpoint {
        &self.endpoint
    }

    /// Checks that the daemon answers `GET /_ping`.
    pub async fn ping(&self) -> Result<(), DomainError> {
        let (status, body) = self.get(PING_PATH).await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        debug!(endpoint = %self.endpoint, "Container runtime reachable");
        Ok(())
    }

    /// Parses a `/containers/json` body, keeping running containers only.
    pub fn parse_inventory(body: &[u8]) -> Result<Vec<Workload>, DomainError> {
        let summaries: Vec<ContainerSummary> = serde_json::from_slice(body)
            .map_err(|e| DomainError::RuntimeResponse(e.to_string()))?;

        Ok(summaries
            .into_iter()
            .map(ContainerSummary::into_workload)
            .filter(Workload::is_running)
            .collect())
    }

    async fn get(&self, path: &str) -> Result<(StatusCode, Bytes), DomainError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(header::HOST, "docker")
            .header(header::ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())
            .map_err(|e| DomainError::RuntimeResponse(e.to_string()))?;

        let exchange = async {
            match &self.endpoint {
                RuntimeEndpoint::Unix(path) => {
                    let stream = UnixStream::connect(path)
                        .await
                        .map_err(|e| self.unavailable(e))?;
                    self.send(stream, request).await
                }
                RuntimeEndpoint::Tcp(authority) => {
                    let stream = TcpStream::connect(authority.as_str())
                        .await
                        .map_err(|e| self.unavailable(e))?;
                    self.send(stream, request).await
                }
            }
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| DomainError::RuntimeTimeout {
                endpoint: self.endpoint.to_string(),
            })?
    }

    async fn send<S>(
        &self,
        stream: S,
        request: Request<Empty<Bytes>>,
    ) -> Result<(StatusCode, Bytes), DomainError>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
            .await
            .map_err(|e| self.unavailable(e))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                debug!(error = %e, "Runtime connection closed with error");
            }
        });

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| self.unavailable(e))?;

        let status = response.status();
        let body = Limited::new(response.into_body(), self.max_body)
            .collect()
            .await
            .map_err(|e| {
                if e.downcast_ref::<LengthLimitError>().is_some() {
                    DomainError::RuntimeResponse(format!(
                        "response body exceeds {} bytes",
                        self.max_body
                    ))
                } else {
                    self.unavailable(e)
                }
            })?
            .to_bytes();

        Ok((status, body))
    }

    fn unavailable(&self, e: impl std::fmt::Display) -> DomainError {
        DomainError::RuntimeUnavailable {
            endpoint: self.endpoint.to_string(),
            reason: e.to_string(),
        }
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> DomainError {
    let body = String::from_utf8_lossy(body);
    let body: String = body.trim().chars().take(MAX_ERROR_BODY).collect();
    DomainError::RuntimeStatus {
        status: status.as_u16(),
        body,
    }
}

#[async_trait]
impl WorkloadDirectory for DockerWorkloadDirectory {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn list_running_workloads(&self) -> Result<Vec<Workload>, DomainError> {
        let (status, body) = self.get(CONTAINERS_PATH).await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let workloads = Self::parse_inventory(&body)?;
        debug!(running = workloads.len(), "Listed running containers");
        Ok(workloads)
    }
}
