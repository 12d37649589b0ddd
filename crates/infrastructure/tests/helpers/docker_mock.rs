#![allow(dead_code)]
use super::http_stub::{respond, serve};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::net::UnixListener;
use tokio::sync::oneshot;

/// Fake Docker daemon listening on a Unix socket in a temp directory.
pub struct MockDockerDaemon {
    _dir: TempDir,
    socket_path: PathBuf,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDockerDaemon {
    /// Daemon answering `/_ping` and `/containers/json` with `inventory`.
    pub fn start(inventory: &str) -> Self {
        let mut routes = HashMap::new();
        routes.insert("/_ping".to_string(), (200, "OK".to_string()));
        routes.insert("/containers/json".to_string(), (200, inventory.to_string()));
        Self::with_routes(routes)
    }

    /// Daemon answering every path with `status` and `body`.
    pub fn failing(status: u16, body: &str) -> Self {
        let mut routes = HashMap::new();
        routes.insert("/_ping".to_string(), (status, body.to_string()));
        routes.insert("/containers/json".to_string(), (status, body.to_string()));
        Self::with_routes(routes)
    }

    /// Socket that accepts connections and never answers.
    pub fn silent() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("docker.sock");
        let listener = UnixListener::bind(&socket_path).unwrap();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let mut held = Vec::new();
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            held.push(stream);
                        }
                    }
                }
            }
        });

        Self {
            _dir: dir,
            socket_path,
            requests: Arc::new(Mutex::new(Vec::new())),
            shutdown_tx: Some(shutdown_tx),
        }
    }

    fn with_routes(routes: HashMap<String, (u16, String)>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("docker.sock");
        let listener = UnixListener::bind(&socket_path).unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let routes = Arc::new(routes);
        let seen = requests.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let routes = routes.clone();
                        let seen = seen.clone();
                        tokio::spawn(serve(stream, move |target: String| {
                            let routes = routes.clone();
                            let seen = seen.clone();
                            async move {
                                seen.lock().unwrap().push(target.clone());

                                let path = target.split('?').next().unwrap_or_default();
                                let (status, body) = routes
                                    .get(path)
                                    .cloned()
                                    .unwrap_or((404, "{\"message\":\"page not found\"}".to_string()));
                                respond(status, "application/json", body)
                            }
                        }));
                    }
                }
            }
        });

        Self {
            _dir: dir,
            socket_path,
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn endpoint(&self) -> String {
        format!("unix://{}", self.socket_path.display())
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockDockerDaemon {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
