//! UDP listener lifecycle: `Created -> Bound -> Serving -> Stopped`, with `Failed` when the
//! socket cannot be bound.
//!
//! Datagrams are handled one at a time on the serve loop; there is no worker pool. The record
//! store lock is only held for lookups, never across the socket write.

use super::handler::DnsRequestHandler;
use crate::storage::JsonFileRecordStore;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use stubzone_application::ports::RecordStore;
use stubzone_application::use_cases::ResolveQueryUseCase;
use stubzone_domain::DomainError;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const MAX_DATAGRAM_SIZE: usize = 4096;
const PRIVILEGED_PORT_LIMIT: u16 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Created,
    Bound,
    Serving,
    Stopped,
    Failed,
}

pub struct DnsServer {
    address: String,
    port: u16,
    port_fallback: u16,
    store: Arc<dyn RecordStore>,
    handler: DnsRequestHandler,
    shutdown: CancellationToken,
    state: watch::Sender<ServerState>,
    local_addr: OnceLock<SocketAddr>,
}

impl DnsServer {
    /// Opens the record store at `storage_path`; no socket is bound yet.
    pub fn new(
        address: impl Into<String>,
        port: u16,
        storage_path: impl AsRef<Path>,
    ) -> Result<Self, DomainError> {
        let store = JsonFileRecordStore::open(storage_path)?;
        Ok(Self::with_store(address, port, Arc::new(store)))
    }

    /// Builds a server around an existing store handle, shared with administrative callers.
    pub fn with_store(address: impl Into<String>, port: u16, store: Arc<dyn RecordStore>) -> Self {
        let resolver = Arc::new(ResolveQueryUseCase::new(Arc::clone(&store)));
        let (state, _) = watch::channel(ServerState::Created);

        Self {
            address: address.into(),
            port,
            port_fallback: 0,
            store,
            handler: DnsRequestHandler::new(resolver),
            shutdown: CancellationToken::new(),
            state,
            local_addr: OnceLock::new(),
        }
    }

    /// Tries up to `attempts` consecutive ports after the configured one when it is busy.
    /// Only applies to ports above 1024.
    pub fn with_port_fallback(mut self, attempts: u16) -> Self {
        self.port_fallback = attempts;
        self
    }

    pub fn store(&self) -> Arc<dyn RecordStore> {
        Arc::clone(&self.store)
    }

    pub fn state(&self) -> ServerState {
        *self.state.borrow()
    }

    /// Address actually bound, available once the server reached `Bound`.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr.get().copied()
    }

    /// Waits until the serve loop is running and returns the bound address.
    pub async fn wait_until_serving(&self) -> Result<SocketAddr, DomainError> {
        let mut rx = self.state.subscribe();
        let state = *rx
            .wait_for(|s| !matches!(s, ServerState::Created | ServerState::Bound))
            .await
            .map_err(|e| DomainError::TransportError(e.to_string()))?;

        match state {
            ServerState::Serving => self
                .local_addr()
                .ok_or_else(|| DomainError::TransportError("no bound address".to_string())),
            other => Err(DomainError::TransportError(format!(
                "server is {:?}, not serving",
                other
            ))),
        }
    }

    /// Binds the UDP listener and serves until `stop()` or a fatal transport error.
    ///
    /// A server stopped before it was started returns immediately without binding.
    pub async fn start(&self) -> Result<(), DomainError> {
        match self.state() {
            ServerState::Created => {}
            ServerState::Stopped if self.local_addr().is_none() => return Ok(()),
            other => {
                return Err(DomainError::TransportError(format!(
                    "server cannot start from state {:?}",
                    other
                )))
            }
        }

        let socket = match self.bind().await {
            Ok(socket) => socket,
            Err(e) => {
                error!(error = %e, "DNS server failed to bind");
                self.state.send_replace(ServerState::Failed);
                return Err(e);
            }
        };

        let addr = socket
            .local_addr()
            .map_err(|e| DomainError::TransportError(e.to_string()))?;
        let _ = self.local_addr.set(addr);
        self.state.send_replace(ServerState::Bound);

        info!(bind_address = %addr, "Starting DNS server");
        self.state.send_replace(ServerState::Serving);

        let result = self.serve(socket).await;
        self.state.send_replace(ServerState::Stopped);

        match &result {
            Ok(()) => info!(bind_address = %addr, "DNS server stopped"),
            Err(e) => error!(error = %e, "DNS server terminated"),
        }

        result
    }

    /// Unblocks a running `start()`. Idempotent, and a no-op on a server never started
    /// beyond marking it stopped.
    pub fn stop(&self) {
        self.shutdown.cancel();
        self.state.send_if_modified(|state| {
            if *state == ServerState::Created {
                *state = ServerState::Stopped;
                true
            } else {
                false
            }
        });
    }

    /// Serves until SIGINT/SIGTERM or a fatal serve-loop error, whichever comes first.
    pub async fn start_with_signal_handling(self: Arc<Self>) -> Result<(), DomainError> {
        self.run_until(wait_for_termination_signal()).await
    }

    pub async fn run_until_terminated(self: Arc<Self>) -> Result<(), DomainError> {
        self.start_with_signal_handling().await
    }

    /// Runs `start()` on its own task and races it against `shutdown`.
    ///
    /// On shutdown the server is stopped and the serve task awaited, so the socket is closed
    /// before this returns. On a serve error the error is returned as is.
    pub async fn run_until<F>(self: Arc<Self>, shutdown: F) -> Result<(), DomainError>
    where
        F: Future<Output = ()> + Send,
    {
        let server = Arc::clone(&self);
        let mut serve_task = tokio::spawn(async move { server.start().await });

        tokio::select! {
            joined = &mut serve_task => {
                self.stop();
                Self::flatten(joined)
            }
            _ = shutdown => {
                info!("Shutting down DNS server...");
                self.stop();
                Self::flatten(serve_task.await)
            }
        }
    }

    fn flatten(joined: Result<Result<(), DomainError>, JoinError>) -> Result<(), DomainError> {
        joined.map_err(|e| DomainError::TransportError(format!("serve task failed: {}", e)))?
    }

    async fn bind(&self) -> Result<UdpSocket, DomainError> {
        let first_error = match UdpSocket::bind((self.address.as_str(), self.port)).await {
            Ok(socket) => return Ok(socket),
            Err(e) => e,
        };

        if self.port_fallback > 0 && self.port > PRIVILEGED_PORT_LIMIT {
            let last = self.port.saturating_add(self.port_fallback);
            for port in self.port.saturating_add(1)..=last {
                if let Ok(socket) = UdpSocket::bind((self.address.as_str(), port)).await {
                    warn!(
                        requested = self.port,
                        port,
                        "Requested port was busy, using fallback port"
                    );
                    return Ok(socket);
                }
            }
        }

        Err(DomainError::BindError {
            addr: format!("{}:{}", self.address, self.port),
            reason: first_error.to_string(),
        })
    }

    async fn serve(&self, socket: UdpSocket) -> Result<(), DomainError> {
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];

        loop {
            let (len, peer) = tokio::select! {
                _ = self.shutdown.cancelled() => return Ok(()),
                received = socket.recv_from(&mut buf) => match received {
                    Ok(received) => received,
                    Err(e) if is_transient(&e) => {
                        debug!(error = %e, "Transient UDP recv error");
                        continue;
                    }
                    Err(e) => {
                        return Err(DomainError::TransportError(format!("UDP recv failed: {}", e)));
                    }
                },
            };

            let Some(reply) = self.handler.handle_datagram(&buf[..len]).await else {
                continue;
            };

            if let Err(e) = socket.send_to(&reply, peer).await {
                warn!(error = %e, client = %peer, "Failed to send DNS response");
            }
        }
    }
}

/// ICMP-induced errors surface on the next recv of an unconnected UDP socket.
fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
    )
}

/// Resolves on the first SIGINT or SIGTERM.
pub async fn wait_for_termination_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT"),
            Err(e) => {
                error!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM");
            }
            Err(e) => {
                error!(error = %e, "Failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(is_transient(&io::Error::from(io::ErrorKind::ConnectionRefused)));
        assert!(is_transient(&io::Error::from(io::ErrorKind::Interrupted)));
        assert!(!is_transient(&io::Error::from(io::ErrorKind::PermissionDenied)));
    }
}
