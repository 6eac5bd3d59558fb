//! Single-request execution.
//!
//! # Responsibilities
//! - Perform one HTTP GET against the target
//! - Reduce the result to a `RequestOutcome`
//! - Drain and release the response on every path
//!
//! # Design Decisions
//! - Never returns an error: failures are folded into the outcome so one bad
//!   request cannot abort the batch
//! - One shared `reqwest::Client` so tasks reuse pooled connections
//! - No timeout of its own; the run waits for every request

use std::future::Future;

use reqwest::Client;

use crate::engine::outcome::RequestOutcome;

/// Executes a single request and classifies its result.
pub trait RequestExecutor: Send + Sync + 'static {
    fn execute(&self, url: &str) -> impl Future<Output = RequestOutcome> + Send;
}

/// Production executor backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl RequestExecutor for HttpExecutor {
    fn execute(&self, url: &str) -> impl Future<Output = RequestOutcome> + Send {
        let request = self.client.get(url);
        async move {
            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::debug!(error = %e, "Request failed before a status was received");
                    return RequestOutcome::TransportFailure;
                }
            };

            let status = response.status().as_u16();

            // Read the body to the end so the connection can go back to the pool.
            if let Err(e) = response.bytes().await {
                tracing::debug!(status, error = %e, "Failed to drain response body");
            }

            RequestOutcome::Status(status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn executor() -> HttpExecutor {
        HttpExecutor::with_client(Client::builder().no_proxy().build().unwrap())
    }

    async fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn unreachable_target_is_transport_failure() {
        let executor = executor();
        let url = closed_port_url().await;

        for _ in 0..3 {
            assert_eq!(executor.execute(&url).await, RequestOutcome::TransportFailure);
        }
    }

    #[tokio::test]
    async fn malformed_url_is_transport_failure() {
        let executor = executor();
        assert_eq!(executor.execute("not a url").await, RequestOutcome::TransportFailure);
        assert_eq!(executor.execute("ftp://example.com/").await, RequestOutcome::TransportFailure);
    }

    #[tokio::test]
    async fn garbage_response_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(b"definitely not http\r\n\r\n").await;
            let _ = socket.shutdown().await;
        });

        let outcome = executor().execute(&format!("http://{}/", addr)).await;
        assert_eq!(outcome, RequestOutcome::TransportFailure);
    }

    #[tokio::test]
    async fn non_success_status_passes_through() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 4\r\nConnection: close\r\n\r\nbusy")
                .await;
            let _ = socket.shutdown().await;
        });

        let outcome = executor().execute(&format!("http://{}/", addr)).await;
        assert_eq!(outcome, RequestOutcome::Status(503));
    }
}
