//! In-process Cadenza instance for end-to-end tests

use cadenza_config::Config;
use cadenza_server::Server;
use tokio_util::sync::CancellationToken;

/// A Cadenza server running on an ephemeral local port
pub struct TestServer {
    base_url: String,
    client: reqwest::Client,
    shutdown: CancellationToken,
}

impl TestServer {
    /// Boot the server against its own listener
    ///
    /// The listener is bound here, on port 0, so the actual port is
    /// known before the serve task starts.
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let router = Server::new(&config)?.into_router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let shutdown = CancellationToken::new();
        let serve_shutdown = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    serve_shutdown.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
            shutdown,
        })
    }

    /// Absolute URL for a path on the running server
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Plain HTTP client; cookies are managed by each test
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
