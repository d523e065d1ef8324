use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use reqwest::Url;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::state::AppState;
use crate::upstream::BackendClient;

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(app: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

/// A base URL nothing is listening on, so connections are refused.
pub async fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn test_config(api_base_url: Url, upstream_timeout: Duration) -> Config {
    Config {
        api_base_url,
        upstream_timeout,
        service_port: 5000,
        service_host: "127.0.0.1".to_string(),
        debug: false,
    }
}

pub fn test_state(config: Config) -> AppState {
    let backend = BackendClient::from_config(&config).expect("Failed to create backend client");
    AppState {
        backend,
        config: Arc::new(config),
    }
}
