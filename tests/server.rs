//! End-to-end tests over a real socket.
//!
//! Run with: cargo test --test server

use std::net::{IpAddr, Ipv4Addr};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use bluegreen::config::HttpServerConfig;
use bluegreen::http::{bind, serve, ServerError};
use bluegreen::templates::init_templates;
use bluegreen::{create_router, AppConfig, AppState};

fn loopback(port: u16) -> HttpServerConfig {
    HttpServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port,
    }
}

async fn raw_get(port: u16, path: &str) -> String {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn serves_health_and_shuts_down_gracefully() {
    let config = AppConfig::from_lookup(|key| match key {
        "VERSION" => Some("green".to_string()),
        _ => None,
    })
    .unwrap();
    let app = create_router(AppState::new(config, init_templates().unwrap()));

    let listener = bind(&loopback(0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, app, async move {
        let _ = stop_rx.await;
    }));

    let response = raw_get(port, "/health").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.ends_with(r#"{"status":"healthy","version":"green"}"#));

    let response = raw_get(port, "/").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("GREEN Version"));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn bind_failure_is_reported() {
    let taken = bind(&loopback(0)).await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let err = bind(&loopback(port)).await.unwrap_err();
    assert!(matches!(err, ServerError::Bind { addr, .. } if addr.port() == port));
}
