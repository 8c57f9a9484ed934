//! HttpFetcher against a throwaway HTTP server on loopback.

use std::io::{Read, Write};
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use parcel_grid::core::Grid;
use parcel_grid::ingest::{ingest, HttpFetcher, IngestConfig, IngestError, IngestEvent, Ingestor};

#[derive(Serialize)]
struct PayloadFixture {
    parcels: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct ParcelFixture {
    id: i64,
    x1: i32,
    y1: i32,
    z1: i32,
    x2: i32,
    y2: i32,
    z2: i32,
}

fn fixture_body() -> String {
    let good = |id, x1, z1| ParcelFixture {
        id,
        x1,
        y1: 0,
        z1,
        x2: x1 + 10,
        y2: 5,
        z2: z1 + 20,
    };
    let payload = PayloadFixture {
        parcels: vec![
            serde_json::to_value(good(1, 0, 0)).unwrap(),
            serde_json::json!({"id": 2, "x1": "zero"}),
            serde_json::to_value(good(3, 40, 40)).unwrap(),
        ],
    };
    serde_json::to_string(&payload).unwrap()
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve exactly one request with a canned response.
async fn serve_once(status_line: &'static str, body: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut seen = Vec::new();
        let mut buf = [0u8; 1024];
        while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(http_response(status_line, &body).as_bytes())
            .await
            .unwrap();
        let _ = stream.shutdown().await;
    });
    addr
}

#[tokio::test]
async fn http_fetch_populates_grid() {
    let addr = serve_once("200 OK", fixture_body()).await;
    let url = format!("http://{addr}/test.json");
    let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).unwrap();
    let grid = Grid::new();

    let report = ingest(&fetcher, &url, &grid).await.unwrap();

    assert_eq!(report.appended, 2);
    assert_eq!(report.skipped_count(), 1);
    let snapshot = grid.snapshot();
    assert_eq!(snapshot[0].id, Some(1));
    assert_eq!(snapshot[1].id, Some(3));
    assert_eq!((snapshot[1].x1, snapshot[1].z2), (40, 60));
}

#[tokio::test]
async fn http_error_status_is_reported_with_code() {
    let addr = serve_once("404 Not Found", r#"{"error":"nope"}"#.to_string()).await;
    let url = format!("http://{addr}/test.json");
    let fetcher = HttpFetcher::new(None).unwrap();
    let grid = Grid::new();

    let err = ingest(&fetcher, &url, &grid).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.to_string(),
        format!("downloading {url} failed: HTTP failure status code: 404")
    );
    assert!(grid.is_empty());
}

#[tokio::test]
async fn non_json_body_is_invalid_payload() {
    let addr = serve_once("200 OK", "<html>not json</html>".to_string()).await;
    let url = format!("http://{addr}/test.json");
    let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).unwrap();
    let grid = Grid::new();

    let err = ingest(&fetcher, &url, &grid).await.unwrap_err();
    assert!(matches!(err, IngestError::InvalidPayload { .. }));
    assert!(grid.is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_failure() {
    // Bind then drop to get a loopback port nobody listens on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let url = format!("http://{addr}/test.json");
    let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).unwrap();
    let grid = Grid::new();

    let err = ingest(&fetcher, &url, &grid).await.unwrap_err();
    assert!(matches!(err, IngestError::TransportFailure { status: None, .. }));
    // The root cause from the socket layer reaches the message.
    let message = err.to_string().to_lowercase();
    assert!(message.contains("refused"), "{message}");
    assert!(grid.is_empty());
}

#[test]
fn ingestor_downloads_in_the_background() {
    // Blocking server on a plain thread; the ingestor brings its own runtime.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let body = fixture_body();
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut seen = Vec::new();
        let mut buf = [0u8; 1024];
        while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(http_response("200 OK", &body).as_bytes())
            .unwrap();
    });

    let grid = Grid::new();
    let config = IngestConfig {
        url: format!("http://{addr}/test.json"),
        timeout: Some(Duration::from_secs(5)),
    };
    let mut ingestor = Ingestor::start(config, grid.clone()).unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    let event = loop {
        if let Some(event) = ingestor.try_recv() {
            break event;
        }
        assert!(Instant::now() < deadline, "ingestion did not finish");
        std::thread::sleep(Duration::from_millis(10));
    };

    match event {
        IngestEvent::Completed(report) => {
            assert_eq!(report.appended, 2);
            assert_eq!(report.skipped_count(), 1);
        }
        IngestEvent::Failed(err) => panic!("unexpected failure: {err}"),
    }
    assert_eq!(grid.len(), 2);
    server.join().unwrap();
}
