//! Shared test fixtures for config and client test modules.
//!
//! Keeping tiny but reusable helpers here prevents each test module from
//! rebuilding ad-hoc temp dir and canned HTTP server code.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

mod framing;

use framing::{header_value, request_complete, split_request};
pub use framing::json_response;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("askgpt-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// HTTP client for tests: no proxy lookup, optional overall timeout.
pub fn test_http_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().no_proxy();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().expect("test http client")
}

/// One request as received by [`CannedServer`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Request line plus header lines, CRLF separated.
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<String> {
        header_value(&self.head, name)
    }
}

/// Loopback server that answers one connection per canned response.
///
/// Connections are served concurrently; each connection gets the next
/// response in order of acceptance.
pub struct CannedServer {
    /// Completion endpoint URL on this server.
    pub url: String,
    handle: JoinHandle<Vec<CapturedRequest>>,
}

impl CannedServer {
    pub async fn start(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            let mut connections = Vec::new();
            for response in responses {
                let (stream, _) = listener.accept().await.expect("accept");
                connections.push(tokio::spawn(serve_one(stream, response)));
            }
            let mut captured = Vec::new();
            for connection in connections {
                captured.push(connection.await.expect("connection task"));
            }
            captured
        });
        Self {
            url: format!("http://{addr}/v1/chat/completions"),
            handle,
        }
    }

    /// Wait for every canned response to be served and return the requests.
    pub async fn requests(self) -> Vec<CapturedRequest> {
        self.handle.await.expect("canned server task")
    }
}

async fn serve_one(mut stream: TcpStream, response: String) -> CapturedRequest {
    let request = read_request(&mut stream).await;
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
    request
}

async fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 4096];
    while !request_complete(&raw) {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..n]);
    }
    let (head, body) = split_request(&raw);
    CapturedRequest { head, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert!(file.starts_with(fixture.path()));
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn json_response_sets_content_length() {
        let raw = json_response("200 OK", "{}");
        assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(raw.contains("Content-Length: 2\r\n"));
        assert!(raw.ends_with("\r\n\r\n{}"));
    }

    #[test]
    fn request_framing_waits_for_declared_body() {
        let raw = b"POST /v1 HTTP/1.1\r\ncontent-length: 5\r\n\r\nab";
        assert!(!request_complete(raw));
        assert!(!request_complete(b"POST /v1 HTTP/1.1\r\nHost: x"));

        let raw = b"POST /v1 HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
        assert!(request_complete(raw));
        let (head, body) = split_request(raw);
        assert_eq!(head, "POST /v1 HTTP/1.1\r\nContent-Length: 5");
        assert_eq!(body, "hello");
    }

    #[test]
    fn request_without_terminator_is_all_head() {
        let (head, body) = split_request(b"GET / HTTP/1.1");
        assert_eq!(head, "GET / HTTP/1.1");
        assert!(body.is_empty());
    }

    #[test]
    fn captured_header_lookup_ignores_case() {
        let request = CapturedRequest {
            head: "POST / HTTP/1.1\r\ncontent-type: application/json\r\nHost: x".to_string(),
            body: String::new(),
        };
        assert_eq!(
            request.header("Content-Type").as_deref(),
            Some("application/json")
        );
        assert!(request.header("authorization").is_none());
    }
}
