//! Loopback HTTP fixtures shared by integration tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::JoinHandle;
use std::time::{SystemTime, UNIX_EPOCH};

#[path = "../../src/testsupport/framing.rs"]
mod framing;

use framing::{request_complete, split_request};
pub use framing::json_response;

static FIXTURE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Server thread that answers one connection per canned response, in order.
pub struct CannedServer {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

impl CannedServer {
    pub fn start(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = std::thread::spawn(move || {
            let mut bodies = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().expect("accept");
                bodies.push(read_body(&mut stream));
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
            bodies
        });
        Self {
            url: format!("http://{addr}/v1/chat/completions"),
            handle,
        }
    }

    /// Request bodies received, in order of arrival.
    pub fn bodies(self) -> Vec<String> {
        self.handle.join().expect("server thread")
    }
}

/// Write `content` to a fresh temp file and return its path.
pub fn write_temp_config(content: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let n = FIXTURE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "askgpt-it-{}-{nonce}-{n}.toml",
        std::process::id()
    ));
    std::fs::write(&path, content).expect("write temp config");
    path
}

fn read_body(stream: &mut std::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 4096];
    while !request_complete(&raw) {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => raw.extend_from_slice(&chunk[..n]),
        }
    }
    split_request(&raw).1
}
