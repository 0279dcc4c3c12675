//! HTTP/1.1 framing for the loopback test servers.
//!
//! Both the in-crate async server and the integration-test thread server
//! read requests through these functions.

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Build a complete HTTP/1.1 response with a JSON content type.
pub fn json_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Case-insensitive header lookup. The first line of `head` is the request
/// line and is skipped.
pub fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then(|| value.trim().to_string())
    })
}

fn head_end(raw: &[u8]) -> Option<usize> {
    raw.windows(HEAD_TERMINATOR.len())
        .position(|window| window == HEAD_TERMINATOR)
}

fn content_length(head: &str) -> usize {
    header_value(head, "content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// True once `raw` holds the full head and `Content-Length` body bytes.
pub fn request_complete(raw: &[u8]) -> bool {
    let Some(end) = head_end(raw) else {
        return false;
    };
    let head = String::from_utf8_lossy(&raw[..end]);
    raw.len() >= end + HEAD_TERMINATOR.len() + content_length(&head)
}

/// Split raw request bytes into head text and body text. Without a head
/// terminator everything is head.
pub fn split_request(raw: &[u8]) -> (String, String) {
    let Some(end) = head_end(raw) else {
        return (String::from_utf8_lossy(raw).into_owned(), String::new());
    };
    let head = String::from_utf8_lossy(&raw[..end]).into_owned();
    let start = end + HEAD_TERMINATOR.len();
    let stop = (start + content_length(&head)).min(raw.len());
    let body = String::from_utf8_lossy(&raw[start..stop]).into_owned();
    (head, body)
}
