//! HTTP response types and wire framing

use crate::Result;
use smallvec::SmallVec;

/// HTTP Status Code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const FOUND: StatusCode = StatusCode(302);

    /// Get the numeric code
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Get the reason phrase
    pub fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            302 => "Found",
            _ => "Unknown",
        }
    }

    /// Check if this is a success status (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Check if this is a redirect status (3xx)
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.0)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

/// HTTP Response
///
/// Headers keep their insertion order; the wire encoder emits them exactly
/// as stored, so constructors are responsible for field order.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code
    pub status: StatusCode,
    /// Response headers (stack-allocated for small header counts)
    pub headers: SmallVec<[(String, String); 4]>,
    /// Response body
    pub body: bytes::Bytes,
}

impl Response {
    /// Create an empty response with the given status
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: SmallVec::new(),
            body: bytes::Bytes::new(),
        }
    }

    /// Create a `200 OK` response carrying asset content.
    ///
    /// Header order is part of the wire contract:
    /// `Content-Type`, `Content-Length`, `Cache-Control: no-cache`.
    pub fn content(content_type: &str, body: impl Into<bytes::Bytes>) -> Self {
        let body = body.into();
        ResponseBuilder::new(StatusCode::OK)
            .header("Content-Type", content_type)
            .header("Content-Length", body.len().to_string())
            .header("Cache-Control", "no-cache")
            .body(body)
            .build()
    }

    /// Create a `302 Found` redirect with no body.
    pub fn redirect(location: &str) -> Self {
        ResponseBuilder::new(StatusCode::FOUND)
            .header("Location", location)
            .header("Cache-Control", "no-cache")
            .build()
    }

    /// Get a header value (name compared case-insensitively)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Render the header block: status line, each header, blank-line
    /// terminator, every line CRLF-framed.
    fn header_block(&self) -> String {
        let mut head = String::with_capacity(64 + self.headers.len() * 32);
        head.push_str("HTTP/1.1 ");
        head.push_str(&self.status.to_string());
        head.push_str("\r\n");
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");
        head
    }

    /// Serialize to HTTP/1.1 wire format: header block immediately followed
    /// by the body bytes in one contiguous buffer.
    ///
    /// The buffer is reserved up front for the exact combined length, and a
    /// failed reservation surfaces as [`crate::Error::Allocation`] rather
    /// than a truncated response.
    pub fn to_http1_bytes(&self) -> Result<bytes::Bytes> {
        encode(&self.header_block(), &self.body)
    }

    /// Render the header block a content response of `len` body bytes
    /// would carry, without materializing the body.
    pub(crate) fn content_head(content_type: &str, len: usize) -> String {
        ResponseBuilder::new(StatusCode::OK)
            .header("Content-Type", content_type)
            .header("Content-Length", len.to_string())
            .header("Cache-Control", "no-cache")
            .build()
            .header_block()
    }
}

/// Copy a rendered header block and a body slice into one contiguous wire
/// buffer. This reservation is the only allocation on the serve path, so
/// exhaustion reports as [`crate::Error::Allocation`] instead of aborting.
pub(crate) fn encode(head: &str, body: &[u8]) -> Result<bytes::Bytes> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(head.len() + body.len())?;
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(body);
    Ok(bytes::Bytes::from(buf))
}

/// Builder for constructing responses
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    /// Create a new builder
    pub fn new(status: StatusCode) -> Self {
        Self {
            response: Response::new(status),
        }
    }

    /// Append a header (order is preserved on the wire)
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.response.headers.push((name.into(), value.into()));
        self
    }

    /// Set body
    pub fn body(mut self, body: impl Into<bytes::Bytes>) -> Self {
        self.response.body = body.into();
        self
    }

    /// Build the response
    pub fn build(self) -> Response {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        assert!(StatusCode::OK.is_success());
        assert!(StatusCode::FOUND.is_redirect());
        assert_eq!(StatusCode::OK.to_string(), "200 OK");
        assert_eq!(StatusCode::FOUND.to_string(), "302 Found");
    }

    #[test]
    fn test_content_header_order() {
        let res = Response::content("text/html", &b"<h1>Hi</h1>"[..]);
        let names: Vec<&str> = res.headers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["Content-Type", "Content-Length", "Cache-Control"]);
        assert_eq!(res.header("content-length"), Some("11"));
        assert_eq!(res.header("cache-control"), Some("no-cache"));
    }

    #[test]
    fn test_content_wire_format() {
        let res = Response::content("text/html", &b"<h1>Hi</h1>"[..]);
        let bytes = res.to_http1_bytes().unwrap();

        assert_eq!(
            &bytes[..],
            b"HTTP/1.1 200 OK\r\n\
              Content-Type: text/html\r\n\
              Content-Length: 11\r\n\
              Cache-Control: no-cache\r\n\
              \r\n\
              <h1>Hi</h1>" as &[u8]
        );
    }

    #[test]
    fn test_redirect_wire_format() {
        let res = Response::redirect("/index.html");
        let bytes = res.to_http1_bytes().unwrap();

        assert_eq!(
            &bytes[..],
            b"HTTP/1.1 302 Found\r\n\
              Location: /index.html\r\n\
              Cache-Control: no-cache\r\n\
              \r\n" as &[u8]
        );
    }

    #[test]
    fn test_header_block_single_blank_line() {
        let res = Response::content("application/octet-stream", &b"\x00\x01"[..]);
        let bytes = res.to_http1_bytes().unwrap();
        let split = bytes.windows(4).filter(|w| w == b"\r\n\r\n").count();
        assert_eq!(split, 1);
        assert!(bytes.ends_with(b"\r\n\r\n\x00\x01"));
    }

    #[test]
    fn test_declared_length_matches_actual() {
        let body = b"0123456789".to_vec();
        let res = Response::content("text/plain", body.clone());
        assert_eq!(res.header("Content-Length"), Some("10"));

        let bytes = res.to_http1_bytes().unwrap();
        let head_end = bytes.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
        assert_eq!(&bytes[head_end..], &body[..]);
    }
}
