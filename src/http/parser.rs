use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidContentLength,
    /// Header terminator not seen yet; keep buffering.
    Incomplete,
    /// Header block complete, declared body not fully buffered yet.
    IncompleteBody,
}

/// Parses one HTTP request from the front of `buf`.
///
/// Returns the request and the number of bytes consumed, so the caller can
/// drop them from its accumulation buffer. `Incomplete`/`IncompleteBody`
/// mean "read more and try again": the header block and the body are tracked
/// as two distinct completion states.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Split at the FIRST header/body separator; a body may itself contain
    // the terminator bytes and must not be split again.
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: METHOD SP PATH SP VERSION. Split on single spaces so the
    // path comes through verbatim, query-like suffix included.
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split(' ');

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    if method_str.is_empty() || path.is_empty() || version.is_empty() {
        return Err(ParseError::InvalidRequest);
    }

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    // Body: a declared Content-Length must parse as base-10; absent means no
    // body. The request is only complete once the declared length is buffered.
    let content_length = headers
        .get("Content-Length")
        .map(|v| {
            v.parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)
        })
        .transpose()?
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::IncompleteBody);
    }

    // Exactly the declared length; bytes past it stay in the buffer.
    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
