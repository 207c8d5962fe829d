use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes the status line and header block for a response.
///
/// Header order is fixed: Content-Type, Content-Length, then
/// Content-Encoding when a coding was negotiated, then the blank line.
/// Content-Length is the byte length of the body as it will be transmitted,
/// which for encoded responses is the compressed length.
pub fn serialize_headers(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line always carries the numeric code
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    buf.extend_from_slice(format!("Content-Type: {}\r\n", resp.content_type).as_bytes());
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.body.len()).as_bytes());

    if let Some(encoding) = resp.encoding {
        buf.extend_from_slice(format!("Content-Encoding: {}\r\n", encoding.token()).as_bytes());
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes a response to the client socket.
///
/// The header block and the body go out as separate ordered writes (binary
/// bodies are never stitched into the header string), and the exchange only
/// counts as done once both are flushed.
pub struct ResponseWriter {
    headers: Vec<u8>,
    body: Vec<u8>,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self {
            headers: serialize_headers(&response),
            body: response.body,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        stream.write_all(&self.headers).await?;

        if !self.body.is_empty() {
            stream.write_all(&self.body).await?;
        }

        stream.flush().await?;
        Ok(())
    }
}
