use std::time::Duration;

use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::files::FileStore;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router;
use crate::http::writer::ResponseWriter;

/// One accepted client socket and everything private to it: the byte
/// accumulator, the parsed request, and the state machine position. Nothing
/// here is shared across connections.
pub struct Connection {
    stream: TcpStream,
    store: FileStore,
    read_timeout: Duration,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

/// What the read phase produced.
enum ReadOutcome {
    /// A complete request parsed out of the buffer.
    Request(Request),
    /// A framing failure that still earns a response before closing.
    Respond(Response),
    /// Peer went away before completing a request; close silently.
    Disconnected,
}

impl Connection {
    pub fn new(stream: TcpStream, store: FileStore, read_timeout: Duration) -> Self {
        Self {
            stream,
            store,
            read_timeout,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through exactly one request/response exchange,
    /// then closes (no keep-alive).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match timeout(self.read_timeout, self.read_request()).await {
                        Ok(outcome) => match outcome? {
                            ReadOutcome::Request(req) => {
                                tracing::debug!(
                                    method = ?req.method,
                                    path = %req.path,
                                    "request received"
                                );
                                self.state = ConnectionState::Processing(req);
                            }
                            ReadOutcome::Respond(resp) => {
                                self.state = ConnectionState::Writing(ResponseWriter::new(resp));
                            }
                            ReadOutcome::Disconnected => {
                                self.state = ConnectionState::Closed;
                            }
                        },
                        Err(_) => {
                            // Read phase overran its budget: close without a response
                            tracing::debug!("timed out waiting for a complete request");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = router::dispatch(req, &self.store).await;
                    tracing::info!(
                        method = ?req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "request handled"
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Accumulates bytes until a full request parses out of the buffer.
    ///
    /// The buffer is re-parsed after every read, so a request split across
    /// arbitrarily many chunks assembles correctly. Consumed bytes leave the
    /// buffer; overshoot past the declared body length stays behind and is
    /// discarded when the connection closes.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) | Err(ParseError::IncompleteBody) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    tracing::debug!(error = ?e, "malformed request");
                    return Ok(ReadOutcome::Respond(Response::bad_request(
                        "Malformed request",
                    )));
                }
            }

            // Read more data
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Peer closed its write side before a full request arrived.
                // A short body behind a complete header block is the one
                // framing failure that gets a response; anything earlier
                // closes silently.
                return Ok(match parse_request(&self.buffer) {
                    Err(ParseError::IncompleteBody) => {
                        ReadOutcome::Respond(Response::bad_request("Content length mismatch"))
                    }
                    _ => ReadOutcome::Disconnected,
                });
            }
        }
    }
}
