//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset the server speaks, built
//! directly on raw byte streams (no HTTP library).
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler - accumulates bytes and drives the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and header accessors
//! - **`response`**: HTTP response representation with typed framing fields
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`router`**: Classifies (method, path) against the fixed route table and runs the handler
//! - **`encoding`**: Accept-Encoding negotiation and gzip compression
//!
//! # Connection State Machine
//!
//! Each client connection handles exactly one exchange:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until a full request is buffered
//!        └──────┬──────┘
//!               │ Request complete (or framing error → canned 4xx)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and generate the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed (no keep-alive)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use outpost::files::FileStore;
//! use outpost::http::connection::Connection;
//! use std::time::Duration;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let store = FileStore::new("/tmp/files");
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let store = store.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, store, Duration::from_secs(30));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
