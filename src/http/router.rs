//! Route classification and request handlers.
//!
//! The route table is static: five (method, pattern) pairs checked in a
//! fixed priority order, everything else 404. Classification is pure so it
//! can be tested without sockets or a filesystem.

use crate::files::{FileStore, FsError};
use crate::http::encoding;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// A matched route. Prefix routes carry the captured path suffix verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /` (exact)
    Root,
    /// `GET /user-agent` (prefix)
    UserAgent,
    /// `GET /echo/<value>` - value may be empty and may contain slashes
    Echo(String),
    /// `GET /files/<name>`
    ReadFile(String),
    /// `POST /files/<name>`
    WriteFile(String),
}

/// Classifies a (method, path) pair against the route table.
///
/// Patterns are checked top to bottom and the first match wins; `None`
/// means no route and a 404 response.
pub fn classify(method: &Method, path: &str) -> Option<Route> {
    match method {
        Method::GET => {
            if path == "/" {
                Some(Route::Root)
            } else if path.starts_with("/user-agent") {
                Some(Route::UserAgent)
            } else if let Some(value) = path.strip_prefix("/echo/") {
                Some(Route::Echo(value.to_string()))
            } else if let Some(name) = path.strip_prefix("/files/") {
                Some(Route::ReadFile(name.to_string()))
            } else {
                None
            }
        }
        Method::POST => path
            .strip_prefix("/files/")
            .map(|name| Route::WriteFile(name.to_string())),
        _ => None,
    }
}

/// Routes a parsed request and produces its response.
///
/// Exactly one handler runs per request. Handler failures never escape as
/// errors; they become the appropriate status code.
pub async fn dispatch(req: &Request, store: &FileStore) -> Response {
    match classify(&req.method, &req.path) {
        Some(Route::Root) => Response::text(StatusCode::Ok, "Hello, world"),
        Some(Route::UserAgent) => Response::text(StatusCode::Ok, req.user_agent()),
        Some(Route::Echo(value)) => echo(req, value),
        Some(Route::ReadFile(name)) => read_file(store, &name).await,
        Some(Route::WriteFile(name)) => write_file(req, store, &name).await,
        None => Response::not_found(),
    }
}

/// Echoes the captured path suffix, compressed when the client accepts a
/// coding the server supports.
fn echo(req: &Request, value: String) -> Response {
    match encoding::negotiate(req.accept_encoding()) {
        Some(scheme) => match encoding::compress(scheme, value.as_bytes()) {
            Ok(compressed) => Response::encoded(scheme, compressed),
            Err(e) => {
                tracing::error!(error = %e, "compression failed, falling back to identity");
                Response::text(StatusCode::Ok, value)
            }
        },
        None => Response::text(StatusCode::Ok, value),
    }
}

async fn read_file(store: &FileStore, name: &str) -> Response {
    match store.read(name).await {
        Ok(contents) => Response::octet_stream(contents),
        Err(e) => {
            // Missing file, read failure, or containment reject: all 404
            tracing::debug!(name, error = %e, "file read failed");
            Response::not_found()
        }
    }
}

async fn write_file(req: &Request, store: &FileStore, name: &str) -> Response {
    if req.body.len() != req.content_length() {
        return Response::bad_request("Content length mismatch");
    }

    match store.write(name, &req.body).await {
        Ok(()) => Response::text(StatusCode::Created, "File created successfully"),
        Err(FsError::PathEscapesRoot) => {
            tracing::debug!(name, "rejected write outside base directory");
            Response::not_found()
        }
        Err(e) => {
            tracing::error!(name, error = %e, "file write failed");
            Response::text(StatusCode::InternalServerError, "Error writing file")
        }
    }
}
