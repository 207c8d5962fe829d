use crate::http::encoding::Encoding;

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): Resource created successfully
/// - `BadRequest` (400): Malformed request or content length mismatch
/// - `NotFound` (404): No matching route or resource
/// - `InternalServerError` (500): Server-side failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use outpost::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use outpost::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// The server emits exactly three headers (Content-Type, Content-Length,
/// optional Content-Encoding), so they live here as typed fields rather than
/// a header map. Content-Length never appears as data: the serializer
/// computes it from `body`, which keeps the emitted length equal to the byte
/// length of the body actually transmitted - compressed bytes included.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Content-Type header value
    pub content_type: &'static str,
    /// Negotiated content coding, if any; `body` is already compressed when set
    pub encoding: Option<Encoding>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a plain-text response with the given status.
    pub fn text(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: "text/plain",
            encoding: None,
            body: body.into(),
        }
    }

    /// Creates a 200 OK binary response, as served for file reads.
    pub fn octet_stream(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: "application/octet-stream",
            encoding: None,
            body,
        }
    }

    /// Creates a 200 OK response carrying an already-compressed text body.
    pub fn encoded(encoding: Encoding, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: "text/plain",
            encoding: Some(encoding),
            body,
        }
    }

    /// Creates the uniform 404 Not Found response.
    pub fn not_found() -> Self {
        Self::text(StatusCode::NotFound, "Resource not found")
    }

    /// Creates a 400 Bad Request response with the given reason as body.
    pub fn bad_request(reason: &str) -> Self {
        Self::text(StatusCode::BadRequest, reason)
    }
}
