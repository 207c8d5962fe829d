use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

/// Content codings the server can apply to a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Standard gzip framing
    Gzip,
}

/// Codings the server accepts, in the server's preference order.
pub const ACCEPTED: &[Encoding] = &[Encoding::Gzip];

impl Encoding {
    /// The token used for this coding on the wire (Accept-Encoding and
    /// Content-Encoding values).
    pub fn token(&self) -> &'static str {
        match self {
            Encoding::Gzip => "gzip",
        }
    }
}

/// Selects a response coding from a raw Accept-Encoding header value.
///
/// The value is treated as a comma-separated set: tokens are trimmed and the
/// first entry of [`ACCEPTED`] present in that set wins. Client preference
/// order is not consulted. No header, or no overlap, means the plain
/// response path.
pub fn negotiate(accept_encoding: Option<&str>) -> Option<Encoding> {
    let raw = accept_encoding?;
    ACCEPTED
        .iter()
        .copied()
        .find(|scheme| raw.split(',').map(str::trim).any(|t| t == scheme.token()))
}

/// Compresses `data` with the given coding.
pub fn compress(scheme: Encoding, data: &[u8]) -> io::Result<Vec<u8>> {
    match scheme {
        Encoding::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(data)?;
            encoder.finish()
        }
    }
}
