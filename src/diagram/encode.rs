use std::io::{Read, Write};

use base64::{engine::general_purpose::URL_SAFE, Engine};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use thiserror::Error;

/// Errors raised while building or reading a diagram token
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to compress diagram source")]
    Compress(#[source] std::io::Error),

    #[error("Token is not valid URL-safe base64")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to inflate diagram token")]
    Inflate(#[source] std::io::Error),

    #[error("Diagram source is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Compress `text` with zlib at the best level and encode it as URL-safe,
/// padded base64. The token can be used as a URL path segment as is.
pub fn encode(text: &str) -> Result<String, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(text.as_bytes())
        .map_err(EncodeError::Compress)?;
    let compressed = encoder.finish().map_err(EncodeError::Compress)?;

    tracing::debug!(
        source_bytes = text.len(),
        compressed_bytes = compressed.len(),
        "Compressed diagram source"
    );

    Ok(URL_SAFE.encode(compressed))
}

/// Inverse of [`encode`]: base64url-decode then inflate back to the diagram text.
pub fn decode(token: &str) -> Result<String, EncodeError> {
    let compressed = URL_SAFE.decode(token.trim())?;

    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(EncodeError::Inflate)?;

    Ok(String::from_utf8(bytes)?)
}
