use std::io;

/// Errors produced while adapting an outgoing request.
///
/// Both variants are terminal for the adaptation attempt: the request is not
/// partially modified, and the caller is expected to abort the send rather
/// than transmit the body uncompressed.
#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    /// The request already carries a `Content-Encoding` header and the
    /// configured policy is [`DuplicateHeaderPolicy::Error`].
    ///
    /// [`DuplicateHeaderPolicy::Error`]: crate::DuplicateHeaderPolicy::Error
    #[error("request already has a Content-Encoding header")]
    DuplicateContentEncoding,

    /// The deflate compressor failed on the request body.
    #[error("deflate compression failed")]
    Compression(#[source] io::Error),
}
