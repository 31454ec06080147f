use crate::envelope::build_envelope;
use crate::error::CompressionError;
use bytes::Bytes;
use http::{Request, header};

/// Behavior when an outgoing request already has a `Content-Encoding` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateHeaderPolicy {
    /// Fail the adaptation with [`CompressionError::DuplicateContentEncoding`].
    #[default]
    Error,
    /// Compress anyway and overwrite the existing header.
    Replace,
    /// Leave the request untouched.
    Skip,
}

/// Adapts outgoing requests by deflate-compressing their bodies.
///
/// Requests without a body pass through unchanged. Requests with a body get
/// it replaced by a zlib envelope (see [`build_envelope`]) and their
/// `Content-Encoding` header set to `deflate`; a pre-existing header is
/// handled per the configured [`DuplicateHeaderPolicy`].
///
/// The compressor holds no per-request state, so one instance can adapt
/// requests from any number of threads concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestCompressor {
    policy: DuplicateHeaderPolicy,
}

impl RequestCompressor {
    /// Creates a compressor with the default [`DuplicateHeaderPolicy::Error`]
    /// policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compressor with the given duplicate-header policy.
    pub fn with_policy(policy: DuplicateHeaderPolicy) -> Self {
        Self { policy }
    }

    /// Returns the configured duplicate-header policy.
    pub fn policy(&self) -> DuplicateHeaderPolicy {
        self.policy
    }

    /// Adapts a single outgoing request.
    ///
    /// On success the returned request carries the compressed body and the
    /// `deflate` encoding header, or is the input unchanged when compression
    /// does not apply. On failure the request is consumed without partial
    /// modification; the caller should abort the send.
    ///
    /// Adaptation is not idempotent: re-adapting an already-adapted request
    /// under [`DuplicateHeaderPolicy::Replace`] double-compresses the body.
    pub fn adapt(
        &self,
        request: Request<Option<Bytes>>,
    ) -> Result<Request<Option<Bytes>>, CompressionError> {
        let (mut parts, body) = request.into_parts();

        let Some(body) = body else {
            return Ok(Request::from_parts(parts, None));
        };

        if parts.headers.contains_key(header::CONTENT_ENCODING) {
            match self.policy {
                DuplicateHeaderPolicy::Error => {
                    return Err(CompressionError::DuplicateContentEncoding);
                }
                DuplicateHeaderPolicy::Skip => {
                    return Ok(Request::from_parts(parts, Some(body)));
                }
                DuplicateHeaderPolicy::Replace => {}
            }
        }

        let envelope = build_envelope(&body)?;
        parts.headers.insert(
            header::CONTENT_ENCODING,
            header::HeaderValue::from_static("deflate"),
        );

        Ok(Request::from_parts(parts, Some(envelope)))
    }
}
