use crate::policy::DuplicateHeaderPolicy;
use crate::service::CompressionService;
use tower::Layer;

/// A Tower layer that deflate-compresses HTTP request bodies.
///
/// This layer wraps services and compresses outgoing request bodies into a
/// zlib envelope, setting `Content-Encoding: deflate` on the request.
#[derive(Debug, Clone, Default)]
pub struct CompressionLayer {
    policy: DuplicateHeaderPolicy,
}

impl CompressionLayer {
    /// Creates a new compression layer with the default
    /// [`DuplicateHeaderPolicy::Error`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the behavior for requests that already have a `Content-Encoding`
    /// header.
    pub fn policy(mut self, policy: DuplicateHeaderPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<S> Layer<S> for CompressionLayer {
    type Service = CompressionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CompressionService::new(inner, self.policy)
    }
}
