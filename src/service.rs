use crate::future::ResponseFuture;
use crate::policy::{DuplicateHeaderPolicy, RequestCompressor};
use bytes::Bytes;
use http::Request;
use std::task::{Context, Poll};
use tower::{BoxError, Service};

/// A Tower service that deflate-compresses HTTP request bodies.
///
/// The adaptation happens synchronously in [`Service::call`] before the
/// inner service sees the request; when it fails, the returned future
/// resolves with the error and the inner service is never invoked.
#[derive(Debug, Clone)]
pub struct CompressionService<S> {
    inner: S,
    compressor: RequestCompressor,
}

impl<S> CompressionService<S> {
    /// Creates a new compression service wrapping the given inner service.
    pub fn new(inner: S, policy: DuplicateHeaderPolicy) -> Self {
        Self {
            inner,
            compressor: RequestCompressor::with_policy(policy),
        }
    }

    /// Returns a reference to the inner service.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes this service, returning the inner service.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Service<Request<Option<Bytes>>> for CompressionService<S>
where
    S: Service<Request<Option<Bytes>>>,
    S::Error: Into<BoxError>,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = ResponseFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, req: Request<Option<Bytes>>) -> Self::Future {
        match self.compressor.adapt(req) {
            Ok(req) => ResponseFuture::forwarded(self.inner.call(req)),
            Err(error) => ResponseFuture::failed(error),
        }
    }
}
