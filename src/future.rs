use crate::error::CompressionError;
use pin_project_lite::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::BoxError;

pin_project! {
    /// Future for compression service responses.
    ///
    /// Resolves exactly once: either with the inner service's result, or
    /// immediately with the adaptation error when the request could not be
    /// compressed.
    #[project = ResponseFutureProj]
    #[allow(missing_docs)]
    pub enum ResponseFuture<F> {
        /// The request was adapted and handed to the inner service.
        Forwarded {
            #[pin]
            inner: F,
        },
        /// Adaptation failed before the inner service was called.
        Failed {
            error: Option<CompressionError>,
        },
    }
}

impl<F> ResponseFuture<F> {
    pub(crate) fn forwarded(inner: F) -> Self {
        Self::Forwarded { inner }
    }

    pub(crate) fn failed(error: CompressionError) -> Self {
        Self::Failed { error: Some(error) }
    }
}

impl<F, T, E> Future for ResponseFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = Result<T, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            ResponseFutureProj::Forwarded { inner } => inner.poll(cx).map_err(Into::into),
            ResponseFutureProj::Failed { error } => {
                let error = error.take().expect("ResponseFuture polled after completion");
                Poll::Ready(Err(error.into()))
            }
        }
    }
}
