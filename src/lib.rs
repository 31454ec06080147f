//! HTTP request compression middleware for Tower.
//!
//! This crate provides a Tower layer that compresses outgoing HTTP request
//! bodies with deflate, wrapping them in a zlib envelope (2-byte header,
//! raw-deflate payload, big-endian Adler-32 trailer) and setting the
//! `Content-Encoding: deflate` header so the server knows to decompress.
//!
//! # Example
//!
//! ```ignore
//! use http_request_compression::{CompressionLayer, DuplicateHeaderPolicy};
//! use tower::ServiceBuilder;
//!
//! let client = ServiceBuilder::new()
//!     .layer(CompressionLayer::new().policy(DuplicateHeaderPolicy::Skip))
//!     .service(my_client);
//! ```
//!
//! # Compression Rules
//!
//! Requests without a body pass through unchanged. When a request already
//! carries a `Content-Encoding` header, behavior follows the configured
//! [`DuplicateHeaderPolicy`]:
//! - `Error` (default): the adaptation fails with
//!   [`CompressionError::DuplicateContentEncoding`]
//! - `Replace`: the body is compressed and the header overwritten
//! - `Skip`: the request passes through unchanged
//!
//! Only complete, in-memory bodies are handled; streaming bodies are out of
//! scope. Adaptation is not idempotent: running a request through the
//! middleware twice under the `Replace` policy compresses the envelope
//! again, which is the documented behavior rather than a bug.

#![deny(missing_docs)]

mod checksum;
mod envelope;
mod error;
mod future;
mod layer;
mod policy;
mod service;

pub use checksum::adler32;
pub use envelope::build_envelope;
pub use error::CompressionError;
pub use future::ResponseFuture;
pub use layer::CompressionLayer;
pub use policy::{DuplicateHeaderPolicy, RequestCompressor};
pub use service::CompressionService;
