//! HTTP transport adapter.
//!
//! This module contains the minimal transport capability the resource
//! clients are built on: [`HttpClient`] wrapping GET/POST/PUT against the
//! configured base URL with a fixed header set, plus the request/response
//! types and [`TransportError`].
//!
//! The adapter owns no retry, pagination, or caching logic; failures pass
//! through to the caller unchanged.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{InvalidRequestError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
