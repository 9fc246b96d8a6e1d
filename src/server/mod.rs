//! # Server Boundary
//!
//! Request and response types at the boundary between this crate and
//! whatever serves HTTP.
//!
//! ## Overview
//!
//! The dispatch engine does not speak the wire protocol. The serving
//! boundary hands it an [`HttpRequest`] (method, normalized path, headers,
//! query parameters, optional JSON body) and turns the dispatch outcome
//! back into an [`HttpResponse`]: string payloads verbatim, other payloads
//! as JSON, misses as a 404 with a fixed body.

mod request;
mod response;

pub use request::{parse_query_params, HttpRequest};
pub use response::{HttpResponse, NOT_FOUND_BODY};
