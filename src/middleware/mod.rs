//! Tower-compatible middleware layers.
//!
//! Currently a single layer: [`request_id`], the request correlation
//! middleware. Future middleware (rate limiting, auth, metrics) can be
//! added here.

pub mod request_id;

pub use request_id::{RequestId, REQUEST_ID_HEADER};
