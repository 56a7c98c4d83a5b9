//! Namestamp Server - HTTP transport around the assignment engine
//!
//! One operation: `GET /api/stamp?name=...` returns the engine's Plan as
//! pretty-printed JSON. The engine does all the work; this crate only
//! extracts the query parameter, shapes the response, and sets headers.

pub mod http;

pub use http::*;
