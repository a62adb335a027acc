//! HTTP surface.
//!
//! One route: `POST /convert`. Each request is an independent, synchronous
//! transaction with three phases (ingest, convert, respond); the blocking
//! conversion runs off the async reactor via `spawn_blocking`.

mod app;
mod convert;
mod error;

pub use crate::server::app::{DEFAULT_MAX_UPLOAD_BYTES, router};
pub use crate::server::error::{ApiError, ErrorBody};
