//! Encoding sinks.
//!
//! Sinks consume frames in timeline order and are driven by
//! [`crate::convert::encode_still`].

/// `ffmpeg`-based sink (MP4 output via the system `ffmpeg` binary).
pub mod ffmpeg;
/// Generic frame sink trait and the in-memory test sink.
pub mod sink;
