//! Stillcast turns one still image into a fixed-duration MP4.
//!
//! The core is a single conversion routine: decode an uploaded raster, repeat
//! it `duration * fps` times, and stream those frames into the system `ffmpeg`
//! binary for MP4 encoding. An axum HTTP surface (`POST /convert`) wraps the
//! routine as a file-download endpoint.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: `&[u8] -> PreparedStill` (via the `image` crate)
//! 2. **Encode**: push `frame_count` identical frames into a [`FrameSink`]
//! 3. **Read back**: collect the MP4 bytes from request-scoped scratch storage
//!
//! Every request works in its own uniquely named scratch directory, released
//! on all exit paths; nothing survives the request.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod scratch;
mod source;

/// The conversion routine: still image + clip parameters -> MP4 bytes.
pub mod convert;
/// Encoding sinks (`ffmpeg`-backed MP4 output plus an in-memory test sink).
pub mod encode;
/// HTTP surface: router, `/convert` handler, error responses.
pub mod server;

pub use crate::convert::{encode_still, still_to_mp4};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRGBA, StillClip};
pub use crate::foundation::error::{StillcastError, StillcastResult};
pub use crate::scratch::RequestScratch;
pub use crate::source::decode::{PreparedStill, decode_still};
