use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRGBA, StillClip};
use crate::foundation::error::{StillcastError, StillcastResult};
use crate::scratch::RequestScratch;
use crate::source::decode::decode_still;

/// Push `clip.frame_count()` copies of `frame` into `sink`.
///
/// The frame is borrowed for every push; the repetition is never materialized
/// as distinct copies on this side of the sink.
pub fn encode_still(
    frame: &FrameRGBA,
    clip: StillClip,
    sink: &mut dyn FrameSink,
) -> StillcastResult<()> {
    sink.begin(SinkConfig {
        width: frame.width,
        height: frame.height,
        fps: clip.fps,
    })?;

    let frames = clip.frame_count();
    tracing::info!(frames, fps = clip.fps.get(), "encoding still into video");
    for i in 0..frames {
        sink.push_frame(FrameIndex(i), frame)?;
    }
    sink.end()
}

/// The core conversion routine: image bytes + clip parameters -> MP4 bytes.
///
/// Decodes the still, encodes `frame_count` identical frames through the
/// system `ffmpeg` into a request-scoped scratch file, and reads the artifact
/// back. Scratch storage is released on every exit path; a removal failure
/// after a successful encode is logged, never propagated.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn still_to_mp4(bytes: &[u8], clip: StillClip) -> StillcastResult<Vec<u8>> {
    let still = decode_still(bytes)?;
    tracing::info!(
        width = still.width,
        height = still.height,
        "decoded source image"
    );

    let scratch = RequestScratch::new()?;
    let out_path = scratch.path().join("out.mp4");

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out_path));
    let frame = still.into_frame();
    encode_still(&frame, clip, &mut sink)?;

    let video = std::fs::read(&out_path).map_err(|e| {
        StillcastError::read_back(format!(
            "failed to read encoded video '{}': {e}",
            out_path.display()
        ))
    })?;
    tracing::info!(bytes = video.len(), "video encoded");

    scratch.release();
    Ok(video)
}

#[cfg(test)]
#[path = "../tests/unit/convert.rs"]
mod tests;
