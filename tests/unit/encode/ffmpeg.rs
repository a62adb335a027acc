use super::*;
use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(30).unwrap(),
    }
}

#[test]
fn begin_rejects_zero_dimensions() {
    let out = std::env::temp_dir().join("stillcast-ffmpeg-unit.mp4");
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    let err = sink.begin(cfg(0, 10)).unwrap_err();
    assert!(matches!(err, StillcastError::Encode(_)));
}

#[test]
fn begin_rejects_odd_dimensions() {
    let out = std::env::temp_dir().join("stillcast-ffmpeg-unit.mp4");
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    assert!(sink.begin(cfg(11, 10)).is_err());
    assert!(sink.begin(cfg(10, 11)).is_err());
}

#[test]
fn push_frame_before_begin_is_an_error() {
    let out = std::env::temp_dir().join("stillcast-ffmpeg-unit.mp4");
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0u8; 16],
        premultiplied: false,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
}

#[test]
fn flatten_straight_over_black_produces_expected_rgb() {
    // Straight red @ 50% alpha => rgb becomes 128,0,0 over black.
    let src = vec![255u8, 0u8, 0u8, 128u8];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128u8, 0u8, 0u8, 255u8]);
}

#[test]
fn flatten_premul_over_black_produces_expected_rgb() {
    // Premultiplied red @ 50% alpha => rgb is already 128,0,0.
    let src = vec![128u8, 0u8, 0u8, 128u8];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128u8, 0u8, 0u8, 255u8]);
}

#[test]
fn flatten_opaque_pixels_pass_through() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let src = vec![0u8; 8];
    let mut dst = vec![0u8; 4];
    assert!(flatten_to_opaque_rgba8(&mut dst, &src, false, [0, 0, 0, 255]).is_err());
}
