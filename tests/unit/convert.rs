use super::*;
use crate::encode::sink::InMemorySink;

fn solid_frame(width: u32, height: u32, rgba: [u8; 4]) -> FrameRGBA {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..(width * height) {
        data.extend_from_slice(&rgba);
    }
    FrameRGBA {
        width,
        height,
        data,
        premultiplied: false,
    }
}

#[test]
fn duration_3_fps_2_yields_6_identical_frames() {
    let frame = solid_frame(4, 4, [9, 8, 7, 255]);
    let clip = StillClip::new(3, 2).unwrap();

    let mut sink = InMemorySink::new();
    encode_still(&frame, clip, &mut sink).unwrap();

    assert_eq!(sink.frames().len(), 6);
    for (_, captured) in sink.frames() {
        assert_eq!(captured, &frame);
    }
}

#[test]
fn duration_1_fps_1_yields_1_frame() {
    let frame = solid_frame(2, 2, [0, 0, 0, 255]);
    let clip = StillClip::new(1, 1).unwrap();

    let mut sink = InMemorySink::new();
    encode_still(&frame, clip, &mut sink).unwrap();
    assert_eq!(sink.frames().len(), 1);
}

#[test]
fn frame_indices_are_strictly_increasing_from_zero() {
    let frame = solid_frame(2, 2, [5, 5, 5, 255]);
    let clip = StillClip::new(2, 3).unwrap();

    let mut sink = InMemorySink::new();
    encode_still(&frame, clip, &mut sink).unwrap();

    for (i, (idx, _)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
    }
}

#[test]
fn sink_config_matches_source_resolution() {
    let frame = solid_frame(6, 4, [1, 2, 3, 255]);
    let clip = StillClip::new(1, 5).unwrap();

    let mut sink = InMemorySink::new();
    encode_still(&frame, clip, &mut sink).unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (6, 4));
    assert_eq!(cfg.fps.get(), 5);
}

#[test]
fn still_to_mp4_surfaces_decode_errors() {
    let clip = StillClip::new(1, 1).unwrap();
    let err = still_to_mp4(b"not an image", clip).unwrap_err();
    assert!(matches!(err, StillcastError::Decode(_)));
}
