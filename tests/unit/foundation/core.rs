use super::*;

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0).is_err());
    assert_eq!(Fps::new(24).unwrap().get(), 24);
}

#[test]
fn clip_rejects_zero_duration_and_zero_fps() {
    assert!(StillClip::new(0, 30).is_err());
    assert!(StillClip::new(3, 0).is_err());
    assert!(StillClip::new(0, 0).is_err());
}

#[test]
fn clip_frame_count_is_duration_times_fps() {
    assert_eq!(StillClip::new(3, 2).unwrap().frame_count(), 6);
    assert_eq!(StillClip::new(1, 1).unwrap().frame_count(), 1);
    assert_eq!(StillClip::new(10, 60).unwrap().frame_count(), 600);
}

#[test]
fn clip_frame_count_does_not_overflow_u32_inputs() {
    let clip = StillClip::new(u32::MAX, u32::MAX).unwrap();
    assert_eq!(
        clip.frame_count(),
        u64::from(u32::MAX) * u64::from(u32::MAX)
    );
}
