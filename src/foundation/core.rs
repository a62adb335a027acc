use crate::foundation::error::{StillcastError, StillcastResult};

/// Absolute 0-based frame index in output timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Whole frames-per-second.
///
/// The conversion API only accepts integer rates, so there is no rational
/// `num/den` form here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps(pub u32);

impl Fps {
    /// Create a validated FPS value.
    pub fn new(fps: u32) -> StillcastResult<Self> {
        if fps == 0 {
            return Err(StillcastError::parameter("fps must be a positive integer"));
        }
        Ok(Self(fps))
    }

    /// The rate as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// One frame as RGBA8 pixels.
///
/// Frames carry a `premultiplied` flag so alpha handling is explicit at the
/// encoder boundary; decoded uploads are straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Validated conversion parameters: repeat one still for `duration_secs`
/// seconds at `fps`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StillClip {
    /// Playback duration in whole seconds.
    pub duration_secs: u32,
    /// Playback frame rate.
    pub fps: Fps,
}

impl StillClip {
    /// Create validated clip parameters.
    ///
    /// Zero duration or fps is a parameter error, never a silent empty video.
    pub fn new(duration_secs: u32, fps: u32) -> StillcastResult<Self> {
        if duration_secs == 0 {
            return Err(StillcastError::parameter(
                "duration must be a positive integer",
            ));
        }
        Ok(Self {
            duration_secs,
            fps: Fps::new(fps)?,
        })
    }

    /// Number of frames in the output: `floor(duration * fps)`.
    ///
    /// Both factors are positive integers, so the floor is exact and the
    /// count is always >= 1.
    pub fn frame_count(self) -> u64 {
        u64::from(self.duration_secs) * u64::from(self.fps.get())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
