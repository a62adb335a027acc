use crate::foundation::core::{Canvas, FrameRGBA};
use crate::foundation::error::{StillcastError, StillcastResult};

/// A decoded source raster: straight-alpha RGBA8, tightly packed.
///
/// Created from the upload, consumed by the encoder, dropped after encoding.
#[derive(Clone, Debug)]
pub struct PreparedStill {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, row-major.
    pub rgba8: Vec<u8>,
}

impl PreparedStill {
    /// The raster's dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Convert into a frame without copying pixel data.
    pub fn into_frame(self) -> FrameRGBA {
        FrameRGBA {
            width: self.width,
            height: self.height,
            data: self.rgba8,
            premultiplied: false,
        }
    }
}

/// Decode uploaded bytes into a [`PreparedStill`].
///
/// Any container/format the `image` crate understands is accepted; grayscale
/// and paletted inputs are expanded to RGBA8. Bytes that do not form a
/// readable image are a [`StillcastError::Decode`].
pub fn decode_still(bytes: &[u8]) -> StillcastResult<PreparedStill> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| StillcastError::decode(format!("could not read image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PreparedStill {
        width,
        height,
        rgba8: rgba.into_raw(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/source/decode.rs"]
mod tests;
