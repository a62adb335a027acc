use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut img = image::RgbaImage::new(width, height);
    for px in img.pixels_mut() {
        *px = image::Rgba(rgba);
    }

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_pixels() {
    let bytes = png_bytes(2, 3, [10, 20, 30, 255]);

    let still = decode_still(&bytes).unwrap();
    assert_eq!(still.width, 2);
    assert_eq!(still.height, 3);
    assert_eq!(still.rgba8.len(), 2 * 3 * 4);
    for px in still.rgba8.chunks_exact(4) {
        assert_eq!(px, &[10, 20, 30, 255]);
    }
}

#[test]
fn decode_minimal_1x1_raster() {
    let bytes = png_bytes(1, 1, [200, 100, 50, 255]);
    let still = decode_still(&bytes).unwrap();
    assert_eq!((still.width, still.height), (1, 1));
    assert_eq!(still.canvas().width, 1);
}

#[test]
fn non_image_bytes_are_a_decode_error() {
    let err = decode_still(b"definitely not an image").unwrap_err();
    assert!(matches!(err, StillcastError::Decode(_)));
    assert!(err.to_string().contains("could not read image"));
}

#[test]
fn into_frame_is_straight_alpha_and_keeps_bytes() {
    let bytes = png_bytes(2, 2, [1, 2, 3, 255]);
    let frame = decode_still(&bytes).unwrap().into_frame();
    assert!(!frame.premultiplied);
    assert_eq!(frame.data.len(), 2 * 2 * 4);
    assert_eq!((frame.width, frame.height), (2, 2));
}
