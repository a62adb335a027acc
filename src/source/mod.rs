/// Decoding of uploaded image bytes into a raster.
pub mod decode;
