//! A minimal BMP codec covering exactly what the jcodec pipeline needs:
//! 24-bit, uncompressed (`BI_RGB`) bitmaps. Anything else (palettes, RLE,
//! 16/32-bit masked formats) is rejected rather than approximated.

mod common;
mod decoder;
mod encoder;
mod errors;

pub use common::{row_stride_bytes, BmpHeader, HEADER_SIZE};
pub use decoder::{decode_bmp, probe_bmp, BmpImage};
pub use encoder::{encode_bmp, encode_bmp_with_header};
pub use errors::BmpError;
