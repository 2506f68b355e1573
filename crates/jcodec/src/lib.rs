//! A lossy, block-based image codec: YCbCr 4:2:0 subsampling, an 8x8 DCT,
//! quality-scaled quantization and fixed-table Huffman entropy coding over
//! a custom container format built on top of [`jcodec_bmp`].

pub mod category;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod huffman;
pub mod macroblock;
pub mod quantize;
pub mod rle;
pub mod zigzag;

pub use decoder::{decode_image, DecodedImage};
pub use encoder::encode_image;
pub use errors::JcodecError;
