//! Shared primitives used by every crate in the jcodec family: bit-level
//! I/O, the BT.601 colorspace conversion and the 8x8 DCT.

pub mod bitio;
pub mod colorspace;
pub mod dct;
pub mod error;

pub use bitio::{BitReader, BitWriter};
pub use colorspace::{rgb_to_ycbcr, ycbcr_to_rgb, Pixel};
pub use dct::{forward_dct, inverse_dct, Block};
pub use error::CoreError;
