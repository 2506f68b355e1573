use core::fmt::{Debug, Formatter};

use jcodec_bmp::BmpError;
use jcodec_core::CoreError;

/// Errors that can occur while encoding or decoding a jcodec container.
#[non_exhaustive]
pub enum JcodecError {
    /// The bitstream didn't match any code in the Huffman table within the
    /// maximum code length.
    HuffmanDecodeFailure,
    /// A non-`ZRL`/`EOB` AC symbol's run advanced the coefficient position
    /// past the last of the 63 AC positions in a block (`run index exceeds
    /// 63 during AC decode`, a `Malformed` stream per the AC decode state
    /// machine).
    AcPositionOverflow { run: u8, position: usize },
    /// The container's magic bytes didn't match.
    InvalidMagicBytes,
    /// The container claimed a macroblock count that doesn't match the
    /// image's dimensions.
    MacroblockCountMismatch { expected: u32, found: u32 },
    /// Requested quality was outside `1..=100`.
    InvalidQuality(u8),
    /// Image width or height was not a multiple of 8.
    InvalidDimensions { width: usize, height: usize },
    /// A chunk's declared length ran past the end of the buffer.
    TruncatedChunk { wanted: usize, remaining: usize },
    /// Error originating in the shared bit I/O / DCT crate.
    Core(CoreError),
    /// Error originating in the BMP raster collaborator.
    Bmp(BmpError),
    /// Error reading or writing the container's bytes.
    Io(std::io::Error)
}

impl Debug for JcodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::HuffmanDecodeFailure => write!(f, "no Huffman code matched the bitstream"),
            Self::AcPositionOverflow { run, position } => {
                write!(f, "AC run {run} advances past position {position}, overflowing the block's 63 AC positions")
            }
            Self::InvalidMagicBytes => write!(f, "invalid magic bytes, not a jcodec container"),
            Self::MacroblockCountMismatch { expected, found } => {
                write!(f, "expected {expected} macroblocks but container declared {found}")
            }
            Self::InvalidQuality(quality) => write!(f, "quality {quality} is outside 1..=100"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "dimensions {width}x{height} are not both multiples of 8")
            }
            Self::TruncatedChunk { wanted, remaining } => {
                write!(f, "chunk wanted {wanted} bytes but only {remaining} remain")
            }
            Self::Core(err) => write!(f, "{err:?}"),
            Self::Bmp(err) => write!(f, "{err:?}"),
            Self::Io(err) => write!(f, "I/O error: {err}")
        }
    }
}

impl core::fmt::Display for JcodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for JcodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(err) => Some(err),
            Self::Bmp(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None
        }
    }
}

impl From<CoreError> for JcodecError {
    fn from(value: CoreError) -> Self {
        JcodecError::Core(value)
    }
}

impl From<BmpError> for JcodecError {
    fn from(value: BmpError) -> Self {
        JcodecError::Bmp(value)
    }
}

impl From<std::io::Error> for JcodecError {
    fn from(value: std::io::Error) -> Self {
        JcodecError::Io(value)
    }
}
