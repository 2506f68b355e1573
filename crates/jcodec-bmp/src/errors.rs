use core::fmt::{Debug, Formatter};

/// Errors that can occur while reading or writing a BMP file.
#[non_exhaustive]
pub enum BmpError {
    /// The file does not start with the `BM` magic bytes.
    InvalidMagicBytes,
    /// `biSize` was not 40, the only info header layout this crate supports.
    UnsupportedInfoHeaderSize(u32),
    /// `biBitCount` was not 24.
    UnsupportedBitDepth(u16),
    /// `biCompression` was not 0 (`BI_RGB`).
    UnsupportedCompression(u32),
    /// Width or height was zero.
    ZeroDimension(&'static str),
    /// An I/O error occurred while reading or writing bytes.
    Io(std::io::Error)
}

impl Debug for BmpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => write!(f, "invalid magic bytes, file does not start with BM"),
            Self::UnsupportedInfoHeaderSize(size) => {
                write!(f, "unsupported BMP info header size {size}, only the 40-byte BITMAPINFOHEADER is supported")
            }
            Self::UnsupportedBitDepth(depth) => {
                write!(f, "unsupported bit depth {depth}, only 24-bit uncompressed BMP is supported")
            }
            Self::UnsupportedCompression(compression) => {
                write!(f, "unsupported compression scheme {compression}, only BI_RGB (0) is supported")
            }
            Self::ZeroDimension(which) => write!(f, "{which} is zero, invalid image"),
            Self::Io(err) => write!(f, "I/O error: {err}")
        }
    }
}

impl core::fmt::Display for BmpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for BmpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for BmpError {
    fn from(value: std::io::Error) -> Self {
        BmpError::Io(value)
    }
}
