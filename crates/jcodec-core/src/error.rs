use core::fmt::{Debug, Formatter};

/// Errors that can occur in the shared bit I/O, DCT and colorspace primitives.
#[non_exhaustive]
pub enum CoreError {
    /// A `read_bits` call ran past the end of the underlying byte slice.
    UnexpectedEof { wanted: u8, remaining_bits: usize }
}

impl Debug for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnexpectedEof { wanted, remaining_bits } => {
                write!(
                    f,
                    "unexpected end of bitstream: wanted {wanted} bits but only {remaining_bits} remain"
                )
            }
        }
    }
}

impl core::fmt::Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for CoreError {}
