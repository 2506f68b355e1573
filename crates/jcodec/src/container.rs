//! The on-disk container: a passthrough raster header, a small codec
//! header (quality, macroblock count), then length-prefixed per-macroblock
//! Huffman chunks.

use jcodec_bmp::{BmpHeader, HEADER_SIZE};

use crate::errors::JcodecError;

/// A parsed container, still holding each macroblock's raw Huffman payload
/// (decoding those chunks is the orchestrator's job, not this module's).
pub struct Container {
    pub header:   BmpHeader,
    pub quality:  u8,
    pub chunks:   Vec<Vec<u8>>
}

/// Serialize a container: passthrough header, quality, macroblock count,
/// then each chunk prefixed by a fixed 32-bit little-endian length.
pub fn write_container(header: &BmpHeader, quality: u8, chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + 8 + chunks.iter().map(|c| 4 + c.len()).sum::<usize>());

    out.extend_from_slice(&header.raw);
    out.extend_from_slice(&u32::from(quality).to_le_bytes());
    out.extend_from_slice(&(chunks.len() as u32).to_le_bytes());

    for chunk in chunks {
        out.extend_from_slice(&(chunk.len() as u32).to_le_bytes());
        out.extend_from_slice(chunk);
    }

    out
}

/// Parse a container back into its passthrough header, quality and raw
/// per-macroblock chunks.
pub fn read_container(bytes: &[u8]) -> Result<Container, JcodecError> {
    if bytes.len() < HEADER_SIZE + 8 {
        return Err(JcodecError::TruncatedChunk { wanted: HEADER_SIZE + 8, remaining: bytes.len() });
    }

    let header = BmpHeader::parse(&bytes[..HEADER_SIZE])?;

    let quality_raw = read_u32_le(&bytes[HEADER_SIZE..HEADER_SIZE + 4]);
    let quality = u8::try_from(quality_raw).unwrap_or(100).clamp(1, 100);

    let macroblock_count = read_u32_le(&bytes[HEADER_SIZE + 4..HEADER_SIZE + 8]);

    let mut pos = HEADER_SIZE + 8;
    let mut chunks = Vec::with_capacity(macroblock_count as usize);

    for _ in 0..macroblock_count {
        if bytes.len() < pos + 4 {
            return Err(JcodecError::TruncatedChunk { wanted: 4, remaining: bytes.len().saturating_sub(pos) });
        }
        let chunk_len = read_u32_le(&bytes[pos..pos + 4]) as usize;
        pos += 4;

        if bytes.len() < pos + chunk_len {
            return Err(JcodecError::TruncatedChunk { wanted: chunk_len, remaining: bytes.len().saturating_sub(pos) });
        }
        chunks.push(bytes[pos..pos + chunk_len].to_vec());
        pos += chunk_len;
    }

    Ok(Container { header, quality, chunks })
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
