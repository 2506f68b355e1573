//! Top-level decode orchestration: container -> Huffman -> RLE/DPCM inverse
//! -> inverse zig-zag -> dequantize -> inverse DCT -> macroblock
//! reassembly -> raster.

use jcodec_bmp::BmpHeader;
use jcodec_core::BitReader;
use log::info;

use crate::container::read_container;
use crate::errors::JcodecError;
use crate::huffman::{read_ac_pairs, read_dc};
use crate::macroblock::{macroblock_grid, reconstruct_image, ycbcr_image_to_rgb, Macroblock};
use crate::quantize::{dequantize_block, Quality, BASE_CHROMA, BASE_LUMA};
use crate::rle::{rle_decode_ac, undiff_dc};
use crate::zigzag::devectorize;

/// A fully decoded image: the passthrough raster header plus the
/// reconstructed pixels.
pub struct DecodedImage {
    pub header: BmpHeader,
    pub width:  usize,
    pub height: usize,
    pub rgb:    Vec<u8>
}

#[derive(Default)]
struct DcPredictors {
    y:  i32,
    cb: i32,
    cr: i32
}

fn decode_block(reader: &mut BitReader, table: &[[u16; 8]; 8], predictor: &mut i32) -> Result<jcodec_core::dct::Block, JcodecError> {
    let diff = read_dc(reader)?;
    let dc = undiff_dc(*predictor, diff);
    *predictor = dc;

    let ac_pairs = read_ac_pairs(reader)?;
    let ac = rle_decode_ac(&ac_pairs)?;

    let mut coefficients = [0i32; 64];
    coefficients[0] = dc;
    coefficients[1..].copy_from_slice(&ac);

    let quantized = devectorize(&coefficients);
    Ok(dequantize_block(&quantized, table))
}

fn decode_macroblock_chunk(chunk: &[u8], luma_table: &[[u16; 8]; 8], chroma_table: &[[u16; 8]; 8], predictors: &mut DcPredictors) -> Result<Macroblock, JcodecError> {
    let mut reader = BitReader::new(chunk);

    let mut y = [[[0.0f32; 8]; 8]; 4];
    for y_block in y.iter_mut() {
        *y_block = decode_block(&mut reader, luma_table, &mut predictors.y)?;
    }

    let cb = decode_block(&mut reader, chroma_table, &mut predictors.cb)?;
    let cr = decode_block(&mut reader, chroma_table, &mut predictors.cr)?;

    Ok(Macroblock { y, cb, cr })
}

/// Decode a jcodec container back into its raster header and pixels.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, JcodecError> {
    let container = read_container(bytes)?;

    let width = container.header.width as usize;
    let height = container.header.height as usize;
    let (cols, rows) = macroblock_grid(width, height);
    let expected = (cols * rows) as u32;
    let found = container.chunks.len() as u32;

    if expected != found {
        return Err(JcodecError::MacroblockCountMismatch { expected, found });
    }

    info!("decoding {width}x{height} image from {found} macroblocks at quality {}", container.quality);

    let quality = Quality::new(container.quality);
    let luma_table = quality.scale_table(&BASE_LUMA);
    let chroma_table = quality.scale_table(&BASE_CHROMA);

    let mut predictors = DcPredictors::default();
    let mut macroblocks = Vec::with_capacity(container.chunks.len());

    for chunk in &container.chunks {
        macroblocks.push(decode_macroblock_chunk(chunk, &luma_table, &chroma_table, &mut predictors)?);
    }

    let image = reconstruct_image(&macroblocks, width, height);
    let rgb = ycbcr_image_to_rgb(&image);

    Ok(DecodedImage { header: container.header, width, height, rgb })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_image;

    #[test]
    fn rejects_a_container_with_the_wrong_macroblock_count() {
        let header = BmpHeader::new(16, 16);
        let rgb = vec![0u8; 16 * 16 * 3];

        let bytes = encode_image(&header, 16, 16, &rgb, 50).unwrap();
        // Keep only the headers, and claim zero macroblocks, so the
        // container parses cleanly but disagrees with the dimensions.
        let mut truncated = bytes[..54 + 8].to_vec();
        truncated[54 + 4..54 + 8].copy_from_slice(&0u32.to_le_bytes());

        assert!(matches!(decode_image(&truncated), Err(JcodecError::MacroblockCountMismatch { .. })));
    }

    #[test]
    fn rejects_truncated_container_bytes() {
        let header = BmpHeader::new(16, 16);
        let rgb = vec![0u8; 16 * 16 * 3];

        let mut bytes = encode_image(&header, 16, 16, &rgb, 50).unwrap();
        bytes.truncate(bytes.len() / 2);

        assert!(decode_image(&bytes).is_err());
    }
}
