//! Top-level encode orchestration: raster -> YCbCr -> macroblocks -> DCT ->
//! quantize -> zig-zag -> RLE/DPCM -> Huffman -> container.

use jcodec_bmp::BmpHeader;
use jcodec_core::BitWriter;
use log::{debug, info};

use crate::category::{clamp_ac, clamp_dc};
use crate::errors::JcodecError;
use crate::huffman::{write_ac_pairs, write_dc};
use crate::macroblock::{extract_macroblocks, macroblock_grid, rgb_to_ycbcr_image, Macroblock};
use crate::quantize::{quantize_block, Quality, BASE_CHROMA, BASE_LUMA};
use crate::rle::{diff_dc, rle_encode_ac};
use crate::zigzag::vectorize;
use crate::container::write_container;

/// DC predictors for a scan: one running value each for Y, Cb and Cr,
/// carried across every macroblock in raster order.
#[derive(Default)]
struct DcPredictors {
    y:  i32,
    cb: i32,
    cr: i32
}

/// Quantize, zig-zag and run-length encode a single 8x8 block, updating and
/// consuming the relevant DC predictor.
///
/// The transmitted DC difference and every AC coefficient are clamped to
/// what the fixed Huffman tables can represent (`Overflow` in the error
/// design, tolerated by clamping rather than failing). The predictor is
/// advanced by the clamped difference, not the true DC, so the decoder's
/// running predictor never diverges from the encoder's.
fn encode_block(block: &jcodec_core::dct::Block, table: &[[u16; 8]; 8], predictor: &mut i32) -> (i32, Vec<(u8, i32)>) {
    let quantized = quantize_block(block, table);
    let mut coefficients = vectorize(&quantized);

    let diff = clamp_dc(diff_dc(*predictor, coefficients[0]));
    *predictor += diff;

    for value in coefficients[1..].iter_mut() {
        *value = clamp_ac(*value);
    }

    let ac_pairs = rle_encode_ac(&coefficients[1..]);

    (diff, ac_pairs)
}

fn encode_macroblock_chunk(mb: &Macroblock, luma_table: &[[u16; 8]; 8], chroma_table: &[[u16; 8]; 8], predictors: &mut DcPredictors) -> Vec<u8> {
    let mut writer = BitWriter::new(32);

    for y_block in mb.y.iter() {
        let (diff, ac_pairs) = encode_block(y_block, luma_table, &mut predictors.y);
        write_dc(&mut writer, diff);
        write_ac_pairs(&mut writer, &ac_pairs);
    }

    let (cb_diff, cb_ac) = encode_block(&mb.cb, chroma_table, &mut predictors.cb);
    write_dc(&mut writer, cb_diff);
    write_ac_pairs(&mut writer, &cb_ac);

    let (cr_diff, cr_ac) = encode_block(&mb.cr, chroma_table, &mut predictors.cr);
    write_dc(&mut writer, cr_diff);
    write_ac_pairs(&mut writer, &cr_ac);

    writer.into_bytes()
}

/// Encode a `width x height` interleaved RGB raster into a jcodec
/// container, preserving `header` byte-for-byte as the passthrough header.
///
/// `width` and `height` must both be multiples of 8; `quality` must be in
/// `1..=100`.
pub fn encode_image(header: &BmpHeader, width: usize, height: usize, rgb: &[u8], quality: u8) -> Result<Vec<u8>, JcodecError> {
    if !(1..=100).contains(&quality) {
        return Err(JcodecError::InvalidQuality(quality));
    }
    if width % 8 != 0 || height % 8 != 0 {
        return Err(JcodecError::InvalidDimensions { width, height });
    }

    let (cols, rows) = macroblock_grid(width, height);
    info!("encoding {width}x{height} image as {} macroblocks at quality {quality}", cols * rows);

    let image = rgb_to_ycbcr_image(width, height, rgb);
    let macroblocks = extract_macroblocks(&image);

    let quality = Quality::new(quality);
    let luma_table = quality.scale_table(&BASE_LUMA);
    let chroma_table = quality.scale_table(&BASE_CHROMA);

    let mut predictors = DcPredictors::default();
    let mut chunks = Vec::with_capacity(macroblocks.len());

    for mb in &macroblocks {
        let chunk = encode_macroblock_chunk(mb, &luma_table, &chroma_table, &mut predictors);
        debug!("macroblock {} encoded to {} bytes", chunks.len(), chunk.len());
        chunks.push(chunk);
    }

    Ok(write_container(header, quality.value(), &chunks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_image;

    fn checkerboard(width: usize, height: usize) -> Vec<u8> {
        let mut rgb = vec![0u8; width * height * 3];
        for y in 0..height {
            for x in 0..width {
                let on = (x / 8 + y / 8) % 2 == 0;
                let idx = (y * width + x) * 3;
                let value = if on { 230 } else { 20 };
                rgb[idx] = value;
                rgb[idx + 1] = value;
                rgb[idx + 2] = value;
            }
        }
        rgb
    }

    #[test]
    fn rejects_quality_out_of_range() {
        let header = BmpHeader::new(16, 16);
        let rgb = vec![0u8; 16 * 16 * 3];
        assert!(matches!(encode_image(&header, 16, 16, &rgb, 0), Err(JcodecError::InvalidQuality(0))));
        assert!(matches!(encode_image(&header, 16, 16, &rgb, 101), Err(JcodecError::InvalidQuality(101))));
    }

    #[test]
    fn rejects_dimensions_not_multiples_of_eight() {
        let header = BmpHeader::new(10, 16);
        let rgb = vec![0u8; 10 * 16 * 3];
        assert!(matches!(encode_image(&header, 10, 16, &rgb, 50), Err(JcodecError::InvalidDimensions { .. })));
    }

    #[test]
    fn encodes_a_solid_block_to_a_single_chunk_container() {
        let header = BmpHeader::new(16, 16);
        let rgb = vec![128u8; 16 * 16 * 3];

        let container_bytes = encode_image(&header, 16, 16, &rgb, 75).unwrap();
        let decoded = decode_image(&container_bytes).unwrap();

        assert_eq!(decoded.width, 16);
        assert_eq!(decoded.height, 16);
        for px in decoded.rgb.chunks_exact(3) {
            assert!((i16::from(px[0]) - 128).abs() <= 4);
        }
    }

    #[test]
    fn round_trips_a_checkerboard_at_high_quality() {
        let width = 32;
        let height = 16;
        let header = BmpHeader::new(width as u32, height as u32);
        let rgb = checkerboard(width, height);

        let container_bytes = encode_image(&header, width, height, &rgb, 95).unwrap();
        let decoded = decode_image(&container_bytes).unwrap();

        assert_eq!(decoded.rgb.len(), rgb.len());
    }
}
