//! Quality-scaled quantization tables and the quantize/dequantize step.

use jcodec_core::dct::Block;

/// Annex-K luminance quantization table.
pub const BASE_LUMA: [[u16; 8]; 8] = [
    [16, 11, 10, 16, 24, 40, 51, 61],
    [12, 12, 14, 19, 26, 58, 60, 55],
    [14, 13, 16, 24, 40, 57, 69, 56],
    [14, 17, 22, 29, 51, 87, 80, 62],
    [18, 22, 37, 56, 68, 109, 103, 77],
    [24, 35, 55, 64, 81, 104, 113, 92],
    [79, 64, 78, 87, 103, 121, 120, 101],
    [72, 92, 95, 98, 112, 100, 103, 99]
];

/// Annex-K chrominance quantization table, also used for both Cb and Cr.
pub const BASE_CHROMA: [[u16; 8]; 8] = [
    [17, 18, 24, 47, 99, 99, 99, 99],
    [18, 21, 26, 66, 99, 99, 99, 99],
    [24, 26, 56, 99, 99, 99, 99, 99],
    [47, 66, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 98]
];

/// A quality-scaled quantization table, derived once per encode/decode pass.
pub type QuantTable = [[u16; 8]; 8];

/// Quality, clamped to `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(requested: u8) -> Quality {
        Quality(requested.clamp(1, 100))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The JPEG quality-scaling multiplier: `5000/Q` below 50, `200 - 2Q` otherwise.
    fn scale_factor(self) -> u32 {
        let q = u32::from(self.0);
        if q < 50 {
            5000 / q
        } else {
            200 - 2 * q
        }
    }

    /// Scale a base table by this quality, per the standard JPEG formula:
    /// `round_half_up((base * m + 50) / 100)`, floored to a minimum of 1.
    pub fn scale_table(self, base: &[[u16; 8]; 8]) -> QuantTable {
        let m = self.scale_factor();
        let mut out = [[0u16; 8]; 8];

        for (out_row, base_row) in out.iter_mut().zip(base.iter()) {
            for (out_cell, &base_cell) in out_row.iter_mut().zip(base_row.iter()) {
                let scaled = (u32::from(base_cell) * m + 50) / 100;
                *out_cell = scaled.max(1) as u16;
            }
        }

        out
    }
}

/// Divide each DCT coefficient by its quantization step and round to the
/// nearest integer (half away from zero, matching the original's `round()`).
pub fn quantize_block(block: &Block, table: &QuantTable) -> [[i32; 8]; 8] {
    let mut out = [[0i32; 8]; 8];
    for y in 0..8 {
        for x in 0..8 {
            let divided = block[y][x] / f32::from(table[y][x]);
            out[y][x] = round_half_away_from_zero(divided);
        }
    }
    out
}

/// Multiply each quantized coefficient back out by its quantization step.
pub fn dequantize_block(block: &[[i32; 8]; 8], table: &QuantTable) -> Block {
    let mut out = [[0.0f32; 8]; 8];
    for y in 0..8 {
        for x in 0..8 {
            out[y][x] = block[y][x] as f32 * f32::from(table[y][x]);
        }
    }
    out
}

fn round_half_away_from_zero(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5).floor() as i32
    } else {
        (value - 0.5).ceil() as i32
    }
}
