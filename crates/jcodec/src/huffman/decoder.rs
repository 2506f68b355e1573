use jcodec_core::BitReader;

use crate::category::decode_magnitude;
use crate::errors::JcodecError;
use crate::huffman::tables::{ac_code_lookup, dc_code_lookup, MAX_CODE_LENGTH};
use crate::rle::{EOB, ZRL};

/// Read one Huffman-coded code, one bit at a time, until `lookup` returns a
/// match or the maximum code length is exceeded.
fn read_code<T>(reader: &mut BitReader, lookup: impl Fn(u8, u32) -> Option<T>) -> Result<T, JcodecError> {
    let mut code: u32 = 0;

    for length in 1..=MAX_CODE_LENGTH {
        let bit = reader.read_bits(1)?;
        code = (code << 1) | bit;

        if let Some(found) = lookup(length, code) {
            return Ok(found);
        }
    }

    Err(JcodecError::HuffmanDecodeFailure)
}

/// Read one DC coefficient (or DC difference): a Huffman-coded category
/// followed by that many magnitude bits.
pub fn read_dc(reader: &mut BitReader) -> Result<i32, JcodecError> {
    let category = read_code(reader, dc_code_lookup)?;

    let code = if category > 0 { reader.read_bits(category)? } else { 0 };

    Ok(decode_magnitude(category, code))
}

/// Read a run-length encoded block's AC pairs up to and including `EOB`.
///
/// This only decodes the Huffman symbols into `(run, value)` pairs; it does
/// not itself track the running AC coefficient position (`rle_decode_ac`
/// does that against the full state machine, including the `run index
/// exceeds 63` malformed-stream case). A stream that never reaches `EOB`
/// still terminates here, bounded by `reader` running out of bits.
pub fn read_ac_pairs(reader: &mut BitReader) -> Result<Vec<(u8, i32)>, JcodecError> {
    let mut pairs = Vec::new();

    loop {
        let (run, category) = read_code(reader, ac_code_lookup)?;

        if (run, category) == (0, 0) {
            pairs.push(EOB);
            return Ok(pairs);
        }
        if (run, category) == (15, 0) {
            pairs.push(ZRL);
        } else {
            let code = reader.read_bits(category)?;
            pairs.push((run, decode_magnitude(category, code)));
        }
    }
}
