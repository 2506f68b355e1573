use jcodec_core::BitWriter;

use crate::category::encode_magnitude;
use crate::huffman::tables::{ac_code, dc_code};
use crate::rle::{EOB, ZRL};

/// Write a DC coefficient's difference as `huffman(category)` followed by
/// `category` magnitude bits (omitted entirely when `category == 0`).
pub fn write_dc(writer: &mut BitWriter, dc_diff: i32) {
    let (category, code) = encode_magnitude(dc_diff);
    let (len, huff_code) = dc_code(category);

    writer.write_bits(u32::from(huff_code), len);
    if category > 0 {
        writer.write_bits(code, category);
    }
}

/// Write a run-length encoded block's AC pairs, in order, terminated by the
/// `EOB` pair every caller of [`rle_encode_ac`](crate::rle::rle_encode_ac)
/// already appended.
pub fn write_ac_pairs(writer: &mut BitWriter, pairs: &[(u8, i32)]) {
    for &(run, value) in pairs {
        if (run, value) == EOB {
            let (len, huff_code) = ac_code(0, 0);
            writer.write_bits(u32::from(huff_code), len);
            continue;
        }
        if (run, value) == ZRL {
            let (len, huff_code) = ac_code(15, 0);
            writer.write_bits(u32::from(huff_code), len);
            continue;
        }

        let (category, code) = encode_magnitude(value);
        let (len, huff_code) = ac_code(run, category);

        writer.write_bits(u32::from(huff_code), len);
        writer.write_bits(code, category);
    }
}

#[cfg(test)]
mod tests {
    use jcodec_core::BitReader;

    use super::*;
    use crate::huffman::decoder::{read_ac_pairs, read_dc};
    use crate::rle::rle_encode_ac;

    #[test]
    fn dc_zero_writes_only_the_category_zero_code() {
        let mut writer = BitWriter::new(1);
        write_dc(&mut writer, 0);
        assert_eq!(writer.size_in_bytes(), 1);

        let bytes = writer.into_bytes();
        let mut reader = BitReader::new(&bytes);
        assert_eq!(read_dc(&mut reader).unwrap(), 0);
    }

    #[test]
    fn dc_round_trips_over_a_range() {
        for value in [-500, -1, 0, 1, 17, 511] {
            let mut writer = BitWriter::new(1);
            write_dc(&mut writer, value);
            let bytes = writer.into_bytes();
            let mut reader = BitReader::new(&bytes);
            assert_eq!(read_dc(&mut reader).unwrap(), value);
        }
    }

    #[test]
    fn ac_pairs_round_trip() {
        let mut ac = [0i32; 63];
        ac[0] = 5;
        ac[20] = -12;
        let pairs = rle_encode_ac(&ac);

        let mut writer = BitWriter::new(1);
        write_ac_pairs(&mut writer, &pairs);
        let bytes = writer.into_bytes();

        let mut reader = BitReader::new(&bytes);
        let decoded_pairs = read_ac_pairs(&mut reader).unwrap();
        assert_eq!(decoded_pairs, pairs);
    }
}
