//! Fixed Annex-K luminance Huffman tables, reused for chroma blocks too (a
//! deliberate simplification: no per-image table derivation).

/// `(code_length, code_value)` for each DC category, 0 through 11.
pub const DC_LUMINANCE: [(u8, u16); 12] = [
    (2, 0x0),
    (3, 0x2),
    (3, 0x3),
    (3, 0x4),
    (3, 0x5),
    (3, 0x6),
    (4, 0xE),
    (5, 0x1E),
    (6, 0x3E),
    (7, 0x7E),
    (8, 0xFE),
    (9, 0x1FE)
];

/// `(code_length, code_value)` for each `(run, category)` pair, `run` in
/// `0..16`, `category` in `0..11`. `(0, 0)` marks a cell this table never
/// emits (the `run == 0` column is unused except at `(0, 0)`, which is EOB).
pub const AC_LUMINANCE: [[(u8, u16); 11]; 16] = [
    [(4, 0xA), (2, 0x0), (2, 0x1), (3, 0x4), (4, 0xB), (5, 0x1A), (6, 0x38), (7, 0x78), (10, 0x3F6), (16, 0xFF82), (16, 0xFF83)],
    [(0, 0x0), (4, 0xC), (6, 0x39), (7, 0x79), (9, 0x1F6), (11, 0x7F6), (16, 0xFF84), (16, 0xFF85), (16, 0xFF86), (16, 0xFF87), (16, 0xFF88)],
    [(0, 0x0), (5, 0x1B), (8, 0xF8), (10, 0x3F7), (16, 0xFF89), (16, 0xFF8A), (16, 0xFF8B), (16, 0xFF8C), (16, 0xFF8D), (16, 0xFF8E), (16, 0xFF8F)],
    [(0, 0x0), (6, 0x3A), (9, 0x1F7), (11, 0x7F7), (16, 0xFF90), (16, 0xFF91), (16, 0xFF92), (16, 0xFF93), (16, 0xFF94), (16, 0xFF95), (16, 0xFF96)],
    [(0, 0x0), (6, 0x3B), (10, 0x3F8), (16, 0xFF97), (16, 0xFF98), (16, 0xFF99), (16, 0xFF9A), (16, 0xFF9B), (16, 0xFF9C), (16, 0xFF9D), (16, 0xFF9E)],
    [(0, 0x0), (7, 0x7A), (10, 0x3F9), (16, 0xFF9F), (16, 0xFFA0), (16, 0xFFA1), (16, 0xFFA2), (16, 0xFFA3), (16, 0xFFA4), (16, 0xFFA5), (16, 0xFFA6)],
    [(0, 0x0), (7, 0x7B), (11, 0x7F8), (16, 0xFFA7), (16, 0xFFA8), (16, 0xFFA9), (16, 0xFFAA), (16, 0xFFAB), (16, 0xFFAC), (16, 0xFFAD), (16, 0xFFAE)],
    [(0, 0x0), (8, 0xF9), (11, 0x7F9), (16, 0xFFAF), (16, 0xFFB0), (16, 0xFFB1), (16, 0xFFB2), (16, 0xFFB3), (16, 0xFFB4), (16, 0xFFB5), (16, 0xFFB6)],
    [(0, 0x0), (8, 0xFA), (16, 0xFFFF), (16, 0xFFB7), (16, 0xFFB8), (16, 0xFFB9), (16, 0xFFBA), (16, 0xFFBB), (16, 0xFFBC), (16, 0xFFBD), (16, 0xFFBE)],
    [(0, 0x0), (9, 0x1F8), (16, 0xFFBF), (16, 0xFFC0), (16, 0xFFC1), (16, 0xFFC2), (16, 0xFFC3), (16, 0xFFC4), (16, 0xFFC5), (16, 0xFFC6), (16, 0xFFC7)],
    [(0, 0x0), (9, 0x1F9), (16, 0xFFC8), (16, 0xFFC9), (16, 0xFFCA), (16, 0xFFCB), (16, 0xFFCC), (16, 0xFFCD), (16, 0xFFCE), (16, 0xFFCF), (16, 0xFFD0)],
    [(0, 0x0), (9, 0x1FA), (16, 0xFFD1), (16, 0xFFD2), (16, 0xFFD3), (16, 0xFFD4), (16, 0xFFD5), (16, 0xFFD6), (16, 0xFFD7), (16, 0xFFD8), (16, 0xFFD9)],
    [(0, 0x0), (10, 0x3FA), (16, 0xFFDA), (16, 0xFFDB), (16, 0xFFDC), (16, 0xFFDD), (16, 0xFFDE), (16, 0xFFDF), (16, 0xFFE0), (16, 0xFFE1), (16, 0xFFE2)],
    [(0, 0x0), (11, 0x7FA), (16, 0xFFE3), (16, 0xFFE4), (16, 0xFFE5), (16, 0xFFE6), (16, 0xFFE7), (16, 0xFFE8), (16, 0xFFE9), (16, 0xFFEA), (16, 0xFFEB)],
    [(0, 0x0), (12, 0xFF6), (16, 0xFFEC), (16, 0xFFED), (16, 0xFFEE), (16, 0xFFEF), (16, 0xFFF0), (16, 0xFFF1), (16, 0xFFF2), (16, 0xFFF3), (16, 0xFFF4)],
    [(12, 0xFF7), (16, 0xFFF5), (16, 0xFFF6), (16, 0xFFF7), (16, 0xFFF8), (16, 0xFFF9), (16, 0xFFFA), (16, 0xFFFB), (16, 0xFFFC), (16, 0xFFFD), (16, 0xFFFE)]
];

/// Look up a DC category's Huffman code.
pub fn dc_code(category: u8) -> (u8, u16) {
    DC_LUMINANCE[usize::from(category)]
}

/// Look up an `(run, category)` AC pair's Huffman code. `run == 15 &&
/// category == 0` is ZRL; `run == 0 && category == 0` is EOB.
pub fn ac_code(run: u8, category: u8) -> (u8, u16) {
    AC_LUMINANCE[usize::from(run)][usize::from(category)]
}

/// Reverse lookup: find the `(run, category)` pair whose code is exactly
/// `(length, bits)`. Used by the bit-at-a-time Huffman decoder.
pub fn ac_code_lookup(length: u8, bits: u32) -> Option<(u8, u8)> {
    for (run, row) in AC_LUMINANCE.iter().enumerate() {
        for (category, &(code_len, code_val)) in row.iter().enumerate() {
            if code_len == length && u32::from(code_val) == bits {
                return Some((run as u8, category as u8));
            }
        }
    }
    None
}

/// Reverse lookup for the DC table, mirroring [`ac_code_lookup`].
pub fn dc_code_lookup(length: u8, bits: u32) -> Option<u8> {
    for (category, &(code_len, code_val)) in DC_LUMINANCE.iter().enumerate() {
        if code_len == length && u32::from(code_val) == bits {
            return Some(category as u8);
        }
    }
    None
}

/// The longest code length present in either table, bounding how many bits
/// the decoder must read before giving up on a lookup.
pub const MAX_CODE_LENGTH: u8 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dc_table_round_trips_every_category() {
        for category in 0..12u8 {
            let (len, code) = dc_code(category);
            assert_eq!(dc_code_lookup(len, u32::from(code)), Some(category));
        }
    }

    #[test]
    fn eob_and_zrl_are_where_the_scheme_expects() {
        assert_eq!(ac_code(0, 0), (4, 0xA));
        assert_eq!(ac_code(15, 0), (12, 0xFF7));
    }

    #[test]
    fn ac_lookup_recovers_a_sampling_of_entries() {
        for &(run, category) in &[(0u8, 1u8), (5, 2), (14, 1), (1, 6)] {
            let (len, code) = ac_code(run, category);
            assert_eq!(ac_code_lookup(len, u32::from(code)), Some((run, category)));
        }
    }
}
