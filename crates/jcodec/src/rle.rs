//! AC run-length coding (with `ZRL`/`EOB` markers) and DC differential
//! coding (DPCM across blocks in scan order).

use crate::errors::JcodecError;

/// `ZRL`: a run of 16 zeros with no following value.
pub const ZRL: (u8, i32) = (15, 0);
/// `EOB`: every AC coefficient from here to the end of the block is zero.
/// Always appended as the last pair of a run-length encoded block, even
/// when the block has no trailing zeros to elide.
pub const EOB: (u8, i32) = (0, 0);

/// Run-length encode the 63 AC coefficients of a zig-zag ordered block
/// (everything after the DC term at index 0).
pub fn rle_encode_ac(ac: &[i32]) -> Vec<(u8, i32)> {
    debug_assert_eq!(ac.len(), 63);

    if ac.iter().all(|&value| value == 0) {
        return vec![EOB];
    }

    let mut pairs = Vec::new();
    let mut run = 0u8;

    for &value in ac {
        if value == 0 {
            run += 1;
            if run == 16 {
                pairs.push(ZRL);
                run = 0;
            }
        } else {
            pairs.push((run, value));
            run = 0;
        }
    }

    pairs.push(EOB);
    pairs
}

/// Invert [`rle_encode_ac`], reconstructing all 63 AC coefficients.
///
/// Tracks the running coefficient position exactly as the AC decode state
/// machine defines it: `ZRL` and a landed amplitude both advance it, `EOB`
/// stops decoding outright, and a non-`ZRL`/`EOB` run that would advance
/// the position past the last of the 63 AC positions is a malformed
/// stream, not a value to drop silently.
pub fn rle_decode_ac(pairs: &[(u8, i32)]) -> Result<[i32; 63], JcodecError> {
    let mut ac = [0i32; 63];
    let mut pos = 0usize;

    for &(run, value) in pairs {
        if (run, value) == EOB {
            break;
        }
        if (run, value) == ZRL {
            pos += 16;
            continue;
        }

        pos += usize::from(run);
        if pos >= ac.len() {
            return Err(JcodecError::AcPositionOverflow { run, position: pos });
        }
        ac[pos] = value;
        pos += 1;
    }

    Ok(ac)
}

/// DPCM-encode a DC coefficient against the previous block's DC term in
/// scan order (zero for the first block of the image).
pub const fn diff_dc(previous: i32, current: i32) -> i32 {
    current - previous
}

/// Invert [`diff_dc`].
pub const fn undiff_dc(previous: i32, diff: i32) -> i32 {
    previous + diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_block_is_a_single_eob() {
        let ac = [0i32; 63];
        let pairs = rle_encode_ac(&ac);
        assert_eq!(pairs, vec![EOB]);
    }

    #[test]
    fn sixteen_zeros_become_a_zrl() {
        let mut ac = [0i32; 63];
        ac[16] = 7;
        let pairs = rle_encode_ac(&ac);
        assert_eq!(pairs[0], ZRL);
        assert_eq!(pairs[1], (0, 7));
        assert_eq!(*pairs.last().unwrap(), EOB);
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let mut ac = [0i32; 63];
        ac[0] = 5;
        ac[2] = -3;
        ac[10] = 1;
        ac[62] = -9;

        let pairs = rle_encode_ac(&ac);
        let decoded = rle_decode_ac(&pairs).unwrap();
        assert_eq!(ac, decoded);
    }

    #[test]
    fn fully_dense_block_has_no_eob_savings_but_still_terminates() {
        let mut ac = [1i32; 63];
        ac[62] = 1;
        let pairs = rle_encode_ac(&ac);
        assert_eq!(pairs.len(), 64); // 63 singleton runs + EOB
        assert_eq!(*pairs.last().unwrap(), EOB);

        let decoded = rle_decode_ac(&pairs).unwrap();
        assert_eq!(ac, decoded);
    }

    #[test]
    fn dc_diff_round_trips() {
        let diff = diff_dc(40, 25);
        assert_eq!(diff, -15);
        assert_eq!(undiff_dc(40, diff), 25);
    }

    #[test]
    fn a_run_that_overflows_the_block_is_malformed() {
        // A single pair whose run alone already reaches past the last AC
        // position, well under any pair-count bound.
        let pairs = vec![(63, 5)];
        let err = rle_decode_ac(&pairs).unwrap_err();
        assert!(matches!(err, JcodecError::AcPositionOverflow { run: 63, position: 63 }));
    }

    #[test]
    fn a_run_that_lands_exactly_on_the_last_position_is_not_an_overflow() {
        let pairs = vec![(62, 9), EOB];
        let decoded = rle_decode_ac(&pairs).unwrap();
        assert_eq!(decoded[62], 9);
    }

    #[test]
    fn a_zrl_that_overflows_the_block_finishes_without_erroring() {
        // Four ZRLs advance the position to 64, past the last AC position,
        // with no amplitude ever written out of bounds; the state machine
        // treats this as `Finished`, not malformed.
        let pairs = vec![ZRL, ZRL, ZRL, ZRL, EOB];
        assert!(rle_decode_ac(&pairs).is_ok());
    }
}
