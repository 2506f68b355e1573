//! Separable 8x8 DCT-II / DCT-III, factored as `C * B * C^T` rather than the
//! naive O(n^4) double sum.

use std::sync::OnceLock;

/// An 8x8 block of samples, used both before the forward DCT (spatial
/// domain) and after the inverse DCT.
pub type Block = [[f32; 8]; 8];

const SIZE: usize = 8;

fn alpha(i: usize) -> f32 {
    if i == 0 {
        1.0 / std::f32::consts::SQRT_2
    } else {
        1.0
    }
}

/// The fixed 8x8 DCT basis matrix, `C[i][j] = alpha(i) * cos((2j+1) i pi / 16) / 2`.
fn basis_matrix() -> &'static Block {
    static MATRIX: OnceLock<Block> = OnceLock::new();

    MATRIX.get_or_init(|| {
        let mut m = [[0.0f32; SIZE]; SIZE];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = alpha(i) * ((2.0 * j as f32 + 1.0) * i as f32 * std::f32::consts::PI / 16.0).cos() / 2.0;
            }
        }
        m
    })
}

fn matmul(a: &Block, b: &Block) -> Block {
    let mut out = [[0.0f32; SIZE]; SIZE];
    for i in 0..SIZE {
        for j in 0..SIZE {
            let mut sum = 0.0;
            for k in 0..SIZE {
                sum += a[i][k] * b[k][j];
            }
            out[i][j] = sum;
        }
    }
    out
}

fn transpose(a: &Block) -> Block {
    let mut out = [[0.0f32; SIZE]; SIZE];
    for i in 0..SIZE {
        for j in 0..SIZE {
            out[j][i] = a[i][j];
        }
    }
    out
}

/// Forward DCT: `F = C * B * C^T`.
pub fn forward_dct(block: &Block) -> Block {
    let c = basis_matrix();
    let ct = transpose(c);
    matmul(&matmul(c, block), &ct)
}

/// Inverse DCT: `B = C^T * F * C`.
pub fn inverse_dct(block: &Block) -> Block {
    let c = basis_matrix();
    let ct = transpose(c);
    matmul(&matmul(&ct, block), c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_block_collapses_to_dc_only() {
        let block = [[1.0f32; 8]; 8];
        let freq = forward_dct(&block);

        assert!((freq[0][0] - 8.0).abs() < 1e-2, "dc was {}", freq[0][0]);

        for i in 0..8 {
            for j in 0..8 {
                if (i, j) != (0, 0) {
                    assert!(freq[i][j].abs() < 1e-2, "ac[{i}][{j}] was {}", freq[i][j]);
                }
            }
        }
    }

    #[test]
    fn forward_then_inverse_round_trips() {
        let mut block = [[0.0f32; 8]; 8];
        let mut seed = 1u32;
        for row in block.iter_mut() {
            for cell in row.iter_mut() {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                *cell = ((seed >> 16) % 256) as f32 - 128.0;
            }
        }

        let freq = forward_dct(&block);
        let back = inverse_dct(&freq);

        for i in 0..8 {
            for j in 0..8 {
                assert!((block[i][j] - back[i][j]).abs() < 1e-3, "mismatch at [{i}][{j}]");
            }
        }
    }

    #[test]
    fn basis_matrix_is_cached_across_calls() {
        let a = basis_matrix() as *const Block;
        let b = basis_matrix() as *const Block;
        assert_eq!(a, b);
    }
}
