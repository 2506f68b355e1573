//! 16x16 macroblocks: 4:2:0 chroma subsampling, block extraction/reconstruction
//! and the forward/inverse DCT pass over a whole image.

use jcodec_core::colorspace::{rgb_to_ycbcr, ycbcr_to_rgb};
use jcodec_core::dct::{forward_dct, inverse_dct, Block};

/// An image stored as three separate 8-bit planes in YCbCr space, all at
/// full resolution (chroma is only subsampled per-macroblock, at extraction
/// time, never stored subsampled).
pub struct YCbCrImage {
    pub width:  usize,
    pub height: usize,
    pub y:      Vec<u8>,
    pub cb:     Vec<u8>,
    pub cr:     Vec<u8>
}

impl YCbCrImage {
    fn new(width: usize, height: usize) -> YCbCrImage {
        YCbCrImage { width, height, y: vec![0; width * height], cb: vec![0; width * height], cr: vec![0; width * height] }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

/// Convert an interleaved RGB buffer to a [`YCbCrImage`].
pub fn rgb_to_ycbcr_image(width: usize, height: usize, rgb: &[u8]) -> YCbCrImage {
    let mut image = YCbCrImage::new(width, height);

    for (i, px) in rgb.chunks_exact(3).enumerate() {
        let pixel = rgb_to_ycbcr(px[0], px[1], px[2]);
        image.y[i] = pixel.a;
        image.cb[i] = pixel.b;
        image.cr[i] = pixel.c;
    }

    image
}

/// Convert a [`YCbCrImage`] back to an interleaved RGB buffer.
pub fn ycbcr_image_to_rgb(image: &YCbCrImage) -> Vec<u8> {
    let mut rgb = vec![0u8; image.width * image.height * 3];

    for (i, px) in rgb.chunks_exact_mut(3).enumerate() {
        let pixel = ycbcr_to_rgb(image.y[i], image.cb[i], image.cr[i]);
        px[0] = pixel.a;
        px[1] = pixel.b;
        px[2] = pixel.c;
    }

    rgb
}

/// Clamp an out-of-bounds coordinate to the last valid row/column, the same
/// edge-replication padding used for macroblocks that run off the image.
fn padding_clamp(value: usize, max: usize) -> usize {
    value.min(max - 1)
}

fn extract_block_y(image: &YCbCrImage, start_x: usize, start_y: usize) -> Block {
    let mut block = [[0.0f32; 8]; 8];
    for dy in 0..8 {
        for dx in 0..8 {
            let px = padding_clamp(start_x + dx, image.width);
            let py = padding_clamp(start_y + dy, image.height);
            block[dy][dx] = f32::from(image.y[image.index(px, py)]) - 128.0;
        }
    }
    block
}

#[derive(Clone, Copy)]
pub enum ChromaChannel {
    Cb,
    Cr
}

fn extract_block_chroma420(image: &YCbCrImage, start_x: usize, start_y: usize, channel: ChromaChannel) -> Block {
    let plane = match channel {
        ChromaChannel::Cb => &image.cb,
        ChromaChannel::Cr => &image.cr
    };

    let mut block = [[0.0f32; 8]; 8];
    for dy in 0..8 {
        for dx in 0..8 {
            let mut sum = 0.0f32;
            for sy in 0..2 {
                for sx in 0..2 {
                    let px = padding_clamp(start_x + dx * 2 + sx, image.width);
                    let py = padding_clamp(start_y + dy * 2 + sy, image.height);
                    sum += f32::from(plane[image.index(px, py)]) - 128.0;
                }
            }
            block[dy][dx] = sum / 4.0;
        }
    }
    block
}

fn reconstruct_block_y(dst: &mut YCbCrImage, block: &Block, start_x: usize, start_y: usize) {
    for dy in 0..8 {
        for dx in 0..8 {
            let px = padding_clamp(start_x + dx, dst.width);
            let py = padding_clamp(start_y + dy, dst.height);
            let idx = dst.index(px, py);
            dst.y[idx] = clamp_to_byte(block[dy][dx] + 128.0);
        }
    }
}

fn reconstruct_block_chroma420(dst: &mut YCbCrImage, block: &Block, start_x: usize, start_y: usize, channel: ChromaChannel) {
    for dy in 0..16 {
        for dx in 0..16 {
            let px = padding_clamp(start_x + dx, dst.width);
            let py = padding_clamp(start_y + dy, dst.height);
            let idx = dst.index(px, py);
            let value = clamp_to_byte(block[dy / 2][dx / 2] + 128.0);

            match channel {
                ChromaChannel::Cb => dst.cb[idx] = value,
                ChromaChannel::Cr => dst.cr[idx] = value
            }
        }
    }
}

fn clamp_to_byte(value: f32) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// A 16x16 macroblock's worth of DCT coefficients: 4 luma blocks plus one
/// chroma block each for Cb and Cr.
#[derive(Debug, Clone, Copy)]
pub struct Macroblock {
    pub y:  [Block; 4],
    pub cb: Block,
    pub cr: Block
}

/// Number of 16x16 macroblock columns/rows needed to cover `width x height`.
pub fn macroblock_grid(width: usize, height: usize) -> (usize, usize) {
    ((width + 15) / 16, (height + 15) / 16)
}

/// Split a YCbCr image into macroblocks in raster order (macroblock row by
/// row, left to right), applying the forward DCT to every block.
pub fn extract_macroblocks(image: &YCbCrImage) -> Vec<Macroblock> {
    let (cols, rows) = macroblock_grid(image.width, image.height);
    let mut macroblocks = Vec::with_capacity(cols * rows);

    for mb_row in 0..rows {
        for mb_col in 0..cols {
            let bx = mb_col * 16;
            let by = mb_row * 16;

            let mut y = [[[0.0f32; 8]; 8]; 4];
            for (i, y_block) in y.iter_mut().enumerate() {
                let ox = bx + (i % 2) * 8;
                let oy = by + (i / 2) * 8;
                *y_block = forward_dct(&extract_block_y(image, ox, oy));
            }

            let cb = forward_dct(&extract_block_chroma420(image, bx, by, ChromaChannel::Cb));
            let cr = forward_dct(&extract_block_chroma420(image, bx, by, ChromaChannel::Cr));

            macroblocks.push(Macroblock { y, cb, cr });
        }
    }

    macroblocks
}

/// Inverse of [`extract_macroblocks`]: apply the inverse DCT to every block
/// and stitch the macroblocks back into a full-resolution YCbCr image.
pub fn reconstruct_image(macroblocks: &[Macroblock], width: usize, height: usize) -> YCbCrImage {
    let (cols, _rows) = macroblock_grid(width, height);
    let mut image = YCbCrImage::new(width, height);

    for (mb_index, mb) in macroblocks.iter().enumerate() {
        let mb_col = mb_index % cols;
        let mb_row = mb_index / cols;
        let bx = mb_col * 16;
        let by = mb_row * 16;

        for (i, y_block) in mb.y.iter().enumerate() {
            let ox = bx + (i % 2) * 8;
            let oy = by + (i / 2) * 8;
            reconstruct_block_y(&mut image, &inverse_dct(y_block), ox, oy);
        }

        reconstruct_block_chroma420(&mut image, &inverse_dct(&mb.cb), bx, by, ChromaChannel::Cb);
        reconstruct_block_chroma420(&mut image, &inverse_dct(&mb.cr), bx, by, ChromaChannel::Cr);
    }

    image
}
