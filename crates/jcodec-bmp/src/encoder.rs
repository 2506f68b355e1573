use crate::common::{row_stride_bytes, BmpHeader};

/// Encode an RGB buffer (top-down, row-major, unpadded) as a fresh,
/// bottom-up, 24-bit uncompressed BMP.
pub fn encode_bmp(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
    let header = BmpHeader::new(width, height);
    encode_bmp_with_header(&header, rgb)
}

/// Encode an RGB buffer using a caller-supplied header, preserving its
/// original row order (`bottom_up`) rather than forcing bottom-up output.
///
/// Used when round-tripping a decoded image so the rewritten file matches
/// the source file's orientation byte for byte.
pub fn encode_bmp_with_header(header: &BmpHeader, rgb: &[u8]) -> Vec<u8> {
    let row_stride = row_stride_bytes(header.width) as usize;
    let row_width = header.width as usize * 3;

    let mut out = Vec::with_capacity(header.raw.len() + row_stride * header.height as usize);
    out.extend_from_slice(&header.raw);

    for out_row in 0..header.height as usize {
        let src_row = if header.bottom_up {
            header.height as usize - 1 - out_row
        } else {
            out_row
        };

        let src = &rgb[src_row * row_width..(src_row + 1) * row_width];

        let start = out.len();
        out.resize(start + row_stride, 0);
        let dst = &mut out[start..start + row_width];

        for (src_px, dst_px) in src.chunks_exact(3).zip(dst.chunks_exact_mut(3)) {
            dst_px[0] = src_px[2];
            dst_px[1] = src_px[1];
            dst_px[2] = src_px[0];
        }
    }

    out
}
