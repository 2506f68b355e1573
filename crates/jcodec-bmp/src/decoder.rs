use log::trace;

use crate::common::{row_stride_bytes, BmpHeader, HEADER_SIZE};
use crate::errors::BmpError;

/// A decoded 24-bit BMP: a [`BmpHeader`] kept around for lossless
/// re-encoding, plus pixels stored top-down, RGB, row-major, unpadded.
pub struct BmpImage {
    pub header: BmpHeader,
    pub width:  u32,
    pub height: u32,
    pub rgb:    Vec<u8>
}

/// Probe whether `bytes` begins with a BMP magic number.
pub fn probe_bmp(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && &bytes[0..2] == b"BM"
}

/// Decode a 24-bit, uncompressed BMP from an in-memory byte slice.
pub fn decode_bmp(bytes: &[u8]) -> Result<BmpImage, BmpError> {
    let header = BmpHeader::parse(bytes)?;

    trace!("bmp dimensions: {}x{}, bottom_up={}", header.width, header.height, header.bottom_up);

    let row_stride = row_stride_bytes(header.width) as usize;
    let row_width = header.width as usize * 3;
    let data = &bytes[HEADER_SIZE..];

    let needed = row_stride * header.height as usize;
    if data.len() < needed {
        return Err(BmpError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("BMP pixel data is {} bytes, need {needed}", data.len())
        )));
    }

    let mut rgb = vec![0u8; row_width * header.height as usize];

    for on_disk_row in 0..header.height as usize {
        let out_row = if header.bottom_up {
            header.height as usize - 1 - on_disk_row
        } else {
            on_disk_row
        };

        let src = &data[on_disk_row * row_stride..on_disk_row * row_stride + row_width];
        let dst = &mut rgb[out_row * row_width..(out_row + 1) * row_width];

        for (src_px, dst_px) in src.chunks_exact(3).zip(dst.chunks_exact_mut(3)) {
            dst_px[0] = src_px[2];
            dst_px[1] = src_px[1];
            dst_px[2] = src_px[0];
        }
    }

    Ok(BmpImage { width: header.width, height: header.height, header, rgb })
}
