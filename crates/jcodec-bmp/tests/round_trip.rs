use jcodec_bmp::{decode_bmp, encode_bmp};

fn checkerboard(width: u32, height: u32) -> Vec<u8> {
    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    for y in 0..height as usize {
        for x in 0..width as usize {
            let on = (x + y) % 2 == 0;
            let idx = (y * width as usize + x) * 3;
            rgb[idx] = if on { 255 } else { 0 };
            rgb[idx + 1] = if on { 255 } else { 0 };
            rgb[idx + 2] = if on { 255 } else { 0 };
        }
    }
    rgb
}

#[test]
fn encode_then_decode_preserves_pixels_for_odd_width() {
    let width = 7; // forces row padding, since 7*3 = 21 is not a multiple of 4
    let height = 5;
    let rgb = checkerboard(width, height);

    let bytes = encode_bmp(width, height, &rgb);
    let decoded = decode_bmp(&bytes).expect("round tripped bmp should decode");

    assert_eq!(decoded.width, width);
    assert_eq!(decoded.height, height);
    assert_eq!(decoded.rgb, rgb);
}

#[test]
fn encode_then_decode_preserves_pixels_for_aligned_width() {
    let width = 8;
    let height = 4;
    let rgb = checkerboard(width, height);

    let bytes = encode_bmp(width, height, &rgb);
    let decoded = decode_bmp(&bytes).expect("round tripped bmp should decode");

    assert_eq!(decoded.rgb, rgb);
}

#[test]
fn rejects_palette_and_unsupported_depths() {
    let mut bytes = encode_bmp(4, 4, &vec![0u8; 4 * 4 * 3]);
    // Corrupt biBitCount to claim 8-bit paletted.
    bytes[28] = 8;
    bytes[29] = 0;

    assert!(decode_bmp(&bytes).is_err());
}

#[test]
fn header_is_preserved_byte_for_byte_across_round_trip() {
    let width = 6;
    let height = 6;
    let rgb = checkerboard(width, height);

    let bytes = encode_bmp(width, height, &rgb);
    let decoded = decode_bmp(&bytes).expect("should decode");

    assert_eq!(decoded.header.raw, bytes[0..54]);
}
