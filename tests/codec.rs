mod common;

use std::io::Cursor;

use paintcore::{decode_png, decode_tga, encode_tga, ImageError, PixelBuffer, Rgb8, TgaHeader};

fn tga(w: u16, h: u16, bpp: u8, pixels: &[u8]) -> Vec<u8> {
    let mut v = vec![0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    v.extend_from_slice(&w.to_le_bytes());
    v.extend_from_slice(&h.to_le_bytes());
    v.push(bpp);
    v.push(0);
    v.extend_from_slice(pixels);
    v
}

fn png(img: image::DynamicImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn tga_minimal_two_pixels() {
    common::init_logger();
    let buf = decode_tga(&tga(2, 1, 24, &[1, 2, 3, 4, 5, 6]), false).unwrap();
    assert_eq!(buf.width(), 2);
    assert_eq!(buf.height(), 1);
    assert_eq!(buf.pixels(), &[Rgb8::new(3, 2, 1), Rgb8::new(6, 5, 4)]);
}

#[test]
fn tga_rows_are_bottom_up() {
    let data = tga(1, 2, 24, &[10, 20, 30, 40, 50, 60]);
    let buf = decode_tga(&data, false).unwrap();
    assert_eq!(buf[(0, 1)], Rgb8::new(30, 20, 10));
    assert_eq!(buf[(0, 0)], Rgb8::new(60, 50, 40));

    let flipped = decode_tga(&data, true).unwrap();
    assert_eq!(flipped[(0, 0)], Rgb8::new(30, 20, 10));
    assert_eq!(flipped[(0, 1)], Rgb8::new(60, 50, 40));
}

#[test]
fn tga_32_bit_drops_alpha() {
    let buf = decode_tga(&tga(2, 1, 32, &[1, 2, 3, 255, 4, 5, 6, 128]), false).unwrap();
    assert_eq!(buf.pixels(), &[Rgb8::new(3, 2, 1), Rgb8::new(6, 5, 4)]);
}

#[test]
fn tga_ignores_trailing_bytes() {
    let buf = decode_tga(&tga(1, 1, 24, &[1, 2, 3, 9, 9, 9, 9]), false).unwrap();
    assert_eq!(buf.pixels(), &[Rgb8::new(3, 2, 1)]);
}

#[test]
fn tga_header_errors() {
    let mut bad_sig = tga(1, 1, 24, &[0, 0, 0]);
    bad_sig[2] = 10;
    assert!(matches!(decode_tga(&bad_sig, false), Err(ImageError::MalformedHeader(_))));

    assert!(matches!(decode_tga(&tga(1, 1, 16, &[0, 0]), false),
                     Err(ImageError::MalformedHeader(_))));
    assert!(matches!(decode_tga(&tga(0, 1, 24, &[]), false),
                     Err(ImageError::MalformedHeader(_))));
    assert!(matches!(decode_tga(&tga(3, 0, 24, &[]), false),
                     Err(ImageError::MalformedHeader(_))));

    let short = &tga(1, 1, 24, &[])[.. 14];
    assert!(matches!(decode_tga(short, false),
                     Err(ImageError::TruncatedData { expected: 18, found: 14 })));
    assert!(matches!(decode_tga(&[], false), Err(ImageError::TruncatedData { .. })));
}

#[test]
fn tga_truncated_pixels() {
    match decode_tga(&tga(2, 1, 24, &[1, 2, 3, 4, 5]), false) {
        Err(ImageError::TruncatedData { expected, found }) => {
            assert_eq!(expected, 6);
            assert_eq!(found, 5);
        },
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn tga_header_parse() {
    let hdr = TgaHeader::parse(&tga(300, 2, 32, &[])).unwrap();
    assert_eq!(hdr.width, 300);
    assert_eq!(hdr.height, 2);
    assert_eq!(hdr.bytes_per_pixel(), 4);
    assert_eq!(hdr.image_size(), 2400);
}

#[test]
fn tga_encode_layout() {
    let mut buf = PixelBuffer::new(2, 2);
    buf.set(0, 0, Rgb8::RED);
    buf.set(1, 1, Rgb8::new(1, 2, 3));
    let data = encode_tga(&buf).unwrap();
    assert_eq!(&data[.. 12], &[0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(&data[12 .. 18], &[2, 0, 2, 0, 24, 0]);
    // Bottom row first, B,G,R
    assert_eq!(&data[18 ..], &[0, 0, 0, 3, 2, 1, 0, 0, 255, 0, 0, 0]);
}

#[test]
fn tga_round_trip_bytes() {
    let pixels: Vec<u8> = (0 .. 3 * 4 * 3).map(|i| (i * 11) as u8).collect();
    let data = tga(3, 4, 24, &pixels);
    let buf = decode_tga(&data, false).unwrap();
    assert_eq!(encode_tga(&buf).unwrap(), data);
}

#[test]
fn tga_encode_rejects_oversized() {
    let buf = PixelBuffer::new(70_000, 0);
    assert!(matches!(encode_tga(&buf), Err(ImageError::MalformedHeader(_))));
}

#[test]
fn png_rgb_copied() {
    let img = image::RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let buf = decode_png(&png(image::DynamicImage::ImageRgb8(img)), false).unwrap();
    assert_eq!(buf.pixels(), &[Rgb8::new(1, 2, 3), Rgb8::new(4, 5, 6)]);
}

#[test]
fn png_rgba_drops_alpha() {
    let img = image::RgbaImage::from_raw(1, 2, vec![9, 8, 7, 0, 6, 5, 4, 255]).unwrap();
    let data = png(image::DynamicImage::ImageRgba8(img));
    let buf = decode_png(&data, false).unwrap();
    assert_eq!(buf.width(), 1);
    assert_eq!(buf.height(), 2);
    assert_eq!(buf.pixels(), &[Rgb8::new(9, 8, 7), Rgb8::new(6, 5, 4)]);

    let flipped = decode_png(&data, true).unwrap();
    assert_eq!(flipped.pixels(), &[Rgb8::new(6, 5, 4), Rgb8::new(9, 8, 7)]);
}

#[test]
fn png_gray_expanded() {
    let img = image::GrayImage::from_raw(1, 1, vec![77]).unwrap();
    let buf = decode_png(&png(image::DynamicImage::ImageLuma8(img)), false).unwrap();
    assert_eq!(buf.pixels(), &[Rgb8::gray(77)]);
}

#[test]
fn png_errors() {
    assert!(matches!(decode_png(&[], false), Err(ImageError::DecodeFailure(_))));
    assert!(matches!(decode_png(b"not a png at all", false), Err(ImageError::DecodeFailure(_))));

    let img = image::RgbImage::from_raw(4, 4, vec![200; 48]).unwrap();
    let data = png(image::DynamicImage::ImageRgb8(img));
    assert!(decode_png(&data[.. data.len() / 2], false).is_err());
}
