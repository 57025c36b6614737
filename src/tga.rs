//! Reading and writing of uncompressed true-color TGA files
//!
//! Layout
//!
//! | Offset | Size | Field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 12   | signature `0,0,2,0,0,0,0,0,0,0,0,0`     |
//! | 12     | 2    | width, little endian                    |
//! | 14     | 2    | height, little endian                   |
//! | 16     | 1    | bits per pixel, 24 or 32                |
//! | 17     | 1    | image descriptor                        |
//! | 18     | ...  | pixels, bottom row first, B,G,R[,A]     |
//!
//! See <https://en.wikipedia.org/wiki/Truevision_TGA>

use crate::buffer::PixelBuffer;
use crate::color::Rgb8;
use crate::error::{ImageError, Result};

use std::convert::TryFrom;

/// Type header of an uncompressed true-color image
pub const TGA_SIGNATURE : [u8;12] = [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0];

const SPEC_LEN : usize = 6;
const HEADER_LEN : usize = TGA_SIGNATURE.len() + SPEC_LEN;

/// Image specification following the signature
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct TgaHeader {
    pub width: u16,
    pub height: u16,
    /// Bits per pixel, 24 or 32
    pub bpp: u8,
    pub descriptor: u8,
}

impl TgaHeader {
    /// Parse and validate the 18 header bytes at the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < TGA_SIGNATURE.len() {
            return Err(ImageError::TruncatedData {
                expected: TGA_SIGNATURE.len(), found: data.len()
            });
        }
        if data[.. TGA_SIGNATURE.len()] != TGA_SIGNATURE {
            return Err(ImageError::MalformedHeader(
                "not an uncompressed true-color TGA".to_string()));
        }
        if data.len() < HEADER_LEN {
            return Err(ImageError::TruncatedData {
                expected: HEADER_LEN, found: data.len()
            });
        }
        let spec = &data[TGA_SIGNATURE.len() .. HEADER_LEN];
        let hdr = TgaHeader {
            width: u16::from_le_bytes([spec[0], spec[1]]),
            height: u16::from_le_bytes([spec[2], spec[3]]),
            bpp: spec[4],
            descriptor: spec[5],
        };
        if hdr.width == 0 || hdr.height == 0 {
            return Err(ImageError::MalformedHeader(
                format!("invalid dimensions {}x{}", hdr.width, hdr.height)));
        }
        if hdr.bpp != 24 && hdr.bpp != 32 {
            return Err(ImageError::MalformedHeader(
                format!("unsupported bits per pixel {}", hdr.bpp)));
        }
        Ok(hdr)
    }
    /// Bytes per pixel in the file
    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bpp / 8)
    }
    /// Size of the pixel block in bytes
    pub fn image_size(&self) -> usize {
        usize::from(self.width) * usize::from(self.height) * self.bytes_per_pixel()
    }
    fn to_bytes(self) -> [u8;SPEC_LEN] {
        let w = self.width.to_le_bytes();
        let h = self.height.to_le_bytes();
        [w[0], w[1], h[0], h[1], self.bpp, self.descriptor]
    }
}

/// Decode a TGA file held in memory
///
/// Rows are stored bottom-up in the file and come out top-down. Set `flip_y`
///   to additionally flip the result vertically. Any alpha channel is dropped.
///
///     use paintcore::{decode_tga,Rgb8};
///
///     let mut data = vec![0,0,2,0,0,0,0,0,0,0,0,0, 2,0, 1,0, 24,0];
///     data.extend(&[1,2,3, 4,5,6]);
///     let buf = decode_tga(&data, false).unwrap();
///     assert_eq!(buf.get(0,0), Some(Rgb8::new(3,2,1)));
///     assert_eq!(buf.get(1,0), Some(Rgb8::new(6,5,4)));
///
pub fn decode_tga(data: &[u8], flip_y: bool) -> Result<PixelBuffer> {
    let hdr = TgaHeader::parse(data)?;
    let size = hdr.image_size();
    let block = &data[HEADER_LEN ..];
    if block.len() < size {
        return Err(ImageError::TruncatedData { expected: size, found: block.len() });
    }
    let block = &block[.. size];
    log::debug!("tga: {}x{} {} bpp", hdr.width, hdr.height, hdr.bpp);

    let (w, h) = (usize::from(hdr.width), usize::from(hdr.height));
    let bpp = hdr.bytes_per_pixel();
    let mut pixels = vec![Rgb8::default(); w * h];
    for (y, row) in block.chunks_exact(w * bpp).enumerate() {
        let dst = &mut pixels[(h - y - 1) * w .. (h - y) * w];
        for (p, src) in dst.iter_mut().zip(row.chunks_exact(bpp)) {
            *p = Rgb8::from_bgr(src);
        }
    }
    let mut buf = PixelBuffer::from_pixels(w, h, pixels);
    if flip_y {
        buf.flip_vertical();
    }
    Ok(buf)
}

/// Encode a buffer as a 24 bit uncompressed TGA file
///
/// Fails if the buffer is too large for the 16 bit size fields
pub fn encode_tga(buf: &PixelBuffer) -> Result<Vec<u8>> {
    let too_big = |v: usize| ImageError::MalformedHeader(
        format!("dimension {} exceeds {}", v, u16::MAX));
    let hdr = TgaHeader {
        width: u16::try_from(buf.width()).map_err(|_| too_big(buf.width()))?,
        height: u16::try_from(buf.height()).map_err(|_| too_big(buf.height()))?,
        bpp: 24,
        descriptor: 0,
    };
    let mut out = Vec::with_capacity(HEADER_LEN + hdr.image_size());
    out.extend_from_slice(&TGA_SIGNATURE);
    out.extend_from_slice(&hdr.to_bytes());
    for y in (0 .. buf.height()).rev() {
        for c in buf.row(y) {
            out.extend_from_slice(&c.to_bgr());
        }
    }
    Ok(out)
}
