#![allow(dead_code)]

use std::path::PathBuf;

use paintcore::{PixelBuffer, Rgb8};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Scratch directory for files written by tests
pub fn tmp_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("tmp");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Buffer with a distinct color at every pixel
pub fn gradient(w: usize, h: usize) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h);
    for y in 0 .. h {
        for x in 0 .. w {
            buf.set(x as i64, y as i64, Rgb8::new(x as u8, y as u8, (x * 7 + y * 13) as u8));
        }
    }
    buf
}

/// Coordinates of all pixels equal to `c`
pub fn pixels_of(buf: &PixelBuffer, c: Rgb8) -> Vec<(usize, usize)> {
    let mut v = vec![];
    for y in 0 .. buf.height() {
        for x in 0 .. buf.width() {
            if buf[(x, y)] == c {
                v.push((x, y));
            }
        }
    }
    v
}
