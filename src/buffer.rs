//! Pixel buffer

use crate::color::Rgb8;

use std::ops::Index;
use std::ops::IndexMut;

/// Number of bytes each pixel occupies once flattened
pub const BYTES_PER_PIXEL : usize = 3;

/// Pixel Buffer
///
/// Colors are stored in row-major order (C-format) with the origin at the
/// top-left and a row stride of `width`. The pixel vector always holds
/// exactly `width * height` entries.
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct PixelBuffer {
    pixels: Vec<Rgb8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Create a new buffer of `width` x `height`
    ///
    /// All pixels start out black (zero)
    ///
    ///     use paintcore::{PixelBuffer,Rgb8};
    ///
    ///     let buf = PixelBuffer::new(3,2);
    ///     assert_eq!(buf.width(), 3);
    ///     assert_eq!(buf.height(), 2);
    ///     assert_eq!(buf.get(2,1), Some(Rgb8::BLACK));
    ///
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer { pixels: vec![Rgb8::default(); width * height], width, height }
    }
    /// Create a buffer from packed Red, Green, Blue bytes
    ///
    /// Returns `None` if `data` is not exactly `width * height * 3` bytes
    pub fn from_rgb_bytes(width: usize, height: usize, data: &[u8]) -> Option<Self> {
        if data.len() != width * height * BYTES_PER_PIXEL {
            return None;
        }
        let pixels = data.chunks_exact(BYTES_PER_PIXEL)
            .map(|p| Rgb8::new(p[0], p[1], p[2]))
            .collect();
        Some(PixelBuffer { pixels, width, height })
    }
    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb8>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        PixelBuffer { pixels, width, height }
    }
    /// Image Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Image Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Bytes per pixel of the flattened representation
    pub fn bytes_per_pixel(&self) -> usize {
        BYTES_PER_PIXEL
    }
    /// Number of pixels; width * height
    pub fn len(&self) -> usize {
        self.pixels.len()
    }
    /// Returns true for a zero-sized buffer
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }
    /// All pixels in row-major order, mutable
    pub fn pixels_mut(&mut self) -> &mut [Rgb8] {
        &mut self.pixels
    }
    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[Rgb8] {
        debug_assert!(y < self.height);
        &self.pixels[y * self.width .. (y+1) * self.width]
    }
    /// Flatten into packed Red, Green, Blue bytes
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgb().to_vec()).collect()
    }
    /// Check if (`x`,`y`) lies inside the buffer
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }
    /// Color of pixel at (`x`,`y`)
    ///
    /// Locations outside of the buffer return `None`
    ///
    ///     use paintcore::PixelBuffer;
    ///
    ///     let buf = PixelBuffer::new(2,2);
    ///     assert!(buf.get(1,1).is_some());
    ///     assert!(buf.get(2,0).is_none());
    ///     assert!(buf.get(-1,0).is_none());
    ///
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb8> {
        if self.contains(x, y) {
            Some(self.get_unchecked(x as usize, y as usize))
        } else {
            None
        }
    }
    /// Copies the color `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the buffer are ignored
    ///
    ///     use paintcore::{PixelBuffer,Rgb8};
    ///
    ///     let mut buf = PixelBuffer::new(1,2);
    ///     buf.set(0,1, Rgb8::WHITE);
    ///     assert_eq!(buf.get(0,0), Some(Rgb8::BLACK));
    ///     assert_eq!(buf.get(0,1), Some(Rgb8::WHITE));
    ///
    ///     buf.set(10,10, Rgb8::WHITE); // Ignored, outside of range
    ///
    pub fn set(&mut self, x: i64, y: i64, c: Rgb8) {
        if self.contains(x, y) {
            self.set_unchecked(x as usize, y as usize, c);
        }
    }
    /// Color of pixel at (`x`,`y`) without a bounds check on each axis
    ///
    /// Callers must have validated `x < width` and `y < height`
    #[inline]
    pub fn get_unchecked(&self, x: usize, y: usize) -> Rgb8 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }
    /// Write pixel at (`x`,`y`) without a bounds check on each axis
    ///
    /// Callers must have validated `x < width` and `y < height`
    #[inline]
    pub fn set_unchecked(&mut self, x: usize, y: usize, c: Rgb8) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = c;
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: Rgb8) {
        self.pixels.iter_mut().for_each(|p| *p = c);
    }
    /// Change the size of the buffer, keeping the old content in the
    ///   top-left corner
    ///
    /// Newly exposed pixels are black
    ///
    ///     use paintcore::{PixelBuffer,Rgb8};
    ///
    ///     let mut buf = PixelBuffer::new(2,2);
    ///     buf.fill(Rgb8::RED);
    ///     buf.resize(3,1);
    ///     assert_eq!(buf.get(1,0), Some(Rgb8::RED));
    ///     assert_eq!(buf.get(2,0), Some(Rgb8::BLACK));
    ///
    pub fn resize(&mut self, width: usize, height: usize) {
        let mut pixels = vec![Rgb8::default(); width * height];
        let w = width.min(self.width);
        let h = height.min(self.height);
        for y in 0 .. h {
            let src = &self.pixels[y * self.width .. y * self.width + w];
            pixels[y * width .. y * width + w].copy_from_slice(src);
        }
        self.pixels = pixels;
        self.width = width;
        self.height = height;
    }
    /// Change the size of the buffer and scale the content using
    ///   nearest-neighbor sampling
    ///
    /// Destination (x,y) samples source (floor(w0 * x/w), floor(h0 * y/h))
    pub fn scale(&mut self, width: usize, height: usize) {
        let mut pixels = vec![Rgb8::default(); width * height];
        if !self.is_empty() {
            for y in 0 .. height {
                let sy = scale_index(self.height, y, height);
                for x in 0 .. width {
                    let sx = scale_index(self.width, x, width);
                    pixels[y * width + x] = self.get_unchecked(sx, sy);
                }
            }
        }
        self.pixels = pixels;
        self.width = width;
        self.height = height;
    }
    /// Copy a `width` x `height` area starting at (`x0`,`y0`) into a new buffer
    ///
    /// Parts of the area outside of this buffer are left black
    pub fn sub_area(&self, x0: usize, y0: usize, width: usize, height: usize) -> PixelBuffer {
        let mut out = PixelBuffer::new(width, height);
        let w = self.width.saturating_sub(x0).min(width);
        let h = self.height.saturating_sub(y0).min(height);
        for y in 0 .. h {
            let start = (y0 + y) * self.width + x0;
            out.pixels[y * width .. y * width + w]
                .copy_from_slice(&self.pixels[start .. start + w]);
        }
        out
    }
    /// Reverse the order of the rows in place
    pub fn flip_vertical(&mut self) {
        let w = self.width;
        let h = self.height;
        for y in 0 .. h / 2 {
            let (top, bottom) = self.pixels.split_at_mut((h - y - 1) * w);
            top[y * w .. (y+1) * w].swap_with_slice(&mut bottom[.. w]);
        }
    }
}

/// Nearest source index for destination index `i` when mapping `dst` samples
///   onto `src` samples
fn scale_index(src: usize, i: usize, dst: usize) -> usize {
    src * i / dst
}

impl Index<(usize,usize)> for PixelBuffer {
    type Output = Rgb8;
    fn index(&self, index: (usize, usize)) -> &Rgb8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.pixels[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for PixelBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Rgb8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.pixels[index.1 * self.width + index.0]
    }
}
