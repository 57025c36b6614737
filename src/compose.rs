//! Compositing of whole buffers

use crate::buffer::PixelBuffer;
use crate::color::Rgb8;

impl PixelBuffer {
    /// Copy every pixel of `src` onto this buffer with its top-left corner
    ///   at (`x`,`y`)
    ///
    /// Colors are copied as is, without blending. Pixels landing outside
    ///   of this buffer are dropped.
    ///
    ///     use paintcore::{PixelBuffer,Rgb8};
    ///
    ///     let mut canvas = PixelBuffer::new(4,4);
    ///     let mut icon = PixelBuffer::new(2,2);
    ///     icon.fill(Rgb8::YELLOW);
    ///     canvas.draw_image(&icon, 3, -1);
    ///     assert_eq!(canvas.get(3,0), Some(Rgb8::YELLOW));
    ///     assert_eq!(canvas.get(3,1), Some(Rgb8::BLACK));
    ///
    pub fn draw_image(&mut self, src: &PixelBuffer, x: i64, y: i64) {
        let (x, y) = (i128::from(x), i128::from(y));
        let (w, h) = (self.width() as i128, self.height() as i128);
        let (sw, sh) = (src.width() as i128, src.height() as i128);
        // Source range that lands inside of the destination
        let i0 = (-x).max(0).min(sw);
        let i1 = (w - x).max(0).min(sw);
        let j0 = (-y).max(0).min(sh);
        let j1 = (h - y).max(0).min(sh);
        if i0 >= i1 {
            return;
        }
        for j in j0 .. j1 {
            let row = &src.row(j as usize)[i0 as usize .. i1 as usize];
            let start = ((y + j) * w + x + i0) as usize;
            self.pixels_mut()[start .. start + row.len()].copy_from_slice(row);
        }
    }
    /// Replace each pixel with `f(self, other)` over the area both buffers
    ///   share
    ///
    ///     use paintcore::{PixelBuffer,Rgb8};
    ///
    ///     let mut a = PixelBuffer::new(2,1);
    ///     a.fill(Rgb8::RED);
    ///     let mut b = PixelBuffer::new(1,1);
    ///     b.fill(Rgb8::BLUE);
    ///     a.combine(&b, |p, q| p + q);
    ///     assert_eq!(a.get(0,0), Some(Rgb8::PURPLE));
    ///     assert_eq!(a.get(1,0), Some(Rgb8::RED));
    ///
    pub fn combine<F>(&mut self, other: &PixelBuffer, f: F)
        where F: Fn(Rgb8, Rgb8) -> Rgb8
    {
        let w = self.width().min(other.width());
        let h = self.height().min(other.height());
        for y in 0 .. h {
            for x in 0 .. w {
                let p = f(self.get_unchecked(x, y), other.get_unchecked(x, y));
                self.set_unchecked(x, y, p);
            }
        }
    }
}
