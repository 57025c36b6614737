//! Presentation of finished buffers
//!
//! A [Surface] receives a completed frame. [PpmSurface] writes each frame
//!   as a binary PPM (Portable Pixmap Format) image so that output can be
//!   inspected without a window.
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
//! [Surface]: trait.Surface.html
//! [PpmSurface]: struct.PpmSurface.html

use crate::buffer::PixelBuffer;
use crate::error::Result;

use std::io::Write;

/// Accepts a finished buffer for display
pub trait Surface {
    fn present(&mut self, buf: &PixelBuffer) -> Result<()>;
}

/// Write `buf` as binary PPM (P6)
pub fn write_ppm<W: Write>(out: &mut W, buf: &PixelBuffer) -> Result<()> {
    write!(out, "P6\n{} {}\n255\n", buf.width(), buf.height())?;
    out.write_all(&buf.to_rgb_bytes())?;
    Ok(())
}

/// Surface presenting every frame as a PPM image to a writer
#[derive(Debug)]
pub struct PpmSurface<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> PpmSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }
    /// Number of frames presented so far
    pub fn frames(&self) -> usize {
        self.frames
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for PpmSurface<W> {
    fn present(&mut self, buf: &PixelBuffer) -> Result<()> {
        write_ppm(&mut self.out, buf)?;
        self.out.flush()?;
        self.frames += 1;
        log::debug!("presented frame {} ({}x{})", self.frames, buf.width(), buf.height());
        Ok(())
    }
}
