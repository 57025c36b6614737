//! Software rasterization for a simple paint tool
//!
//! How does this work
//!    buf = PixelBuffer::new(w, h)           -- or load_png / load_tga
//!  Drawing (raster)
//!    draw_line                              -- DDA
//!    draw_rect                              -- border by distance to the edges
//!    draw_triangle
//!      draw_line x 3                        -- stroke
//!      EdgeTable::add_edge x 3
//!      fill_edges                           -- active edge sweep
//!        scan_span                          -- one span per edge pair
//!  Compositing (compose)
//!    draw_image                             -- clipped copy, no blending
//!  Output
//!    encode_tga / save_tga
//!    Surface::present                       -- PpmSurface
//!
//! Drawing never fails: anything outside of the buffer is clipped silently.
//!   Only codecs and file access return errors.

pub mod math;
pub mod color;
pub mod buffer;
pub mod float_buffer;
pub mod raster;
pub mod compose;
pub mod error;
pub mod tga;
pub mod png;
pub mod ppm;
pub mod resource;

pub use color::*;
pub use buffer::*;
pub use float_buffer::*;
pub use raster::*;
pub use error::ImageError;
pub use tga::*;
pub use png::*;
pub use ppm::*;
pub use resource::*;
