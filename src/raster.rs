//! Rasterizer
//!
//! Aliased drawing primitives operating directly on a [PixelBuffer].
//! Every primitive clips silently against the buffer: coordinates outside
//! of the buffer are never an error, they are simply not drawn.
//!
//! Triangles are filled with a classic scanline algorithm
//!   - Edge Table: non-horizontal edges bucketed by their lower scanline
//!   - Active Edge Table: edges crossing the current scanline, sorted by x
//!   - Spans between consecutive pairs of active edges are filled
//!
//! [PixelBuffer]: ../buffer/struct.PixelBuffer.html

use crate::buffer::PixelBuffer;
use crate::color::Rgb8;

/// Point in buffer coordinates
///
/// Components are truncated toward zero when rasterized
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    fn ipos(self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }
}
impl From<(f64,f64)> for Point {
    fn from(p: (f64,f64)) -> Self {
        Point::new(p.0, p.1)
    }
}
impl From<(i64,i64)> for Point {
    fn from(p: (i64,i64)) -> Self {
        Point::new(p.0 as f64, p.1 as f64)
    }
}

/// Polygon edge while scan converting
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    /// Scanline where the edge ends (exclusive)
    pub y_max: i64,
    /// Intersection with the current scanline
    pub x: f64,
    /// Change in x per scanline, dx/dy
    pub inv_slope: f64,
}

/// Edges bucketed by the scanline they start on
#[derive(Debug,Default)]
pub struct EdgeTable {
    buckets: Vec<Vec<Edge>>,
}

impl EdgeTable {
    /// Create an empty table covering scanlines `0 .. height`
    pub fn new(height: usize) -> Self {
        EdgeTable { buckets: vec![vec![]; height] }
    }
    /// Add the edge from `(x0,y0)` to `(x1,y1)`
    ///
    /// Horizontal edges are ignored as are edges starting outside of
    ///   the table
    pub fn add_edge(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        if y0 == y1 {
            return;
        }
        let (x0,y0,x1,y1) = if y0 > y1 { (x1,y1,x0,y0) } else { (x0,y0,x1,y1) };
        let e = Edge {
            y_max: y1,
            x: x0 as f64,
            inv_slope: (x1 as f64 - x0 as f64) / (y1 as f64 - y0 as f64),
        };
        if y0 >= 0 && (y0 as usize) < self.buckets.len() {
            self.buckets[y0 as usize].push(e);
        }
    }
    /// Remove and return the edges starting on scanline `y`
    pub fn take(&mut self, y: usize) -> Vec<Edge> {
        match self.buckets.get_mut(y) {
            Some(v) => std::mem::take(v),
            None => vec![],
        }
    }
    /// Total number of edges waiting in the table
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PixelBuffer {
    /// Draw a line from `(x0,y0)` to `(x1,y1)` of color `c`
    ///
    /// Uses a [Digital Differential Analyzer](https://en.wikipedia.org/wiki/Digital_differential_analyzer_(graphics_algorithm)),
    ///   stepping along the major axis one pixel at a time. Both end points
    ///   are plotted; a zero length line plots a single point.
    ///
    ///     use paintcore::{PixelBuffer,Rgb8};
    ///
    ///     let mut buf = PixelBuffer::new(4,4);
    ///     buf.draw_line(0,0, 3,3, Rgb8::RED);
    ///     for i in 0 .. 4 {
    ///         assert_eq!(buf.get(i,i), Some(Rgb8::RED));
    ///     }
    ///     assert_eq!(buf.get(1,0), Some(Rgb8::BLACK));
    ///
    pub fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, c: Rgb8) {
        if x0 == x1 && y0 == y1 {
            self.set(x0, y0, c);
            return;
        }
        let (fx, fy) = (x0 as f64, y0 as f64);
        let (dx, dy) = (x1 as f64 - fx, y1 as f64 - fy);
        let steps = dx.abs().max(dy.abs());
        let (xinc, yinc) = (dx / steps, dy / steps);
        let (w, h) = (self.width() as f64, self.height() as f64);

        // Skip the steps that cannot land inside of the buffer
        let (tx0, tx1) = match steps_inside(fx, xinc, w) {
            Some(t) => t,
            None => return,
        };
        let (ty0, ty1) = match steps_inside(fy, yinc, h) {
            Some(t) => t,
            None => return,
        };
        let first = (tx0.max(ty0).floor() - 1.0).max(0.0);
        let last = (tx1.min(ty1).ceil() + 1.0).min(steps);
        if first > last {
            return;
        }
        let (mut x, mut y) = if first == 0.0 {
            (fx, fy)
        } else {
            (fx + first * xinc, fy + first * yinc)
        };
        for _ in 0 ..= (last - first) as u64 {
            if x >= 0.0 && x < w && y >= 0.0 && y < h {
                self.set_unchecked(x as usize, y as usize, c);
            }
            x += xinc;
            y += yinc;
        }
    }
    /// Fill the closed span `[x0,x1]` on row `y` with color `c`
    ///
    /// End points are swapped if reversed; pixels outside are ignored
    pub fn scan_span(&mut self, x0: i64, x1: i64, y: i64, c: Rgb8) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        self.copy_hline(x0, x1.saturating_add(1), y, c);
    }
    /// Draw an axis aligned rectangle with top-left corner `(x,y)`
    ///
    /// The border is `border_width` pixels thick and drawn inside the
    ///   rectangle: a pixel is part of the border when it lies less than
    ///   `border_width` pixels from an edge. If `fill` is given, the area
    ///   inside the border is filled. Nothing is drawn outside of
    ///   `[x,x+w) x [y,y+h)`. Negative `w` or `h` are normalized so that
    ///   `(x,y)` becomes the opposite corner, as produced by dragging up
    ///   or left.
    ///
    ///     use paintcore::{PixelBuffer,Rgb8};
    ///
    ///     let mut buf = PixelBuffer::new(5,5);
    ///     buf.draw_rect(0,0, 5,5, Rgb8::WHITE, 1, Some(Rgb8::BLUE));
    ///     assert_eq!(buf.get(0,0), Some(Rgb8::WHITE));
    ///     assert_eq!(buf.get(4,2), Some(Rgb8::WHITE));
    ///     assert_eq!(buf.get(2,2), Some(Rgb8::BLUE));
    ///
    pub fn draw_rect(&mut self, x: i64, y: i64, w: i64, h: i64,
                     border: Rgb8, border_width: u32, fill: Option<Rgb8>) {
        let (x0, x1) = extent(x, w);
        let (y0, y1) = extent(y, h);
        let bw = i128::from(border_width);

        let (cx0, cx1) = (x0.max(0), x1.min(self.width() as i128));
        let (cy0, cy1) = (y0.max(0), y1.min(self.height() as i128));
        for j in cy0 .. cy1 {
            let dy = (j - y0).min(y1 - 1 - j);
            for i in cx0 .. cx1 {
                let d = dy.min(i - x0).min(x1 - 1 - i);
                let c = if d < bw {
                    border
                } else {
                    match fill {
                        Some(fill) => fill,
                        None => continue,
                    }
                };
                self.set_unchecked(i as usize, j as usize, c);
            }
        }
    }
    /// Draw a triangle with corners `p0`, `p1` and `p2`
    ///
    /// The three edges are always stroked with [draw_line] using `border`.
    ///   If `fill` is given, the interior is filled by scan conversion.
    ///   Triangles with zero area only receive the stroke.
    ///
    ///     use paintcore::{PixelBuffer,Point,Rgb8};
    ///
    ///     let mut buf = PixelBuffer::new(8,8);
    ///     buf.draw_triangle(Point::new(0.,0.), Point::new(7.,0.), Point::new(0.,7.),
    ///                       Rgb8::WHITE, Some(Rgb8::RED));
    ///     assert_eq!(buf.get(0,7), Some(Rgb8::WHITE));
    ///     assert_eq!(buf.get(2,2), Some(Rgb8::RED));
    ///     assert_eq!(buf.get(6,6), Some(Rgb8::BLACK));
    ///
    /// [draw_line]: #method.draw_line
    pub fn draw_triangle(&mut self, p0: Point, p1: Point, p2: Point,
                         border: Rgb8, fill: Option<Rgb8>) {
        let (a, b, c) = (p0.ipos(), p1.ipos(), p2.ipos());
        self.draw_line(a.0, a.1, b.0, b.1, border);
        self.draw_line(b.0, b.1, c.0, c.1, border);
        self.draw_line(c.0, c.1, a.0, a.1, border);

        let fill = match fill {
            Some(fill) => fill,
            None => return,
        };
        if area2(a, b, c) == Some(0) {
            return;
        }

        let mut et = EdgeTable::new(self.height());
        et.add_edge(a.0, a.1, b.0, b.1);
        et.add_edge(b.0, b.1, c.0, c.1);
        et.add_edge(c.0, c.1, a.0, a.1);
        self.fill_edges(et, fill);
    }
    /// Sweep all scanlines, filling between pairs of active edges
    fn fill_edges(&mut self, mut et: EdgeTable, c: Rgb8) {
        let mut aet : Vec<Edge> = vec![];
        for y in 0 .. self.height() {
            aet.extend(et.take(y));
            let yi = y as i64;
            aet.retain(|e| e.y_max > yi);
            aet.sort_by(|a, b| a.x.total_cmp(&b.x));
            for pair in aet.chunks_exact(2) {
                let x0 = pair[0].x.ceil() as i64;
                let x1 = pair[1].x.floor() as i64;
                self.scan_span(x0, x1, yi, c);
            }
            for e in aet.iter_mut() {
                e.x += e.inv_slope;
            }
        }
    }
    /// Fill the half open range `[x0,x1)` on row `y`, clipped
    fn copy_hline(&mut self, x0: i64, x1: i64, y: i64, c: Rgb8) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width() as i64);
        for x in x0 .. x1 {
            self.set_unchecked(x as usize, y as usize, c);
        }
    }
}

/// Twice the signed area of the triangle `abc`, `None` if it overflows
fn area2(a: (i64, i64), b: (i64, i64), c: (i64, i64)) -> Option<i128> {
    let d = |p: i64, q: i64| i128::from(p) - i128::from(q);
    let l = d(b.0, a.0).checked_mul(d(c.1, a.1))?;
    let r = d(c.0, a.0).checked_mul(d(b.1, a.1))?;
    l.checked_sub(r)
}

/// Range of steps `t` where `p + t * inc` lies within `[0,size)`
fn steps_inside(p: f64, inc: f64, size: f64) -> Option<(f64, f64)> {
    if inc == 0.0 {
        if p >= 0.0 && p < size {
            Some((f64::NEG_INFINITY, f64::INFINITY))
        } else {
            None
        }
    } else {
        let a = -p / inc;
        let b = (size - p) / inc;
        Some((a.min(b), a.max(b)))
    }
}

/// Half open range covered by `len` pixels starting at `p`, negative
///   lengths extending backwards
fn extent(p: i64, len: i64) -> (i128, i128) {
    let (p, len) = (i128::from(p), i128::from(len));
    if len < 0 { (p + len, p) } else { (p, p + len) }
}
