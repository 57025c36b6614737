//! Colors

use crate::math::{lerp_u8, multiply_u8};

use std::ops::{Add, AddAssign, Mul, Sub};

/// Color as Red, Green, Blue
///
/// Equality is component-wise; arithmetic saturates at `[0,255]`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK  : Rgb8 = Rgb8 { r:   0, g:   0, b:   0 };
    pub const WHITE  : Rgb8 = Rgb8 { r: 255, g: 255, b: 255 };
    pub const GRAY   : Rgb8 = Rgb8 { r: 128, g: 128, b: 128 };
    pub const RED    : Rgb8 = Rgb8 { r: 255, g:   0, b:   0 };
    pub const GREEN  : Rgb8 = Rgb8 { r:   0, g: 255, b:   0 };
    pub const BLUE   : Rgb8 = Rgb8 { r:   0, g:   0, b: 255 };
    pub const CYAN   : Rgb8 = Rgb8 { r:   0, g: 255, b: 255 };
    pub const PURPLE : Rgb8 = Rgb8 { r: 255, g:   0, b: 255 };
    pub const YELLOW : Rgb8 = Rgb8 { r: 255, g: 255, b:   0 };

    /// Create new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::WHITE
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::BLACK
    }
    /// Gray scale color with all three components set to `g`
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Build a color from bytes stored as Blue, Green, Red
    pub fn from_bgr(p: &[u8]) -> Self {
        Self::new(p[2], p[1], p[0])
    }
    /// Components as Blue, Green, Red
    pub fn to_bgr(self) -> [u8;3] {
        [self.b, self.g, self.r]
    }
    /// Components as Red, Green, Blue
    pub fn to_rgb(self) -> [u8;3] {
        [self.r, self.g, self.b]
    }
    /// Linear interpolation from `self` toward `other`
    ///
    /// `t` is clamped to [0,1]; 0 returns `self`, 1 returns `other`
    ///
    ///     use paintcore::Rgb8;
    ///
    ///     let c = Rgb8::BLACK.blend(Rgb8::WHITE, 1.0);
    ///     assert_eq!(c, Rgb8::WHITE);
    ///     assert_eq!(Rgb8::RED.blend(Rgb8::BLUE, 0.0), Rgb8::RED);
    ///
    pub fn blend(self, other: Rgb8, t: f64) -> Rgb8 {
        let a = cu8(t.max(0.0).min(1.0));
        Rgb8::new(lerp_u8(self.r, other.r, a),
                  lerp_u8(self.g, other.g, a),
                  lerp_u8(self.b, other.b, a))
    }
    /// Modulate each component by the matching component of `other`
    pub fn modulate(self, other: Rgb8) -> Rgb8 {
        Rgb8::new(multiply_u8(self.r, other.r),
                  multiply_u8(self.g, other.g),
                  multiply_u8(self.b, other.b))
    }
}

/// Convert an f64 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

impl Add for Rgb8 {
    type Output = Rgb8;
    fn add(self, o: Rgb8) -> Rgb8 {
        Rgb8::new(self.r.saturating_add(o.r),
                  self.g.saturating_add(o.g),
                  self.b.saturating_add(o.b))
    }
}
impl AddAssign for Rgb8 {
    fn add_assign(&mut self, o: Rgb8) {
        *self = *self + o;
    }
}
impl Sub for Rgb8 {
    type Output = Rgb8;
    fn sub(self, o: Rgb8) -> Rgb8 {
        Rgb8::new(self.r.saturating_sub(o.r),
                  self.g.saturating_sub(o.g),
                  self.b.saturating_sub(o.b))
    }
}
impl Mul<f64> for Rgb8 {
    type Output = Rgb8;
    fn mul(self, v: f64) -> Rgb8 {
        let s = |c: u8| (f64::from(c) * v).max(0.0).min(255.0) as u8;
        Rgb8::new(s(self.r), s(self.g), s(self.b))
    }
}

impl From<[u8;3]> for Rgb8 {
    fn from(c: [u8;3]) -> Rgb8 {
        Rgb8::new(c[0], c[1], c[2])
    }
}
impl From<Rgb8> for [u8;3] {
    fn from(c: Rgb8) -> [u8;3] {
        c.to_rgb()
    }
}
