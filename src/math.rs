//! Fixed point helpers for 8-bit color components

/// Interpolate a value between two end points using fixed point math
///
/// `a` is the interpolation weight in [0,255]; 0 yields `p`, 255 yields `q`
///
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q,p,a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0 : i32 = (q - p) * a + base_msb - v; // Signed multiplication
    let t1 : i32 = ((t0>>base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

/// Multiply two u8 values as if both were fractions of 255
///
/// Rounds to nearest: `multiply_u8(255, x) == x`
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let (a,b) = (u32::from(a), u32::from(b));
    let t : u32 = a * b + base_msb;
    let tt : u32 = ((t >> base_shift) + t) >> base_shift;
    tt as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_end_points() {
        for &(p,q) in [(0u8,255u8), (255,0), (17,200), (90,90)].iter() {
            assert_eq!(lerp_u8(p, q, 0), p);
            assert_eq!(lerp_u8(p, q, 255), q);
        }
    }
    #[test]
    fn multiply_identity() {
        for x in 0 ..= 255u8 {
            assert_eq!(multiply_u8(255, x), x);
            assert_eq!(multiply_u8(0, x), 0);
        }
    }
}
