//! Single channel floating point buffer

/// Grid of `f32` samples, row-major with the origin at the top-left
///
/// Useful for depth, coverage or other per-pixel scalars that accompany a
/// [PixelBuffer](../buffer/struct.PixelBuffer.html)
#[derive(Debug,Default,Clone,PartialEq)]
pub struct FloatBuffer {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl FloatBuffer {
    /// Create a new buffer with all samples at 0.0
    pub fn new(width: usize, height: usize) -> Self {
        FloatBuffer { data: vec![0.0; width * height], width, height }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn data(&self) -> &[f32] {
        &self.data
    }
    /// Sample at (`x`,`y`); `None` outside of the buffer
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }
    /// Write sample at (`x`,`y`); ignored outside of the buffer
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = v;
        }
    }
    pub fn fill(&mut self, v: f32) {
        self.data.iter_mut().for_each(|d| *d = v);
    }
    /// Change the size, keeping old samples in the top-left corner
    pub fn resize(&mut self, width: usize, height: usize) {
        let mut data = vec![0.0; width * height];
        let w = width.min(self.width);
        let h = height.min(self.height);
        for y in 0 .. h {
            data[y * width .. y * width + w]
                .copy_from_slice(&self.data[y * self.width .. y * self.width + w]);
        }
        self.data = data;
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_keeps_top_left() {
        let mut f = FloatBuffer::new(3, 3);
        f.set(1, 1, 2.5);
        f.set(2, 2, 9.0);
        f.resize(2, 4);
        assert_eq!(f.get(1, 1), Some(2.5));
        assert_eq!(f.get(1, 3), Some(0.0));
        assert_eq!(f.get(2, 2), None);
        assert_eq!(f.data().len(), 8);
    }
}
