pub const CHANNELS: usize = 3;

pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const BLACK: [f32; 3] = [0.0, 0.0, 0.0];

/// Flat row-major RGB float image. Row 0 is the bottom of the image plane.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer {
    pub width: usize,
    pub height: usize,
    pub buffer: Vec<f32>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize) -> ImageBuffer {
        ImageBuffer {
            width,
            height,
            buffer: vec![0.0; CHANNELS * width * height],
        }
    }

    /// Clears to black and resizes, keeping the allocation where possible.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.buffer.clear();
        self.buffer.resize(CHANNELS * width * height, 0.0);
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "{} {}", x, y);
        (y * self.width + x) * CHANNELS
    }

    pub fn pixel(&self, x: usize, y: usize) -> [f32; 3] {
        let idx = self.offset(x, y);
        [self.buffer[idx], self.buffer[idx + 1], self.buffer[idx + 2]]
    }

    /// Same as [`ImageBuffer::pixel`] but with row 0 at the top, the way window and file
    /// formats lay rows out.
    pub fn pixel_top_down(&self, x: usize, y: usize) -> [f32; 3] {
        self.pixel(x, self.height - 1 - y)
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [f32; 3]) {
        let idx = self.offset(x, y);
        self.buffer[idx..idx + CHANNELS].copy_from_slice(&rgb);
    }

    pub fn row_len(&self) -> usize {
        CHANNELS * self.width
    }
}
