//! Owned, in-memory pixel buffers used by the drawing primitives.
//!
//! Coordinates are signed so geometry code may wander off-canvas and test
//! with [`RgbImage::is_inside`] before touching pixels; `get`/`set` treat an
//! out-of-bounds access as a caller bug and panic.

/// Interleaved 8-bit RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImage {
    /// All-black image of the given size.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "zero-sized image");
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    /// Image width in pixels.
    pub const fn w(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub const fn h(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies on the canvas.
    pub const fn is_inside(&self, x: i64, y: i64) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    const fn offset(&self, x: i64, y: i64) -> usize {
        (y as usize * self.width + x as usize) * 3
    }

    /// RGB value at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the canvas.
    pub fn get(&self, x: i64, y: i64) -> (u8, u8, u8) {
        assert!(self.is_inside(x, y), "pixel ({}, {}) out of bounds", x, y);
        let i = self.offset(x, y);
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Write the RGB value at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the canvas.
    pub fn set(&mut self, x: i64, y: i64, r: u8, g: u8, b: u8) {
        assert!(self.is_inside(x, y), "pixel ({}, {}) out of bounds", x, y);
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }

    /// Convert to grayscale with Rec. 601 luma weights.
    pub fn to_gray(&self) -> GrayImage {
        let data = self
            .data
            .chunks_exact(3)
            .map(|px| {
                let luma = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
                luma.round().clamp(0.0, 255.0) as u8
            })
            .collect();
        GrayImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Single-channel 8-bit image, also used as a mask (nonzero = selected).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImage {
    /// All-black image of the given size.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "zero-sized image");
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Image width in pixels.
    pub const fn w(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub const fn h(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies on the canvas.
    pub const fn is_inside(&self, x: i64, y: i64) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Pixel value at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the canvas.
    pub fn get(&self, x: i64, y: i64) -> u8 {
        assert!(self.is_inside(x, y), "pixel ({}, {}) out of bounds", x, y);
        self.data[y as usize * self.width + x as usize]
    }

    /// Write the pixel value at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the canvas.
    pub fn set(&mut self, x: i64, y: i64, value: u8) {
        assert!(self.is_inside(x, y), "pixel ({}, {}) out of bounds", x, y);
        self.data[y as usize * self.width + x as usize] = value;
    }

    /// Convert to RGB by replicating the channel.
    pub fn to_rgb(&self) -> RgbImage {
        let mut data = Vec::with_capacity(self.data.len() * 3);
        for &value in &self.data {
            data.extend_from_slice(&[value, value, value]);
        }
        RgbImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}
