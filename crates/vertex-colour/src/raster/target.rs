use super::RasterError;

/// RGBA `f32` colour target, row-major, origin top-left.
///
/// Values are stored as written by the fragment stage; no clamping or
/// format conversion happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTarget {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
    written: Vec<bool>,
}

impl ColorTarget {
    /// Creates a target cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyTarget { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            pixels: vec![[0.0; 4]; len],
            written: vec![false; len],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills every pixel with `color` and forgets coverage.
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
        self.written.fill(false);
    }

    /// Pixel at `(x, y)`, or `None` outside the target.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Whether any fragment was written to `(x, y)` since the last clear.
    pub fn is_covered(&self, x: u32, y: u32) -> bool {
        self.index(x, y).is_some_and(|i| self.written[i])
    }

    /// Number of pixels written since the last clear.
    pub fn covered(&self) -> usize {
        self.written.iter().filter(|w| **w).count()
    }

    /// Iterates `(x, y, rgba)` over written pixels.
    pub fn covered_pixels(&self) -> impl Iterator<Item = (u32, u32, [f32; 4])> + '_ {
        let w = self.width;
        self.pixels
            .iter()
            .zip(self.written.iter())
            .enumerate()
            .filter(|(_, (_, written))| **written)
            .map(move |(i, (px, _))| (i as u32 % w, i as u32 / w, *px))
    }

    pub(super) fn write(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
            self.written[i] = true;
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
