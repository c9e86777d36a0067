//! Decoded 8-bit RGB rasters.

/// Decoded 8-bit RGB image, 3 bytes per pixel, row major.
///
/// Captured once from the source image and treated as immutable input by
/// the pipeline; every operation that changes pixels produces a new raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Everything that can go wrong when constructing an [`RgbRaster`]
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("width or height must not be zero")]
    InvalidDimensions,

    #[error("invalid buffer size, expected {expected} bytes but got {got}")]
    InvalidBufferSize { expected: usize, got: usize },
}

/// The rasters handed to [`RgbRaster::diff`] did not have equal dimensions
#[derive(Debug, thiserror::Error)]
#[error("raster dimensions differ, {left_width}x{left_height} vs {right_width}x{right_height}")]
pub struct DimensionMismatch {
    pub left_width: usize,
    pub left_height: usize,
    pub right_width: usize,
    pub right_height: usize,
}

impl RgbRaster {
    /// All-black raster of the given dimensions.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 3],
        }
    }

    /// Wrap a packed RGB buffer, 3 bytes per pixel.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions);
        }

        let expected = width * height * 3;
        if data.len() != expected {
            return Err(RasterError::InvalidBufferSize {
                expected,
                got: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take a packed RGBA buffer, 4 bytes per pixel, and drop the alpha
    /// channel.
    pub fn from_rgba8(width: usize, height: usize, data: &[u8]) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions);
        }

        let expected = width * height * 4;
        if data.len() != expected {
            return Err(RasterError::InvalidBufferSize {
                expected,
                got: data.len(),
            });
        }

        let rgb = data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        Ok(Self {
            width,
            height,
            data: rgb,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed RGB bytes, row major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub(crate) fn set_pixel(&mut self, x: usize, y: usize, [r, g, b]: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }

    /// Per-channel absolute difference against `other`.
    ///
    /// Purely a visual diagnostic. Both rasters must have identical
    /// dimensions; anything else is a caller contract violation and is
    /// reported, never resized away.
    pub fn diff(&self, other: &RgbRaster) -> Result<RgbRaster, DimensionMismatch> {
        if self.width != other.width || self.height != other.height {
            return Err(DimensionMismatch {
                left_width: self.width,
                left_height: self.height,
                right_width: other.width,
                right_height: other.height,
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.abs_diff(*b))
            .collect();

        Ok(RgbRaster {
            width: self.width,
            height: self.height,
            data,
        })
    }
}
