//! Floating point sample planes.

use crate::color::rgb_to_ycbcr;
use crate::raster::RgbRaster;

/// One channel of an image held as f32 samples, row major.
///
/// Values are nominally in [0, 255]; the float representation lets the
/// transform stages run without intermediate clamping.
#[derive(Debug, Clone)]
pub struct Plane {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl Plane {
    /// All-zero plane of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            samples: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.samples[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.samples[y * self.width + x] = value;
    }
}

/// Full resolution Y, Cb and Cr planes of one raster.
///
/// Derived once per raster and shared by every packing variant and the
/// transform path.
#[derive(Debug, Clone)]
pub struct PlaneTriple {
    pub y: Plane,
    pub cb: Plane,
    pub cr: Plane,
}

impl PlaneTriple {
    /// Convert every pixel of `raster` and keep the result as float samples.
    pub fn from_raster(raster: &RgbRaster) -> Self {
        let (width, height) = (raster.width(), raster.height());

        let mut y = Plane::new(width, height);
        let mut cb = Plane::new(width, height);
        let mut cr = Plane::new(width, height);

        for py in 0..height {
            for px in 0..width {
                let [r, g, b] = raster.pixel(px, py);
                let (ys, cbs, crs) = rgb_to_ycbcr(r, g, b);

                y.set(px, py, ys as f32);
                cb.set(px, py, cbs as f32);
                cr.set(px, py, crs as f32);
            }
        }

        Self { y, cb, cr }
    }

    pub fn width(&self) -> usize {
        self.y.width()
    }

    pub fn height(&self) -> usize {
        self.y.height()
    }
}
