use crate::color::clamp_u8;
use crate::plane::PlaneTriple;

/// Semi-planar NV12 frame.
///
/// Full resolution luma plane plus one interleaved (Cb, Cr) pair per 2×2
/// source block, sampled at the block's top-left pixel. A trailing odd row
/// or column is copied into the luma plane but contributes no extra chroma
/// sample.
#[derive(Debug, Clone)]
pub struct Nv12Frame {
    width: usize,
    height: usize,
    chroma_width: usize,
    chroma_height: usize,
    luma: Vec<u8>,
    chroma: Vec<u8>,
}

impl Nv12Frame {
    pub fn pack(planes: &PlaneTriple) -> Self {
        let (width, height) = (planes.width(), planes.height());
        let chroma_width = width.div_ceil(2);
        let chroma_height = height.div_ceil(2);

        let mut luma = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                luma.push(clamp_u8(planes.y.get(x, y)));
            }
        }

        let mut chroma = Vec::with_capacity(chroma_width * chroma_height * 2);
        for y in (0..height).step_by(2) {
            for x in (0..width).step_by(2) {
                chroma.push(clamp_u8(planes.cb.get(x, y)));
                chroma.push(clamp_u8(planes.cr.get(x, y)));
            }
        }

        Self {
            width,
            height,
            chroma_width,
            chroma_height,
            luma,
            chroma,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Chroma plane width in (Cb, Cr) pairs, `ceil(width / 2)`.
    pub fn chroma_width(&self) -> usize {
        self.chroma_width
    }

    /// Chroma plane height, `ceil(height / 2)`.
    pub fn chroma_height(&self) -> usize {
        self.chroma_height
    }

    /// Full resolution luma samples, row major.
    pub fn luma(&self) -> &[u8] {
        &self.luma
    }

    /// Interleaved (Cb, Cr) samples, row major.
    pub fn chroma(&self) -> &[u8] {
        &self.chroma
    }
}
