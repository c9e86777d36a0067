use crate::color::clamp_u8;
use crate::plane::PlaneTriple;

/// 4:2:2 frame of horizontal macro-pixels.
///
/// Each macro-pixel covers two source pixels and stores `[y0, cb, cr, y1]`
/// with chroma sampled at the left pixel. A pair cut off by the right edge
/// stores 0 for the missing second luma sample.
#[derive(Debug, Clone)]
pub struct Yuv422Frame {
    macro_width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Yuv422Frame {
    pub fn pack(planes: &PlaneTriple) -> Self {
        let (width, height) = (planes.width(), planes.height());
        let macro_width = width.div_ceil(2);

        let mut data = Vec::with_capacity(macro_width * height * 4);
        for y in 0..height {
            for x in (0..width).step_by(2) {
                data.push(clamp_u8(planes.y.get(x, y)));
                data.push(clamp_u8(planes.cb.get(x, y)));
                data.push(clamp_u8(planes.cr.get(x, y)));
                data.push(if x + 1 < width {
                    clamp_u8(planes.y.get(x + 1, y))
                } else {
                    0
                });
            }
        }

        Self {
            macro_width,
            height,
            data,
        }
    }

    /// Number of macro-pixels per row, `ceil(width / 2)`.
    pub fn macro_width(&self) -> usize {
        self.macro_width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed `[y0, cb, cr, y1]` bytes, row major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
