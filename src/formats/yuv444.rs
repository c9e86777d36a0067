use crate::color::clamp_u8;
use crate::plane::PlaneTriple;

/// 4:4:4 frame, one (Y, Cb, Cr) triple per pixel.
#[derive(Debug, Clone)]
pub struct Yuv444Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Yuv444Frame {
    /// Identity packing, chroma kept at full resolution.
    pub fn pack(planes: &PlaneTriple) -> Self {
        let (width, height) = (planes.width(), planes.height());

        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.push(clamp_u8(planes.y.get(x, y)));
                data.push(clamp_u8(planes.cb.get(x, y)));
                data.push(clamp_u8(planes.cr.get(x, y)));
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed (Y, Cb, Cr) bytes, row major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
