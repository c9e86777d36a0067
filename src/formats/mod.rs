//! Packed chroma layouts.
//!
//! A packed layout is a read-only snapshot of how one raster would be laid
//! out in a given format, used for display reconstruction and size
//! accounting. Dimensions of the subsampled planes derive from the source
//! size by ceiling division; boundary pixels a layout does not cover are
//! omitted, never read out of bounds.

mod nv12;
mod yuv422;
mod yuv444;

pub use nv12::Nv12Frame;
pub use yuv422::Yuv422Frame;
pub use yuv444::Yuv444Frame;

use crate::raster::RgbRaster;

/// Supported packed formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackedFormat {
    /// Interleaved R, G, B, 8 bits per sample
    Rgb,

    /// One (Y, Cb, Cr) triple per pixel
    Yuv444,

    /// One `[y0, cb, cr, y1]` macro-pixel per two horizontal pixels
    Yuv422,

    /// Full resolution Y plane plus interleaved CbCr at half resolution in
    /// both dimensions
    Nv12,
}

impl PackedFormat {
    /// Byte length of the format's native representation of a
    /// `width` × `height` image.
    pub fn raw_size(self, width: usize, height: usize) -> usize {
        match self {
            PackedFormat::Rgb | PackedFormat::Yuv444 => width * height * 3,
            PackedFormat::Yuv422 => width.div_ceil(2) * height * 4,
            PackedFormat::Nv12 => {
                width * height + width.div_ceil(2) * height.div_ceil(2) * 2
            }
        }
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        use PackedFormat::*;

        [Rgb, Yuv444, Yuv422, Nv12]
    }
}

/// One raster packed into a [`PackedFormat`].
#[derive(Debug, Clone)]
pub enum PackedLayout {
    Rgb(RgbRaster),
    Yuv444(Yuv444Frame),
    Yuv422(Yuv422Frame),
    Nv12(Nv12Frame),
}

impl PackedLayout {
    pub fn format(&self) -> PackedFormat {
        match self {
            PackedLayout::Rgb(_) => PackedFormat::Rgb,
            PackedLayout::Yuv444(_) => PackedFormat::Yuv444,
            PackedLayout::Yuv422(_) => PackedFormat::Yuv422,
            PackedLayout::Nv12(_) => PackedFormat::Nv12,
        }
    }

    /// Raw byte length of the layout's native representation.
    pub fn raw_size(&self) -> usize {
        match self {
            PackedLayout::Rgb(raster) => raster.data().len(),
            PackedLayout::Yuv444(frame) => frame.data().len(),
            PackedLayout::Yuv422(frame) => frame.data().len(),
            PackedLayout::Nv12(frame) => frame.luma().len() + frame.chroma().len(),
        }
    }

    /// Serialize to the native byte stream used for size estimation.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PackedLayout::Rgb(raster) => raster.data().to_vec(),
            PackedLayout::Yuv444(frame) => frame.data().to_vec(),
            PackedLayout::Yuv422(frame) => frame.data().to_vec(),
            PackedLayout::Nv12(frame) => {
                let mut out = Vec::with_capacity(self.raw_size());
                out.extend_from_slice(frame.luma());
                out.extend_from_slice(frame.chroma());
                out
            }
        }
    }
}
