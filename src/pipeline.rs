//! Pipeline driver: re-encode a raster through one of the lossy variants
//! and hand back what a caller needs to display or report.

use crate::block::requantize_plane;
use crate::color::{clamp_u8, ycbcr_to_rgb};
use crate::formats::{Nv12Frame, PackedFormat, PackedLayout, Yuv422Frame, Yuv444Frame};
use crate::plane::PlaneTriple;
use crate::quant::{QUANT_CHROMA, QUANT_LUMA};
use crate::raster::RgbRaster;

/// Lossy re-encodings a raster can be pushed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reencoding {
    /// Full chroma resolution; only the color conversion is lossy.
    Yuv444,

    /// Chroma shared across horizontal pixel pairs.
    Yuv422,

    /// Chroma shared across 2×2 pixel blocks.
    Nv12,

    /// 4:4:4 with every channel run through DCT quantization.
    Quantized444,
}

/// Re-encode `src` through `mode` and reconstruct an RGB raster for
/// display.
pub fn reencode(src: &RgbRaster, mode: Reencoding) -> RgbRaster {
    let mut planes = PlaneTriple::from_raster(src);

    match mode {
        Reencoding::Yuv444 => reconstruct_444(&planes),
        Reencoding::Yuv422 => reconstruct_422(&planes),
        Reencoding::Nv12 => reconstruct_nv12(&planes),
        Reencoding::Quantized444 => {
            requantize_plane(&mut planes.y, &QUANT_LUMA);
            requantize_plane(&mut planes.cb, &QUANT_CHROMA);
            requantize_plane(&mut planes.cr, &QUANT_CHROMA);
            reconstruct_444(&planes)
        }
    }
}

/// Every re-encoding of `src`, converted once up front.
///
/// Matches how an interactive caller toggles between the variants of the
/// same source image.
pub fn reencode_all(src: &RgbRaster) -> [(Reencoding, RgbRaster); 4] {
    use Reencoding::*;

    [Yuv444, Yuv422, Nv12, Quantized444].map(|mode| (mode, reencode(src, mode)))
}

/// Pack `src` into `format`'s native layout.
pub fn pack(src: &RgbRaster, format: PackedFormat) -> PackedLayout {
    match format {
        PackedFormat::Rgb => PackedLayout::Rgb(src.clone()),
        PackedFormat::Yuv444 => {
            PackedLayout::Yuv444(Yuv444Frame::pack(&PlaneTriple::from_raster(src)))
        }
        PackedFormat::Yuv422 => {
            PackedLayout::Yuv422(Yuv422Frame::pack(&PlaneTriple::from_raster(src)))
        }
        PackedFormat::Nv12 => {
            PackedLayout::Nv12(Nv12Frame::pack(&PlaneTriple::from_raster(src)))
        }
    }
}

pub(crate) fn reconstruct_444(planes: &PlaneTriple) -> RgbRaster {
    let (width, height) = (planes.width(), planes.height());
    let mut out = RgbRaster::blank(width, height);

    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = ycbcr_to_rgb(
                clamp_u8(planes.y.get(x, y)),
                clamp_u8(planes.cb.get(x, y)),
                clamp_u8(planes.cr.get(x, y)),
            );
            out.set_pixel(x, y, [r, g, b]);
        }
    }

    out
}

fn reconstruct_422(planes: &PlaneTriple) -> RgbRaster {
    let (width, height) = (planes.width(), planes.height());
    let mut out = RgbRaster::blank(width, height);

    for y in 0..height {
        for x in (0..width).step_by(2) {
            let cb = clamp_u8(planes.cb.get(x, y));
            let cr = clamp_u8(planes.cr.get(x, y));

            let (r, g, b) = ycbcr_to_rgb(clamp_u8(planes.y.get(x, y)), cb, cr);
            out.set_pixel(x, y, [r, g, b]);

            if x + 1 < width {
                let (r, g, b) = ycbcr_to_rgb(clamp_u8(planes.y.get(x + 1, y)), cb, cr);
                out.set_pixel(x + 1, y, [r, g, b]);
            }
        }
    }

    out
}

fn reconstruct_nv12(planes: &PlaneTriple) -> RgbRaster {
    let (width, height) = (planes.width(), planes.height());
    let mut out = RgbRaster::blank(width, height);

    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            let cb = clamp_u8(planes.cb.get(x, y));
            let cr = clamp_u8(planes.cr.get(x, y));

            for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                let (px, py) = (x + dx, y + dy);
                if px >= width || py >= height {
                    continue;
                }

                let (r, g, b) = ycbcr_to_rgb(clamp_u8(planes.y.get(px, py)), cb, cr);
                out.set_pixel(px, py, [r, g, b]);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone_raster() -> RgbRaster {
        // Left half red, right half blue
        let mut data = Vec::new();
        for _y in 0..4 {
            for x in 0..4 {
                if x < 2 {
                    data.extend_from_slice(&[200, 40, 40]);
                } else {
                    data.extend_from_slice(&[40, 40, 200]);
                }
            }
        }
        RgbRaster::new(4, 4, data).unwrap()
    }

    #[test]
    fn yuv444_keeps_edges_sharp() {
        let src = two_tone_raster();
        let out = reencode(&src, Reencoding::Yuv444);

        // Chroma is at full resolution, so the column boundary survives
        let left = out.pixel(1, 0);
        let right = out.pixel(2, 0);
        assert!(left[0] > left[2]);
        assert!(right[2] > right[0]);
    }

    #[test]
    fn yuv422_bleeds_chroma_across_pairs() {
        // A red/blue edge inside one horizontal pair
        let src = RgbRaster::new(2, 1, vec![200, 40, 40, 40, 40, 200]).unwrap();

        let full = reencode(&src, Reencoding::Yuv444);
        let sub = reencode(&src, Reencoding::Yuv422);

        // The right pixel inherits the red pixel's chroma and shifts warm
        assert!(sub.pixel(1, 0)[0] > full.pixel(1, 0)[0]);
    }

    #[test]
    fn nv12_shares_chroma_across_blocks() {
        // Only the top-left pixel of the 2×2 block is red
        #[rustfmt::skip]
        let src = RgbRaster::new(2, 2, vec![
            200, 40, 40,   40, 40, 200,
            40, 40, 200,   40, 40, 200,
        ])
        .unwrap();

        let full = reencode(&src, Reencoding::Yuv444);
        let sub = reencode(&src, Reencoding::Nv12);

        // Every pixel of the block inherits the top-left (red) chroma
        assert!(sub.pixel(1, 1)[0] > full.pixel(1, 1)[0]);
        assert_eq!(sub.pixel(0, 0), full.pixel(0, 0));
    }

    #[test]
    fn reencode_all_covers_every_mode() {
        let src = two_tone_raster();
        let all = reencode_all(&src);

        assert_eq!(all.len(), 4);
        for (mode, raster) in &all {
            assert_eq!(raster.width(), src.width(), "{mode:?}");
            assert_eq!(raster.height(), src.height(), "{mode:?}");
        }
        assert_eq!(all[0].1, reencode(&src, Reencoding::Yuv444));
    }

    #[test]
    fn pack_dispatches_on_format() {
        let src = two_tone_raster();
        for format in PackedFormat::variants() {
            let layout = pack(&src, format);
            assert_eq!(layout.format(), format);
            assert_eq!(layout.raw_size(), format.raw_size(4, 4));
        }
    }
}
