//! Raw and compressed byte size accounting.
//!
//! Strictly a comparative metric: the "compressed" figure is a DEFLATE
//! pass over the layout's native byte stream, not a standards-compliant
//! bitstream.

use crate::block::scan_plane;
use crate::formats::PackedLayout;
use crate::plane::PlaneTriple;
use crate::quant::{QUANT_CHROMA, QUANT_LUMA};
use miniz_oxide::deflate::compress_to_vec;

/// Matches "optimal" in the usual DEFLATE implementations.
const DEFLATE_LEVEL: u8 = 10;

/// Byte counts for one layout or coefficient stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    /// Native representation length.
    pub raw: usize,

    /// Post-quantization, pre-compression length of the zigzag stream.
    /// Present only for the transform path.
    pub quantized: Option<usize>,

    /// Length after the DEFLATE pass.
    pub deflated: usize,
}

/// DEFLATE `bytes` and report the compressed length.
pub fn deflated_len(bytes: &[u8]) -> usize {
    compress_to_vec(bytes, DEFLATE_LEVEL).len()
}

/// Raw and compressed size of one packed layout.
pub fn layout_report(layout: &PackedLayout) -> SizeReport {
    let bytes = layout.to_bytes();

    SizeReport {
        raw: layout.raw_size(),
        quantized: None,
        deflated: deflated_len(&bytes),
    }
}

/// Sizes for the DCT + quantization path over all three channels.
///
/// The stream is every luma tile's zigzag sequence, then the Cb tiles,
/// then the Cr tiles, each in raster tile order.
pub fn coefficient_report(planes: &PlaneTriple) -> SizeReport {
    let mut stream = Vec::new();
    scan_plane(&planes.y, &QUANT_LUMA, &mut stream);
    scan_plane(&planes.cb, &QUANT_CHROMA, &mut stream);
    scan_plane(&planes.cr, &QUANT_CHROMA, &mut stream);

    SizeReport {
        raw: planes.width() * planes.height() * 3,
        quantized: Some(stream.len()),
        deflated: deflated_len(&stream),
    }
}
