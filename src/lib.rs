//! Visualize how an RGB image degrades when re-encoded into chroma
//! subsampled YUV layouts or pushed through 8×8 DCT quantization, and
//! estimate what either would cost to store.
//!
//! The pipeline is pure and synchronous: a decoded [`RgbRaster`] goes in,
//! reconstructed rasters, difference rasters and [`SizeReport`]s come out.
//! Window, widget and file handling stay with the caller.
//!
//! ```
//! use yuvscope::{PackedFormat, Reencoding};
//!
//! let raster = yuvscope::RgbRaster::blank(64, 64);
//!
//! // What the image looks like after NV12 re-encoding
//! let nv12 = yuvscope::reencode(&raster, Reencoding::Nv12);
//! let loss = raster.diff(&nv12).unwrap();
//! assert_eq!(loss.width(), 64);
//!
//! // What it would cost to store
//! let report = yuvscope::layout_report(&yuvscope::pack(&raster, PackedFormat::Nv12));
//! assert!(report.deflated <= report.raw);
//! ```

pub use block::{BLOCK_SIZE, Block, read_block, requantize_plane, scan_plane, write_block};
pub use color::{rgb_to_ycbcr, ycbcr_to_rgb};
pub use dct::{forward_dct, inverse_dct};
pub use formats::{Nv12Frame, PackedFormat, PackedLayout, Yuv422Frame, Yuv444Frame};
#[cfg(feature = "multi-thread")]
pub use multi_thread::{coefficient_report_multi_thread, reencode_multi_thread};
pub use pipeline::{Reencoding, pack, reencode, reencode_all};
pub use plane::{Plane, PlaneTriple};
pub use quant::{
    QUANT_CHROMA, QUANT_LUMA, QuantTable, coefficients_to_bytes, dequantize, quantize,
};
pub use raster::{DimensionMismatch, RasterError, RgbRaster};
pub use size::{SizeReport, coefficient_report, deflated_len, layout_report};
pub use zigzag::{ZIGZAG_PATH, restore, scan};

mod block;
mod color;
mod dct;
mod formats;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pipeline;
mod plane;
mod quant;
mod raster;
mod size;
mod zigzag;
