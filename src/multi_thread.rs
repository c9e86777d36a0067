use crate::block::{requantize_plane, scan_plane};
use crate::pipeline::{Reencoding, reconstruct_444, reencode};
use crate::plane::PlaneTriple;
use crate::quant::{QUANT_CHROMA, QUANT_LUMA};
use crate::raster::RgbRaster;
use crate::size::{SizeReport, deflated_len};

/// Multi-threaded [`reencode`](crate::reencode).
///
/// The quantized path transforms Y, Cb and Cr on rayon workers; each
/// channel owns its plane, so there is no shared mutable state to guard.
/// The subsampling-only modes have no transform work to split and fall
/// through to the single-threaded driver. Results are identical either
/// way.
pub fn reencode_multi_thread(src: &RgbRaster, mode: Reencoding) -> RgbRaster {
    if mode != Reencoding::Quantized444 || num_cpus::get() == 1 {
        return reencode(src, mode);
    }

    let mut planes = PlaneTriple::from_raster(src);

    let PlaneTriple { y, cb, cr } = &mut planes;
    rayon::join(
        || requantize_plane(y, &QUANT_LUMA),
        || {
            rayon::join(
                || requantize_plane(cb, &QUANT_CHROMA),
                || requantize_plane(cr, &QUANT_CHROMA),
            )
        },
    );

    reconstruct_444(&planes)
}

/// Multi-threaded [`coefficient_report`](crate::coefficient_report).
///
/// The three channels are scanned on rayon workers and their streams
/// joined in the usual order (Y, then Cb, then Cr) before the DEFLATE
/// pass.
pub fn coefficient_report_multi_thread(planes: &PlaneTriple) -> SizeReport {
    if num_cpus::get() == 1 {
        return crate::size::coefficient_report(planes);
    }

    let (y_stream, (cb_stream, cr_stream)) = rayon::join(
        || {
            let mut stream = Vec::new();
            scan_plane(&planes.y, &QUANT_LUMA, &mut stream);
            stream
        },
        || {
            rayon::join(
                || {
                    let mut stream = Vec::new();
                    scan_plane(&planes.cb, &QUANT_CHROMA, &mut stream);
                    stream
                },
                || {
                    let mut stream = Vec::new();
                    scan_plane(&planes.cr, &QUANT_CHROMA, &mut stream);
                    stream
                },
            )
        },
    );

    let mut stream = y_stream;
    stream.extend_from_slice(&cb_stream);
    stream.extend_from_slice(&cr_stream);

    SizeReport {
        raw: planes.width() * planes.height() * 3,
        quantized: Some(stream.len()),
        deflated: deflated_len(&stream),
    }
}
