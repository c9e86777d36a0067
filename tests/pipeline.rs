use yuvscope::{
    PackedFormat, QUANT_CHROMA, Reencoding, RgbRaster, coefficient_report, coefficients_to_bytes,
    forward_dct, layout_report, pack, quantize, reencode, reencode_all, restore, scan,
};

fn constant_raster(width: usize, height: usize, [r, g, b]: [u8; 3]) -> RgbRaster {
    let data = [r, g, b].repeat(width * height);
    RgbRaster::new(width, height, data).unwrap()
}

#[test]
fn constant_gray_survives_every_variant() {
    let src = constant_raster(16, 16, [128, 128, 128]);

    let yuv444 = reencode(&src, Reencoding::Yuv444);
    for (&got, &want) in yuv444.data().iter().zip(src.data()) {
        assert!(got.abs_diff(want) <= 2);
    }

    // With no spatial variation the subsampled variants reconstruct the
    // exact same pixels as 4:4:4
    assert_eq!(reencode(&src, Reencoding::Yuv422), yuv444);
    assert_eq!(reencode(&src, Reencoding::Nv12), yuv444);

    // A flat block is all DC energy; quantization has nothing to discard
    assert_eq!(reencode(&src, Reencoding::Quantized444), yuv444);
}

#[test]
fn checkerboard_loses_its_high_frequency_alternation() {
    // Single 8×8 tile, 0 in the top-left corner, alternating 0/255
    let mut block = [[0.0f32; 8]; 8];
    for (y, row) in block.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            let sample = if (x + y) % 2 == 0 { 0.0 } else { 255.0 };
            *cell = sample - 128.0;
        }
    }

    let coeffs = quantize(&forward_dct(&block), &QUANT_CHROMA);
    let seq = scan(&coefficients_to_bytes(&coeffs));

    assert!(seq.len() < 64, "sequence kept all {} entries", seq.len());

    // The corner coefficient carried the alternation; it did not survive
    // the coarse steps and the byte clamp
    assert_eq!(restore(&seq)[7][7], 0);
}

#[test]
fn raw_sizes_follow_the_layout_identities() {
    for (width, height) in [(16, 16), (17, 9), (1, 1), (640, 480)] {
        assert_eq!(PackedFormat::Rgb.raw_size(width, height), 3 * width * height);
        assert_eq!(
            PackedFormat::Yuv444.raw_size(width, height),
            3 * width * height
        );
        assert_eq!(
            PackedFormat::Yuv422.raw_size(width, height),
            4 * width.div_ceil(2) * height
        );
        assert_eq!(
            PackedFormat::Nv12.raw_size(width, height),
            width * height + 2 * width.div_ceil(2) * height.div_ceil(2)
        );
    }
}

#[test]
fn packed_layouts_report_their_own_raw_size() {
    let src = constant_raster(17, 9, [90, 120, 30]);

    for format in PackedFormat::variants() {
        let report = layout_report(&pack(&src, format));
        assert_eq!(report.raw, format.raw_size(17, 9), "{format:?}");
        assert_eq!(report.quantized, None);
    }
}

#[test]
fn flat_image_compresses_to_almost_nothing() {
    let src = constant_raster(64, 64, [128, 128, 128]);

    let packed = layout_report(&pack(&src, PackedFormat::Yuv444));
    assert!(packed.deflated < packed.raw / 10);

    let coeffs = coefficient_report(&yuvscope::PlaneTriple::from_raster(&src));
    assert_eq!(coeffs.raw, 64 * 64 * 3);
    assert!(coeffs.quantized.unwrap() < coeffs.raw);
}

#[test]
fn yuv444_round_trip_is_bounded_on_a_gradient() {
    let img = image::RgbImage::from_fn(32, 24, |x, y| {
        image::Rgb([(x * 8) as u8, (y * 10) as u8, 120])
    });
    let src = RgbRaster::new(32, 24, img.into_raw()).unwrap();

    let out = reencode(&src, Reencoding::Yuv444);
    let diff = src.diff(&out).unwrap();

    assert!(diff.data().iter().all(|&d| d <= 2));
}

#[test]
fn subsampling_never_changes_dimensions() {
    let src = constant_raster(13, 7, [10, 200, 60]);

    for (mode, raster) in reencode_all(&src) {
        assert_eq!((raster.width(), raster.height()), (13, 7), "{mode:?}");
    }
}

#[test]
fn diff_rejects_mismatched_rasters() {
    let a = constant_raster(8, 8, [0, 0, 0]);
    let b = constant_raster(8, 4, [0, 0, 0]);

    let err = a.diff(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "raster dimensions differ, 8x8 vs 8x4"
    );
}
