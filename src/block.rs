//! 8×8 tiling over a plane.
//!
//! Planes are partitioned into non-overlapping tiles starting at (0, 0).
//! Tiles that hang over the right or bottom edge touch only the in-bounds
//! cells: the scratch block keeps whatever it held in the uncovered cells
//! and the destination plane is never written outside the image.

use crate::dct::{forward_dct, inverse_dct};
use crate::plane::Plane;
use crate::quant::{QuantTable, coefficients_to_bytes, dequantize, quantize};
use crate::zigzag;

pub const BLOCK_SIZE: usize = 8;

/// One 8×8 window of a plane during transform processing.
pub type Block = [[f32; BLOCK_SIZE]; BLOCK_SIZE];

const LEVEL_SHIFT: f32 = 128.0;

/// Copy the tile at (x0, y0) out of `plane`, shifting samples down by 128.
///
/// Cells beyond the plane boundary are left as they are in `block`.
pub fn read_block(plane: &Plane, x0: usize, y0: usize, block: &mut Block) {
    for (dy, row) in block.iter_mut().enumerate() {
        let y = y0 + dy;
        if y >= plane.height() {
            continue;
        }

        for (dx, cell) in row.iter_mut().enumerate() {
            let x = x0 + dx;
            if x >= plane.width() {
                continue;
            }

            *cell = plane.get(x, y) - LEVEL_SHIFT;
        }
    }
}

/// Copy `block` into the tile at (x0, y0), shifting samples back up by 128.
///
/// Cells beyond the plane boundary are skipped.
pub fn write_block(plane: &mut Plane, x0: usize, y0: usize, block: &Block) {
    for (dy, row) in block.iter().enumerate() {
        let y = y0 + dy;
        if y >= plane.height() {
            continue;
        }

        for (dx, cell) in row.iter().enumerate() {
            let x = x0 + dx;
            if x >= plane.width() {
                continue;
            }

            plane.set(x, y, *cell + LEVEL_SHIFT);
        }
    }
}

/// Run every tile of `plane` through DCT, quantization against `table`,
/// dequantization and inverse DCT, in place.
pub fn requantize_plane(plane: &mut Plane, table: &QuantTable) {
    // One scratch block for the whole plane; edge tiles carry the previous
    // tile's samples in their uncovered cells
    let mut spatial: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];

    for y0 in (0..plane.height()).step_by(BLOCK_SIZE) {
        for x0 in (0..plane.width()).step_by(BLOCK_SIZE) {
            read_block(plane, x0, y0, &mut spatial);

            let coeffs = quantize(&forward_dct(&spatial), table);
            let restored = inverse_dct(&dequantize(&coeffs, table));

            write_block(plane, x0, y0, &restored);
        }
    }
}

/// Append every tile's truncated zigzag sequence to `out`, raster tile
/// order.
pub fn scan_plane(plane: &Plane, table: &QuantTable, out: &mut Vec<u8>) {
    let mut spatial: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];

    for y0 in (0..plane.height()).step_by(BLOCK_SIZE) {
        for x0 in (0..plane.width()).step_by(BLOCK_SIZE) {
            read_block(plane, x0, y0, &mut spatial);

            let coeffs = quantize(&forward_dct(&spatial), table);
            out.extend_from_slice(&zigzag::scan(&coefficients_to_bytes(&coeffs)));
        }
    }
}
