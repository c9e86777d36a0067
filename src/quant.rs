//! Per-block quantization against the two constant step tables.
//!
//! Quantize-then-dequantize is lossy by construction: detail below a table
//! entry's step size is discarded. The luma steps are finer than the
//! chroma steps.

use crate::block::{BLOCK_SIZE, Block};

/// Quantization step table, indexed frequency row first.
pub type QuantTable = [[f32; BLOCK_SIZE]; BLOCK_SIZE];

/// Steps for the luma channel.
pub const QUANT_LUMA: QuantTable = [
    [1.0, 1.0, 1.0, 1.0, 2.0, 3.0, 4.0, 5.0],
    [1.0, 1.0, 1.0, 2.0, 2.0, 5.0, 5.0, 4.0],
    [1.0, 1.0, 1.0, 2.0, 3.0, 5.0, 6.0, 4.0],
    [1.0, 1.0, 2.0, 2.0, 4.0, 7.0, 6.0, 5.0],
    [1.0, 2.0, 3.0, 4.0, 5.0, 9.0, 8.0, 6.0],
    [2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 9.0, 7.0],
    [4.0, 5.0, 6.0, 7.0, 8.0, 10.0, 10.0, 8.0],
    [6.0, 7.0, 8.0, 8.0, 9.0, 8.0, 8.0, 8.0],
];

/// Steps for the chroma channels, coarser than the luma set.
pub const QUANT_CHROMA: QuantTable = [
    [1.0, 1.0, 2.0, 4.0, 8.0, 8.0, 8.0, 8.0],
    [1.0, 2.0, 2.0, 5.0, 8.0, 8.0, 8.0, 8.0],
    [2.0, 2.0, 4.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    [4.0, 5.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
    [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
];

/// Divide each coefficient by its table step and round.
pub fn quantize(block: &Block, table: &QuantTable) -> Block {
    let mut out: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];

    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            out[y][x] = (block[y][x] / table[y][x]).round();
        }
    }

    out
}

/// Multiply each quantized coefficient back by its table step.
pub fn dequantize(block: &Block, table: &QuantTable) -> Block {
    let mut out: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];

    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            out[y][x] = block[y][x] * table[y][x];
        }
    }

    out
}

/// Narrow quantized coefficients to bytes for the stream paths.
///
/// Clamps into the byte range before the cast, so negative coefficients
/// become 0 rather than wrapping.
pub fn coefficients_to_bytes(block: &Block) -> [[u8; BLOCK_SIZE]; BLOCK_SIZE] {
    let mut out = [[0u8; BLOCK_SIZE]; BLOCK_SIZE];

    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            out[y][x] = block[y][x].clamp(0.0, 255.0).round() as u8;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONES: QuantTable = [[1.0; BLOCK_SIZE]; BLOCK_SIZE];

    fn ramp_block() -> Block {
        let mut block: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (y, row) in block.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = (x as f32 * 13.7 + y as f32 * 7.3) - 100.0;
            }
        }
        block
    }

    #[test]
    fn all_ones_table_is_the_identity_up_to_rounding() {
        let block = ramp_block();
        let restored = dequantize(&quantize(&block, &ONES), &ONES);

        for y in 0..BLOCK_SIZE {
            for x in 0..BLOCK_SIZE {
                assert!(
                    (restored[y][x] - block[y][x]).abs() <= 0.5,
                    "({x}, {y}): {} vs {}",
                    restored[y][x],
                    block[y][x]
                );
            }
        }
    }

    #[test]
    fn coarse_steps_discard_small_coefficients() {
        let mut block: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        block[7][7] = 3.4;

        let quantized = quantize(&block, &QUANT_CHROMA);
        assert_eq!(quantized[7][7], 0.0);

        let restored = dequantize(&quantized, &QUANT_CHROMA);
        assert_eq!(restored[7][7], 0.0);
    }

    #[test]
    fn narrowing_clamps_both_ends() {
        let mut block: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        block[0][0] = -105.0;
        block[0][1] = 300.0;
        block[0][2] = 17.4;

        let bytes = coefficients_to_bytes(&block);
        assert_eq!(bytes[0][0], 0);
        assert_eq!(bytes[0][1], 255);
        assert_eq!(bytes[0][2], 17);
    }
}
