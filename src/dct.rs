//! Forward and inverse 8×8 discrete cosine transform.

use crate::block::{BLOCK_SIZE, Block};
use once_cell::sync::Lazy;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Cosine basis matrix, indexed by (frequency, spatial position).
///
/// Independent of pixel data; computed once and shared by every tile and
/// channel.
static COSINES: Lazy<[[f64; BLOCK_SIZE]; BLOCK_SIZE]> = Lazy::new(|| {
    let mut table = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];

    for (f, row) in table.iter_mut().enumerate() {
        for (s, cell) in row.iter_mut().enumerate() {
            *cell = (PI * f as f64 * (2 * s + 1) as f64 / 16.0).cos();
        }
    }

    table
});

const SCALE: f64 = 0.25;

fn alpha(i: usize) -> f64 {
    if i == 0 { FRAC_1_SQRT_2 } else { 1.0 }
}

/// Transform a level-shifted spatial block into frequency coefficients.
pub fn forward_dct(block: &Block) -> Block {
    let cos = &*COSINES;
    let mut out: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];

    for v in 0..BLOCK_SIZE {
        for u in 0..BLOCK_SIZE {
            // Accumulate in f64 so the inverse lands within 1e-3 of the input
            let mut sum = 0.0f64;
            for y in 0..BLOCK_SIZE {
                for x in 0..BLOCK_SIZE {
                    sum += block[y][x] as f64 * cos[u][x] * cos[v][y];
                }
            }

            out[v][u] = (SCALE * alpha(u) * alpha(v) * sum) as f32;
        }
    }

    out
}

/// Transform frequency coefficients back into a level-shifted spatial block.
pub fn inverse_dct(coeffs: &Block) -> Block {
    let cos = &*COSINES;
    let mut out: Block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];

    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            let mut sum = 0.0f64;
            for v in 0..BLOCK_SIZE {
                for u in 0..BLOCK_SIZE {
                    sum += coeffs[v][u] as f64 * alpha(u) * alpha(v) * cos[u][x] * cos[v][y];
                }
            }

            out[y][x] = (SCALE * sum) as f32;
        }
    }

    out
}
