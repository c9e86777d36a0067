//! Zigzag scan order over an 8×8 coefficient block.
//!
//! Low-frequency coefficients come first, which is what makes trailing-zero
//! truncation effective on quantized blocks.

use crate::block::BLOCK_SIZE;

/// The scan path as (x, y) positions, upper-left to lower-right.
pub const ZIGZAG_PATH: [(usize, usize); 64] = [
    (0, 0), (1, 0), (0, 1), (0, 2),
    (1, 1), (2, 0), (3, 0), (2, 1), (1, 2), (0, 3), (0, 4), (1, 3),
    (2, 2), (3, 1), (4, 0), (5, 0), (4, 1), (3, 2), (2, 3), (1, 4), (0, 5), (0, 6), (1, 5), (2, 4),
    (3, 3), (4, 2), (5, 1), (6, 0), (7, 0), (6, 1), (5, 2), (4, 3), (3, 4), (2, 5), (1, 6), (0, 7), (1, 7), (2, 6), (3, 5),
    (4, 4), (5, 3), (6, 2), (7, 1), (7, 2), (6, 3), (5, 4), (4, 5), (3, 6), (2, 7), (3, 7), (4, 6),
    (5, 5), (6, 4), (7, 3), (7, 4), (6, 5), (5, 6), (4, 7), (5, 7),
    (6, 6), (7, 5), (7, 6), (6, 7),
    (7, 7),
];

/// Walk the scan path over `block` and drop every trailing zero.
///
/// An all-zero block produces an empty sequence.
pub fn scan(block: &[[u8; BLOCK_SIZE]; BLOCK_SIZE]) -> Vec<u8> {
    let mut seq: Vec<u8> = ZIGZAG_PATH.iter().map(|&(x, y)| block[y][x]).collect();

    let keep = seq.iter().rposition(|&v| v != 0).map_or(0, |i| i + 1);
    seq.truncate(keep);

    seq
}

/// Place `seq` back along the scan path, zero-filling the omitted tail.
pub fn restore(seq: &[u8]) -> [[u8; BLOCK_SIZE]; BLOCK_SIZE] {
    let mut block = [[0u8; BLOCK_SIZE]; BLOCK_SIZE];

    for (&value, &(x, y)) in seq.iter().zip(ZIGZAG_PATH.iter()) {
        block[y][x] = value;
    }

    block
}
