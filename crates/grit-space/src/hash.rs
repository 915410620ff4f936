//! Hashing utilities for grid comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of grid state. These
//! hashes are not cryptographically secure; they are used for fast
//! equality checks in determinism tests and logging.

use grit_core::Material;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash grid dimensions followed by every cell in storage order.
///
/// Dimensions are folded in first so that two grids with the same cell
/// sequence but different shapes hash differently.
pub fn cells_hash(width: u32, height: u32, cells: &[Material]) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, width);
    hash = fnv1a_u32(hash, height);
    for &m in cells {
        hash = fnv1a_byte(hash, m as u8);
    }
    hash
}
