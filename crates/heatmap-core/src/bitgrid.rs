//! A dense boolean grid packed eight cells to a byte.

use std::collections::TryReserveError;

use crate::geom::{Point, Range};

/// One bit per cell of a [`Range`], packed row-major, eight cells per byte.
///
/// Cell `i` (its row-major index within the range) lives in bit `i & 7` of
/// byte `i >> 3`. Out-of-range points read as `false` and ignore writes.
/// Bits are never cleared: a set bit means "finalised or blocked".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    rng: Range,
    bits: Vec<u8>,
}

impl BitGrid {
    /// Create an all-clear grid covering `rng`.
    ///
    /// Allocation is fallible so callers can report memory exhaustion
    /// instead of aborting.
    pub fn try_new(rng: Range) -> Result<Self, TryReserveError> {
        let nbytes = rng.len().div_ceil(8);
        let mut bits = Vec::new();
        bits.try_reserve_exact(nbytes)?;
        bits.resize(nbytes, 0);
        Ok(Self { rng, bits })
    }

    #[inline]
    fn locate(&self, p: Point) -> Option<(usize, u8)> {
        let i = self.rng.index(p)?;
        Some((i >> 3, 1 << (i & 7)))
    }

    /// Whether the bit for `p` is set.
    #[inline]
    pub fn get(&self, p: Point) -> bool {
        match self.locate(p) {
            Some((byte, mask)) => self.bits[byte] & mask != 0,
            None => false,
        }
    }

    /// Set the bit for `p`.
    #[inline]
    pub fn set(&mut self, p: Point) {
        if let Some((byte, mask)) = self.locate(p) {
            self.bits[byte] |= mask;
        }
    }
}
