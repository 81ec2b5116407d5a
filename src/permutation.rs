use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error_codes::CodedError;

pub const LATTICE_SIZE: usize = 256;
pub const TABLE_LEN: usize = LATTICE_SIZE * 2;
const LATTICE_MASK: i64 = (LATTICE_SIZE as i64) - 1;

/// Doubled permutation of the lattice indices 0..=255.
///
/// The second half mirrors the first, so `table[a + b]` with `a, b` in
/// 0..=255 never needs a modulo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    values: [u8; TABLE_LEN],
}

impl PermutationTable {
    pub fn identity() -> Self {
        let mut order = [0u8; LATTICE_SIZE];
        for (index, slot) in order.iter_mut().enumerate() {
            *slot = index as u8;
        }
        Self::doubled(order)
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order = Self::identity().first_half();
        order.shuffle(rng);
        tracing::trace!("built shuffled permutation table");
        Self::doubled(order)
    }

    /// Same seed, same table. Nothing is promised across seeds.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Builds a table from an explicit order of all 256 lattice indices.
    pub fn from_order(order: &[u8]) -> Result<Self> {
        if order.len() != LATTICE_SIZE {
            let error = CodedError::permutation_length(order.len(), LATTICE_SIZE);
            return Err(anyhow!(error));
        }

        let mut seen = [false; LATTICE_SIZE];
        for &value in order {
            let slot = &mut seen[value as usize];
            if *slot {
                return Err(anyhow!(CodedError::permutation_duplicate(value)));
            }
            *slot = true;
        }

        let mut first = [0u8; LATTICE_SIZE];
        first.copy_from_slice(order);
        Ok(Self::doubled(first))
    }

    fn doubled(order: [u8; LATTICE_SIZE]) -> Self {
        let mut values = [0u8; TABLE_LEN];
        values[..LATTICE_SIZE].copy_from_slice(&order);
        values[LATTICE_SIZE..].copy_from_slice(&order);
        Self { values }
    }

    fn first_half(&self) -> [u8; LATTICE_SIZE] {
        let mut order = [0u8; LATTICE_SIZE];
        order.copy_from_slice(&self.values[..LATTICE_SIZE]);
        order
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.values.get(index).copied()
    }

    /// Gradient hash of a lattice corner: `table[table[x] + y]` with both
    /// coordinates wrapped onto the 256-cell lattice.
    pub fn hash(&self, x: i64, y: i64) -> u8 {
        let xi = (x & LATTICE_MASK) as usize;
        let yi = (y & LATTICE_MASK) as usize;
        self.values[self.values[xi] as usize + yi]
    }
}
