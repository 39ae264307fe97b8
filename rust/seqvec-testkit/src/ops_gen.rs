//! Seeded generation of random container operations.
//!
//! Positions are generated as raw seeds and reduced modulo the current length
//! when the operation is applied, so any generated sequence is valid against
//! any container state.

/// A single mutating operation on a growable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Push(u64),
    Pop,
    Insert { position: usize, value: u64 },
    Erase { position: usize },
    Resize(usize),
    Reserve(usize),
    Truncate(usize),
    Clear,
}

impl Op {
    /// Maps a position seed onto `0..=len`, the valid range for an insertion.
    pub fn insert_index(position: usize, len: usize) -> usize {
        position % (len + 1)
    }

    /// Maps a position seed onto `0..len`, the valid range for a removal.
    ///
    /// Returns `None` when `len` is zero.
    pub fn erase_index(position: usize, len: usize) -> Option<usize> {
        (len != 0).then(|| position % len)
    }
}

/// Generates `count` random operations from the given seed.
///
/// The mix favors growth (pushes and inserts) so sequences reach a few hundred
/// elements and cross several reallocations. Sizes passed to `Resize`, `Reserve`
/// and `Truncate` stay below 512.
pub fn random_ops(seed: u64, count: usize) -> Vec<Op> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| match rng.u8(0..100) {
            0..35 => Op::Push(rng.u64(..)),
            35..50 => Op::Insert {
                position: rng.usize(..),
                value: rng.u64(..),
            },
            50..65 => Op::Erase {
                position: rng.usize(..),
            },
            65..75 => Op::Pop,
            75..83 => Op::Resize(rng.usize(0..512)),
            83..91 => Op::Reserve(rng.usize(0..512)),
            91..98 => Op::Truncate(rng.usize(0..512)),
            _ => Op::Clear,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_ops() {
        assert_eq!(random_ops(42, 100), random_ops(42, 100));
        assert_ne!(random_ops(42, 100), random_ops(43, 100));
    }

    #[test]
    fn test_index_mapping() {
        assert_eq!(Op::insert_index(7, 0), 0);
        assert_eq!(Op::insert_index(7, 3), 3);
        assert_eq!(Op::erase_index(7, 0), None);
        assert_eq!(Op::erase_index(7, 3), Some(1));
    }
}
