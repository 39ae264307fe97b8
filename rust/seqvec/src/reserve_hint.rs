/// A request for pre-allocated capacity, used to construct an empty [`SeqVec`]
/// that can hold `capacity` elements without reallocating.
///
/// ```
/// use seqvec::{SeqVec, reserve};
///
/// let v: SeqVec<u32> = reserve(10).into();
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 10);
/// ```
///
/// [`SeqVec`]: crate::SeqVec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    #[inline]
    pub const fn new(capacity: usize) -> ReserveHint {
        ReserveHint { capacity }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveHint::new`].
#[inline]
pub const fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}
