use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use seqvec_buffer::{OwnedBuffer, allocation_failure};
use seqvec_common::{Result, error::Error};

use crate::ReserveHint;

/// By-value iterator over the elements of a [`SeqVec`].
pub type IntoIter<T> = std::vec::IntoIter<T>;

/// A growable, contiguous sequence of `T` with explicit capacity control.
///
/// `SeqVec` owns a single [`OwnedBuffer`] of `capacity` slots, of which the first
/// `len` hold the logical contents. The remaining slots contain leftover values that
/// are never observed through this API; they are dropped together with the buffer.
///
/// When a push or insert finds the buffer full, the capacity grows to
/// `max(1, 2 * len)`. Explicit requests ([`resize`](Self::resize),
/// [`reserve`](Self::reserve)) allocate exactly the requested capacity. Capacity
/// never shrinks implicitly.
///
/// Every allocating operation comes in two forms: a `try_` form that returns an
/// allocation error and leaves the sequence unchanged, and a plain form that panics
/// on allocation failure.
///
/// Any reallocation replaces the buffer, so references into the sequence cannot be
/// held across a growing call; the borrow checker rejects such code.
pub struct SeqVec<T> {
    items: OwnedBuffer<T>,
    len: usize,
}

impl<T> SeqVec<T> {
    /// Creates an empty sequence without allocating.
    #[inline]
    pub const fn new() -> SeqVec<T> {
        SeqVec {
            items: OwnedBuffer::new(),
            len: 0,
        }
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements the sequence can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.len]
    }

    /// Returns a pointer to the first slot of the buffer, or a null pointer if the
    /// sequence has never allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.len))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, len))
    }

    /// Sets the length to zero. The capacity and the buffer contents are left as is.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shortens the sequence to `len` elements. Has no effect if `len` is not less
    /// than the current length.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Exchanges the contents, length and capacity of two sequences in O(1).
    #[inline]
    pub fn swap_with(&mut self, other: &mut SeqVec<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out into a new sequence, leaving this one empty with zero
    /// capacity.
    #[inline]
    pub fn take(&mut self) -> SeqVec<T> {
        SeqVec {
            items: self.items.take(),
            len: std::mem::take(&mut self.len),
        }
    }

    /// Consumes the sequence and returns its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let SeqVec { items, len } = self;
        let mut vec = items.into_vec();
        vec.truncate(len);
        vec
    }

    /// Consumes the sequence and returns its buffer, including the spare slots.
    pub fn into_buffer(self) -> OwnedBuffer<T> {
        self.items
    }
}

impl<T: Default> SeqVec<T> {
    /// Creates a sequence of `len` default values, with capacity `len`.
    pub fn try_with_len(len: usize) -> Result<SeqVec<T>> {
        Ok(SeqVec {
            items: OwnedBuffer::try_with_len(len)?,
            len,
        })
    }

    /// Creates a sequence of `len` default values, with capacity `len`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn with_len(len: usize) -> SeqVec<T> {
        unwrap_alloc(Self::try_with_len(len))
    }

    /// Creates an empty sequence with exactly `capacity` pre-allocated slots.
    pub fn try_with_capacity(capacity: usize) -> Result<SeqVec<T>> {
        Ok(SeqVec {
            items: OwnedBuffer::try_with_len(capacity)?,
            len: 0,
        })
    }

    /// Creates an empty sequence with exactly `capacity` pre-allocated slots.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn with_capacity(capacity: usize) -> SeqVec<T> {
        unwrap_alloc(Self::try_with_capacity(capacity))
    }

    /// Creates an empty sequence with the capacity requested by `hint`.
    pub fn try_from_hint(hint: ReserveHint) -> Result<SeqVec<T>> {
        Self::try_with_capacity(hint.capacity())
    }

    /// Creates a sequence of `len` elements equal to `value`, with capacity `len`.
    ///
    /// The first `len - 1` slots receive clones and the last one receives `value`
    /// itself. With `len == 0` the value is dropped.
    pub fn try_from_elem(len: usize, value: T) -> Result<SeqVec<T>>
    where
        T: Clone,
    {
        let mut seq = Self::try_with_len(len)?;
        if let Some((last, rest)) = seq.as_mut_slice().split_last_mut() {
            for slot in rest {
                *slot = value.clone();
            }
            *last = value;
        }
        Ok(seq)
    }

    /// Creates a sequence of `len` elements equal to `value`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn from_elem(len: usize, value: T) -> SeqVec<T>
    where
        T: Clone,
    {
        unwrap_alloc(Self::try_from_elem(len, value))
    }

    /// Makes a deep copy of the sequence, preserving its capacity.
    pub fn try_clone(&self) -> Result<SeqVec<T>>
    where
        T: Clone,
    {
        let mut items = OwnedBuffer::try_with_len(self.capacity())?;
        items.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        Ok(SeqVec {
            items,
            len: self.len,
        })
    }

    /// Changes the length to `new_len`.
    ///
    /// - Shrinking only lowers the length; capacity is unchanged.
    /// - Growing within the current capacity resets the newly exposed slots to
    ///   `T::default()`.
    /// - Growing past the capacity reallocates to exactly `new_len` slots.
    ///
    /// On error the sequence is left unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<()> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        if new_len > self.capacity() {
            // Fresh slots past `len` are already default-initialized.
            self.try_reallocate(new_len)?;
        } else {
            self.items.as_mut_slice()[self.len..new_len].fill_with(T::default);
        }
        self.len = new_len;
        Ok(())
    }

    /// Changes the length to `new_len`. See [`try_resize`](Self::try_resize).
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn resize(&mut self, new_len: usize) {
        unwrap_alloc(self.try_resize(new_len))
    }

    /// Grows the capacity to exactly `new_capacity` if it is larger than the current
    /// one. Never shrinks; length and contents are preserved.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity, not an additional
    /// amount.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            self.try_reallocate(new_capacity)?;
        }
        Ok(())
    }

    /// Grows the capacity to exactly `new_capacity` if it is larger than the current
    /// one.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        unwrap_alloc(self.try_reserve(new_capacity))
    }

    /// Appends `value` to the back of the sequence, doubling the capacity if it is
    /// exhausted.
    pub fn try_push(&mut self, value: T) -> Result<()> {
        self.try_grow_for_one()?;
        self.items[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Appends `value` to the back of the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn push(&mut self, value: T) {
        unwrap_alloc(self.try_push(value))
    }

    /// Removes the last element and returns it, or `None` if the sequence is empty.
    ///
    /// The vacated slot is reset to `T::default()`.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::take(&mut self.items[self.len]))
    }

    /// Inserts `value` before position `index`, shifting the elements at and after it
    /// one slot toward the back. Returns the position of the inserted element.
    ///
    /// If the sequence is full, the capacity first grows to `max(1, 2 * len)`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize> {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        self.try_grow_for_one()?;
        let slots = self.items.as_mut_slice();
        slots[len] = value;
        slots[index..=len].rotate_right(1);
        self.len += 1;
        Ok(index)
    }

    /// Inserts `value` before position `index`. See [`try_insert`](Self::try_insert).
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the allocation fails.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        unwrap_alloc(self.try_insert(index, value))
    }

    /// Removes and returns the element at `index`, shifting all elements after it one
    /// slot toward the front. The vacated slot is reset to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        self.items.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        std::mem::take(&mut self.items[self.len])
    }

    /// Removes and drops the element at `index`, shifting all elements after it one
    /// slot toward the front. Returns the position now occupied by the element that
    /// followed the removed one (equal to `len` if the last element was removed).
    ///
    /// This is O(`len - index`).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Makes room for one more element using the doubling policy.
    #[inline]
    fn try_grow_for_one(&mut self) -> Result<()> {
        if self.len < self.capacity() {
            return Ok(());
        }
        self.try_reallocate(doubled_capacity(self.len)?)
    }

    /// Moves the elements into a fresh buffer of exactly `new_capacity` slots.
    ///
    /// The new buffer is obtained before anything is moved, so a failed allocation
    /// leaves the sequence untouched.
    #[cold]
    fn try_reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len);
        let mut items = OwnedBuffer::try_with_len(new_capacity)?;
        let len = self.len;
        items.as_mut_slice()[..len].swap_with_slice(&mut self.items.as_mut_slice()[..len]);
        log::trace!(
            "SeqVec reallocated: len {len}, capacity {} -> {new_capacity}",
            self.capacity()
        );
        self.items = items;
        Ok(())
    }
}

/// Capacity after growing a full sequence of `len` elements: `max(1, 2 * len)`.
pub(crate) fn doubled_capacity(len: usize) -> Result<usize> {
    match len {
        0 => Ok(1),
        len => len
            .checked_mul(2)
            .ok_or_else(|| Error::capacity_overflow(format!("doubling {len} elements"))),
    }
}

#[inline]
fn unwrap_alloc<R>(result: Result<R>) -> R {
    match result {
        Ok(r) => r,
        Err(e) => allocation_failure(e),
    }
}

impl<T> Default for SeqVec<T> {
    fn default() -> Self {
        SeqVec::new()
    }
}

impl<T: Clone + Default> Clone for SeqVec<T> {
    /// Deep copy; the clone has the same capacity as the original.
    fn clone(&self) -> Self {
        unwrap_alloc(self.try_clone())
    }
}

impl<T> Deref for SeqVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SeqVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Indexing is limited to the first `len` elements and panics outside of them.
impl<T, I: SliceIndex<[T]>> Index<I> for SeqVec<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SeqVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for SeqVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SeqVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<SeqVec<U>> for SeqVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SeqVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SeqVec<T> {}

impl<T, U> PartialEq<[U]> for SeqVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for SeqVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for SeqVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<Vec<U>> for SeqVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic ordering over the elements.
impl<T: PartialOrd> PartialOrd for SeqVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SeqVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SeqVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> From<Vec<T>> for SeqVec<T> {
    /// Takes over the elements of `vec`; the capacity equals the length.
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        SeqVec {
            items: OwnedBuffer::from_vec(vec),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SeqVec<T> {
    fn from(array: [T; N]) -> Self {
        SeqVec::from(Vec::from(array))
    }
}

impl<T: Clone> From<&[T]> for SeqVec<T> {
    fn from(slice: &[T]) -> Self {
        SeqVec::from(slice.to_vec())
    }
}

impl<T: Default> From<ReserveHint> for SeqVec<T> {
    fn from(hint: ReserveHint) -> Self {
        SeqVec::with_capacity(hint.capacity())
    }
}

impl<T> From<SeqVec<T>> for Vec<T> {
    fn from(seq: SeqVec<T>) -> Self {
        seq.into_vec()
    }
}

impl<T> FromIterator<T> for SeqVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SeqVec::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Default> Extend<T> for SeqVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SeqVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push(*value);
        }
    }
}

impl<T> IntoIterator for SeqVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SeqVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SeqVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
