//! A fixed-size, exclusively owned heap array of default-initialized elements.
//!
//! [`OwnedBuffer`] is the storage primitive underneath `SeqVec`. It knows nothing
//! about logical length or growth: it is created with a given number of elements,
//! hands out indexed access to them, and releases the whole allocation when dropped.

use std::ops::{Index, IndexMut};

use seqvec_common::{Result, error::Error};

/// An exclusively owned, fixed-size heap array of `T`.
///
/// The buffer either holds nothing (the null handle) or exactly the number of
/// elements requested at construction. Every slot always contains an initialized `T`,
/// so dropping the buffer drops each element exactly once.
///
/// The buffer cannot be cloned: copying would alias ownership. It can be moved,
/// swapped with another buffer in O(1), or released back to the caller.
pub struct OwnedBuffer<T> {
    /// `None` is the null handle; `Some` is never an empty slice.
    items: Option<Box<[T]>>,
}

impl<T> OwnedBuffer<T> {
    /// Creates a null buffer that owns no allocation.
    #[inline]
    pub const fn new() -> OwnedBuffer<T> {
        OwnedBuffer { items: None }
    }

    /// Allocates a buffer of `len` default-initialized elements.
    ///
    /// A zero `len` yields the null buffer without allocating.
    ///
    /// # Errors
    ///
    /// Returns an allocation failure if the memory cannot be obtained. Nothing is
    /// retained in that case.
    pub fn try_with_len(len: usize) -> Result<OwnedBuffer<T>>
    where
        T: Default,
    {
        if len == 0 {
            return Ok(OwnedBuffer::new());
        }
        let mut items = Vec::new();
        items
            .try_reserve_exact(len)
            .map_err(|e| Error::allocation_failed(len, e))?;
        items.resize_with(len, T::default);
        Ok(OwnedBuffer::from_vec(items))
    }

    /// Allocates a buffer of `len` default-initialized elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn with_len(len: usize) -> OwnedBuffer<T>
    where
        T: Default,
    {
        match Self::try_with_len(len) {
            Ok(buf) => buf,
            Err(e) => allocation_failure(e),
        }
    }

    /// Takes ownership of an already allocated array.
    ///
    /// An empty slice is treated as the null handle.
    pub fn from_boxed_slice(items: Box<[T]>) -> OwnedBuffer<T> {
        if items.is_empty() {
            OwnedBuffer::new()
        } else {
            OwnedBuffer { items: Some(items) }
        }
    }

    /// Takes ownership of the elements of `vec`, dropping any spare capacity.
    pub fn from_vec(vec: Vec<T>) -> OwnedBuffer<T> {
        Self::from_boxed_slice(vec.into_boxed_slice())
    }

    /// Returns the number of elements in the allocation (zero for the null handle).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the buffer owns no allocation.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.items.is_none()
    }

    /// Returns a raw pointer to the first element, or a null pointer for the null handle.
    ///
    /// The pointer is valid only while the buffer is alive and not replaced.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items
            .as_ref()
            .map_or(std::ptr::null(), |items| items.as_ptr())
    }

    /// Returns a mutable raw pointer to the first element, or a null pointer for the
    /// null handle.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items
            .as_mut()
            .map_or(std::ptr::null_mut(), |items| items.as_mut_ptr())
    }

    /// Returns the whole allocation as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_deref().unwrap_or(&[])
    }

    /// Returns the whole allocation as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.items.as_deref_mut().unwrap_or(&mut [])
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Violations are checked only in
    /// debug builds.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Relinquishes ownership of the allocation and leaves this buffer null.
    ///
    /// The caller becomes responsible for the returned elements.
    #[inline]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.items.take()
    }

    /// Moves the allocation out into a new buffer, leaving this one null.
    #[inline]
    pub fn take(&mut self) -> OwnedBuffer<T> {
        OwnedBuffer {
            items: self.items.take(),
        }
    }

    /// Exchanges the allocations of two buffers without moving any elements.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        std::mem::swap(&mut self.items, &mut other.items);
    }

    /// Consumes the buffer and returns its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items.map(|items| items.into_vec()).unwrap_or_default()
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        OwnedBuffer::new()
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(items: Box<[T]>) -> Self {
        OwnedBuffer::from_boxed_slice(items)
    }
}

impl<T> From<Vec<T>> for OwnedBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        OwnedBuffer::from_vec(vec)
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("OwnedBuffer").field(&self.as_slice()).finish()
    }
}

/// Reports an allocation failure from an infallible entry point.
#[cold]
#[track_caller]
pub fn allocation_failure(e: Error) -> ! {
    panic!("{e}")
}
