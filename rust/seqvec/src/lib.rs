//! A growable, contiguous sequence container built on an exclusively owned buffer.
//!
//! [`SeqVec`] tracks a logical length over an [`OwnedBuffer`] of fixed capacity and
//! replaces the buffer wholesale whenever the capacity has to change. Growth on push
//! and insert doubles the capacity; explicit [`SeqVec::resize`] and
//! [`SeqVec::reserve`] allocate exactly what is asked for.
//!
//! ```
//! use seqvec::{SeqVec, seq_vec};
//!
//! let mut s = seq_vec![10, 20, 30];
//! let pos = s.insert(1, 99);
//! assert_eq!(s, [10, 99, 20, 30]);
//! s.erase(pos);
//! assert_eq!(s, [10, 20, 30]);
//!
//! let mut pushed = SeqVec::new();
//! for i in 0..5 {
//!     pushed.push(i);
//! }
//! assert_eq!(pushed.capacity(), 8);
//! ```

mod reserve_hint;
mod seq_vec;

pub use reserve_hint::{ReserveHint, reserve};
pub use seq_vec::{IntoIter, SeqVec};
pub use seqvec_buffer::OwnedBuffer;
pub use seqvec_common::{
    Result,
    error::{Error, ErrorKind},
};

/// Creates a [`SeqVec`] from a list of elements, or from a value and a count.
///
/// - `seq_vec![]` is an empty sequence.
/// - `seq_vec![a, b, c]` moves the elements in order; capacity equals the length.
/// - `seq_vec![value; n]` holds `n` elements equal to `value`.
#[macro_export]
macro_rules! seq_vec {
    () => {
        $crate::SeqVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SeqVec::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SeqVec::from([$($x),+])
    };
}
