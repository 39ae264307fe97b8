//! Core definitions shared by all seqvec-* crates: the error type and the `Result` alias.

pub mod error;
pub mod result;

pub use result::Result;
