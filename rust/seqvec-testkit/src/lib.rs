//! Test utilities and helpers for the seqvec crates.
//!
//! This crate provides:
//! - Element types that count their own construction and destruction, used to check
//!   that containers neither leak nor double-drop
//! - Seeded generators of random container operations for model-based tests
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency of the seqvec crates only.

pub mod ops_gen;
pub mod tracked;

pub use ops_gen::{Op, random_ops};
pub use tracked::{DropCounter, Tracked};
