//! permutations — exhaustive and random permutations of {1..n}.
//!
//! Purpose
//! -------
//! Supply the permutation streams consumed by the statistics engine:
//! a lazy, deterministic enumeration of all n! permutations for exact
//! counts, and seeded uniform draws for Monte-Carlo estimates at sizes where
//! enumeration is impossible.
//!
//! Key behaviors
//! -------------
//! - [`enumerate_permutations`] returns a restartable [`Permutations`]
//!   iterator in lexicographic order.
//! - [`checked_factorial`] sizes the enumeration and detects overflow.
//! - [`random_permutation`] and [`seeded_rng`] wrap `rand`'s shuffle.
//!
//! Conventions
//! -----------
//! - Permutations are `Vec<i64>` over the values 1..=n so they can be fed to
//!   the decomposers in `crate::streaks` directly.

pub mod enumerate;
pub mod random;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::enumerate::{Permutations, checked_factorial, enumerate_permutations};
pub use self::random::{random_permutation, seeded_rng};
