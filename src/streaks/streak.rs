//! Single streak: an ordered run whose first element is its minimum.
//!
//! A [`Streak`] can only be obtained through [`Streak::new`], which rejects a
//! run whose leader is not its minimum. Decompositions build streaks through
//! the same constructor, so every `Streak` in circulation satisfies the
//! invariant.
use crate::streaks::errors::{StreakError, StreakResult};

/// Ordered run of integers headed by its own minimum (the *leader*).
///
/// Invariant: `elements[0] == min(elements)` whenever `elements` is non-empty.
/// The empty streak is a valid placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Streak {
    elements: Vec<i64>,
}

impl Streak {
    /// Construct a [`Streak`] from its members, checking the leader invariant.
    ///
    /// # Errors
    /// - [`StreakError::LeaderNotMinimum`] if the first element is larger than
    ///   some later element.
    pub fn new(elements: Vec<i64>) -> StreakResult<Self> {
        if let Some((&leader, rest)) = elements.split_first() {
            if let Some(&minimum) = rest.iter().min() {
                if minimum < leader {
                    return Err(StreakError::LeaderNotMinimum { leader, minimum });
                }
            }
        }
        Ok(Streak { elements })
    }

    /// First (and smallest) element, or `None` for the empty streak.
    pub fn leader(&self) -> Option<i64> {
        self.elements.first().copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.elements
    }
}

impl AsRef<[i64]> for Streak {
    fn as_ref(&self) -> &[i64] {
        &self.elements
    }
}

impl std::fmt::Display for Streak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Streak({:?})", self.elements)
    }
}
