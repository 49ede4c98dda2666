//! Failures reported by `Stack<T>` operations.

use thiserror::Error;

/// The ways a stack operation can fail.
///
/// Variants that consume an element hand it back, so a rejected push or a
/// failed lookup never loses the caller's value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError<T> {
  /// `pop` on a stack with no elements.
  #[error("no more elements in the stack")]
  Empty,

  /// `access` consumed the whole stack without finding the element.
  #[error("could not find the element: {0:?}")]
  NotFound(T),

  /// `push` on a fixed-capacity stack that is already full.
  #[error("stack is full (capacity {capacity})")]
  Overflow {
    capacity: usize,
    elem: T,
  },
}

impl<T> StackError<T> {
  /// Recovers the element carried by the error, if any.
  pub fn into_inner(self) -> Option<T> {
    match self {
      StackError::Empty => None,
      StackError::NotFound(elem) => Some(elem),
      StackError::Overflow { elem, .. } => Some(elem),
    }
  }
}
