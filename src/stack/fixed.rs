use std::collections::TryReserveError;
use tracing::{debug, trace, warn};
use super::*;

/// Number of slots `FixedStack::new` preallocates.
pub const DEFAULT_CAPACITY: usize = 500;

/// An array-based `Stack<T>` with a bound fixed at construction.
///
/// Storage for every slot is reserved up front and never grows; the top is
/// always `elems[count - 1]`.
pub struct FixedStack<T> {
  elems: Vec<T>,
  capacity: usize,
}

impl<T> FixedStack<T> {
  /// Creates an empty stack holding at most `capacity` elements.
  ///
  /// Panics if the storage cannot be allocated; see `try_with_capacity`.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      elems: Vec::with_capacity(capacity),
      capacity,
    }
  }

  /// Like `with_capacity`, but reports an allocation failure instead of
  /// panicking. Use this when the bound comes from outside the program.
  pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
    let mut elems = Vec::new();
    elems.try_reserve_exact(capacity)?;

    Ok(Self {
      elems,
      capacity,
    })
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }
}

impl<T> Stack<T> for FixedStack<T> {
  fn new() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }

  fn push(&mut self, elem: T) -> Result<(), StackError<T>> {
    if self.elems.len() == self.capacity {
      warn!(capacity = self.capacity, "push rejected, stack is full");
      return Err(StackError::Overflow {
        capacity: self.capacity,
        elem,
      });
    }

    self.elems.push(elem);
    trace!(count = self.elems.len(), "push");
    Ok(())
  }

  fn pop(&mut self) -> Result<T, StackError<T>> {
    let elem = self.elems.pop().ok_or(StackError::Empty)?;
    trace!(count = self.elems.len(), "pop");
    Ok(elem)
  }

  fn contains(&self, elem: &T) -> bool
  where T: PartialEq {
    self.elems.iter().any(|e| e == elem)
  }

  fn access(&mut self, elem: T) -> Result<T, StackError<T>>
  where T: PartialEq {
    let mut discarded = 0;

    while let Some(top) = self.elems.pop() {
      if top == elem {
        debug!(discarded, found = true, "destructive access");
        return Ok(top);
      }
      discarded += 1;
    }

    debug!(discarded, found = false, "destructive access");
    Err(StackError::NotFound(elem))
  }

  fn size(&self) -> usize {
    self.elems.len()
  }
}
