use tracing::{debug, trace};
use super::*;

/// A growable `Stack<T>`. Uses Rust's `Vec<T>`, so `push` never fails.
pub struct DynamicStack<T> {
  elems: Vec<T>,
}

impl<T> DynamicStack<T> {
  /// Creates an empty stack with room for `capacity` elements before it
  /// reallocates. This is a hint, not a bound.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      elems: Vec::with_capacity(capacity),
    }
  }
}

impl<T> Stack<T> for DynamicStack<T> {
  fn new() -> Self {
    Self {
      elems: Vec::new(),
    }
  }

  fn push(&mut self, elem: T) -> Result<(), StackError<T>> {
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
    self.elems.contains(elem)
  }

  fn access(&mut self, elem: T) -> Result<T, StackError<T>>
  where T: PartialEq {
    match self.elems.iter().rposition(|e| *e == elem) {
      Some(i) => {
        debug!(discarded = self.elems.len() - i - 1, found = true, "destructive access");
        // The old top lands in slot `i` and is cut off with the rest.
        let found = self.elems.swap_remove(i);
        self.elems.truncate(i);
        Ok(found)
      }
      None => {
        debug!(discarded = self.elems.len(), found = false, "destructive access");
        self.elems.clear();
        Err(StackError::NotFound(elem))
      }
    }
  }

  fn size(&self) -> usize {
    self.elems.len()
  }

  fn is_empty(&self) -> bool {
    self.elems.is_empty()
  }
}
