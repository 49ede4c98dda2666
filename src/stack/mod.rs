//! Stack implementations
//!
//! This module provides two sequential stacks sharing one contract: a
//! `FixedStack` whose storage is reserved up front and never grows, and a
//! `DynamicStack` backed by Rust's `Vec<T>`. They are interchangeable
//! wherever a `Stack<T>` is expected.
//!
//! `CoarseLockStack` is the one thread-safe option: it puts a single
//! mutex around a whole inner stack and hands out cloneable handles.
//!
//! Lookups come in two flavours. `contains` is a plain membership test.
//! `access` is a destructive search: it pops from the top until it meets
//! the element, and everything above the match is gone afterwards.

mod fixed;
mod dynamic;
mod coarse_lock;

pub use self::fixed::{FixedStack, DEFAULT_CAPACITY};
pub use self::dynamic::DynamicStack;
pub use self::coarse_lock::CoarseLockStack;

pub use crate::error::StackError;

/// The `Stack<T>` abstract data type.
pub trait Stack<T> {
  /// Creates a new, empty `Stack<T>`.
  fn new() -> Self;

  /// Pushes an element onto the stack.
  ///
  /// Bounded stacks fail with `StackError::Overflow` when full and give the
  /// element back.
  fn push(&mut self, elem: T) -> Result<(), StackError<T>>;

  /// Pops the top element, failing with `StackError::Empty` if there is none.
  fn pop(&mut self) -> Result<T, StackError<T>>;

  /// Tests if an element equal to `elem` is anywhere in the stack.
  fn contains(&self, elem: &T) -> bool
  where T: PartialEq;

  /// Pops elements until one equal to `elem` comes off, and returns it.
  ///
  /// Elements above the match are discarded. If nothing matches the stack
  /// is left empty and `StackError::NotFound` carries `elem` back.
  fn access(&mut self, elem: T) -> Result<T, StackError<T>>
  where T: PartialEq;

  /// Returns the number of elements in the stack.
  fn size(&self) -> usize;

  /// Predicate that tests if the stack is empty.
  fn is_empty(&self) -> bool {
    self.size() == 0
  }
}

/// A `Stack` whose handles can be cloned and shared across threads.
pub trait ConcurrentStack<T>: Stack<T> + Clone + Send + Sync {}
