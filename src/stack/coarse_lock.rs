use std::marker::PhantomData;
use std::sync::Arc;
use parking_lot::Mutex;
use super::*;

/// A `ConcurrentStack<T>` that uses a single mutex to wrap a whole inner
/// stack. Every operation, `access` included, runs under the lock.
pub struct CoarseLockStack<T, S = DynamicStack<T>> {
  arc: Arc<Mutex<S>>,
  _elem: PhantomData<fn() -> T>,
}

impl<T, S> CoarseLockStack<T, S>
where S: Stack<T> {
  /// Wraps an existing stack, e.g. a `FixedStack` with a chosen bound.
  pub fn from_stack(stack: S) -> Self {
    Self {
      arc: Arc::new(Mutex::new(stack)),
      _elem: PhantomData,
    }
  }
}

impl<T, S> Stack<T> for CoarseLockStack<T, S>
where S: Stack<T> {
  fn new() -> Self {
    Self::from_stack(S::new())
  }

  fn push(&mut self, elem: T) -> Result<(), StackError<T>> {
    self.arc.lock().push(elem)
  }

  fn pop(&mut self) -> Result<T, StackError<T>> {
    self.arc.lock().pop()
  }

  fn contains(&self, elem: &T) -> bool
  where T: PartialEq {
    self.arc.lock().contains(elem)
  }

  fn access(&mut self, elem: T) -> Result<T, StackError<T>>
  where T: PartialEq {
    self.arc.lock().access(elem)
  }

  fn size(&self) -> usize {
    self.arc.lock().size()
  }

  fn is_empty(&self) -> bool {
    self.arc.lock().is_empty()
  }
}

impl<T, S> Clone for CoarseLockStack<T, S> {
  fn clone(&self) -> Self {
    Self {
      arc: self.arc.clone(),
      _elem: PhantomData,
    }
  }
}

impl<T, S> ConcurrentStack<T> for CoarseLockStack<T, S>
where S: Stack<T> + Send, T: Send {}
