//! The card demo: stacks a deck, unstacks it, restacks it and queries it.

use std::io::{self, Write};
use thiserror::Error;
use tracing::info;

use crate::deck;
use crate::stack::{Stack, StackError};

#[derive(Error, Debug)]
pub enum DemoError {
  #[error("could not write demo output")]
  Io(#[from] io::Error),

  #[error(transparent)]
  Stack(#[from] StackError<String>),
}

/// Drives a `Stack<String>` through the demo sequence, writing a report
/// line for every step to `out`.
pub struct CardDemo<S, W> {
  stack: S,
  out: W,
}

impl<S, W> CardDemo<S, W>
where S: Stack<String>, W: Write {
  pub fn new(stack: S, out: W) -> Self {
    Self {
      stack,
      out,
    }
  }

  /// Runs every step in order and returns the stack and writer.
  pub fn run(mut self) -> Result<(S, W), DemoError> {
    self.stack_cards()?;
    self.stack_size()?;
    self.unstack_all_cards()?;
    self.stack_size()?;
    self.stack_cards()?;
    self.contains_card("Ace of Diamonds")?;
    self.contains_card("Joker")?;
    self.get_a_card("Ace of Clubs")?;
    self.stack_size()?;

    Ok((self.stack, self.out))
  }

  pub fn stack_cards(&mut self) -> Result<(), DemoError> {
    for card in deck::labels() {
      self.stack.push(card)?;
    }
    info!(size = self.stack.size(), "stacked deck");
    Ok(())
  }

  pub fn unstack_all_cards(&mut self) -> Result<(), DemoError> {
    writeln!(self.out, "Unstacked cards: ")?;
    while !self.stack.is_empty() {
      let card = self.stack.pop()?;
      writeln!(self.out, "{}", card)?;
    }
    Ok(())
  }

  pub fn contains_card(&mut self, card: &str) -> Result<bool, DemoError> {
    let found = self.stack.contains(&card.to_owned());
    writeln!(self.out, "Does stack has \"{}\"? {}", card, found)?;
    Ok(found)
  }

  pub fn get_a_card(&mut self, card: &str) -> Result<String, DemoError> {
    let card = self.stack.access(card.to_owned())?;
    writeln!(self.out, "{}", card)?;
    Ok(card)
  }

  pub fn stack_size(&mut self) -> Result<usize, DemoError> {
    let size = self.stack.size();
    writeln!(self.out, "{}", size)?;
    Ok(size)
  }
}
