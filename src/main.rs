use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use lifo::demo::CardDemo;
use lifo::fallible::{self, WalkthroughError};
use lifo::stack::{CoarseLockStack, DynamicStack, FixedStack, Stack, DEFAULT_CAPACITY};

#[derive(Parser, Debug)]
#[command(name = "lifo", version, about = "Stack a deck of cards, or walk through error handling")]
struct Cli {
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Push, pop and search a 52-card deck.
  Cards(CardsArgs),
  /// Read a file and show how each failure is reported.
  Errors {
    file: PathBuf,
  },
}

#[derive(clap::Args, Debug)]
struct CardsArgs {
  /// Stack implementation to run the demo against.
  #[arg(long, value_enum, default_value_t = Backend::Dynamic)]
  backend: Backend,

  /// Bound for the fixed and locked backends.
  #[arg(long, env = "LIFO_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
  capacity: usize,
}

impl Default for CardsArgs {
  fn default() -> Self {
    Self {
      backend: Backend::Dynamic,
      capacity: DEFAULT_CAPACITY,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Backend {
  Fixed,
  Dynamic,
  Locked,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();
  let stdout = io::stdout().lock();

  match cli.command {
    Some(Command::Errors { file }) => walkthrough(&file, stdout),
    Some(Command::Cards(args)) => cards(&args, stdout),
    None => cards(&CardsArgs::default(), stdout),
  }
}

fn cards<W: Write>(args: &CardsArgs, out: W) -> Result<()> {
  tracing::info!(backend = ?args.backend, capacity = args.capacity, "running card demo");

  match args.backend {
    Backend::Fixed => run_demo(fixed_stack(args.capacity)?, out),
    Backend::Dynamic => run_demo(DynamicStack::new(), out),
    Backend::Locked => run_demo(CoarseLockStack::<String, _>::from_stack(fixed_stack(args.capacity)?), out),
  }
}

fn fixed_stack(capacity: usize) -> Result<FixedStack<String>> {
  FixedStack::try_with_capacity(capacity)
    .with_context(|| format!("could not allocate a stack of capacity {}", capacity))
}

fn run_demo<S: Stack<String>, W: Write>(stack: S, out: W) -> Result<()> {
  CardDemo::new(stack, out).run().context("card demo failed")?;
  Ok(())
}

fn walkthrough<W: Write>(file: &Path, mut out: W) -> Result<()> {
  match fallible::read_lines(file) {
    Ok(lines) => {
      writeln!(out, "Data from file:")?;
      for line in lines {
        writeln!(out, "{}", line)?;
      }
    }
    Err(e) => report(&mut out, &e)?,
  }

  if let Err(e) = fallible::require_nonzero(0) {
    report(&mut out, &e)?;
  }

  for (a, b) in [(0, 0), (4, 0)] {
    if let Err(e) = fallible::checked_quotient(a, b) {
      report(&mut out, &e)?;
    }
  }

  Ok(())
}

fn report<W: Write>(out: &mut W, err: &WalkthroughError) -> io::Result<()> {
  let chain = fallible::error_chain(err);
  writeln!(out, "{}: {}", fallible::describe(err), chain[0])?;
  for cause in &chain[1..] {
    writeln!(out, "  caused by: {}", cause)?;
  }
  Ok(())
}
