//! Structured error handling, worked through on a few small operations.
//!
//! Each failure is a variant of `WalkthroughError` returned with `?`
//! rather than thrown. Cleanup is tied to scope: a file opened by
//! `read_lines` is closed when its guard drops, whether reading finished
//! or failed half way. Where one failure is caused by another, the cause
//! is kept as the `source()` of the outer error, and `error_chain` walks
//! that chain back down.

use std::error::Error as StdError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum WalkthroughError {
  #[error("could not open {}", .path.display())]
  Open {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("could not read {}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("value can not be zero")]
  Zero,

  /// An arithmetic failure wrapped with the same message; the cause
  /// is reachable through `source()`.
  #[error("{source}")]
  Arithmetic {
    #[source]
    source: ArithmeticError,
  },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
  #[error("attempt to divide by zero")]
  DivideByZero,

  #[error("attempt to divide with overflow")]
  Overflow,
}

/// Owns an open file for the duration of a read and logs when it is
/// released.
struct OpenFile<'a> {
  path: &'a Path,
  reader: BufReader<File>,
}

impl<'a> OpenFile<'a> {
  fn open(path: &'a Path) -> Result<Self, WalkthroughError> {
    let file = File::open(path).map_err(|source| WalkthroughError::Open {
      path: path.to_owned(),
      source,
    })?;

    Ok(Self {
      path,
      reader: BufReader::new(file),
    })
  }
}

impl Drop for OpenFile<'_> {
  fn drop(&mut self) {
    debug!(path = %self.path.display(), "closing file");
  }
}

/// Reads `path` line by line. The file is closed on every exit path.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WalkthroughError> {
  let path = path.as_ref();
  let mut file = OpenFile::open(path)?;

  let mut lines = Vec::new();
  for line in (&mut file.reader).lines() {
    let line = line.map_err(|source| WalkthroughError::Read {
      path: path.to_owned(),
      source,
    })?;
    lines.push(line);
  }

  Ok(lines)
}

/// Classifies an error, most specific case first.
pub fn describe(err: &WalkthroughError) -> &'static str {
  match err {
    WalkthroughError::Open { source, .. } if source.kind() == io::ErrorKind::NotFound => {
      "file not found"
    }
    WalkthroughError::Open { .. } | WalkthroughError::Read { .. } => "error reading file",
    _ => "error",
  }
}

pub fn require_nonzero(value: i32) -> Result<i32, WalkthroughError> {
  if value == 0 {
    return Err(WalkthroughError::Zero);
  }
  Ok(value)
}

/// Divides `a` by `b`. A zero dividend is reported as is; arithmetic
/// failures are wrapped with their cause attached.
pub fn checked_quotient(a: i32, b: i32) -> Result<i32, WalkthroughError> {
  require_nonzero(a)?;

  let quotient = if b == 0 {
    Err(ArithmeticError::DivideByZero)
  } else {
    a.checked_div(b).ok_or(ArithmeticError::Overflow)
  };

  quotient.map_err(|source| WalkthroughError::Arithmetic { source })
}

/// Messages along the `source()` chain of `err`, outermost first.
pub fn error_chain(err: &(dyn StdError + 'static)) -> Vec<String> {
  let mut chain = Vec::new();
  let mut next = Some(err);

  while let Some(e) = next {
    chain.push(e.to_string());
    next = e.source();
  }

  chain
}

#[cfg(test)]
mod tests {
  use std::io::Write;
  use std::sync::Arc;
  use parking_lot::Mutex;
  use super::*;

  /// Collects formatted log output so tests can look for cleanup events.
  #[derive(Clone, Default)]
  struct LogBuffer(Arc<Mutex<Vec<u8>>>);

  impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  fn with_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let output = String::from_utf8(logs.0.lock().clone()).unwrap();
    (result, output)
  }

  #[test]
  fn file_is_closed_after_a_full_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "only").unwrap();

    let (lines, logs) = with_logs(|| read_lines(file.path()));
    assert_eq!(lines.unwrap(), vec!["only"]);
    assert_eq!(logs.matches("closing file").count(), 1);
    assert!(logs.contains(&file.path().display().to_string()));
  }

  #[test]
  fn file_is_closed_when_reading_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"fine\n\xff\xfe\n").unwrap();

    let (result, logs) = with_logs(|| read_lines(file.path()));
    assert!(matches!(result, Err(WalkthroughError::Read { .. })));
    assert_eq!(logs.matches("closing file").count(), 1);
  }

  #[test]
  fn nothing_to_close_when_open_fails() {
    let dir = tempfile::tempdir().unwrap();

    let (result, logs) = with_logs(|| read_lines(dir.path().join("absent.txt")));
    assert!(matches!(result, Err(WalkthroughError::Open { .. })));
    assert!(!logs.contains("closing file"));
  }

  #[test]
  fn reads_every_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first").unwrap();
    writeln!(file, "second").unwrap();

    let lines = read_lines(file.path()).unwrap();
    assert_eq!(lines, vec!["first", "second"]);
  }

  #[test]
  fn missing_file_is_classified_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_lines(dir.path().join("absent.txt")).unwrap_err();

    assert!(matches!(err, WalkthroughError::Open { .. }));
    assert_eq!(describe(&err), "file not found");
    assert_eq!(error_chain(&err).len(), 2);
  }

  #[test]
  fn non_utf8_content_is_a_read_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, b'\n']).unwrap();

    let err = read_lines(file.path()).unwrap_err();
    assert!(matches!(err, WalkthroughError::Read { .. }));
    assert_eq!(describe(&err), "error reading file");
  }

  #[test]
  fn zero_is_rejected() {
    assert_eq!(require_nonzero(4).unwrap(), 4);

    let err = require_nonzero(0).unwrap_err();
    assert_eq!(err.to_string(), "value can not be zero");
    assert_eq!(describe(&err), "error");
  }

  #[test]
  fn zero_dividend_is_not_wrapped() {
    let err = checked_quotient(0, 0).unwrap_err();

    assert!(matches!(err, WalkthroughError::Zero));
    assert_eq!(error_chain(&err), vec!["value can not be zero"]);
  }

  #[test]
  fn division_failure_keeps_its_cause() {
    assert_eq!(checked_quotient(8, 2).unwrap(), 4);

    let err = checked_quotient(4, 0).unwrap_err();
    assert_eq!(
      error_chain(&err),
      vec!["attempt to divide by zero", "attempt to divide by zero"]);

    let cause = err.source().and_then(|e| e.downcast_ref::<ArithmeticError>());
    assert_eq!(cause, Some(&ArithmeticError::DivideByZero));
  }

  #[test]
  fn overflow_is_an_arithmetic_error() {
    let err = checked_quotient(i32::MIN, -1).unwrap_err();
    assert!(matches!(
      err,
      WalkthroughError::Arithmetic { source: ArithmeticError::Overflow }));
  }
}
