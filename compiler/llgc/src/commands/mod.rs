//! Command handlers for the llgc CLI.
//!
//! Handlers return the values they produced instead of printing them; the
//! binary owns stdout and stderr.

use std::fmt;
use std::path::{Path, PathBuf};

use llgc_eval::{eval_source, init_context};
use llgc_value::{Error, Value};
use tracing::debug;

/// Why a command failed.
#[derive(Debug)]
pub enum CommandError {
    /// The source file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Reading or evaluating the program failed.
    Eval(Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            CommandError::Eval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Io { source, .. } => Some(source),
            CommandError::Eval(err) => Some(err),
        }
    }
}

impl From<Error> for CommandError {
    fn from(err: Error) -> Self {
        CommandError::Eval(err)
    }
}

/// Read a whole source file.
pub fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Evaluate every form of the file at `path` in a fresh context.
pub fn run_file(path: &Path) -> Result<Vec<Value>, CommandError> {
    let source = read_file(path)?;
    debug!(path = %path.display(), bytes = source.len(), "running file");
    eval_expr(&source).map_err(CommandError::from)
}

/// Evaluate every form of `source` in a fresh context.
pub fn eval_expr(source: &str) -> Result<Vec<Value>, Error> {
    let ctx = init_context();
    eval_source(&ctx, source)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
