//! Error taxonomy shared by every stage of the pipeline.
//!
//! Each stage is a total function returning either the next stage's input
//! or one of these kinds; the first error aborts compilation and is
//! surfaced to the caller unchanged.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Everything that can go wrong while compiling a pattern or running it
/// against an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// Range endpoints are inverted or do not belong to the same class of
    /// characters (digits, lowercase letters or uppercase letters).
    BadRange(u8, u8),
    /// An unmatched `[` or `]`, or a token inside a class that cannot
    /// consume input.
    MalformedClass(String),
    /// Unbalanced groups, a misplaced `|`, a quantifier without an operand
    /// or an unsupported metacharacter.
    Syntax(String),
    /// One of the fixed-size pools ran out of slots.
    PoolExhausted(String),
    /// The caller supplied a result buffer shorter than the accepted
    /// prefix.
    BufferFull(usize),
    /// A compiler invariant did not hold. This is a bug in the engine, not
    /// in the pattern.
    Internal(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::BadRange(lo, hi) => {
                write!(f, "bad range: {}-{}", *lo as char, *hi as char)
            }
            Error::MalformedClass(message) => {
                write!(f, "malformed character class: {message}")
            }
            Error::Syntax(message) => write!(f, "syntax error: {message}"),
            Error::PoolExhausted(pool) => write!(f, "{pool} pool exhausted"),
            Error::BufferFull(size) => write!(f, "result buffer full, max={size}"),
            Error::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

pub type CompileResult<T> = Result<T, Error>;
