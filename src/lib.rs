//! A small regular expression engine built on Thompson's construction.
//!
//! A pattern is compiled in four stages: the [`lexer`] turns the pattern
//! text into tokens, the class folder collapses `[...]` runs into single
//! class tokens, the translator rewrites the infix token stream into
//! postfix form with explicit concatenation, and the [`compiler`] folds
//! the postfix program into a nondeterministic finite automaton. The
//! [`matcher`] simulates that automaton with two swapped state sets and
//! reports the longest prefix of the input it accepts, starting at
//! position zero.
//!
//! Every allocation is drawn from a fixed-size pool, so compiled patterns
//! have a known worst-case memory footprint.
//!
//! ```
//! use renfa::Pattern;
//!
//! let pattern = Pattern::compile("[0-9]+").unwrap();
//! let mut buf = [0u8; 16];
//! let result = pattern.match_prefix("42x", &mut buf);
//! assert_eq!(result.result, b"42");
//! ```

pub mod compiler;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;
mod pattern;

pub use error::{CompileResult, Error};
pub use matcher::{MatchResult, MatchState};
pub use pattern::Pattern;
