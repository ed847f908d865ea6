//! The compiled pattern: owns the token program and the automaton, and
//! ties the pipeline stages together.

use log::debug;

use crate::compiler::{Compiler, Nfa};
use crate::error::CompileResult;
use crate::lexer::{Lexer, Token, TokenList};
use crate::matcher::{MatchResult, Matcher};
use crate::parser;

/// A compiled pattern. Immutable once built; one instance can serve any
/// number of sequential match runs, each of which owns its own state
/// lists and result buffer.
#[derive(Debug, Clone)]
pub struct Pattern {
    tokens: TokenList,
    nfa: Nfa,
}

impl Pattern {
    /// Compile `pattern` into an executable automaton.
    pub fn compile(pattern: &str) -> CompileResult<Pattern> {
        debug!("compiling '{pattern}'");
        let tokens = Lexer::new(pattern).lex()?;
        let tokens = parser::parse(tokens)?;
        let nfa = Compiler::new().compile(&tokens)?;
        Ok(Pattern { tokens, nfa })
    }

    /// Match the longest accepted prefix of `input`, writing it into
    /// `buf`.
    pub fn match_prefix<'b>(&self, input: &str, buf: &'b mut [u8]) -> MatchResult<'b> {
        Matcher::new(self).run(input, buf)
    }

    pub(crate) fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub(crate) fn members(&self) -> &[Token] {
        self.tokens.member_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn compiling_keeps_the_postfix_program() {
        let pattern = Pattern::compile("a(b|c)").unwrap();
        assert_eq!("abc|&", pattern.tokens.to_string());
    }

    #[test]
    fn the_first_error_wins() {
        // the bad range fails in the lexer, before the unclosed group is seen
        assert_eq!(
            Err(Error::BadRange(b'z', b'a')),
            Pattern::compile("(z-a").map(|_| ())
        );
    }
}
