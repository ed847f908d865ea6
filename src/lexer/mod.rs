//! Lexical analysis: turns the pattern text into a flat token sequence.
//!
//! The lexer is greedy and strictly left-to-right, consuming between one
//! and three bytes per token; it never backtracks. Bracket runs survive
//! as individual tokens here and are folded by the parser.

mod metamap;
mod token;
mod tokens;

pub use metamap::*;
pub use token::*;
pub use tokens::*;

use log::debug;

use crate::error::{CompileResult, Error};

pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    tokens: TokenList,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            position: 0,
            tokens: TokenList::new(),
        }
    }

    pub fn lex(mut self) -> CompileResult<TokenList> {
        while self.position < self.input.len() {
            let token = self.next_token()?;
            self.tokens.append(token)?;
        }
        debug!("tokens:  {}", self.tokens);
        Ok(self.tokens)
    }

    fn next_token(&mut self) -> CompileResult<Token> {
        let rest = &self.input[self.position..];

        // three bytes with `-` in the middle form a range, inside or
        // outside brackets
        if rest.len() > 2 && rest[1] == b'-' {
            self.position += 3;
            return range_token(rest[0], rest[2]);
        }

        // two-byte escapes
        if rest.len() > 1 && rest[0] == b'\\' {
            self.position += 2;
            return Ok(match rest[1] {
                b'd' => Token::Digit,
                b'D' => Token::NonDigit,
                b'w' => Token::AlphaNum,
                b'W' => Token::NonAlphaNum,
                b's' => Token::Space,
                b'S' => Token::NonSpace,
                c => Token::Char(c),
            });
        }

        let c = rest[0];
        self.position += 1;
        Ok(META_MAP.get(c).unwrap_or(Token::Char(c)))
    }
}

fn range_token(lo: u8, hi: u8) -> CompileResult<Token> {
    let compatible = (lo.is_ascii_digit() && hi.is_ascii_digit())
        || (lo.is_ascii_lowercase() && hi.is_ascii_lowercase())
        || (lo.is_ascii_uppercase() && hi.is_ascii_uppercase());
    if !compatible || lo > hi {
        return Err(Error::BadRange(lo, hi));
    }
    Ok(Token::Range(lo, hi))
}
