use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Token;

macro_rules! meta {
    ($map:ident, $byte:expr, $token:expr) => {
        $map.insert($byte, $token);
    };
}

/// The single-byte metacharacters and the tokens they lex to. Every byte
/// not in this table is a literal.
pub static META_MAP: Lazy<MetaMap> = Lazy::new(|| {
    let mut m = MetaMap::default();

    meta!(m, b'*', Token::Star);
    meta!(m, b'+', Token::Plus);
    meta!(m, b'?', Token::Question);
    meta!(m, b'|', Token::Pipe);
    meta!(m, b'(', Token::GroupStart);
    meta!(m, b')', Token::GroupEnd);
    meta!(m, b'[', Token::ClassStart);
    meta!(m, b']', Token::ClassEnd);
    meta!(m, b'^', Token::Caret);
    meta!(m, b'$', Token::Dollar);
    meta!(m, b'.', Token::Dot);
    meta!(m, b'\\', Token::Backslash);
    meta!(m, b'-', Token::Hyphen);
    meta!(m, b'{', Token::RepeatStart);
    meta!(m, b'}', Token::RepeatEnd);

    m
});

/// Byte-to-token table for the metacharacters.
#[derive(Debug, Clone, Default)]
pub struct MetaMap {
    map: HashMap<u8, Token>,
}

impl MetaMap {
    pub fn insert(&mut self, byte: u8, token: Token) {
        self.map.insert(byte, token);
    }

    pub fn get(&self, byte: u8) -> Option<Token> {
        self.map.get(&byte).copied()
    }
}
