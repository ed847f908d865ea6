//! Collapses each `[...]` run into a single class token whose members
//! live in the list's member table.

use crate::error::{CompileResult, Error};
use crate::lexer::{ClassMembers, Token, TokenList};

pub fn fold_classes(mut list: TokenList) -> CompileResult<TokenList> {
    let mut index = 0;
    while index < list.len() {
        match list.get(index) {
            Some(Token::ClassStart) => index = fold_at(&mut list, index)?,
            Some(Token::ClassEnd) => {
                return Err(Error::MalformedClass("unexpected ']'".into()))
            }
            _ => index += 1,
        }
    }
    Ok(list)
}

/// Fold the class opening at `open`; returns the index right after the
/// folded token.
fn fold_at(list: &mut TokenList, open: usize) -> CompileResult<usize> {
    list.remove(open)?;

    // `^` negates only in the first position
    let negated = list.get(open) == Some(Token::Caret);
    if negated {
        list.remove(open)?;
    }

    let start = list.member_count();
    loop {
        match list.get(open) {
            None => return Err(Error::MalformedClass("missing ']'".into())),
            Some(Token::ClassEnd) => {
                list.remove(open)?;
                break;
            }
            Some(Token::ClassStart) => {
                return Err(Error::MalformedClass("unexpected '[' inside a class".into()))
            }
            // a later `^` is an ordinary literal
            Some(Token::Caret) => {
                list.remove(open)?;
                list.push_member(Token::Char(b'^'))?;
            }
            Some(token) if token.is_consuming() => {
                list.remove(open)?;
                list.push_member(token)?;
            }
            Some(token) => {
                return Err(Error::MalformedClass(format!(
                    "'{token}' cannot appear in a class"
                )))
            }
        }
    }

    let len = list.member_count() - start;
    list.insert(
        open,
        Token::Class {
            negated,
            members: ClassMembers { start, len },
        },
    )?;
    Ok(open + 1)
}
