//! Shunting-yard translation with implicit concatenation: a single pass
//! over the infix tokens driven by two counters and a nesting stack.
//!
//! Precedence falls out of the structure of the pass. Quantifiers are
//! emitted right after their atom and bind tightest; pending
//! concatenations are flushed before a `|` is recorded; pending
//! alternations are flushed at the matching `)` or at end of input.

use crate::error::{CompileResult, Error};
use crate::lexer::{Token, TokenList};

/// Maximum group nesting depth.
pub const MAX_GROUP_DEPTH: usize = 100;

/// Pending-operator counters for one nesting level: atoms awaiting
/// concatenation and alternatives awaiting their pipe.
#[derive(Debug, Clone, Copy, Default)]
struct Level {
    natom: u32,
    nalt: u32,
}

/// Rewrite the infix token sequence into postfix. Grouping tokens do not
/// survive the rewrite.
pub fn to_postfix(infix: &TokenList) -> CompileResult<TokenList> {
    let mut out = infix.derived();
    let mut stack: Vec<Level> = Vec::new();
    let mut level = Level::default();

    for token in infix.iter() {
        match token {
            Token::GroupStart => {
                if level.natom > 1 {
                    level.natom -= 1;
                    out.append(Token::Concat)?;
                }
                if stack.len() >= MAX_GROUP_DEPTH {
                    return Err(Error::Syntax("groups nested too deep".into()));
                }
                stack.push(level);
                level = Level::default();
            }
            Token::Pipe => {
                if level.natom == 0 {
                    return Err(Error::Syntax("'|' is missing a left operand".into()));
                }
                level.natom -= 1;
                while level.natom > 0 {
                    out.append(Token::Concat)?;
                    level.natom -= 1;
                }
                level.nalt += 1;
            }
            Token::GroupEnd => {
                let Some(enclosing) = stack.pop() else {
                    return Err(Error::Syntax("unexpected ')'".into()));
                };
                if level.natom == 0 {
                    return Err(Error::Syntax("nothing before ')'".into()));
                }
                level.natom -= 1;
                while level.natom > 0 {
                    out.append(Token::Concat)?;
                    level.natom -= 1;
                }
                while level.nalt > 0 {
                    out.append(Token::Pipe)?;
                    level.nalt -= 1;
                }
                level = enclosing;
                level.natom += 1;
            }
            Token::Star | Token::Plus | Token::Question => {
                if level.natom == 0 {
                    return Err(Error::Syntax(format!("'{token}' has nothing to repeat")));
                }
                out.append(token)?;
            }
            Token::Dollar | Token::Backslash | Token::RepeatStart | Token::RepeatEnd => {
                return Err(Error::Syntax(format!("'{token}' is not supported")));
            }
            _ => {
                if level.natom > 1 {
                    level.natom -= 1;
                    out.append(Token::Concat)?;
                }
                out.append(token)?;
                level.natom += 1;
            }
        }
    }

    if !stack.is_empty() {
        return Err(Error::Syntax("unclosed group".into()));
    }
    if level.natom == 0 {
        let message = if level.nalt > 0 {
            "'|' is missing a right operand"
        } else {
            "empty pattern"
        };
        return Err(Error::Syntax(message.into()));
    }
    level.natom -= 1;
    while level.natom > 0 {
        out.append(Token::Concat)?;
        level.natom -= 1;
    }
    while level.nalt > 0 {
        out.append(Token::Pipe)?;
        level.nalt -= 1;
    }
    Ok(out)
}
