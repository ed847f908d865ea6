//! Turns the flat token sequence into the postfix program the compiler
//! folds into an automaton: character classes are collapsed first, then
//! the infix operator grammar is rewritten with explicit concatenation.

mod classes;
mod postfix;

pub use classes::*;
pub use postfix::*;

use log::debug;

use crate::error::CompileResult;
use crate::lexer::TokenList;

/// Run both rewriting stages.
pub fn parse(tokens: TokenList) -> CompileResult<TokenList> {
    let infix = fold_classes(tokens)?;
    debug!("infix:   {infix}");
    let postfix = to_postfix(&infix)?;
    debug!("postfix: {postfix}");
    Ok(postfix)
}
