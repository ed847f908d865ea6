//! Thompson's construction: folds the postfix token program into an
//! automaton by stacking partially built subgraphs and back-patching
//! their dangling edges.
//!
//! Each subgraph is a [`Group`]: one entry state plus an out-list of edge
//! slots that still need a target. An atom pushes a fresh group; each
//! operator pops one or two groups, wires them up and pushes the result.
//! When the program is exhausted a single group remains, and its out-list
//! is patched to the match state.

mod nfa;

pub use nfa::*;

use log::{debug, trace};

use crate::error::{CompileResult, Error};
use crate::lexer::{Token, TokenList};

/// Upper bound on simultaneously open subgraphs.
pub const MAX_GROUP_STACK: usize = 256;
/// Upper bound on dangling-edge nodes across one compilation.
pub const MAX_OUT_LIST: usize = 1024;

/// A dangling edge slot of a partially built subgraph.
#[derive(Debug, Clone, Copy)]
enum EdgeSlot {
    /// Patch `out` of the given state.
    Out(StateId),
    /// Patch `out1` of the given state.
    Out1(StateId),
}

/// Node of a singly linked out-list; lives in the compiler's pool.
#[derive(Debug, Clone, Copy)]
struct OutNode {
    slot: EdgeSlot,
    next: Option<usize>,
}

/// A partially built subgraph: one entry state plus the list of exits
/// that still need a target.
#[derive(Debug, Clone, Copy)]
struct Group {
    start: StateId,
    out: Option<usize>,
}

pub struct Compiler {
    nfa: Nfa,
    stack: Vec<Group>,
    pool: Vec<OutNode>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            nfa: Nfa::new(),
            stack: Vec::new(),
            pool: Vec::new(),
        }
    }

    /// Fold a postfix token program into an automaton.
    pub fn compile(mut self, postfix: &TokenList) -> CompileResult<Nfa> {
        for token in postfix.iter() {
            trace!("compile '{token}'");
            match token {
                Token::Concat => {
                    let g1 = self.pop()?;
                    let g0 = self.pop()?;
                    self.patch(g0.out, g1.start);
                    self.push(Group {
                        start: g0.start,
                        out: g1.out,
                    })?;
                }
                Token::Pipe => {
                    let g1 = self.pop()?;
                    let g0 = self.pop()?;
                    let split = self.split(token, Some(g0.start), Some(g1.start))?;
                    let out = self.join(g0.out, g1.out);
                    self.push(Group { start: split, out })?;
                }
                Token::Question => {
                    let g = self.pop()?;
                    let split = self.split(token, Some(g.start), None)?;
                    let skip = self.slot(EdgeSlot::Out1(split))?;
                    let out = self.join(g.out, Some(skip));
                    self.push(Group { start: split, out })?;
                }
                Token::Star => {
                    let g = self.pop()?;
                    let split = self.split(token, Some(g.start), None)?;
                    self.patch(g.out, split);
                    let out = Some(self.slot(EdgeSlot::Out1(split))?);
                    // enter through the split: the body may be skipped
                    self.push(Group { start: split, out })?;
                }
                Token::Plus => {
                    let g = self.pop()?;
                    let split = self.split(token, Some(g.start), None)?;
                    self.patch(g.out, split);
                    let out = Some(self.slot(EdgeSlot::Out1(split))?);
                    // enter through the body: it must consume at least once
                    self.push(Group { start: g.start, out })?;
                }
                token if token.is_consuming() || matches!(token, Token::Caret | Token::Hyphen) => {
                    let state = self.nfa.alloc(State {
                        kind: StateKind::Consuming,
                        token: Some(token),
                        out: None,
                        out1: None,
                    })?;
                    let out = Some(self.slot(EdgeSlot::Out(state))?);
                    self.push(Group { start: state, out })?;
                }
                token => {
                    return Err(Error::Internal(format!(
                        "'{token}' leaked into the postfix program"
                    )))
                }
            }
        }

        let last = self.pop()?;
        if !self.stack.is_empty() {
            return Err(Error::Internal(
                "unconnected subgraphs left on the stack".into(),
            ));
        }
        let matched = self.nfa.alloc(State {
            kind: StateKind::Match,
            token: None,
            out: None,
            out1: None,
        })?;
        self.patch(last.out, matched);
        self.nfa.set_start(last.start);

        debug!("compiled {} states", self.nfa.len());
        trace!("nfa:\n{}", self.nfa.dump());
        Ok(self.nfa)
    }

    fn split(
        &mut self,
        token: Token,
        out: Option<StateId>,
        out1: Option<StateId>,
    ) -> CompileResult<StateId> {
        self.nfa.alloc(State {
            kind: StateKind::Split,
            token: Some(token),
            out,
            out1,
        })
    }

    fn push(&mut self, group: Group) -> CompileResult<()> {
        if self.stack.len() >= MAX_GROUP_STACK {
            return Err(Error::PoolExhausted("group stack".into()));
        }
        self.stack.push(group);
        Ok(())
    }

    fn pop(&mut self) -> CompileResult<Group> {
        self.stack
            .pop()
            .ok_or_else(|| Error::Internal("group stack underflow".into()))
    }

    fn slot(&mut self, slot: EdgeSlot) -> CompileResult<usize> {
        if self.pool.len() >= MAX_OUT_LIST {
            return Err(Error::PoolExhausted("out-list".into()));
        }
        self.pool.push(OutNode { slot, next: None });
        Ok(self.pool.len() - 1)
    }

    /// Concatenate two out-lists, returning the head of the joined list.
    fn join(&mut self, head: Option<usize>, tail: Option<usize>) -> Option<usize> {
        let Some(first) = head else { return tail };
        let mut index = first;
        while let Some(next) = self.pool[index].next {
            index = next;
        }
        self.pool[index].next = tail;
        Some(first)
    }

    /// Write `target` into every edge slot of the list.
    fn patch(&mut self, head: Option<usize>, target: StateId) {
        let mut cursor = head;
        while let Some(index) = cursor {
            match self.pool[index].slot {
                EdgeSlot::Out(id) => self.nfa.state_mut(id).out = Some(target),
                EdgeSlot::Out1(id) => self.nfa.state_mut(id).out1 = Some(target),
            }
            cursor = self.pool[index].next;
        }
    }
}
