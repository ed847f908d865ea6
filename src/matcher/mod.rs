//! The set-of-states simulation: walks the automaton over the input and
//! reports the longest accepted prefix.
//!
//! Two state lists are swapped per consumed byte. Epsilon transitions are
//! resolved when a state is inserted; a generation mark per state keeps
//! the lists duplicate-free and stops the insertion recursion on the
//! cycles that `*` and `+` create.

use log::{debug, trace};

use crate::compiler::{StateId, StateKind};
use crate::error::{CompileResult, Error};
use crate::lexer::Token;
use crate::pattern::Pattern;

/// Upper bound on simultaneously live states during a match.
pub const MAX_MATCH_LIST: usize = 256;

/// Outcome of a match run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchState {
    /// A prefix was accepted.
    Ok,
    /// No prefix is accepted. Not an error.
    NoMatch,
    /// Matching aborted.
    Err(Error),
}

/// Result of running a pattern against an input.
///
/// `result` is the accepted prefix, written into the caller's buffer, and
/// `start..end` is its byte range within the input. On `BufferFull`,
/// `result` holds the partial prefix consumed up to the failure.
#[derive(Debug, PartialEq, Eq)]
pub struct MatchResult<'buf> {
    pub state: MatchState,
    pub result: &'buf [u8],
    pub start: usize,
    pub end: usize,
}

impl MatchResult<'_> {
    pub fn is_match(&self) -> bool {
        self.state == MatchState::Ok
    }

    /// The accepted prefix as text.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.result).unwrap_or("")
    }
}

/// Ordered buffer of live states. Duplicates are kept out by the
/// matcher's generation marks, which bounds the length by the state
/// count; the pool cap is still enforced.
#[derive(Debug)]
struct MatchList {
    states: Vec<StateId>,
}

impl MatchList {
    fn new() -> Self {
        Self {
            states: Vec::with_capacity(MAX_MATCH_LIST),
        }
    }

    fn clear(&mut self) {
        self.states.clear();
    }

    fn push(&mut self, id: StateId) -> CompileResult<()> {
        if self.states.len() >= MAX_MATCH_LIST {
            return Err(Error::PoolExhausted("match list".into()));
        }
        self.states.push(id);
        Ok(())
    }
}

/// One match run over one input. Owns the two state lists and the
/// generation marks; the pattern itself stays read-only.
pub struct Matcher<'p> {
    pattern: &'p Pattern,
    clist: MatchList,
    nlist: MatchList,
    marks: Vec<u32>,
    generation: u32,
}

impl<'p> Matcher<'p> {
    pub fn new(pattern: &'p Pattern) -> Self {
        Self {
            pattern,
            clist: MatchList::new(),
            nlist: MatchList::new(),
            marks: vec![0; pattern.nfa().len()],
            generation: 0,
        }
    }

    /// Simulate the automaton, writing the accepted prefix into `buf`.
    pub fn run<'b>(&mut self, input: &str, buf: &'b mut [u8]) -> MatchResult<'b> {
        let mut len = 0;
        let mut accepted = None;

        if let Err(error) = self.seed() {
            return MatchResult {
                state: MatchState::Err(error),
                result: &buf[..0],
                start: 0,
                end: 0,
            };
        }
        if self.has_match(&self.clist) {
            accepted = Some(0);
        }

        for &c in input.as_bytes() {
            trace!("matching '{}'", c as char);
            match self.step(c) {
                Ok(true) => {}
                Ok(false) => break,
                Err(error) => {
                    return MatchResult {
                        state: MatchState::Err(error),
                        result: &buf[..len],
                        start: 0,
                        end: len,
                    };
                }
            }
            if len >= buf.len() {
                return MatchResult {
                    state: MatchState::Err(Error::BufferFull(buf.len())),
                    result: &buf[..len],
                    start: 0,
                    end: len,
                };
            }
            buf[len] = c;
            len += 1;
            std::mem::swap(&mut self.clist, &mut self.nlist);
            if self.has_match(&self.clist) {
                accepted = Some(len);
            }
        }

        match accepted {
            Some(end) => {
                debug!("accepted {end} bytes");
                MatchResult {
                    state: MatchState::Ok,
                    result: &buf[..end],
                    start: 0,
                    end,
                }
            }
            None => {
                debug!("no match");
                MatchResult {
                    state: MatchState::NoMatch,
                    result: &buf[..0],
                    start: 0,
                    end: 0,
                }
            }
        }
    }

    /// Seed the current list with the entry state. A leading `^` is
    /// stepped over: matching starts at the input start anyway.
    fn seed(&mut self) -> CompileResult<()> {
        self.generation += 1;
        self.nlist.clear();
        let nfa = self.pattern.nfa();
        let start = nfa.start();
        let state = *nfa.state(start);
        let anchored = state.kind == StateKind::Consuming && state.token == Some(Token::Caret);
        if anchored {
            trace!("anchored at input start");
            if let Some(out) = state.out {
                self.add_state(out)?;
            }
        } else {
            self.add_state(start)?;
        }
        std::mem::swap(&mut self.clist, &mut self.nlist);
        Ok(())
    }

    /// Advance over one input byte. Returns whether any state survived.
    fn step(&mut self, c: u8) -> CompileResult<bool> {
        self.generation += 1;
        self.nlist.clear();
        let members = self.pattern.members();
        for index in 0..self.clist.states.len() {
            let id = self.clist.states[index];
            let state = *self.pattern.nfa().state(id);
            if state.kind != StateKind::Consuming {
                continue;
            }
            let Some(token) = state.token else { continue };
            if token.accepts(c, members) {
                trace!("  '{token}' accepted '{}'", c as char);
                if let Some(out) = state.out {
                    self.add_state(out)?;
                }
            }
        }
        Ok(!self.nlist.states.is_empty())
    }

    /// Insert a state into the next list, resolving epsilon transitions
    /// on the way. The generation mark suppresses duplicates and stops
    /// the recursion on split cycles.
    fn add_state(&mut self, id: StateId) -> CompileResult<()> {
        if self.marks[id] == self.generation {
            return Ok(());
        }
        self.marks[id] = self.generation;
        let state = *self.pattern.nfa().state(id);
        if state.kind == StateKind::Split {
            if let Some(out) = state.out {
                self.add_state(out)?;
            }
            if let Some(out1) = state.out1 {
                self.add_state(out1)?;
            }
            return Ok(());
        }
        self.nlist.push(id)
    }

    fn has_match(&self, list: &MatchList) -> bool {
        list.states
            .iter()
            .any(|&id| self.pattern.nfa().state(id).kind == StateKind::Match)
    }
}
