//! The lazy token iterator driving a [`Grammar`] over one source.
//!
//! Each step asks the state on top of the stack for its first matching
//! rule, queues the rule's tokens, applies its transition, and advances.
//! When nothing matches, one character becomes an error token.

use std::iter::FusedIterator;

use regex::Captures;
use smallvec::SmallVec;
use tracing::{error, trace};

use crate::cursor::{Cursor, Underflow};
use crate::error::LexError;
use crate::grammar::{Grammar, StateId};
use crate::rule::{Emit, StateName};
use crate::token::{Token, TokenClass};

/// A lexing run: finite, lazy, not restartable.
///
/// Created by [`Grammar::tokenize`]. Dropping it part-way is always safe.
/// The iterator ends at end of input, or early if a transition tries to pop
/// the root state; in the latter case [`error`](Self::error) reports why.
#[derive(Debug)]
pub struct Lexer<'g, 'src, K: TokenClass> {
    grammar: &'g Grammar<K>,
    source: &'src str,
    cursor: Cursor,
    /// Tokens of the current match not yet yielded, in reverse order.
    pending: SmallVec<[Token<'src, K>; 4]>,
    error: Option<LexError>,
    halted: bool,
}

impl<'g, 'src, K: TokenClass> Lexer<'g, 'src, K> {
    pub(crate) fn new(grammar: &'g Grammar<K>, source: &'src str) -> Self {
        Lexer {
            grammar,
            source,
            cursor: Cursor::new(grammar.root()),
            pending: SmallVec::new(),
            error: None,
            halted: false,
        }
    }

    /// Byte offset of the next unconsumed input.
    ///
    /// Tokens already produced by the current match but not yet yielded
    /// lie before this offset.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn depth(&self) -> usize {
        self.cursor.depth()
    }

    /// Names of the states on the stack, root first.
    pub fn stack(&self) -> Vec<StateName> {
        self.cursor
            .stack()
            .iter()
            .map(|&id| self.grammar.name(id))
            .collect()
    }

    /// Why the run stopped early, if it did.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    pub fn into_error(self) -> Option<LexError> {
        self.error
    }

    /// Consume one rule match (or one error character) from the input.
    fn step(&mut self) {
        let grammar = self.grammar;
        let source = self.source;
        let pos = self.cursor.position();
        let rest = &source[pos..];
        let state = self.cursor.top();

        for rule in grammar.rules_of(state) {
            let Some(caps) = rule.regex.captures(rest) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            // A zero-width match would stall the cursor.
            if whole.end() == 0 {
                continue;
            }

            trace!(
                state = grammar.name(state),
                pattern = rule.pattern(),
                at = pos,
                len = whole.end(),
                "rule matched"
            );
            self.queue(rule.emit, &caps, pos, whole.end());
            self.cursor.advance_to(pos + whole.end());

            if let Err(underflow) = self.cursor.apply(rule.transition) {
                self.halt(underflow, state, pos);
            } else {
                trace!(stack = ?self.stack(), op = ?rule.op, "transition");
            }
            return;
        }

        let width = rest.chars().next().map_or(1, char::len_utf8);
        trace!(state = grammar.name(state), at = pos, "no rule matched");
        self.pending.push(Token::new(K::ERROR, source, pos, pos + width));
        self.cursor.advance_to(pos + width);
    }

    /// Queue the tokens of one match at `base`, `len` bytes long.
    fn queue(&mut self, emit: Emit<K>, caps: &Captures<'_>, base: usize, len: usize) {
        let mut tokens: SmallVec<[Token<'src, K>; 4]> = SmallVec::new();
        match emit {
            Emit::Token(kind) => tokens.push(Token::new(kind, self.source, base, base + len)),
            Emit::Groups(kinds) => {
                let mut last = 0;
                for (index, &kind) in kinds.iter().enumerate() {
                    let Some(group) = caps.get(index + 1) else {
                        continue;
                    };
                    if group.end() <= last {
                        continue;
                    }
                    tokens.push(Token::new(kind, self.source, base + last, base + group.end()));
                    last = group.end();
                }
                if last < len {
                    match tokens.last_mut() {
                        Some(tail) => {
                            tail.end = base + len;
                            tail.text = &self.source[tail.start..tail.end];
                        }
                        None => tokens.push(Token::new(kinds[0], self.source, base, base + len)),
                    }
                }
            }
        }
        self.pending.extend(tokens.into_iter().rev());
    }

    fn halt(&mut self, underflow: Underflow, state: StateId, offset: usize) {
        let err = LexError::StackUnderflow {
            state: self.grammar.name(state),
            offset,
            depth: underflow.depth,
            popped: underflow.popped,
        };
        error!(%err, "lexing halted");
        self.error = Some(err);
        self.halted = true;
    }
}

impl<'src, K: TokenClass> Iterator for Lexer<'_, 'src, K> {
    type Item = Token<'src, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop() {
            return Some(token);
        }
        if self.halted || self.cursor.position() >= self.source.len() {
            return None;
        }
        self.step();
        self.pending.pop()
    }
}

impl<K: TokenClass> FusedIterator for Lexer<'_, '_, K> {}

#[cfg(test)]
mod tests;
