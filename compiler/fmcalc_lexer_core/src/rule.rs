//! Rule vocabulary: patterns, emissions, and stack transitions.
//!
//! Grammars are written as lists of [`Entry`] values referring to states by
//! name. [`GrammarBuilder::build`](crate::GrammarBuilder::build) compiles
//! them into [`Rule`]s whose transitions refer to states by [`StateId`].

use regex::Regex;

use crate::grammar::StateId;

/// Name of a grammar state, as written in the table.
pub type StateName = &'static str;

/// Operation applied to the state stack after a rule matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackOp {
    /// Leave the stack unchanged.
    Stay,
    /// Enter a new state, keeping the current one beneath it.
    Push(StateName),
    /// Return to the state below.
    Pop,
    /// Replace the current state.
    PopPush(StateName),
    /// Unwind `k` levels at once.
    PopN(usize),
    /// Replace the current state with `resume`, then push `scope` on top.
    ///
    /// Used when one match both completes a value for the enclosing scope
    /// and opens a nested one: once `scope` is popped, the enclosing scope
    /// continues in `resume`.
    Nest(StateName, StateName),
}

impl StackOp {
    /// Returns `true` if the operation removes the current state.
    pub fn leaves_current(self) -> bool {
        match self {
            StackOp::Stay | StackOp::Push(_) => false,
            StackOp::PopN(k) => k > 0,
            StackOp::Pop | StackOp::PopPush(_) | StackOp::Nest(..) => true,
        }
    }

    /// The operation as seen from a scope that does not track expectation.
    ///
    /// Replacing the current state becomes a no-op, nesting becomes a plain
    /// push, and popping has no equivalent (`None`).
    pub fn flattened(self) -> Option<StackOp> {
        match self {
            StackOp::Stay | StackOp::PopPush(_) => Some(StackOp::Stay),
            StackOp::Push(state) | StackOp::Nest(_, state) => Some(StackOp::Push(state)),
            StackOp::PopN(0) => Some(StackOp::Stay),
            StackOp::Pop | StackOp::PopN(_) => None,
        }
    }
}

/// What a rule emits for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emit<K: 'static> {
    /// One token covering the whole match.
    Token(K),
    /// One token per capture group, in order (group 1, group 2, ...).
    ///
    /// Token boundaries are the group *ends*: the first token runs from the
    /// match start to the end of the first participating group, the next
    /// from there to the end of the next group, and the last token absorbs
    /// any trailing text. Groups that did not participate or would produce
    /// an empty token are skipped. The tokens of one match therefore always
    /// cover the match exactly.
    Groups(&'static [K]),
}

/// One line of a state definition.
#[derive(Clone, Debug)]
pub enum Entry<K: 'static> {
    /// A pattern rule. `pattern` is anchored at the current position.
    Rule {
        pattern: String,
        emit: Emit<K>,
        op: StackOp,
    },
    /// Splice in another state's rules, unchanged, at this point.
    Include(StateName),
    /// Splice in another state's rules with expectation tracking removed.
    ///
    /// See [`StackOp::flattened`]. Rules whose operation has no flattened
    /// form are dropped.
    Flatten(StateName),
}

impl<K: 'static> Entry<K> {
    /// A rule emitting a single token for the whole match.
    pub fn token(pattern: impl Into<String>, kind: K, op: StackOp) -> Self {
        Entry::Rule {
            pattern: pattern.into(),
            emit: Emit::Token(kind),
            op,
        }
    }

    /// A rule emitting one token per capture group.
    pub fn groups(pattern: impl Into<String>, kinds: &'static [K], op: StackOp) -> Self {
        Entry::Rule {
            pattern: pattern.into(),
            emit: Emit::Groups(kinds),
            op,
        }
    }

    pub fn include(state: StateName) -> Self {
        Entry::Include(state)
    }

    pub fn flatten(state: StateName) -> Self {
        Entry::Flatten(state)
    }
}

/// Resolved transition, indexed by [`StateId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    Stay,
    Push(StateId),
    Pop,
    PopPush(StateId),
    PopN(usize),
    Nest(StateId, StateId),
}

/// A compiled rule in a resolved state.
#[derive(Clone, Debug)]
pub struct Rule<K: 'static> {
    pub(crate) pattern: String,
    pub(crate) regex: Regex,
    pub(crate) emit: Emit<K>,
    pub(crate) op: StackOp,
    pub(crate) transition: Transition,
}

impl<K: 'static> Rule<K> {
    /// The pattern as written in the grammar (without the start anchor).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn emit(&self) -> Emit<K>
    where
        K: Copy,
    {
        self.emit
    }

    pub fn op(&self) -> StackOp {
        self.op
    }
}
