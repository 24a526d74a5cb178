//! Position and state stack of a single lexing run.
//!
//! The cursor is owned by exactly one [`Lexer`](crate::Lexer). Advancing it
//! mutates position and stack irreversibly; re-lexing needs a fresh cursor.

use smallvec::SmallVec;

use crate::grammar::StateId;
use crate::rule::Transition;

/// Stack depth kept inline before spilling to the heap. FileMaker
/// calculations rarely nest function calls deeper than this.
const INLINE_DEPTH: usize = 16;

/// Byte position plus active-state stack.
///
/// # Invariant
///
/// The stack is never empty. The bottom entry is the grammar's root state
/// and is never removed; [`apply`](Self::apply) refuses transitions that
/// would remove it.
#[derive(Clone, Debug)]
pub(crate) struct Cursor {
    pos: usize,
    stack: SmallVec<[StateId; INLINE_DEPTH]>,
}

/// A transition that would have removed the root state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Underflow {
    pub depth: usize,
    pub popped: usize,
}

impl Cursor {
    pub(crate) fn new(root: StateId) -> Self {
        let mut stack = SmallVec::new();
        stack.push(root);
        Cursor { pos: 0, stack }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The active state.
    #[inline]
    pub fn top(&self) -> StateId {
        // Non-empty by invariant; the root sits at index 0.
        self.stack[self.stack.len() - 1]
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The stack, bottom (root) first.
    pub fn stack(&self) -> &[StateId] {
        &self.stack
    }

    pub(crate) fn advance_to(&mut self, pos: usize) {
        debug_assert!(pos > self.pos, "cursor must make forward progress");
        self.pos = pos;
    }

    /// Apply a resolved transition.
    ///
    /// On underflow the stack is left untouched.
    pub(crate) fn apply(&mut self, transition: Transition) -> Result<(), Underflow> {
        match transition {
            Transition::Stay => {}
            Transition::Push(state) => self.stack.push(state),
            Transition::Pop => {
                self.pop_n(1)?;
            }
            Transition::PopPush(state) => {
                self.pop_n(1)?;
                self.stack.push(state);
            }
            Transition::PopN(k) => {
                self.pop_n(k)?;
            }
            Transition::Nest(resume, scope) => {
                self.pop_n(1)?;
                self.stack.push(resume);
                self.stack.push(scope);
            }
        }
        Ok(())
    }

    fn pop_n(&mut self, k: usize) -> Result<(), Underflow> {
        let depth = self.stack.len();
        if k >= depth {
            return Err(Underflow { depth, popped: k });
        }
        self.stack.truncate(depth - k);
        Ok(())
    }
}
