//! Grammar tables: named states of ordered rules.
//!
//! A grammar is declared with [`GrammarBuilder`] as a list of states, each a
//! list of [`Entry`] values. [`GrammarBuilder::build`] then:
//!
//! 1. compiles every pattern, anchored at the match start,
//! 2. splices included states in place (recursively, rejecting cycles),
//! 3. resolves transition targets from names to [`StateId`]s,
//! 4. checks that the root state can never be left.
//!
//! After construction a [`Grammar`] is immutable and can be shared freely
//! between threads and lexing runs.

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{GrammarError, LexError};
use crate::lexer::Lexer;
use crate::rule::{Emit, Entry, Rule, StackOp, StateName, Transition};
use crate::token::{Token, TokenClass};

/// Index of a state in a [`Grammar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    pub(crate) fn new(index: usize) -> Self {
        // Grammar tables are hand-written; a few dozen states at most.
        StateId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Declares the states of a grammar.
#[derive(Debug)]
pub struct GrammarBuilder<K: 'static> {
    root: StateName,
    states: Vec<(StateName, Vec<Entry<K>>)>,
}

/// A rule after pattern compilation, before transition resolution.
#[derive(Clone, Debug)]
struct Compiled<K: 'static> {
    pattern: String,
    regex: Regex,
    emit: Emit<K>,
    op: StackOp,
}

impl<K: TokenClass> GrammarBuilder<K> {
    /// Start a grammar whose runs begin in `root`.
    pub fn new(root: StateName) -> Self {
        GrammarBuilder {
            root,
            states: Vec::new(),
        }
    }

    /// Declare a state. Declaration order does not matter for inclusion.
    #[must_use]
    pub fn state(mut self, name: StateName, entries: impl IntoIterator<Item = Entry<K>>) -> Self {
        self.states.push((name, entries.into_iter().collect()));
        self
    }

    /// Compile and resolve the table.
    pub fn build(self) -> Result<Grammar<K>, GrammarError> {
        let mut ids = FxHashMap::default();
        ids.reserve(self.states.len());
        for (index, &(name, _)) in self.states.iter().enumerate() {
            if ids.insert(name, StateId::new(index)).is_some() {
                return Err(GrammarError::DuplicateState { state: name });
            }
        }
        let root = *ids.get(self.root).ok_or(GrammarError::UnknownState {
            state: self.root,
            from: "<root>",
        })?;

        let mut resolver = Resolver {
            states: &self.states,
            ids: &ids,
            resolved: vec![None; self.states.len()],
            visiting: Vec::new(),
        };
        let mut states = Vec::with_capacity(self.states.len());
        for index in 0..self.states.len() {
            let compiled = resolver.resolve(StateId::new(index))?;
            let name = self.states[index].0;
            let rules = compiled
                .into_iter()
                .map(|c| link(c, name, &ids))
                .collect::<Result<Vec<_>, _>>()?;
            states.push(rules);
        }

        let root_name = self.root;
        if let Some(rule) = states[root.index()].iter().find(|r| r.op.leaves_current()) {
            return Err(GrammarError::RootPops {
                state: root_name,
                pattern: rule.pattern.clone(),
            });
        }

        let names: Vec<StateName> = self.states.iter().map(|(name, _)| *name).collect();
        debug!(
            states = names.len(),
            rules = states.iter().map(Vec::len).sum::<usize>(),
            root = root_name,
            "grammar built"
        );
        Ok(Grammar {
            names,
            states,
            root,
        })
    }
}

/// Recursive include resolution with memoization and cycle detection.
struct Resolver<'b, K: 'static> {
    states: &'b [(StateName, Vec<Entry<K>>)],
    ids: &'b FxHashMap<StateName, StateId>,
    resolved: Vec<Option<Vec<Compiled<K>>>>,
    visiting: Vec<StateId>,
}

impl<K: TokenClass> Resolver<'_, K> {
    fn resolve(&mut self, id: StateId) -> Result<Vec<Compiled<K>>, GrammarError> {
        if let Some(done) = &self.resolved[id.index()] {
            return Ok(done.clone());
        }
        if let Some(at) = self.visiting.iter().position(|&v| v == id) {
            let mut path: Vec<StateName> =
                self.visiting[at..].iter().map(|v| self.states[v.index()].0).collect();
            path.push(self.states[id.index()].0);
            return Err(GrammarError::IncludeCycle {
                path: path.join(" -> "),
            });
        }

        self.visiting.push(id);
        let states = self.states;
        let (name, entries) = (states[id.index()].0, &states[id.index()].1);
        let mut rules = Vec::new();
        for entry in entries {
            match entry {
                Entry::Rule { pattern, emit, op } => {
                    rules.push(compile(name, pattern, *emit, *op)?);
                }
                Entry::Include(target) => {
                    let target = self.lookup(target, name)?;
                    rules.extend(self.resolve(target)?);
                }
                Entry::Flatten(target) => {
                    let target = self.lookup(target, name)?;
                    rules.extend(self.resolve(target)?.into_iter().filter_map(|mut rule| {
                        rule.op = rule.op.flattened()?;
                        Some(rule)
                    }));
                }
            }
        }
        self.visiting.pop();

        self.resolved[id.index()] = Some(rules.clone());
        Ok(rules)
    }

    fn lookup(&self, state: &StateName, from: StateName) -> Result<StateId, GrammarError> {
        self.ids
            .get(state)
            .copied()
            .ok_or(GrammarError::UnknownState {
                state: *state,
                from,
            })
    }
}

fn compile<K: TokenClass>(
    state: StateName,
    pattern: &str,
    emit: Emit<K>,
    op: StackOp,
) -> Result<Compiled<K>, GrammarError> {
    let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| {
        GrammarError::InvalidPattern {
            state,
            pattern: pattern.to_owned(),
            source,
        }
    })?;
    if let Emit::Groups(kinds) = emit {
        // captures_len() counts the implicit whole-match group.
        let available = regex.captures_len() - 1;
        if kinds.is_empty() || kinds.len() > available {
            return Err(GrammarError::GroupMismatch {
                state,
                pattern: pattern.to_owned(),
                declared: kinds.len(),
                available,
            });
        }
    }
    Ok(Compiled {
        pattern: pattern.to_owned(),
        regex,
        emit,
        op,
    })
}

/// Resolve a compiled rule's transition targets to ids.
fn link<K: TokenClass>(
    compiled: Compiled<K>,
    state: StateName,
    ids: &FxHashMap<StateName, StateId>,
) -> Result<Rule<K>, GrammarError> {
    let id = |target: StateName| {
        ids.get(target)
            .copied()
            .ok_or(GrammarError::UnknownState {
                state: target,
                from: state,
            })
    };
    let transition = match compiled.op {
        StackOp::Stay => Transition::Stay,
        StackOp::Push(s) => Transition::Push(id(s)?),
        StackOp::Pop => Transition::Pop,
        StackOp::PopPush(s) => Transition::PopPush(id(s)?),
        StackOp::PopN(k) => Transition::PopN(k),
        StackOp::Nest(resume, scope) => Transition::Nest(id(resume)?, id(scope)?),
    };
    Ok(Rule {
        pattern: compiled.pattern,
        regex: compiled.regex,
        emit: compiled.emit,
        op: compiled.op,
        transition,
    })
}

/// An immutable, resolved grammar table.
#[derive(Clone, Debug)]
pub struct Grammar<K: 'static> {
    names: Vec<StateName>,
    /// Resolved rules per state, includes already spliced in.
    states: Vec<Vec<Rule<K>>>,
    root: StateId,
}

impl<K: TokenClass> Grammar<K> {
    pub fn builder(root: StateName) -> GrammarBuilder<K> {
        GrammarBuilder::new(root)
    }

    /// Start a lazy lexing run over `source`.
    pub fn tokenize<'g, 'src>(&'g self, source: &'src str) -> Lexer<'g, 'src, K> {
        Lexer::new(self, source)
    }

    /// Lex all of `source`, surfacing a stack underflow as an error.
    pub fn try_tokenize<'src>(&self, source: &'src str) -> Result<Vec<Token<'src, K>>, LexError> {
        let mut lexer = self.tokenize(source);
        let tokens: Vec<_> = lexer.by_ref().collect();
        match lexer.into_error() {
            Some(err) => Err(err),
            None => Ok(tokens),
        }
    }

    #[inline]
    pub fn root(&self) -> StateId {
        self.root
    }

    /// State names in declaration order.
    pub fn state_names(&self) -> &[StateName] {
        &self.names
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.names.iter().position(|n| *n == name).map(StateId::new)
    }

    /// Name of a state.
    ///
    /// # Panics
    ///
    /// If `id` does not belong to this grammar.
    #[inline]
    pub fn name(&self, id: StateId) -> StateName {
        self.names[id.index()]
    }

    /// Resolved rules of a state, in match order.
    pub fn rules(&self, name: &str) -> Option<&[Rule<K>]> {
        self.state_id(name).map(|id| self.rules_of(id))
    }

    #[inline]
    pub(crate) fn rules_of(&self, id: StateId) -> &[Rule<K>] {
        &self.states[id.index()]
    }
}
