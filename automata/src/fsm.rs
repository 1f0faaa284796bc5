use crate::error::{LookupError, Result, StructureError};
use crate::state::{write_set, Label, StateSet};
use crate::symbol::Symbol;
use crate::table::Table;

use std::fmt;

use im::OrdSet;
use tracing::debug;

/// Whether an automaton allows a single target or a set of targets per transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    Deterministic,
    Nondeterministic,
}

/// The destination of a transition.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Target<S: Label> {
    /// The single destination of a deterministic transition.
    Single(S),
    /// The destinations of a nondeterministic transition.
    Multiple(StateSet<S>),
}

impl<S: Label> Target<S> {
    /// Create a nondeterministic target from any collection of states.
    #[inline]
    pub fn multiple<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Target::Multiple(states.into_iter().collect())
    }

    #[inline]
    pub fn as_single(&self) -> Option<&S> {
        match self {
            Target::Single(s) => Some(s),
            Target::Multiple(_) => None,
        }
    }

    #[inline]
    pub fn as_multiple(&self) -> Option<&StateSet<S>> {
        match self {
            Target::Single(_) => None,
            Target::Multiple(set) => Some(set),
        }
    }

    /// Iterate over every destination state, in order.
    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        let single = self.as_single().into_iter();
        let multiple = self.as_multiple().into_iter().flat_map(|set| set.iter());
        single.chain(multiple)
    }

    #[inline]
    fn fits(&self, mode: Mode) -> bool {
        matches!(
            (self, mode),
            (Target::Single(_), Mode::Deterministic) | (Target::Multiple(_), Mode::Nondeterministic)
        )
    }
}

impl<S: Label> From<S> for Target<S> {
    #[inline]
    fn from(state: S) -> Self {
        Target::Single(state)
    }
}

impl<S: Label> From<StateSet<S>> for Target<S> {
    #[inline]
    fn from(states: StateSet<S>) -> Self {
        Target::Multiple(states)
    }
}

impl<S> fmt::Display for Target<S>
where
    S: Label + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Single(s) => fmt::Display::fmt(s, f),
            Target::Multiple(set) => write_set(f, set),
        }
    }
}

/// The validated tuple of states, alphabet, transitions, initial state and final states shared by
/// every kind of automaton. It has no mutators; once built it never changes.
#[derive(Clone, Debug)]
pub struct Fsm<S: Label, T: Label> {
    states: StateSet<S>,
    symbols: OrdSet<Symbol<T>>,
    transitions: Table<S, Symbol<T>, Target<S>>,
    initial_state: S,
    final_states: StateSet<S>,
    mode: Mode,
}

impl<S: Label, T: Label> Fsm<S, T> {
    /// Validate and build an automaton. Fails on the first structural defect found; transitions
    /// are checked in the order they are supplied.
    pub fn new<Q, A, D, F>(
        mode: Mode,
        states: Q,
        symbols: A,
        transitions: D,
        initial_state: S,
        final_states: F,
    ) -> std::result::Result<Self, StructureError>
    where
        Q: IntoIterator<Item = S>,
        A: IntoIterator<Item = Symbol<T>>,
        D: IntoIterator<Item = (S, Symbol<T>, Target<S>)>,
        F: IntoIterator<Item = S>,
    {
        let mut fsm = Self {
            states: states.into_iter().collect(),
            symbols: symbols.into_iter().collect(),
            transitions: Table::new(),
            initial_state,
            final_states: final_states.into_iter().collect(),
            mode,
        };
        fsm.check_header()?;

        for (state, symbol, target) in transitions {
            fsm.check_transition(&state, &symbol, &target)?;
            if fsm.transitions.get(&state, &symbol).is_some() {
                return Err(StructureError::DuplicateTransition {
                    state: format!("{:?}", state),
                    symbol: format!("{:?}", symbol),
                });
            }
            fsm.transitions.set(state, symbol, target);
        }

        debug!(
            "built {:?} automaton with {} states, {} symbols and {} transitions",
            fsm.mode,
            fsm.states.len(),
            fsm.symbols.len(),
            fsm.transitions.len()
        );
        Ok(fsm)
    }

    /// Build an automaton from parts that are valid by construction, skipping validation.
    pub(crate) fn from_parts(
        mode: Mode,
        states: StateSet<S>,
        symbols: OrdSet<Symbol<T>>,
        transitions: Table<S, Symbol<T>, Target<S>>,
        initial_state: S,
        final_states: StateSet<S>,
    ) -> Self {
        let fsm = Self {
            states,
            symbols,
            transitions,
            initial_state,
            final_states,
            mode,
        };
        debug_assert_eq!(Ok(()), fsm.validate());
        fsm
    }

    /// Check every structural invariant of an already-built automaton.
    pub fn validate(&self) -> std::result::Result<(), StructureError> {
        self.check_header()?;
        self.transitions
            .iter()
            .try_for_each(|(state, symbol, target)| self.check_transition(state, symbol, target))
    }

    fn check_header(&self) -> std::result::Result<(), StructureError> {
        if !self.states.contains(&self.initial_state) {
            return Err(StructureError::InitialStateMissing {
                state: format!("{:?}", self.initial_state),
            });
        }

        if let Some(state) = self.final_states.iter().find(|s| !self.states.contains(*s)) {
            return Err(StructureError::FinalStateMissing {
                state: format!("{:?}", state),
            });
        }

        if self.mode == Mode::Deterministic && self.symbols.contains(&Symbol::Epsilon) {
            return Err(StructureError::EpsilonNotAllowed);
        }

        Ok(())
    }

    fn check_transition(
        &self,
        state: &S,
        symbol: &Symbol<T>,
        target: &Target<S>,
    ) -> std::result::Result<(), StructureError> {
        if !self.states.contains(state) {
            return Err(StructureError::UnknownSource {
                state: format!("{:?}", state),
            });
        }

        if !self.symbols.contains(symbol) {
            return Err(StructureError::UnknownSymbol {
                state: format!("{:?}", state),
                symbol: format!("{:?}", symbol),
            });
        }

        if !target.fits(self.mode) {
            let state = format!("{:?}", state);
            let symbol = format!("{:?}", symbol);
            return Err(match self.mode {
                Mode::Deterministic => StructureError::NotDeterministic { state, symbol },
                Mode::Nondeterministic => StructureError::NotNondeterministic { state, symbol },
            });
        }

        if let Some(dest) = target.iter().find(|s| !self.states.contains(*s)) {
            return Err(StructureError::UnknownTarget {
                state: format!("{:?}", state),
                symbol: format!("{:?}", symbol),
                target: format!("{:?}", dest),
            });
        }

        Ok(())
    }

    /// Look up the stored target of a transition. Fails if the state or symbol is not declared;
    /// returns `None` if no transition is defined.
    pub fn lookup(&self, state: &S, symbol: &Symbol<T>) -> Result<Option<&Target<S>>> {
        self.check_state(state)?;
        self.check_symbol(symbol)?;
        Ok(self.transitions.get(state, symbol))
    }

    #[inline]
    pub(crate) fn check_state(&self, state: &S) -> std::result::Result<(), LookupError> {
        if self.states.contains(state) {
            Ok(())
        } else {
            Err(LookupError::state(state))
        }
    }

    #[inline]
    pub(crate) fn check_symbol(&self, symbol: &Symbol<T>) -> std::result::Result<(), LookupError> {
        if self.symbols.contains(symbol) {
            Ok(())
        } else {
            Err(LookupError::symbol(symbol))
        }
    }

    #[inline]
    pub fn states(&self) -> &StateSet<S> {
        &self.states
    }

    #[inline]
    pub fn symbols(&self) -> &OrdSet<Symbol<T>> {
        &self.symbols
    }

    #[inline]
    pub fn transitions(&self) -> &Table<S, Symbol<T>, Target<S>> {
        &self.transitions
    }

    #[inline]
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    #[inline]
    pub fn final_states(&self) -> &StateSet<S> {
        &self.final_states
    }

    #[inline]
    pub fn is_final_state(&self, state: &S) -> bool {
        self.final_states.contains(state)
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.mode == Mode::Deterministic
    }
}

/// Behavior shared by deterministic and non-deterministic automata.
pub trait Automaton {
    type State: Label;
    type Symbol: Label;
    /// What [`delta`](Automaton::delta) returns: an optional state for a DFA, a set of states
    /// for an NFA.
    type Output;

    /// The underlying validated model.
    fn fsm(&self) -> &Fsm<Self::State, Self::Symbol>;

    /// The state-transition function. Fails if `state` or `symbol` is not declared. A missing
    /// transition yields the "no transition" value of the automaton kind.
    fn delta(
        &self,
        state: &Self::State,
        symbol: &Symbol<Self::Symbol>,
    ) -> Result<Self::Output>;

    /// Determine if the given input is accepted. Fails if the input uses a symbol outside the
    /// alphabet.
    fn accept<I>(&self, input: I) -> Result<bool>
    where
        I: IntoIterator<Item = Self::Symbol>;

    #[inline]
    fn states(&self) -> &StateSet<Self::State> {
        self.fsm().states()
    }

    #[inline]
    fn symbols(&self) -> &OrdSet<Symbol<Self::Symbol>> {
        self.fsm().symbols()
    }

    #[inline]
    fn transitions(&self) -> &Table<Self::State, Symbol<Self::Symbol>, Target<Self::State>> {
        self.fsm().transitions()
    }

    #[inline]
    fn initial_state(&self) -> &Self::State {
        self.fsm().initial_state()
    }

    #[inline]
    fn final_states(&self) -> &StateSet<Self::State> {
        self.fsm().final_states()
    }

    #[inline]
    fn is_deterministic(&self) -> bool {
        self.fsm().is_deterministic()
    }
}
