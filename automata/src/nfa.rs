use crate::error::Result;
use crate::fsm::{Automaton, Fsm, Mode, Target};
use crate::state::{Label, StateSet};
use crate::symbol::Symbol;

use std::iter;

use tracing::trace;

/// A non-deterministic finite automaton, or NFA. Its alphabet may contain
/// [`Symbol::Epsilon`] to allow spontaneous transitions.
#[derive(Clone, Debug)]
pub struct NFA<S: Label, T: Label> {
    fsm: Fsm<S, T>,
}

impl<S: Label, T: Label> NFA<S, T> {
    /// The reserved symbol for epsilon transitions.
    pub const EPSILON: Symbol<T> = Symbol::Epsilon;

    /// Create a new NFA. Every transition must lead to a set of states, which may be empty.
    pub fn new<Q, A, B, D, C, V, F>(
        states: Q,
        symbols: A,
        transitions: D,
        initial_state: S,
        final_states: F,
    ) -> Result<Self>
    where
        Q: IntoIterator<Item = S>,
        A: IntoIterator<Item = B>,
        B: Into<Symbol<T>>,
        D: IntoIterator<Item = (S, C, V)>,
        C: Into<Symbol<T>>,
        V: Into<Target<S>>,
        F: IntoIterator<Item = S>,
    {
        let fsm = Fsm::new(
            Mode::Nondeterministic,
            states,
            symbols.into_iter().map(Into::into),
            transitions
                .into_iter()
                .map(|(start, label, ends)| (start, label.into(), ends.into())),
            initial_state,
            final_states,
        )?;

        Ok(Self { fsm })
    }

    /// Returns true if epsilon is part of the alphabet.
    #[inline]
    pub fn has_epsilon_moves(&self) -> bool {
        self.fsm.symbols().contains(&Symbol::Epsilon)
    }

    /// Computes the epsilon-closure of a state: every state reachable from it on epsilon
    /// transitions only, including the state itself.
    pub fn epsilon_closure(&self, state: &S) -> Result<StateSet<S>> {
        self.fsm.check_state(state)?;
        Ok(self.closure(iter::once(state.clone())))
    }

    /// Computes the union of epsilon-closures for each state in the given set of states.
    pub fn epsilon_closure_set<'a, I>(&self, states: I) -> Result<StateSet<S>>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let seeds = states
            .into_iter()
            .map(|s| self.fsm.check_state(s).map(|_| s.clone()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(self.closure(seeds))
    }

    /// Epsilon-closure of states already known to be declared. Epsilon cycles are handled by
    /// never expanding a state twice.
    pub(crate) fn closure<I>(&self, seeds: I) -> StateSet<S>
    where
        I: IntoIterator<Item = S>,
    {
        if !self.has_epsilon_moves() {
            return seeds.into_iter().collect();
        }

        let mut closure = StateSet::new();
        let mut stack: Vec<S> = seeds.into_iter().collect();

        while let Some(state) = stack.pop() {
            if closure.insert(state.clone()).is_some() {
                continue;
            }

            if let Some(ends) = self.fsm.transitions().get(&state, &Symbol::Epsilon) {
                stack.extend(ends.iter().filter(|s| !closure.contains(*s)).cloned());
            }
        }

        closure
    }

    /// Every state reachable from a member of `states` on a transition labeled `symbol`, without
    /// following epsilon transitions afterwards.
    pub(crate) fn move_set(&self, states: &StateSet<S>, symbol: &Symbol<T>) -> StateSet<S> {
        let mut set = StateSet::new();
        for state in states.iter() {
            if let Some(ends) = self.fsm.transitions().get(state, symbol) {
                for end in ends.iter() {
                    set.insert(end.clone());
                }
            }
        }
        set
    }
}

impl<S: Label, T: Label> Automaton for NFA<S, T> {
    type State = S;
    type Symbol = T;
    type Output = StateSet<S>;

    #[inline]
    fn fsm(&self) -> &Fsm<S, T> {
        &self.fsm
    }

    /// Returns the set of states reached from `state` on `symbol`; the set is empty if no
    /// transition is defined.
    fn delta(&self, state: &S, symbol: &Symbol<T>) -> Result<StateSet<S>> {
        let set = match self.fsm.lookup(state, symbol)? {
            Some(Target::Multiple(ends)) => ends.clone(),
            Some(Target::Single(end)) => state_set![end.clone()],
            None => StateSet::new(),
        };
        Ok(set)
    }

    /// Simulates every branch of the NFA at once. A branch with no transition dies without
    /// stopping the others; every input symbol is still checked against the alphabet.
    fn accept<I>(&self, input: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let mut current = self.closure(iter::once(self.fsm.initial_state().clone()));

        for is in input.into_iter() {
            let symbol = Symbol::Input(is);
            self.fsm.check_symbol(&symbol)?;

            let moved = self.move_set(&current, &symbol);
            current = self.closure(moved);
            trace!("on {:?} now in {:?}", symbol, current);
        }

        Ok(current.iter().any(|s| self.fsm.is_final_state(s)))
    }
}
