use crate::error::Result;
use crate::fsm::{Automaton, Fsm, Mode, Target};
use crate::state::{Label, StateSet};
use crate::symbol::Symbol;

use std::collections::VecDeque;

use tracing::trace;

/// A deterministic finite automaton, or DFA.
#[derive(Clone, Debug)]
pub struct DFA<S: Label, T: Label> {
    fsm: Fsm<S, T>,
}

impl<S: Label, T: Label> DFA<S, T> {
    /// Create a new DFA. Every transition must lead to a single state, and the alphabet may not
    /// contain epsilon.
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
            Mode::Deterministic,
            states,
            symbols.into_iter().map(Into::into),
            transitions
                .into_iter()
                .map(|(start, label, end)| (start, label.into(), end.into())),
            initial_state,
            final_states,
        )?;

        Ok(Self { fsm })
    }

    #[inline]
    pub(crate) fn from_fsm(fsm: Fsm<S, T>) -> Self {
        debug_assert!(fsm.is_deterministic());
        Self { fsm }
    }

    /// The single state reached from `state` on `symbol`, if a transition is defined. Both must
    /// be declared by the automaton.
    #[inline]
    fn next(&self, state: &S, symbol: &Symbol<T>) -> Option<&S> {
        self.fsm
            .transitions()
            .get(state, symbol)
            .and_then(Target::as_single)
    }

    /// Returns the set of states reachable from the initial state.
    pub fn reachable_states(&self) -> StateSet<S> {
        let initial = self.fsm.initial_state().clone();
        let mut reachable = state_set![initial.clone()];
        let mut queue = VecDeque::from([initial]);

        while let Some(state) = queue.pop_front() {
            for symbol in self.fsm.symbols().iter() {
                if let Some(next) = self.next(&state, symbol) {
                    if reachable.insert(next.clone()).is_none() {
                        queue.push_back(next.clone());
                    }
                }
            }
        }

        reachable
    }

    /// Returns the set of states that cannot be reached from the initial state on any input.
    pub fn unreachable_states(&self) -> StateSet<S> {
        let reachable = self.reachable_states();
        self.fsm
            .states()
            .iter()
            .filter(|s| !reachable.contains(*s))
            .cloned()
            .collect()
    }
}

impl<S: Label, T: Label> Automaton for DFA<S, T> {
    type State = S;
    type Symbol = T;
    type Output = Option<S>;

    #[inline]
    fn fsm(&self) -> &Fsm<S, T> {
        &self.fsm
    }

    /// Returns the state reached from `state` on `symbol`, or `None` if no transition is
    /// defined.
    #[inline]
    fn delta(&self, state: &S, symbol: &Symbol<T>) -> Result<Option<S>> {
        let target = self.fsm.lookup(state, symbol)?;
        Ok(target.and_then(Target::as_single).cloned())
    }

    /// Runs the DFA on the input. A missing transition rejects immediately, without consuming
    /// the rest of the input.
    fn accept<I>(&self, input: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let mut state = self.fsm.initial_state().clone();

        for is in input.into_iter() {
            let symbol = Symbol::Input(is);
            match self.delta(&state, &symbol)? {
                Some(next) => {
                    trace!("{:?} --{:?}--> {:?}", state, symbol, next);
                    state = next;
                }
                None => {
                    trace!("{:?} is stuck on {:?}", state, symbol);
                    return Ok(false);
                }
            }
        }

        Ok(self.fsm.is_final_state(&state))
    }
}
