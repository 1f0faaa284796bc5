use crate::dfa::DFA;
use crate::fsm::{Automaton, Fsm, Mode, Target};
use crate::nfa::NFA;
use crate::state::{Composite, Label, StateSet};
use crate::symbol::Symbol;
use crate::table::Table;

use std::collections::VecDeque;
use std::iter;

use im::OrdSet;
use tracing::{debug, trace};

impl<S: Label, T: Label> NFA<S, T> {
    /// Create an equivalent DFA using the powerset construction. Each state of the DFA is the
    /// set of NFA states that are simultaneously possible; composite states with the same members
    /// are the same state. The DFA's alphabet is the NFA's alphabet without epsilon.
    ///
    /// The DFA may have up to 2^n states for an NFA with n states. That bound is inherent to the
    /// construction and is only reached by adversarial automata.
    pub fn to_dfa(&self) -> DFA<Composite<S>, T> {
        let symbols: OrdSet<Symbol<T>> = self
            .symbols()
            .iter()
            .filter(|a| !a.is_epsilon())
            .cloned()
            .collect();

        let initial = Composite::new(self.closure(iter::once(self.initial_state().clone())));

        let mut states = state_set![initial.clone()];
        let mut final_states = StateSet::new();
        let mut transitions = Table::new();
        let mut unmarked_states = VecDeque::from([initial.clone()]);

        while let Some(s) = unmarked_states.pop_front() {
            // A set state is accepting if it contains an accepting NFA state.
            if s.members().iter().any(|i| self.fsm().is_final_state(i)) {
                final_states.insert(s.clone());
            }

            for symbol in symbols.iter() {
                let moved_set = self.move_set(s.members(), symbol);
                let new_state = Composite::new(self.closure(moved_set));
                if new_state.members().is_empty() {
                    continue;
                }

                if states.insert(new_state.clone()).is_none() {
                    trace!("discovered {:?}", new_state);
                    unmarked_states.push_back(new_state.clone());
                }
                transitions.set(s.clone(), symbol.clone(), Target::Single(new_state));
            }
        }

        debug!(
            "powerset construction produced {} states from {}",
            states.len(),
            self.states().len()
        );

        DFA::from_fsm(Fsm::from_parts(
            Mode::Deterministic,
            states,
            symbols,
            transitions,
            initial,
            final_states,
        ))
    }
}

impl<S: Label, T: Label> From<&NFA<S, T>> for DFA<Composite<S>, T> {
    #[inline]
    fn from(nfa: &NFA<S, T>) -> Self {
        nfa.to_dfa()
    }
}

impl<S: Label, T: Label> From<NFA<S, T>> for DFA<Composite<S>, T> {
    #[inline]
    fn from(nfa: NFA<S, T>) -> Self {
        nfa.to_dfa()
    }
}
