/// Alias for [`Result`] for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Any error raised by an automaton.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// A structural defect found while constructing an automaton. Offending values are rendered with
/// their `Debug` representation.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StructureError {
    #[error("initial state {state} is not a state")]
    InitialStateMissing { state: String },
    #[error("final state {state} is not a state")]
    FinalStateMissing { state: String },
    #[error("transition source {state} is not a state")]
    UnknownSource { state: String },
    #[error("transition from {state} on {symbol} uses a symbol outside the alphabet")]
    UnknownSymbol { state: String, symbol: String },
    #[error("transition from {state} on {symbol} leads to {target}, which is not a state")]
    UnknownTarget {
        state: String,
        symbol: String,
        target: String,
    },
    #[error("a deterministic automaton cannot have epsilon in its alphabet")]
    EpsilonNotAllowed,
    #[error("transition from {state} on {symbol} must have a single target state")]
    NotDeterministic { state: String, symbol: String },
    #[error("transition from {state} on {symbol} must have a set of target states")]
    NotNondeterministic { state: String, symbol: String },
    #[error("transition from {state} on {symbol} is defined more than once")]
    DuplicateTransition { state: String, symbol: String },
}

/// A query referred to a state or symbol the automaton does not declare.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("{state} is not a state")]
    UnknownState { state: String },
    #[error("{symbol} is not a symbol")]
    UnknownSymbol { symbol: String },
}

impl LookupError {
    #[inline]
    pub(crate) fn state<S: std::fmt::Debug>(state: &S) -> Self {
        LookupError::UnknownState {
            state: format!("{:?}", state),
        }
    }

    #[inline]
    pub(crate) fn symbol<T: std::fmt::Debug>(symbol: &T) -> Self {
        LookupError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        }
    }
}
