use std::fmt;

/// The character used to display the epsilon symbol.
pub const EPSILON_CHAR: char = 'ε';

/// A symbol of an automaton's alphabet.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Symbol<T> {
    /// An ordinary input symbol.
    Input(T),
    /// An epsilon transition allows an NFA to change its state spontaneously without consuming an
    /// input symbol. It is never legal in the alphabet of a DFA.
    Epsilon,
}

impl<T> Symbol<T> {
    /// The reserved epsilon symbol.
    pub const EPSILON: Self = Symbol::Epsilon;

    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Returns the input symbol, or `None` for epsilon.
    #[inline]
    pub fn as_input(&self) -> Option<&T> {
        match self {
            Symbol::Input(t) => Some(t),
            Symbol::Epsilon => None,
        }
    }
}

impl<T> From<T> for Symbol<T> {
    #[inline]
    fn from(t: T) -> Self {
        Symbol::Input(t)
    }
}

impl<T: fmt::Display> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Input(t) => fmt::Display::fmt(t, f),
            Symbol::Epsilon => write!(f, "{}", EPSILON_CHAR),
        }
    }
}
