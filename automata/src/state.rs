use std::fmt;
use std::hash::Hash;

use im::OrdSet;

/// Bounds required of state and symbol labels. States and symbols are otherwise opaque.
pub trait Label: Clone + Ord + Hash + fmt::Debug {}

impl<T> Label for T where T: Clone + Ord + Hash + fmt::Debug {}

/// An ordered set of states. The ordering gives every set a canonical form, so two sets with the
/// same members compare and hash equal regardless of how they were built.
pub type StateSet<S> = OrdSet<S>;

/// A DFA state produced by the powerset construction, standing for a set of NFA states that are
/// simultaneously possible.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Composite<S: Label>(StateSet<S>);

impl<S: Label> Composite<S> {
    #[inline]
    pub fn new(members: StateSet<S>) -> Self {
        Self(members)
    }

    /// The NFA states this composite state stands for.
    #[inline]
    pub fn members(&self) -> &StateSet<S> {
        &self.0
    }

    #[inline]
    pub fn contains(&self, state: &S) -> bool {
        self.0.contains(state)
    }

    #[inline]
    pub fn into_inner(self) -> StateSet<S> {
        self.0
    }
}

impl<S: Label> From<StateSet<S>> for Composite<S> {
    #[inline]
    fn from(members: StateSet<S>) -> Self {
        Self(members)
    }
}

impl<S> fmt::Display for Composite<S>
where
    S: Label + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_set(f, &self.0)
    }
}

/// Write a set of states as `{a, b, c}`, in order.
pub(crate) fn write_set<S>(f: &mut fmt::Formatter<'_>, set: &StateSet<S>) -> fmt::Result
where
    S: Label + fmt::Display,
{
    write!(f, "{{")?;
    for (i, state) in set.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", state)?;
    }
    write!(f, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_display_is_sorted() {
        let c = Composite::new(state_set![3, 1, 2]);
        assert_eq!("{1, 2, 3}", c.to_string());

        let empty: Composite<u32> = Composite::new(state_set![]);
        assert_eq!("{}", empty.to_string());
    }

    #[test]
    fn test_composite_identity_by_value() {
        let a = Composite::new(state_set!["q1", "q0"]);
        let b = Composite::new(state_set!["q0", "q1", "q0"]);
        assert_eq!(a, b);
        assert!(b.contains(&"q1"));
        assert_eq!(2, b.into_inner().len());
    }
}
