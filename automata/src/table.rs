use std::collections::HashMap;
use std::hash::Hash;

/// A two-way lookup table, used to store transitions keyed by state and then by symbol.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Table<T, U, V>
where
    T: Eq + Hash,
    U: Eq + Hash,
{
    map: HashMap<T, HashMap<U, V>>,
}

impl<T, U, V> Table<T, U, V>
where
    T: Eq + Hash,
    U: Eq + Hash,
{
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Set the value in the table with the given keys. The previous value, if any, is returned.
    pub fn set(&mut self, row: T, col: U, val: V) -> Option<V> {
        self.map.entry(row).or_default().insert(col, val)
    }

    /// Retrieve an immutable reference to the value in the table with the given keys.
    #[inline]
    pub fn get(&self, row: &T, col: &U) -> Option<&V> {
        self.map.get(row).and_then(|c| c.get(col))
    }

    /// The number of values stored in the table.
    pub fn len(&self) -> usize {
        self.map.values().map(HashMap::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produce an iterator on all the values in the table. Each item is a tuple consisting of
    /// both keys and the value, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &U, &V)> + '_ {
        self.map
            .iter()
            .flat_map(|(row, c)| c.iter().map(move |(col, val)| (row, col, val)))
    }
}

impl<T, U, V> Default for Table<T, U, V>
where
    T: Eq + Hash,
    U: Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
