use thiserror::Error;

/// Alias for [`Result`] for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid automaton: {0}")]
    Automaton(#[from] automata::Error),

    #[error("no demo named {name:?}; run `fsmdot list` to see them")]
    UnknownDemo { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    #[must_use]
    pub fn unknown_demo(name: impl Into<String>) -> Self {
        Self::UnknownDemo { name: name.into() }
    }
}
