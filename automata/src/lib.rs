#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

#[macro_use]
mod macros;

mod error;
mod fsm;
mod state;
mod symbol;

pub mod convert;
pub mod dfa;
pub mod nfa;
pub mod table;

pub use dfa::DFA;
pub use error::{Error, LookupError, Result, StructureError};
pub use fsm::{Automaton, Fsm, Mode, Target};
pub use nfa::NFA;
pub use state::{Composite, Label, StateSet};
pub use symbol::{Symbol, EPSILON_CHAR};
