#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod error;

pub mod config;
pub mod demos;
pub mod dot;
pub mod table;

pub use automata;
pub use config::{RankDir, RenderConfig, TableStyle};
pub use error::{Error, Result};
