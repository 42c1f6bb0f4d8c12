//! randomcard - fetch a random card from YGOPRODeck and hand back its name

pub mod config;
pub mod error;
pub mod types;

pub mod upstream;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
