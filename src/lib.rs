pub mod cli;
pub mod command;
pub mod error;
pub mod patcher;
pub mod registry;
pub mod templates;

pub use error::{Result, SynthfixError};

#[cfg(test)]
pub mod test_helpers;
