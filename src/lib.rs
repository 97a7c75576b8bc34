// Library backing the bip39-splitter binary and its WASM bindings

pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod sharing;
pub mod wasm;
pub mod wordlist;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod input;
#[cfg(feature = "cli")]
pub mod logging;

pub use commands::{combine_shares, split_mnemonic};
pub use error::{Error, Result};
