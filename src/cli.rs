use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::wordlist::WordlistRegistry;

#[derive(Parser, Debug)]
#[command(name = "bip39-splitter", version)]
#[command(about = "Split BIP-39 mnemonics (seed phrases) into Shamir Secret Shares and combine them back")]
pub struct Cli {
    /// Directory of `<language>.txt` wordlists to use instead of the built-in BIP-39 lists
    #[arg(long, global = true, env = "BIP39_SPLITTER_WORDLISTS", value_name = "DIR")]
    pub wordlists: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Split a mnemonic into parts
    Split {
        /// Language of the BIP-39 mnemonic (see `languages`)
        #[arg(short, long)]
        language: String,

        /// Number of parts to split the mnemonic into
        #[arg(short, long)]
        parts: usize,

        /// Number of parts required to reconstruct the mnemonic with `combine`
        #[arg(short, long)]
        threshold: usize,
    },
    /// Combine parts to reconstruct the original mnemonic
    Combine {
        /// Language of the BIP-39 mnemonic (see `languages`)
        #[arg(short, long)]
        language: String,
    },
    /// List the supported mnemonic languages
    Languages,
}

impl Cli {
    /// Wordlist source selected by `--wordlists`
    #[must_use]
    pub fn registry(&self) -> WordlistRegistry {
        self.wordlists
            .clone()
            .map_or(WordlistRegistry::Builtin, WordlistRegistry::Directory)
    }
}

/// Accepts the single-dash `-help` spelling alongside `-h` and `--help`
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| if arg == "-help" { "--help".into() } else { arg })
        .collect()
}
