//! Error taxonomy for splitting and combining mnemonics
//!
//! Every failure kind has its own variant so callers can branch on the kind
//! (for example to print the share-mismatch hint) instead of matching on
//! message text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::sharing::SharingError;
use crate::wordlist::WordIndex;

/// Advice shown alongside [`Error::InvalidWordIndex`] after a combine
pub const SHARE_MISMATCH_HINT: &str =
    "This error usually means one or more of the parts are incorrect, or you don't have enough parts.";

/// Convenience alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The wordlist resources could not be enumerated or read
    #[error("failed to read BIP-39 wordlists at {}", .path.display())]
    RegistryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported language \"{language}\"")]
    UnsupportedLanguage { language: String },

    /// A wordlist has more entries than a 2-byte index can address
    #[error("wordlist for language \"{language}\" has {len} words, at most 65536 are supported")]
    WordlistTooLarge { language: String, len: usize },

    #[error("word \"{word}\" at position {position} does not exist in BIP-39 language \"{language}\"")]
    UnknownWord {
        word: String,
        language: String,
        position: usize,
    },

    #[error("secret buffer has odd length {length}, expected 2 bytes per word")]
    MalformedBuffer { length: usize },

    /// A decoded index points past the end of the wordlist.
    ///
    /// After a combine this is the usual symptom of wrong or insufficient
    /// parts, since the secret-sharing primitive cannot detect them.
    #[error("invalid word index {index} at word position {position} in BIP-39 language \"{language}\"")]
    InvalidWordIndex {
        index: WordIndex,
        position: usize,
        language: String,
    },

    /// Share text is not valid hexadecimal; `position` is 1-based when known
    #[error("failed to decode part{}", part_label(.position))]
    MalformedShare {
        position: Option<usize>,
        raw: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("failed to Shamir-split mnemonic")]
    SplittingFailed(#[source] SharingError),

    #[error("failed to Shamir-combine parts of mnemonic")]
    CombiningFailed(#[source] SharingError),

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

fn part_label(position: &Option<usize>) -> String {
    position.map(|p| format!(" {p}")).unwrap_or_default()
}

impl Error {
    /// Attaches the 1-based position of the offending share text
    #[must_use]
    pub fn at_part(self, position: usize) -> Self {
        match self {
            Self::MalformedShare { raw, source, .. } => Self::MalformedShare {
                position: Some(position),
                raw,
                source,
            },
            other => other,
        }
    }

    /// True for the decoding failures that indicate wrong or insufficient parts
    #[must_use]
    pub fn is_share_mismatch(&self) -> bool {
        matches!(
            self,
            Self::InvalidWordIndex { .. } | Self::MalformedBuffer { .. }
        )
    }
}
