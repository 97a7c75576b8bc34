//! Mnemonic to secret buffer codec
//!
//! Each word is replaced by its [`WordIndex`] in the selected wordlist,
//! written as 2 bytes big-endian, in word order. A buffer of `2 * n` bytes
//! therefore holds an `n`-word mnemonic.
//!
//! Decoding is also where wrong or insufficient shares get caught: the
//! secret-sharing primitive happily interpolates garbage, but garbage rarely
//! lands entirely inside the wordlist.

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::wordlist::{WordIndex, Wordlist};

/// Bytes used to serialize one [`WordIndex`]
pub const INDEX_WIDTH: usize = std::mem::size_of::<WordIndex>();

/// The byte form of a mnemonic handed to the secret-sharing primitive
///
/// Wiped from memory on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretBuffer(Zeroizing<Vec<u8>>);

impl SecretBuffer {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of words encoded in the buffer
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.0.len() / INDEX_WIDTH
    }
}

impl From<Vec<u8>> for SecretBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

/// A mnemonic in canonical textual form: words joined by single spaces
///
/// Wraps the text in `Zeroizing` to ensure secure memory cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic(Zeroizing<String>);

impl Mnemonic {
    /// Gets the mnemonic as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// Encodes a mnemonic as a secret buffer
///
/// The text is split on whitespace and empty tokens are dropped. Zero words
/// yield an empty buffer.
///
/// # Errors
/// Returns [`Error::UnknownWord`] for the first token missing from `wordlist`,
/// with its 0-based position among the tokens. Nothing is returned on failure.
pub fn encode(wordlist: &Wordlist, mnemonic: &str) -> Result<SecretBuffer> {
    let mut buffer = Zeroizing::new(Vec::new());

    for (position, word) in mnemonic.split_whitespace().enumerate() {
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| Error::UnknownWord {
                word: word.to_string(),
                language: wordlist.language().to_string(),
                position,
            })?;
        buffer.extend_from_slice(&index.to_be_bytes());
    }

    debug!(
        language = wordlist.language(),
        words = buffer.len() / INDEX_WIDTH,
        "encoded mnemonic"
    );
    Ok(SecretBuffer(buffer))
}

/// Decodes a secret buffer back into a mnemonic
///
/// # Errors
/// Returns [`Error::MalformedBuffer`] if the buffer length is odd, and
/// [`Error::InvalidWordIndex`] for the first index outside `wordlist`, with
/// its 0-based chunk position.
pub fn decode(wordlist: &Wordlist, buffer: &[u8]) -> Result<Mnemonic> {
    if buffer.len() % INDEX_WIDTH != 0 {
        return Err(Error::MalformedBuffer {
            length: buffer.len(),
        });
    }

    let mut mnemonic = Zeroizing::new(String::with_capacity(buffer.len() * 4));
    for (position, chunk) in buffer.chunks_exact(INDEX_WIDTH).enumerate() {
        let index = WordIndex::from_be_bytes([chunk[0], chunk[1]]);
        let word = wordlist.word(index).ok_or_else(|| Error::InvalidWordIndex {
            index,
            position,
            language: wordlist.language().to_string(),
        })?;

        if !mnemonic.is_empty() {
            mnemonic.push(' ');
        }
        mnemonic.push_str(word);
    }

    Ok(Mnemonic(mnemonic))
}
