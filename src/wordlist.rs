//! BIP-39 wordlists and the registry that supplies them
//!
//! A [`Wordlist`] maps words to their canonical position and back. The
//! position of a word is its [`WordIndex`], which is what ends up in the
//! secret buffer handed to the secret-sharing primitive.
//!
//! # Examples
//!
//! ```rust
//! use bip39_splitter::wordlist::{Wordlist, WordlistRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = WordlistRegistry::Builtin;
//! assert!(registry.list_languages()?.contains(&"english".to_string()));
//!
//! let english = registry.load_wordlist("english")?;
//! assert_eq!(english.len(), 2048);
//! assert_eq!(english.index_of("abandon"), Some(0));
//!
//! let toy = Wordlist::parse("toy", "abandon\nability\nable\n")?;
//! assert_eq!(toy.word(2), Some("able"));
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bip39::Language;
use tracing::debug;

use crate::error::{Error, Result};

/// Canonical position of a word in its wordlist, serialized as 2 bytes big-endian
pub type WordIndex = u16;

/// Largest wordlist whose every position fits in a [`WordIndex`]
pub const MAX_WORDLIST_LEN: usize = WordIndex::MAX as usize + 1;

/// Extension of wordlist resource files
const WORDLIST_EXTENSION: &str = "txt";

/// An ordered, index-addressable list of words for one language
#[derive(Debug, Clone)]
pub struct Wordlist {
    language: String,
    words: Vec<String>,
    /// Word to index lookups, first occurrence wins
    positions: HashMap<String, WordIndex>,
}

impl Wordlist {
    /// Creates a wordlist from words in canonical order
    ///
    /// # Errors
    /// Returns [`Error::WordlistTooLarge`] if some position would not fit in a [`WordIndex`]
    pub fn new(language: impl Into<String>, words: Vec<String>) -> Result<Self> {
        let language = language.into();
        if words.len() > MAX_WORDLIST_LEN {
            return Err(Error::WordlistTooLarge {
                language,
                len: words.len(),
            });
        }

        let mut positions = HashMap::with_capacity(words.len());
        for (idx, word) in words.iter().enumerate() {
            let idx = WordIndex::try_from(idx).map_err(|_| Error::WordlistTooLarge {
                language: language.clone(),
                len: words.len(),
            })?;
            positions.entry(word.clone()).or_insert(idx);
        }

        Ok(Self {
            language,
            words,
            positions,
        })
    }

    /// Parses a newline-separated wordlist resource, one word per line
    ///
    /// Line order is preserved. A trailing newline at the end of the resource
    /// does not produce an empty final word.
    ///
    /// # Errors
    /// Returns [`Error::WordlistTooLarge`] if the resource has too many lines
    pub fn parse(language: impl Into<String>, text: &str) -> Result<Self> {
        Self::new(language, text.lines().map(str::to_string).collect())
    }

    /// Language identifier this wordlist was loaded for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact, case-sensitive lookup of a word's canonical index
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<WordIndex> {
        self.positions.get(word).copied()
    }

    /// Word at the given index, if it is in range
    #[must_use]
    pub fn word(&self, index: WordIndex) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }
}

/// Source of the wordlists available to the split and combine commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordlistRegistry {
    /// The official BIP-39 wordlists compiled into the binary
    #[default]
    Builtin,
    /// A directory holding one `<language>.txt` file per language
    Directory(PathBuf),
}

impl WordlistRegistry {
    /// Lists the supported language identifiers in sorted order
    ///
    /// # Errors
    /// Returns [`Error::RegistryUnavailable`] if a wordlist directory cannot be read
    pub fn list_languages(&self) -> Result<Vec<String>> {
        let mut languages = match self {
            Self::Builtin => Language::ALL.iter().copied().map(language_id).collect(),
            Self::Directory(dir) => list_directory(dir)?,
        };
        languages.sort();
        Ok(languages)
    }

    /// Loads the wordlist for `language`
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedLanguage`] if no resource matches the language,
    /// [`Error::RegistryUnavailable`] if the resource cannot be read
    pub fn load_wordlist(&self, language: &str) -> Result<Wordlist> {
        let wordlist = match self {
            Self::Builtin => {
                let bip39_language = Language::ALL
                    .iter()
                    .copied()
                    .find(|candidate| language_id(*candidate) == language)
                    .ok_or_else(|| unsupported(language))?;
                let words = bip39_language
                    .word_list()
                    .iter()
                    .map(|word| (*word).to_string())
                    .collect();
                Wordlist::new(language, words)?
            }
            Self::Directory(dir) => {
                // Only resolve names that were enumerated, never arbitrary paths
                if !list_directory(dir)?.iter().any(|known| known == language) {
                    return Err(unsupported(language));
                }
                let path = dir.join(format!("{language}.{WORDLIST_EXTENSION}"));
                let text = fs::read_to_string(&path)
                    .map_err(|source| Error::RegistryUnavailable { path, source })?;
                Wordlist::parse(language, &text)?
            }
        };

        debug!(language, words = wordlist.len(), "loaded wordlist");
        Ok(wordlist)
    }
}

fn unsupported(language: &str) -> Error {
    Error::UnsupportedLanguage {
        language: language.to_string(),
    }
}

/// Language identifier matching the official BIP-39 wordlist file stem
fn language_id(language: Language) -> String {
    match format!("{language:?}").as_str() {
        "SimplifiedChinese" => "chinese_simplified".to_string(),
        "TraditionalChinese" => "chinese_traditional".to_string(),
        other => other.to_lowercase(),
    }
}

fn list_directory(dir: &Path) -> Result<Vec<String>> {
    let unavailable = |source| Error::RegistryUnavailable {
        path: dir.to_path_buf(),
        source,
    };

    let mut languages = Vec::new();
    for entry in fs::read_dir(dir).map_err(unavailable)? {
        let entry = entry.map_err(unavailable)?;
        if !entry.file_type().map_err(unavailable)?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(WORDLIST_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            languages.push(stem.to_string());
        }
    }
    Ok(languages)
}
