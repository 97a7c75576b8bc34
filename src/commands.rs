use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::codec::{Mnemonic, mnemonic, share_text};
use crate::error::{Error, Result};
use crate::sharing::SecretSharing;
use crate::wordlist::WordlistRegistry;

/// Split a mnemonic into hexadecimal shares
///
/// Returns one hex string per share, in the order the primitive produced them.
/// `parts` and `threshold` are handed to the primitive as given.
///
/// # Errors
/// Returns an error if the language is unsupported, a word is not in the
/// wordlist, or the primitive rejects the split
pub fn split_mnemonic<S: SecretSharing + ?Sized>(
    registry: &WordlistRegistry,
    scheme: &S,
    language: &str,
    mnemonic_str: &str,
    parts: usize,
    threshold: usize,
) -> Result<Vec<String>> {
    let wordlist = registry.load_wordlist(language)?;
    let secret = mnemonic::encode(&wordlist, mnemonic_str)?;

    let shares = scheme
        .split(secret.as_bytes(), parts, threshold)
        .map_err(Error::SplittingFailed)?;

    debug!(
        language,
        words = secret.word_count(),
        parts = shares.len(),
        "split mnemonic"
    );
    Ok(shares.iter().map(|share| share_text::encode(share)).collect())
}

/// Combine hexadecimal shares to reconstruct the original mnemonic
///
/// # Errors
/// Returns [`Error::MalformedShare`] with the 1-based position of the first
/// share that is not hexadecimal, [`Error::CombiningFailed`] if the primitive
/// rejects the shares, and [`Error::InvalidWordIndex`] or
/// [`Error::MalformedBuffer`] if the recombined secret is not a mnemonic,
/// which usually means wrong or insufficient shares
pub fn combine_shares<S: SecretSharing + ?Sized>(
    registry: &WordlistRegistry,
    scheme: &S,
    language: &str,
    share_strings: &[String],
) -> Result<Mnemonic> {
    let wordlist = registry.load_wordlist(language)?;

    let decoded = share_strings
        .iter()
        .enumerate()
        .map(|(idx, share_str)| share_text::decode(share_str).map_err(|err| err.at_part(idx + 1)))
        .collect::<Result<Vec<Zeroizing<Vec<u8>>>>>()?;
    let views: Vec<&[u8]> = decoded.iter().map(|share| share.as_slice()).collect();

    let secret = scheme.combine(&views).map_err(Error::CombiningFailed)?;

    mnemonic::decode(&wordlist, &secret).inspect_err(|err| {
        warn!(
            language,
            parts = views.len(),
            %err,
            "recombined secret is not a valid mnemonic"
        );
    })
}
