//! WASM bindings for bip39-splitter
//!
//! This module provides JavaScript-friendly bindings for the split and combine
//! commands, using the built-in BIP-39 wordlists.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::commands;
use crate::error::{Error, SHARE_MISMATCH_HINT};
use crate::sharing::Blahaj;
use crate::wordlist::WordlistRegistry;

/// Initialize panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a split operation (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitResult {
    /// Hexadecimal shares, in the order they were generated
    pub shares: Vec<String>,
    /// Number of shares generated
    pub parts: usize,
    /// Threshold required to reconstruct
    pub threshold: usize,
}

/// Full message chain, plus the share-mismatch hint where it applies
fn render_error(err: Error) -> String {
    let hint = matches!(err, Error::InvalidWordIndex { .. });
    let message = format!("{:#}", anyhow::Error::from(err));
    if hint {
        format!("{message}. {SHARE_MISMATCH_HINT}")
    } else {
        message
    }
}

/// Splits a mnemonic and serializes the shares as JSON
///
/// # Errors
/// Returns the rendered error message if the split fails
pub fn split_to_json(
    language: &str,
    mnemonic: &str,
    parts: usize,
    threshold: usize,
) -> Result<String, String> {
    let shares = commands::split_mnemonic(
        &WordlistRegistry::Builtin,
        &Blahaj,
        language,
        mnemonic,
        parts,
        threshold,
    )
    .map_err(render_error)?;

    let result = SplitResult {
        parts: shares.len(),
        shares,
        threshold,
    };
    serde_json::to_string(&result).map_err(|e| format!("Serialization failed: {e}"))
}

/// Combines hexadecimal shares into the original mnemonic
///
/// # Errors
/// Returns the rendered error message if the combine fails
pub fn combine_to_mnemonic(language: &str, shares: &[String]) -> Result<String, String> {
    commands::combine_shares(&WordlistRegistry::Builtin, &Blahaj, language, shares)
        .map(|mnemonic| mnemonic.as_str().to_owned())
        .map_err(render_error)
}

/// Split a BIP39 mnemonic into hexadecimal Shamir Secret Shares
///
/// # Arguments
/// * `language` - Wordlist language, e.g. `"english"`
/// * `mnemonic` - The mnemonic to split
/// * `parts` - Total number of shares to create
/// * `threshold` - Minimum number of shares needed to reconstruct
///
/// # Returns
/// JSON string containing the shares and parameters, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_split(
///     "english",
///     "army van defense carry jealous true garbage claim echo media make crunch",
///     5,
///     3
/// );
/// const data = JSON.parse(result);
/// for (let i = 0; i < data.shares.length; i++) {
///     console.log(`Part ${i+1}: ${data.shares[i]}`);
/// }
/// ```
#[wasm_bindgen]
pub fn wasm_split(
    language: &str,
    mnemonic: &str,
    parts: usize,
    threshold: usize,
) -> Result<String, JsValue> {
    split_to_json(language, mnemonic, parts, threshold).map_err(|e| JsValue::from_str(&e))
}

/// Combine hexadecimal shares to reconstruct the original mnemonic
///
/// # Example (JavaScript)
/// ```javascript
/// const mnemonic = wasm_combine("english", [data.shares[0], data.shares[3], data.shares[4]]);
/// ```
#[wasm_bindgen]
pub fn wasm_combine(language: &str, shares: Vec<String>) -> Result<String, JsValue> {
    combine_to_mnemonic(language, &shares).map_err(|e| JsValue::from_str(&e))
}

/// List the built-in wordlist languages as an array of strings
#[wasm_bindgen]
pub fn wasm_languages() -> Result<JsValue, JsValue> {
    let languages = WordlistRegistry::Builtin
        .list_languages()
        .map_err(|e| JsValue::from_str(&render_error(e)))?;
    serde_wasm_bindgen::to_value(&languages).map_err(JsValue::from)
}
