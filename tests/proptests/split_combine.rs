//! Property tests for split/combine workflows

use bip39::Mnemonic;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use bip39_splitter::sharing::Blahaj;
use bip39_splitter::wordlist::WordlistRegistry;
use bip39_splitter::{Error, combine_shares, split_mnemonic};

/// Wrapper for valid BIP39 mnemonics (12 or 24 words)
#[derive(Clone, Debug)]
struct ValidMnemonic(Mnemonic);

impl Arbitrary for ValidMnemonic {
    fn arbitrary(g: &mut Gen) -> Self {
        // Randomly choose between 12 and 24 words
        let entropy_size = if bool::arbitrary(g) { 16 } else { 32 };

        let mut entropy = vec![0u8; entropy_size];
        for byte in &mut entropy {
            *byte = u8::arbitrary(g);
        }

        // Create mnemonic from entropy (this handles checksum automatically)
        let mnemonic = Mnemonic::from_entropy(&entropy).expect("Valid entropy");
        ValidMnemonic(mnemonic)
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidShamirParams {
    threshold: usize,
    parts: usize,
}

impl Arbitrary for ValidShamirParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Generate share count between 2 and 20 (keep it reasonable for testing)
        let parts = usize::from(u8::arbitrary(g) % 19) + 2; // 2..=20

        // Generate threshold between 2 and parts
        let threshold = usize::from(u8::arbitrary(g)) % (parts - 1) + 2; // 2..=parts

        ValidShamirParams { threshold, parts }
    }
}

/// Deterministically shuffled indices `0..len`
fn shuffled(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let mut seed = seed;
    for i in 0..indices.len() {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let range = (indices.len() - i) as u64;
        let j = i + (seed % range) as usize;
        indices.swap(i, j);
    }
    indices
}

/// Any quorum, in any order, reconstructs the original mnemonic
#[quickcheck]
fn prop_random_quorum_reconstructs(
    mnemonic: ValidMnemonic,
    params: ValidShamirParams,
    selection_seed: u64,
    extra: u8,
) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let original = inner.to_string();
    let registry = WordlistRegistry::Builtin;

    let Ok(shares) = split_mnemonic(
        &registry,
        &Blahaj,
        "english",
        &original,
        params.parts,
        params.threshold,
    ) else {
        return false;
    };
    if shares.len() != params.parts {
        return false;
    }

    // Between threshold and all parts
    let take = params.threshold + usize::from(extra) % (params.parts - params.threshold + 1);
    let selected: Vec<String> = shuffled(params.parts, selection_seed)
        .into_iter()
        .take(take)
        .map(|idx| shares[idx].clone())
        .collect();

    combine_shares(&registry, &Blahaj, "english", &selected)
        .is_ok_and(|recovered| recovered.as_str() == original)
}

/// Fewer shares than the threshold never yield the original mnemonic
#[quickcheck]
fn prop_insufficient_shares_never_succeed_silently(
    mnemonic: ValidMnemonic,
    params: ValidShamirParams,
) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let original = inner.to_string();
    let registry = WordlistRegistry::Builtin;

    let Ok(shares) = split_mnemonic(
        &registry,
        &Blahaj,
        "english",
        &original,
        params.parts,
        params.threshold,
    ) else {
        return false;
    };

    let insufficient = &shares[..params.threshold - 1];
    match combine_shares(&registry, &Blahaj, "english", insufficient) {
        Err(Error::CombiningFailed(_)) => insufficient.len() < 2,
        Err(err) => err.is_share_mismatch(),
        Ok(recovered) => recovered.as_str() != original,
    }
}
