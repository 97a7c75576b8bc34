//! Property tests for the mnemonic and share text codecs

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use bip39_splitter::Error;
use bip39_splitter::codec::{mnemonic, share_text};
use bip39_splitter::wordlist::{Wordlist, WordlistRegistry};

/// A wordlist of distinct words of random size, plus a mnemonic drawn from it
#[derive(Clone, Debug)]
struct WordlistAndMnemonic {
    words: Vec<String>,
    picks: Vec<usize>,
}

impl Arbitrary for WordlistAndMnemonic {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep sizes reasonable, but cross the one-byte index boundary
        let len = usize::arbitrary(g) % 600 + 1;
        let words = (0..len).map(|i| format!("w{i:x}")).collect();

        let word_count = usize::arbitrary(g) % 30;
        let picks = (0..word_count).map(|_| usize::arbitrary(g) % len).collect();

        WordlistAndMnemonic { words, picks }
    }
}

/// Arbitrary byte vectors of odd length
#[derive(Clone, Debug)]
struct OddBytes(Vec<u8>);

impl Arbitrary for OddBytes {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut bytes = Vec::<u8>::arbitrary(g);
        if bytes.len() % 2 == 0 {
            bytes.push(u8::arbitrary(g));
        }
        OddBytes(bytes)
    }
}

/// Decoding an encoded mnemonic reproduces its words
#[quickcheck]
fn prop_mnemonic_round_trip(input: WordlistAndMnemonic) -> bool {
    let Ok(wordlist) = Wordlist::new("random", input.words.clone()) else {
        return false;
    };
    let words: Vec<&str> = input.picks.iter().map(|&i| input.words[i].as_str()).collect();

    // Arbitrary spacing between words
    let text = format!("  {}\t\n", words.join(" \t "));

    let Ok(secret) = mnemonic::encode(&wordlist, &text) else {
        return false;
    };
    if secret.as_bytes().len() != 2 * words.len() {
        return false;
    }

    let Ok(decoded) = mnemonic::decode(&wordlist, secret.as_bytes()) else {
        return false;
    };
    decoded.as_str() == words.join(" ")
}

/// Every byte chunk holds the big-endian index of the matching word
#[quickcheck]
fn prop_encode_is_big_endian_indices(input: WordlistAndMnemonic) -> bool {
    let Ok(wordlist) = Wordlist::new("random", input.words.clone()) else {
        return false;
    };
    let text: Vec<&str> = input.picks.iter().map(|&i| input.words[i].as_str()).collect();

    let Ok(secret) = mnemonic::encode(&wordlist, &text.join(" ")) else {
        return false;
    };

    secret
        .as_bytes()
        .chunks_exact(2)
        .zip(&input.picks)
        .all(|(chunk, &pick)| usize::from(u16::from_be_bytes([chunk[0], chunk[1]])) == pick)
}

/// Odd-length buffers never decode, whatever their content
#[quickcheck]
fn prop_odd_buffer_is_malformed(bytes: OddBytes) -> bool {
    let OddBytes(bytes) = bytes;
    let Ok(english) = WordlistRegistry::Builtin.load_wordlist("english") else {
        return false;
    };

    matches!(
        mnemonic::decode(&english, &bytes),
        Err(Error::MalformedBuffer { length }) if length == bytes.len()
    )
}

/// The first index at or past the wordlist length is reported with its position
#[quickcheck]
fn prop_out_of_range_index_is_reported(prefix_len: u8, excess: u16) -> bool {
    let Ok(english) = WordlistRegistry::Builtin.load_wordlist("english") else {
        return false;
    };
    let position = usize::from(prefix_len % 24);
    let index = 2048u16.saturating_add(excess % (u16::MAX - 2048));

    let mut buffer = vec![0u8; 2 * position];
    buffer.extend_from_slice(&index.to_be_bytes());
    buffer.extend_from_slice(&[0x00, 0x01]);

    matches!(
        mnemonic::decode(&english, &buffer),
        Err(Error::InvalidWordIndex { index: i, position: p, .. }) if i == index && p == position
    )
}

/// Share text decodes back to the exact bytes it was encoded from
#[quickcheck]
fn prop_share_text_round_trip(bytes: Vec<u8>) -> bool {
    let text = share_text::encode(&bytes);
    text.len() == 2 * bytes.len()
        && !text.chars().any(|c| c.is_ascii_uppercase())
        && share_text::decode(&text).is_ok_and(|decoded| *decoded == bytes)
}
