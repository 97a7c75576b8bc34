//! Threshold secret-sharing primitive
//!
//! The split and combine commands only see the [`SecretSharing`] trait: split
//! a byte buffer into opaque share buffers, and combine share buffers back
//! into a byte buffer. [`Blahaj`] implements it with Shamir's scheme over
//! GF(256) from the `blahaj` crate, where each share serializes as its x
//! coordinate followed by one y byte per secret byte.
//!
//! Combining has no integrity check. Too few shares, or shares from another
//! secret, interpolate to a buffer of the right length holding garbage; the
//! caller has to validate what comes out.

use std::collections::HashSet;

use blahaj::{Share, Sharks};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::SplitConfig;

/// Ways the primitive rejects an operation outright
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharingError {
    #[error("threshold must be at least 2, got {0}")]
    ThresholdTooLow(usize),

    #[error("threshold cannot exceed 255, got {0}")]
    ThresholdTooHigh(usize),

    #[error("parts must be at least 1")]
    NoParts,

    #[error("parts ({parts}) cannot be less than threshold ({threshold})")]
    PartsBelowThreshold { parts: usize, threshold: usize },

    #[error("parts cannot exceed 255, got {0}")]
    TooManyParts(usize),

    #[error("cannot split an empty secret")]
    EmptySecret,

    #[error("only {produced} of {requested} parts could be generated")]
    PartsExhausted { requested: usize, produced: usize },

    #[error("less than two parts cannot be used to reconstruct the secret, got {0}")]
    NotEnoughParts(usize),

    #[error("part {position} is too short to hold a share")]
    PartTooShort { position: usize },

    #[error("all parts must be the same length: expected {expected} bytes, part {position} has {got}")]
    InconsistentLengths {
        expected: usize,
        got: usize,
        position: usize,
    },

    #[error("part {position} duplicates an earlier part")]
    DuplicatePart { position: usize },

    #[error("share recovery failed: {0}")]
    Recovery(String),
}

/// A threshold secret-sharing scheme over byte buffers
pub trait SecretSharing {
    /// Splits `secret` into `parts` shares, any `threshold` of which recover it
    ///
    /// # Errors
    /// Returns an error if the parameters are outside what the scheme supports
    /// or the secret is empty
    fn split(
        &self,
        secret: &[u8],
        parts: usize,
        threshold: usize,
    ) -> Result<Vec<Vec<u8>>, SharingError>;

    /// Interpolates the secret from `shares`
    ///
    /// # Errors
    /// Returns an error if the shares are too few, malformed or structurally
    /// incompatible. Wrong but well-formed shares are not detected.
    fn combine(&self, shares: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>, SharingError>;
}

/// Shamir secret sharing over GF(256), backed by `blahaj`
#[derive(Debug, Clone, Copy, Default)]
pub struct Blahaj;

impl SecretSharing for Blahaj {
    fn split(
        &self,
        secret: &[u8],
        parts: usize,
        threshold: usize,
    ) -> Result<Vec<Vec<u8>>, SharingError> {
        let config = SplitConfig::from_raw(parts, threshold)?;
        if secret.is_empty() {
            return Err(SharingError::EmptySecret);
        }

        let requested = usize::from(*config.share_count());
        debug!(parts = requested, threshold = *config.threshold(), "splitting secret");

        let sharks = Sharks(*config.threshold());
        let shares: Vec<Vec<u8>> = sharks
            .dealer(secret)
            .take(requested)
            .map(|share| Vec::from(&share))
            .collect();

        if shares.len() != requested {
            return Err(SharingError::PartsExhausted {
                requested,
                produced: shares.len(),
            });
        }
        Ok(shares)
    }

    fn combine(&self, shares: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>, SharingError> {
        if shares.len() < 2 {
            return Err(SharingError::NotEnoughParts(shares.len()));
        }
        let count =
            u8::try_from(shares.len()).map_err(|_| SharingError::TooManyParts(shares.len()))?;

        let expected = shares[0].len();
        let mut seen_x = HashSet::with_capacity(shares.len());
        let mut parsed = Vec::with_capacity(shares.len());

        for (idx, bytes) in shares.iter().enumerate() {
            let position = idx + 1;
            // x coordinate plus at least one y byte
            if bytes.len() < 2 {
                return Err(SharingError::PartTooShort { position });
            }
            if bytes.len() != expected {
                return Err(SharingError::InconsistentLengths {
                    expected,
                    got: bytes.len(),
                    position,
                });
            }
            if !seen_x.insert(bytes[0]) {
                return Err(SharingError::DuplicatePart { position });
            }

            let share = Share::try_from(*bytes)
                .map_err(|e| SharingError::Recovery(format!("part {position}: {e:?}")))?;
            parsed.push(share);
        }

        debug!(parts = parsed.len(), "combining shares");

        // Interpolate through every supplied share, so any superset of a quorum works
        Sharks(count)
            .recover(&parsed)
            .map(Zeroizing::new)
            .map_err(|e| SharingError::Recovery(format!("{e:?}")))
    }
}
