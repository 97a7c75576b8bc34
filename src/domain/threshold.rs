//! Threshold newtype for Shamir Secret Sharing

use crate::sharing::SharingError;

/// Threshold for Shamir Secret Sharing (2..=255)
///
/// Invariant: 2 <= threshold <= 255 (enforced at construction)
/// A threshold of 1 provides no security benefit since any single share can recover the entire secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Minimum valid threshold
    pub const MIN: u8 = 2;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns an error if the threshold is less than 2 or greater than 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bip39_splitter::domain::Threshold;
    ///
    /// // Valid threshold (2 or greater)
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // Invalid: threshold must be at least 2 and fit in GF(256)
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(0).is_err());
    /// assert!(Threshold::new(256).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, SharingError> {
        if value < usize::from(Self::MIN) {
            return Err(SharingError::ThresholdTooLow(value));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| SharingError::ThresholdTooHigh(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
