//! `ShareCount` newtype for Shamir Secret Sharing

use crate::sharing::SharingError;

/// Number of shares to create (1..=255)
///
/// Each share is evaluated at a distinct non-zero x coordinate of GF(256),
/// so at most 255 shares exist for one secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count (255)
    pub const MAX: u8 = u8::MAX;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is 0 or above 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bip39_splitter::domain::ShareCount;
    ///
    /// // Valid share counts (1-255)
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(255).unwrap();
    /// assert_eq!(*max_count, ShareCount::MAX);
    ///
    /// // Invalid: 0 and anything past 255
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(256).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, SharingError> {
        if value < usize::from(Self::MIN) {
            return Err(SharingError::NoParts);
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| SharingError::TooManyParts(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
