//! Validated parameters of the secret-sharing primitive
//!
//! These newtypes carry the bounds of the GF(256) Shamir implementation:
//! - [`Threshold`] - Minimum shares required for reconstruction (2..=255)
//! - [`ShareCount`] - Total number of shares to create (1..=255)
//! - [`SplitConfig`] - Validated threshold and share count pair
//!
//! Only the primitive checks them. The split and combine commands pass the
//! caller's numbers through untouched and surface whatever is rejected here.

mod config;
mod share_count;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use threshold::Threshold;
