//! Text encodings on either side of the secret-sharing primitive
//!
//! - [`mnemonic`] maps a mnemonic to the secret buffer that gets split, and a
//!   recombined buffer back to a mnemonic
//! - [`share_text`] maps raw share bytes to the hexadecimal text users copy
//!   around, and back
//!
//! # Examples
//!
//! ```rust
//! use bip39_splitter::codec::{mnemonic, share_text};
//! use bip39_splitter::wordlist::Wordlist;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let wordlist = Wordlist::parse("toy", "abandon\nability\nable")?;
//!
//! let secret = mnemonic::encode(&wordlist, "ability abandon")?;
//! assert_eq!(secret.as_bytes(), &[0x00, 0x01, 0x00, 0x00]);
//! assert_eq!(mnemonic::decode(&wordlist, secret.as_bytes())?.as_str(), "ability abandon");
//!
//! assert_eq!(share_text::encode(&[0xDE, 0xAD]), "dead");
//! assert_eq!(*share_text::decode("dead")?, vec![0xDE, 0xAD]);
//! # Ok(())
//! # }
//! ```

pub mod mnemonic;
pub mod share_text;

pub use mnemonic::{Mnemonic, SecretBuffer};
