//! OpenRTB DoubleClick encrypted-price codec.
//!
//! A winning bid price travels inside the price macro as a 38-character
//! URL-safe base64 string wrapping a fixed 28-byte buffer:
//!
//! ```text
//! {initialization vector (16 bytes)}{masked price (8 bytes)}{integrity tag (4 bytes)}
//! ```
//!
//! The masked price is the big-endian price XORed with the first 8 bytes of
//! `HMAC-SHA1(encryption_key, iv)`; the tag is the first 4 bytes of
//! `HMAC-SHA1(integrity_key, price_bytes || iv)`. Both parties must hold the
//! same key pair. The codec never generates, rotates, or stores keys —
//! callers supply already-resolved key material.
//!
//! # Example
//!
//! ```
//! use base64::engine::general_purpose::URL_SAFE;
//! use price_codec::{decrypt_price, parse_keys};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let keys = parse_keys(
//!     &URL_SAFE,
//!     "arO23ykdNqUQ5LEoQ0FVmPkBd7xB5CO89PDZlSjpFxo=",
//!     "skU7Ax_NL5pPAFyKdkfZjZz2-VhIN8bjj1rVFOaJ_5o=",
//! )?;
//! let price = decrypt_price(
//!     keys.integrity.as_bytes(),
//!     keys.encryption.as_bytes(),
//!     "YWJjMTIzZGVmNDU2Z2hpN7fhCuPemCAWJRxOgA",
//! )?;
//! assert_eq!(price, 1900);
//! # Ok(())
//! # }
//! ```

pub mod crypto;
pub mod error;
pub mod keys;
pub mod price;

pub use crypto::{ENCODED_PRICE_LEN, IV_LEN, PRICE_LEN, TAG_LEN, WIRE_LEN};
pub use error::{KeyError, PriceError};
pub use keys::{parse_keys, KeyMaterial, PriceKeys};
pub use price::{decrypt_price, encrypt_price, encrypt_price_with_iv};
