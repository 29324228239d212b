//! End-to-end price encryption and decryption.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use tracing::debug;

use crate::crypto::pad::{derive_pad, mask_price};
use crate::crypto::tag::{compute_tag, verify_tag};
use crate::crypto::{ENCODED_PRICE_LEN, IV_LEN, PRICE_LEN, TAG_LEN, WIRE_LEN};
use crate::error::PriceError;

/// Encrypt `price` under a fresh random initialization vector.
///
/// A new 16-byte IV is drawn from the OS CSPRNG on every call, so encrypting
/// the same price twice yields different strings. Use
/// [`encrypt_price_with_iv`] when the IV must be fixed (interop vectors,
/// deterministic tests).
///
/// # Errors
///
/// Returns [`PriceError::EmptyKey`] if either key is empty.
pub fn encrypt_price(ic_key: &[u8], ec_key: &[u8], price: u64) -> Result<String, PriceError> {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    encrypt_price_with_iv(ic_key, ec_key, &iv, price)
}

/// Encrypt `price` under a caller-supplied initialization vector.
///
/// The encrypting party is responsible for IV freshness: reusing an IV
/// under the same encryption key reuses the masking pad.
///
/// # Errors
///
/// Returns [`PriceError::EmptyKey`] if either key is empty, or
/// [`PriceError::InvalidIvLength`] if `iv` is not exactly [`IV_LEN`] bytes.
/// The operation has no other failure path.
pub fn encrypt_price_with_iv(
    ic_key: &[u8],
    ec_key: &[u8],
    iv: &[u8],
    price: u64,
) -> Result<String, PriceError> {
    if ic_key.is_empty() || ec_key.is_empty() {
        return Err(PriceError::EmptyKey);
    }
    let iv: &[u8; IV_LEN] = iv
        .try_into()
        .map_err(|_| PriceError::InvalidIvLength { got: iv.len() })?;

    let price_bytes = price.to_be_bytes();
    let pad = derive_pad(ec_key, iv);
    let masked = mask_price(price_bytes, &pad);
    let tag = compute_tag(ic_key, &price_bytes, iv);

    let mut wire = [0u8; WIRE_LEN];
    wire[..IV_LEN].copy_from_slice(iv);
    wire[IV_LEN..IV_LEN + PRICE_LEN].copy_from_slice(&masked);
    wire[IV_LEN + PRICE_LEN..].copy_from_slice(&tag);

    Ok(URL_SAFE_NO_PAD.encode(wire))
}

/// Decrypt an encoded price string back to the winning price.
///
/// `encoded` is the 38-character unpadded URL-safe base64 form of the
/// 28-byte wire buffer. Each failure is terminal for this attempt; the codec
/// never retries and never substitutes a default.
///
/// # Errors
///
/// - [`PriceError::EmptyKey`] if either key is empty.
/// - [`PriceError::WrongEncodedLength`] if `encoded` is not 38 characters
///   (checked before any decoding).
/// - [`PriceError::Base64`] if the string is not valid unpadded URL-safe
///   base64.
/// - [`PriceError::WrongDecodedLength`] if the decoded buffer is not
///   28 bytes.
/// - [`PriceError::Integrity`] if the tag does not verify. Wrong key pair
///   and altered payload are deliberately indistinguishable.
pub fn decrypt_price(ic_key: &[u8], ec_key: &[u8], encoded: &str) -> Result<u64, PriceError> {
    if ic_key.is_empty() || ec_key.is_empty() {
        return Err(PriceError::EmptyKey);
    }

    if encoded.len() != ENCODED_PRICE_LEN {
        debug!(got = encoded.len(), "rejecting encoded price: unexpected length");
        return Err(PriceError::WrongEncodedLength { got: encoded.len() });
    }

    let decoded = URL_SAFE_NO_PAD.decode(encoded).map_err(|e| {
        debug!(error = %e, "rejecting encoded price: invalid base64");
        PriceError::Base64(e)
    })?;
    let wire: &[u8; WIRE_LEN] = decoded
        .as_slice()
        .try_into()
        .map_err(|_| PriceError::WrongDecodedLength { got: decoded.len() })?;

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&wire[..IV_LEN]);
    let mut masked = [0u8; PRICE_LEN];
    masked.copy_from_slice(&wire[IV_LEN..IV_LEN + PRICE_LEN]);
    let mut wire_tag = [0u8; TAG_LEN];
    wire_tag.copy_from_slice(&wire[IV_LEN + PRICE_LEN..]);

    let pad = derive_pad(ec_key, &iv);
    let price_bytes = mask_price(masked, &pad);

    if !verify_tag(ic_key, &price_bytes, &iv, &wire_tag) {
        // The log may say more than the returned error: callers only ever
        // see the opaque integrity failure.
        debug!("rejecting encoded price: tag mismatch (wrong key pair or altered payload)");
        return Err(PriceError::Integrity);
    }

    Ok(u64::from_be_bytes(price_bytes))
}
