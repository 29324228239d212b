//! Masking-pad derivation and price masking.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::{IV_LEN, PRICE_LEN};

/// Byte length of the derived pad — one full SHA-1 digest.
///
/// Only the first [`PRICE_LEN`] bytes mask the price; the protocol discards
/// the remaining 12.
pub(crate) const PAD_LEN: usize = 20;

// The mask is drawn from the pad prefix, so the digest must at least cover
// the price field.
const _: () = assert!(PRICE_LEN <= PAD_LEN);

type HmacSha1 = Hmac<Sha1>;

/// Derive the masking pad for one price: `HMAC-SHA1(ec_key, iv)`.
///
/// Deterministic: the same `(key, iv)` pair always yields the same pad,
/// which is what makes encryption and decryption exact inverses.
pub(crate) fn derive_pad(ec_key: &[u8], iv: &[u8; IV_LEN]) -> [u8; PAD_LEN] {
    let mut mac = HmacSha1::new_from_slice(ec_key).expect("all key sizes are valid with hmac");
    mac.update(iv);
    mac.finalize().into_bytes().into()
}

/// XOR the price bytes against the first [`PRICE_LEN`] bytes of the pad.
///
/// Self-inverse: applying it again with the same pad recovers the input.
pub(crate) fn mask_price(bytes: [u8; PRICE_LEN], pad: &[u8; PAD_LEN]) -> [u8; PRICE_LEN] {
    let mut out = [0u8; PRICE_LEN];
    for (i, b) in out.iter_mut().enumerate() {
        *b = bytes[i] ^ pad[i];
    }
    out
}
