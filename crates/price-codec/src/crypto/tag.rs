//! Integrity-tag computation and verification.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::{IV_LEN, PRICE_LEN, TAG_LEN};

type HmacSha1 = Hmac<Sha1>;

// Order is fixed by the exchange protocol: price bytes first, then the IV.
// The MAC input is the plaintext price, not its masked form.
fn tag_mac(ic_key: &[u8], price_bytes: &[u8; PRICE_LEN], iv: &[u8; IV_LEN]) -> HmacSha1 {
    let mut mac = HmacSha1::new_from_slice(ic_key).expect("all key sizes are valid with hmac");
    mac.update(price_bytes);
    mac.update(iv);
    mac
}

/// First [`TAG_LEN`] bytes of `HMAC-SHA1(ic_key, price_bytes || iv)`.
pub(crate) fn compute_tag(
    ic_key: &[u8],
    price_bytes: &[u8; PRICE_LEN],
    iv: &[u8; IV_LEN],
) -> [u8; TAG_LEN] {
    let digest = tag_mac(ic_key, price_bytes, iv).finalize().into_bytes();
    let mut out = [0u8; TAG_LEN];
    out.copy_from_slice(&digest[..TAG_LEN]);
    out
}

/// Recompute the tag and compare it to `wire_tag` in constant time.
pub(crate) fn verify_tag(
    ic_key: &[u8],
    price_bytes: &[u8; PRICE_LEN],
    iv: &[u8; IV_LEN],
    wire_tag: &[u8; TAG_LEN],
) -> bool {
    tag_mac(ic_key, price_bytes, iv)
        .verify_truncated_left(wire_tag)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_computed_tag() {
        let price = 42u64.to_be_bytes();
        let iv = [9u8; IV_LEN];
        let tag = compute_tag(b"integrity", &price, &iv);
        assert!(verify_tag(b"integrity", &price, &iv, &tag));
    }

    #[test]
    fn verify_rejects_altered_tag() {
        let price = 42u64.to_be_bytes();
        let iv = [9u8; IV_LEN];
        let mut tag = compute_tag(b"integrity", &price, &iv);
        tag[0] ^= 0x01;
        assert!(!verify_tag(b"integrity", &price, &iv, &tag));
    }

    #[test]
    fn verify_rejects_other_key() {
        let price = 42u64.to_be_bytes();
        let iv = [9u8; IV_LEN];
        let tag = compute_tag(b"integrity", &price, &iv);
        assert!(!verify_tag(b"other", &price, &iv, &tag));
    }
}
