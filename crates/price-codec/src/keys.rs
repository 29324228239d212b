//! Loading of externally supplied base64-encoded key material.

use base64::Engine;

use crate::error::KeyError;

/// Raw key bytes decoded from an external encoding.
///
/// When this type is dropped, the buffer is overwritten with zeroes to
/// minimise the window during which plaintext key material lives in RAM.
#[derive(Clone)]
pub struct KeyMaterial(Vec<u8>);

impl KeyMaterial {
    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the key in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the key holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for KeyMaterial {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        // Zero the key material on drop.
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("KeyMaterial([REDACTED])")
    }
}

/// The integrity/encryption key pair shared with the exchange.
#[derive(Debug, Clone)]
pub struct PriceKeys {
    /// Key under which the truncated integrity tag is computed.
    pub integrity: KeyMaterial,
    /// Key from which the masking pad is derived.
    pub encryption: KeyMaterial,
}

/// Decode the base64-encoded integrity and encryption keys.
///
/// Key-bearing parties hand keys out in different base64 conventions
/// (standard or URL-safe alphabet, padded or not), so the engine is chosen
/// by the caller rather than hard-coded. The decoded length is not
/// constrained; the scheme fixes no key size.
///
/// # Errors
///
/// Returns [`KeyError::Integrity`] or [`KeyError::Encryption`] wrapping the
/// base64 failure, depending on which input was malformed.
pub fn parse_keys<E: Engine>(
    engine: &E,
    integrity: &str,
    encryption: &str,
) -> Result<PriceKeys, KeyError> {
    let ic = engine.decode(integrity).map_err(KeyError::Integrity)?;
    let ec = engine.decode(encryption).map_err(KeyError::Encryption)?;
    Ok(PriceKeys {
        integrity: KeyMaterial(ic),
        encryption: KeyMaterial(ec),
    })
}
