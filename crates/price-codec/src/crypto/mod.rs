//! HMAC-SHA1 masking and tagging primitives.
//!
//! This module is intentionally free of framing and base64 concerns. It
//! provides the pad, mask, and tag operations composed by the price codec.
//!
//! # Wire format
//!
//! ```text
//! {initialization vector (16 bytes)}{masked price (8 bytes)}{integrity tag (4 bytes)}
//! ```
//!
//! All field widths are fixed by the exchange protocol and are not
//! configurable.

pub(crate) mod pad;
pub(crate) mod tag;

/// Byte length of the initialization vector.
pub const IV_LEN: usize = 16;

/// Byte length of the big-endian price field.
pub const PRICE_LEN: usize = 8;

/// Byte length of the truncated integrity tag.
pub const TAG_LEN: usize = 4;

/// Byte length of the binary wire buffer: IV, masked price, then tag.
pub const WIRE_LEN: usize = IV_LEN + PRICE_LEN + TAG_LEN;

/// Character length of the unpadded base64 form of a wire buffer.
pub const ENCODED_PRICE_LEN: usize = 38;
