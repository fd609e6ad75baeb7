use smol_str::SmolStr;

/// The 62-character alphabet used by generated identifiers, in encoding
/// order: digits, then lowercase, then uppercase.
///
/// The ordering is part of the persisted format. Every identifier ever
/// issued is a positional number in this base, and it matches the
/// `base62` crate's *alternative* alphabet, which is what [`encode_base62`]
/// delegates to.
pub const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes a non-negative integer as a base-62 string.
///
/// The result is the natural positional representation: no padding and no
/// fixed width, so distinct inputs always produce distinct strings. Zero
/// encodes to `"0"`.
pub fn encode_base62(value: impl Into<u128>) -> SmolStr {
    SmolStr::new(base62::encode_alternative(value))
}
