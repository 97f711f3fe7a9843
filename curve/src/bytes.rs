//! Fixed-width big-endian encoding of field and scalar values.

use num_bigint::BigUint;

use crate::CurveParams;

/// Encode `value` as exactly 32 big-endian bytes, left-padded with zeros.
///
/// The value must be below 2^256. Every field element and scalar satisfies
/// this.
pub fn to_bytes32(value: &BigUint) -> [u8; CurveParams::BYTE_LEN] {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= CurveParams::BYTE_LEN);

    let mut out = [0u8; CurveParams::BYTE_LEN];
    out[CurveParams::BYTE_LEN - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Interpret a 32-byte big-endian slice as an unsigned integer.
///
/// Callers validate the slice length before calling.
pub fn from_bytes32(bytes: &[u8]) -> BigUint {
    debug_assert_eq!(bytes.len(), CurveParams::BYTE_LEN);
    BigUint::from_bytes_be(bytes)
}
