//! SEC1 compressed encoding of secp256k1 points.
//!
//! A point is written as a tag byte, `0x02` for an even y-coordinate or
//! `0x03` for an odd one, followed by the 32-byte big-endian x-coordinate.

use curve::{Affine, BaseField, BigUint, SECP256K1};

use crate::constants::{PK_SIZE, TAG_EVEN, TAG_ODD};
use crate::errors::PointDecodeError;

/// Encodes a curve point in compressed form.
///
/// Returns `None` for the point at infinity, which has no compressed
/// encoding.
pub fn encode_point(point: &Affine) -> Option<[u8; PK_SIZE]> {
    let (x, y) = point.coordinates()?;

    let mut out = [0u8; PK_SIZE];
    out[0] = if y.is_odd() { TAG_ODD } else { TAG_EVEN };
    out[1..].copy_from_slice(&x.to_bytes());
    Some(out)
}

/// Decodes a compressed point, recovering y from the curve equation.
///
/// Checks run in order: the tag must be 2 or 3, the input must be 33
/// bytes, x must be below p, and `x^3 + 7` must be a quadratic residue.
/// An x-coordinate `>= p` is rejected rather than reduced modulo p.
///
/// p ≡ 3 (mod 4), so the candidate root is `(x^3 + 7)^((p+1)/4)`. Of the
/// two square roots, the one whose parity matches the tag is returned.
pub fn decode_point(data: &[u8]) -> Result<Affine, PointDecodeError> {
    let &tag = data
        .first()
        .ok_or(PointDecodeError::InvalidLength(data.len()))?;
    if (tag & !1) != TAG_EVEN {
        return Err(PointDecodeError::InvalidTag(tag));
    }
    if data.len() != PK_SIZE {
        return Err(PointDecodeError::InvalidLength(data.len()));
    }

    let odd = tag == TAG_ODD;
    let x = BaseField::from_bytes(&data[1..]).ok_or(PointDecodeError::CoordinateOutOfRange)?;

    let p = &SECP256K1.p;
    let y_squared = (x.as_biguint().modpow(&BigUint::from(3u32), p) + &SECP256K1.b) % p;
    let y0 = y_squared.modpow(&((p + 1u32) >> 2u32), p);
    if (&y0 * &y0) % p != y_squared {
        return Err(PointDecodeError::NotOnCurve);
    }
    let y = if y0.bit(0) != odd { p - y0 } else { y0 };

    let y = BaseField::from_canonical(y).ok_or(PointDecodeError::NotOnCurve)?;
    Affine::from_coordinates(&x, &y).ok_or(PointDecodeError::NotOnCurve)
}
