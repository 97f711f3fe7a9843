// secp256k1 (SEC 2, section 2.4.1) : y^2 = x^3 + 7 over GF(p)
// p = 2^256 - 2^32 - 977
// Curve prime order (hex): 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
// Curve cofactor: 1

use num_bigint::BigUint;
use num_traits::Zero;
use std::sync::LazyLock;

// Constants are little-endian u64 limbs.
const FIELD_MODULUS: [u64; 4] = [
    0xfffffffefffffc2f,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];

const GROUP_ORDER: [u64; 4] = [
    0xbfd25e8cd0364141,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];

const CURVE_B: u64 = 7;

/// Domain parameters of secp256k1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Field prime.
    pub p: BigUint,
    /// Order of the group generated by `G`.
    pub n: BigUint,
    /// Constant term of the curve equation.
    pub b: BigUint,
}

impl CurveParams {
    /// Width in bytes of a serialized field element.
    pub const BYTE_LEN: usize = 32;

    fn secp256k1() -> Self {
        CurveParams {
            p: from_limbs(&FIELD_MODULUS),
            n: from_limbs(&GROUP_ORDER),
            b: BigUint::from(CURVE_B),
        }
    }
}

/// Process-wide secp256k1 parameters, built on first access.
pub static SECP256K1: LazyLock<CurveParams> = LazyLock::new(CurveParams::secp256k1);

fn from_limbs(limbs: &[u64; 4]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &limb| (acc << 64u32) | BigUint::from(limb))
}
