//! Scalar field of secp256k1, the integers modulo the group order n.

use core::ops::{Add, Mul, Neg};

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar, U256};
use num_bigint::BigUint;

use crate::bytes::to_bytes32;
use crate::params::CurveParams;

/// Scalar mod n, backed by `k256::Scalar`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarField(pub(crate) Scalar);

impl ScalarField {
    pub fn zero() -> Self {
        ScalarField(Scalar::ZERO)
    }

    pub fn one() -> Self {
        ScalarField(Scalar::ONE)
    }

    /// Create a scalar from an integer already in `[0, n)`.
    pub fn from_canonical(value: &BigUint) -> Option<Self> {
        if value.bits() > 8 * CurveParams::BYTE_LEN as u64 {
            return None;
        }
        Self::from_bytes(&to_bytes32(value))
    }

    /// Parse 32 big-endian bytes, rejecting values `>= n`.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let repr: [u8; CurveParams::BYTE_LEN] = bytes.try_into().ok()?;
        Option::from(Scalar::from_repr(FieldBytes::from(repr))).map(ScalarField)
    }

    /// Interpret a 32-byte digest as a big-endian integer and reduce it
    /// modulo n.
    pub fn from_bytes_reduced(bytes: &[u8; CurveParams::BYTE_LEN]) -> Self {
        ScalarField(<Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(*bytes)))
    }

    pub fn to_bytes(&self) -> [u8; CurveParams::BYTE_LEN] {
        self.0.to_bytes().into()
    }

    pub fn is_zero(&self) -> bool {
        bool::from(self.0.is_zero())
    }
}

impl Add for ScalarField {
    type Output = ScalarField;

    fn add(self, rhs: ScalarField) -> ScalarField {
        ScalarField(self.0 + rhs.0)
    }
}

impl Mul<&ScalarField> for ScalarField {
    type Output = ScalarField;

    fn mul(self, rhs: &ScalarField) -> ScalarField {
        ScalarField(self.0 * rhs.0)
    }
}

impl Neg for ScalarField {
    type Output = ScalarField;

    fn neg(self) -> ScalarField {
        ScalarField(-self.0)
    }
}
