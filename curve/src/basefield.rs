//! Base field of secp256k1, the integers modulo p.

use k256::{FieldBytes, FieldElement};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::bytes::{from_bytes32, to_bytes32};
use crate::params::{CurveParams, SECP256K1};

/// Field element of GF(p), always held in canonical form `[0, p)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BaseField(BigUint);

impl BaseField {
    /// Create a field element from a value already in `[0, p)`.
    pub fn from_canonical(value: BigUint) -> Option<Self> {
        if value < SECP256K1.p {
            Some(BaseField(value))
        } else {
            None
        }
    }

    /// Parse 32 big-endian bytes, rejecting values `>= p`.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::from_canonical(from_bytes32(bytes))
    }

    pub fn to_bytes(&self) -> [u8; CurveParams::BYTE_LEN] {
        to_bytes32(&self.0)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    /// Jacobi symbol `(self / p)`: 1 for a non-zero quadratic residue, -1
    /// for a non-residue and 0 for zero.
    ///
    /// Residuosity is decided by `k256`'s field square root.
    pub fn jacobi(&self) -> i8 {
        if self.is_zero() {
            return 0;
        }
        let element: Option<FieldElement> =
            FieldElement::from_bytes(&FieldBytes::from(self.to_bytes())).into();
        match element {
            Some(element) if bool::from(element.sqrt().is_some()) => 1,
            _ => -1,
        }
    }
}

impl From<u64> for BaseField {
    fn from(value: u64) -> Self {
        BaseField(BigUint::from(value))
    }
}
