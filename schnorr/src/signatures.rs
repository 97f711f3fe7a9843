//! Signature type for the Schnorr signature scheme.

use curve::{BaseField, ScalarField};
use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_SIZE, SIG_SIZE};
use crate::errors::SchnorrError;

/// A Schnorr signature consisting of the x-coordinate of the nonce point
/// and a scalar.
///
/// The signature is a pair `(r, s)` where:
/// - `r` is the x-coordinate of the commitment point `R`, whose
///   y-coordinate is always a quadratic residue
/// - `s` is a scalar in the scalar field (the response)
///
/// # Structure
///
/// The signature satisfies `R = G * s - P * e` with `x(R) == r`, where
/// `e = H(r || P || m)` is the Fiat-Shamir challenge.
///
/// The wire form is `r || s`, each 32 bytes big-endian.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Signature {
    /// The x-coordinate of the commitment point R = G * k
    pub r: BaseField,
    /// The response scalar s = k + e * sk, where sk is the signing key
    pub s: ScalarField,
}

impl Signature {
    /// Parses a 64-byte signature.
    ///
    /// Fails if the input is not 64 bytes, if `r >= p` or if `s >= n`, in
    /// that order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        if bytes.len() != SIG_SIZE {
            return Err(SchnorrError::InvalidSignatureLength {
                expected: SIG_SIZE,
                actual: bytes.len(),
            });
        }

        let (r_bytes, s_bytes) = bytes.split_at(FIELD_SIZE);
        let r = BaseField::from_bytes(r_bytes).ok_or(SchnorrError::ROutOfRange)?;
        let s = ScalarField::from_bytes(s_bytes).ok_or(SchnorrError::SOutOfRange)?;

        Ok(Signature { r, s })
    }

    /// Serializes the signature as `r || s`.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..FIELD_SIZE].copy_from_slice(&self.r.to_bytes());
        out[FIELD_SIZE..].copy_from_slice(&self.s.to_bytes());
        out
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = SchnorrError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Signature::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for Signature {
    type Error = SchnorrError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Signature::from_bytes(&bytes)
    }
}

impl From<Signature> for Vec<u8> {
    fn from(sig: Signature) -> Self {
        sig.to_bytes().to_vec()
    }
}

impl From<&Signature> for [u8; SIG_SIZE] {
    fn from(sig: &Signature) -> Self {
        sig.to_bytes()
    }
}
