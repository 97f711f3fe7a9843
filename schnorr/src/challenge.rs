//! Nonce and challenge derivation.
//!
//! Both scalars are SHA-256 digests of concatenated byte encodings,
//! interpreted big-endian and reduced modulo the group order.

use curve::ScalarField;
use log::warn;
use sha2::{Digest, Sha256};

use crate::constants::{FIELD_SIZE, MSG_SIZE, PK_SIZE};
use crate::errors::SchnorrError;

/// Derives the deterministic signing nonce `k0 = H(d || m) mod n`.
///
/// Fails with [`SchnorrError::ZeroNonce`] if the reduction is zero.
pub(crate) fn nonce_scalar(
    secret: &[u8; FIELD_SIZE],
    msg: &[u8; MSG_SIZE],
) -> Result<ScalarField, SchnorrError> {
    let digest = Sha256::new().chain_update(secret).chain_update(msg).finalize();
    let k0 = ScalarField::from_bytes_reduced(&digest.into());
    if k0.is_zero() {
        warn!("deterministic nonce reduced to zero, refusing to sign");
        return Err(SchnorrError::ZeroNonce);
    }
    Ok(k0)
}

/// Computes the Fiat-Shamir challenge `e = H(x(R) || P || m) mod n`, where
/// `P` is the compressed public key.
pub(crate) fn challenge_scalar(
    r_x: &[u8; FIELD_SIZE],
    pk: &[u8; PK_SIZE],
    msg: &[u8; MSG_SIZE],
) -> ScalarField {
    let digest = Sha256::new()
        .chain_update(r_x)
        .chain_update(pk)
        .chain_update(msg)
        .finalize();
    ScalarField::from_bytes_reduced(&digest.into())
}
