//! Signing and verifying keys for the Schnorr signature scheme.

use core::fmt;

use curve::{from_bytes32, Affine, BigUint, ScalarField};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::challenge::{challenge_scalar, nonce_scalar};
use crate::constants::{MSG_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
use crate::errors::SchnorrError;
use crate::point_codec::{decode_point, encode_point};
use crate::signatures::Signature;

/// A secret signing key for creating Schnorr signatures.
///
/// The signing key is a scalar in `[1, n-1]`, where n is the order of the
/// secp256k1 group. It must be kept secret and protected from unauthorized
/// access.
///
/// # Example
///
/// ```
/// use schnorr::SigningKey;
///
/// let mut secret = [0u8; 32];
/// secret[31] = 1;
/// let signing_key = SigningKey::from_bytes(&secret).expect("in range");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct SigningKey {
    scalar: ScalarField,
    verifying_key: VerifyingKey,
}

/// A public verifying key for verifying Schnorr signatures.
///
/// The verifying key is the point `G * sk` on secp256k1. It is never the
/// point at infinity. Its wire form is the 33-byte SEC1 compressed point.
///
/// # Example
///
/// ```
/// use schnorr::{SigningKey, VerifyingKey};
///
/// let mut secret = [0u8; 32];
/// secret[31] = 1;
/// let signing_key = SigningKey::from_bytes(&secret).expect("in range");
/// let verifying_key = signing_key.verifying_key();
///
/// let bytes = verifying_key.to_bytes();
/// assert_eq!(VerifyingKey::from_bytes(&bytes), Ok(verifying_key));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct VerifyingKey {
    point: Affine,
    // compressed encoding, hashed into every challenge
    encoded: [u8; PK_SIZE],
}

pub(crate) fn message_array(msg: &[u8]) -> Result<&[u8; MSG_SIZE], SchnorrError> {
    msg.try_into()
        .map_err(|_| SchnorrError::InvalidMessageLength {
            expected: MSG_SIZE,
            actual: msg.len(),
        })
}

impl SigningKey {
    /// Creates a signing key from an integer in `[1, n-1]`.
    ///
    /// Returns [`SchnorrError::PrivateKeyOutOfRange`] for zero and for any
    /// value `>= n`.
    pub fn new(secret: &BigUint) -> Result<Self, SchnorrError> {
        let scalar = ScalarField::from_canonical(secret)
            .filter(|scalar| !scalar.is_zero())
            .ok_or(SchnorrError::PrivateKeyOutOfRange)?;
        let verifying_key = VerifyingKey::from_affine(Affine::mul_generator(&scalar))?;
        Ok(SigningKey {
            scalar,
            verifying_key,
        })
    }

    /// Parses a 32-byte big-endian secret.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        if bytes.len() != SK_SIZE {
            return Err(SchnorrError::InvalidPrivateKeyLength {
                expected: SK_SIZE,
                actual: bytes.len(),
            });
        }
        Self::new(&from_bytes32(bytes))
    }

    /// Serializes the secret as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_bytes()
    }

    /// Returns the public verifying key `G * sk`, computed when the signing
    /// key was created.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key.clone()
    }

    /// Signs a 32-byte message digest using this signing key.
    ///
    /// The signature is computed as follows:
    /// 1. Derive the nonce `k0 = H(sk || msg) mod n`
    /// 2. Compute `R = G * k0`
    /// 3. Let `k = k0` if `y(R)` is a quadratic residue, else `k = n - k0`
    /// 4. Compute challenge `e = H(x(R) || pk || msg)` with `pk` compressed
    /// 5. Compute `s = k + e * sk`
    /// 6. Return signature `(x(R), s)`
    ///
    /// Signing is deterministic: the same key and message always produce
    /// the same signature.
    ///
    /// # Errors
    ///
    /// - [`SchnorrError::InvalidMessageLength`] unless `msg` is 32 bytes
    /// - [`SchnorrError::ZeroNonce`] if the derived nonce is zero
    ///
    /// # Example
    ///
    /// ```
    /// use schnorr::SigningKey;
    ///
    /// let mut secret = [0u8; 32];
    /// secret[31] = 1;
    /// let signing_key = SigningKey::from_bytes(&secret).expect("in range");
    /// let message = [0u8; 32];
    /// let signature = signing_key.sign(&message).expect("signing failed");
    /// assert_eq!(signature, signing_key.sign(&message).expect("signing failed"));
    /// ```
    pub fn sign(&self, msg: &[u8]) -> Result<Signature, SchnorrError> {
        let msg = message_array(msg)?;

        let k0 = nonce_scalar(&self.to_bytes(), msg)?;
        let (r_x, r_y) = Affine::mul_generator(&k0)
            .coordinates()
            .ok_or(SchnorrError::InvalidPoint)?;
        let k = if r_y.jacobi() == 1 { k0 } else { -k0 };

        let e = challenge_scalar(&r_x.to_bytes(), &self.verifying_key.encoded, msg);
        let s = k + e * &self.scalar;

        trace!("signed message {}", hex_prefix(msg));
        Ok(Signature { r: r_x, s })
    }
}

impl VerifyingKey {
    /// Parses a 33-byte compressed public key.
    ///
    /// # Errors
    ///
    /// - [`SchnorrError::InvalidPublicKeyLength`] unless `bytes` is 33 bytes
    /// - [`SchnorrError::InvalidPublicKey`] if the bytes are not a
    ///   compressed curve point
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        let encoded = <[u8; PK_SIZE]>::try_from(bytes).map_err(|_| {
            SchnorrError::InvalidPublicKeyLength {
                expected: PK_SIZE,
                actual: bytes.len(),
            }
        })?;
        let point = decode_point(&encoded)?;
        Ok(VerifyingKey { point, encoded })
    }

    /// Wraps a curve point, rejecting the point at infinity.
    pub fn from_affine(point: Affine) -> Result<Self, SchnorrError> {
        let encoded = encode_point(&point).ok_or(SchnorrError::InvalidPoint)?;
        Ok(VerifyingKey { point, encoded })
    }

    /// Serializes the key as a 33-byte compressed point.
    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.encoded
    }

    pub fn point(&self) -> &Affine {
        &self.point
    }

    /// Verifies a signature on a 32-byte message using this verifying key.
    ///
    /// The verification recovers `R = G * s - pk * e`, where:
    /// - `G` is the curve generator
    /// - `s` is the signature scalar
    /// - `pk` is this verifying key
    /// - `e = H(r || pk || msg)` is the challenge hash
    ///
    /// and accepts only if `R` is finite, `y(R)` is a quadratic residue and
    /// `x(R) == r`. `pk * e` is subtracted by adding `e` times the negated
    /// key point.
    ///
    /// Returns `Ok(true)` for a valid signature and `Ok(false)` when the
    /// signature equation does not hold.
    ///
    /// # Errors
    ///
    /// - [`SchnorrError::InvalidMessageLength`] unless `msg` is 32 bytes
    ///
    /// # Example
    ///
    /// ```
    /// use schnorr::SigningKey;
    ///
    /// let mut secret = [0u8; 32];
    /// secret[31] = 7;
    /// let signing_key = SigningKey::from_bytes(&secret).expect("in range");
    /// let verifying_key = signing_key.verifying_key();
    /// let message = [0x42u8; 32];
    ///
    /// let signature = signing_key.sign(&message).expect("signing failed");
    /// assert_eq!(verifying_key.verify(&message, &signature), Ok(true));
    /// assert_eq!(verifying_key.verify(&[0u8; 32], &signature), Ok(false));
    /// ```
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> Result<bool, SchnorrError> {
        let msg = message_array(msg)?;
        let e = challenge_scalar(&sig.r.to_bytes(), &self.encoded, msg);

        let r = Affine::double_scalar_mul_basepoint(&sig.s, &e, &self.point.negate());

        let Some((r_x, r_y)) = r.coordinates() else {
            debug!("rejecting signature: recovered nonce point is at infinity");
            return Ok(false);
        };
        if r_y.jacobi() != 1 {
            debug!("rejecting signature: y(R) is not a quadratic residue");
            return Ok(false);
        }
        if r_x != sig.r {
            debug!("rejecting signature: x(R) does not match r");
            return Ok(false);
        }

        trace!("verified signature on message {}", hex_prefix(msg));
        Ok(true)
    }
}

/// Signs a 32-byte message with a private key given as an integer.
///
/// Preconditions are checked in order: the message length, then the key
/// range `[1, n-1]`.
///
/// # Example
///
/// ```
/// use schnorr::BigUint;
///
/// let signature = schnorr::sign(&BigUint::from(1u32), &[0u8; 32]).expect("sign");
/// assert_eq!(signature.len(), 64);
/// ```
pub fn sign(private_key: &BigUint, message: &[u8]) -> Result<[u8; SIG_SIZE], SchnorrError> {
    message_array(message)?;
    let signing_key = SigningKey::new(private_key)?;
    Ok(signing_key.sign(message)?.to_bytes())
}

/// Verifies a 64-byte signature of a 32-byte message against a 33-byte
/// compressed public key.
///
/// Returns `Ok(true)` when the signature is valid and `Ok(false)` when it is
/// well formed but does not verify. Input lengths are checked first (public
/// key, message, signature), then the public key is decoded, then `r < p`
/// and `s < n` are enforced before the signature equation is evaluated.
/// Each of those failures is an error.
pub fn verify(
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<bool, SchnorrError> {
    if public_key.len() != PK_SIZE {
        return Err(SchnorrError::InvalidPublicKeyLength {
            expected: PK_SIZE,
            actual: public_key.len(),
        });
    }
    message_array(message)?;
    if signature.len() != SIG_SIZE {
        return Err(SchnorrError::InvalidSignatureLength {
            expected: SIG_SIZE,
            actual: signature.len(),
        });
    }

    let verifying_key = VerifyingKey::from_bytes(public_key)
        .inspect_err(|err| debug!("rejecting signature: {err}"))?;
    let signature =
        Signature::from_bytes(signature).inspect_err(|err| debug!("rejecting signature: {err}"))?;

    verifying_key.verify(message, &signature)
}

fn hex_prefix(msg: &[u8; MSG_SIZE]) -> String {
    hex::encode(&msg[..4])
}

impl From<&SigningKey> for VerifyingKey {
    /// Converts a reference to a signing key into a verifying key.
    ///
    /// This is equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl TryFrom<Vec<u8>> for SigningKey {
    type Error = SchnorrError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        SigningKey::from_bytes(&bytes)
    }
}

impl From<SigningKey> for Vec<u8> {
    fn from(sk: SigningKey) -> Self {
        sk.to_bytes().to_vec()
    }
}

impl TryFrom<Vec<u8>> for VerifyingKey {
    type Error = SchnorrError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        VerifyingKey::from_bytes(&bytes)
    }
}

impl From<VerifyingKey> for Vec<u8> {
    fn from(vk: VerifyingKey) -> Self {
        vk.to_bytes().to_vec()
    }
}
