//! Error types for the Schnorr signature scheme.

use thiserror::Error;

/// Broad classification of [`SchnorrError`] values.
///
/// A signature that is well formed but does not satisfy the verification
/// equation is not an error: verification returns `Ok(false)` for it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input had the wrong byte length.
    InputShape,
    /// A private key, `r` or `s` was outside its numeric range.
    Range,
    /// The derived nonce reduced to zero.
    DegenerateNonce,
    /// Bytes did not describe a usable curve point.
    InvalidPoint,
}

/// Errors that can occur while decoding a compressed point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PointDecodeError {
    /// The tag byte was neither 2 nor 3.
    #[error("unsupported point tag {0:#04x}")]
    InvalidTag(u8),
    /// The encoding was not 33 bytes long.
    #[error("compressed point must be 33 bytes, got {0}")]
    InvalidLength(usize),
    /// The x-coordinate was not below the field prime.
    #[error("x-coordinate is larger than or equal to field size")]
    CoordinateOutOfRange,
    /// `x^3 + 7` has no square root, so no point has this x-coordinate.
    #[error("x-coordinate is not on the curve")]
    NotOnCurve,
}

/// Errors that can occur during signing and verification operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SchnorrError {
    #[error("message must be {expected} bytes, got {actual}")]
    InvalidMessageLength { expected: usize, actual: usize },

    #[error("public key must be {expected} bytes, got {actual}")]
    InvalidPublicKeyLength { expected: usize, actual: usize },

    #[error("signature must be {expected} bytes, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    #[error("private key must be {expected} bytes, got {actual}")]
    InvalidPrivateKeyLength { expected: usize, actual: usize },

    #[error("private key must be an integer in the range 1..n-1")]
    PrivateKeyOutOfRange,

    #[error("r is larger than or equal to field size")]
    ROutOfRange,

    #[error("s is larger than or equal to curve order")]
    SOutOfRange,

    /// The nonce derived from the key and message is zero modulo n.
    ///
    /// Signing with it would reveal the private key, so no signature is
    /// produced. This requires a SHA-256 output that is a multiple of n and
    /// does not occur in practice.
    #[error("derived nonce is zero")]
    ZeroNonce,

    /// The public key bytes do not decode to a curve point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(#[from] PointDecodeError),

    /// A point at infinity or off-curve point was supplied where a valid
    /// curve point was expected.
    #[error("point is not a valid curve point")]
    InvalidPoint,
}

impl SchnorrError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchnorrError::InvalidMessageLength { .. }
            | SchnorrError::InvalidPublicKeyLength { .. }
            | SchnorrError::InvalidSignatureLength { .. }
            | SchnorrError::InvalidPrivateKeyLength { .. } => ErrorKind::InputShape,
            SchnorrError::PrivateKeyOutOfRange
            | SchnorrError::ROutOfRange
            | SchnorrError::SOutOfRange => ErrorKind::Range,
            SchnorrError::ZeroNonce => ErrorKind::DegenerateNonce,
            SchnorrError::InvalidPublicKey(_) | SchnorrError::InvalidPoint => {
                ErrorKind::InvalidPoint
            }
        }
    }
}
