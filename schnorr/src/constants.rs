//! Constants used in the Schnorr signature scheme implementation.

/// Size of a serialized public verifying key in bytes.
///
/// A verifying key is a SEC1 compressed secp256k1 point: one tag byte
/// followed by the 32-byte big-endian x-coordinate.
pub const PK_SIZE: usize = 33;

/// Size of a serialized secret signing key in bytes.
///
/// A signing key is a scalar in `[1, n-1]`, encoded big-endian.
pub const SK_SIZE: usize = 32;

/// Size of a message in bytes.
///
/// Messages are digests computed by the caller and are signed as-is.
pub const MSG_SIZE: usize = 32;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - The x-coordinate of the nonce point R (32 bytes)
/// - A scalar s (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = 64;

/// Width of a single field element or scalar encoding.
pub(crate) const FIELD_SIZE: usize = 32;

/// Compressed-point tag for an even y-coordinate.
pub(crate) const TAG_EVEN: u8 = 0x02;

/// Compressed-point tag for an odd y-coordinate.
pub(crate) const TAG_ODD: u8 = 0x03;
