//! BIP-Schnorr signatures over secp256k1.
//!
//! This library implements the Schnorr signature scheme of the first
//! BIP-Schnorr proposal:
//! - The secp256k1 elliptic curve
//! - SHA-256 for the deterministic nonce and the Fiat-Shamir challenge
//! - 33-byte SEC1 compressed public keys
//! - 64-byte signatures `x(R) || s`
//! - 32-byte messages, which are digests computed by the caller
//!
//! # Overview
//!
//! Signing is deterministic: the nonce is `H(sk || m) mod n`, negated when
//! needed so that the y-coordinate of `R = G * k` is a quadratic residue.
//! Only `x(R)` is transmitted, and the verifier recovers `R = G * s - P * e`
//! and checks both its x-coordinate and the residuosity of its
//! y-coordinate.
//!
//! # Example
//!
//! ```
//! use schnorr::{SigningKey, VerifyingKey, Signature};
//!
//! // Load a signing key from its 32-byte encoding
//! let mut secret = [0u8; 32];
//! secret[31] = 3;
//! let signing_key = SigningKey::from_bytes(&secret).expect("in range");
//!
//! // Derive the corresponding verifying key
//! let verifying_key = signing_key.verifying_key();
//!
//! // Messages are 32-byte digests
//! let message = [0x5au8; 32];
//!
//! // Sign the message
//! let signature = signing_key.sign(&message).expect("signing failed");
//!
//! // Verify the signature through the byte-level interface
//! let valid = schnorr::verify(&verifying_key.to_bytes(), &message, &signature.to_bytes())
//!     .expect("well-formed inputs");
//! assert!(valid);
//!
//! // Or through the typed interface
//! let signature = Signature::from_bytes(&signature.to_bytes()).expect("well formed");
//! let verifying_key = VerifyingKey::from_bytes(&verifying_key.to_bytes()).expect("on curve");
//! assert_eq!(verifying_key.verify(&message, &signature), Ok(true));
//! ```
//!
//! # Security Considerations
//!
//! - Messages must already be cryptographic digests; they are never hashed
//!   again
//! - Signatures are reproducible for a fixed key and message
//! - Protect the signing key from unauthorized access

mod challenge;
mod constants;
mod errors;
mod keys;
mod point_codec;
mod signatures;


pub use constants::{MSG_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
pub use curve::BigUint;
pub use errors::{ErrorKind, PointDecodeError, SchnorrError};
pub use keys::{SigningKey, VerifyingKey, sign, verify};
pub use point_codec::{decode_point, encode_point};
pub use signatures::Signature;
