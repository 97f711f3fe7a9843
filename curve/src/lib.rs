//! secp256k1 for the Schnorr signature crate.
//!
//! Group arithmetic (point addition, doubling, scalar multiplication) and
//! the Jacobi symbol are delegated to `k256`. This crate wraps those in
//! the small set of types the protocol needs: canonical field elements,
//! scalars, affine points, fixed-width byte conversion and the curve
//! parameters in [`SECP256K1`].

mod affine;
mod basefield;
mod bytes;
mod params;
mod scalarfield;

pub use affine::Affine;
pub use basefield::BaseField;
pub use bytes::{from_bytes32, to_bytes32};
pub use num_bigint::BigUint;
pub use params::{CurveParams, SECP256K1};
pub use scalarfield::ScalarField;
