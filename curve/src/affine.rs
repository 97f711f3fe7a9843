// secp256k1 : y^2 = x^3 + 7 over GF(p), p = 2^256 - 2^32 - 977
// Curve cofactor: 1

use k256::elliptic_curve::group::prime::PrimeCurveAffine;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint};

use crate::basefield::BaseField;
use crate::ScalarField;

/// Affine point on secp256k1, or the point at infinity.
///
/// A thin wrapper over `k256::AffinePoint`. All group operations run in
/// `k256`'s projective representation and normalize once at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine(AffinePoint);

impl Affine {
    /// The point at infinity (identity element).
    pub fn infinity() -> Self {
        Affine(AffinePoint::IDENTITY)
    }

    /// The standard secp256k1 generator.
    pub fn generator() -> Self {
        Affine(AffinePoint::GENERATOR)
    }

    /// Create a point from coordinates, rejecting anything off the curve.
    pub fn from_coordinates(x: &BaseField, y: &BaseField) -> Option<Self> {
        let encoded = EncodedPoint::from_affine_coordinates(
            &FieldBytes::from(x.to_bytes()),
            &FieldBytes::from(y.to_bytes()),
            false,
        );
        Option::from(AffinePoint::from_encoded_point(&encoded)).map(Affine)
    }

    /// The `(x, y)` coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(BaseField, BaseField)> {
        let encoded = self.0.to_encoded_point(false);
        let x = BaseField::from_bytes(encoded.x()?)?;
        let y = BaseField::from_bytes(encoded.y()?)?;
        Some((x, y))
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    /// Negate a point: (x, p - y).
    pub fn negate(&self) -> Self {
        Affine(-self.0)
    }

    /// Multiply the fixed generator.
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        Affine((ProjectivePoint::GENERATOR * scalar.0).to_affine())
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Self) -> Self {
        let sum = ProjectivePoint::GENERATOR * a.0 + ProjectivePoint::from(point.0) * b.0;
        Affine(sum.to_affine())
    }
}
