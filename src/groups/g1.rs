//! This creates the specific instance of G1 for BN254. Namely,
//! $\mathbb{G}_1=(r)E(\mathbb{F}_p)=E(\mathbb{F}_p)$, where we take advantage of the fact that
//! for BN254's G1, the r-torsion in the base field is the entire curve itself. There are
//! therefore no subgroup checks needed for membership in G1 other than the point being on the
//! curve itself.
//!
//! The curve also has a generator (1,2), which is used to create points on the curve from a scalar
//! value.

use crate::fields::fp::{FieldExtensionTrait, Fp, Fr};
use crate::groups::group::{GroupAffine, GroupError, GroupProjective, GroupTrait};
use crate::params::{Bn254, CurveParameters};
use crypto_bigint::{rand_core::CryptoRngCore, U256};
use num_traits::Zero;
use subtle::{Choice, ConstantTimeEq};

/// type alias for affine representation on base field
pub type G1Affine = GroupAffine<1, 1, Fp>;
/// type alias for projective representation on base field
pub type G1Projective = GroupProjective<1, 1, Fp>;

/// A primitive cube root of unity in the base field. $(x, y) \mapsto (\beta x, y)$ is then an
/// automorphism of the curve, acting on G1 as multiplication by a cube root of unity mod r.
const BETA: Fp = Fp::new(U256::from_words([
    0x5763473177fffffe,
    0xd4f263f1acdb5c4f,
    0x59e26bcea0d48bac,
    0x0,
]));

impl GroupTrait<1, 1, Fp> for G1Affine {
    fn generator() -> Self {
        Self {
            x: Fp::ONE,
            y: Fp::TWO,
            infinity: Choice::from(0u8),
        }
    }
    fn endomorphism(&self) -> Self {
        Self {
            x: self.x * BETA,
            y: self.y,
            infinity: self.infinity,
        }
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from(G1Projective::rand(rng))
    }
}

impl G1Affine {
    /// Instantiate a new element in affine coordinates in G1. The input values must simply pass
    /// the curve check, since the r-torsion of the curve on the base field is the entire curve
    /// and therefore no subgroup check is required in G1.
    /// # Arguments
    /// * `v` - a tuple of field elements that represent the x and y coordinates of the point
    /// ```
    /// use optimal_ate::*;
    /// let generator = G1Affine::new([Fp::ONE, Fp::TWO]);
    /// assert!(generator.is_ok());
    /// ```
    pub fn new(v: [Fp; 2]) -> Result<Self, GroupError> {
        let is_on_curve = {
            let y2 = v[1].square();
            let x2 = v[0].square();
            let lhs = y2 - (x2 * v[0]);
            let rhs = Bn254::G1_COEFF_B;
            lhs.ct_eq(&rhs)
        };

        // every point in G1 on the curve is in the r-torsion of BN254,
        // so we don't need to check for subgroup membership
        tracing::debug!(?is_on_curve, "G1Affine::new");
        match bool::from(is_on_curve) {
            true => Ok(Self {
                x: v[0],
                y: v[1],
                infinity: Choice::from(0u8),
            }),
            false => Err(GroupError::NotOnCurve),
        }
    }
}

impl GroupTrait<1, 1, Fp> for G1Projective {
    fn generator() -> Self {
        Self::from(G1Affine::generator())
    }
    fn endomorphism(&self) -> Self {
        Self {
            x: self.x * BETA,
            y: self.y,
            z: self.z,
        }
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::generator() * <Fr as FieldExtensionTrait<1, 1>>::rand(rng)
    }
}

impl G1Projective {
    /// Instantiate a new element in projective coordinates in G1. The input values must simply
    /// pass the curve check $Y^2 Z = X^3 + b Z^3$, since the r-torsion of the curve on the base
    /// field is the entire curve. Any triple with $Z = 0$ is accepted as the point at infinity.
    /// # Arguments
    /// * `v` - a tuple of field elements that represent the x, y, and z coordinates of the point
    /// ```
    /// use optimal_ate::*;
    /// let generator = G1Projective::new([Fp::ONE, Fp::TWO, Fp::ONE]);
    /// assert!(generator.is_ok());
    /// ```
    pub fn new(v: [Fp; 3]) -> Result<Self, GroupError> {
        let is_on_curve = {
            let y2 = v[1].square();
            let x2 = v[0].square();
            let z2 = v[2].square();
            let lhs = y2 * v[2];
            let rhs = x2 * v[0] + z2 * v[2] * Bn254::G1_COEFF_B;
            lhs.ct_eq(&rhs) | Choice::from(v[2].is_zero() as u8)
        };
        tracing::debug!(?is_on_curve, "G1Projective::new");
        match bool::from(is_on_curve) {
            true => Ok(Self {
                x: v[0],
                y: v[1],
                z: v[2],
            }),
            false => Err(GroupError::NotOnCurve),
        }
    }
}
