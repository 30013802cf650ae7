//! This creates a specific instance of G2 for BN254. Namely,
//! $\mathbb{G}_2=(r)E^\prime(\mathbb{F}_{p^2})$, on the sextic twist
//! $E^\prime: y^2 = x^3 + 3/(9+u)$. In this case, the prime order subgroup we wish to deal
//! with is NOT the curve itself, and the twist has a large cofactor. Accepting a point outside
//! of the r-torsion would void every guarantee the pairing gives, so all public constructors
//! here implement the subgroup check.
//!
//! The check, and the pairing precomputation, both rely on the endomorphism $\psi$ below.

use crate::fields::fp::{FieldExtensionTrait, Fp, Fr};
use crate::fields::fp2::Fp2;
use crate::groups::group::{GroupAffine, GroupError, GroupProjective, GroupTrait};
use crate::params::{Bn254, CurveParameters};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::U256;
use num_traits::{One, Zero};
use subtle::{Choice, ConstantTimeEq};

pub type G2Affine = GroupAffine<2, 2, Fp2>;
pub type G2Projective = GroupProjective<2, 2, Fp2>;

/// $6z^2$ for $z = 4965661367192848881$, the eigenvalue of $\psi$ on the r-torsion
const SIX_Z_SQUARED: u128 = 147946756881789318990833708069417712966;

// x = (10857046999023057135944570762232829481370756359578518086990519993285655852781,
//      11559732032986387107991004021392285783925812861821192530917403151452391805634)
const G2_X: Fp2 = Fp2::new(&[
    Fp::new(U256::from_words([
        0x46debd5cd992f6ed,
        0x674322d4f75edadd,
        0x426a00665e5c4479,
        0x1800deef121f1e76,
    ])),
    Fp::new(U256::from_words([
        0x97e485b7aef312c2,
        0xf1aa493335a9e712,
        0x7260bfb731fb5d25,
        0x198e9393920d483a,
    ])),
]);
// y = (13392588948715843804641432497768002650278120570034223513918757245338268106653,
//      17805874995975841540914202342111839520379459829704422454583296818431106115052)
const G2_Y: Fp2 = Fp2::new(&[
    Fp::new(U256::from_words([
        0xef39c01571827f9d,
        0xb3af83285c2df711,
        0x6da4d435f3b617cd,
        0x1d9befcd05a5323e,
    ])),
    Fp::new(U256::from_words([
        0xe673b13a075a65ec,
        0xdb36395df7be3b99,
        0xcbb1ac09187524c7,
        0x275dc4a288d1afb3,
    ])),
]);

impl GroupTrait<2, 2, Fp2> for G2Affine {
    /// the standard generator of the r-torsion of the twist
    fn generator() -> Self {
        Self {
            x: G2_X,
            y: G2_Y,
            infinity: Choice::from(0u8),
        }
    }
    /// This is the "untwist-Frobenius-twist" endomorphism, ψ(q) = u o π o u⁻¹ where u:E'→E is
    /// the isomorphism from the twist to the curve E and π is the Frobenius map. It can be
    /// decomposed as follows:
    /// 1. untwist:      the map u⁻¹ that takes (x', y') |-> (w^2 x', w^3 y'), where
    ///                  $w\in\mathbb{F}_{p^{12}}$ is a root of $X^6-\xi$. This lands in
    ///                  $E(\mathbb{F}_{p^{12}})$.
    /// 2. Frobenius:    raise both coordinates to the p-th power, which is an endomorphism of
    ///                  E since E is defined over the base field.
    /// 3. twist:        map back to the twist with u.
    ///
    /// All of this fancy stuff equates simply, and remarkably, to the following:
    /// (x,y) |-> (x^p * \xi^((p-1)/3), y^p*\xi^((p-1)/2))
    fn endomorphism(&self) -> Self {
        Self {
            x: <Fp2 as FieldExtensionTrait<2, 2>>::frobenius(&self.x, 1) * Bn254::TWIST_MUL_BY_Q_X,
            y: <Fp2 as FieldExtensionTrait<2, 2>>::frobenius(&self.y, 1) * Bn254::TWIST_MUL_BY_Q_Y,
            infinity: self.infinity,
        }
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from(G2Projective::rand(rng))
    }
}

impl GroupTrait<2, 2, Fp2> for G2Projective {
    fn generator() -> Self {
        Self::from(G2Affine::generator())
    }
    fn endomorphism(&self) -> Self {
        self.mul_by_q(Bn254::TWIST_MUL_BY_Q_X, Bn254::TWIST_MUL_BY_Q_Y)
    }
    /// The generator spans the r-torsion, so a random multiple of it is a uniformly random
    /// element of $\mathbb{G}_2$ and no cofactor clearing is needed.
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::generator() * <Fr as FieldExtensionTrait<1, 1>>::rand(rng)
    }
}

impl G2Projective {
    /// The public entrypoint to making a value in $\mathbb{G}_2$. This takes the (x,y,z) values
    /// from the user, and passes them through a curve and subgroup check to ensure validity.
    /// Values returned from this function are guaranteed to be on the curve and in the
    /// r-torsion.
    pub fn new(v: [Fp2; 3]) -> Result<Self, GroupError> {
        let candidate = Self {
            x: v[0],
            y: v[1],
            z: v[2],
        };
        let is_on_curve = {
            let y2 = <Fp2 as FieldExtensionTrait<2, 2>>::square(&v[1]);
            let x2 = <Fp2 as FieldExtensionTrait<2, 2>>::square(&v[0]);
            let z2 = <Fp2 as FieldExtensionTrait<2, 2>>::square(&v[2]);
            let lhs = y2 * v[2];
            let rhs = x2 * v[0] + z2 * v[2] * Bn254::TWIST_COEFF_B;
            lhs.ct_eq(&rhs) | Choice::from(v[2].is_zero() as u8)
        };
        tracing::debug!(?is_on_curve, "G2Projective::new");
        if !bool::from(is_on_curve) {
            return Err(GroupError::NotOnCurve);
        }
        let is_torsion_free = candidate.is_torsion_free();
        tracing::debug!(?is_torsion_free, "G2Projective::new");
        match bool::from(is_torsion_free) {
            true => Ok(candidate),
            false => Err(GroupError::NotInSubgroup),
        }
    }
    /// In a naïve approach, in order to check for validity in the r-torsion, one could simply
    /// verify the r-torsion condition: $(r)Q = \mathcal{O}$. This can be prohibitively
    /// expensive because of the bit length of $r$. We instead use the result of Ref (1) below:
    /// a point is in the subgroup iff $\psi(Q) = [6z^2]Q$, with a 128 bit scalar.
    ///
    /// References
    /// ----------
    /// 1. <https://eprint.iacr.org/2022/352.pdf>
    fn is_torsion_free(&self) -> Choice {
        let lhs = self.endomorphism();
        let rhs = self * &SIX_Z_SQUARED.to_le_bytes()[..];
        lhs.ct_eq(&rhs)
    }
}

impl G2Affine {
    /// Affine counterpart of [`G2Projective::new`], with the same guarantees.
    pub fn new(v: [Fp2; 2]) -> Result<Self, GroupError> {
        G2Projective::new([v[0], v[1], Fp2::one()]).map(Self::from)
    }
}
