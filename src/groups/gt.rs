//! The target group $\mathbb{G}_T$, the order $r$ subgroup of the multiplicative group of
//! $\mathbb{F}_{p^{12}}$ that the reduced pairing lands in. Every element is unitary, so the
//! inverse is the cheap conjugation.
//!
//! To match the other groups, the group law is written additively: `+` is multiplication in
//! $\mathbb{F}_{p^{12}}$, `double` is squaring, and multiplication by a scalar is
//! exponentiation.

use crate::fields::fp::{FieldExtensionTrait, Fp, Fr};
use crate::fields::fp12::{Fp12, PairingField};
use crate::fields::fp2::Fp2;
use crate::fields::fp6::Fp6;
use crate::groups::group::GroupTrait;
use crate::pairing::final_exponentiation;
use crate::params::Bn254;
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::U256;
use num_traits::{One, Zero};
use std::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Do you have vertigo? Then you may want to close your eyes when you scroll by this massive
/// wall of text ...
/// this magic number is `pairing(&G1Projective::generator(), &G2Projective::generator())`
const GT: Fp12 = Fp12::new(&[
    Fp6::new(&[
        Fp2::new(&[
            Fp::new(U256::from_words([
                6782248912058519189,
                17905854633700849845,
                981815359735217878,
                2750332953940282622,
            ])),
            Fp::new(U256::from_words([
                13014616448268208714,
                4142271424844328294,
                728210408904174525,
                207215253209326080,
            ])),
        ]),
        Fp2::new(&[
            Fp::new(U256::from_words([
                5625932731339578848,
                6904745502146605564,
                11939514597710067603,
                1416930562523468429,
            ])),
            Fp::new(U256::from_words([
                12767899052203382315,
                14173989925134591536,
                5418279272259683929,
                291513493445614172,
            ])),
        ]),
        Fp2::new(&[
            Fp::new(U256::from_words([
                17718267794268532699,
                5156438002697560843,
                13706034212316115026,
                791559585771054991,
            ])),
            Fp::new(U256::from_words([
                18000284984309305840,
                15972481252625908291,
                13674726003407472074,
                2041438157648203876,
            ])),
        ]),
    ]),
    Fp6::new(&[
        Fp2::new(&[
            Fp::new(U256::from_words([
                16146305511977440073,
                8923840486853463965,
                10725036265831515652,
                2812566908024882537,
            ])),
            Fp::new(U256::from_words([
                3215137210346885629,
                12525579108889204199,
                1527429076531348627,
                1986219000959923929,
            ])),
        ]),
        Fp2::new(&[
            Fp::new(U256::from_words([
                6661166615720266014,
                4442045042528711213,
                3347341428000788486,
                1343030050544062915,
            ])),
            Fp::new(U256::from_words([
                13938006256747467184,
                4379853097222733425,
                2281055304358135222,
                2670947272091309918,
            ])),
        ]),
        Fp2::new(&[
            Fp::new(U256::from_words([
                11549637632247014948,
                9129749543628779133,
                5458079381699462794,
                2070422863081632221,
            ])),
            Fp::new(U256::from_words([
                18288405127448940720,
                4220586288482205268,
                166160685976673735,
                3416775404926163715,
            ])),
        ]),
    ]),
]);

#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Gt {
    /// Returns the group identity, which is $1$.
    pub fn identity() -> Gt {
        Gt(Fp12::one())
    }
    pub fn is_identity(&self) -> bool {
        self.0.is_one()
    }
    /// Doubles this group element.
    pub fn double(&self) -> Gt {
        Gt(self.0.cyclotomic_squared())
    }
    /// the underlying element of $\mathbb{F}_{p^{12}}$
    pub fn value(&self) -> Fp12 {
        self.0
    }
}

impl<'a> Neg for &'a Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        // The element is unitary, so we just conjugate.
        Gt(self.0.unitary_inverse())
    }
}
impl Neg for Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        -&self
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for Gt {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl Eq for Gt {}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b> Add<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn add(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}
impl Add for Gt {
    type Output = Gt;
    fn add(self, rhs: Gt) -> Gt {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn sub(self, rhs: &'b Gt) -> Gt {
        self + &(-rhs)
    }
}
impl Sub for Gt {
    type Output = Gt;
    fn sub(self, rhs: Gt) -> Gt {
        &self - &rhs
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b> Mul<&'b Fr> for &'a Gt {
    /// This is simply the `double-and-add` algorithm for multiplication, which is the ECC
    /// equivalent of the `square-and-multiply` algorithm used in modular exponentiation.
    ///
    /// <https://en.wikipedia.org/wiki/Elliptic_curve_point_multiplication#Double-and-add>
    type Output = Gt;
    fn mul(self, other: &'b Fr) -> Self::Output {
        let bytes = other.value().to_le_bytes();
        let mut res = Self::Output::identity();
        for byte in bytes.iter().rev() {
            for i in (0..8).rev() {
                res = res.double();
                if (byte >> i) & 1 == 1 {
                    res = &res + self;
                }
            }
        }
        res
    }
}
impl Mul<Fr> for Gt {
    type Output = Self;
    fn mul(self, rhs: Fr) -> Self::Output {
        &self * &rhs
    }
}

impl GroupTrait<12, 2, Fp12> for Gt {
    fn generator() -> Self {
        Self(GT)
    }
    /// The $p$-power Frobenius, which acts on $\mathbb{G}_T$ as multiplication by $p \bmod r$.
    fn endomorphism(&self) -> Self {
        Self(self.0.frobenius(1))
    }
    /// Reduces a random nonzero element of $\mathbb{F}_{p^{12}}$, which lands uniformly in
    /// $\mathbb{G}_T$.
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        loop {
            let inner = Fp12::rand(rng);
            if !inner.is_zero() {
                return Self(final_exponentiation::<Bn254>(&inner));
            }
        }
    }
}
