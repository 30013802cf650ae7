//! Curve configuration for the pairing engine. Every constant the Miller loop and the final
//! exponentiation consume is an associated `const` of a zero sized type implementing
//! [`CurveParameters`], together with the field types those constants live in. The engine in
//! `pairing.rs` is written once against the trait, and BN254 is its only instance.
//!
//! All multi-word integers (the loop count and the curve parameter $z$) are little endian
//! `u64` limbs, and are walked from their most significant set bit.

use crate::fields::fp::{FieldExtensionTrait, Fp};
use crate::fields::fp12::{Fp12, PairingField};
use crate::fields::fp2::Fp2;
use crypto_bigint::U256;
use std::ops::Mul;

pub trait CurveParameters: Copy + Clone + std::fmt::Debug + Send + Sync + 'static {
    /// base field of the curve, home of $\mathbb{G}_1$
    type Fp: FieldExtensionTrait<1, 1>;
    /// field of definition of the sextic twist, home of $\mathbb{G}_2$
    type Fp2: FieldExtensionTrait<2, 2> + Mul<Self::Fp, Output = Self::Fp2>;
    /// top of the tower, home of the pairing values
    type Fp12: PairingField<Self::Fp2>;

    /// $b$ in $y^2 = x^3 + b$
    const G1_COEFF_B: Self::Fp;
    /// the element the twist divides by, $\xi$ for a D-type twist
    const TWIST: Self::Fp2;
    /// $b / \xi$, the constant of the twisted curve
    const TWIST_COEFF_B: Self::Fp2;
    /// $\xi^{(p-1)/3}$, the x-coefficient of the untwist-Frobenius-twist map
    const TWIST_MUL_BY_Q_X: Self::Fp2;
    /// $\xi^{(p-1)/2}$, the y-coefficient of the untwist-Frobenius-twist map
    const TWIST_MUL_BY_Q_Y: Self::Fp2;
    /// $2^{-1} \bmod p$
    const TWO_INV: Self::Fp;
    /// $|6z + 2|$, the optimal ate loop count
    const ATE_LOOP_COUNT: &'static [u64];
    const ATE_IS_LOOP_COUNT_NEG: bool;
    /// $|z|$, the parameter the BN family is indexed by
    const FINAL_EXPONENT_Z: &'static [u64];
    const FINAL_EXPONENT_IS_Z_NEG: bool;
}

/// BN254, also known as alt-bn128, with $z = 4965661367192848881$.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bn254;

impl CurveParameters for Bn254 {
    type Fp = Fp;
    type Fp2 = Fp2;
    type Fp12 = Fp12;

    const G1_COEFF_B: Fp = Fp::THREE;
    const TWIST: Fp2 = Fp2::new(&[Fp::NINE, Fp::ONE]);
    const TWIST_COEFF_B: Fp2 = Fp2::new(&[
        Fp::new(U256::from_words([
            0x3267e6dc24a138e5,
            0xb5b4c5e559dbefa3,
            0x81be18991be06ac3,
            0x2b149d40ceb8aaae,
        ])),
        Fp::new(U256::from_words([
            0xe4a2bd0685c315d2,
            0xa74fa084e52d1852,
            0xcd2cafadeed8fdf4,
            0x009713b03af0fed4,
        ])),
    ]);
    const TWIST_MUL_BY_Q_X: Fp2 = Fp2::new(&[
        Fp::new(U256::from_words([
            0x99e39557176f553d,
            0xb78cc310c2c3330c,
            0x4c0bec3cf559b143,
            0x2fb347984f7911f7,
        ])),
        Fp::new(U256::from_words([
            0x1665d51c640fcba2,
            0x32ae2a1d0b7c9dce,
            0x4ba4cc8bd75a0794,
            0x16c9e55061ebae20,
        ])),
    ]);
    const TWIST_MUL_BY_Q_Y: Fp2 = Fp2::new(&[
        Fp::new(U256::from_words([
            0xdc54014671a0135a,
            0xdbaae0eda9c95998,
            0xdc5ec698b6e2f9b9,
            0x063cf305489af5dc,
        ])),
        Fp::new(U256::from_words([
            0x82d37f632623b0e3,
            0x21807dc98fa25bd2,
            0x0704b5a7ec796f2b,
            0x07c03cbcac41049a,
        ])),
    ]);
    const TWO_INV: Fp = Fp::new(U256::from_words([
        0x9e10460b6c3e7ea4,
        0xcbc0b548b438e546,
        0xdc2822db40c0ac2e,
        0x183227397098d014,
    ]));
    // 29793968203157093288
    const ATE_LOOP_COUNT: &'static [u64] = &[0x9d797039be763ba8, 0x1];
    const ATE_IS_LOOP_COUNT_NEG: bool = false;
    // 4965661367192848881
    const FINAL_EXPONENT_Z: &'static [u64] = &[0x44e992b44a6909f1];
    const FINAL_EXPONENT_IS_Z_NEG: bool = false;
}
