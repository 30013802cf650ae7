//! The dodectic extension of BN254, defined by the tower
//! $\mathbb{F}_{p^{12}} = \mathbb{F}_{p^6}(w) / (w^2 - v)$, so an element is a pair
//! $g + hw$ of sextic elements. Equivalently, it is $\mathbb{F}_{p^2}(w) / (w^6 - \xi)$, and
//! the sparse line products below are written in that flat view:
//!
//! $f = g_0 + h_0 w + g_1 w^2 + h_1 w^3 + g_2 w^4 + h_2 w^5$
//!
//! The names `mul_by_024` and `mul_by_045` count the non-zero coefficients of the line in the
//! storage order $(g_0, g_1, g_2, h_0, h_1, h_2)$.
//!
//! Besides the field operations, this level carries the arithmetic the pairing needs on the
//! cyclotomic subgroup, collected in the [`PairingField`] trait so that the pairing engine can
//! stay generic over the curve.

use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{FieldExtensionTrait, Fp};
use crate::fields::fp2::Fp2;
use crate::fields::fp6::Fp6;
use crypto_bigint::{rand_core::CryptoRngCore, U256};
use num_traits::{Inv, One, Zero};
use std::ops::{Div, DivAssign, Mul, MulAssign};

// FROBENIUS_COEFF_FP12_C1[i] = \xi^{(p^i - 1) / 6}
const FROBENIUS_COEFF_FP12_C1: &[Fp2; 12] = &[
    // Fp2::quadratic_non_residue().pow( ( p^0 - 1) / 6)
    Fp2::new(&[Fp::ONE, Fp::ZERO]),
    // Fp2::quadratic_non_residue().pow( ( p^1 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0xd60b35dadcc9e470,
            0x5c521e08292f2176,
            0xe8b99fdd76e68b60,
            0x1284b71c2865a7df,
        ])),
        Fp::new(U256::from_words([
            0xca5cf05f80f362ac,
            0x747992778eeec7e5,
            0xa6327cfe12150b8e,
            0x246996f3b4fae7e6,
        ])),
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^2 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0xe4bd44e5607cfd49,
            0xc28f069fbb966e3d,
            0x5e6dd9e7e0acccb0,
            0x30644e72e131a029,
        ])),
        Fp::ZERO,
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^3 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0xe86f7d391ed4a67f,
            0x894cb38dbe55d24a,
            0xefe9608cd0acaa90,
            0x19dc81cfcc82e4bb,
        ])),
        Fp::new(U256::from_words([
            0x7694aa2bf4c0c101,
            0x7f03a5e397d439ec,
            0x6cbeee33576139d,
            0xabf8b60be77d73,
        ])),
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^4 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0xe4bd44e5607cfd48,
            0xc28f069fbb966e3d,
            0x5e6dd9e7e0acccb0,
            0x30644e72e131a029,
        ])),
        Fp::ZERO,
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^5 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0x1264475e420ac20f,
            0x2cfa95859526b0d4,
            0x72fc0af59c61f30,
            0x757cab3a41d3cdc,
        ])),
        Fp::new(U256::from_words([
            0xe85845e34c4a5b9c,
            0xa20b7dfd71573c93,
            0x18e9b79ba4e2606c,
            0xca6b035381e35b6,
        ])),
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^6 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0x3c208c16d87cfd46,
            0x97816a916871ca8d,
            0xb85045b68181585d,
            0x30644e72e131a029,
        ])),
        Fp::ZERO,
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^7 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0x6615563bfbb318d7,
            0x3b2f4c893f42a916,
            0xcf96a5d90a9accfd,
            0x1ddf9756b8cbf849,
        ])),
        Fp::new(U256::from_words([
            0x71c39bb757899a9b,
            0x2307d819d98302a7,
            0x121dc8b86f6c4ccf,
            0xbfab77f2c36b843,
        ])),
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^8 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0x5763473177fffffe,
            0xd4f263f1acdb5c4f,
            0x59e26bcea0d48bac,
            0x0,
        ])),
        Fp::ZERO,
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^9 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0x53b10eddb9a856c8,
            0xe34b703aa1bf842,
            0xc866e529b0d4adcd,
            0x1687cca314aebb6d,
        ])),
        Fp::new(U256::from_words([
            0xc58be1eae3bc3c46,
            0x187dc4add09d90a0,
            0xb18456d34c0b44c0,
            0x2fb855bcd54a22b6,
        ])),
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^10 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0x5763473177ffffff,
            0xd4f263f1acdb5c4f,
            0x59e26bcea0d48bac,
            0x0,
        ])),
        Fp::ZERO,
    ]),
    // Fp2::quadratic_non_residue().pow( ( p^11 - 1) / 6)
    Fp2::new(&[
        Fp::new(U256::from_words([
            0x29bc44b896723b38,
            0x6a86d50bd34b19b9,
            0xb120850727bb392d,
            0x290c83bf3d14634d,
        ])),
        Fp::new(U256::from_words([
            0x53c846338c32a1ab,
            0xf575ec93f71a8df9,
            0x9f668e1adc9ef7f0,
            0x23bd9e3da9136a73,
        ])),
    ]),
];
const FP12_QUADRATIC_NON_RESIDUE: Fp12 = Fp12::new(&[
    Fp6::new(&[
        Fp2::new(&[Fp::ZERO, Fp::ZERO]),
        Fp2::new(&[Fp::ZERO, Fp::ZERO]),
        Fp2::new(&[Fp::ZERO, Fp::ZERO]),
    ]),
    Fp6::new(&[
        Fp2::new(&[Fp::ONE, Fp::ZERO]),
        Fp2::new(&[Fp::ZERO, Fp::ZERO]),
        Fp2::new(&[Fp::ZERO, Fp::ZERO]),
    ]),
]);

pub type Fp12 = FieldExtension<12, 2, Fp6>;

/// The operations the optimal ate pairing needs from the top of the tower, beyond those of a
/// field. `F2` is the field the twist is defined over, which is where the line coefficients of
/// the Miller loop live.
///
/// `unitary_inverse`, `cyclotomic_squared`, and `cyclotomic_exp` are only correct on elements
/// of the cyclotomic subgroup, i.e. outputs of the first chunk of the final exponentiation.
pub trait PairingField<F2>: FieldExtensionTrait<12, 2> {
    /// conjugation over the sextic subfield, equal to the inverse on the cyclotomic subgroup
    fn unitary_inverse(&self) -> Self;
    fn cyclotomic_squared(&self) -> Self;
    /// Square and multiply from the most significant set bit of `exponent`, which is given as
    /// little endian 64 bit limbs. Leading zero limbs cost nothing.
    fn cyclotomic_exp(&self, exponent: &[u64]) -> Self {
        let mut res = Self::one();
        let mut found_one = false;
        for limb in exponent.iter().rev() {
            for i in (0..64).rev() {
                if found_one {
                    res = res.cyclotomic_squared();
                }
                if (*limb >> i) & 1 == 1 {
                    found_one = true;
                    res *= *self;
                }
            }
        }
        res
    }
    /// product with the line value $\ell_0 + \ell_{vv} v^2 + \ell_{vw} vw$, the shape of a
    /// line on a D-type twist
    fn mul_by_024(&self, ell_0: F2, ell_vw: F2, ell_vv: F2) -> Self;
    /// product with the line value $\ell_0 + \ell_{vw} vw + \ell_{vv} v^2 w$, the shape of a
    /// line on an M-type twist
    fn mul_by_045(&self, ell_0: F2, ell_vw: F2, ell_vv: F2) -> Self;
}

impl FieldExtensionTrait<12, 2> for Fp12 {
    fn quadratic_non_residue() -> Self {
        FP12_QUADRATIC_NON_RESIDUE
    }
    fn frobenius(&self, exponent: usize) -> Self {
        Self::new(&[
            <Fp6 as FieldExtensionTrait<6, 3>>::frobenius(&self.0[0], exponent),
            <Fp6 as FieldExtensionTrait<6, 3>>::frobenius(&self.0[1], exponent)
                .scale(FROBENIUS_COEFF_FP12_C1[exponent % 12]),
        ])
    }
    fn square(&self) -> Self {
        // For A = a_0 + a_1 w, determine A^2 = (a_0^2 + v a_1^2) + 2 a_0 a_1 w
        // Alg 22 from <https://eprint.iacr.org/2010/354.pdf>
        let c0 = self.0[0] - self.0[1];
        let c3 = self.0[0] - self.0[1].residue_mul();
        let c2 = self.0[0] * self.0[1];
        let c0 = c0 * c3 + c2;
        let c1 = c2 + c2;
        let c2 = c2.residue_mul();
        let c0 = c0 + c2;
        Self::new(&[c0, c1])
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self([
            <Fp6 as FieldExtensionTrait<6, 3>>::rand(rng),
            <Fp6 as FieldExtensionTrait<6, 3>>::rand(rng),
        ])
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    fn mul(self, other: &'b Fp12) -> Self::Output {
        // Karatsuba over the two halves, with w^2 = v
        let t0 = self.0[0] * other.0[0];
        let t1 = self.0[1] * other.0[1];

        Self::Output::new(&[
            t1.residue_mul() + t0,
            (self.0[0] + self.0[1]) * (other.0[0] + other.0[1]) - t0 - t1,
        ])
    }
}
impl Mul for Fp12 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        (&self).mul(&other)
    }
}
impl MulAssign for Fp12 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl Inv for Fp12 {
    type Output = Self;
    // Alg 8 of <https://eprint.iacr.org/2010/354.pdf>
    fn inv(self) -> Self::Output {
        let t = (<Fp6 as FieldExtensionTrait<6, 3>>::square(&self.0[0])
            - <Fp6 as FieldExtensionTrait<6, 3>>::square(&self.0[1]).residue_mul())
        .inv();
        Self([self.0[0] * t, -(self.0[1] * t)])
    }
}
impl One for Fp12 {
    fn one() -> Self {
        Self::new(&[Fp6::one(), Fp6::zero()])
    }
    fn is_one(&self) -> bool {
        self.0[0].is_one() && self.0[1].is_zero()
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for Fp12 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        self * other.inv()
    }
}
impl DivAssign for Fp12 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

/// Algorithm 9 of <https://eprint.iacr.org/2010/354.pdf>. The cyclotomic squaring below views
/// the element as three elements of $\mathbb{F}_{p^4} = \mathbb{F}_{p^2}(s) / (s^2 - \xi)$, and
/// only ever needs to square those. Instead of an explicit quartic type, the two halves are
/// passed and returned as a pair.
fn fp4_square(a: Fp2, b: Fp2) -> (Fp2, Fp2) {
    let t0 = <Fp2 as FieldExtensionTrait<2, 2>>::square(&a);
    let t1 = <Fp2 as FieldExtensionTrait<2, 2>>::square(&b);
    let c0 = t1.residue_mul() + t0;
    let c1 = <Fp2 as FieldExtensionTrait<2, 2>>::square(&(a + b)) - t0 - t1;
    (c0, c1)
}

impl PairingField<Fp2> for Fp12 {
    fn unitary_inverse(&self) -> Self {
        Self::new(&[self.0[0], -self.0[1]])
    }
    /// "Granger-Scott" squaring in the cyclotomic subgroup $G_{\phi_6}$, an implementation of
    /// listing 21 of <https://www.math.u-bordeaux.fr/~damienrobert/csi/book/book.pdf>
    fn cyclotomic_squared(&self) -> Self {
        let mut z0 = self.0[0].0[0];
        let mut z4 = self.0[0].0[1];
        let mut z3 = self.0[0].0[2];
        let mut z2 = self.0[1].0[0];
        let mut z1 = self.0[1].0[1];
        let mut z5 = self.0[1].0[2];

        let (t0, t1) = fp4_square(z0, z1);
        // A
        z0 = t0 - z0;
        z0 = z0 + z0 + t0;
        z1 = t1 + z1;
        z1 = z1 + z1 + t1;

        let (mut t0, t1) = fp4_square(z2, z3);
        let (t2, t3) = fp4_square(z4, z5);
        // C
        z4 = t0 - z4;
        z4 = z4 + z4 + t0;
        z5 = t1 + z5;
        z5 = z5 + z5 + t1;
        // B
        t0 = t3.residue_mul();
        z2 = t0 + z2;
        z2 = z2 + z2 + t0;
        z3 = t2 - z3;
        z3 = z3 + z3 + t2;

        Self::new(&[Fp6::new(&[z0, z4, z3]), Fp6::new(&[z2, z1, z5])])
    }
    /// An amalgamation of Algs 21-25 of <https://eprint.iacr.org/2010/354.pdf>. The product is
    /// written out by hand on the six $\mathbb{F}_{p^2}$ coefficients so that none of the zeros
    /// of the line value are ever multiplied. The line occupies slots 0, 2, 4 of the storage
    /// order, named $x_0, x_2, x_4$ below.
    fn mul_by_024(&self, ell_0: Fp2, ell_vw: Fp2, ell_vv: Fp2) -> Self {
        let z0 = self.0[0].0[0];
        let z1 = self.0[0].0[1];
        let z2 = self.0[0].0[2];
        let z3 = self.0[1].0[0];
        let z4 = self.0[1].0[1];
        let z5 = self.0[1].0[2];

        let x0 = ell_0;
        let x2 = ell_vv;
        let x4 = ell_vw;

        let d0 = z0 * x0;
        let d2 = z2 * x2;
        let d4 = z4 * x4;
        let t2 = z0 + z4;
        let t1 = z0 + z2;
        let s0 = z1 + z3 + z5;

        let s1 = z1 * x2;
        let t3 = s1 + d4;
        let t4 = t3.residue_mul() + d0;
        let z0 = t4;

        let t3 = z5 * x4;
        let s1 = s1 + t3;
        let t3 = t3 + d2;
        let t4 = t3.residue_mul();
        let t3 = z1 * x0;
        let s1 = s1 + t3;
        let t4 = t4 + t3;
        let z1 = t4;

        let t0 = x0 + x2;
        let t3 = t1 * t0 - d0 - d2;
        let t4 = z3 * x4;
        let s1 = s1 + t4;
        let t3 = t3 + t4;

        let t0 = z2 + z4;
        let z2 = t3;

        let t1 = x2 + x4;
        let t3 = t0 * t1 - d2 - d4;
        let t4 = t3.residue_mul();
        let t3 = z3 * x0;
        let s1 = s1 + t3;
        let t4 = t4 + t3;
        let z3 = t4;

        let t3 = z5 * x2;
        let s1 = s1 + t3;
        let t4 = t3.residue_mul();
        let t0 = x0 + x4;
        let t3 = t2 * t0 - d0 - d4;
        let t4 = t4 + t3;
        let z4 = t4;

        let t0 = x0 + x2 + x4;
        let t3 = s0 * t0 - s1;
        let z5 = t3;

        Self::new(&[Fp6::new(&[z0, z1, z2]), Fp6::new(&[z3, z4, z5])])
    }
    /// The line is $b_0 + b_1 w$ with $b_0 = \ell_0$ a constant of the sextic subfield and
    /// $b_1 = \ell_{vw} v + \ell_{vv} v^2$. Karatsuba over the halves then only needs a scaling
    /// for $a_0 b_0$ and a sparse sextic product for $a_1 b_1$.
    fn mul_by_045(&self, ell_0: Fp2, ell_vw: Fp2, ell_vv: Fp2) -> Self {
        let aa = self.0[0].scale(ell_0);
        let bb = self.0[1].mul_by_12(ell_vw, ell_vv);
        let b = Fp6::new(&[ell_0, ell_vw, ell_vv]);
        Self::new(&[
            bb.residue_mul() + aa,
            (self.0[0] + self.0[1]) * b - aa - bb,
        ])
    }
}
