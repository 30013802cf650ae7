//! The quadratic extension of the base field of BN254, defined by the tower
//! $\mathbb{F}_{p^2} = \mathbb{F}_p(u) / (u^2 + 1)$. Elements are represented as $a_0 + a_1 u$.
//!
//! This level also provides multiplication by $\xi = 9 + u$, the non-residue that the sextic
//! extension adjoins a cube root of, since the levels above lean on it constantly.
use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{FieldExtensionTrait, Fp};
use crypto_bigint::rand_core::CryptoRngCore;
use num_traits::{Inv, One, Zero};
use std::ops::{Div, DivAssign, Mul, MulAssign};

pub type Fp2 = FieldExtension<2, 2, Fp>;

const FP2_QUADRATIC_NON_RESIDUE: Fp2 = Fp2::new(&[Fp::NINE, Fp::ONE]);

impl Fp2 {
    /// Multiplication by $\xi = 9 + u$:
    /// $(9 + u)(a + bu) = (9a - b) + (a + 9b)u$
    pub fn residue_mul(&self) -> Self {
        Self([
            self.0[0] * Fp::NINE - self.0[1],
            self.0[0] + self.0[1] * Fp::NINE,
        ])
    }
    /// complex conjugation, which is also the $p$-power Frobenius
    pub fn conjugate(&self) -> Self {
        Self([self.0[0], -self.0[1]])
    }
}

impl FieldExtensionTrait<2, 2> for Fp2 {
    fn quadratic_non_residue() -> Self {
        FP2_QUADRATIC_NON_RESIDUE
    }
    // u^p = -u since p = 3 mod 4, so the map is the identity for even exponents and
    // conjugation otherwise
    fn frobenius(&self, exponent: usize) -> Self {
        match exponent % 2 {
            0 => *self,
            _ => self.conjugate(),
        }
    }
    // (a + bu)^2 = (a + b)(a - b) + 2ab u
    fn square(&self) -> Self {
        let ab = self.0[0] * self.0[1];
        Self([(self.0[0] + self.0[1]) * (self.0[0] - self.0[1]), ab + ab])
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self([
            <Fp as FieldExtensionTrait<1, 1>>::rand(rng),
            <Fp as FieldExtensionTrait<1, 1>>::rand(rng),
        ])
    }
}

impl Mul for Fp2 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        // Karatsuba, see https://eprint.iacr.org/2006/471.pdf, Sec 3.
        // The cross term costs one multiplication, and u^2 = -1 folds t1 into c0.
        let t0 = self.0[0] * other.0[0];
        let t1 = self.0[1] * other.0[1];
        Self([
            t0 - t1,
            (self.0[0] + self.0[1]) * (other.0[0] + other.0[1]) - t0 - t1,
        ])
    }
}
impl MulAssign for Fp2 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl Mul<Fp> for Fp2 {
    type Output = Self;
    fn mul(self, other: Fp) -> Self::Output {
        self.scale(other)
    }
}
impl Inv for Fp2 {
    type Output = Self;
    // (a + bu)^{-1} = (a - bu) / (a^2 + b^2); zero maps to zero
    fn inv(self) -> Self {
        let norm = self.0[0].square() + self.0[1].square();
        let tmp = norm.inv();
        Self([self.0[0] * tmp, -(self.0[1] * tmp)])
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for Fp2 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        self * other.inv()
    }
}
impl DivAssign for Fp2 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}
impl One for Fp2 {
    fn one() -> Self {
        Self::new(&[Fp::ONE, Fp::ZERO])
    }
    fn is_one(&self) -> bool {
        self.0[0].is_one() && self.0[1].is_zero()
    }
}

// make quadratic extension visible to the sextic extension
impl FieldExtensionTrait<6, 3> for Fp2 {
    fn quadratic_non_residue() -> Self {
        <Fp2 as FieldExtensionTrait<2, 2>>::quadratic_non_residue()
    }
    fn frobenius(&self, exponent: usize) -> Self {
        <Fp2 as FieldExtensionTrait<2, 2>>::frobenius(self, exponent)
    }
    fn square(&self) -> Self {
        <Fp2 as FieldExtensionTrait<2, 2>>::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        <Fp2 as FieldExtensionTrait<2, 2>>::rand(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::rand_core::OsRng;

    fn create_field_extension(c0: u64, c1: u64) -> Fp2 {
        Fp2::new(&[Fp::from(c0), Fp::from(c1)])
    }
    fn rand() -> Fp2 {
        <Fp2 as FieldExtensionTrait<2, 2>>::rand(&mut OsRng)
    }

    mod multiplication_tests {
        use super::*;
        #[test]
        fn test_multiplication_cases() {
            let a = create_field_extension(1, 2);
            let b = create_field_extension(3, 4);
            // (1 + 2u)(3 + 4u) = -5 + 10u
            assert_eq!(
                a * b,
                Fp2::new(&[-Fp::from(5u64), Fp::from(10u64)]),
                "Simple multiplication failed"
            );
            let u = create_field_extension(0, 1);
            assert_eq!(u * u, -Fp2::one(), "u^2 = -1 failed");
            assert_eq!(a * Fp::THREE, a + a + a, "Scaling failed");
        }
        #[test]
        fn test_multiplication_associativity_commutativity_distributivity() {
            for _ in 0..10 {
                let (a, b, c) = (rand(), rand(), rand());
                assert_eq!(a * b, b * a, "Multiplication is not commutative");
                assert_eq!((a * b) * c, a * (b * c), "Multiplication is not associative");
                assert_eq!(a * (b + c), a * b + a * c, "Multiplication is not distributive");
            }
        }
        #[test]
        fn test_square() {
            for _ in 0..10 {
                let a = rand();
                assert_eq!(
                    <Fp2 as FieldExtensionTrait<2, 2>>::square(&a),
                    a * a,
                    "Squaring and mul failed"
                );
            }
        }
        #[test]
        fn test_residue_mul() {
            for _ in 0..10 {
                let a = rand();
                assert_eq!(
                    a.residue_mul(),
                    a * <Fp2 as FieldExtensionTrait<2, 2>>::quadratic_non_residue(),
                    "Multiplication by 9+u failed"
                );
            }
        }
    }
    mod division_tests {
        use super::*;
        #[test]
        fn test_division_cases() {
            let one = Fp2::one();
            for _ in 0..10 {
                let (a, b) = (rand(), rand());
                assert_eq!(a / a, one, "Division by self failed");
                assert_eq!(a / one, a, "Division by one failed");
                assert_eq!((a / b) * b, a, "Division-Mult composition failed");
            }
        }
        #[test]
        fn test_divide_by_zero() {
            assert!(Fp2::zero().inv().is_zero());
        }
    }
    mod frobenius_tests {
        use super::*;
        #[test]
        fn test_frobenius() {
            let a = rand();
            let b = rand();
            let frob = |x: &Fp2, e| <Fp2 as FieldExtensionTrait<2, 2>>::frobenius(x, e);
            assert_eq!(frob(&frob(&a, 1), 1), a, "Frobenius failed at cycle order 2");
            assert_eq!(frob(&a, 2), a, "Frobenius failed at even exponent");
            assert_eq!(
                frob(&(a * b), 1),
                frob(&a, 1) * frob(&b, 1),
                "Frobenius is not multiplicative"
            );
            assert!(
                (a * a.conjugate()).0[1].is_zero(),
                "Norm does not lie in the base field"
            );
        }
    }
}
