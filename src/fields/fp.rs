//! This module implements the prime fields underneath the pairing tower. Both the base field
//! $\mathbb{F}_p$ of BN254 and its scalar field $\mathbb{F}_r$ are generated from the same macro,
//! which wraps the constant-modulus Montgomery form of `crypto_bigint`.
//!
//! 1. Montgomery arithmetic:
//!     all elements live in Montgomery form for the duration of their life, and are only
//!     converted back to canonical form by `value()`. For more information, see Ref 1.
//! 2. Constant-time operations:
//!     equality, selection, and inversion go through `subtle` and `ConstMontyForm`, so none of
//!     them branch on secret data.
//!
//! The modulus is assumed to be an odd prime. Neither field is reduced by hand anywhere in this
//! crate; the tower above only ever consumes the trait [`FieldExtensionTrait`].
//!
//! References
//! ----------
//! 1. <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>
//!
//! N.B.: the #[allow(unused_imports)] below is a clippy quirk. Some of the imports are only
//! referenced inside the expansion of `define_finite_prime_field!`, which the linter does not
//! see through.

use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
#[allow(unused_imports)]
use crypto_bigint::{
    impl_modulus, modular::ConstMontyParams, rand_core::CryptoRngCore, RandomMod, U256,
};
use num_traits::{Inv, One, Pow, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::CtOption;

/// $-1 \bmod p$, the quadratic non-residue generating $\mathbb{F}_{p^2}$ over $\mathbb{F}_p$.
const FP_QUADRATIC_NON_RESIDUE: Fp = Fp::new(U256::from_words([
    4332616871279656262,
    10917124144477883021,
    13281191951274694749,
    3486998266802970665,
]));
/// $5$ generates the multiplicative group of $\mathbb{F}_r$, and is therefore a non-residue.
const FR_QUADRATIC_NON_RESIDUE: Fr = Fr::new(U256::from_words([5, 0, 0, 0]));

/// This defines the key properties of a field extension. Mathematically, a finite field
/// satisfies many more properties than the ones below; this is only the list that the
/// tower, the group law, and the pairing engine rely on.
///
/// `D` is the absolute degree of the extension over $\mathbb{F}_p$, and `N` the number of
/// components an element carries at that level. Each level of the tower implements the trait
/// for its own `(D, N)`, and again for the `(D, N)` of the level directly above it, so that it
/// can be used as a component there.
pub trait FieldExtensionTrait<const D: usize, const N: usize>:
    Sized
    + Copy
    + Clone
    + std::fmt::Debug
    + Default
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialEq
    + ConstantTimeEq
    + ConditionallySelectable
    + Zero
    + One
    + Inv<Output = Self>
    + From<u64>
{
    /// the element adjoined to build the next level of the tower
    fn quadratic_non_residue() -> Self;
    /// $x \mapsto x^{p^{exponent}}$
    fn frobenius(&self, exponent: usize) -> Self;
    fn square(&self) -> Self;
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self;
}

/// Due to the fact that we use `crypto_bigint` to handle the multiprecision arithmetic
/// we must accept (for now) the fact that it requires the usage of a macro,
/// `impl_modulus!`, which generates and contains all the needed information.
/// This means that we roll our implementation into a macro that
/// provides all the needed functionality, once per modulus.
macro_rules! define_finite_prime_field {
    (
        $wrapper_name:ident,
        $modulus_struct:ident,
        $monty_type:ident,
        $uint_type:ty,
        $modulus:expr,
        $non_residue:expr,
        $degree:expr,
        $nreps:expr
    ) => {
        impl_modulus!($modulus_struct, $uint_type, $modulus);

        // special struct for const-time arithmetic on montgomery form integers mod the modulus
        type $monty_type =
            crypto_bigint::modular::ConstMontyForm<$modulus_struct, { $modulus_struct::LIMBS }>;

        #[derive(Clone, Debug, Copy)] // to be used in const contexts
        pub struct $wrapper_name($modulus_struct, $monty_type);

        impl $wrapper_name {
            /// builder to create elements of the field from a canonical integer
            pub const fn new(value: $uint_type) -> Self {
                Self($modulus_struct, $monty_type::new(&value))
            }
            /// Parses a base-10 string. An empty string, or any character that is not a
            /// decimal digit, yields `None`.
            pub fn new_from_str(value: &str) -> Option<Self> {
                if value.is_empty() {
                    return None;
                }
                let ten = Self::from(10u64);
                let mut res = Self::ZERO;
                for c in value.chars() {
                    let digit = c.to_digit(10)?;
                    res = res * ten + Self::from(digit as u64);
                }
                Some(res)
            }
            /// take the element and convert it to "normal" form from montgomery form
            pub const fn value(&self) -> $uint_type {
                self.1.retrieve()
            }
            pub fn characteristic() -> $uint_type {
                <$uint_type>::from($modulus_struct::MODULUS.as_nz_ref().get())
            }
            pub fn square(&self) -> Self {
                (*self) * (*self)
            }
            pub const ZERO: Self = Self::new(<$uint_type>::from_words([0x0; 4]));
            pub const ONE: Self = Self::new(<$uint_type>::from_words([0x1, 0x0, 0x0, 0x0]));
            pub const TWO: Self = Self::new(<$uint_type>::from_words([0x2, 0x0, 0x0, 0x0]));
            pub const THREE: Self = Self::new(<$uint_type>::from_words([0x3, 0x0, 0x0, 0x0]));
            pub const FOUR: Self = Self::new(<$uint_type>::from_words([0x4, 0x0, 0x0, 0x0]));
            pub const NINE: Self = Self::new(<$uint_type>::from_words([0x9, 0x0, 0x0, 0x0]));
        }
        // the prime field is the degree 1 extension of itself, with 1 component per element
        impl FieldExtensionTrait<$degree, $nreps> for $wrapper_name {
            fn quadratic_non_residue() -> Self {
                $non_residue
            }
            // x^p = x for every x in the prime field
            fn frobenius(&self, _exponent: usize) -> Self {
                *self
            }
            fn square(&self) -> Self {
                (*self) * (*self)
            }
            fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
                Self::new(<$uint_type>::random_mod(
                    rng,
                    $modulus_struct::MODULUS.as_nz_ref(),
                ))
            }
        }
        impl From<u64> for $wrapper_name {
            fn from(value: u64) -> Self {
                Self::new(<$uint_type>::from_u64(value))
            }
        }
        /// We now implement binary operations on the field. This just wraps the same
        /// operations on the underlying montgomery representations, without ever leaving
        /// montgomery form. All binops with assignment equivalents are given.
        impl Add for $wrapper_name {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Self($modulus_struct, self.1 + other.1)
            }
        }
        impl AddAssign for $wrapper_name {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }
        impl Sub for $wrapper_name {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                Self($modulus_struct, self.1 - other.1)
            }
        }
        impl SubAssign for $wrapper_name {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }
        impl Mul for $wrapper_name {
            type Output = Self;
            fn mul(self, other: Self) -> Self {
                Self($modulus_struct, self.1 * other.1)
            }
        }
        impl MulAssign for $wrapper_name {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }
        impl Neg for $wrapper_name {
            type Output = Self;
            fn neg(self) -> Self {
                Self($modulus_struct, -self.1)
            }
        }
        impl Zero for $wrapper_name {
            fn zero() -> Self {
                Self::ZERO
            }
            fn is_zero(&self) -> bool {
                bool::from(self.ct_eq(&Self::ZERO))
            }
        }
        impl One for $wrapper_name {
            fn one() -> Self {
                Self::ONE
            }
        }
        impl Default for $wrapper_name {
            fn default() -> Self {
                Self::ZERO
            }
        }
        /// Equality is not generally speaking constant time, so we route it through
        /// `subtle::ConstantTimeEq`, which returns
        /// Choice(1u8) if self == other
        /// Choice(0u8) if self != other
        impl ConstantTimeEq for $wrapper_name {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.1.ct_eq(&other.1)
            }
        }
        impl PartialEq for $wrapper_name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                bool::from(self.ct_eq(other))
            }
        }
        impl Eq for $wrapper_name {}
        impl ConditionallySelectable for $wrapper_name {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self(
                    $modulus_struct,
                    $monty_type::conditional_select(&a.1, &b.1, choice),
                )
            }
        }
        /// Inversion uses the constant-time Bernstein-Yang algorithm of `crypto_bigint`, see
        /// <https://eprint.iacr.org/2019/266.pdf>. Inverting zero has no answer; rather than
        /// panicking, the result is zero, and the tower above inherits that convention.
        impl Inv for $wrapper_name {
            type Output = Self;
            fn inv(self) -> Self {
                Self(
                    $modulus_struct,
                    CtOption::from(self.1.inv()).unwrap_or($monty_type::new(&<$uint_type>::ZERO)),
                )
            }
        }
        #[allow(clippy::suspicious_arithmetic_impl)]
        impl Div for $wrapper_name {
            type Output = Self;
            fn div(self, other: Self) -> Self {
                self * other.inv()
            }
        }
        impl DivAssign for $wrapper_name {
            fn div_assign(&mut self, other: Self) {
                *self = *self / other;
            }
        }
        impl Pow<$uint_type> for $wrapper_name {
            type Output = Self;
            fn pow(self, rhs: $uint_type) -> Self::Output {
                Self($modulus_struct, self.1.pow(&rhs))
            }
        }
    };
}

const BN254_MOD_STRING: &str = "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";
const BN254_SUBGROUP_MOD_STRING: &str =
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

define_finite_prime_field!(
    Fp,
    FpModulus,
    FpMonty,
    U256,
    BN254_MOD_STRING,
    FP_QUADRATIC_NON_RESIDUE,
    1,
    1
);
define_finite_prime_field!(
    Fr,
    FrModulus,
    FrMonty,
    U256,
    BN254_SUBGROUP_MOD_STRING,
    FR_QUADRATIC_NON_RESIDUE,
    1,
    1
);

impl Fp {
    /// This is an instantiation of Shank's algorithm for the special case at hand. The BN254
    /// prime is congruent to 3 mod 4, so the only candidate roots are
    /// $\pm n^{\frac{p+1}{4}}$. The exponent is computed as $4^{-1} \bmod p$, which is the same
    /// integer as $\frac{p+1}{4}$ since $4\cdot\frac{p+1}{4} = p + 1 \equiv 1$.
    pub fn sqrt(&self) -> CtOption<Self> {
        let arg = (Self::ONE / Self::FOUR).value();
        let sqrt = self.pow(arg);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }
    /// Euler's criterion, with $-2^{-1} \bmod p = \frac{p-1}{2}$ as the exponent.
    pub fn is_square(&self) -> Choice {
        let p_minus_1_div_2 = (-Self::ONE / Self::TWO).value();
        let retval = self.pow(p_minus_1_div_2);
        retval.ct_eq(&Self::ZERO) | retval.ct_eq(&Self::ONE)
    }
}

/// the code below makes the base field "visible" to the quadratic extension. Generic
/// traits cannot enforce arithmetic relations between the degrees of the levels of the tower,
/// such as "the child of an extension has a degree strictly less than the parent", so we
/// instead make the base field explicitly usable one level up by manually specifying `D, N`.
impl FieldExtensionTrait<2, 2> for Fp {
    fn quadratic_non_residue() -> Self {
        <Fp as FieldExtensionTrait<1, 1>>::quadratic_non_residue()
    }
    fn frobenius(&self, exponent: usize) -> Self {
        <Fp as FieldExtensionTrait<1, 1>>::frobenius(self, exponent)
    }
    fn square(&self) -> Self {
        <Fp as FieldExtensionTrait<1, 1>>::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        <Fp as FieldExtensionTrait<1, 1>>::rand(rng)
    }
}
