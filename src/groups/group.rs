//! This module contains the group law shared by $\mathbb{G}_1$ and $\mathbb{G}_2$, written once
//! for any field of the tower. Points are stored either in affine coordinates, with an explicit
//! flag for the point at infinity, or in homogeneous projective coordinates $(X : Y : Z)$
//! representing the affine point $(X/Z, Y/Z)$.
//!
//! The point at infinity has no affine representation, so the arithmetic itself is done in
//! projective coordinates, where it is $(0 : 1 : 0)$ and, more generally, any point with
//! $Z = 0$. Affine points are only used as the second operand of mixed addition and for
//! handing coordinates to the pairing.
//!
//! The formulas are specialised to short Weierstrass curves with $a = 0$, and none of them
//! reference $b$, so the same code runs on the curve and on its twist:
//!
//! 1. doubling: dbl-2007-bl, <https://hyperelliptic.org/EFD/g1p/auto-shortw-projective.html#doubling-dbl-2007-bl>
//! 2. addition: add-1998-cmo-2, <https://hyperelliptic.org/EFD/g1p/auto-shortw-projective.html#addition-add-1998-cmo-2>
//! 3. mixed addition: the same as 2. with $Z_2 = 1$
//!
//! N.B.: the formulas are not complete. They are not defined on points of order 2 or 4, which
//! the prime order subgroups never contain, so this is left as a precondition and not checked.

use crate::fields::fp::{FieldExtensionTrait, Fr};
use crypto_bigint::rand_core::CryptoRngCore;
use std::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// The reasons a point can be refused by a checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// the coordinates do not satisfy the curve equation
    NotOnCurve,
    /// the point is on the curve, but outside the prime order subgroup
    NotInSubgroup,
}

impl std::fmt::Display for GroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupError::NotOnCurve => write!(f, "point is not on the curve"),
            GroupError::NotInSubgroup => write!(f, "point is not in the prime order subgroup"),
        }
    }
}

impl std::error::Error for GroupError {}

/// The behaviour every group of the pairing exposes, beyond its arithmetic.
pub trait GroupTrait<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>>:
    Sized + Copy + Clone + std::fmt::Debug + Neg + ConstantTimeEq + ConditionallySelectable + PartialEq
{
    fn generator() -> Self;
    /// an efficiently computable endomorphism of the group
    fn endomorphism(&self) -> Self;
    /// a uniformly random element of the prime order subgroup
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self;
}

#[derive(Copy, Clone, Debug)]
pub struct GroupAffine<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> {
    pub(crate) x: F,
    pub(crate) y: F,
    pub(crate) infinity: Choice,
}

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> GroupAffine<D, N, F> {
    /// the point at infinity, stored as $(0, 1)$ with the flag set
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::one(),
            infinity: Choice::from(1u8),
        }
    }
    pub fn is_zero(&self) -> bool {
        bool::from(self.infinity)
    }
    pub fn x(&self) -> F {
        self.x
    }
    pub fn y(&self) -> F {
        self.y
    }
}

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Neg for GroupAffine<D, N, F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: self.x,
            y: F::conditional_select(&-self.y, &F::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> ConstantTimeEq
    for GroupAffine<D, N, F>
{
    fn ct_eq(&self, other: &Self) -> Choice {
        // either they're both infinity, or neither are and the coords match
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> ConditionallySelectable
    for GroupAffine<D, N, F>
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: F::conditional_select(&a.x, &b.x, choice),
            y: F::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> PartialEq
    for GroupAffine<D, N, F>
{
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

#[derive(Copy, Clone, Debug)]
pub struct GroupProjective<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> {
    pub(crate) x: F,
    pub(crate) y: F,
    pub(crate) z: F,
}

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> GroupProjective<D, N, F> {
    /// the point at infinity, $(0 : 1 : 0)$
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::one(),
            z: F::zero(),
        }
    }
    /// any point with $Z = 0$ is the point at infinity
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }
    pub fn x(&self) -> F {
        self.x
    }
    pub fn y(&self) -> F {
        self.y
    }
    pub fn z(&self) -> F {
        self.z
    }
    /// dbl-2007-bl with $a = 0$
    pub fn double(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        let xx = self.x.square();
        let w = xx + xx + xx;
        let yz = self.y * self.z;
        let s = yz + yz;
        let ss = s.square();
        let sss = s * ss;
        let r = self.y * s;
        let rr = r.square();
        let b = (self.x + r).square() - xx - rr;
        let h = w.square() - (b + b);
        Self {
            x: h * s,
            y: w * (b - h) - (rr + rr),
            z: sss,
        }
    }
    /// addition of an affine point, which saves the products with $Z_2$
    pub fn mixed_add(&self, other: &GroupAffine<D, N, F>) -> Self {
        if other.is_zero() {
            return *self;
        }
        if self.is_zero() {
            return Self::from(other);
        }
        // same formula as the full addition, with Z_2 = 1
        let u = other.y * self.z - self.y;
        let v = other.x * self.z - self.x;
        if v.is_zero() && u.is_zero() {
            return self.double();
        }
        let uu = u.square();
        let vv = v.square();
        let vvv = v * vv;
        let r = vv * self.x;
        let a = uu * self.z - vvv - (r + r);
        Self {
            x: v * a,
            y: u * (r - a) - vvv * self.y,
            z: vvv * self.z,
        }
    }
}

/// This is the `untwist-Frobenius-twist` map at the level of coordinates: each coordinate is
/// raised to the $p$-th power, and the affine ones are rescaled. For a point with $Z = 1$ the
/// result again has $Z = 1$.
impl<F: FieldExtensionTrait<2, 2>> GroupProjective<2, 2, F> {
    pub fn mul_by_q(&self, x_coeff: F, y_coeff: F) -> Self {
        Self {
            x: self.x.frobenius(1) * x_coeff,
            y: self.y.frobenius(1) * y_coeff,
            z: self.z.frobenius(1),
        }
    }
}

impl<'a, const D: usize, const N: usize, F: FieldExtensionTrait<D, N>>
    From<&'a GroupProjective<D, N, F>> for GroupAffine<D, N, F>
{
    /// One inversion, computed unconditionally. The inverse of zero is zero, and the point at
    /// infinity is selected over the garbage it produces.
    fn from(arg: &'a GroupProjective<D, N, F>) -> Self {
        let inverse = arg.z.inv();
        let finite = Self {
            x: arg.x * inverse,
            y: arg.y * inverse,
            infinity: Choice::from(0u8),
        };
        Self::conditional_select(&finite, &Self::zero(), Choice::from(arg.is_zero() as u8))
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> From<GroupProjective<D, N, F>>
    for GroupAffine<D, N, F>
{
    fn from(arg: GroupProjective<D, N, F>) -> Self {
        Self::from(&arg)
    }
}
impl<'a, const D: usize, const N: usize, F: FieldExtensionTrait<D, N>>
    From<&'a GroupAffine<D, N, F>> for GroupProjective<D, N, F>
{
    fn from(arg: &'a GroupAffine<D, N, F>) -> Self {
        let finite = Self {
            x: arg.x,
            y: arg.y,
            z: F::one(),
        };
        Self::conditional_select(&finite, &Self::zero(), arg.infinity)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> From<GroupAffine<D, N, F>>
    for GroupProjective<D, N, F>
{
    fn from(arg: GroupAffine<D, N, F>) -> Self {
        Self::from(&arg)
    }
}

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Neg
    for GroupProjective<D, N, F>
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> ConstantTimeEq
    for GroupProjective<D, N, F>
{
    fn ct_eq(&self, other: &Self) -> Choice {
        // are the points the same when converted to affine
        let x0 = self.x * other.z;
        let x1 = other.x * self.z;

        let y0 = self.y * other.z;
        let y1 = other.y * self.z;

        let i_am_zero = self.z.ct_eq(&F::zero());
        let you_are_zero = other.z.ct_eq(&F::zero());

        (i_am_zero & you_are_zero) // both at infinity
            | ((!i_am_zero) & (!you_are_zero) & x0.ct_eq(&x1) & y0.ct_eq(&y1))
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> ConditionallySelectable
    for GroupProjective<D, N, F>
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: F::conditional_select(&a.x, &b.x, choice),
            y: F::conditional_select(&a.y, &b.y, choice),
            z: F::conditional_select(&a.z, &b.z, choice),
        }
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> PartialEq
    for GroupProjective<D, N, F>
{
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a, 'b, const D: usize, const N: usize, F: FieldExtensionTrait<D, N>>
    Add<&'b GroupProjective<D, N, F>> for &'a GroupProjective<D, N, F>
{
    type Output = GroupProjective<D, N, F>;
    /// add-1998-cmo-2, falling back to doubling when the operands are the same point
    fn add(self, other: &'b GroupProjective<D, N, F>) -> Self::Output {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        if self == other {
            return self.double();
        }
        let y1z2 = self.y * other.z;
        let x1z2 = self.x * other.z;
        let z1z2 = self.z * other.z;
        let u = other.y * self.z - y1z2;
        let uu = u.square();
        let v = other.x * self.z - x1z2;
        let vv = v.square();
        let vvv = v * vv;
        let r = vv * x1z2;
        let a = uu * z1z2 - vvv - (r + r);
        GroupProjective {
            x: v * a,
            y: u * (r - a) - vvv * y1z2,
            z: vvv * z1z2,
        }
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Add
    for GroupProjective<D, N, F>
{
    type Output = Self;
    fn add(self, other: Self) -> Self::Output {
        &self + &other
    }
}
impl<'a, 'b, const D: usize, const N: usize, F: FieldExtensionTrait<D, N>>
    Sub<&'b GroupProjective<D, N, F>> for &'a GroupProjective<D, N, F>
{
    type Output = GroupProjective<D, N, F>;
    fn sub(self, other: &'b GroupProjective<D, N, F>) -> Self::Output {
        self + &(-*other)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Sub
    for GroupProjective<D, N, F>
{
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        &self - &other
    }
}

impl<'a, 'b, const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Mul<&'b [u8]>
    for &'a GroupProjective<D, N, F>
{
    /// This is simply the `double-and-add` algorithm for multiplication, which is the ECC
    /// equivalent of the `square-and-multiply` algorithm used in modular exponentiation. The
    /// scalar is given as little endian bytes.
    ///
    /// <https://en.wikipedia.org/wiki/Elliptic_curve_point_multiplication#Double-and-add>
    type Output = GroupProjective<D, N, F>;
    fn mul(self, scalar: &'b [u8]) -> Self::Output {
        let mut res = GroupProjective::zero();
        for byte in scalar.iter().rev() {
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
impl<'a, 'b, const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Mul<&'b Fr>
    for &'a GroupProjective<D, N, F>
{
    type Output = GroupProjective<D, N, F>;
    fn mul(self, scalar: &'b Fr) -> Self::Output {
        self * &scalar.value().to_le_bytes()[..]
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Mul<Fr>
    for GroupProjective<D, N, F>
{
    type Output = Self;
    fn mul(self, scalar: Fr) -> Self::Output {
        &self * &scalar
    }
}
