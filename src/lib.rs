//! # optimal-ate: the optimal ate pairing on BN254
//!
//! A Rust library implementing the optimal ate pairing for the BN254 (alt-bn128) curve,
//! together with everything it is built from: the extension tower of the base field, and the
//! groups $\mathbb{G}_1$, $\mathbb{G}_2$ and $\mathbb{G}_T$.
//!
//! ## Quick Start
//!
//! Add optimal-ate to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! optimal-ate = "0.1.0"
//! ```
//!
//! ## Key Features
//!
//! - Finite field arithmetic (𝔽ₚ, 𝔽ₚ², 𝔽ₚ⁶, 𝔽ₚ¹²), with the cyclotomic and sparse fast paths
//!   of the pairing
//! - Elliptic curve group operations (𝔾₁, 𝔾₂, 𝔾ₜ) with checked constructors
//! - Optimal ate pairing, with reusable precomputation for a fixed 𝔾₂ point and a double
//!   Miller loop for pairing product checks
//! - A pairing engine generic over [`CurveParameters`], instantiated for [`Bn254`]
//!
//! ## Basic Usage
//!
//! Bilinearity, checked on random scalars:
//!
//! ```rust
//! use optimal_ate::*;
//! use crypto_bigint::rand_core::OsRng;
//!
//! let a = <Fr as FieldExtensionTrait<1, 1>>::rand(&mut OsRng);
//! let b = <Fr as FieldExtensionTrait<1, 1>>::rand(&mut OsRng);
//!
//! let p = G1Projective::generator();
//! let q = G2Projective::generator();
//!
//! let lhs = pairing(&(p * a), &(q * b));
//! let rhs = pairing(&p, &q) * (a * b);
//! assert_eq!(lhs, rhs);
//! ```
//!
//! When one $\mathbb{G}_2$ point is paired many times, precompute it once:
//!
//! ```rust
//! use optimal_ate::*;
//!
//! let q = precompute_g2::<Bn254>(&G2Projective::generator());
//! let p = precompute_g1::<Bn254>(&G1Projective::generator());
//! let f = final_exponentiation::<Bn254>(&miller_loop(&p, &q));
//! assert_eq!(f, Gt::generator().value());
//! ```
//!
//! ## Core Components
//!
//! - [`Fp`], [`Fr`], [`Fp2`], [`Fp6`], [`Fp12`]: Finite field implementations
//! - [`G1Projective`], [`G2Projective`], [`Gt`]: The groups of the pairing
//! - [`pairing()`]: Bilinear pairing operation
//! - [`miller_loop`], [`double_miller_loop`], [`final_exponentiation`]: its two stages
//!
//! ## Performance and Security
//!
//! Field arithmetic stays in Montgomery form throughout, and equality and selection are
//! constant time. The pairing itself does not branch on whether its inputs are the identity.
//! Scalar multiplication is double-and-add, which is not constant time.

mod fields;
mod groups;
mod pairing;
mod params;

pub use crate::fields::fp::{FieldExtensionTrait, Fp, Fr};
pub use crate::fields::fp12::{Fp12, PairingField};
pub use crate::fields::fp2::Fp2;
pub use crate::fields::fp6::Fp6;

pub use crate::groups::g1::{G1Affine, G1Projective};
pub use crate::groups::g2::{G2Affine, G2Projective};
pub use crate::groups::group::{GroupAffine, GroupError, GroupProjective, GroupTrait};
pub use crate::groups::gt::Gt;

pub use crate::pairing::{
    double_miller_loop, final_exponentiation, final_exponentiation_first_chunk,
    final_exponentiation_last_chunk, miller_loop, pair, pair_reduced, pairing, precompute_g1,
    precompute_g2, EllCoeffs, G1PreComputed, G2PreComputed,
};
pub use crate::params::{Bn254, CurveParameters};
