//! The optimal ate pairing $e: \mathbb{G}_1 \times \mathbb{G}_2 \to \mathbb{G}_T$, written once
//! against [`CurveParameters`] and instantiated for BN254.
//!
//! The pairing is computed in two stages. The Miller loop walks the bits of $6z+2$, evaluating
//! at $P$ the lines through the multiples of $Q$ that a double-and-add on the twist visits,
//! and two extra lines through $\psi(Q)$ and $-\psi^2(Q)$. The final exponentiation then raises
//! the result to $(p^{12}-1)/r$, which lands it in $\mathbb{G}_T$.
//!
//! All the work on $Q$ does not depend on $P$, so it is split off into a precomputation that
//! stores only the three nonzero coefficients of each line, see [`EllCoeffs`]. A fixed
//! $\mathbb{G}_2$ point can then be paired against any number of $\mathbb{G}_1$ points.
//!
//! References
//! ----------
//! 1. <https://eprint.iacr.org/2010/354.pdf>
//! 2. <https://eprint.iacr.org/2010/526.pdf>

use crate::fields::fp::FieldExtensionTrait;
use crate::fields::fp12::{Fp12, PairingField};
use crate::groups::g1::G1Projective;
use crate::groups::g2::G2Projective;
use crate::groups::group::{GroupAffine, GroupProjective, GroupTrait};
use crate::groups::gt::Gt;
use crate::params::{Bn254, CurveParameters};
use num_traits::{Inv, One};
use subtle::{Choice, ConditionallySelectable};

/// The affine coordinates of a $\mathbb{G}_1$ point, ready to evaluate lines at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct G1PreComputed<P: CurveParameters> {
    pub px: P::Fp,
    pub py: P::Fp,
}

/// Each line of the Miller loop is a very sparse element of $\mathbb{F}_{p^{12}}$,
///
/// $\ell = \ell_0 + \ell_{vw} \cdot y_P \cdot vw + \ell_{vv} \cdot x_P \cdot v^2$
///
/// so only its three nonzero coefficients are kept, and they are folded into the accumulator
/// with [`PairingField::mul_by_024`] instead of a full multiplication. The coefficients do not
/// depend on $P$, which enters only by scaling $\ell_{vw}$ and $\ell_{vv}$.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EllCoeffs<F2> {
    pub ell_0: F2,
    pub ell_vw: F2,
    pub ell_vv: F2,
}

/// The affine coordinates of a $\mathbb{G}_2$ point, and the line coefficients of every step
/// of its Miller loop, in the order the loop consumes them.
#[derive(Clone, Debug, PartialEq)]
pub struct G2PreComputed<P: CurveParameters> {
    pub qx: P::Fp2,
    pub qy: P::Fp2,
    pub coeffs: Vec<EllCoeffs<P::Fp2>>,
}

/// The bits of a little endian multi-limb integer, from the one just below the most
/// significant set bit down to bit zero. Both the precomputation and the Miller loop walk the
/// loop count with this, so that they agree on where every coefficient belongs.
fn loop_bits(limbs: &[u64]) -> impl Iterator<Item = bool> + '_ {
    limbs
        .iter()
        .rev()
        .flat_map(|limb| (0..64).rev().map(move |i| (limb >> i) & 1 == 1))
        .skip_while(|bit| !bit)
        .skip(1)
}

/// Doubles `r` in place and returns the tangent line at the old `r`.
///
/// <https://eprint.iacr.org/2010/526.pdf>, Sec. 4.3, with the line scaled by $\xi$ to fit the
/// D-type twist.
fn doubling_step<P: CurveParameters>(r: &mut GroupProjective<2, 2, P::Fp2>) -> EllCoeffs<P::Fp2> {
    let a = (r.x * r.y) * P::TWO_INV;
    let b = r.y.square();
    let c = r.z.square();
    let d = c + c + c;
    let e = P::TWIST_COEFF_B * d;
    let f = e + e + e;
    let g = (b + f) * P::TWO_INV;
    let h = (r.y + r.z).square() - (b + c);
    let i = e - b;
    let j = r.x.square();
    let e_sq = e.square();

    r.x = a * (b - f);
    r.y = g.square() - (e_sq + e_sq + e_sq);
    r.z = b * h;

    EllCoeffs {
        ell_0: P::TWIST * i,
        ell_vw: -h,
        ell_vv: j + j + j,
    }
}

/// Sets `r` to `r + (x2, y2)` and returns the line through the two points.
///
/// <https://eprint.iacr.org/2010/526.pdf>, Sec. 4.3, mixed addition.
fn addition_step<P: CurveParameters>(
    r: &mut GroupProjective<2, 2, P::Fp2>,
    x2: P::Fp2,
    y2: P::Fp2,
) -> EllCoeffs<P::Fp2> {
    let d = r.x - x2 * r.z;
    let e = r.y - y2 * r.z;
    let f = d.square();
    let g = e.square();
    let h = d * f;
    let i = r.x * f;
    let j = h + r.z * g - (i + i);

    r.x = d * j;
    r.y = e * (i - j) - h * r.y;
    r.z *= h;

    EllCoeffs {
        ell_0: P::TWIST * (e * x2 - d * y2),
        ell_vw: d,
        ell_vv: -e,
    }
}

/// Prepares a $\mathbb{G}_1$ point for the Miller loop. The point must not be the identity.
pub fn precompute_g1<P: CurveParameters>(p: &GroupProjective<1, 1, P::Fp>) -> G1PreComputed<P> {
    let p = GroupAffine::from(p);
    G1PreComputed { px: p.x, py: p.y }
}

/// Runs every step of the Miller loop that only depends on $Q$, which must not be the identity.
/// The length of the result is a function of the loop count alone, 102 for BN254.
pub fn precompute_g2<P: CurveParameters>(q: &GroupProjective<2, 2, P::Fp2>) -> G2PreComputed<P> {
    let q = GroupAffine::from(q);
    let (qx, qy) = (q.x, q.y);
    let base = GroupProjective {
        x: qx,
        y: qy,
        z: P::Fp2::one(),
    };
    let mut r = base;
    let mut coeffs = Vec::new();

    for bit in loop_bits(P::ATE_LOOP_COUNT) {
        coeffs.push(doubling_step::<P>(&mut r));
        if bit {
            coeffs.push(addition_step::<P>(&mut r, qx, qy));
        }
    }

    let q1 = base.mul_by_q(P::TWIST_MUL_BY_Q_X, P::TWIST_MUL_BY_Q_Y);
    let mut q2 = q1.mul_by_q(P::TWIST_MUL_BY_Q_X, P::TWIST_MUL_BY_Q_Y);
    debug_assert!(q1.z.is_one(), "psi(Q) is not normalized");
    debug_assert!(q2.z.is_one(), "psi^2(Q) is not normalized");

    if P::ATE_IS_LOOP_COUNT_NEG {
        r.y = -r.y;
    }
    q2.y = -q2.y;

    coeffs.push(addition_step::<P>(&mut r, q1.x, q1.y));
    coeffs.push(addition_step::<P>(&mut r, q2.x, q2.y));

    tracing::debug!(coeffs = coeffs.len(), "precompute_g2");
    G2PreComputed { qx, qy, coeffs }
}

/// Evaluates one line at $P$ and multiplies it into `f`.
fn ell<P: CurveParameters>(f: P::Fp12, c: &EllCoeffs<P::Fp2>, p: &G1PreComputed<P>) -> P::Fp12 {
    f.mul_by_024(c.ell_0, c.ell_vw * p.py, c.ell_vv * p.px)
}

/// The Miller loop $f_{6z+2,Q}(P) \cdot \ell_{[6z+2]Q,\psi(Q)}(P) \cdot
/// \ell_{[6z+2]Q+\psi(Q),-\psi^2(Q)}(P)$, which is a pairing value only up to the final
/// exponentiation.
pub fn miller_loop<P: CurveParameters>(p: &G1PreComputed<P>, q: &G2PreComputed<P>) -> P::Fp12 {
    let mut f = P::Fp12::one();
    let mut idx = 0;

    for bit in loop_bits(P::ATE_LOOP_COUNT) {
        f = ell(f.square(), &q.coeffs[idx], p);
        idx += 1;
        if bit {
            f = ell(f, &q.coeffs[idx], p);
            idx += 1;
        }
    }

    if P::ATE_IS_LOOP_COUNT_NEG {
        f = f.inv();
    }

    f = ell(f, &q.coeffs[idx], p);
    ell(f, &q.coeffs[idx + 1], p)
}

/// The product of two Miller loops, sharing the squarings of the accumulator. This is the
/// building block of a pairing product check $e(P_1, Q_1) e(P_2, Q_2) = 1$.
pub fn double_miller_loop<P: CurveParameters>(
    p1: &G1PreComputed<P>,
    q1: &G2PreComputed<P>,
    p2: &G1PreComputed<P>,
    q2: &G2PreComputed<P>,
) -> P::Fp12 {
    let mut f = P::Fp12::one();
    let mut idx = 0;

    for bit in loop_bits(P::ATE_LOOP_COUNT) {
        f = f.square();
        f = ell(f, &q1.coeffs[idx], p1);
        f = ell(f, &q2.coeffs[idx], p2);
        idx += 1;
        if bit {
            f = ell(f, &q1.coeffs[idx], p1);
            f = ell(f, &q2.coeffs[idx], p2);
            idx += 1;
        }
    }

    if P::ATE_IS_LOOP_COUNT_NEG {
        f = f.inv();
    }

    for c in idx..idx + 2 {
        f = ell(f, &q1.coeffs[c], p1);
        f = ell(f, &q2.coeffs[c], p2);
    }
    f
}

/// The easy part of the final exponentiation, raising to $(p^6-1)(p^2+1)$. Lines 1-4 of Alg 31
/// from <https://eprint.iacr.org/2010/354.pdf>. The output lies in the cyclotomic subgroup,
/// where the fast paths of [`PairingField`] are valid.
pub fn final_exponentiation_first_chunk<P: CurveParameters>(elt: &P::Fp12) -> P::Fp12 {
    tracing::trace!("final_exponentiation_first_chunk");
    let a = elt.unitary_inverse();
    let b = (*elt).inv();
    let c = a * b;
    let d = c.frobenius(2);
    d * c
}

/// $x^{-z}$, for an element of the cyclotomic subgroup
fn exp_by_neg_z<P: CurveParameters>(x: &P::Fp12) -> P::Fp12 {
    let res = x.cyclotomic_exp(P::FINAL_EXPONENT_Z);
    match P::FINAL_EXPONENT_IS_Z_NEG {
        true => res,
        false => res.unitary_inverse(),
    }
}

/// The hard part of the final exponentiation, raising to a multiple of $(p^4-p^2+1)/r$ with
/// three exponentiations by $z$.
///
/// Hard part follows Laura Fuentes-Castaneda et al. "Faster hashing to G2"
/// <https://link.springer.com/chapter/10.1007/978-3-642-28496-0_25>
pub fn final_exponentiation_last_chunk<P: CurveParameters>(elt: &P::Fp12) -> P::Fp12 {
    tracing::trace!("final_exponentiation_last_chunk");
    let a = exp_by_neg_z::<P>(elt);
    let b = a.cyclotomic_squared();
    let c = b.cyclotomic_squared();
    let d = c * b;

    let e = exp_by_neg_z::<P>(&d);
    let f = e.cyclotomic_squared();
    let g = exp_by_neg_z::<P>(&f);
    let h = d.unitary_inverse();
    let i = g.unitary_inverse();

    let j = i * e;
    let k = j * h;
    let l = k * b;
    let m = k * e;
    let n = m * *elt;

    let o = l.frobenius(1);
    let p = o * n;

    let q = k.frobenius(2);
    let r = q * p;

    let s = elt.unitary_inverse();
    let t = s * l;
    let u = t.frobenius(3);
    u * r
}

/// Raises a Miller loop output to $(p^{12}-1)/r$.
pub fn final_exponentiation<P: CurveParameters>(elt: &P::Fp12) -> P::Fp12 {
    final_exponentiation_last_chunk::<P>(&final_exponentiation_first_chunk::<P>(elt))
}

/// The Miller loop of a single pair, without the final exponentiation.
pub fn pair<P: CurveParameters>(
    p: &GroupProjective<1, 1, P::Fp>,
    q: &GroupProjective<2, 2, P::Fp2>,
) -> P::Fp12 {
    miller_loop(&precompute_g1::<P>(p), &precompute_g2::<P>(q))
}

/// The reduced pairing of a single pair. Neither point may be the identity.
pub fn pair_reduced<P: CurveParameters>(
    p: &GroupProjective<1, 1, P::Fp>,
    q: &GroupProjective<2, 2, P::Fp2>,
) -> P::Fp12 {
    final_exponentiation::<P>(&pair::<P>(p, q))
}

/// The BN254 pairing, for any pair of group elements. If either one is the identity, the
/// result is the identity of $\mathbb{G}_T$, without branching on the inputs.
/// ```
/// use optimal_ate::*;
/// let p = G1Projective::generator();
/// let q = G2Projective::generator();
/// assert_eq!(pairing(&p, &q), Gt::generator());
/// assert_eq!(pairing(&G1Projective::zero(), &q), Gt::identity());
/// ```
pub fn pairing(p: &G1Projective, q: &G2Projective) -> Gt {
    let either_zero = Choice::from((p.is_zero() | q.is_zero()) as u8);
    let p = G1Projective::conditional_select(p, &G1Projective::generator(), either_zero);
    let q = G2Projective::conditional_select(q, &G2Projective::generator(), either_zero);
    let f = pair::<Bn254>(&p, &q);
    let f = Fp12::conditional_select(&f, &Fp12::one(), either_zero);
    Gt(final_exponentiation::<Bn254>(&f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::fp::{FieldExtensionTrait, Fp, Fr};
    use crate::fields::fp2::Fp2;
    use crate::fields::fp6::Fp6;
    use crypto_bigint::rand_core::OsRng;

    fn rand_fr() -> Fr {
        <Fr as FieldExtensionTrait<1, 1>>::rand(&mut OsRng)
    }
    fn decimal(s: &str) -> Fp {
        Fp::new_from_str(s).expect("bad decimal")
    }

    /// BN254 with the signs of the loop count and of $z$ flipped, to drive the branches of
    /// the engine that the real curve never takes.
    #[derive(Copy, Clone, Debug, PartialEq)]
    struct NegatedBn254;

    impl CurveParameters for NegatedBn254 {
        type Fp = Fp;
        type Fp2 = Fp2;
        type Fp12 = Fp12;

        const G1_COEFF_B: Fp = Bn254::G1_COEFF_B;
        const TWIST: Fp2 = Bn254::TWIST;
        const TWIST_COEFF_B: Fp2 = Bn254::TWIST_COEFF_B;
        const TWIST_MUL_BY_Q_X: Fp2 = Bn254::TWIST_MUL_BY_Q_X;
        const TWIST_MUL_BY_Q_Y: Fp2 = Bn254::TWIST_MUL_BY_Q_Y;
        const TWO_INV: Fp = Bn254::TWO_INV;
        const ATE_LOOP_COUNT: &'static [u64] = Bn254::ATE_LOOP_COUNT;
        const ATE_IS_LOOP_COUNT_NEG: bool = true;
        const FINAL_EXPONENT_Z: &'static [u64] = Bn254::FINAL_EXPONENT_Z;
        const FINAL_EXPONENT_IS_Z_NEG: bool = true;
    }

    mod precompute_tests {
        use super::*;

        #[test]
        fn test_loop_bits() {
            let bits: Vec<bool> = loop_bits(&[0b1011]).collect();
            assert_eq!(bits, vec![false, true, true]);
            assert_eq!(loop_bits(&[0, 0b1]).count(), 64);
            assert_eq!(loop_bits(Bn254::ATE_LOOP_COUNT).count(), 64);
            assert_eq!(loop_bits(Bn254::ATE_LOOP_COUNT).filter(|b| *b).count(), 36);
        }
        #[test]
        fn test_coefficient_count_and_determinism() {
            let q = G2Projective::rand(&mut OsRng);
            let a = precompute_g2::<Bn254>(&q);
            let b = precompute_g2::<Bn254>(&q);
            assert_eq!(a.coeffs.len(), 102);
            assert_eq!(a, b, "Precomputation is not deterministic");
        }
        #[test]
        fn test_precompute_is_affine() {
            let p = G1Projective::generator().double();
            let pre = precompute_g1::<Bn254>(&p);
            let affine = GroupAffine::from(p);
            assert_eq!((pre.px, pre.py), (affine.x, affine.y));

            // scaling Z does not change the coefficients
            let q = G2Projective::generator();
            let s = Fp2::from(7u64);
            let scaled = GroupProjective {
                x: q.x * s,
                y: q.y * s,
                z: q.z * s,
            };
            assert_eq!(precompute_g2::<Bn254>(&q), precompute_g2::<Bn254>(&scaled));
        }
    }
    mod miller_tests {
        use super::*;

        #[test]
        fn test_negative_loop_count() {
            let q = G2Projective::rand(&mut OsRng);
            let positive = precompute_g2::<Bn254>(&q);
            let negative = precompute_g2::<NegatedBn254>(&q);
            assert_eq!(negative.coeffs.len(), 102);
            // the sign only touches R before the two final lines
            assert_eq!(positive.coeffs[..100], negative.coeffs[..100]);
            assert_ne!(positive.coeffs[100], negative.coeffs[100]);

            let p = G1Projective::rand(&mut OsRng);
            let p1 = precompute_g1::<NegatedBn254>(&p);
            let p2 = precompute_g1::<NegatedBn254>(&G1Projective::rand(&mut OsRng));
            let q2 = precompute_g2::<NegatedBn254>(&G2Projective::rand(&mut OsRng));
            let f = miller_loop(&p1, &negative);
            assert_eq!(
                double_miller_loop(&p1, &negative, &p2, &q2),
                f * miller_loop(&p2, &q2)
            );
            assert_ne!(f, miller_loop(&precompute_g1::<Bn254>(&p), &positive));
        }

        #[test]
        fn test_generator_pairing() {
            let p = G1Projective::generator();
            let q = G2Projective::generator();
            let f = pair::<Bn254>(&p, &q);
            let reduced = pair_reduced::<Bn254>(&p, &q);
            assert_eq!(reduced, Gt::generator().0, "Generator pairing failed");
            assert_ne!(f, reduced, "Miller loop output is already reduced");
            assert_eq!(final_exponentiation::<Bn254>(&f), reduced);
            assert_ne!(reduced, Fp12::one(), "Pairing is degenerate");
        }
        #[test]
        fn test_double_miller_loop() {
            let (p1, q1) = (G1Projective::rand(&mut OsRng), G2Projective::rand(&mut OsRng));
            let (p2, q2) = (G1Projective::rand(&mut OsRng), G2Projective::rand(&mut OsRng));
            let (p1, p2) = (precompute_g1::<Bn254>(&p1), precompute_g1::<Bn254>(&p2));
            let (q1, q2) = (precompute_g2::<Bn254>(&q1), precompute_g2::<Bn254>(&q2));
            assert_eq!(
                double_miller_loop(&p1, &q1, &p2, &q2),
                miller_loop(&p1, &q1) * miller_loop(&p2, &q2)
            );
        }
        #[test]
        fn test_pairing_check() {
            // e(aP, Q) e(-P, aQ) = 1
            let a = rand_fr();
            let p = G1Projective::rand(&mut OsRng);
            let q = G2Projective::rand(&mut OsRng);
            let f = double_miller_loop(
                &precompute_g1::<Bn254>(&(p * a)),
                &precompute_g2::<Bn254>(&q),
                &precompute_g1::<Bn254>(&-p),
                &precompute_g2::<Bn254>(&(q * a)),
            );
            assert!(final_exponentiation::<Bn254>(&f).is_one());
        }
    }
    mod final_exponentiation_tests {
        use super::*;

        #[test]
        fn test_chunks_compose() {
            let f = Fp12::rand(&mut OsRng);
            let first = final_exponentiation_first_chunk::<Bn254>(&f);
            assert_eq!(
                final_exponentiation_last_chunk::<Bn254>(&first),
                final_exponentiation::<Bn254>(&f)
            );
            // the first chunk lands in the cyclotomic subgroup
            assert_eq!(first.unitary_inverse(), first.inv());
        }
        #[test]
        fn test_not_idempotent() {
            let f = Fp12::rand(&mut OsRng);
            let once = final_exponentiation::<Bn254>(&f);
            let twice = final_exponentiation::<Bn254>(&once);
            assert_ne!(once, twice);
        }
        #[test]
        fn test_exp_by_neg_z() {
            let f = final_exponentiation_first_chunk::<Bn254>(&Fp12::rand(&mut OsRng));
            let z = exp_by_neg_z::<Bn254>(&f);
            assert!((z * f.cyclotomic_exp(Bn254::FINAL_EXPONENT_Z)).is_one());
        }
        #[test]
        fn test_exp_by_positive_z() {
            let f = final_exponentiation_first_chunk::<Bn254>(&Fp12::rand(&mut OsRng));
            let pos = exp_by_neg_z::<NegatedBn254>(&f);
            let neg = exp_by_neg_z::<Bn254>(&f);
            assert_eq!(pos, f.cyclotomic_exp(Bn254::FINAL_EXPONENT_Z));
            assert!((pos * neg).is_one());
            assert_ne!(pos, neg);
        }
    }
    mod pairing_tests {
        use super::*;

        #[test]
        fn test_identities() {
            let p = G1Projective::generator();
            let q = G2Projective::generator();
            assert!(pairing(&G1Projective::zero(), &q).is_identity());
            assert!(pairing(&p, &G2Projective::zero()).is_identity());
            assert!(pairing(&G1Projective::zero(), &G2Projective::zero()).is_identity());
            assert_ne!(pairing(&p, &q), pairing(&-p, &q));
            assert_eq!(pairing(&-p, &q), -pairing(&p, &q));
        }
        #[test]
        fn test_cases() {
            let a = Fr::new_from_str(
                "18097487326282793650237947474982649264364522469319914492172746413872781676",
            )
            .expect("a failed");
            let b = Fr::new_from_str(
                "20390255904278144451778773028944684152769293537511418234311120800877067946",
            )
            .expect("b failed");
            let gt = pairing(&(G1Projective::generator() * a), &(G2Projective::generator() * b));

            let expected = Fp12::new(&[
                Fp6::new(&[
                    Fp2::new(&[
                        decimal("7520311483001723614143802378045727372643587653754534704390832890681688842501"),
                        decimal("20265650864814324826731498061022229653175757397078253377158157137251452249882"),
                    ]),
                    Fp2::new(&[
                        decimal("11942254371042183455193243679791334797733902728447312943687767053513298221130"),
                        decimal("759657045325139626991751731924144629256296901790485373000297868065176843620"),
                    ]),
                    Fp2::new(&[
                        decimal("16045761475400271697821392803010234478356356448940805056528536884493606035236"),
                        decimal("4715626119252431692316067698189337228571577552724976915822652894333558784086"),
                    ]),
                ]),
                Fp6::new(&[
                    Fp2::new(&[
                        decimal("6986294508476392240539608676645555363696979606233509658454309621735655805621"),
                        decimal("10795039124762034131680638741287548653423997235951969843303977224434391829480"),
                    ]),
                    Fp2::new(&[
                        decimal("3990407473654474019443902159084923381193535985363587911469274341478429387830"),
                        decimal("20543725046669957060960647371204553079890049418181680749871230241587345862029"),
                    ]),
                    Fp2::new(&[
                        decimal("10764345974588180689336822972295368863695493164673322761980605572981140407745"),
                        decimal("4434872423559193408970819488281057326066679996745494386103163823280771353933"),
                    ]),
                ]),
            ]);
            assert_eq!(gt.0, expected);
            assert_eq!(gt, Gt::generator() * (a * b));
        }
        #[test]
        fn test_bilinearity() {
            for _ in 0..3 {
                let p = G1Projective::rand(&mut OsRng);
                let q = G2Projective::rand(&mut OsRng);
                let (a, b) = (rand_fr(), rand_fr());
                let e = pairing(&p, &q);
                assert_eq!(pairing(&(p * a), &(q * b)), e * (a * b));
                assert_eq!(pairing(&(p * a), &q), pairing(&p, &(q * a)));
                assert!(!e.is_identity());
            }
        }
        #[test]
        fn test_additivity() {
            let p1 = G1Projective::rand(&mut OsRng);
            let p2 = G1Projective::rand(&mut OsRng);
            let q1 = G2Projective::rand(&mut OsRng);
            let q2 = G2Projective::rand(&mut OsRng);
            assert_eq!(pairing(&(p1 + p2), &q1), pairing(&p1, &q1) + pairing(&p2, &q1));
            assert_eq!(pairing(&p1, &(q1 + q2)), pairing(&p1, &q1) + pairing(&p1, &q2));
        }
        #[test]
        fn test_generic_matches_bn254() {
            let p = G1Projective::rand(&mut OsRng);
            let q = G2Projective::rand(&mut OsRng);
            assert_eq!(pairing(&p, &q).0, pair_reduced::<Bn254>(&p, &q));
        }
    }
}
