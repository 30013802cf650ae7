#![no_main]
use crypto_bigint::U256;
use libfuzzer_sys::fuzz_target;
use num_traits::Zero;
use optimal_ate::{
    double_miller_loop, final_exponentiation, pairing, precompute_g1, precompute_g2, Bn254,
    Fp12, Fr, G1Affine, G1Projective, G2Projective, GroupTrait, Gt,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }
    let a = Fr::new(U256::from_le_slice(&data[..32]));
    let b = Fr::new(U256::from_le_slice(&data[32..64]));
    if a.is_zero() || b.is_zero() {
        return;
    }

    let p = G1Projective::generator() * a;
    let q = G2Projective::generator() * b;

    // group law
    assert_eq!(p.double(), p + p, "G1 doubling failed");
    assert_eq!(q.double(), q + q, "G2 doubling failed");
    assert_eq!(p.mixed_add(&G1Affine::generator()), p + G1Projective::generator());
    assert_eq!(q.endomorphism(), q * Fr::new(U256::from_u128(147946756881789318990833708069417712966)));

    // bilinearity
    let e = pairing(&p, &q);
    assert_eq!(e, Gt::generator() * (a * b), "Pairing bilinearity property failed");
    assert_ne!(e, Gt::identity(), "Pairing result should not be identity");
    assert_eq!(&(e * -Fr::ONE) + &e, Gt::identity(), "Pairing inverse property failed");

    // e(aP, bQ) e(-abP, Q) = 1
    let f = double_miller_loop(
        &precompute_g1::<Bn254>(&p),
        &precompute_g2::<Bn254>(&q),
        &precompute_g1::<Bn254>(&-(G1Projective::generator() * (a * b))),
        &precompute_g2::<Bn254>(&G2Projective::generator()),
    );
    assert_eq!(final_exponentiation::<Bn254>(&f), <Fp12 as num_traits::One>::one());
});
