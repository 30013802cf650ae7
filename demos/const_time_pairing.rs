use dudect_bencher::{ctbench_main, BenchRng, Class, CtRunner};
use optimal_ate::{pairing, Fr, G1Projective, G2Projective, GroupTrait};
use rand::Rng;

/// Left: the identity in G1. Right: a random multiple of the generator. The pairing swaps the
/// identity for the generator without branching, so the two classes should be
/// indistinguishable.
fn bench_pairing_identity(runner: &mut CtRunner, rng: &mut BenchRng) {
    let mut inputs = Vec::new();
    let mut classes = Vec::new();
    let q = G2Projective::generator();

    for _ in 0..1_000 {
        if rng.gen::<bool>() {
            inputs.push(G1Projective::zero());
            classes.push(Class::Left);
        } else {
            let s = Fr::from(rng.gen::<u64>());
            inputs.push(G1Projective::generator() * s);
            classes.push(Class::Right);
        }
    }

    for (p, class) in inputs.into_iter().zip(classes.into_iter()) {
        runner.run_one(class, || {
            let _ = pairing(&p, &q);
        });
    }
}

ctbench_main!(bench_pairing_identity);
