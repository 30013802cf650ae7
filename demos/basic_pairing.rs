use optimal_ate::{pairing, Fr, G1Projective, G2Projective, GroupTrait, Gt};
use tracing::{debug, info};

const RANGE: usize = 100;

fn main() {
    tracing_subscriber::fmt().init();
    let mut a = G1Projective::generator();
    let mut b = G2Projective::generator();
    let c = Fr::from(1901u64);
    let d = Fr::from(2344u64);

    // e([c^i] P, [d^i] Q) tracks e(P, Q) * (cd)^i
    let mut expected = Gt::generator();
    for i in 0..RANGE {
        let e = pairing(&a, &b);
        assert_eq!(e, expected, "Pairing is not bilinear at step {i}");
        debug!(step = i, "pairing matched");
        a = a * c;
        b = b * d;
        expected = expected * (c * d);
    }
    info!("{RANGE} pairings computed");
}
