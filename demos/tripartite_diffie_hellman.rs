//! # Tripartite Diffie-Hellman
//!
//! Joux's one round key exchange between three parties. Each party publishes its secret times
//! the generators of both source groups, and derives the shared key by pairing the other two
//! parties' public values and raising to its own secret:
//!
//! $e(bP, cQ)^a = e(aP, cQ)^b = e(aP, bQ)^c = e(P, Q)^{abc}$

use rand_core::OsRng;
use optimal_ate::{pairing, FieldExtensionTrait, Fr, G1Projective, G2Projective, GroupTrait, Gt};
use tracing::{debug, info};

/// One participant, with its secret and the public values it broadcasts
struct Party {
    name: &'static str,
    secret: Fr,
    public_g1: G1Projective,
    public_g2: G2Projective,
}

impl Party {
    fn new(name: &'static str) -> Self {
        let secret = <Fr as FieldExtensionTrait<1, 1>>::rand(&mut OsRng);
        debug!(name, "generated secret");
        Self {
            name,
            secret,
            public_g1: G1Projective::generator() * secret,
            public_g2: G2Projective::generator() * secret,
        }
    }
    /// The shared key, from the first group element of one peer and the second of the other.
    fn shared_key(&self, left: &Party, right: &Party) -> Gt {
        pairing(&left.public_g1, &right.public_g2) * self.secret
    }
}

fn main() {
    tracing_subscriber::fmt().init();
    let alice = Party::new("alice");
    let bob = Party::new("bob");
    let carol = Party::new("carol");

    let k_alice = alice.shared_key(&bob, &carol);
    let k_bob = bob.shared_key(&carol, &alice);
    let k_carol = carol.shared_key(&alice, &bob);

    assert_eq!(k_alice, k_bob, "{} and {} disagree", alice.name, bob.name);
    assert_eq!(k_bob, k_carol, "{} and {} disagree", bob.name, carol.name);

    let expected = Gt::generator() * (alice.secret * bob.secret * carol.secret);
    assert_eq!(k_alice, expected);
    info!("all three parties derived the same key");
}
