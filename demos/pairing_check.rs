//! Verifies batches of BLS-style statements $e(\sigma, Q) = e(M, X)$ with one
//! [`double_miller_loop`] and one final exponentiation each, reusing the precomputed
//! coefficients of the two fixed $\mathbb{G}_2$ points across the whole batch.

use crypto_bigint::rand_core::OsRng;
use num_traits::One;
use optimal_ate::{
    double_miller_loop, final_exponentiation, precompute_g1, precompute_g2, Bn254,
    FieldExtensionTrait, Fp12, Fr, G1Projective, G2Projective, GroupTrait,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Configuration for the pairing check
#[derive(Debug, Serialize, Deserialize)]
struct PairingCheckConfig {
    /// Number of batches to verify
    n_rounds: u32,
    /// Number of statements per batch
    batch_size: u32,
}

impl Default for PairingCheckConfig {
    fn default() -> Self {
        Self {
            n_rounds: 1,
            batch_size: 4,
        }
    }
}

/// Ways a run of the pairing check can fail
#[allow(dead_code)]
#[derive(Debug)]
enum PairingCheckError {
    /// the configuration file could not be read
    Config(confy::ConfyError),
    /// some rounds saw a check accept a forgery or reject a valid statement
    RoundsFailed { passed: usize, rounds: usize },
}

impl From<confy::ConfyError> for PairingCheckError {
    fn from(e: confy::ConfyError) -> Self {
        PairingCheckError::Config(e)
    }
}

fn run_round(round_id: u32, cfg: &PairingCheckConfig) -> bool {
    let secret = <Fr as FieldExtensionTrait<1, 1>>::rand(&mut OsRng);
    let public_key = G2Projective::generator() * secret;

    // both G2 points are fixed for the round, so their lines are computed once
    let generator = precompute_g2::<Bn254>(&G2Projective::generator());
    let public_key = precompute_g2::<Bn254>(&public_key);
    debug!(round_id, coeffs = generator.coeffs.len(), "precomputed G2 points");

    let mut all_valid = true;
    for i in 0..cfg.batch_size {
        let message = G1Projective::rand(&mut OsRng);
        let mut signature = message * secret;
        // every third statement carries a forged signature
        let forged = i % 3 == 2;
        if forged {
            signature = signature.double();
        }
        // e(sigma, Q) e(-M, X) = 1
        let f = double_miller_loop(
            &precompute_g1::<Bn254>(&signature),
            &generator,
            &precompute_g1::<Bn254>(&-message),
            &public_key,
        );
        let valid = final_exponentiation::<Bn254>(&f) == Fp12::one();
        if valid == forged {
            error!(round_id, statement = i, valid, forged, "pairing check disagrees");
            all_valid = false;
        }
    }
    info!(round_id, batch_size = cfg.batch_size, "round completed");
    all_valid
}

fn main() -> Result<(), PairingCheckError> {
    tracing_subscriber::fmt().init();

    let config_path = PathBuf::from("demos/pairing_check.toml");
    let cfg: PairingCheckConfig = confy::load_path(config_path)?;
    debug!("Loaded config: {:?}", cfg);

    let results: Vec<bool> = (0..cfg.n_rounds).map(|r| run_round(r, &cfg)).collect();
    let passed = summarize(&results)?;
    info!(passed, rounds = cfg.n_rounds, "pairing check finished");
    Ok(())
}

/// Counts the rounds that passed, and fails unless all of them did.
fn summarize(results: &[bool]) -> Result<usize, PairingCheckError> {
    let passed = results.iter().filter(|r| **r).count();
    if passed < results.len() {
        error!(passed, rounds = results.len(), "pairing check failed");
        return Err(PairingCheckError::RoundsFailed {
            passed,
            rounds: results.len(),
        });
    }
    Ok(passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(&[true, true]).ok(), Some(2));
        assert_eq!(summarize(&[]).ok(), Some(0));
        match summarize(&[true, false, true]) {
            Err(PairingCheckError::RoundsFailed { passed, rounds }) => {
                assert_eq!((passed, rounds), (2, 3));
            }
            other => panic!("a failed round was not reported: {:?}", other),
        }
    }
    #[test]
    fn test_honest_round_passes() {
        let cfg = PairingCheckConfig {
            n_rounds: 1,
            batch_size: 3,
        };
        assert!(run_round(0, &cfg), "forged and honest statements were confused");
    }
}
