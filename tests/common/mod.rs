#![allow(dead_code)]

use std::sync::Once;

use rand::SeedableRng;
use rand_pcg::Pcg64;
use statrs::distribution::{Binomial, DiscreteCDF};

static LOGGER: Once = Once::new();

pub fn init_test() {
    LOGGER.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .is_test(true)
            .init();
    });
}

pub fn rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Two-sided exact binomial test: true if observing `k` successes out of
/// `n` trials is consistent with success probability `p` at level `alpha`.
pub fn binomial_accepts(p: f64, n: u64, k: u64, alpha: f64) -> bool {
    let dist = Binomial::new(p, n).unwrap();
    let cdf = dist.cdf(k);
    log::info!("binomial p={p} n={n} k={k} cdf={cdf:.4}");
    cdf >= alpha / 2.0 && cdf <= 1.0 - alpha / 2.0
}
