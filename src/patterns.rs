//! Input generators for the visualizer, the benchmarks and the tests.

use std::env;

use once_cell::sync::OnceCell;
use rand::distributions::uniform::SampleRange;
use rand::prelude::*;
use rand::rngs::StdRng;
use zipf::ZipfDistribution;

/// Environment variable that pins the process wide seed.
pub const SEED_ENV: &str = "SORT_VIZ_SEED";

static SEED: OnceCell<u64> = OnceCell::new();

/// The process wide seed, read from `SORT_VIZ_SEED` or drawn from entropy on first use.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        env::var(SEED_ENV)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

pub fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// `len` values drawn uniformly from `range`.
pub fn random_uniform<R, S>(len: usize, range: S, rng: &mut R) -> Vec<i32>
where
    R: Rng,
    S: SampleRange<i32> + Clone,
{
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipf distributed values in `1..=len`, many duplicates for larger `exponent`.
pub fn random_zipf<R: Rng>(len: usize, exponent: f64, rng: &mut R) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    // `new` only fails for zero elements or a non-positive exponent.
    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => return all_equal(len),
    };

    (0..len).map(|_| dist.sample(rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}
