use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws for the snapshot generator.
pub trait EntropySource {
    /// Uniform draw from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
    /// Uniform draw from `[low, high]`.
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng> EntropySource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        return self.gen_range(low..high);
    }

    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        return self.gen_range(low..=high);
    }
}

/// Builds one fresh source per request.
pub type EntropyFactory = Arc<dyn Fn() -> Box<dyn EntropySource> + Send + Sync>;

pub fn thread_local() -> EntropyFactory {
    return Arc::new(|| -> Box<dyn EntropySource> { Box::new(rand::thread_rng()) });
}

/// Every source starts from the same seed, so every snapshot is identical.
pub fn seeded(seed: u64) -> EntropyFactory {
    return Arc::new(move || -> Box<dyn EntropySource> {
        Box::new(StdRng::seed_from_u64(seed))
    });
}
