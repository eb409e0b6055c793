use crate::RandSource;
use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};
use parking_lot::Mutex;

/// A `RandSource` backed by a seeded [`StdRng`].
///
/// Two instances built from the same seed yield the same sequence, which makes
/// verdict text reproducible. The generator sits behind a mutex so the source
/// can be shared across threads.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandSource<u64> for SeededRandom {
    fn rand(&self) -> u64 {
        self.rng.lock().random()
    }
}
