use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;

use crate::conf::CONF;

/// A source of pseudo-random deviates.
///
/// Distributions only borrow a source for the duration of a single sampling
/// call; sharing one between threads is up to the caller.
pub trait RandomSource {
    /// Draw a standard normal deviate.
    fn norm_f64(&mut self) -> f64;
    /// Draw a uniform deviate in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn norm_f64(&mut self) -> f64 {
        StandardNormal.sample(self)
    }

    #[inline]
    fn uniform(&mut self) -> f64 {
        Standard.sample(self)
    }
}

const ENTROPY: usize = 32 * 1024;

/// Generator backing [`with_default_rng`].
///
/// When created from OS entropy the generator reseeds itself every
/// 32 Ki draws. A generator created from a fixed seed never reseeds.
pub struct DefaultRng {
    inner: StdRng,
    cnt: usize,
    reseed: bool,
}

impl DefaultRng {
    pub fn new() -> DefaultRng {
        match CONF.rng_seed {
            Some(seed) => DefaultRng::seeded(seed),
            None => DefaultRng {
                inner: StdRng::from_entropy(),
                cnt: 0,
                reseed: true,
            },
        }
    }

    pub fn seeded(seed: u64) -> DefaultRng {
        DefaultRng {
            inner: StdRng::seed_from_u64(seed),
            cnt: 0,
            reseed: false,
        }
    }

    #[inline]
    fn tick(&mut self) {
        self.cnt += 1;
        if self.reseed && self.cnt == ENTROPY {
            self.reseed();
        }
    }

    fn reseed(&mut self) {
        log::trace!("reseeding default rng after {} draws", self.cnt);
        self.inner = StdRng::from_entropy();
        self.cnt = 0;
    }
}

impl Default for DefaultRng {
    fn default() -> DefaultRng {
        DefaultRng::new()
    }
}

impl RngCore for DefaultRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.tick();
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.tick();
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.tick();
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.tick();
        self.inner.try_fill_bytes(dest)
    }
}

use std::fmt;

impl fmt::Debug for DefaultRng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DefaultRng")
    }
}

static DEFAULT_RNG: Lazy<Mutex<DefaultRng>> = Lazy::new(|| Mutex::new(DefaultRng::new()));

/// Borrow the process-wide default random source for the duration of `f`.
pub fn with_default_rng<F, T>(f: F) -> T
where
    F: FnOnce(&mut DefaultRng) -> T,
{
    let mut rng = DEFAULT_RNG.lock();
    f(&mut *rng)
}
