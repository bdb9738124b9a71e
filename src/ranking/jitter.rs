use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Upper bound (exclusive) of the confidence jitter, in percentage points
pub const DEFAULT_JITTER_SPAN: f64 = 20.0;

/// Source of the random bonus added to each confidence score
pub trait JitterSource: Send + Sync {
    /// Draw one value in `[0, span)`
    fn sample(&self) -> f64;
}

/// Uniform jitter over `[0, span)` from a seedable RNG
pub struct UniformJitter {
    rng: Mutex<StdRng>,
    span: f64,
}

impl UniformJitter {
    /// Entropy-seeded jitter over the default span
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible jitter for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            span: DEFAULT_JITTER_SPAN,
        }
    }

    pub fn with_span(mut self, span: f64) -> Self {
        self.span = span.max(0.0);
        self
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for UniformJitter {
    fn sample(&self) -> f64 {
        if self.span <= 0.0 {
            return 0.0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0.0..self.span)
    }
}

/// Constant jitter, for deterministic scoring
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub f64);

impl FixedJitter {
    pub fn zero() -> Self {
        Self(0.0)
    }
}

impl JitterSource for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}
