use std::time::Duration;

use rand::{Rng, RngCore};

use crate::config::ThinkingDelayConfig;

/// Randomized "thinking" pause held in `Processing` before a reply is voiced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    min_ms: u64,
    max_ms: u64,
}

impl ThinkingDelay {
    pub fn new(config: ThinkingDelayConfig) -> Self {
        // Inverted bounds collapse to the lower one rather than panicking in gen_range.
        Self {
            min_ms: config.min_ms,
            max_ms: config.max_ms.max(config.min_ms),
        }
    }

    /// Uniform within the inclusive bounds.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_bounds() {
        let delay = ThinkingDelay::new(ThinkingDelayConfig { min_ms: 500, max_ms: 700 });
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let d = delay.sample(&mut rng);
            assert!(d >= Duration::from_millis(500) && d <= Duration::from_millis(700));
        }
    }

    #[test]
    fn inverted_bounds_collapse_to_lower() {
        let delay = ThinkingDelay::new(ThinkingDelayConfig { min_ms: 300, max_ms: 100 });
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(delay.sample(&mut rng), Duration::from_millis(300));
    }

    #[test]
    fn fixed_delay_is_exact() {
        let delay = ThinkingDelay::new(ThinkingDelayConfig::fixed(0));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(delay.sample(&mut rng), Duration::ZERO);
    }
}
