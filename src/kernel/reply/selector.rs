use rand::seq::SliceRandom;
use rand::RngCore;

use super::pools;
use crate::kernel::intent::types::{ClassificationResult, Emotion, Intent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: &'static str,
    pub emotion: Emotion,
}

/// Maps a classified input to reply text and the reply's own emotion tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseSelector;

impl ResponseSelector {
    pub fn new() -> Self {
        Self
    }

    /// Total over every intent. Only `General` looks at the detected emotion.
    pub fn select(&self, result: &ClassificationResult, rng: &mut dyn RngCore) -> Reply {
        match (result.intent, result.emotion) {
            (Intent::General, Emotion::Sad) => Reply {
                text: pools::SUPPORTIVE,
                emotion: Emotion::Concerned,
            },
            (Intent::General, Emotion::Happy) => Reply {
                text: pools::ENTHUSIASTIC,
                emotion: Emotion::Excited,
            },
            (intent, _) => Reply {
                text: pick(pools::pool(intent), rng),
                emotion: pools::reply_emotion(intent),
            },
        }
    }
}

fn pick(pool: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str {
    // Pools are compile-time constants and never empty.
    pool.choose(rng).copied().unwrap_or_default()
}
