use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse category of user input. Drives reply-pool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Work,
    Break,
    Help,
    Motivation,
    Stress,
    Information,
    /// Fallback when no rule matches.
    General,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Intent::Greeting,
        Intent::Work,
        Intent::Break,
        Intent::Help,
        Intent::Motivation,
        Intent::Stress,
        Intent::Information,
        Intent::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Work => "work",
            Intent::Break => "break",
            Intent::Help => "help",
            Intent::Motivation => "motivation",
            Intent::Stress => "stress",
            Intent::Information => "information",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Affect label attached to a message. Presentation hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    #[default]
    Neutral,
    Excited,
    Concerned,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Neutral,
        Emotion::Excited,
        Emotion::Concerned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Neutral => "neutral",
            Emotion::Excited => "excited",
            Emotion::Concerned => "concerned",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one input. Lives for a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub emotion: Emotion,
}
