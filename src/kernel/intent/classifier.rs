use super::types::{ClassificationResult, Emotion, Intent};

/// Intent rules in priority order. First match wins.
///
/// Keywords are raw substrings of the lower-cased input, not tokens: "hi"
/// also fires inside "this" and "break" inside "breakfast". That looseness is
/// accepted behaviour.
const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good afternoon"],
    ),
    (
        Intent::Work,
        &["work", "job", "task", "project", "productivity"],
    ),
    (Intent::Break, &["break", "tired", "rest", "exhausted"]),
    (Intent::Help, &["help", "advice", "suggest", "recommend"]),
    (
        Intent::Motivation,
        &["motivat", "inspir", "encourage", "confidence"],
    ),
    (
        Intent::Stress,
        &["stress", "overwhelm", "anxious", "pressure"],
    ),
    (
        Intent::Information,
        &["explain", "what is", "how does", "tell me about"],
    ),
];

/// Emotion rules in priority order: sad > happy > concerned.
const EMOTION_RULES: &[(Emotion, &[&str])] = &[
    (Emotion::Sad, &["sad", "down", "depressed", "upset"]),
    (
        Emotion::Happy,
        &["happy", "great", "excited", "wonderful"],
    ),
    (
        Emotion::Concerned,
        &["stressed", "overwhelmed", "anxious", "worried"],
    ),
];

/// Rule-based input classifier. Total: every input maps to a result.
#[derive(Debug, Default, Clone, Copy)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text_lower = text.to_lowercase();
        ClassificationResult {
            intent: first_match(&text_lower, INTENT_RULES).unwrap_or(Intent::General),
            emotion: first_match(&text_lower, EMOTION_RULES).unwrap_or(Emotion::Neutral),
        }
    }
}

fn first_match<T: Copy>(text_lower: &str, rules: &[(T, &[&str])]) -> Option<T> {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text_lower.contains(k)))
        .map(|(tag, _)| *tag)
}
