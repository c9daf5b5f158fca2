pub mod classifier;
pub mod types;

pub use classifier::Classifier;
pub use types::{ClassificationResult, Emotion, Intent};
