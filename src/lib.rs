pub mod config;
pub mod error;
pub mod kernel;
pub mod speech;

// Re-export specific items if needed for convenient access
pub use config::LevoConfig;
pub use error::{LevoError, Result};
pub use kernel::controller::{ControllerHandle, InteractionController, Notification};
pub use kernel::event::{InputOrigin, Message, Sender};
pub use kernel::intent::{ClassificationResult, Classifier, Emotion, Intent};
pub use kernel::turn::InteractionState;
