use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokio::sync::oneshot;

use super::intent::types::Emotion;
use super::telemetry::metrics::TelemetrySnapshot;
use crate::speech::{CaptureEvent, PlaybackEvent, Voice, VoiceSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Assistant,
}

/// One exchanged line. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub emotion: Option<Emotion>,
}

impl Message {
    pub fn user(text: &str, emotion: Option<Emotion>) -> Self {
        Self::new(text, Sender::User, emotion)
    }

    pub fn assistant(text: &str, emotion: Emotion) -> Self {
        Self::new(text, Sender::Assistant, Some(emotion))
    }

    fn new(text: &str, sender: Sender, emotion: Option<Emotion>) -> Self {
        Self {
            id: MessageId(Uuid::new_v4()),
            text: text.to_string(),
            sender,
            timestamp: Utc::now(),
            emotion,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputOrigin {
    Voice,
    Typed,
}

/// Requests posted by a UI or driver through a `ControllerHandle`.
///
/// Queries carry a oneshot reply channel, so the running controller answers
/// from its own task.
#[derive(Debug)]
pub enum Command {
    BeginCapture,
    EndCapture,
    Submit { text: String, origin: InputOrigin },
    Clear,
    PreviewVoice,
    SetVoiceSettings(VoiceSettings),
    Voices(oneshot::Sender<Vec<Voice>>),
    Snapshot(oneshot::Sender<TelemetrySnapshot>),
}

/// Everything the controller's inbox accepts.
#[derive(Debug)]
pub enum Event {
    Command(Command),
    Capture(CaptureEvent),
    Playback(PlaybackEvent),
}
