use super::event::{Message, Sender};
use super::intent::types::Emotion;
use super::log::ConversationLog;
use super::turn::InteractionState;
use crate::speech::UtteranceId;

/// Strict state delta. This is the ONLY way session state mutates.
#[derive(Debug, Clone)]
pub enum StateDelta {
    Transition(InteractionState),
    MessageAppended(Message),
    LogCleared,
    EmotionDetected(Emotion),
    CaptureStarted,
    CaptureStopped,
    UtteranceStarted(UtteranceId),
    UtteranceFinished,
}

/// The one session object. Owned by the controller; observers get read-only views.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    interaction: InteractionState,
    log: ConversationLog,
    // Tone of the latest reply; what the avatar shows.
    mood: Option<Emotion>,
    last_detected: Option<Emotion>,
    capturing: bool,
    active_utterance: Option<UtteranceId>,
    /// Monotonic, bumped by every reduction.
    pub version: u64,
}

impl SessionState {
    pub fn new(max_messages: Option<usize>) -> Self {
        Self {
            log: ConversationLog::with_capacity_limit(max_messages),
            ..Self::default()
        }
    }

    /// Pure reduction: State + Delta -> Mutated State
    pub fn reduce(&mut self, delta: StateDelta) {
        self.version += 1;

        match delta {
            StateDelta::Transition(next) => {
                self.interaction = next;
            }
            StateDelta::MessageAppended(message) => {
                if message.sender == Sender::Assistant {
                    self.mood = message.emotion;
                }
                self.log.append(message);
            }
            StateDelta::LogCleared => {
                self.log.clear();
                self.mood = None;
                self.last_detected = None;
            }
            StateDelta::EmotionDetected(emotion) => {
                self.last_detected = Some(emotion);
            }
            StateDelta::CaptureStarted => self.capturing = true,
            StateDelta::CaptureStopped => self.capturing = false,
            StateDelta::UtteranceStarted(id) => {
                self.active_utterance = Some(id);
            }
            StateDelta::UtteranceFinished => {
                self.active_utterance = None;
            }
        }
    }

    // Read-only accessors
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn mood(&self) -> Option<Emotion> {
        self.mood
    }

    pub fn last_detected(&self) -> Option<Emotion> {
        self.last_detected
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn active_utterance(&self) -> Option<UtteranceId> {
        self.active_utterance
    }
}
