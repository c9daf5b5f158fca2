use serde::{Deserialize, Serialize};

use crate::kernel::event::InputOrigin;
use crate::kernel::intent::types::{Emotion, Intent};
use crate::kernel::turn::InteractionState;
use crate::speech::{Capability, UtteranceId};

// Allowed: ids, tags, durations, counts
// Forbidden: text of any kind

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    StateTransition {
        from: InteractionState,
        to: InteractionState,
    },

    TurnCompleted {
        origin: InputOrigin,
        intent: Intent,
        detected: Emotion,
        reply: Emotion,
        thinking_ms: u64,
    },

    InputRejected {
        origin: InputOrigin,
    },

    PlaybackInterrupted {
        utterance: UtteranceId,
    },

    PlaybackFailed {
        utterance: UtteranceId,
    },

    CaptureTimedOut,

    CapabilityUnavailable {
        capability: Capability,
    },

    LogCleared,
}
