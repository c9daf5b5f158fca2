use serde::{Deserialize, Serialize};

/// Turn-taking phase of the session. Exactly one is live at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractionState {
    /// Waiting for the user. Nothing is captured or spoken.
    #[default]
    Idle,
    /// Capture is running, waiting for a finalized transcript.
    Listening,
    /// Input accepted; classifying and "thinking".
    Processing,
    /// The reply is being played back.
    Speaking,
}

/// Requests that move the turn forward. The graph decides whether they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRequest {
    BeginCapture,
    EndCapture,
    InputAccepted,
    InputRejected,
    ReplyReady,
    PlaybackFinished,
    Interrupted,
}

/// Transition table for [`InteractionState`].
pub struct TurnGraph;

impl TurnGraph {
    /// Pure function: (Current State, Request) -> New State.
    /// `None` means the request does not apply and must be ignored.
    pub fn transition(current: InteractionState, request: TurnRequest) -> Option<InteractionState> {
        use InteractionState::*;
        use TurnRequest::*;

        match (current, request) {
            // --- From Idle ---
            (Idle, BeginCapture) => Some(Listening),
            (Idle, InputAccepted) => Some(Processing), // typed input skips capture

            // --- From Listening ---
            (Listening, EndCapture) => Some(Idle),
            (Listening, InputRejected) => Some(Idle),
            (Listening, InputAccepted) => Some(Processing),

            // --- From Processing ---
            (Processing, ReplyReady) => Some(Speaking),

            // --- From Speaking ---
            (Speaking, PlaybackFinished) => Some(Idle),
            (Speaking, Interrupted) => Some(Idle),

            // Capture never starts over Processing/Speaking; everything else is a no-op.
            _ => None,
        }
    }
}
