use levo::kernel::turn::{InteractionState, TurnGraph, TurnRequest};

const ALL_STATES: [InteractionState; 4] = [
    InteractionState::Idle,
    InteractionState::Listening,
    InteractionState::Processing,
    InteractionState::Speaking,
];

const ALL_REQUESTS: [TurnRequest; 7] = [
    TurnRequest::BeginCapture,
    TurnRequest::EndCapture,
    TurnRequest::InputAccepted,
    TurnRequest::InputRejected,
    TurnRequest::ReplyReady,
    TurnRequest::PlaybackFinished,
    TurnRequest::Interrupted,
];

#[test]
fn test_initial_state_is_idle() {
    assert_eq!(InteractionState::default(), InteractionState::Idle);
}

#[test]
fn test_full_voice_turn() {
    let mut current = InteractionState::Idle;
    current = TurnGraph::transition(current, TurnRequest::BeginCapture).expect("capture should start");
    assert_eq!(current, InteractionState::Listening);
    current = TurnGraph::transition(current, TurnRequest::InputAccepted).expect("transcript accepted");
    assert_eq!(current, InteractionState::Processing);
    current = TurnGraph::transition(current, TurnRequest::ReplyReady).expect("reply ready");
    assert_eq!(current, InteractionState::Speaking);
    current = TurnGraph::transition(current, TurnRequest::PlaybackFinished).expect("playback done");
    assert_eq!(current, InteractionState::Idle);
}

#[test]
fn test_typed_input_skips_listening() {
    let next = TurnGraph::transition(InteractionState::Idle, TurnRequest::InputAccepted);
    assert_eq!(next, Some(InteractionState::Processing));
}

#[test]
fn test_capture_refused_while_busy() {
    assert!(TurnGraph::transition(InteractionState::Speaking, TurnRequest::BeginCapture).is_none());
    assert!(TurnGraph::transition(InteractionState::Processing, TurnRequest::BeginCapture).is_none());
    assert!(TurnGraph::transition(InteractionState::Listening, TurnRequest::BeginCapture).is_none());
}

#[test]
fn test_end_capture_outside_listening_is_noop() {
    for state in [InteractionState::Idle, InteractionState::Processing, InteractionState::Speaking] {
        assert!(TurnGraph::transition(state, TurnRequest::EndCapture).is_none());
    }
}

#[test]
fn test_listening_and_speaking_never_adjacent() {
    for state in ALL_STATES {
        for request in ALL_REQUESTS {
            if let Some(next) = TurnGraph::transition(state, request) {
                let pair = (state, next);
                assert_ne!(pair, (InteractionState::Listening, InteractionState::Speaking));
                assert_ne!(pair, (InteractionState::Speaking, InteractionState::Listening));
                assert_ne!(next, state, "{:?} + {:?} should not loop back", state, request);
            }
        }
    }
}

#[test]
fn test_every_edge_follows_turn_order() {
    // Edges allowed by the cycle Idle -> Listening -> Processing -> Speaking -> Idle,
    // skipping states forward but never going back.
    let allowed = [
        (InteractionState::Idle, InteractionState::Listening),
        (InteractionState::Idle, InteractionState::Processing),
        (InteractionState::Listening, InteractionState::Processing),
        (InteractionState::Listening, InteractionState::Idle),
        (InteractionState::Processing, InteractionState::Speaking),
        (InteractionState::Speaking, InteractionState::Idle),
    ];
    for state in ALL_STATES {
        for request in ALL_REQUESTS {
            if let Some(next) = TurnGraph::transition(state, request) {
                assert!(allowed.contains(&(state, next)), "unexpected edge {:?} -> {:?}", state, next);
            }
        }
    }
}
