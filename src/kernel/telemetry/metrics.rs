use std::collections::{HashMap, VecDeque};

use super::event::TelemetryEvent;
use crate::kernel::event::InputOrigin;
use crate::kernel::intent::types::{Emotion, Intent};
use crate::speech::Capability;

#[derive(Debug, Clone, Default)]
pub struct TelemetrySnapshot {
    pub turn_stats: TurnStats,
    pub intent_counts: HashMap<Intent, u64>,
    pub mood_stats: MoodStats,
    pub playback_stats: PlaybackStats,
    pub capture_stats: CaptureStats,
    pub transitions: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TurnStats {
    pub completed: u64,
    pub voice: u64,
    pub typed: u64,
    pub rejected_inputs: u64,
    pub total_thinking_ms: u64,
    pub avg_thinking_ms: f64,
}

/// Distribution of emotions detected in user input, as whole percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodStats {
    pub happy: u8,
    pub sad: u8,
    pub neutral: u8,
    pub concerned: u8,
}

#[derive(Debug, Clone, Default)]
pub struct PlaybackStats {
    pub interrupted: u64,
    pub failed: u64,
    pub unavailable: u64,
}

#[derive(Debug, Clone, Default)]
pub struct CaptureStats {
    pub timeouts: u64,
    pub unavailable: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();
    let mut detected: HashMap<Emotion, u64> = HashMap::new();

    for event in events {
        match event {
            TelemetryEvent::StateTransition { .. } => snap.transitions += 1,
            TelemetryEvent::TurnCompleted {
                origin,
                intent,
                detected: emotion,
                thinking_ms,
                ..
            } => {
                snap.turn_stats.completed += 1;
                match origin {
                    InputOrigin::Voice => snap.turn_stats.voice += 1,
                    InputOrigin::Typed => snap.turn_stats.typed += 1,
                }
                snap.turn_stats.total_thinking_ms += thinking_ms;
                *snap.intent_counts.entry(*intent).or_default() += 1;
                *detected.entry(*emotion).or_default() += 1;
            }
            TelemetryEvent::InputRejected { .. } => snap.turn_stats.rejected_inputs += 1,
            TelemetryEvent::PlaybackInterrupted { .. } => snap.playback_stats.interrupted += 1,
            TelemetryEvent::PlaybackFailed { .. } => snap.playback_stats.failed += 1,
            TelemetryEvent::CaptureTimedOut => snap.capture_stats.timeouts += 1,
            TelemetryEvent::CapabilityUnavailable { capability } => match capability {
                Capability::Capture => snap.capture_stats.unavailable += 1,
                Capability::Playback => snap.playback_stats.unavailable += 1,
            },
            TelemetryEvent::LogCleared => {}
        }
    }

    if snap.turn_stats.completed > 0 {
        snap.turn_stats.avg_thinking_ms =
            snap.turn_stats.total_thinking_ms as f64 / snap.turn_stats.completed as f64;

        let total = snap.turn_stats.completed as f64;
        let pct = |e: Emotion| {
            let n = detected.get(&e).copied().unwrap_or(0) as f64;
            (n / total * 100.0).round() as u8
        };
        snap.mood_stats = MoodStats {
            happy: pct(Emotion::Happy),
            sad: pct(Emotion::Sad),
            neutral: pct(Emotion::Neutral),
            concerned: pct(Emotion::Concerned),
        };
    }

    snap
}
