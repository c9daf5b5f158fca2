//! Platform speech capabilities consumed by the kernel.
//!
//! The kernel only drives these through the two traits below. Results come back
//! as [`CaptureEvent`] / [`PlaybackEvent`] messages posted into the controller's
//! inbox, never as blocking calls.

pub mod command;
pub mod mock;
pub mod unavailable;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

pub const MIN_RATE: f32 = 0.5;
pub const MAX_RATE: f32 = 2.0;
pub const MIN_PITCH: f32 = 0.5;
pub const MAX_PITCH: f32 = 2.0;

const PREFERRED_VOICE_HINTS: [&str; 4] = ["female", "samantha", "karen", "victoria"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Capture,
    Playback,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Capture => write!(f, "speech capture"),
            Capability::Playback => write!(f, "speech playback"),
        }
    }
}

/// Identity of a single spoken reply. Playback events are matched against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtteranceId(pub Uuid);

impl UtteranceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UtteranceId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub language_tag: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    pub voice_id: Option<String>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            voice_id: None,
            rate: 1.0,
            pitch: 1.0,
            volume: 0.8,
        }
    }
}

impl VoiceSettings {
    /// Pull every knob back into its supported range.
    pub fn clamped(&self) -> Self {
        Self {
            voice_id: self.voice_id.clone(),
            rate: self.rate.clamp(MIN_RATE, MAX_RATE),
            pitch: self.pitch.clamp(MIN_PITCH, MAX_PITCH),
            volume: self.volume.clamp(0.0, 1.0),
        }
    }
}

/// Notifications from the capture side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// One finalized utterance.
    Transcript(String),
    /// The recogniser stopped on its own without producing a transcript.
    Ended,
    Error(String),
}

/// Notifications from the playback side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    Started(UtteranceId),
    Ended(UtteranceId),
    Error { id: UtteranceId, message: String },
}

impl PlaybackEvent {
    pub fn utterance(&self) -> UtteranceId {
        match self {
            PlaybackEvent::Started(id) | PlaybackEvent::Ended(id) => *id,
            PlaybackEvent::Error { id, .. } => *id,
        }
    }
}

pub trait SpeechCapture: Send {
    fn start(&mut self) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
}

pub trait SpeechPlayback: Send {
    fn voices(&self) -> Vec<Voice>;
    fn configure(&mut self, settings: &VoiceSettings) -> Result<()>;
    /// Starts speaking `text`. Implementations cancel any pending utterance first.
    fn speak(&mut self, id: UtteranceId, text: &str) -> Result<()>;
    fn cancel(&mut self) -> Result<()>;
}

/// Picks the default voice: English only, warm-sounding names first.
pub fn preferred_voice(voices: &[Voice]) -> Option<&Voice> {
    let mut english = voices.iter().filter(|v| v.language_tag.starts_with("en"));
    let first = english.clone().next();
    english
        .find(|v| {
            let name = v.name.to_lowercase();
            PREFERRED_VOICE_HINTS.iter().any(|hint| name.contains(hint))
        })
        .or(first)
}
