use tracing::warn;

use super::{Capability, SpeechCapture, SpeechPlayback, UtteranceId, Voice, VoiceSettings};
use crate::error::{LevoError, Result};

/// Stand-in for hosts without a speech recogniser.
#[derive(Debug, Default)]
pub struct UnavailableCapture;

impl SpeechCapture for UnavailableCapture {
    fn start(&mut self) -> Result<()> {
        warn!("speech capture not supported on this host; ignoring start");
        Err(LevoError::CapabilityUnavailable(Capability::Capture))
    }

    fn stop(&mut self) -> Result<()> {
        Err(LevoError::CapabilityUnavailable(Capability::Capture))
    }
}

/// Stand-in for hosts without text-to-speech. Replies stay text-only.
#[derive(Debug, Default)]
pub struct UnavailablePlayback;

impl SpeechPlayback for UnavailablePlayback {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn configure(&mut self, _settings: &VoiceSettings) -> Result<()> {
        Err(LevoError::CapabilityUnavailable(Capability::Playback))
    }

    fn speak(&mut self, _id: UtteranceId, _text: &str) -> Result<()> {
        warn!("speech synthesis not supported on this host; reply stays text-only");
        Err(LevoError::CapabilityUnavailable(Capability::Playback))
    }

    fn cancel(&mut self) -> Result<()> {
        Err(LevoError::CapabilityUnavailable(Capability::Playback))
    }
}
