//! Recording doubles for the speech capabilities.
//!
//! Each double hands out a probe sharing its journal, so a test can keep
//! inspecting calls after the double itself was moved into a controller.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{SpeechCapture, SpeechPlayback, UtteranceId, Voice, VoiceSettings};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackCall {
    Configure(VoiceSettings),
    Speak { id: UtteranceId, text: String },
    Cancel,
}

#[derive(Debug, Default)]
struct PlaybackJournal {
    calls: Vec<PlaybackCall>,
    active: Option<UtteranceId>,
    overlaps: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PlaybackProbe {
    journal: Arc<Mutex<PlaybackJournal>>,
}

impl PlaybackProbe {
    fn lock(&self) -> MutexGuard<'_, PlaybackJournal> {
        self.journal.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn calls(&self) -> Vec<PlaybackCall> {
        self.lock().calls.clone()
    }

    pub fn spoken(&self) -> Vec<(UtteranceId, String)> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                PlaybackCall::Speak { id, text } => Some((*id, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn last_utterance(&self) -> Option<UtteranceId> {
        self.spoken().last().map(|(id, _)| *id)
    }

    /// The utterance the double considers audible right now.
    pub fn active(&self) -> Option<UtteranceId> {
        self.lock().active
    }

    /// Times `speak` found another utterance still audible.
    pub fn overlaps(&self) -> usize {
        self.lock().overlaps
    }

    /// Marks the active utterance finished, as the platform would on `ended`.
    pub fn finish(&self) -> Option<UtteranceId> {
        self.lock().active.take()
    }
}

/// Playback double. Like a real synthesiser, `speak` implicitly cancels
/// whatever was playing.
#[derive(Debug)]
pub struct MockPlayback {
    probe: PlaybackProbe,
    voices: Vec<Voice>,
}

impl MockPlayback {
    pub fn new() -> (Self, PlaybackProbe) {
        let probe = PlaybackProbe::default();
        let voices = vec![
            Voice {
                name: "Daniel".to_string(),
                language_tag: "en-GB".to_string(),
                id: "daniel".to_string(),
            },
            Voice {
                name: "Samantha".to_string(),
                language_tag: "en-US".to_string(),
                id: "samantha".to_string(),
            },
        ];
        (
            Self {
                probe: probe.clone(),
                voices,
            },
            probe,
        )
    }
}

impl SpeechPlayback for MockPlayback {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn configure(&mut self, settings: &VoiceSettings) -> Result<()> {
        self.probe.lock().calls.push(PlaybackCall::Configure(settings.clone()));
        Ok(())
    }

    fn speak(&mut self, id: UtteranceId, text: &str) -> Result<()> {
        let mut journal = self.probe.lock();
        if journal.active.is_some() {
            journal.overlaps += 1;
        }
        journal.active = Some(id);
        journal.calls.push(PlaybackCall::Speak {
            id,
            text: text.to_string(),
        });
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        let mut journal = self.probe.lock();
        journal.active = None;
        journal.calls.push(PlaybackCall::Cancel);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct CaptureJournal {
    starts: usize,
    stops: usize,
    active: bool,
    overlaps: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CaptureProbe {
    journal: Arc<Mutex<CaptureJournal>>,
}

impl CaptureProbe {
    fn lock(&self) -> MutexGuard<'_, CaptureJournal> {
        self.journal.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn starts(&self) -> usize {
        self.lock().starts
    }

    pub fn stops(&self) -> usize {
        self.lock().stops
    }

    pub fn is_active(&self) -> bool {
        self.lock().active
    }

    pub fn overlaps(&self) -> usize {
        self.lock().overlaps
    }
}

#[derive(Debug)]
pub struct MockCapture {
    probe: CaptureProbe,
}

impl MockCapture {
    pub fn new() -> (Self, CaptureProbe) {
        let probe = CaptureProbe::default();
        (Self { probe: probe.clone() }, probe)
    }
}

impl SpeechCapture for MockCapture {
    fn start(&mut self) -> Result<()> {
        let mut journal = self.probe.lock();
        if journal.active {
            journal.overlaps += 1;
        }
        journal.active = true;
        journal.starts += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        let mut journal = self.probe.lock();
        journal.active = false;
        journal.stops += 1;
        Ok(())
    }
}
