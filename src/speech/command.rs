//! Playback through the host's text-to-speech command (`say` on macOS,
//! `espeak` elsewhere). Each utterance is one child process.

use std::process::Stdio;

use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::{PlaybackEvent, SpeechPlayback, UtteranceId, Voice, VoiceSettings};
use crate::error::{LevoError, Result};
use crate::kernel::event::Event;

/// Words per minute both synthesizers treat as a normal speaking rate.
const BASE_WPM: f32 = 175.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Synthesizer {
    Say,
    Espeak,
}

impl Synthesizer {
    pub fn program(&self) -> &'static str {
        match self {
            Synthesizer::Say => "say",
            Synthesizer::Espeak => "espeak",
        }
    }

    fn list_args(&self) -> &'static [&'static str] {
        match self {
            Synthesizer::Say => &["-v", "?"],
            Synthesizer::Espeak => &["--voices"],
        }
    }

    /// Command line for one utterance. `say` has no pitch or volume switch.
    pub fn speak_args(&self, settings: &VoiceSettings, text: &str) -> Vec<String> {
        let settings = settings.clamped();
        let wpm = (BASE_WPM * settings.rate).round() as u32;
        let mut args = Vec::new();
        if let Some(voice) = &settings.voice_id {
            args.push("-v".to_string());
            args.push(voice.clone());
        }
        match self {
            Synthesizer::Say => {
                args.push("-r".to_string());
                args.push(wpm.to_string());
            }
            Synthesizer::Espeak => {
                args.push("-s".to_string());
                args.push(wpm.to_string());
                args.push("-p".to_string());
                args.push(((settings.pitch * 50.0).round() as u32).min(99).to_string());
                args.push("-a".to_string());
                args.push(((settings.volume * 100.0).round() as u32).to_string());
            }
        }
        args.push(text.to_string());
        args
    }

    /// Parses the synthesizer's voice listing.
    pub fn parse_voices(&self, listing: &str) -> Vec<Voice> {
        match self {
            // "Alex                en_US    # Most people recognize me by my voice."
            Synthesizer::Say => listing
                .lines()
                .filter_map(|line| {
                    let (head, _) = line.split_once('#')?;
                    let (name, lang) = head.trim().rsplit_once(char::is_whitespace)?;
                    let name = name.trim();
                    if name.is_empty() {
                        return None;
                    }
                    Some(Voice {
                        name: name.to_string(),
                        language_tag: lang.replace('_', "-"),
                        id: name.to_string(),
                    })
                })
                .collect(),
            // "Pty Language  Age/Gender VoiceName   File   Other Languages"
            // " 5  en-gb     M          english     gmw/en (en 2)"
            Synthesizer::Espeak => listing
                .lines()
                .skip_while(|line| line.trim_start().starts_with("Pty"))
                .filter_map(|line| {
                    let fields: Vec<&str> = line.split_whitespace().collect();
                    if fields.len() < 4 {
                        return None;
                    }
                    Some(Voice {
                        name: fields[3].to_string(),
                        language_tag: fields[1].to_string(),
                        id: fields[1].to_string(),
                    })
                })
                .collect(),
        }
    }
}

pub struct CommandPlayback {
    synth: Synthesizer,
    settings: VoiceSettings,
    voices: Vec<Voice>,
    events: mpsc::Sender<Event>,
    stop: Option<oneshot::Sender<()>>,
}

impl CommandPlayback {
    pub fn new(synth: Synthesizer, events: mpsc::Sender<Event>) -> Self {
        Self {
            synth,
            settings: VoiceSettings::default(),
            voices: Vec::new(),
            events,
            stop: None,
        }
    }

    /// Finds the first synthesizer on `PATH` and loads its voice catalogue.
    pub async fn detect(events: mpsc::Sender<Event>) -> Option<Self> {
        for synth in [Synthesizer::Say, Synthesizer::Espeak] {
            if which::which(synth.program()).is_err() {
                continue;
            }
            let mut playback = Self::new(synth, events.clone());
            playback.voices = playback.load_voices().await;
            info!(
                "Playback via '{}' ({} voices)",
                synth.program(),
                playback.voices.len()
            );
            return Some(playback);
        }
        None
    }

    async fn load_voices(&self) -> Vec<Voice> {
        match Command::new(self.synth.program())
            .args(self.synth.list_args())
            .output()
            .await
        {
            Ok(out) if out.status.success() => {
                self.synth.parse_voices(&String::from_utf8_lossy(&out.stdout))
            }
            Ok(out) => {
                warn!("'{}' voice listing exited with {}", self.synth.program(), out.status);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to list voices via '{}': {}", self.synth.program(), e);
                Vec::new()
            }
        }
    }

    fn stop_pending(&mut self) {
        if let Some(stop_tx) = self.stop.take() {
            let _ = stop_tx.send(());
        }
    }
}

impl SpeechPlayback for CommandPlayback {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn configure(&mut self, settings: &VoiceSettings) -> Result<()> {
        self.settings = settings.clamped();
        Ok(())
    }

    fn speak(&mut self, id: UtteranceId, text: &str) -> Result<()> {
        self.stop_pending();

        let mut child = Command::new(self.synth.program())
            .args(self.synth.speak_args(&self.settings, text))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| LevoError::Playback(format!("cannot spawn '{}': {}", self.synth.program(), e)))?;

        let (stop_tx, mut stop_rx) = oneshot::channel();
        self.stop = Some(stop_tx);
        let events = self.events.clone();

        tokio::spawn(async move {
            let _ = events.send(Event::Playback(PlaybackEvent::Started(id))).await;

            let outcome = tokio::select! {
                status = child.wait() => match status {
                    Ok(status) if status.success() => PlaybackEvent::Ended(id),
                    Ok(status) => PlaybackEvent::Error { id, message: format!("synthesizer exited with {status}") },
                    Err(e) => PlaybackEvent::Error { id, message: e.to_string() },
                },
                _ = &mut stop_rx => {
                    let _ = child.kill().await;
                    debug!("Utterance {:?} cancelled", id);
                    return;
                }
            };
            let _ = events.send(Event::Playback(outcome)).await;
        });

        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        self.stop_pending();
        Ok(())
    }
}
