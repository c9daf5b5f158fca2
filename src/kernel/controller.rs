use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{sleep, sleep_until, Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::event::{Command, Event, InputOrigin, Message};
use super::intent::types::Emotion;
use super::intent::Classifier;
use super::latency::ThinkingDelay;
use super::log::ConversationLog;
use super::reply::pools::VOICE_PREVIEW;
use super::reply::ResponseSelector;
use super::state::{SessionState, StateDelta};
use super::telemetry::event::TelemetryEvent;
use super::telemetry::metrics::TelemetrySnapshot;
use super::telemetry::recorder::TelemetryRecorder;
use super::turn::{InteractionState, TurnGraph, TurnRequest};
use crate::config::LevoConfig;
use crate::error::{LevoError, Result};
use crate::speech::unavailable::{UnavailableCapture, UnavailablePlayback};
use crate::speech::{
    preferred_voice, Capability, CaptureEvent, PlaybackEvent, SpeechCapture, SpeechPlayback,
    UtteranceId, Voice, VoiceSettings,
};

const NOTIFY_CAPACITY: usize = 64;

/// Something an observer (UI) may want to surface. Never fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    CapabilityUnavailable(Capability),
    PlaybackError(String),
    CaptureError(String),
    CaptureTimedOut,
}

/// Broadcast to every subscriber.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    StateChanged {
        from: InteractionState,
        to: InteractionState,
    },
    MessageAppended(Message),
    LogCleared,
    Diagnostic(Diagnostic),
}

/// Cloneable front door for UIs and drivers. Requests are queued and run in order.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    tx: mpsc::Sender<Event>,
}

impl ControllerHandle {
    pub async fn send(&self, event: Event) -> Result<()> {
        self.tx.send(event).await.map_err(|_| LevoError::ControllerClosed)
    }

    pub async fn begin_capture(&self) -> Result<()> {
        self.send(Event::Command(Command::BeginCapture)).await
    }

    pub async fn end_capture(&self) -> Result<()> {
        self.send(Event::Command(Command::EndCapture)).await
    }

    pub async fn submit(&self, text: impl Into<String>, origin: InputOrigin) -> Result<()> {
        self.send(Event::Command(Command::Submit {
            text: text.into(),
            origin,
        }))
        .await
    }

    pub async fn clear(&self) -> Result<()> {
        self.send(Event::Command(Command::Clear)).await
    }

    pub async fn preview_voice(&self) -> Result<()> {
        self.send(Event::Command(Command::PreviewVoice)).await
    }

    pub async fn set_voice_settings(&self, settings: VoiceSettings) -> Result<()> {
        self.send(Event::Command(Command::SetVoiceSettings(settings))).await
    }

    /// Voice catalogue of the running controller's playback.
    pub async fn voices(&self) -> Result<Vec<Voice>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Event::Command(Command::Voices(reply_tx))).await?;
        reply_rx.await.map_err(|_| LevoError::ControllerClosed)
    }

    /// Telemetry snapshot taken between turns.
    pub async fn snapshot(&self) -> Result<TelemetrySnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Event::Command(Command::Snapshot(reply_tx))).await?;
        reply_rx.await.map_err(|_| LevoError::ControllerClosed)
    }
}

/// Single authority over the turn state and the only caller of the speech
/// capabilities. Turns are serialised through `&mut self`.
pub struct InteractionController {
    receiver: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
    state: SessionState,
    classifier: Classifier,
    selector: ResponseSelector,
    delay: ThinkingDelay,
    capture_timeout: Option<Duration>,
    listening_since: Option<Instant>,
    voice: VoiceSettings,
    rng: Box<dyn RngCore + Send>,
    capture: Box<dyn SpeechCapture>,
    playback: Box<dyn SpeechPlayback>,
    notifier: broadcast::Sender<Notification>,
    shutdown: CancellationToken,
    pub telemetry: TelemetryRecorder,
}

impl InteractionController {
    /// Starts text-only: both capabilities are unavailable until plugged in.
    pub fn new(receiver: mpsc::Receiver<Event>, tx: mpsc::Sender<Event>, config: &LevoConfig) -> Self {
        let (notifier, _) = broadcast::channel(NOTIFY_CAPACITY);
        Self {
            receiver,
            tx,
            state: SessionState::new(config.max_messages),
            classifier: Classifier::new(),
            selector: ResponseSelector::new(),
            delay: ThinkingDelay::new(config.thinking),
            capture_timeout: config.capture_timeout(),
            listening_since: None,
            voice: config.voice.clamped(),
            rng: Box::new(StdRng::from_entropy()),
            capture: Box::new(UnavailableCapture),
            playback: Box::new(UnavailablePlayback),
            notifier,
            shutdown: CancellationToken::new(),
            telemetry: TelemetryRecorder::new(),
        }
    }

    pub fn with_capture(mut self, capture: Box<dyn SpeechCapture>) -> Self {
        self.capture = capture;
        self
    }

    /// Plugs in playback and applies the configured voice. Without an explicit
    /// voice id the preferred English voice is chosen.
    pub fn with_playback(mut self, playback: Box<dyn SpeechPlayback>) -> Self {
        self.playback = playback;
        if self.voice.voice_id.is_none() {
            let voices = self.playback.voices();
            self.voice.voice_id = preferred_voice(&voices).map(|v| v.id.clone());
        }
        let voice = self.voice.clone();
        if let Err(e) = self.playback.configure(&voice) {
            self.report(Capability::Playback, e);
        }
        self
    }

    /// Replaces the random source behind reply choice and thinking time.
    pub fn with_rng(mut self, rng: Box<dyn RngCore + Send>) -> Self {
        self.rng = rng;
        self
    }

    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle { tx: self.tx.clone() }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    pub fn state(&self) -> InteractionState {
        self.state.interaction()
    }

    pub fn log(&self) -> &ConversationLog {
        self.state.log()
    }

    /// Tone of the most recent reply, for the avatar.
    pub fn mood(&self) -> Option<Emotion> {
        self.state.mood()
    }

    /// Emotion detected in the most recent accepted input.
    pub fn last_detected_emotion(&self) -> Option<Emotion> {
        self.state.last_detected()
    }

    pub fn voices(&self) -> Vec<Voice> {
        self.playback.voices()
    }

    pub fn voice_settings(&self) -> &VoiceSettings {
        &self.voice
    }

    pub fn set_voice_settings(&mut self, settings: VoiceSettings) {
        self.voice = settings.clamped();
        let voice = self.voice.clone();
        if let Err(e) = self.playback.configure(&voice) {
            self.report(Capability::Playback, e);
        }
    }

    /// Idle -> Listening. A no-op in any other state.
    pub fn begin_capture(&mut self) {
        let current = self.state();
        if TurnGraph::transition(current, TurnRequest::BeginCapture).is_none() {
            debug!("Ignoring capture request while {:?}", current);
            return;
        }

        // Capture and playback never overlap; a voice preview may still be audible.
        self.cancel_playback();
        if self.state.is_capturing() {
            self.stop_capture();
        }

        match self.capture.start() {
            Ok(()) => {
                self.state.reduce(StateDelta::CaptureStarted);
                self.listening_since = Some(Instant::now());
                self.apply(TurnRequest::BeginCapture);
            }
            Err(e) => self.report(Capability::Capture, e),
        }
    }

    /// Listening -> Idle. A no-op in any other state.
    pub fn end_capture(&mut self) {
        if self.state() != InteractionState::Listening {
            return;
        }
        self.stop_capture();
        self.apply(TurnRequest::EndCapture);
    }

    /// Runs one turn for `text` and returns the assistant message.
    ///
    /// Empty or whitespace-only input records nothing and yields
    /// [`LevoError::InvalidInput`]; an open capture is closed. A shutdown
    /// during the thinking pause drops the reply and yields
    /// [`LevoError::ControllerClosed`].
    pub async fn submit_input(&mut self, text: &str, origin: InputOrigin) -> Result<Message> {
        let text = text.trim();
        if text.is_empty() {
            self.telemetry.record(TelemetryEvent::InputRejected { origin });
            if self.state() == InteractionState::Listening {
                self.stop_capture();
                self.apply(TurnRequest::InputRejected);
            }
            debug!("Discarded empty {:?} input", origin);
            return Err(LevoError::InvalidInput);
        }

        match self.state() {
            InteractionState::Listening => self.stop_capture(),
            InteractionState::Speaking => {
                // Typed input over a reply: silence it and start a fresh turn.
                self.cancel_playback();
                self.apply(TurnRequest::Interrupted);
            }
            InteractionState::Idle | InteractionState::Processing => {}
        }
        self.apply(TurnRequest::InputAccepted);

        let result = self.classifier.classify(text);
        self.state.reduce(StateDelta::EmotionDetected(result.emotion));
        self.append(Message::user(text, Some(result.emotion)));
        info!(
            "Turn: intent={} emotion={} origin={:?}",
            result.intent, result.emotion, origin
        );

        let thinking = self.delay.sample(&mut *self.rng);
        tokio::select! {
            _ = self.shutdown.cancelled() => {
                info!("Shutdown during thinking; reply dropped");
                return Err(LevoError::ControllerClosed);
            }
            _ = sleep(thinking) => {}
        }

        let reply = self.selector.select(&result, &mut *self.rng);
        let message = Message::assistant(reply.text, reply.emotion);
        self.append(message.clone());
        self.telemetry.record(TelemetryEvent::TurnCompleted {
            origin,
            intent: result.intent,
            detected: result.emotion,
            reply: reply.emotion,
            thinking_ms: thinking.as_millis() as u64,
        });

        self.apply(TurnRequest::ReplyReady);
        if !self.speak(reply.text) {
            self.apply(TurnRequest::PlaybackFinished);
        }

        Ok(message)
    }

    /// Speaks the sample line with the current voice settings. Only while idle;
    /// the log is untouched.
    pub fn preview_voice(&mut self) {
        if self.state() != InteractionState::Idle {
            debug!("Ignoring voice preview while {:?}", self.state());
            return;
        }
        self.speak(VOICE_PREVIEW);
    }

    /// Empties the log. Idempotent.
    pub fn clear(&mut self) {
        self.state.reduce(StateDelta::LogCleared);
        self.telemetry.record(TelemetryEvent::LogCleared);
        self.notify(Notification::LogCleared);
    }

    /// Routes one inbox event.
    pub async fn handle_event(&mut self, event: Event) {
        match event {
            Event::Command(cmd) => match cmd {
                Command::BeginCapture => self.begin_capture(),
                Command::EndCapture => self.end_capture(),
                Command::Submit { text, origin } => {
                    // Rejections are already observable; nothing to propagate.
                    let _ = self.submit_input(&text, origin).await;
                }
                Command::Clear => self.clear(),
                Command::PreviewVoice => self.preview_voice(),
                Command::SetVoiceSettings(settings) => self.set_voice_settings(settings),
                Command::Voices(reply) => {
                    let _ = reply.send(self.voices());
                }
                Command::Snapshot(reply) => {
                    let _ = reply.send(self.telemetry.snapshot());
                }
            },
            Event::Capture(ev) => self.on_capture(ev).await,
            Event::Playback(ev) => self.on_playback(ev),
        }
    }

    /// Drains the inbox until `shutdown` fires or every sender is gone.
    pub async fn run(mut self, shutdown: CancellationToken) {
        info!("Interaction controller started");
        self.shutdown = shutdown.clone();

        loop {
            let deadline = self.capture_deadline();

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.on_capture_timeout();
                }
                event = self.receiver.recv() => match event {
                    Some(event) => self.handle_event(event).await,
                    None => break,
                },
            }
        }

        self.cancel_playback();
        if self.state.is_capturing() {
            self.stop_capture();
        }
        info!("Interaction controller stopped");
    }

    async fn on_capture(&mut self, event: CaptureEvent) {
        if self.state() != InteractionState::Listening {
            debug!("Dropping capture event outside Listening: {:?}", event);
            return;
        }
        match event {
            CaptureEvent::Transcript(text) => {
                let _ = self.submit_input(&text, InputOrigin::Voice).await;
            }
            CaptureEvent::Ended => {
                self.state.reduce(StateDelta::CaptureStopped);
                self.listening_since = None;
                self.apply(TurnRequest::EndCapture);
            }
            CaptureEvent::Error(message) => {
                warn!("Speech capture error: {}", message);
                self.notify(Notification::Diagnostic(Diagnostic::CaptureError(message)));
                self.state.reduce(StateDelta::CaptureStopped);
                self.listening_since = None;
                self.apply(TurnRequest::EndCapture);
            }
        }
    }

    fn on_playback(&mut self, event: PlaybackEvent) {
        if self.state.active_utterance() != Some(event.utterance()) {
            debug!("Ignoring event for stale utterance: {:?}", event);
            return;
        }
        match event {
            PlaybackEvent::Started(id) => debug!("Utterance {:?} started", id),
            PlaybackEvent::Ended(_) => {
                self.state.reduce(StateDelta::UtteranceFinished);
                self.apply(TurnRequest::PlaybackFinished);
            }
            PlaybackEvent::Error { id, message } => {
                warn!("Playback error: {}", message);
                self.telemetry.record(TelemetryEvent::PlaybackFailed { utterance: id });
                self.notify(Notification::Diagnostic(Diagnostic::PlaybackError(message)));
                self.state.reduce(StateDelta::UtteranceFinished);
                self.apply(TurnRequest::PlaybackFinished);
            }
        }
    }

    fn on_capture_timeout(&mut self) {
        if self.state() != InteractionState::Listening {
            self.listening_since = None;
            return;
        }
        info!("Capture timed out without a transcript");
        self.telemetry.record(TelemetryEvent::CaptureTimedOut);
        self.notify(Notification::Diagnostic(Diagnostic::CaptureTimedOut));
        self.end_capture();
    }

    fn capture_deadline(&self) -> Option<Instant> {
        match (self.state(), self.listening_since, self.capture_timeout) {
            (InteractionState::Listening, Some(since), Some(timeout)) => Some(since + timeout),
            _ => None,
        }
    }

    /// Starts a new utterance, cancelling any previous one. Returns whether
    /// playback is now running.
    fn speak(&mut self, text: &str) -> bool {
        self.cancel_playback();

        let id = UtteranceId::new();
        match self.playback.speak(id, text) {
            Ok(()) => {
                self.state.reduce(StateDelta::UtteranceStarted(id));
                true
            }
            Err(e) => {
                self.report(Capability::Playback, e);
                false
            }
        }
    }

    fn cancel_playback(&mut self) {
        let Some(id) = self.state.active_utterance() else {
            return;
        };
        if let Err(e) = self.playback.cancel() {
            debug!("Playback cancel failed: {}", e);
        }
        self.state.reduce(StateDelta::UtteranceFinished);
        self.telemetry.record(TelemetryEvent::PlaybackInterrupted { utterance: id });
    }

    fn stop_capture(&mut self) {
        if let Err(e) = self.capture.stop() {
            debug!("Capture stop failed: {}", e);
        }
        self.state.reduce(StateDelta::CaptureStopped);
        self.listening_since = None;
    }

    fn append(&mut self, message: Message) {
        self.state.reduce(StateDelta::MessageAppended(message.clone()));
        self.notify(Notification::MessageAppended(message));
    }

    /// Applies a turn request through the graph and broadcasts the change.
    fn apply(&mut self, request: TurnRequest) -> bool {
        let from = self.state();
        match TurnGraph::transition(from, request) {
            Some(to) => {
                self.state.reduce(StateDelta::Transition(to));
                self.telemetry.record(TelemetryEvent::StateTransition { from, to });
                self.notify(Notification::StateChanged { from, to });
                debug!("{:?} -> {:?} ({:?})", from, to, request);
                true
            }
            None => {
                debug!("Ignored {:?} while {:?}", request, from);
                false
            }
        }
    }

    /// Degrades a failure of `source` into a diagnostic. Nothing here is fatal.
    fn report(&mut self, source: Capability, error: LevoError) {
        let diagnostic = match (source, error) {
            (_, LevoError::CapabilityUnavailable(capability)) => {
                self.telemetry.record(TelemetryEvent::CapabilityUnavailable { capability });
                Diagnostic::CapabilityUnavailable(capability)
            }
            (Capability::Capture, other) => {
                warn!("{}", other);
                Diagnostic::CaptureError(other.to_string())
            }
            (Capability::Playback, other) => {
                warn!("{}", other);
                Diagnostic::PlaybackError(other.to_string())
            }
        };
        self.notify(Notification::Diagnostic(diagnostic));
    }

    fn notify(&self, notification: Notification) {
        // No subscribers is fine.
        let _ = self.notifier.send(notification);
    }
}
