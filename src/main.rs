use levo::kernel::controller::{Diagnostic, InteractionController, Notification};
use levo::kernel::event::InputOrigin;
use levo::speech::command::CommandPlayback;
use levo::LevoConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging/tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!("Levo booting...");

    let config = match std::env::args().nth(1) {
        Some(path) => LevoConfig::load(&path)?,
        None => LevoConfig::default(),
    };

    // Controller inbox, shared with the playback adapter
    let (tx, rx) = mpsc::channel(100);

    let mut controller = InteractionController::new(rx, tx.clone(), &config);
    match CommandPlayback::detect(tx.clone()).await {
        Some(playback) => controller = controller.with_playback(Box::new(playback)),
        None => tracing::warn!("No speech synthesizer found; replies are text-only"),
    }

    let handle = controller.handle();
    let mut notifications = controller.subscribe();
    let shutdown = CancellationToken::new();
    let driver = tokio::spawn(controller.run(shutdown.clone()));

    // Render what the controller reports
    tokio::spawn(async move {
        loop {
            let note = match notifications.recv().await {
                Ok(note) => note,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            };
            match note {
                Notification::MessageAppended(msg) if msg.is_user() => {
                    println!("you  > {}", msg.text)
                }
                Notification::MessageAppended(msg) => println!(
                    "levo [{}] > {}",
                    msg.emotion.unwrap_or_default(),
                    msg.text
                ),
                Notification::StateChanged { to, .. } => tracing::debug!("state: {:?}", to),
                Notification::LogCleared => println!("-- conversation cleared --"),
                Notification::Diagnostic(Diagnostic::CapabilityUnavailable(cap)) => {
                    tracing::warn!("{} unavailable", cap)
                }
                Notification::Diagnostic(d) => tracing::warn!("{:?}", d),
            }
        }
    });

    tracing::info!(
        "Type a message. /clear resets, /voice previews the voice, /voices lists voices, \
         /use <id> and /rate <x> change the voice, /stats shows the session, /quit exits."
    );

    let mut settings = config.voice.clone();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input.split_once(' ') {
            Some(("/use", id)) => {
                settings.voice_id = Some(id.trim().to_string());
                handle.set_voice_settings(settings.clone()).await?;
                continue;
            }
            Some(("/rate", rate)) => {
                match rate.trim().parse::<f32>() {
                    Ok(rate) => {
                        settings.rate = rate;
                        handle.set_voice_settings(settings.clone()).await?;
                    }
                    Err(e) => tracing::warn!("bad rate '{}': {}", rate.trim(), e),
                }
                continue;
            }
            _ => {}
        }
        match input {
            "/quit" => break,
            "/clear" => handle.clear().await?,
            "/voice" => handle.preview_voice().await?,
            "/listen" => handle.begin_capture().await?,
            "/voices" => {
                for voice in handle.voices().await? {
                    println!("  {:<24} {:<8} id={}", voice.name, voice.language_tag, voice.id);
                }
            }
            "/stats" => {
                let snap = handle.snapshot().await?;
                let mood = &snap.mood_stats;
                println!(
                    "  turns={} voice={} typed={} avg_thinking={:.0}ms",
                    snap.turn_stats.completed,
                    snap.turn_stats.voice,
                    snap.turn_stats.typed,
                    snap.turn_stats.avg_thinking_ms
                );
                println!(
                    "  mood: happy {}% sad {}% neutral {}% concerned {}%",
                    mood.happy, mood.sad, mood.neutral, mood.concerned
                );
            }
            _ => handle.submit(input, InputOrigin::Typed).await?,
        }
    }

    shutdown.cancel();
    driver.await?;
    Ok(())
}
