//! Line-oriented session loop: read commands, drive the engine, emit events.

use super::protocol::{SessionCommand, SessionEvent};
use crate::config::AppConfig;
use crate::engine::RecognitionEngine;
use crate::gesture::{GestureLabel, GESTURES};
use crate::log_debug;
use crate::telemetry;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Instant;

/// Drive the engine from a stream of newline-delimited JSON commands until
/// the input closes. A malformed line yields a recoverable `error` event and
/// the session keeps going; only I/O failures end it early.
pub fn run_session(
    config: &AppConfig,
    engine: &mut RecognitionEngine,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    telemetry::init_tracing(config);
    let started = Instant::now();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "session started");

    emit(&mut output, &capabilities(engine))?;
    let mut last_live: Option<GestureLabel> = None;

    for line in input.lines() {
        let line = line.context("reading session command")?;
        if line.trim().is_empty() {
            continue;
        }
        let command: SessionCommand = match serde_json::from_str(&line) {
            Ok(command) => command,
            Err(err) => {
                emit(
                    &mut output,
                    &SessionEvent::Error {
                        message: format!("bad command: {err}"),
                        recoverable: true,
                    },
                )?;
                continue;
            }
        };

        match command {
            SessionCommand::Frame { landmarks } => {
                let update = engine.process_frame(landmarks.as_deref(), Instant::now());
                if let Some(event) = update.committed {
                    let offset_ms = event.at.duration_since(started).as_millis() as u64;
                    tracing::info!(offset_ms, "word committed");
                    emit(
                        &mut output,
                        &SessionEvent::Word {
                            label: event.label.label(),
                            offset_ms,
                        },
                    )?;
                }
                if update.live != last_live {
                    last_live = update.live;
                    emit(
                        &mut output,
                        &SessionEvent::Live {
                            label: update.live.map(GestureLabel::label),
                        },
                    )?;
                }
            }
            SessionCommand::Activate => {
                engine.activate();
                last_live = None;
                emit(&mut output, &SessionEvent::State { active: true })?;
            }
            SessionCommand::Deactivate => {
                engine.deactivate();
                last_live = None;
                emit(&mut output, &SessionEvent::State { active: false })?;
            }
            SessionCommand::Clear => {
                engine.clear_transcript();
                emit(&mut output, &SessionEvent::Cleared)?;
            }
            SessionCommand::GetCapabilities => {
                emit(&mut output, &capabilities(engine))?;
            }
        }
    }

    engine.log_metrics();
    if config.log_timings {
        log_debug(&format!(
            "timing|phase=session|elapsed_s={:.3}",
            started.elapsed().as_secs_f64()
        ));
    }
    tracing::info!("session ended");
    Ok(())
}

fn capabilities(engine: &RecognitionEngine) -> SessionEvent {
    let config = engine.config();
    SessionEvent::Capabilities {
        version: env!("CARGO_PKG_VERSION").to_string(),
        gestures: GESTURES.iter().map(|g| g.label()).collect(),
        window_size: config.window_size,
        cooldown_ms: config.cooldown.as_millis() as u64,
        silence_frames: config.silence_frames,
        speech: engine.speech_sink_name(),
    }
}

fn emit(output: &mut impl Write, event: &SessionEvent) -> Result<()> {
    let line = serde_json::to_string(event).context("serializing session event")?;
    writeln!(output, "{line}").context("writing session event")?;
    Ok(())
}
