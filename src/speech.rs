//! Best-effort speech output for committed words.
//!
//! The engine treats speech as a fire-and-forget sink: a failed utterance is
//! logged and must never block or corrupt frame processing. The command sink
//! runs an external TTS program on a worker thread; a newly committed word
//! interrupts whatever is currently being spoken, and words queued while the
//! worker is busy are superseded by the newest.

use crate::gesture::GestureLabel;
use crate::log_debug;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::Duration;

const SPEECH_QUEUE_CAPACITY: usize = 8;
const CHILD_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Sink for committed words. `speak` must not block the caller.
pub trait SpeechSink: Send {
    fn speak(&self, label: GestureLabel);
    fn name(&self) -> &'static str {
        "unknown_speech"
    }
}

/// Discards every utterance. Used for `--no-speech` and in tests.
pub struct NullSpeech;

impl SpeechSink for NullSpeech {
    fn speak(&self, _label: GestureLabel) {}

    fn name(&self) -> &'static str {
        "null_speech"
    }
}

/// Speaks words by running an external TTS command per utterance.
pub struct CommandSpeech {
    sender: Option<Sender<GestureLabel>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl CommandSpeech {
    /// Spawn the worker thread. The command line is split shell-style into a
    /// program and base arguments; the word text is appended as the final
    /// argument, e.g. `espeak -v en "Thank You"`.
    pub fn spawn(command: &str) -> Self {
        let (tx, rx) = bounded(SPEECH_QUEUE_CAPACITY);
        let words = shell_words::split(command).unwrap_or_default();
        let handle = thread::spawn(move || speech_worker(&words, rx));
        Self {
            sender: Some(tx),
            handle: Some(handle),
        }
    }
}

impl SpeechSink for CommandSpeech {
    fn speak(&self, label: GestureLabel) {
        let Some(sender) = self.sender.as_ref() else {
            return;
        };
        match sender.try_send(label) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                // The worker coalesces to the newest word anyway; dropping
                // here only loses an utterance that would have been skipped.
                log_debug("speech queue full; dropping utterance");
            }
            Err(TrySendError::Disconnected(_)) => {
                log_debug("speech worker gone; dropping utterance");
            }
        }
    }

    fn name(&self) -> &'static str {
        "command_speech"
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn speech_worker(command: &[String], rx: Receiver<GestureLabel>) {
    let Some((program, base_args)) = command.split_first() else {
        log_debug("speech command is empty; utterances will be dropped");
        return;
    };
    let mut speaking: Option<Child> = None;
    loop {
        let next = if speaking.is_some() {
            match rx.recv_timeout(CHILD_POLL_INTERVAL) {
                Ok(label) => Some(label),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match rx.recv() {
                Ok(label) => Some(label),
                Err(_) => break,
            }
        };

        match next {
            Some(mut label) => {
                // Coalesce a backlog down to the most recent word.
                while let Ok(newer) = rx.try_recv() {
                    label = newer;
                }
                // A new word interrupts the in-progress utterance.
                if let Some(mut child) = speaking.take() {
                    let _ = child.kill();
                    let _ = child.wait();
                }
                match Command::new(program)
                    .args(base_args)
                    .arg(label.label())
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                {
                    Ok(child) => speaking = Some(child),
                    Err(err) => {
                        log_debug(&format!("speech command {program:?} failed to start: {err}"));
                    }
                }
            }
            None => {
                // Reap the utterance once it finishes on its own.
                let finished = speaking
                    .as_mut()
                    .map_or(false, |child| !matches!(child.try_wait(), Ok(None)));
                if finished {
                    speaking = None;
                }
            }
        }
    }

    if let Some(mut child) = speaking.take() {
        let _ = child.kill();
        let _ = child.wait();
    }
}
