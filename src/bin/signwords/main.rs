//! signwords CLI: drive the gesture-to-word engine over stdin/stdout.
//!
//! An external hand-pose detector pipes newline-delimited JSON frames in;
//! committed words, live-label updates, and state changes come back out the
//! same way. See `ipc::protocol` for the message shapes.

use anyhow::Result;
use signwords::config::AppConfig;
use signwords::{
    init_logging, ipc, log_debug, log_panic, CommandSpeech, NullSpeech, RecognitionEngine,
    SpeechSink, GESTURES,
};
use std::io;
use std::panic;

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;

    if config.list_gestures {
        for gesture in GESTURES {
            println!("{gesture}");
        }
        return Ok(());
    }

    init_logging(&config);
    panic::set_hook(Box::new(|info| log_panic(info)));
    log_debug(&format!(
        "starting session|window_size={}|cooldown_ms={}|silence_frames={}",
        config.window_size, config.cooldown_ms, config.silence_frames
    ));

    let speech: Box<dyn SpeechSink> = if config.no_speech {
        Box::new(NullSpeech)
    } else {
        Box::new(CommandSpeech::spawn(&config.speak_cmd))
    };
    let mut engine = RecognitionEngine::new(config.engine_config(), speech);

    let stdin = io::stdin();
    let stdout = io::stdout();
    ipc::run_session(&config, &mut engine, stdin.lock(), stdout.lock())
}
