use super::defaults::{
    FORBIDDEN_CMD_CHARS, MAX_COOLDOWN_MS, MAX_SILENCE_FRAMES, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE,
};
use super::AppConfig;
use anyhow::{bail, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values before anything downstream uses them.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            bail!(
                "--window-size must be between {MIN_WINDOW_SIZE} and {MAX_WINDOW_SIZE}, got {}",
                self.window_size
            );
        }
        if self.cooldown_ms == 0 || self.cooldown_ms > MAX_COOLDOWN_MS {
            bail!(
                "--cooldown-ms must be between 1 and {MAX_COOLDOWN_MS}, got {}",
                self.cooldown_ms
            );
        }
        if self.silence_frames == 0 || self.silence_frames > MAX_SILENCE_FRAMES {
            bail!(
                "--silence-frames must be between 1 and {MAX_SILENCE_FRAMES}, got {}",
                self.silence_frames
            );
        }
        if !self.no_speech {
            sanitize_speak_cmd(&self.speak_cmd)?;
        }
        Ok(())
    }
}

/// The speak command is split shell-style into a program plus arguments and
/// exec'd directly, never through a shell; refuse shell syntax outright.
fn sanitize_speak_cmd(cmd: &str) -> Result<()> {
    if let Some(bad) = cmd.chars().find(|c| FORBIDDEN_CMD_CHARS.contains(c)) {
        bail!("--speak-cmd contains forbidden character {bad:?}");
    }
    let words = match shell_words::split(cmd) {
        Ok(words) => words,
        Err(err) => bail!("--speak-cmd is not a valid command line: {err}"),
    };
    if words.is_empty() {
        bail!("--speak-cmd must not be empty (use --no-speech to disable speech)");
    }
    Ok(())
}
