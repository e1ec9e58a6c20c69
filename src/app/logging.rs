use crate::config::AppConfig;
use std::{
    env, fs,
    io::Write,
    panic,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, OnceLock,
    },
    time::{SystemTime, UNIX_EPOCH},
};

const LOG_MAX_BYTES: u64 = 2 * 1024 * 1024;
const CRASH_LOG_MAX_BYTES: u64 = 128 * 1024;
static LOG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_CONTENT_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_SINK: OnceLock<Mutex<Option<LogSink>>> = OnceLock::new();

/// Path to the temp log file we rotate between runs.
pub fn log_file_path() -> PathBuf {
    env::temp_dir().join("signwords.log")
}

/// Path to the crash log file (metadata only).
pub fn crash_log_path() -> PathBuf {
    env::temp_dir().join("signwords_crash.log")
}

struct LogSink {
    path: PathBuf,
    file: fs::File,
    bytes_written: u64,
}

impl LogSink {
    fn open(path: PathBuf) -> Option<Self> {
        let mut bytes_written = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        if bytes_written > LOG_MAX_BYTES {
            let _ = fs::remove_file(&path);
            bytes_written = 0;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()?;
        Some(Self {
            path,
            file,
            bytes_written,
        })
    }

    fn write_line(&mut self, line: &str) {
        if self.bytes_written.saturating_add(line.len() as u64) > LOG_MAX_BYTES {
            match fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.path)
            {
                Ok(file) => {
                    self.file = file;
                    self.bytes_written = 0;
                }
                Err(_) => return,
            }
        }
        if self.file.write_all(line.as_bytes()).is_ok() {
            self.bytes_written = self.bytes_written.saturating_add(line.len() as u64);
        }
    }
}

fn log_sink() -> &'static Mutex<Option<LogSink>> {
    LOG_SINK.get_or_init(|| Mutex::new(None))
}

/// Configure logging based on CLI flags or environment.
pub fn init_logging(config: &AppConfig) {
    let enabled = (config.logs || config.log_timings) && !config.no_logs;
    LOG_ENABLED.store(enabled, Ordering::Relaxed);
    LOG_CONTENT_ENABLED.store(enabled && config.log_content, Ordering::Relaxed);

    let mut sink = log_sink()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *sink = if enabled {
        LogSink::open(log_file_path())
    } else {
        None
    };
}

/// Write debug messages to a temp file so troubleshooting never touches the
/// event stream on stdout.
pub fn log_debug(msg: &str) {
    if !LOG_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let line = format!("[{timestamp}] {msg}\n");
    let mut sink = log_sink()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(sink) = sink.as_mut() {
        sink.write_line(&line);
    }
}

/// Write logs that may contain user content (committed words, sentences).
pub fn log_debug_content(msg: &str) {
    if LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        log_debug(msg);
    }
}

/// Write a minimal crash log entry, omitting payload content unless content
/// logging was explicitly enabled.
pub fn log_panic(info: &panic::PanicHookInfo<'_>) {
    if !LOG_ENABLED.load(Ordering::Relaxed) {
        return;
    }

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let location = info
        .location()
        .map(|loc| format!("{}:{}", loc.file(), loc.line()))
        .unwrap_or_else(|| "unknown".to_string());
    let payload = if LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        if let Some(text) = info.payload().downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = info.payload().downcast_ref::<String>() {
            text.clone()
        } else {
            "non-string panic payload".to_string()
        }
    } else {
        "panic payload omitted (log-content disabled)".to_string()
    };

    let line = format!(
        "[{timestamp}] panic at {location}: {payload} (v{})\n",
        env!("CARGO_PKG_VERSION")
    );
    let path = crash_log_path();
    if fs::metadata(&path).map(|m| m.len()).unwrap_or(0) > CRASH_LOG_MAX_BYTES {
        let _ = fs::remove_file(&path);
    }
    if let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(&path) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
pub(crate) fn set_logging_for_tests(enabled: bool, content_enabled: bool) {
    LOG_ENABLED.store(enabled, Ordering::Relaxed);
    LOG_CONTENT_ENABLED.store(enabled && content_enabled, Ordering::Relaxed);
    let mut sink = log_sink()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *sink = if enabled {
        LogSink::open(log_file_path())
    } else {
        None
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::EngineConfig;
    use crate::engine::RecognitionEngine;
    use crate::gesture::testhands;
    use crate::speech::NullSpeech;
    use std::time::Instant;

    // The logging flags are process-global, so tests in this module take the
    // lock before touching them.
    static FLAG_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn logging_flags_gate_writes() {
        let _guard = FLAG_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        set_logging_for_tests(false, false);
        // Must be a no-op, not a panic, with no sink installed.
        log_debug("dropped");
        log_debug_content("also dropped");

        set_logging_for_tests(true, false);
        assert!(!LOG_CONTENT_ENABLED.load(Ordering::Relaxed));
        set_logging_for_tests(true, true);
        assert!(LOG_CONTENT_ENABLED.load(Ordering::Relaxed));
        set_logging_for_tests(false, false);
    }

    fn commit_one_word(lm: &[crate::landmarks::LandmarkPoint; crate::landmarks::LANDMARK_COUNT]) {
        let mut engine = RecognitionEngine::new(EngineConfig::default(), Box::new(NullSpeech));
        let now = Instant::now();
        for _ in 0..10 {
            engine.process_frame(Some(lm.as_slice()), now);
        }
    }

    #[test]
    fn committed_word_text_stays_behind_the_content_flag() {
        let _guard = FLAG_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let _ = fs::remove_file(log_file_path());

        // Content logging off: the log gets the marker but never the word.
        set_logging_for_tests(true, false);
        commit_one_word(&testhands::hand([false; 5])); // commits Yes
        set_logging_for_tests(false, false);
        let log = fs::read_to_string(log_file_path()).unwrap_or_default();
        assert!(log.contains("word committed"));
        assert!(!log.contains("Yes"));

        // Content logging on: the word text is allowed through.
        set_logging_for_tests(true, true);
        commit_one_word(&testhands::hand([true; 5])); // commits Stop
        set_logging_for_tests(false, false);
        let log = fs::read_to_string(log_file_path()).unwrap_or_default();
        assert!(log.contains("word committed: Stop"));
    }
}
