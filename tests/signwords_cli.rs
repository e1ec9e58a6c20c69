use std::io::Write;
use std::process::{Command, Stdio};

fn signwords_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_signwords").expect("signwords test binary not built")
}

#[test]
fn help_mentions_name() {
    let output = Command::new(signwords_bin())
        .arg("--help")
        .output()
        .expect("run signwords --help");
    assert!(output.status.success());
    let combined = String::from_utf8_lossy(&output.stdout).to_string()
        + &String::from_utf8_lossy(&output.stderr);
    assert!(combined.contains("signwords"));
}

#[test]
fn list_gestures_prints_the_vocabulary() {
    let output = Command::new(signwords_bin())
        .arg("--list-gestures")
        .output()
        .expect("run signwords --list-gestures");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines.contains(&"Hello"));
    assert!(lines.contains(&"Thank You"));
}

#[test]
fn rejects_invalid_window_size() {
    let output = Command::new(signwords_bin())
        .args(["--window-size", "0", "--no-speech"])
        .output()
        .expect("run signwords with bad window size");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--window-size"));
}

#[test]
fn session_emits_capabilities_and_handles_commands() {
    let mut child = Command::new(signwords_bin())
        .arg("--no-speech")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn signwords session");

    {
        let stdin = child.stdin.as_mut().expect("session stdin");
        writeln!(stdin, "{}", r#"{"cmd":"clear"}"#).expect("write clear command");
        writeln!(stdin, "{}", r#"{"cmd":"frame"}"#).expect("write empty frame");
    }
    // Closing stdin ends the session.
    drop(child.stdin.take());

    let output = child.wait_with_output().expect("collect session output");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    let first = lines.next().expect("capabilities line");
    assert!(first.contains(r#""event":"capabilities""#));
    assert!(stdout.contains(r#""event":"cleared""#));
}
