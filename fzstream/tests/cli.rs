#![cfg(unix)]

use std::io::Write as _;
use std::os::unix::fs::PermissionsExt as _;

const FAKE_FZF: &str = r#"#!/bin/sh
case "$2" in
    *"input type"*) grep -x lavfi ;;
    *resolution*) grep -x 640x360 ;;
    *FPS*) grep -x 25 ;;
    *bitrate*) grep -x 1Mbps ;;
    *) exit 1 ;;
esac
"#;

fn install(dir: &std::path::Path, name: &str, body: &str) {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn run_fzstream(bin_dir: &std::path::Path, work_dir: &std::path::Path, input: &str) -> std::process::Output {
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_fzstream"))
        .current_dir(work_dir)
        .env("PATH", format!("{}:/usr/bin:/bin", bin_dir.display()))
        .env_remove("RUST_LOG")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

// One test so every script is written before any process is spawned.
#[test]
fn exit_status_follows_the_transcoder() {
    let ok_bin = tempfile::tempdir().unwrap();
    install(ok_bin.path(), "fzf", FAKE_FZF);
    install(ok_bin.path(), "ffmpeg", "#!/bin/sh\nexit 0\n");

    let failing_bin = tempfile::tempdir().unwrap();
    install(failing_bin.path(), "fzf", FAKE_FZF);
    install(failing_bin.path(), "ffmpeg", "#!/bin/sh\nexit 1\n");

    let aborting_bin = tempfile::tempdir().unwrap();
    install(aborting_bin.path(), "fzf", "#!/bin/sh\ncat >/dev/null\nexit 130\n");

    let work_dir = tempfile::tempdir().unwrap();

    let output = run_fzstream(ok_bin.path(), work_dir.path(), "rtmp://server/live\n");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Starting ffmpeg with command:\nffmpeg -re -stream_loop -1 -f lavfi"));
    assert!(stdout.ends_with(" -f mpegts rtmp://server/live\n"));

    let output = run_fzstream(failing_bin.path(), work_dir.path(), "rtmp://server/live\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ffmpeg command failed"), "{}", stderr);

    let output = run_fzstream(aborting_bin.path(), work_dir.path(), "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("selection failed"), "{}", stderr);

    let output = run_fzstream(ok_bin.path(), work_dir.path(), "http://host\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid URL format"), "{}", stderr);
}
