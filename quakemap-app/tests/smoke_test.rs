/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quakemap-app"))
}

#[test]
fn binary_shows_help() {
    let output = binary().arg("--help").output().expect("Failed to run binary");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--duration"), "Help output should list --duration");
    assert!(stdout.contains("--profile"), "Help output should list --profile");
}

#[test]
fn missing_dataset_fails_gracefully() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary()
        .current_dir(dir.path())
        .args(["--input", "missing.txt", "--output", "out.gif"])
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success(), "Missing input should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.txt"), "Error should name the input: {}", stderr);
}

#[test]
fn invalid_profile_fails_gracefully() {
    let output = binary()
        .args(["--profile", "ultra"])
        .output()
        .expect("Failed to run binary");
    assert!(!output.status.success());
}
