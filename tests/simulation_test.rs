use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_traffic_timeline"))
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = binary()
        .args(["--duration", "10", "--seed", "7"])
        .env("RUST_LOG", "warn,traffic_timeline=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that per-intersection status lines and the summary are logged
#[test]
fn test_status_lines_logged() {
    let output = binary()
        .args(["--duration", "3", "--intersections", "2", "--seed", "1"])
        .env("RUST_LOG", "warn,traffic_timeline=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duration=3, intersections=2, steps=2"));
    assert!(stderr.contains("Intersection 0 light:"));
    assert!(stderr.contains("Intersection 1 light:"));
    assert!(stderr.contains("Intersection 1 sign:"));
    assert!(stderr.contains("Steps run: 2"), "stderr: {}", stderr);
    assert!(stderr.contains("Green lights:"));
}

/// Test that headless mode stops at the end of the timeline
#[test]
fn test_headless_steps_capped_by_duration() {
    let output = binary()
        .args(["--duration", "4", "--steps", "50", "--seed", "3"])
        .env("RUST_LOG", "warn,traffic_timeline=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Reached the end of the timeline after 3 steps"));
    assert!(stderr.contains("Time: 3/3"));
}

/// Test that invalid construction parameters are rejected up front
#[test]
fn test_zero_duration_rejected() {
    let output = binary()
        .args(["--duration", "0"])
        .output()
        .expect("Failed to execute simulation");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("duration must be at least one time step"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_zero_intersections_rejected() {
    let output = binary()
        .args(["--intersections", "0"])
        .output()
        .expect("Failed to execute simulation");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one intersection is required"));
}

/// Test stepping through the interactive UI from piped stdin
#[cfg(feature = "ui")]
#[test]
fn test_interactive_mode_draws_frames() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = binary()
        .args(["--ui", "--duration", "5", "--seed", "11"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start simulation");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"n\nn\np\nq\n")
        .expect("Failed to write commands");

    let output = child.wait_with_output().expect("Failed to wait on simulation");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let times: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("Time: "))
        .collect();
    assert_eq!(times, vec!["Time: 0s", "Time: 1s", "Time: 2s", "Time: 1s"]);

    // Status lines are logged on every step without RUST_LOG set
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Intersection 0 light:"), "stderr: {}", stderr);
    assert!(stderr.contains("Intersection 0 sign:"), "stderr: {}", stderr);
    assert!(!stdout.contains("Intersection 0 light:"));
}
