use std::process::Command;

fn run_amaze(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_amaze"))
        .args(args)
        .output()
        .expect("Failed to execute amaze")
}

fn path_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .skip_while(|line| !line.starts_with("Path found"))
        .nth(1)
        .map(|line| line.trim().to_string())
}

#[test]
fn test_solve_sequential_finds_path() {
    let output = run_amaze(&[
        "solve",
        "--width",
        "12",
        "--height",
        "12",
        "--seed",
        "42",
        "--algorithm",
        "sequential",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Algorithm: sequential"));
    assert!(stdout.contains("Path found"));
}

#[test]
fn test_solve_parallel_finds_path() {
    let output = run_amaze(&[
        "solve",
        "--width",
        "15",
        "--height",
        "15",
        "--seed",
        "7",
        "--algorithm",
        "parallel",
        "--fork-after",
        "1",
        "--verbose",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Algorithm: parallel"));
    assert!(stdout.contains("Path found"));
    assert!(stdout.contains("Tasks spawned:"));
    assert!(stdout.contains("Task 0: start node 0"));
}

#[test]
fn test_fork_disabled_parallel_matches_sequential() {
    let sequential = run_amaze(&[
        "solve",
        "--width",
        "10",
        "--height",
        "10",
        "--seed",
        "3",
        "--algorithm",
        "sequential",
    ]);
    let parallel = run_amaze(&[
        "solve",
        "--width",
        "10",
        "--height",
        "10",
        "--seed",
        "3",
        "--algorithm",
        "parallel",
        "--fork-after",
        "0",
    ]);

    assert!(sequential.status.success());
    assert!(parallel.status.success());

    let sequential_path = path_line(&String::from_utf8_lossy(&sequential.stdout))
        .expect("sequential run printed no path");
    let parallel_path = path_line(&String::from_utf8_lossy(&parallel.stdout))
        .expect("parallel run printed no path");
    assert_eq!(sequential_path, parallel_path);
}

#[test]
fn test_solve_show_renders_maze() {
    let output = run_amaze(&[
        "solve",
        "--width",
        "8",
        "--height",
        "8",
        "--seed",
        "11",
        "--show",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('S'));
    assert!(stdout.contains('G'));
    assert!(stdout.contains("+---"));
}

#[test]
fn test_generate_prints_maze() {
    let output = run_amaze(&["generate", "--width", "6", "--height", "4", "--seed", "1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('S'));
    assert!(stdout.contains('G'));
}

#[test]
fn test_degenerate_dimensions_fail() {
    let output = run_amaze(&["solve", "--width", "0", "--height", "5"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("degenerate grid dimensions"));
}
