/// Command-line tests for the twobreak binary
///
/// Runs the built binary on small genomes and checks what it prints, and that
/// invalid input fails with a clear message.
use anyhow::Result;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn twobreak(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_twobreak"))
        .args(args)
        .output()?)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_cycle_command() -> Result<()> {
    let output = twobreak(&["cycle", "(+1 -2 -3 +4)"])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "(1 2 4 3 6 5 7 8)");
    Ok(())
}

#[test]
fn test_chromosome_command() -> Result<()> {
    let output = twobreak(&["chromosome", "1", "2", "4", "3", "6", "5", "7", "8"])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "(+1 -2 -3 +4)");
    Ok(())
}

#[test]
fn test_edges_command() -> Result<()> {
    let output = twobreak(&["edges", "(+1 -2 -3)(+4 +5 -6)"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "(2, 4), (3, 6), (5, 1), (8, 9), (10, 12), (11, 7)"
    );
    Ok(())
}

#[test]
fn test_genome_command_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let edges_file = temp_dir.path().join("edges.txt");
    fs::write(&edges_file, "(2, 4), (3, 6), (5, 1), (7, 9), (10, 12), (11, 8)\n")?;

    let output = twobreak(&["genome", "-i", edges_file.to_str().unwrap()])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "(+1 -2 -3)(-4 +5 -6)");
    Ok(())
}

#[test]
fn test_two_break_command() -> Result<()> {
    let output = twobreak(&[
        "two-break",
        "(+1 -2 -4 +3)",
        "-a",
        "1",
        "-b",
        "6",
        "-c",
        "3",
        "-d",
        "8",
    ])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "(+1 -2)(+3 -4)");

    let output = twobreak(&[
        "two-break",
        "--edges",
        "(2, 4), (3, 8), (7, 5), (6, 1)",
        "-a",
        "1",
        "-b",
        "6",
        "-c",
        "3",
        "-d",
        "8",
    ])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "(2, 4), (1, 3), (7, 5), (6, 8)");
    Ok(())
}

#[test]
fn test_two_break_reversal_logs_effect() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_twobreak"))
        .args([
            "two-break", "-v", "(+1 +2 +3 +4)", "-a", "2", "-b", "3", "-c", "6", "-d", "7",
        ])
        .env_remove("RUST_LOG")
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "(+1 -3 -2 +4)");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is a reversal"), "got: {stderr}");
    Ok(())
}

#[test]
fn test_extreme_block_id_rejected() -> Result<()> {
    let output = twobreak(&["edges", "(-9223372036854775808)"])?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid genome"), "got: {stderr}");
    assert!(!stderr.contains("panicked"), "got: {stderr}");
    Ok(())
}

#[test]
fn test_two_break_missing_edge() -> Result<()> {
    let output = twobreak(&[
        "two-break",
        "(+1 +2 +3)",
        "-a",
        "1",
        "-b",
        "2",
        "-c",
        "4",
        "-d",
        "5",
    ])?;
    assert!(!output.status.success(), "Missing edge should cause error");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("edge (1, 2) not found"),
        "Should name the missing edge, got: {stderr}"
    );
    Ok(())
}

#[test]
fn test_neighbours_command() -> Result<()> {
    let output = twobreak(&["neighbours", "-t", "2", "(+1 +2)(+3)"])?;
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    // 3 edges, 3 pairs, 2 reconnections each
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|l| l.split('\t').count() == 6));
    assert!(lines.iter().any(|l| l.contains("\tfusion\t")));
    Ok(())
}

#[test]
fn test_invalid_genome_text() -> Result<()> {
    let output = twobreak(&["edges", "(+1 -2"])?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid genome"),
        "Should report the invalid genome, got: {stderr}"
    );
    Ok(())
}
