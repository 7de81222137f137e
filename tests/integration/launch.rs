use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{run_launcher, stderr_text};

#[test]
fn no_arguments_exits_zero_with_clean_stderr() -> Result<()> {
    let output = run_launcher(&[])?;
    assert_eq!(output.status.code(), Some(0), "status: {:?}", output.status);
    assert!(
        output.stderr.is_empty(),
        "stderr should be empty on success: {}",
        stderr_text(&output)
    );
    assert!(output.stdout.is_empty(), "launcher emits nothing on success");
    Ok(())
}

#[test]
fn verbose_flag_alone_exits_zero() -> Result<()> {
    let output = run_launcher(&["-v"])?;
    assert_eq!(output.status.code(), Some(0), "status: {:?}", output.status);
    Ok(())
}

#[test]
fn unknown_flags_are_ignored_end_to_end() -> Result<()> {
    let output = run_launcher(&["--unknown-flag", "x"])?;
    assert_eq!(
        output.status.code(),
        Some(0),
        "unknown flags must not fail the launch: {}",
        stderr_text(&output)
    );
    Ok(())
}

#[test]
fn missing_input_exits_one_with_error_on_stderr() -> Result<()> {
    let temp = tempdir()?;
    let missing = temp.path().join("absent.txt");
    let missing_arg = missing.display().to_string();

    let output = run_launcher(&["-v", "--input", &missing_arg])?;
    assert_eq!(output.status.code(), Some(1), "status: {:?}", output.status);
    let stderr = stderr_text(&output);
    assert!(
        stderr.contains("absent.txt"),
        "stderr should name the failing path: {stderr}"
    );
    Ok(())
}

#[test]
fn input_and_output_produce_a_report() -> Result<()> {
    let temp = tempdir()?;
    let input = temp.path().join("data.txt");
    let report = temp.path().join("report.txt");
    fs::write(&input, "alpha\nbeta\ngamma\n")?;
    let input_arg = input.display().to_string();
    let report_arg = report.display().to_string();

    let output = run_launcher(&["--input", &input_arg, "--output", &report_arg])?;
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr_text(&output)
    );
    let written = fs::read_to_string(&report)?;
    assert!(written.contains("lines: 3"), "report: {written}");
    Ok(())
}
