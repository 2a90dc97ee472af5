use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn greeter() -> Command {
    let mut cmd = Command::cargo_bin("hello-greeter").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_hello_world() {
    greeter()
        .assert()
        .success()
        .code(0)
        .stdout("Hello, World\n");
}

#[test]
fn test_output_is_exactly_one_line() {
    let output = greeter().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.ends_with('\n'));
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    greeter()
        .arg("--verbose")
        .assert()
        .success()
        .stdout("Hello, World\n");
}

#[test]
fn test_name_flag() {
    greeter()
        .args(["--name", "Ferris"])
        .assert()
        .success()
        .stdout("Hello, Ferris\n");
}

#[test]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[greeting]\nname = \"Config\"\n").unwrap();

    greeter()
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout("Hello, Config\n");
}

#[test]
fn test_broken_config_exits_with_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[greeting\n").unwrap();

    greeter()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not read configuration"));
}

#[test]
fn test_multiline_name_rejected() {
    greeter()
        .args(["--name", "two\nlines"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid setting 'name'"));
}

#[test]
fn test_invalid_log_level_rejected() {
    for level in ["loud", "debug,other=trace"] {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[logging]\nlevel = \"{}\"\n", level).unwrap();

        greeter()
            .arg("--config")
            .arg(file.path())
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid setting 'logging.level'"));
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_stdout_write_failure_exits_with_error() {
    use assert_cmd::prelude::*;

    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();

    let mut cmd = std::process::Command::cargo_bin("hello-greeter").unwrap();
    cmd.env_remove("RUST_LOG").stdout(full);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("I/O failure"));
}
