use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn inspect() -> Command {
    let mut cmd = Command::cargo_bin("complex-inspect").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_print_three_four() {
    inspect()
        .args(["print", "3", "4"])
        .assert()
        .success()
        .stdout("[Real]: 3\n[Imag]: 4\n");
}

#[test]
fn test_print_without_arguments() {
    inspect()
        .arg("print")
        .assert()
        .success()
        .stdout("[Real]: 0\n[Imag]: 0\n");
}

#[test]
fn test_print_real_only() {
    inspect()
        .args(["print", "-2.5"])
        .assert()
        .success()
        .stdout("[Real]: -2.5\n[Imag]: 0\n");
}

#[test]
fn test_print_negative_non_finite() {
    inspect()
        .args(["print", "-inf", "1"])
        .assert()
        .success()
        .stdout("[Real]: -inf\n[Imag]: 1\n");

    inspect()
        .args(["print", "2", "-NaN"])
        .assert()
        .success()
        .stdout("[Real]: 2\n[Imag]: NaN\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_stdout_is_logged_and_ignored() {
    for args in [&["print", "3", "4"][..], &["nothing"][..]] {
        let dev_full = std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/full")
            .unwrap();

        let output = std::process::Command::cargo_bin("complex-inspect")
            .unwrap()
            .env_remove("RUST_LOG")
            .args(args)
            .stdout(dev_full)
            .output()
            .unwrap();

        output
            .assert()
            .success()
            .stderr(predicate::str::contains("failed to write to stdout"));
    }
}

#[test]
fn test_nothing() {
    inspect()
        .arg("nothing")
        .assert()
        .success()
        .stdout("Nothing.\n");
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    inspect()
        .args(["--verbose", "print", "1", "2"])
        .assert()
        .success()
        .stdout("[Real]: 1\n[Imag]: 2\n")
        .stderr(predicate::str::contains("printing complex value"));
}

#[test]
fn test_config_file_fills_missing_arguments() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[value]\nreal = 9.5\nimag = 1.25").unwrap();

    inspect()
        .args(["--config", file.path().to_str().unwrap(), "print", "3"])
        .assert()
        .success()
        .stdout("[Real]: 3\n[Imag]: 1.25\n");
}

#[test]
fn test_invalid_config_file_exits_with_config_code() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[value\nreal = 1").unwrap();

    inspect()
        .args(["--config", file.path().to_str().unwrap(), "nothing"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not valid TOML"));
}

#[test]
fn test_empty_config_path_is_rejected() {
    inspect()
        .args(["--config", "", "nothing"])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_missing_config_file_exits_with_io_code() {
    inspect()
        .args(["--config", "/nonexistent/complex-inspect.toml", "nothing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to load config file"));
}

#[test]
fn test_missing_subcommand_fails() {
    inspect().assert().failure().stdout("");
}
