use std::{
    error::Error,
    io,
    path::Path,
    process::{Command, Output},
    str,
};

const SOVY_PATH: &str = "./target/debug/sovy";

pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
}

impl<'a> Expected<'a> {
    fn assert_matches(self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(str::from_utf8(&output.stdout)?, self.stdout);
        assert_eq!(str::from_utf8(&output.stderr)?, self.stderr);
        Ok(())
    }
}

fn run_interpreter(src_path: &Path, home: Option<&Path>) -> Result<Output, io::Error> {
    let mut command = Command::new(SOVY_PATH);
    command.arg("run").arg(src_path);
    if let Some(home) = home {
        command.env("HOME", home);
    }
    command.output()
}

fn run_formatter(src_path: &Path) -> Result<Output, io::Error> {
    Command::new(SOVY_PATH).arg("fmt").arg(src_path).output()
}

/// Run a program and assert on the exact stdout/stderr.
pub fn check_run(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    let output = run_interpreter(src_path, None)?;

    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "sovy exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

/// Run a program with `HOME` pointing at the given directory, so the
/// library registry reads and writes under it.
pub fn check_run_with_home(
    home: &Path,
    src_path: &Path,
    expected: Expected,
) -> Result<(), Box<dyn Error>> {
    let output = run_interpreter(src_path, Some(home))?;

    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "sovy exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

/// Run a program that must fail, asserting only on the exit status.
pub fn check_failing_run(src_path: &Path) -> Result<(), Box<dyn Error>> {
    let output = run_interpreter(src_path, None)?;

    assert!(
        !output.status.success(),
        "sovy should exit with a failure status"
    );

    Ok(())
}

/// Run a program that must fail, with `HOME` pointing at the given
/// directory so the real library registry stays out of the picture.
pub fn check_failing_run_with_home(home: &Path, src_path: &Path) -> Result<(), Box<dyn Error>> {
    let output = run_interpreter(src_path, Some(home))?;

    assert!(
        !output.status.success(),
        "sovy should exit with a failure status"
    );

    Ok(())
}

/// Format a program and assert on the exact stdout.
pub fn check_format(src_path: &Path, expected_stdout: &str) -> Result<(), Box<dyn Error>> {
    let output = run_formatter(src_path)?;

    let stdout = str::from_utf8(&output.stdout)?;
    let stderr = str::from_utf8(&output.stderr)?;
    assert!(stderr.is_empty(), "{stderr}");
    assert_eq!(stdout, expected_stdout);
    assert!(
        output.status.success(),
        "sovy fmt exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

/// Install a library with `HOME` pointing at the given directory.
pub fn install_library(home: &Path, library: &str) -> Result<(), Box<dyn Error>> {
    let output = Command::new(SOVY_PATH)
        .arg("install")
        .arg(library)
        .env("HOME", home)
        .output()?;

    assert!(
        output.status.success(),
        "sovy install exited with status {:?}: {}",
        output.status.code(),
        str::from_utf8(&output.stderr)?
    );

    Ok(())
}
