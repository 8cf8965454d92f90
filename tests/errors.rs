use std::{error::Error, fs, path::Path};

use test_utils::{check_failing_run, check_failing_run_with_home};

#[test]
fn syntax_errors_fail_the_run() -> Result<(), Box<dyn Error>> {
    check_failing_run(Path::new("./demos/erro_sintaxe.sl"))
}

#[test]
fn division_without_smath_fails() -> Result<(), Box<dyn Error>> {
    let home = std::env::temp_dir().join(format!("sovy-e2e-gate-{}", std::process::id()));
    let _ = fs::remove_dir_all(&home);
    fs::create_dir_all(&home)?;

    check_failing_run_with_home(&home, Path::new("./demos/sem_smath.sl"))?;

    let _ = fs::remove_dir_all(&home);
    Ok(())
}
