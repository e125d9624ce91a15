use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn tuner() -> Command {
    let mut cmd = Command::cargo_bin("resume-tuner").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("RESUME_TUNER_LLM_PROVIDER")
        .env_remove("RESUME_TUNER_EMBEDDING_PROVIDER");
    cmd
}

#[test]
fn missing_resume_file_fails() {
    tuner()
        .args(["--resume", "/nonexistent/resume.txt", "--jd", "/nonexistent/jd.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/resume.txt"));
}

#[test]
fn blank_job_description_fails() {
    let mut resume = tempfile::NamedTempFile::new().unwrap();
    write!(resume, "Rust engineer").unwrap();
    let jd = tempfile::NamedTempFile::new().unwrap();

    tuner()
        .arg("--resume")
        .arg(resume.path())
        .arg("--jd")
        .arg(jd.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("job description text is empty"));
}

#[test]
fn unknown_provider_in_env_fails() {
    tuner()
        .env("RESUME_TUNER_LLM_PROVIDER", "cohere")
        .args(["--resume", "a.txt", "--jd", "b.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown llm provider"));
}

#[test]
fn missing_credentials_fail_before_any_call() {
    let mut resume = tempfile::NamedTempFile::new().unwrap();
    write!(resume, "Rust engineer").unwrap();
    let mut jd = tempfile::NamedTempFile::new().unwrap();
    write!(jd, "Rust role").unwrap();

    tuner()
        .env_remove("ANTHROPIC_API_KEY")
        .current_dir(std::env::temp_dir())
        .arg("--resume")
        .arg(resume.path())
        .arg("--jd")
        .arg(jd.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("embedding backend ready"))
        .stderr(predicate::str::contains("ANTHROPIC_API_KEY"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn dotenv_log_filter_applies_to_startup_logs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "RUST_LOG=off\n").unwrap();
    std::fs::write(dir.path().join("resume.txt"), "Rust engineer").unwrap();
    std::fs::write(dir.path().join("jd.txt"), "Rust role").unwrap();

    tuner()
        .env_remove("ANTHROPIC_API_KEY")
        .current_dir(dir.path())
        .args(["--resume", "resume.txt", "--jd", "jd.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("embedding backend ready").not())
        .stderr(predicate::str::contains("ANTHROPIC_API_KEY"));
}
