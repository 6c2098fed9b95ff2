use archgen::config::Config;
use archgen::summary::{render_summary, write_summary, RunStatus, SUMMARY_FILE};
use tempfile::TempDir;

#[test]
fn test_success_summary() {
    let config = Config {
        features: vec!["basic".to_string(), "auth".to_string()],
        ..Config::default()
    };

    assert_eq!(
        render_summary(&config, &RunStatus::Success),
        "Project Type: webapp\n\
         Tech Stack: react\n\
         Features: basic, auth\n\
         Generation Mode: complete_project\n\
         \n\
         Generation completed successfully!"
    );
}

#[test]
fn test_failure_summary_has_only_the_error() {
    let status = RunStatus::Failed("IO error: permission denied.".to_string());
    assert_eq!(
        render_summary(&Config::default(), &status),
        "Generation failed: IO error: permission denied."
    );
}

#[test]
fn test_write_summary_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::default();

    write_summary(temp_dir.path(), &config, &RunStatus::Failed("boom".into())).unwrap();
    let path = write_summary(temp_dir.path(), &config, &RunStatus::Success).unwrap();

    assert_eq!(path, temp_dir.path().join(SUMMARY_FILE));
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.ends_with("Generation completed successfully!"));
    assert!(!content.contains("boom"));
}
