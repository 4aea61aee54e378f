//! Loading player configuration from disk.

use std::io::Write;

use haptickit::prelude::*;
use haptickit::ConfigError;
use haptickit_test_helpers::prelude::*;
use tempfile::Builder;

fn write_temp(suffix: &str, contents: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_yaml_file() -> TestResult {
    let file = write_temp(
        ".yaml",
        "enabled: true\nstop_policy: keep-warm\nmax_pending: 4\n",
    )?;
    let config = PlayerConfig::load(file.path())?;
    assert_eq!(config.stop_policy, StopPolicy::KeepWarm);
    assert_eq!(config.max_pending, 4);
    Ok(())
}

#[test]
fn test_load_json_file() -> TestResult {
    let file = write_temp(".json", r#"{"enabled": false}"#)?;
    let config = PlayerConfig::load(file.path())?;
    assert!(!config.enabled);
    assert_eq!(config.stop_policy, StopPolicy::AutoStop);
    Ok(())
}

#[test]
fn test_load_rejects_invalid_values() -> TestResult {
    let file = write_temp(".yml", "max_pending: 0\n")?;
    assert!(matches!(
        PlayerConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));

    let file = write_temp(".yaml", "stop_policy: sometimes\n")?;
    assert!(matches!(
        PlayerConfig::load(file.path()),
        Err(ConfigError::Yaml(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_loaded_policy_reaches_engine() -> TestResult {
    let file = write_temp(".yaml", "stop_policy: keep-warm\n")?;
    let config = PlayerConfig::load(file.path())?;

    let backend = MockBackend::new();
    let state = backend.state();
    let player = must_some(HapticPlayer::new(&backend, config), "player");
    player.play(HapticPattern::SinglePulse);
    player.flush().await;

    assert_eq!(state.finished_actions(), vec![FinishedAction::LeaveRunning]);
    Ok(())
}
