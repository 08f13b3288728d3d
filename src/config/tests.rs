use super::loader::load_config_file;
use super::*;
use crate::args::{Cli, Command, DEFAULT_DURATION, DEFAULT_OUTPUT_PATH, MeasureArgs};
use crate::error::{AppError, ConfigError, ValidationError};
use clap::Parser;
use std::path::Path;
use std::time::Duration;

fn measure_args<const N: usize>(argv: [&str; N]) -> Result<MeasureArgs, String> {
    let cli = Cli::try_parse_from(argv).map_err(|err| format!("parse failed: {}", err))?;
    let Command::Measure(args) = cli.command;
    Ok(args)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<std::path::PathBuf, String> {
    let path = dir.join(name);
    std::fs::write(&path, contents).map_err(|err| format!("write failed: {}", err))?;
    Ok(path)
}

fn load_file(path: &Path) -> Result<ConfigFile, String> {
    load_config_file(path).map_err(|err| err.to_string())
}

#[test]
fn resolve_uses_defaults() -> Result<(), String> {
    let args = measure_args(["apibench", "measure", "-i", "cases.csv", "-a", "http://a.test"])?;
    let config = RunConfig::resolve(&args, None).map_err(|err| err.to_string())?;
    if config.output_dir() != Path::new(DEFAULT_OUTPUT_PATH) {
        return Err(format!("Unexpected output dir: {}", config.output_dir().display()));
    }
    if config.duration() != DEFAULT_DURATION || config.interval() != config.duration() {
        return Err("Unexpected default timing".to_owned());
    }
    if config.export_json().is_some() {
        return Err("Export should be off by default".to_owned());
    }
    Ok(())
}

#[test]
fn resolve_prefers_cli_over_file() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_file(
        dir.path(),
        "apibench.toml",
        r#"
input = "from-file.csv"
output = "file-out"
apis = ["http://file.test"]
interval = "1s"
duration = 3
"#,
    )?;
    let file = load_file(&path)?;
    let args = measure_args([
        "apibench",
        "measure",
        "-i",
        "cli.csv",
        "--duration",
        "250ms",
    ])?;
    let config = RunConfig::resolve(&args, Some(file)).map_err(|err| err.to_string())?;

    if config.input_path() != Path::new("cli.csv") {
        return Err("CLI input should win".to_owned());
    }
    if config.output_dir() != Path::new("file-out") {
        return Err("File output should apply when CLI omits it".to_owned());
    }
    if config.targets() != ["http://file.test".to_owned()] {
        return Err(format!("Unexpected targets: {:?}", config.targets()));
    }
    if config.interval() != Duration::from_secs(1) {
        return Err("File interval should apply".to_owned());
    }
    if config.duration() != Duration::from_millis(250) {
        return Err("CLI duration should win".to_owned());
    }
    Ok(())
}

#[test]
fn resolve_rejects_too_many_targets() -> Result<(), String> {
    let args = measure_args([
        "apibench",
        "measure",
        "-i",
        "cases.csv",
        "-a",
        "http://a.test,http://b.test,http://c.test",
    ])?;
    match RunConfig::resolve(&args, None) {
        Err(ConfigError::TooManyTargets { limit, actual }) if limit == MAX_TARGETS && actual == 3 => {
            Ok(())
        }
        other => Err(format!("Expected TooManyTargets, got {:?}", other)),
    }
}

#[test]
fn resolve_requires_input_and_targets() -> Result<(), String> {
    let no_input = measure_args(["apibench", "measure", "-a", "http://a.test"])?;
    if !matches!(RunConfig::resolve(&no_input, None), Err(ConfigError::MissingInput)) {
        return Err("Expected MissingInput".to_owned());
    }
    let blank_targets = measure_args(["apibench", "measure", "-i", "cases.csv", "-a", " , "])?;
    if !matches!(RunConfig::resolve(&blank_targets, None), Err(ConfigError::NoTargets)) {
        return Err("Expected NoTargets".to_owned());
    }
    Ok(())
}

#[test]
fn resolve_rejects_zero_file_duration() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_file(
        dir.path(),
        "apibench.json",
        r#"{ "input": "cases.csv", "apis": ["http://a.test"], "duration": 0 }"#,
    )?;
    let file = load_file(&path)?;
    let args = measure_args(["apibench", "measure"])?;
    match RunConfig::resolve(&args, Some(file)) {
        Err(ConfigError::InvalidField {
            field: "duration",
            source: ValidationError::DurationZero,
        }) => Ok(()),
        other => Err(format!("Expected zero duration error, got {:?}", other)),
    }
}

#[test]
fn config_file_accepts_aliases() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_file(
        dir.path(),
        "apibench.toml",
        "file_input = \"cases.csv\"\napi = [\"http://a.test\"]\n",
    )?;
    let file = load_file(&path)?;
    if file.input.as_deref() != Some("cases.csv") {
        return Err(format!("Unexpected input: {:?}", file.input));
    }
    if file.apis != Some(vec!["http://a.test".to_owned()]) {
        return Err(format!("Unexpected apis: {:?}", file.apis));
    }
    Ok(())
}

#[test]
fn config_file_rejects_unknown_keys_and_extensions() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let unknown = write_file(dir.path(), "bad.toml", "target = \"x\"\n")?;
    if !matches!(
        load_config_file(&unknown),
        Err(AppError::Config(ConfigError::ParseToml { .. }))
    ) {
        return Err("Unknown keys should be rejected".to_owned());
    }
    let yaml = write_file(dir.path(), "config.yaml", "input: x\n")?;
    if !matches!(
        load_config_file(&yaml),
        Err(AppError::Config(ConfigError::UnsupportedExtension { .. }))
    ) {
        return Err("YAML should be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn validate_input_path_checks_kind() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    if !matches!(
        validate_input_path(dir.path()),
        Err(ConfigError::InputIsDirectory { .. })
    ) {
        return Err("Directory should be rejected".to_owned());
    }
    if !matches!(
        validate_input_path(&dir.path().join("missing.csv")),
        Err(ConfigError::InputNotFound { .. })
    ) {
        return Err("Missing file should be rejected".to_owned());
    }
    let file = write_file(dir.path(), "cases.csv", "q,1\n")?;
    validate_input_path(&file).map_err(|err| err.to_string())
}

#[test]
fn builders_override_timing() -> Result<(), String> {
    let config = RunConfig::new("cases.csv", vec!["http://a.test".to_owned()])
        .map_err(|err| err.to_string())?
        .with_timing(Duration::from_millis(50), Duration::from_millis(200))
        .with_request_timeout(Duration::from_secs(5));
    if config.interval() != Duration::from_millis(50) || config.duration() != Duration::from_millis(200) {
        return Err("Timing builder not applied".to_owned());
    }
    if config.request_timeout() != Duration::from_secs(5) {
        return Err(format!("Unexpected timeout: {:?}", config.request_timeout()));
    }
    Ok(())
}
