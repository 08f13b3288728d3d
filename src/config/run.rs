use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::args::parsers::parse_duration_arg;
use crate::args::{
    DEFAULT_DURATION, DEFAULT_INTERVAL, DEFAULT_OUTPUT_PATH, DEFAULT_REQUEST_TIMEOUT, MeasureArgs,
};
use crate::error::{ConfigError, ValidationError};

use super::types::{ConfigFile, DurationValue};

/// Upper bound on compared endpoints. A policy cap, not a technical limit.
pub const MAX_TARGETS: usize = 2;

/// Everything a run needs, fixed before the first request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    input_path: PathBuf,
    output_dir: PathBuf,
    targets: Vec<String>,
    interval: Duration,
    duration: Duration,
    request_timeout: Duration,
    export_json: Option<PathBuf>,
}

impl RunConfig {
    /// Creates a configuration with default timing and output location.
    ///
    /// # Errors
    ///
    /// Returns `NoTargets` for an empty target list and `TooManyTargets`
    /// when more than [`MAX_TARGETS`] are given.
    pub fn new(input_path: impl Into<PathBuf>, targets: Vec<String>) -> Result<Self, ConfigError> {
        let targets = normalize_targets(targets)?;
        Ok(Self {
            input_path: input_path.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_PATH),
            targets,
            interval: DEFAULT_INTERVAL,
            duration: DEFAULT_DURATION,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            export_json: None,
        })
    }

    /// Merges CLI arguments over an optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error when the input path or targets are missing, too many
    /// targets are configured, or a config duration is invalid.
    pub fn resolve(args: &MeasureArgs, file: Option<ConfigFile>) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();

        let input_path = args
            .file_input
            .clone()
            .or(file.input)
            .ok_or(ConfigError::MissingInput)?;
        let targets = if args.apis.is_empty() {
            file.apis.unwrap_or_default()
        } else {
            args.apis.clone()
        };

        let mut config = Self::new(input_path, targets)?;
        if let Some(output) = args.output.clone().or(file.output) {
            config.output_dir = PathBuf::from(output);
        }
        config.interval = pick_duration(args.interval, file.interval, "interval")?
            .unwrap_or(DEFAULT_INTERVAL);
        config.duration = pick_duration(args.duration, file.duration, "duration")?
            .unwrap_or(DEFAULT_DURATION);
        config.request_timeout = pick_duration(args.timeout, file.timeout, "timeout")?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        config.export_json = args.export_json.clone().or(file.export_json).map(PathBuf::from);
        Ok(config)
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub const fn with_timing(mut self, interval: Duration, duration: Duration) -> Self {
        self.interval = interval;
        self.duration = duration;
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Bypasses target validation so later checks can be exercised.
    #[cfg(test)]
    pub(crate) fn with_unchecked_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    #[must_use]
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn export_json(&self) -> Option<&Path> {
        self.export_json.as_deref()
    }
}

/// Checks that the test-case input exists and is a regular file.
///
/// # Errors
///
/// Returns `InputNotFound` or `InputIsDirectory`.
pub fn validate_input_path(path: &Path) -> Result<(), ConfigError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(ConfigError::InputIsDirectory {
            path: path.to_path_buf(),
        }),
        Ok(_) => Ok(()),
        Err(err) => {
            tracing::debug!("Input metadata lookup failed: {}", err);
            Err(ConfigError::InputNotFound {
                path: path.to_path_buf(),
            })
        }
    }
}

pub(crate) fn check_target_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::NoTargets);
    }
    if count > MAX_TARGETS {
        return Err(ConfigError::TooManyTargets {
            limit: MAX_TARGETS,
            actual: count,
        });
    }
    Ok(())
}

fn normalize_targets(targets: Vec<String>) -> Result<Vec<String>, ConfigError> {
    let targets: Vec<String> = targets
        .into_iter()
        .map(|target| target.trim().to_owned())
        .filter(|target| !target.is_empty())
        .collect();
    check_target_count(targets.len())?;
    Ok(targets)
}

fn pick_duration(
    cli: Option<Duration>,
    file: Option<DurationValue>,
    field: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    if cli.is_some() {
        return Ok(cli);
    }
    let Some(value) = file else {
        return Ok(None);
    };
    let parsed = match value {
        DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
        DurationValue::Seconds(secs) => Ok(Duration::from_secs(secs)),
        DurationValue::Text(text) => parse_duration_arg(&text),
    };
    parsed
        .map(Some)
        .map_err(|source| ConfigError::InvalidField { field, source })
}
