use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("apibench/", env!("CARGO_PKG_VERSION"));

/// Config filenames checked when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["apibench.toml", "apibench.json"];

pub(crate) const DEFAULT_OUTPUT_PATH: &str = "./output";

/// Window over which `concurrency` requests are paced.
pub(crate) const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Total attack window per test case. Matches the interval, so one window runs.
pub(crate) const DEFAULT_DURATION: Duration = Duration::from_millis(100);

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
