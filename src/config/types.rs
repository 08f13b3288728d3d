use serde::Deserialize;

/// On-disk settings. Every field is optional; CLI flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "file_input")]
    pub input: Option<String>,
    pub output: Option<String>,
    #[serde(alias = "api")]
    pub apis: Option<Vec<String>>,
    pub interval: Option<DurationValue>,
    pub duration: Option<DurationValue>,
    pub timeout: Option<DurationValue>,
    pub export_json: Option<String>,
}

/// A duration written either as `"250ms"`-style text or as whole seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}
