use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::SinkError;

use super::format::file_stem;

const CSV_EXTENSION: &str = "csv";
const TMP_SUFFIX: &str = ".tmp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Response,
    Latency,
}

impl ResultKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ResultKind::Response => "response",
            ResultKind::Latency => "latency",
        }
    }
}

/// Writes `(label, value)` rows to `<output_dir>/<query>.<kind>.csv`.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn path_for(&self, query: &str, kind: ResultKind) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}.{}",
            file_stem(query),
            kind.as_str(),
            CSV_EXTENSION
        ))
    }

    /// Creates the output directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), SinkError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|err| SinkError::CreateDir {
                path: self.output_dir.clone(),
                source: err,
            })
    }

    /// Replaces the result file for `query` and `kind` with `rows`.
    ///
    /// The rows are encoded in memory first and moved into place with a
    /// rename, so a reader never sees a partial file under the final name.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding, writing, or renaming fails.
    pub async fn write(
        &self,
        query: &str,
        kind: ResultKind,
        rows: &[(String, String)],
    ) -> Result<PathBuf, SinkError> {
        let path = self.path_for(query, kind);
        let buffer = encode_rows(&path, rows)?;
        write_atomic(&path, &buffer).await?;
        debug!("Wrote {} {} rows to {}", rows.len(), kind.as_str(), path.display());
        Ok(path)
    }
}

/// Serializes `value` as pretty JSON and writes it atomically to `path`.
///
/// # Errors
///
/// Returns an error when serialization or the write fails.
pub async fn write_json<T: Serialize + Sync>(path: &Path, value: &T) -> Result<(), SinkError> {
    let json = serde_json::to_vec_pretty(value).map_err(|err| SinkError::SerializeJson {
        path: path.to_path_buf(),
        source: err,
    })?;
    write_atomic(path, &json).await
}

fn encode_rows(path: &Path, rows: &[(String, String)]) -> Result<Vec<u8>, SinkError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (label, value) in rows {
        writer
            .write_record([label.as_str(), value.as_str()])
            .map_err(|err| SinkError::EncodeCsv {
                path: path.to_path_buf(),
                source: err,
            })?;
    }
    writer.into_inner().map_err(|err| SinkError::FlushCsv {
        path: path.to_path_buf(),
        source: err.into_error(),
    })
}

async fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), SinkError> {
    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, contents)
        .await
        .map_err(|err| SinkError::Write {
            path: tmp.clone(),
            source: err,
        })?;
    if let Err(err) = tokio::fs::rename(&tmp, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
            debug!("Failed to remove {}: {}", tmp.display(), cleanup);
        }
        return Err(SinkError::Rename {
            from: tmp,
            to: path.to_path_buf(),
            source: err,
        });
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(TMP_SUFFIX);
    PathBuf::from(name)
}
