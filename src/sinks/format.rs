use std::time::Duration;

use serde::de::IgnoredAny;

/// Row label `<query>_<sequence_index>`.
#[must_use]
pub fn row_label(query: &str, sequence_index: u64) -> String {
    format!("{}_{}", query, sequence_index)
}

/// Latency in seconds, printed with the shortest `f32` representation.
#[must_use]
pub fn latency_seconds(latency: Duration) -> String {
    latency.as_secs_f32().to_string()
}

/// Strips insignificant whitespace from a JSON body. Bodies that are not
/// valid JSON are returned as (lossy) UTF-8 text, unchanged.
#[must_use]
pub fn compact_json(body: &[u8]) -> String {
    if serde_json::from_slice::<IgnoredAny>(body).is_err() {
        return String::from_utf8_lossy(body).into_owned();
    }

    let mut compacted = Vec::with_capacity(body.len());
    let mut in_string = false;
    let mut escaped = false;
    for &byte in body {
        if in_string {
            compacted.push(byte);
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => {}
            b'"' => {
                in_string = true;
                compacted.push(byte);
            }
            other => compacted.push(other),
        }
    }
    String::from_utf8_lossy(&compacted).into_owned()
}

/// File stem for a query; path separators are replaced so the file stays in
/// the output directory.
pub(super) fn file_stem(query: &str) -> String {
    query
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | '\0' => '_',
            other => other,
        })
        .collect()
}
