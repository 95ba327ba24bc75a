use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;

pub const QUERY_PREFIX: &str = "query";
pub const QUERY_EXT: &str = "txt";

/// File name of the `i`th query (1-based, no padding).
pub fn query_file_name(i: usize) -> String {
    format!("{QUERY_PREFIX}{i}.{QUERY_EXT}")
}

pub fn query_path(dir: impl AsRef<Path>, i: usize) -> PathBuf {
    dir.as_ref().join(query_file_name(i))
}

/// Inverse of [`query_file_name`]. Returns `None` for anything that isn't a
/// query file.
pub fn query_index(file_name: &str) -> Option<usize> {
    let digits = file_name
        .strip_prefix(QUERY_PREFIX)?
        .strip_suffix(QUERY_EXT)?
        .strip_suffix('.')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0')
    {
        return None;
    }
    digits.parse().ok()
}

/// All query files in `dir`, sorted by index.
pub fn list_queries(dir: impl AsRef<Path>) -> io::Result<Vec<(usize, PathBuf)>> {
    let mut queries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(i) = entry.file_name().to_str().and_then(query_index) {
            queries.push((i, entry.path()));
        }
    }
    queries.sort_by_key(|&(i, _)| i);
    Ok(queries)
}

/// Splits comma-separated decimal values. Only the exact rendering is
/// accepted: no whitespace, signs, leading zeros or trailing newline.
/// Ordering is not checked here.
pub fn parse_values(s: &str) -> Result<Vec<u32>, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    s.split(',')
        .enumerate()
        .map(|(pos, token)| {
            parse_value(token).ok_or_else(|| ParseError::InvalidValue {
                pos,
                token: token.to_owned(),
            })
        })
        .collect()
}

fn parse_value(token: &str) -> Option<u32> {
    let canonical = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));
    if !canonical {
        return None;
    }
    token.parse().ok()
}

pub fn read_values(path: impl AsRef<Path>) -> anyhow::Result<Vec<u32>> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).context("failed to read query file")?;
    let values = parse_values(&s).with_context(|| format!("invalid query file {}", path.display()))?;
    Ok(values)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("query is empty")]
    Empty,

    #[error("invalid value {token:?} at position {pos}")]
    InvalidValue { pos: usize, token: String },
}
