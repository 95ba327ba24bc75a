use std::{fmt, fs, path::Path};

use log::info;

use crate::{config::QueryConfig, sequence::QuerySequence, Error};

/// Lengths seen across a checked batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub nr_queries: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub mean_len: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nr_queries == 0 {
            return write!(f, "0 queries");
        }
        write!(
            f,
            "{} queries, length min {} mean {:.1} max {}",
            self.nr_queries, self.min_len, self.mean_len, self.max_len
        )
    }
}

/// Verifies that `dir` holds `query1.txt..query{n}.txt` with no gaps, each an
/// exact rendering of a sequence whose length and values fall in the ranges
/// of `config`. Stops at the first bad file.
pub fn check_dir(dir: impl AsRef<Path>, config: &QueryConfig) -> Result<Summary, Error> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::MissingDir(dir.to_path_buf()));
    }
    let lengths = config.lengths()?;
    let universe = config.universe()?;
    let queries = utils::list_queries(dir).map_err(|source| Error::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    info!("Checking {} queries in {}", queries.len(), dir.display());

    let mut total = 0;
    let (mut min_len, mut max_len) = (usize::MAX, 0);
    for (expected, (i, path)) in (1..).zip(&queries) {
        if *i != expected {
            return Err(Error::MissingQuery(utils::query_path(dir, expected)));
        }
        let s = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let query = s
            .parse::<QuerySequence>()
            .map_err(|e| Error::InvalidQuery {
                path: path.clone(),
                source: Box::new(e),
            })?;
        if !lengths.contains(query.len()) {
            return Err(Error::LengthOutOfRange {
                path: path.clone(),
                len: query.len(),
            });
        }
        if let Some(&value) = query.values().iter().find(|&&v| !universe.contains(v)) {
            return Err(Error::ValueOutOfRange {
                path: path.clone(),
                value,
            });
        }
        total += query.len();
        min_len = min_len.min(query.len());
        max_len = max_len.max(query.len());
    }

    let nr_queries = queries.len();
    if nr_queries == 0 {
        return Ok(Summary {
            nr_queries,
            min_len: 0,
            max_len: 0,
            mean_len: 0.0,
        });
    }
    Ok(Summary {
        nr_queries,
        min_len,
        max_len,
        mean_len: total as f64 / nr_queries as f64,
    })
}
