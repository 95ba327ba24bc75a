pub mod check;
pub mod config;
pub mod filegen;
pub mod sequence;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

pub use check::{check_dir, Summary};
pub use config::QueryConfig;
pub use filegen::{generate_files, QueryGenerator};
pub use sequence::{generate_sequence, LenRange, QuerySequence, Universe};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot sample {requested} distinct values from a universe of {available}")]
    Population { requested: usize, available: usize },

    #[error("output directory {} does not exist", .0.display())]
    MissingDir(PathBuf),

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error(transparent)]
    Parse(#[from] utils::ParseError),

    #[error("values are not strictly increasing at position {0}")]
    Unordered(usize),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is missing", .0.display())]
    MissingQuery(PathBuf),

    #[error("invalid query {}", .path.display())]
    InvalidQuery {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("{}: length {len} out of range", .path.display())]
    LengthOutOfRange { path: PathBuf, len: usize },

    #[error("{}: value {value} out of range", .path.display())]
    ValueOutOfRange { path: PathBuf, value: u32 },
}
