use std::{fs, path::Path};

use anyhow::Context;

use crate::{
    filegen::QueryGenerator,
    sequence::{LenRange, Universe},
    Error,
};

/// Batch parameters as read from a JSON file. Missing keys take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    #[serde(default = "default_low")]
    pub low: u32,
    #[serde(default = "default_high")]
    pub high: u32,
}

impl QueryConfig {
    pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let s = fs::read_to_string(path).context("failed to read config file")?;
        let config: Self = serde_json::from_str(&s).context("invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn lengths(&self) -> Result<LenRange, Error> {
        LenRange::new(self.min_len, self.max_len)
    }

    pub fn universe(&self) -> Result<Universe, Error> {
        Universe::new(self.low, self.high)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let lengths = self.lengths()?;
        let universe = self.universe()?;
        if lengths.max() > universe.size() {
            return Err(Error::InvalidConfig(
                "maximum query length exceeds the number of distinct values",
            ));
        }
        Ok(())
    }

    pub fn to_generator(&self, seed: u64) -> Result<QueryGenerator, Error> {
        self.validate()?;
        Ok(QueryGenerator::builder()
            .count(self.count)
            .lengths(self.lengths()?)
            .universe(self.universe()?)
            .seed(seed)
            .build())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            min_len: default_min_len(),
            max_len: default_max_len(),
            low: default_low(),
            high: default_high(),
        }
    }
}

fn default_count() -> usize {
    2000
}

fn default_min_len() -> usize {
    LenRange::DEFAULT.min()
}

fn default_max_len() -> usize {
    LenRange::DEFAULT.max()
}

fn default_low() -> u32 {
    Universe::DEFAULT.low()
}

fn default_high() -> u32 {
    Universe::DEFAULT.high()
}
