use std::{fs, path::Path};

use log::{debug, info};
use rand::prelude::*;
use rayon::prelude::*;

use crate::{
    sequence::{generate_sequence, LenRange, QuerySequence, Universe},
    Error,
};

/// Writes `n` query files with the default length range and universe into
/// an existing directory, drawing from `rng`.
pub fn generate_files(n: usize, path: impl AsRef<Path>, rng: impl Rng) -> Result<(), Error> {
    QueryGenerator::builder()
        .count(n)
        .build()
        .write_to_with(path, rng)?;
    Ok(())
}

#[derive(Debug, Clone, typed_builder::TypedBuilder)]
pub struct QueryGenerator {
    count: usize,
    #[builder(default)]
    lengths: LenRange,
    #[builder(default)]
    universe: Universe,
    #[builder(default = 0)]
    seed: u64,
}

impl QueryGenerator {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the whole batch in memory.
    pub fn generate(&self, mut rng: impl Rng) -> Result<Vec<QuerySequence>, Error> {
        (0..self.count).map(|_| self.next_query(&mut rng)).collect()
    }

    /// Writes the batch sequentially, seeded from `self.seed`.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<usize, Error> {
        let rng = StdRng::seed_from_u64(self.seed);
        self.write_to_with(dir, rng)
    }

    /// Writes the batch sequentially, drawing from `rng`. Stops at the first
    /// error; files already written are left in place.
    pub fn write_to_with(&self, dir: impl AsRef<Path>, mut rng: impl Rng) -> Result<usize, Error> {
        let dir = dir.as_ref();
        Self::check_dir(dir)?;
        info!("Writing {} queries to {}", self.count, dir.display());
        for i in 1..=self.count {
            self.write_one(dir, i, &mut rng)?;
        }
        Ok(self.count)
    }

    /// Writes the batch across the rayon pool. Each query gets its own
    /// generator, seeded from a stream drawn up front from `self.seed`, so the
    /// output doesn't depend on scheduling and nearby seeds don't produce
    /// shifted copies of each other.
    pub fn par_write_to(&self, dir: impl AsRef<Path>) -> Result<usize, Error> {
        let dir = dir.as_ref();
        Self::check_dir(dir)?;
        info!(
            "Writing {} queries to {} in parallel",
            self.count,
            dir.display()
        );
        let seeds = self.file_seeds();
        seeds.par_iter().enumerate().try_for_each(|(i, &seed)| {
            let mut rng = StdRng::seed_from_u64(seed);
            self.write_one(dir, i + 1, &mut rng)
        })?;
        Ok(self.count)
    }

    fn file_seeds(&self) -> Vec<u64> {
        let mut seeder = StdRng::seed_from_u64(self.seed);
        (0..self.count).map(|_| seeder.gen()).collect()
    }

    fn next_query(&self, mut rng: impl Rng) -> Result<QuerySequence, Error> {
        let len = self.lengths.sample(&mut rng);
        generate_sequence(len, self.universe, &mut rng)
    }

    fn write_one(&self, dir: &Path, i: usize, rng: impl Rng) -> Result<(), Error> {
        let query = self.next_query(rng)?;
        let path = utils::query_path(dir, i);
        debug!("{}: {} values", path.display(), query.len());
        fs::write(&path, query.to_string()).map_err(|source| Error::Write { path, source })
    }

    fn check_dir(dir: &Path) -> Result<(), Error> {
        if dir.is_dir() {
            Ok(())
        } else {
            Err(Error::MissingDir(dir.to_path_buf()))
        }
    }
}
