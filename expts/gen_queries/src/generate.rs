use std::{fmt, path::PathBuf, time::Instant};

use log::info;
use querygen::QueryConfig;
use rand::Rng;

#[derive(Debug, clap::Parser)]
pub struct Generate {
    /// Existing directory the query files are written to
    #[clap(long, default_value = "./translate/querys2000/")]
    out: PathBuf,
    /// Number of query files; overrides the config
    #[clap(long)]
    count: Option<usize>,
    /// Seed for the batch; drawn from the OS when omitted
    #[clap(long)]
    seed: Option<u64>,
    /// JSON file with length and value ranges
    #[clap(long)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    mode: Mode,
}

impl Generate {
    pub fn run(&self) -> anyhow::Result<usize> {
        let mut config = match &self.config {
            Some(path) => QueryConfig::read(path)?,
            None => QueryConfig::default(),
        };
        if let Some(count) = self.count {
            config.count = count;
        }
        let seed = self.seed();
        if let Some(notice) = self.seed_notice(seed) {
            println!("{notice}");
        }
        info!("Generating {} queries ({}, seed {seed})", config.count, self.mode);
        let gen = config.to_generator(seed)?;
        let start = Instant::now();
        let n = match self.mode {
            Mode::Seq => gen.write_to(&self.out)?,
            Mode::Par => gen.par_write_to(&self.out)?,
        };
        let elapsed = start.elapsed().as_millis();
        info!("Wrote {n} queries in {elapsed} ms");
        Ok(n)
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }

    /// Shown on stdout whenever the seed wasn't given, independent of
    /// `RUST_LOG`.
    fn seed_notice(&self, seed: u64) -> Option<String> {
        self.seed
            .is_none()
            .then(|| format!("Using seed {seed} (pass --seed {seed} to repeat this run)"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum Mode {
    /// One generator for the whole batch
    Seq,
    /// One generator per file, spread over all cores
    Par,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Seq => "seq",
            Mode::Par => "par",
        };
        write!(f, "{}", s)
    }
}
