use std::path::PathBuf;

use clap::Parser;
use querygen::QueryConfig;

/// Verifies a directory of generated query files.
#[derive(Debug, Parser)]
struct Opt {
    dir: PathBuf,
    /// Ranges to check against; defaults apply when omitted
    #[clap(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::parse();
    let config = match &opt.config {
        Some(path) => QueryConfig::read(path)?,
        None => QueryConfig::default(),
    };
    let summary = querygen::check_dir(&opt.dir, &config)?;
    println!("{summary}");
    Ok(())
}
