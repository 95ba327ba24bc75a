use clap::Parser;
use gen_queries::Generate;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let generate = Generate::parse();
    generate.run()?;
    Ok(())
}
