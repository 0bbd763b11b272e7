use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vivarium_lib::app::{Demo, OutputFormat};
use vivarium_lib::{init_logging, IdSource, PetConfig, RandomIds, SeededIds, SYSTEM_VERSION};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path; defaults are used when it does not exist
    #[arg(short, long, default_value = "vivarium.toml")]
    config: PathBuf,

    /// Seed for reproducible pet ids
    #[arg(long)]
    seed: Option<u64>,

    /// Output format for the demo records
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::info!(version = SYSTEM_VERSION, "Vivarium pet system");

    let config = PetConfig::load(&args.config)?;
    let ids: Box<dyn IdSource> = match args.seed {
        Some(seed) => Box::new(SeededIds::new(seed)),
        None => Box::new(RandomIds),
    };

    let mut demo = Demo::new(config, ids, args.format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo.run(&mut out)?;

    Ok(())
}
