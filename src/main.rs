use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use techsupport::{conversation, store, Responder};
use utils::{unwrap_or_def_verbose, ResultExt as _};

mod logging;
mod techsupport;
mod utils;

/// Technical support answering with canned responses
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file, `config.yaml` in the data directory by default
    #[clap(long, short)]
    config: Option<PathBuf>,

    /// File with keywords and their responses
    #[clap(long, short)]
    responses: Option<PathBuf>,

    /// File with responses used when no keyword matches
    #[clap(long, short)]
    defaults: Option<PathBuf>,

    /// Seed for picking default responses
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = logging::init()?;

    let config_path = match args.config {
        Some(path) => path,
        None => store::config_file_path()?,
    };
    let mut config = unwrap_or_def_verbose(store::load_config(&config_path));
    if let Some(responses) = args.responses {
        config.responses_file = responses;
    }
    if let Some(defaults) = args.defaults {
        config.default_responses_file = defaults;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut responder = Responder::from_config(&config);
    info!("Running");
    conversation::run(&mut responder, io::stdin().lock(), io::stdout().lock()).print_err();
    info!("Terminating.");
    Ok(())
}
