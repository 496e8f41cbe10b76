use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use bloom::cli::{handle_config_action, handle_run, Args, CliError, Command};
use bloom::config::Config;
use bloom::driver::setup_ctrlc_handler;
use clap::Parser;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Config { action } => handle_config_action(action, args.config.as_deref()),
        Command::Run(run_args) => {
            let config = Config::load(args.config.as_deref())?;

            let stop = Arc::new(AtomicBool::new(false));
            if let Err(e) = setup_ctrlc_handler(Arc::clone(&stop)) {
                log::warn!("Failed to install Ctrl+C handler: {}", e);
            }

            let summary = handle_run(&run_args, config, &stop)?;
            println!(
                "{} generations on a {} grid, {} live cells ({:?})",
                summary.generations,
                summary.dimensions,
                summary.final_population,
                summary.stop_reason
            );
            Ok(())
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
