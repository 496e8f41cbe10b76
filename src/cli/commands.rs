//! Subcommand handlers for run and config actions.

use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use super::args::{ConfigAction, RunArgs};
use crate::capture::ImageFileSource;
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG_TOML};
use crate::display::{save_png, DisplayError, FrameSink, NullSink, PngSequenceSink};
use crate::driver::{self, DriverError, RunSummary};

/// Errors surfaced by subcommand handlers.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error("no input image given. Pass --input <PATH> or set [capture] input in the config file")]
    MissingInput,

    #[error("config file already exists: {}\nUse 'bloom config show' to view current settings.", .0.display())]
    ConfigExists(PathBuf),

    #[error("failed to write config file '{}': {}", .path.display(), .source)]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Run the simulation with `config` overridden by `args`.
pub fn handle_run(
    args: &RunArgs,
    mut config: Config,
    stop: &AtomicBool,
) -> Result<RunSummary, CliError> {
    args.apply(&mut config);
    config.validate()?;

    let input = config.capture.input.clone().ok_or(CliError::MissingInput)?;
    let mut source = ImageFileSource::new(input).with_mirror(config.capture.mirror);

    let mut sink: Box<dyn FrameSink> = match &config.output.frames_dir {
        Some(dir) => Box::new(PngSequenceSink::create(dir)?),
        None => Box::new(NullSink),
    };

    let settings = config.driver_settings();
    let summary = driver::run(&mut source, sink.as_mut(), &settings, stop)?;

    if let Some(path) = &config.output.final_image {
        save_png(&summary.final_frame, summary.dimensions, path)?;
        log::info!("Wrote final generation to {}", path.display());
    }

    Ok(summary)
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<(), CliError> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&config_path))?;
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found, using defaults)", config_path.display());
            }
            println!();
            println!("{}", describe(&config));
        }
        ConfigAction::Init => {
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }

    Ok(())
}

/// Write the default config file, refusing to overwrite an existing one.
pub fn init_config(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::WriteConfig {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| CliError::WriteConfig {
        path: path.to_path_buf(),
        source: e,
    })
}

fn describe(config: &Config) -> String {
    let or_unset = |p: &Option<PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unset)".to_string())
    };

    let mut out = String::from("Current configuration:\n");
    out.push_str(&format!("  Input: {}\n", or_unset(&config.capture.input)));
    out.push_str(&format!(
        "  Mirror: {}\n",
        if config.capture.mirror { "yes" } else { "no" }
    ));
    out.push_str(&format!("  Max dimension: {}\n", config.binarize.max_dimension));
    out.push_str(&format!("  Threshold: {}\n", config.binarize.threshold));
    out.push_str(&format!("  FPS: {}\n", config.simulation.fps));
    out.push_str(&format!("  Warm-up: {}s\n", config.simulation.warm_up_secs));
    out.push_str(&format!(
        "  Generations: {}\n",
        config
            .simulation
            .generations
            .map(|g| g.to_string())
            .unwrap_or_else(|| "unlimited".to_string())
    ));
    out.push_str(&format!("  Threads: {}\n", config.simulation.threads));
    out.push_str(&format!("  Frames dir: {}\n", or_unset(&config.output.frames_dir)));
    out.push_str(&format!("  Final image: {}", or_unset(&config.output.final_image)));
    out
}
