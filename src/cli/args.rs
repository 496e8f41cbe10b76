//! CLI argument parsing with clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Seed Conway's Game of Life from a still image and watch it evolve
#[derive(Parser, Debug)]
#[command(name = "bloom")]
#[command(version, about = "Seed Conway's Game of Life from a still image", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Binarize an image and run the simulation
    Run(RunArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Options for `bloom run`. Anything left unset falls back to the config file.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct RunArgs {
    /// Seed image
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Stop after this many generations
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Display ticks per second (0 = unpaced)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Seconds to show the seed image before evolving
    #[arg(long)]
    pub warm_up: Option<u32>,

    /// Length of the longer grid side
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_dimension: Option<u32>,

    /// Luminance (1-255) at or above which a cell starts alive
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub threshold: Option<u8>,

    /// Mirror the seed image horizontally
    #[arg(long)]
    pub mirror: bool,

    /// Stop once the grid stops changing
    #[arg(long)]
    pub stop_when_stable: bool,

    /// Threads per generation step
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub threads: Option<u64>,

    /// Write every frame as a numbered PNG into this directory
    #[arg(long)]
    pub frames_dir: Option<PathBuf>,

    /// Write the last generation to this image
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    /// Overlay command-line values on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.capture.input = Some(input.clone());
        }
        if self.mirror {
            config.capture.mirror = true;
        }
        if let Some(max_dimension) = self.max_dimension {
            config.binarize.max_dimension = max_dimension;
        }
        if let Some(threshold) = self.threshold {
            config.binarize.threshold = threshold;
        }
        if let Some(fps) = self.fps {
            config.simulation.fps = fps;
        }
        if let Some(warm_up) = self.warm_up {
            config.simulation.warm_up_secs = warm_up;
        }
        if let Some(generations) = self.generations {
            config.simulation.generations = Some(generations);
        }
        if self.stop_when_stable {
            config.simulation.stop_when_stable = true;
        }
        if let Some(threads) = self.threads {
            config.simulation.threads = threads as usize;
        }
        if let Some(dir) = &self.frames_dir {
            config.output.frames_dir = Some(dir.clone());
        }
        if let Some(output) = &self.output {
            config.output.final_image = Some(output.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> RunArgs {
        let mut argv = vec!["bloom", "run"];
        argv.extend_from_slice(args);
        match Args::parse_from(argv).command {
            Command::Run(run) => run,
            other => panic!("Expected Run subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_run_defaults() {
        let run = run_args(&[]);
        assert!(run.input.is_none());
        assert!(run.generations.is_none());
        assert!(run.fps.is_none());
        assert!(!run.mirror);
        assert!(!run.stop_when_stable);
        assert!(run.output.is_none());
    }

    #[test]
    fn test_run_options() {
        let run = run_args(&[
            "-i",
            "seed.png",
            "-g",
            "100",
            "--fps",
            "0",
            "--warm-up",
            "2",
            "--max-dimension",
            "256",
            "-t",
            "200",
            "--mirror",
            "--stop-when-stable",
            "--threads",
            "4",
            "--frames-dir",
            "frames",
            "-o",
            "out.png",
        ]);
        assert_eq!(run.input, Some(PathBuf::from("seed.png")));
        assert_eq!(run.generations, Some(100));
        assert_eq!(run.fps, Some(0));
        assert_eq!(run.warm_up, Some(2));
        assert_eq!(run.max_dimension, Some(256));
        assert_eq!(run.threshold, Some(200));
        assert!(run.mirror);
        assert!(run.stop_when_stable);
        assert_eq!(run.threads, Some(4));
        assert_eq!(run.frames_dir, Some(PathBuf::from("frames")));
        assert_eq!(run.output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(Args::try_parse_from(["bloom", "run", "--max-dimension", "0"]).is_err());
        assert!(Args::try_parse_from(["bloom", "run", "--threshold", "0"]).is_err());
        assert!(Args::try_parse_from(["bloom", "run", "--threads", "0"]).is_err());
        assert!(Args::try_parse_from(["bloom", "run", "--threshold", "256"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = Args::parse_from(["bloom", "run", "-vv", "--config", "/tmp/bloom.toml"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/bloom.toml")));
    }

    #[test]
    fn test_config_subcommands() {
        let args = Args::parse_from(["bloom", "config", "show"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Show
            }
        ));

        let args = Args::parse_from(["bloom", "config", "init"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn test_apply_overrides_config() {
        let mut config = Config::default();
        let run = run_args(&["-i", "seed.png", "--fps", "0", "-t", "90", "-g", "5"]);
        run.apply(&mut config);

        assert_eq!(config.capture.input, Some(PathBuf::from("seed.png")));
        assert_eq!(config.simulation.fps, 0);
        assert_eq!(config.binarize.threshold, 90);
        assert_eq!(config.simulation.generations, Some(5));
        assert_eq!(config.binarize.max_dimension, 512);
    }

    #[test]
    fn test_apply_keeps_config_when_unset() {
        let mut config = Config::default();
        config.simulation.fps = 7;
        config.capture.mirror = true;
        RunArgs::default().apply(&mut config);
        assert_eq!(config.simulation.fps, 7);
        assert!(config.capture.mirror);
    }
}
