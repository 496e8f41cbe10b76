//! Configuration file handling for bloom.
//!
//! Loads configuration from `<config dir>/bloom/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::driver::{DriverSettings, DEFAULT_FPS, DEFAULT_WARM_UP_SECS};
use crate::life::{DEFAULT_MAX_DIMENSION, DEFAULT_THRESHOLD};
use crate::simulation::BinarizeSettings;

/// Configuration file structure for bloom.
/// Loaded from the platform config dir (or custom path via --config).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub capture: CaptureConfig,
    pub binarize: BinarizeConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct CaptureConfig {
    /// Image file used as the seed frame
    pub input: Option<PathBuf>,
    /// Flip the seed frame horizontally
    pub mirror: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BinarizeConfig {
    pub max_dimension: u32,
    pub threshold: u8,
}

impl Default for BinarizeConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub fps: u32,
    pub warm_up_secs: u32,
    pub generations: Option<u64>,
    pub stop_when_stable: bool,
    pub threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            warm_up_secs: DEFAULT_WARM_UP_SECS,
            generations: None,
            stop_when_stable: false,
            threads: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for the PNG frame sequence
    pub frames_dir: Option<PathBuf>,
    /// Where to write the last generation
    pub final_image: Option<PathBuf>,
}

/// Commented default config written by `bloom config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# bloom configuration

[capture]
# Seed image (any PNG or JPEG)
# input = "/path/to/photo.png"
# Mirror horizontally (selfie mode)
mirror = false

[binarize]
# Length of the longer grid side
max_dimension = 512
# Luminance (1-255) at or above which a cell starts alive
threshold = 128

[simulation]
# Display ticks per second (0 = as fast as possible)
fps = 2
# Seconds to show the seed image before evolving
warm_up_secs = 5
# Stop after this many generations (unset = run until Ctrl+C)
# generations = 200
# Stop once the grid stops changing
stop_when_stable = false
# Threads per generation step
threads = 1

[output]
# Write every frame as frame_NNNNNN.png
# frames_dir = "frames"
# Write the last generation here
# final_image = "final.png"
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed or is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                path: path.clone(),
                source,
            },
            other => other,
        })?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that TOML types alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.binarize.max_dimension == 0 {
            return Err(ConfigError::Invalid {
                field: "binarize.max_dimension",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.binarize.threshold == 0 {
            return Err(ConfigError::Invalid {
                field: "binarize.threshold",
                reason: "must be between 1 and 255".to_string(),
            });
        }
        if self.simulation.threads == 0 {
            return Err(ConfigError::Invalid {
                field: "simulation.threads",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Settings for the frame pipeline.
    ///
    /// Warm-up is converted from seconds to frames at the configured rate,
    /// so an unpaced run (`fps = 0`) has no warm-up.
    pub fn driver_settings(&self) -> DriverSettings {
        let sim = &self.simulation;
        DriverSettings {
            binarize: BinarizeSettings {
                max_dimension: self.binarize.max_dimension,
                threshold: self.binarize.threshold,
            },
            fps: sim.fps,
            warm_up_frames: sim.warm_up_secs as u64 * sim.fps as u64,
            generations: sim.generations,
            stop_when_stable: sim.stop_when_stable,
            workers: sim.threads,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid config value '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("bloom").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/bloom/config.toml")
        })
}
