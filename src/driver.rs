//! Frame pipeline: capture once, binarize once, then evolve and present.
//!
//! The driver owns the [`Simulation`] and the display cadence. For the
//! first `warm_up_frames` ticks it keeps showing generation 0, after which
//! every tick advances one generation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::capture::{CaptureError, CaptureSource};
use crate::display::{DisplayError, FrameSink};
use crate::life::{Dimensions, LifeError};
use crate::simulation::{BinarizeSettings, Simulation};

/// Default display rate in frames per second.
pub const DEFAULT_FPS: u32 = 2;

/// Default time generation 0 is shown before evolution starts.
pub const DEFAULT_WARM_UP_SECS: u32 = 5;

/// Errors that can stop a run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("simulation failed: {0}")]
    Life(#[from] LifeError),

    #[error("display failed: {0}")]
    Display(#[from] DisplayError),
}

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSettings {
    pub binarize: BinarizeSettings,
    /// Frames per second; 0 runs as fast as possible
    pub fps: u32,
    /// Number of ticks that show generation 0 before evolving
    pub warm_up_frames: u64,
    /// Stop after this many generations
    pub generations: Option<u64>,
    /// Stop as soon as a generation equals the previous one
    pub stop_when_stable: bool,
    /// Threads used per step
    pub workers: usize,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            binarize: BinarizeSettings::default(),
            fps: DEFAULT_FPS,
            warm_up_frames: DEFAULT_WARM_UP_SECS as u64 * DEFAULT_FPS as u64,
            generations: None,
            stop_when_stable: false,
            workers: 1,
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Stable,
    Interrupted,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stop_reason: StopReason,
    /// Generations computed
    pub generations: u64,
    /// Frames handed to the sink, warm-up included
    pub frames_presented: u64,
    pub final_population: usize,
    pub dimensions: Dimensions,
    /// RGBA encoding of the last generation
    pub final_frame: Vec<u8>,
}

/// Sleeps between display ticks to hold a fixed frame rate.
///
/// Missed ticks are skipped rather than bursted.
#[derive(Debug)]
pub struct FramePacer {
    interval: Option<Duration>,
    next: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        let interval = (fps > 0).then(|| Duration::from_secs(1) / fps);
        Self {
            interval,
            next: Instant::now(),
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Block until the next tick is due.
    pub fn wait(&mut self) {
        let Some(interval) = self.interval else {
            return;
        };

        self.next += interval;
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        } else {
            self.next = now;
        }
    }
}

/// Run the pipeline until a stop condition is met.
///
/// # Arguments
/// * `source` - Where the single seed frame comes from
/// * `sink` - Receives every displayed frame
/// * `settings` - Binarization, cadence, and stop conditions
/// * `stop` - Checked before each tick; set it to end the run early
pub fn run<S, K>(
    source: &mut S,
    sink: &mut K,
    settings: &DriverSettings,
    stop: &AtomicBool,
) -> Result<RunSummary, DriverError>
where
    S: CaptureSource + ?Sized,
    K: FrameSink + ?Sized,
{
    let frame = source.capture()?;
    let mut sim =
        Simulation::from_frame(&frame, &settings.binarize)?.with_workers(settings.workers);
    let dimensions = sim.dimensions();

    log::info!(
        "Seeded {} grid from {} frame ({} live cells, threshold {})",
        dimensions,
        frame.dimensions(),
        sim.population(),
        settings.binarize.threshold
    );

    let mut pixels = sim.render_to_vec();
    let mut pacer = FramePacer::new(settings.fps);
    let mut warm_up = settings.warm_up_frames;
    let mut frames_presented = 0u64;

    let stop_reason = loop {
        if stop.load(Ordering::Relaxed) {
            break StopReason::Interrupted;
        }

        if warm_up > 0 {
            sink.present(&pixels, dimensions, 0)?;
            frames_presented += 1;
            warm_up -= 1;
            if warm_up == 0 {
                log::info!("Warm-up complete, starting evolution");
            }
            pacer.wait();
            continue;
        }

        if let Some(limit) = settings.generations {
            if sim.generation() >= limit {
                break StopReason::GenerationLimit;
            }
        }

        let changed = sim.tick()?;
        sim.render_into(&mut pixels)?;
        sink.present(&pixels, dimensions, sim.generation())?;
        frames_presented += 1;

        log::debug!(
            "Generation {}: {} live cells",
            sim.generation(),
            sim.population()
        );

        if !changed && settings.stop_when_stable {
            log::info!("Grid stable at generation {}", sim.generation());
            break StopReason::Stable;
        }

        pacer.wait();
    };

    log::info!(
        "Stopped after {} generations ({:?})",
        sim.generation(),
        stop_reason
    );

    Ok(RunSummary {
        stop_reason,
        generations: sim.generation(),
        frames_presented,
        final_population: sim.population(),
        dimensions,
        final_frame: pixels,
    })
}

/// Raise `flag` when Ctrl+C is pressed.
///
/// This should be called once at program startup.
pub fn setup_ctrlc_handler(flag: Arc<AtomicBool>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
        log::warn!("Received Ctrl+C, shutting down...");
    })
}
