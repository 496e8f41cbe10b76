//! End-to-end tests: image file in, PNG frames and final image out.

use std::sync::atomic::AtomicBool;

use bloom::capture::{CaptureSource, Frame, ImageFileSource, StaticSource};
use bloom::cli::{handle_run, RunArgs};
use bloom::config::Config;
use bloom::display::{DisplayError, FrameSink};
use bloom::driver::{run, DriverSettings, StopReason};
use bloom::life::{Dimensions, DEFAULT_THRESHOLD};
use bloom::simulation::BinarizeSettings;
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

/// Records every presented frame's generation and population.
#[derive(Default)]
struct RecordingSink {
    frames: Vec<(u64, usize)>,
}

impl FrameSink for RecordingSink {
    fn present(
        &mut self,
        pixels: &[u8],
        dimensions: Dimensions,
        generation: u64,
    ) -> Result<(), DisplayError> {
        assert_eq!(pixels.len(), dimensions.area() * 4);
        let alive = pixels.chunks_exact(4).filter(|px| px[0] == 255).count();
        self.frames.push((generation, alive));
        Ok(())
    }
}

/// A 5x5 frame with a horizontal blinker in the middle row.
fn blinker_frame() -> Frame {
    let mut data = [0u8, 0, 0, 255].repeat(25);
    for x in 1..4 {
        let i = (2 * 5 + x) * 4;
        data[i..i + 3].copy_from_slice(&[255, 255, 255]);
    }
    Frame::new(data, 5, 5)
}

fn settings(warm_up_frames: u64, generations: u64) -> DriverSettings {
    DriverSettings {
        binarize: BinarizeSettings {
            max_dimension: 5,
            threshold: DEFAULT_THRESHOLD,
        },
        fps: 0,
        warm_up_frames,
        generations: Some(generations),
        stop_when_stable: false,
        workers: 1,
    }
}

#[test]
fn test_warm_up_shows_generation_zero() {
    let mut source = StaticSource::new(blinker_frame());
    let mut sink = RecordingSink::default();

    let summary = run(&mut source, &mut sink, &settings(3, 2), &AtomicBool::new(false)).unwrap();

    assert_eq!(summary.stop_reason, StopReason::GenerationLimit);
    assert_eq!(summary.frames_presented, 5);
    assert_eq!(
        sink.frames,
        vec![(0, 3), (0, 3), (0, 3), (1, 3), (2, 3)]
    );
}

#[test]
fn test_blinker_period_through_pipeline() {
    let mut source = StaticSource::new(blinker_frame());
    let mut sink = RecordingSink::default();

    let summary = run(&mut source, &mut sink, &settings(0, 2), &AtomicBool::new(false)).unwrap();

    // After two generations the blinker is back where it started.
    assert_eq!(summary.final_frame, {
        let mut expected = [0u8, 0, 0, 255].repeat(25);
        for x in 1..4 {
            let i = (2 * 5 + x) * 4;
            expected[i..i + 3].copy_from_slice(&[255, 255, 255]);
        }
        expected
    });
}

#[test]
fn test_image_file_source_feeds_driver() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seed.png");

    // 20x10 image with a bright 4x4 square: downscaled 2:1 it becomes a
    // 2x2 block, which is a still life.
    let mut img = RgbaImage::from_pixel(20, 10, Rgba([0, 0, 0, 255]));
    for y in 4..8 {
        for x in 8..12 {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    img.save(&path).unwrap();

    let mut source = ImageFileSource::new(&path);
    let frame = source.capture().unwrap();
    assert_eq!((frame.width, frame.height), (20, 10));

    let mut settings = settings(0, 10);
    settings.binarize.max_dimension = 10;
    settings.stop_when_stable = true;

    let mut sink = RecordingSink::default();
    let summary = run(&mut source, &mut sink, &settings, &AtomicBool::new(false)).unwrap();

    assert_eq!(summary.dimensions, Dimensions::new(10, 5));
    assert_eq!(summary.stop_reason, StopReason::Stable);
    assert_eq!(summary.generations, 1);
    assert_eq!(summary.final_population, 4);
}

#[test]
fn test_handle_run_writes_frames_and_final_image() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("seed.png");
    let frames_dir = dir.path().join("frames");
    let output = dir.path().join("final.png");

    let mut img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
    for x in 2..5 {
        img.put_pixel(x, 4, Rgba([255, 255, 255, 255]));
    }
    img.save(&input).unwrap();

    let args = RunArgs {
        input: Some(input),
        generations: Some(3),
        fps: Some(0),
        frames_dir: Some(frames_dir.clone()),
        output: Some(output.clone()),
        max_dimension: Some(8),
        ..RunArgs::default()
    };

    let summary = handle_run(&args, Config::default(), &AtomicBool::new(false)).unwrap();
    assert_eq!(summary.generations, 3);
    assert_eq!(summary.final_population, 3);

    let written = std::fs::read_dir(&frames_dir).unwrap().count();
    assert_eq!(written, 3);

    let final_image = image::open(&output).unwrap().to_rgba8();
    assert_eq!(final_image.dimensions(), (8, 8));
    // Odd generation: the blinker is vertical through (3, 4).
    assert_eq!(final_image.get_pixel(3, 3), &Rgba([255, 255, 255, 255]));
    assert_eq!(final_image.get_pixel(2, 4), &Rgba([0, 0, 0, 255]));
}
