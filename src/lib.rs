//! bloom library crate.
//!
//! Seeds Conway's Game of Life from a still image. The pure core lives in
//! [`life`]; [`capture`], [`display`], and [`driver`] wrap it in a
//! frame pipeline.

pub mod capture;
pub mod cli;
pub mod config;
pub mod display;
pub mod driver;
pub mod life;
pub mod simulation;
