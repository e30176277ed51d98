#![forbid(unsafe_code)]

//! Core primitives shared across the Tacboard crates.
//!
//! Everything here is plain data: f64 world-space geometry and the
//! user-facing configuration bundle. No rendering, no I/O.

pub mod config;
pub mod geometry;

pub use config::UiConfig;
pub use geometry::{Point, Sides, Size};
