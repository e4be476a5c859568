//! Animated shimmer effect for terminal loading indicators.
//!
//! A wave of brightened color sweeps across a line of text, creating a
//! loading indicator out of color instead of glyph rotation. The model
//! itself is timer-free and side-effect-free, so it can be driven by the
//! bundled render loop, embedded in another event loop, or ticked by hand
//! in tests.
//!
//! ```no_run
//! use std::thread;
//! use std::time::Duration;
//!
//! shimmer::Spinner::new("Installing", "#00D787")
//!     .action(|| thread::sleep(Duration::from_secs(5)))
//!     .run()
//!     .unwrap();
//! ```

pub mod color;
pub mod config;
pub mod model;
pub mod render;
pub mod spinner;
pub mod wave;

pub use color::Color;
pub use config::{Config, ConfigError};
pub use model::{
    Direction, ShimmerModel, ShimmerOptions, DEFAULT_INTERVAL, DEFAULT_PEAK_LIGHT,
    DEFAULT_WAVE_PAUSE, DEFAULT_WAVE_WIDTH,
};
pub use spinner::{run, run_with, ShimmerError, Spinner};
