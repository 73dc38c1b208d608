//! Label Fit - Largest font size for a text label in a fixed container
//!
//! This crate searches the font-size range for the largest size at which a
//! label's text still fits a rectangular container. Text measurement is
//! delegated to a host-provided [`TextMeasurer`].
//!
//! # Modules
//!
//! - `measure`: Measurement requests/results and the measurer trait
//! - `probe`: Single measurement at a candidate font size
//! - `locale`: Locale-to-word-delimiter table
//! - `fitter`: Binary search and the word-safe two-pass strategy
//! - `stack`: Sizing several labels stacked in one container
//! - `settings`: JSON-backed defaults for the fitter

mod error;
mod fitter;
mod locale;
mod measure;
mod probe;
pub mod settings;
mod stack;

pub use error::*;
pub use fitter::*;
pub use locale::*;
pub use measure::*;
pub use probe::*;
pub use stack::*;

pub use settings::FitSettings;
