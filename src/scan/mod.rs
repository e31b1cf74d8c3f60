//! Scan configuration and driver.
//!
//! The `Scanner` walks the full sequence space exactly once, runs the
//! two-phase neighborhood scan for every base sequence, and derives the
//! final report.

mod config;
mod engine;

pub use config::ScanConfig;
pub use engine::{Scanner, PROGRESS_INTERVAL};
