#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod collision;
pub mod geometry;
pub mod input;

// Shape modules at the crate root
pub use geometry::circle;
pub use geometry::line;
pub use geometry::r2;
pub use geometry::rect;

// Utility modules
pub mod error;

// Re-export key types for external use
pub use circle::Circle;
pub use collision::Collide;
pub use error::{ProbeError, ShapeError};
pub use input::{Accessor, Input, Sequence, ShapeSource};
pub use line::Line;
pub use r2::R2;
pub use rect::Rect;

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, String> {
    match level {
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(format!("invalid log level: {}", level)),
    }
}
