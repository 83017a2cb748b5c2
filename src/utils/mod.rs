//! Utility modules for common functionality
//!
//! Logging, progress reporting and image conversion helpers used by the
//! command line tool.

pub mod logger;
pub mod progress;
pub mod image_utils;
