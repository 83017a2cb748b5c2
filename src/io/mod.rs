//! I/O utilities for file handling
//!
//! This module provides byte order strategies and the seekable source trait
//! used by the TIFF codec.

pub mod seekable;
pub mod byte_order;
