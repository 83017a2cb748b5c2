//! Seekable reader trait and implementations
//!
//! This module provides a unified trait for sources that support both
//! reading and seeking, which is all the decoder needs from a file.

use std::io::{Read, Seek};

/// Trait for readers that can both read and seek
///
/// Files, `BufReader<File>` and in-memory `Cursor`s all qualify.
pub trait SeekableReader: Read + Seek {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek> SeekableReader for T {}
