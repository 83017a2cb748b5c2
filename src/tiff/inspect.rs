//! Directory inspection
//!
//! Reports every entry of the first IFD to a callback, in file order and in
//! host byte order, without validating any of them.

use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::io::seekable::SeekableReader;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::ifd::{IFDEntry, IFD};
use crate::tiff::session::DirectoryReader;

/// Calls `f` once per directory entry
///
/// Only the header is validated; the entries themselves are passed through
/// as read.
pub fn inspect<F>(reader: &mut dyn SeekableReader, mut f: F) -> TiffResult<()>
where
    F: FnMut(&IFDEntry),
{
    let mut directory = DirectoryReader::open(reader)?;
    let entry_count = directory.read_entry_count()?;

    for _ in 0..entry_count {
        let entry = directory.read_entry()?;
        f(&entry);
    }
    Ok(())
}

/// Collects the entries of the first directory
pub fn read_ifd(reader: &mut dyn SeekableReader) -> TiffResult<IFD> {
    let mut ifd = IFD::new();
    inspect(reader, |entry| ifd.add_entry(*entry))?;
    Ok(ifd)
}

/// Opens `path` and runs [`inspect`] over it
pub fn info<P, F>(path: P, f: F) -> TiffResult<()>
where
    P: AsRef<Path>,
    F: FnMut(&IFDEntry),
{
    let path = path.as_ref();
    info!("Inspecting TIFF file: {}", path.display());

    let file = File::open(path).map_err(TiffError::SourceUnavailable)?;
    let mut reader = BufReader::new(file);
    inspect(&mut reader, f)
}
