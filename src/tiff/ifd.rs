//! Image File Directory (IFD) structures and methods
//!
//! An IFD is a count followed by fixed size 12 byte entries. Each entry
//! holds a tag id, a field type, an item count and a 4 byte slot that
//! contains either the value itself or an offset to it.

use log::{debug, trace};
use std::fmt;
use std::io::{Read, Write};

use crate::io::byte_order::ByteOrderHandler;
use crate::tiff::constants::{field_types, layout};
use crate::tiff::errors::TiffResult;
use crate::tiff::tags::{get_field_type_name, Tag};

/// Represents an entry in an Image File Directory (IFD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IFDEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Value or offset to values, in host order
    pub value_offset: u32,
}

impl IFDEntry {
    /// Creates a new IFD entry
    pub fn new(tag: u16, field_type: u16, count: u32, value_offset: u32) -> Self {
        Self {
            tag,
            field_type,
            count,
            value_offset,
        }
    }

    /// Creates a single LONG entry, the form the encoder uses for every tag
    pub fn long(tag: u16, value: u32) -> Self {
        Self::new(tag, field_types::LONG, 1, value)
    }

    /// The classified tag of this entry
    pub fn kind(&self) -> Tag {
        Tag::from_id(self.tag)
    }

    /// Reads one entry, converting every field to host order
    ///
    /// The value slot is decoded at its natural width. A single SHORT sits
    /// in the first two bytes of the slot and a single BYTE in the first
    /// byte, so reading those as 32-bit quantities would corrupt them in
    /// files whose byte order differs from the host. Everything else,
    /// including offsets, is a 32-bit read.
    pub fn read(reader: &mut dyn Read, handler: &dyn ByteOrderHandler) -> TiffResult<Self> {
        let tag = handler.read_u16(reader)?;
        let field_type = handler.read_u16(reader)?;
        let count = handler.read_u32(reader)?;

        let mut slot = [0u8; 4];
        reader.read_exact(&mut slot)?;

        let value_offset = match (field_type, count) {
            (field_types::SHORT, 1) => handler.read_u16(&mut &slot[..2])? as u32,
            (field_types::BYTE, 1) => slot[0] as u32,
            _ => handler.read_u32(&mut &slot[..])?,
        };

        let entry = Self {
            tag,
            field_type,
            count,
            value_offset,
        };
        trace!("Read IFD entry: {}", entry.description());
        Ok(entry)
    }

    /// Writes the entry as a 32-bit value slot
    pub fn write(&self, writer: &mut dyn Write, handler: &dyn ByteOrderHandler) -> TiffResult<()> {
        handler.write_u16(writer, self.tag)?;
        handler.write_u16(writer, self.field_type)?;
        handler.write_u32(writer, self.count)?;
        handler.write_u32(writer, self.value_offset)?;
        Ok(())
    }

    /// Returns a human-readable description of this entry
    pub fn description(&self) -> String {
        format!("Tag: {} ({}), Type: {} ({}), Count: {}, Value/Offset: {}",
                self.tag, self.kind().name(),
                self.field_type, get_field_type_name(self.field_type),
                self.count, self.value_offset)
    }
}

impl fmt::Display for IFDEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}:{:08x}:{:08x} {:<26} {} [{} x {}]",
               self.tag, self.field_type, self.count, self.value_offset,
               self.kind().name(), self.value_offset,
               get_field_type_name(self.field_type), self.count)
    }
}

/// Represents an Image File Directory (IFD)
///
/// The encoder assembles one of these before writing, and the command line
/// inspector collects one to print a summary.
#[derive(Debug, Clone, Default)]
pub struct IFD {
    /// Entries in file order
    pub entries: Vec<IFDEntry>,
}

impl IFD {
    /// Creates a new empty IFD
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Adds an entry to this IFD
    pub fn add_entry(&mut self, entry: IFDEntry) {
        trace!("Adding entry to IFD: {}", entry.description());
        self.entries.push(entry);
    }

    /// Gets the first entry with the given tag
    pub fn get_entry(&self, tag: u16) -> Option<&IFDEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    /// Gets a tag value (value_offset) directly
    pub fn get_tag_value(&self, tag: u16) -> Option<u32> {
        self.get_entry(tag).map(|entry| entry.value_offset)
    }

    /// Gets the number of entries in this IFD
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Size on disk: entry count plus the entries
    pub fn size_in_bytes(&self) -> u32 {
        2 + layout::IFD_ENTRY_SIZE * self.entries.len() as u32
    }

    /// Writes the entry count followed by every entry
    pub fn write(&self, writer: &mut dyn Write, handler: &dyn ByteOrderHandler) -> TiffResult<()> {
        debug!("Writing IFD with {} entries", self.entries.len());
        handler.write_u16(writer, self.entries.len() as u16)?;
        for entry in &self.entries {
            entry.write(writer, handler)?;
        }
        Ok(())
    }
}

impl fmt::Display for IFD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IFD")?;
        writeln!(f, "  Number of entries: {}", self.entries.len())?;
        writeln!(f, "  Tags:")?;
        for entry in &self.entries {
            writeln!(f, "    {}", entry)?;
        }
        Ok(())
    }
}
