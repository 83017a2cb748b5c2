//! Directory listing command
//!
//! Prints every entry of a file's directory with its tag name, then reports
//! whether the decoder accepts the file.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::input_files;
use crate::tiff::decoder;
use crate::tiff::errors::TiffResult;
use crate::tiff::inspect;

/// Command listing the IFD entries of one or more files
pub struct InfoCommand {
    /// Files to inspect
    input_files: Vec<String>,
    /// Whether to print the decoded image summary as well
    verbose: bool,
}

impl InfoCommand {
    /// Create a new info command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    pub fn new(args: &ArgMatches) -> TiffResult<Self> {
        Ok(InfoCommand {
            input_files: input_files(args)?,
            verbose: args.get_flag("verbose"),
        })
    }

    /// Prints the entries of one file
    fn list_entries(&self, input: &str) -> TiffResult<()> {
        println!("{}:", input);
        let mut count = 0;
        inspect::info(input, |entry| {
            println!("  {}", entry);
            count += 1;
        })?;
        debug!("{} has {} entries", input, count);
        Ok(())
    }

    /// Reports what the decoder makes of the file, without reading pixels
    fn display_decode_summary(&self, input: &str) {
        match decoder::load(input, |image, _| Ok(image)) {
            Ok(image) => {
                println!("  Dimensions: {}x{}", image.width, image.height);
                println!("  Components: {} x {} bits", image.components, image.bits_per_component);
                println!("  Byte order: {}", image.byte_order.name());
                println!("  Pixel data: {} bytes at offset {}", image.total_bytes, image.data_offset);
            }
            Err(e) => println!("  Not supported: {}", e),
        }
    }
}

impl Command for InfoCommand {
    fn execute(&self) -> TiffResult<()> {
        for input in &self.input_files {
            info!("Inspecting {}", input);
            self.list_entries(input)?;
            if self.verbose {
                self.display_decode_summary(input);
            }
        }
        Ok(())
    }
}
