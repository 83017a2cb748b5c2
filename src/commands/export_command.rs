//! Image export command
//!
//! Decodes a single file and writes it in any format the `image` crate
//! supports, chosen by the output extension.

use clap::ArgMatches;
use log::info;

use crate::api;
use crate::commands::command_traits::Command;
use crate::commands::input_files;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::utils::image_utils;

/// Command converting a TIFF into another image format
pub struct ExportCommand {
    /// Path to the input file
    input_file: String,
    /// Path to the output image
    output_file: String,
}

impl ExportCommand {
    /// Create a new export command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    pub fn new(args: &ArgMatches) -> TiffResult<Self> {
        let mut inputs = input_files(args)?;
        if inputs.len() != 1 {
            return Err(TiffError::GenericError("Export takes exactly one input file".to_string()));
        }

        let output_file = args.get_one::<String>("export")
            .ok_or_else(|| TiffError::GenericError("Missing output file path for export".to_string()))?
            .clone();

        Ok(ExportCommand {
            input_file: inputs.remove(0),
            output_file,
        })
    }
}

impl Command for ExportCommand {
    fn execute(&self) -> TiffResult<()> {
        info!("Exporting {} to {}", self.input_file, self.output_file);

        let (image, pixels) = api::read_image(&self.input_file)?;
        image_utils::save_as(&image, &pixels, &self.output_file)?;

        info!("Export successful");
        Ok(())
    }
}
