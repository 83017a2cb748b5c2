//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod info_command;
pub mod verify_command;
pub mod export_command;

pub use command_traits::{Command, CommandFactory};
pub use info_command::InfoCommand;
pub use verify_command::VerifyCommand;
pub use export_command::ExportCommand;

use clap::ArgMatches;
use crate::tiff::errors::{TiffError, TiffResult};

/// Collects the positional input files
pub(crate) fn input_files(args: &ArgMatches) -> TiffResult<Vec<String>> {
    let inputs: Vec<String> = args
        .get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if inputs.is_empty() {
        return Err(TiffError::GenericError("Missing input file".to_string()));
    }
    Ok(inputs)
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct MinitiffCommandFactory;

impl MinitiffCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        MinitiffCommandFactory
    }
}

impl Default for MinitiffCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for MinitiffCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> TiffResult<Box<dyn Command>> {
        if args.get_one::<String>("export").is_some() {
            Ok(Box::new(ExportCommand::new(args)?))
        } else if args.get_flag("verify") {
            Ok(Box::new(VerifyCommand::new(args)?))
        } else {
            // Default to listing the directory
            Ok(Box::new(InfoCommand::new(args)?))
        }
    }
}
