//! Round trip verification command
//!
//! Loads each input, writes it back out with the encoder, reloads the copy
//! and checks that dimensions, format and pixel bytes survived.

use clap::ArgMatches;
use log::{error, info};
use std::path::{Path, PathBuf};

use crate::api;
use crate::commands::command_traits::Command;
use crate::commands::input_files;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::utils::progress::ProgressTracker;

/// Command verifying that files survive a load/save/load cycle
pub struct VerifyCommand {
    /// Files to verify
    input_files: Vec<String>,
    /// Directory receiving the re-encoded copies
    output_dir: PathBuf,
}

impl VerifyCommand {
    /// Create a new verify command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    pub fn new(args: &ArgMatches) -> TiffResult<Self> {
        let output_dir = args
            .get_one::<String>("output-dir")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        Ok(VerifyCommand {
            input_files: input_files(args)?,
            output_dir,
        })
    }

    /// Where the copy of `input` is written
    fn copy_path(&self, input: &str) -> PathBuf {
        let name = Path::new(input)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.tif".to_string());
        self.output_dir.join(format!("saved_{}", name))
    }

    /// Runs the cycle for one file
    fn verify_file(&self, input: &str) -> TiffResult<()> {
        let (image, mut pixels) = api::read_image(input)?;
        image.samples_to_native(&mut pixels);

        let copy = self.copy_path(input);
        api::save(&copy, image.width, image.height, image.components, image.bits_per_component, &pixels)?;

        let (reloaded, mut reloaded_pixels) = api::read_image(&copy)?;
        reloaded.samples_to_native(&mut reloaded_pixels);
        let same_layout = reloaded.width == image.width
            && reloaded.height == image.height
            && reloaded.components == image.components
            && reloaded.bits_per_component == image.bits_per_component;

        if !same_layout {
            return Err(TiffError::GenericError(format!(
                "{}: reloaded copy is {}x{}x{}@{}, expected {}x{}x{}@{}",
                input,
                reloaded.width, reloaded.height, reloaded.components, reloaded.bits_per_component,
                image.width, image.height, image.components, image.bits_per_component
            )));
        }
        if reloaded_pixels != pixels {
            return Err(TiffError::GenericError(format!("{}: pixel data changed after saving", input)));
        }

        info!("{} verified ({}x{}, {} components, {} bits)",
              input, image.width, image.height, image.components, image.bits_per_component);
        Ok(())
    }
}

impl Command for VerifyCommand {
    fn execute(&self) -> TiffResult<()> {
        let progress = ProgressTracker::new(self.input_files.len() as u64, "Verifying");
        let mut n_ok = 0;

        for input in &self.input_files {
            progress.set_message(input);
            match self.verify_file(input) {
                Ok(()) => n_ok += 1,
                Err(e) => {
                    error!("{} failed: {}", input, e);
                    progress.println(&format!("{} failed: {}", input, e));
                }
            }
            progress.increment(1);
        }

        let summary = format!("{}/{} OK", n_ok, self.input_files.len());
        progress.finish(&summary);
        println!("{}", summary);

        if n_ok == self.input_files.len() {
            Ok(())
        } else {
            Err(TiffError::GenericError(format!(
                "{} of {} files failed verification",
                self.input_files.len() - n_ok,
                self.input_files.len()
            )))
        }
    }
}
