use clap::{Arg, Command as ClapCommand, ArgAction};
use log::error;
use std::process;

use minitiff::utils::logger::{self, Logger};
use minitiff::commands::{CommandFactory, MinitiffCommandFactory};

fn main() {
    let matches = ClapCommand::new("minitiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect, verify and export single-strip uncompressed TIFF files")
        .arg(
            Arg::new("input")
                .help("Input TIFF file(s)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Load, re-save and reload each input, checking the result")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for copies written by --verify (default: temp dir)")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Decode the input and write it to this image file (format from extension)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file as well as the console")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, logger::level_for(verbose, true)) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(logger::level_for(verbose, false))
                .parse_default_env()
                .init();
        }
    }

    let factory = MinitiffCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
