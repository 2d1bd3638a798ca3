//! Zip the renamed fonts in the current directory into a release archive.

use std::{path::Path, process::ExitCode};

use clap::Parser;
use log::LevelFilter;

/// Package TabulaQuattro-*.ttf, the readme and the license into tabula-quattro-VERSION.zip
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    tabula_cli::init_logger(LevelFilter::Info);

    match tabula_quattro::make_release(Path::new(".")) {
        Ok(_) => {
            log::info!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn takes_no_arguments() {
        assert!(Args::try_parse_from(["make-release"]).is_ok());
        assert!(Args::try_parse_from(["make-release", "extra"]).is_err());
    }
}
