//! Fix weights and flags in the iA Writer Quattro S fonts and rename them
//! to Tabula Quattro, as the license of the upstream fonts requires.
//!
//! The style of each font is taken from its subfamily name; the flags
//! already present in the fonts are not trusted.

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The fonts to rename, processed in order.
    #[arg(value_name = "FONTFILE", required = true)]
    input_fonts: Vec<PathBuf>,

    /// Directory the renamed fonts are written to.
    #[arg(short = 'd', long, default_value = ".")]
    output_dir: PathBuf,

    /// More output; repeat for debug messages.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tabula_cli::init_logger(tabula_cli::level_for_verbosity(args.verbose));

    match tabula_quattro::rename_font_files(&args.input_fonts, &args.output_dir) {
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
