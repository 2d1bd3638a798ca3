//! Building and releasing the Tabula Quattro fonts.
//!
//! Tabula Quattro is a renamed build of iA Writer Quattro S. This crate
//! holds the two steps that turn the upstream fonts into a release:
//!
//! - [`rename`] detects the [`Style`] of each upstream font, rewrites its
//!   `name` table for the new family and license, fixes the weight and style
//!   flags, and saves it under the new file name.
//! - [`release`] reads the family version and zips the renamed fonts together
//!   with the readme, the license and the usage terms.
//!
//! Reading and writing the font tables is left to [`write_fonts`] and its
//! `read` reexport.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let saved = tabula_quattro::rename_font_file(
//!     Path::new("iAWriterQuattroS-Bold.ttf"),
//!     Path::new("."),
//! )?;
//! assert!(saved.ends_with("TabulaQuattro-Bold.ttf"));
//!
//! let _archive = tabula_quattro::make_release(Path::new("."))?;
//! # Ok::<(), tabula_quattro::Error>(())
//! ```

mod error;
pub mod flags;
pub mod names;
pub mod release;
pub mod rename;
pub mod scheme;
mod style;

pub use error::Error;
pub use flags::StyleFlags;
pub use names::{rewrite_names, NameField};
pub use release::{make_release, Manifest};
pub use rename::{rename_font, rename_font_file, rename_font_files, RenamedFont};
pub use style::Style;
