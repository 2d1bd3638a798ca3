//! Turning one upstream font file into one Tabula Quattro font file.

use std::path::{Path, PathBuf};

use write_fonts::{
    from_obj::ToOwnedTable,
    read::{FontRef, TableProvider},
    tables::{head::Head, name::Name, os2::Os2},
    FontBuilder,
};

use crate::{
    flags::StyleFlags, names::rewrite_names, scheme::OUTPUT_POSTSCRIPT_FAMILY_NAME, Error, Style,
};

/// A font after renaming, ready to be written out.
#[derive(Clone, Debug)]
pub struct RenamedFont {
    pub style: Style,
    pub data: Vec<u8>,
}

/// The file name for a renamed font of the given style.
pub fn output_file_name(style: Style) -> String {
    format!(
        "{OUTPUT_POSTSCRIPT_FAMILY_NAME}-{}.ttf",
        style.file_component()
    )
}

/// The path of the renamed font of the given style inside `output_dir`.
pub fn output_path(output_dir: &Path, style: Style) -> PathBuf {
    output_dir.join(output_file_name(style))
}

/// Rename a font held in memory.
///
/// The style is detected from the original names before they are rewritten.
/// `name`, `OS/2` and `head` are recompiled; every other table is copied over
/// byte for byte.
pub fn rename_font(data: &[u8]) -> Result<RenamedFont, Error> {
    let font = FontRef::new(data)?;

    let mut name: Name = font.name()?.to_owned_table();
    let mut os2: Os2 = font.os2()?.to_owned_table();
    let mut head: Head = font.head()?.to_owned_table();

    let style = Style::detect(&name)?;
    log::debug!("Detected style {style}");

    rewrite_names(&mut name);
    StyleFlags::for_style(style).apply(&mut os2, &mut head);

    let mut builder = FontBuilder::default();
    builder.add_table(&name)?;
    builder.add_table(&os2)?;
    builder.add_table(&head)?;
    builder.copy_missing_tables(font);
    Ok(RenamedFont {
        style,
        data: builder.build(),
    })
}

/// Rename the font at `input` and save it in `output_dir`.
///
/// Returns the path of the file that was written.
pub fn rename_font_file(input: &Path, output_dir: &Path) -> Result<PathBuf, Error> {
    log::info!("Renaming font: '{}'", input.display());
    let data = std::fs::read(input).map_err(Error::io(input))?;
    let renamed = rename_font(&data)?;

    let output = output_path(output_dir, renamed.style);
    std::fs::write(&output, &renamed.data).map_err(Error::io(&output))?;
    log::info!("Saved font: '{}'", output.display());
    Ok(output)
}

/// Rename each font in order, stopping at the first failure.
///
/// Fonts saved before the failure are left in place.
pub fn rename_font_files<P: AsRef<Path>>(
    inputs: &[P],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, Error> {
    inputs
        .iter()
        .map(|input| rename_font_file(input.as_ref(), output_dir))
        .collect()
}
