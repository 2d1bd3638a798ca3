//! Packaging the renamed fonts into a release archive.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use write_fonts::{
    from_obj::ToOwnedTable,
    read::{FontRef, TableProvider},
    tables::name::Name,
    types::NameId,
};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::{
    names::first_name,
    scheme::{
        ANCILLARY_FILES, ARCHIVE_PREFIX, CANONICAL_FONT, FONT_EXTENSION, USAGE_TERMS,
        USAGE_TERMS_ENTRY,
    },
    Error,
};

/// Extract the bare version number from a version string.
///
/// "Version 5.002" becomes "5.002"; strings without the prefix are returned
/// as they are.
pub fn parse_version(text: &str) -> Result<String, Error> {
    if !text.to_lowercase().starts_with("version ") {
        return Ok(text.to_owned());
    }
    text.split_whitespace()
        .nth(1)
        .map(str::to_owned)
        .ok_or_else(|| Error::MalformedVersion(text.to_owned()))
}

/// The version of a font, from the first version record on any platform.
pub fn font_version(name: &Name) -> Result<String, Error> {
    let text = first_name(name, NameId::VERSION_STRING).ok_or(Error::MissingName {
        name_id: NameId::VERSION_STRING,
        selector: None,
    })?;
    parse_version(text)
}

/// The version of the font file at `path`.
pub fn font_file_version(path: &Path) -> Result<String, Error> {
    let data = std::fs::read(path).map_err(Error::io(path))?;
    let font = FontRef::new(&data)?;
    let name: Name = font.name()?.to_owned_table();
    font_version(&name)
}

/// The name of the release archive for a version.
pub fn archive_name(version: &str) -> String {
    format!("{ARCHIVE_PREFIX}{version}.zip")
}

/// The files that go into a release, in archive order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub fonts: Vec<PathBuf>,
    pub ancillary: Vec<PathBuf>,
}

impl Manifest {
    /// Collect the font files directly inside `dir` and the fixed ancillary files.
    ///
    /// Fonts are sorted by path. The ancillary files are not checked for
    /// existence here; a missing one fails the archive write.
    pub fn collect(dir: &Path) -> Result<Self, Error> {
        let mut fonts = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(Error::io(dir))? {
            let path = entry.map_err(Error::io(dir))?.path();
            let is_font = path
                .extension()
                .is_some_and(|ext| ext == FONT_EXTENSION);
            if is_font && path.is_file() {
                fonts.push(path);
            }
        }
        fonts.sort();

        let ancillary = ANCILLARY_FILES.iter().map(|file| dir.join(file)).collect();
        Ok(Manifest { fonts, ancillary })
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.fonts
            .iter()
            .chain(self.ancillary.iter())
            .map(PathBuf::as_path)
    }
}

/// Write every file of the manifest, plus the usage terms, to a zip archive.
///
/// Entries are named after the base name of each file and stored
/// uncompressed.
pub fn write_archive(manifest: &Manifest, archive_path: &Path) -> Result<(), Error> {
    let file = File::create(archive_path).map_err(Error::io(archive_path))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for path in manifest.files() {
        let entry_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let data = std::fs::read(path).map_err(Error::io(path))?;
        log::debug!("Adding '{}' as '{entry_name}'", path.display());
        zip.start_file(entry_name, options)?;
        zip.write_all(&data).map_err(Error::io(archive_path))?;
    }

    log::debug!("Adding '{USAGE_TERMS_ENTRY}'");
    zip.start_file(USAGE_TERMS_ENTRY, options)?;
    zip.write_all(USAGE_TERMS.as_bytes())
        .map_err(Error::io(archive_path))?;

    zip.finish()?;
    Ok(())
}

/// Build the release archive for the fonts in `dir`, returning its path.
///
/// The version comes from the canonical regular font; the archive is written
/// into `dir` as well.
pub fn make_release(dir: &Path) -> Result<PathBuf, Error> {
    let version = font_file_version(&dir.join(CANONICAL_FONT))?;
    log::info!("Making releases for Tabula Quattro {version}");

    let manifest = Manifest::collect(dir)?;
    let archive_path = dir.join(archive_name(&version));
    write_archive(&manifest, &archive_path)?;
    log::info!("Wrote '{}'", archive_path.display());
    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use write_fonts::tables::name::NameRecord;

    #[test]
    fn version_prefix_stripped() {
        assert_eq!(parse_version("Version 5.002").unwrap(), "5.002");
        assert_eq!(parse_version("version 5").unwrap(), "5");
        assert_eq!(parse_version("VERSION  1.0;hotconv").unwrap(), "1.0;hotconv");
    }

    #[test]
    fn bare_version_kept() {
        assert_eq!(parse_version("5.002").unwrap(), "5.002");
        assert_eq!(parse_version("Version5").unwrap(), "Version5");
        assert_eq!(parse_version("").unwrap(), "");
    }

    #[test]
    fn prefix_without_number() {
        assert!(matches!(
            parse_version("Version "),
            Err(Error::MalformedVersion(_))
        ));
    }

    #[test]
    fn first_version_record_wins() {
        let name = Name::new(vec![
            NameRecord::new(1, 0, 0, NameId::VERSION_STRING, "Version 4".to_string().into()),
            NameRecord::new(3, 1, 0x409, NameId::VERSION_STRING, "Version 5".to_string().into()),
        ]);
        assert_eq!(font_version(&name).unwrap(), "4");
    }

    #[test]
    fn missing_version() {
        let name = Name::new(vec![NameRecord::new(
            3,
            1,
            0x409,
            NameId::FAMILY_NAME,
            "Tabula Quattro".to_string().into(),
        )]);
        assert!(matches!(
            font_version(&name),
            Err(Error::MissingName {
                name_id: NameId::VERSION_STRING,
                selector: None
            })
        ));
    }

    #[test]
    fn archive_names() {
        assert_eq!(archive_name("5"), "tabula-quattro-5.zip");
        assert_eq!(archive_name("1.002"), "tabula-quattro-1.002.zip");
    }

    #[test]
    fn manifest_order() {
        let dir = tempfile::tempdir().unwrap();
        for file in ["b.ttf", "a.ttf", "notes.txt", "c.otf"] {
            std::fs::write(dir.path().join(file), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.ttf")).unwrap();

        let manifest = Manifest::collect(dir.path()).unwrap();
        let names: Vec<_> = manifest
            .files()
            .map(|path| path.strip_prefix(dir.path()).unwrap().to_owned())
            .collect();
        assert_eq!(
            names,
            [
                PathBuf::from("a.ttf"),
                PathBuf::from("b.ttf"),
                PathBuf::from("README.md"),
                PathBuf::from("LICENSES/OFL-1.1-RFN.txt"),
            ]
        );
    }

    #[test]
    fn missing_ancillary_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("TabulaQuattro-Regular.ttf"), b"").unwrap();
        let manifest = Manifest::collect(dir.path()).unwrap();
        let err = write_archive(&manifest, &dir.path().join("out.zip")).unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.ends_with("README.md")),
            other => panic!("unexpected error {other}"),
        }
    }
}
