//! The fixed naming and licensing scheme applied to the fonts.
//!
//! Everything here is data: the names being replaced, the names replacing
//! them, and the license texts that get written into the fonts and the
//! release archive.

/// The family name used by the upstream iA Writer fonts.
pub const INPUT_FAMILY_NAME: &str = "iA Writer Quattro S";
/// The PostScript family prefix used by the upstream fonts.
pub const INPUT_POSTSCRIPT_FAMILY_NAME: &str = "iAWriterQuattroS";

/// The family name of the renamed fonts.
pub const OUTPUT_FAMILY_NAME: &str = "Tabula Quattro";
/// The PostScript family prefix of the renamed fonts, also used for file names.
pub const OUTPUT_POSTSCRIPT_FAMILY_NAME: &str = "TabulaQuattro";

/// Prepended to every copyright record.
pub const COPYRIGHT_PREFIX: &str = "Copyright 2021 Rose Davidson, ";
/// Prepended to every manufacturer record.
pub const MANUFACTURER_PREFIX: &str = "Straylight Labs and ";
/// Replaces both the vendor and the designer URL.
pub const VENDOR_URL: &str = "https://metaclassical.com";

/// Short license name written to the license description record.
pub const LICENSE_NAME: &str = "OFL-1.1-RFN";
/// Written to the license URL record.
pub const LICENSE_URL: &str = "http://scripts.sil.org/OFL";

/// Sample text, the same sentence in mixed, upper and lower case.
pub const PANGRAM: &str = "Sphinx of black quartz, judge my vow.\n\
                           SPHINX OF BLACK QUARTZ, JUDGE MY VOW.\n\
                           sphinx of black quartz, judge my vow.";

/// A (platform, encoding, language) triple addressing one variant of a name record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
}

impl Selector {
    pub const fn new(platform_id: u16, encoding_id: u16, language_id: u16) -> Self {
        Selector {
            platform_id,
            encoding_id,
            language_id,
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, 0x{:x})",
            self.platform_id, self.encoding_id, self.language_id
        )
    }
}

/// Windows, Unicode BMP, US English.
pub const WINDOWS_ENGLISH: Selector = Selector::new(3, 1, 0x409);
/// Macintosh, Roman, English.
pub const MAC_ROMAN: Selector = Selector::new(1, 0, 0);

/// The selectors that receive the license and sample text records.
pub const LICENSED_SELECTORS: [Selector; 2] = [WINDOWS_ENGLISH, MAC_ROMAN];

/// The font whose version record names the release.
pub const CANONICAL_FONT: &str = "TabulaQuattro-Regular.ttf";
/// Extension of the font files collected into a release.
pub const FONT_EXTENSION: &str = "ttf";
/// Files shipped next to the fonts, relative to the release directory.
pub const ANCILLARY_FILES: [&str; 2] = ["README.md", "LICENSES/OFL-1.1-RFN.txt"];
/// Prefix of the release archive name; the version and `.zip` follow.
pub const ARCHIVE_PREFIX: &str = "tabula-quattro-";

/// Archive entry name of [`USAGE_TERMS`].
pub const USAGE_TERMS_ENTRY: &str = "USAGE_TERMS.md";
/// A plain summary of the license terms, shipped in every release.
pub const USAGE_TERMS: &str = "\
This font is licensed under the OFL-1.1 with Reserved Font Names. See OFL-1.1-RFN.txt or http://scripts.sil.org/OFL for details.

Copyright \u{a9} 2021 Rose Davidson with Reserved Font Name \"Tabula Quattro\"

Copyright \u{a9} 2018 Information Architects Inc. with Reserved Font Name \"iA Writer\"
Copyright \u{a9} 2017 IBM Corp. with Reserved Font Name \"Plex\"";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pangram_has_three_cases() {
        let lines: Vec<_> = PANGRAM.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], lines[0].to_uppercase());
        assert_eq!(lines[2], lines[0].to_lowercase());
    }

    #[test]
    fn usage_terms_trimmed() {
        assert!(USAGE_TERMS.starts_with("This font"));
        assert!(USAGE_TERMS.ends_with("\"Plex\""));
    }

    #[test]
    fn selector_display() {
        assert_eq!(WINDOWS_ENGLISH.to_string(), "(3, 1, 0x409)");
    }
}
