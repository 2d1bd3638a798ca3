//! Synthetic fonts for the Tabula Quattro tests.
//!
//! The upstream fonts cannot be redistributed with the tests, so these are
//! built on the fly: a `name`, `OS/2` and `head` table shaped like the real
//! ones, plus an opaque `cvt ` table that renaming must carry over untouched.

use write_fonts::{
    tables::{
        head::{Head, MacStyle},
        name::{Name, NameRecord},
        os2::{Os2, SelectionFlags},
    },
    types::{NameId, Tag},
    FontBuilder,
};

/// Windows, Unicode BMP, US English.
pub const WINDOWS: (u16, u16, u16) = (3, 1, 0x409);
/// Macintosh, Roman, English.
pub const MAC: (u16, u16, u16) = (1, 0, 0);

pub const CVT_TAG: Tag = Tag::new(b"cvt ");
pub static CVT_DATA: &[u8] = &[0x00, 0x10, 0x00, 0x20, 0xff, 0xf0, 0x00, 0x00];

/// A name id no rewriting rule should touch.
pub const FONT_SPECIFIC_NAME_ID: NameId = NameId::new(256);

/// The parts of a test font that matter to the renaming tools.
#[derive(Clone, Debug)]
pub struct FontSpec {
    pub records: Vec<NameRecord>,
    pub weight_class: u16,
    pub fs_selection: SelectionFlags,
    pub mac_style: MacStyle,
}

impl FontSpec {
    /// A font named like the upstream iA Writer Quattro S release.
    ///
    /// The flags are deliberately wrong for the style, as they are in the
    /// fonts this tool was written for.
    pub fn upstream(subfamily: &str) -> Self {
        let ps_name = format!("iAWriterQuattroS-{}", subfamily.replace(' ', ""));
        let full_name = format!("iA Writer Quattro S {subfamily}");
        let mut records = Vec::new();
        for (platform_id, encoding_id, language_id) in [MAC, WINDOWS] {
            let mut push = |name_id: NameId, text: &str| {
                records.push(NameRecord::new(
                    platform_id,
                    encoding_id,
                    language_id,
                    name_id,
                    text.to_string().into(),
                ))
            };
            push(
                NameId::COPYRIGHT_NOTICE,
                "Copyright 2018 Information Architects Inc.",
            );
            push(NameId::FAMILY_NAME, "iA Writer Quattro S");
            push(NameId::SUBFAMILY_NAME, subfamily);
            push(NameId::UNIQUE_ID, &format!("1.000;iA;{ps_name}"));
            push(NameId::FULL_NAME, &full_name);
            push(NameId::VERSION_STRING, "Version 1.000");
            push(NameId::POSTSCRIPT_NAME, &ps_name);
            push(NameId::TRADEMARK, "iA Writer is a trademark of iA Inc.");
            push(NameId::MANUFACTURER, "Information Architects Inc.");
            push(NameId::DESIGNER, "IBM, iA");
            push(NameId::VENDOR_URL, "https://ia.net");
            push(NameId::DESIGNER_URL, "https://ia.net/writer");
        }
        records.push(NameRecord::new(
            WINDOWS.0,
            WINDOWS.1,
            WINDOWS.2,
            FONT_SPECIFIC_NAME_ID,
            "iAWriterQuattroS alternates".to_string().into(),
        ));

        FontSpec {
            records,
            weight_class: 450,
            fs_selection: SelectionFlags::REGULAR | SelectionFlags::USE_TYPO_METRICS,
            mac_style: MacStyle::ITALIC,
        }
    }

    /// A font that has already been renamed, with the given version string.
    pub fn renamed(subfamily: &str, version: &str) -> Self {
        let mut records = Vec::new();
        for (platform_id, encoding_id, language_id) in [MAC, WINDOWS] {
            for (name_id, text) in [
                (NameId::FAMILY_NAME, "Tabula Quattro"),
                (NameId::SUBFAMILY_NAME, subfamily),
                (NameId::VERSION_STRING, version),
            ] {
                records.push(NameRecord::new(
                    platform_id,
                    encoding_id,
                    language_id,
                    name_id,
                    text.to_string().into(),
                ));
            }
        }
        FontSpec {
            records,
            weight_class: 400,
            fs_selection: SelectionFlags::REGULAR,
            mac_style: MacStyle::empty(),
        }
    }

    /// Drop every record with this name id.
    pub fn without_name(mut self, name_id: NameId) -> Self {
        self.records.retain(|rec| rec.name_id != name_id);
        self
    }

    /// Compile the font.
    pub fn build(&self) -> Vec<u8> {
        let mut records = self.records.clone();
        records.sort();
        let name = Name::new(records);
        let os2 = Os2 {
            us_weight_class: self.weight_class,
            fs_selection: self.fs_selection,
            ..Default::default()
        };
        let head = Head {
            units_per_em: 1000,
            mac_style: self.mac_style,
            ..Default::default()
        };

        let mut builder = FontBuilder::default();
        builder.add_table(&name).expect("valid name table");
        builder.add_table(&os2).expect("valid OS/2 table");
        builder.add_table(&head).expect("valid head table");
        builder.add_raw(CVT_TAG, CVT_DATA);
        builder.build()
    }
}
