//! Rewriting the `name` table for the renamed family.

use write_fonts::{
    tables::name::{Name, NameRecord},
    types::NameId,
};

use crate::scheme::{
    Selector, COPYRIGHT_PREFIX, INPUT_FAMILY_NAME, INPUT_POSTSCRIPT_FAMILY_NAME, LICENSED_SELECTORS,
    LICENSE_NAME, LICENSE_URL, MANUFACTURER_PREFIX, OUTPUT_FAMILY_NAME,
    OUTPUT_POSTSCRIPT_FAMILY_NAME, PANGRAM, VENDOR_URL,
};

/// The name ids this crate knows about.
///
/// Records with any other id are left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameField {
    Copyright,
    Family,
    Subfamily,
    UniqueId,
    FullName,
    Version,
    PostScriptName,
    Trademark,
    Manufacturer,
    Designer,
    Description,
    VendorUrl,
    DesignerUrl,
    License,
    LicenseUrl,
    PreferredFamily,
    PreferredSubfamily,
    SampleText,
}

impl NameField {
    pub fn from_name_id(name_id: NameId) -> Option<Self> {
        Some(match name_id {
            NameId::COPYRIGHT_NOTICE => NameField::Copyright,
            NameId::FAMILY_NAME => NameField::Family,
            NameId::SUBFAMILY_NAME => NameField::Subfamily,
            NameId::UNIQUE_ID => NameField::UniqueId,
            NameId::FULL_NAME => NameField::FullName,
            NameId::VERSION_STRING => NameField::Version,
            NameId::POSTSCRIPT_NAME => NameField::PostScriptName,
            NameId::TRADEMARK => NameField::Trademark,
            NameId::MANUFACTURER => NameField::Manufacturer,
            NameId::DESIGNER => NameField::Designer,
            NameId::DESCRIPTION => NameField::Description,
            NameId::VENDOR_URL => NameField::VendorUrl,
            NameId::DESIGNER_URL => NameField::DesignerUrl,
            NameId::LICENSE_DESCRIPTION => NameField::License,
            NameId::LICENSE_URL => NameField::LicenseUrl,
            NameId::TYPOGRAPHIC_FAMILY_NAME => NameField::PreferredFamily,
            NameId::TYPOGRAPHIC_SUBFAMILY_NAME => NameField::PreferredSubfamily,
            NameId::SAMPLE_TEXT => NameField::SampleText,
            _ => return None,
        })
    }

    pub const fn name_id(self) -> NameId {
        match self {
            NameField::Copyright => NameId::COPYRIGHT_NOTICE,
            NameField::Family => NameId::FAMILY_NAME,
            NameField::Subfamily => NameId::SUBFAMILY_NAME,
            NameField::UniqueId => NameId::UNIQUE_ID,
            NameField::FullName => NameId::FULL_NAME,
            NameField::Version => NameId::VERSION_STRING,
            NameField::PostScriptName => NameId::POSTSCRIPT_NAME,
            NameField::Trademark => NameId::TRADEMARK,
            NameField::Manufacturer => NameId::MANUFACTURER,
            NameField::Designer => NameId::DESIGNER,
            NameField::Description => NameId::DESCRIPTION,
            NameField::VendorUrl => NameId::VENDOR_URL,
            NameField::DesignerUrl => NameId::DESIGNER_URL,
            NameField::License => NameId::LICENSE_DESCRIPTION,
            NameField::LicenseUrl => NameId::LICENSE_URL,
            NameField::PreferredFamily => NameId::TYPOGRAPHIC_FAMILY_NAME,
            NameField::PreferredSubfamily => NameId::TYPOGRAPHIC_SUBFAMILY_NAME,
            NameField::SampleText => NameId::SAMPLE_TEXT,
        }
    }

    /// The new text for a record of this field, or `None` to keep it.
    fn rewrite(self, text: &str) -> Option<String> {
        match self {
            NameField::Copyright => Some(format!("{COPYRIGHT_PREFIX}{text}")),
            NameField::Family => Some(OUTPUT_FAMILY_NAME.to_owned()),
            NameField::UniqueId | NameField::PostScriptName => Some(
                text.replace(INPUT_POSTSCRIPT_FAMILY_NAME, OUTPUT_POSTSCRIPT_FAMILY_NAME),
            ),
            NameField::FullName => Some(text.replace(INPUT_FAMILY_NAME, OUTPUT_FAMILY_NAME)),
            NameField::Manufacturer => Some(format!("{MANUFACTURER_PREFIX}{text}")),
            NameField::VendorUrl | NameField::DesignerUrl => Some(VENDOR_URL.to_owned()),
            NameField::Subfamily
            | NameField::Version
            | NameField::Trademark
            | NameField::Designer
            | NameField::Description
            | NameField::License
            | NameField::LicenseUrl
            | NameField::PreferredFamily
            | NameField::PreferredSubfamily
            | NameField::SampleText => None,
        }
    }
}

/// Rebrand every record of the table, then add the license and sample text.
///
/// All records sharing a name id are rewritten, whatever their platform.
/// Prefixes are added unconditionally, so running this twice on the same
/// table prefixes the copyright and manufacturer twice.
pub fn rewrite_names(name: &mut Name) {
    for record in name.name_record.iter_mut() {
        let Some(field) = NameField::from_name_id(record.name_id) else {
            continue;
        };
        if let Some(text) = field.rewrite(&record.string) {
            log::debug!(
                "{:?} ({}, {}, 0x{:x}): '{}' -> '{}'",
                field,
                record.platform_id,
                record.encoding_id,
                record.language_id,
                record.string.as_str(),
                text
            );
            record.string = text.into();
        }
    }

    for selector in LICENSED_SELECTORS {
        set_name(name, NameField::License.name_id(), selector, LICENSE_NAME);
        set_name(name, NameField::LicenseUrl.name_id(), selector, LICENSE_URL);
        set_name(name, NameField::SampleText.name_id(), selector, PANGRAM);
    }

    // the binary table requires records ordered by platform, encoding, language, id
    name.name_record.sort();
}

/// Set the text of the record with this id and selector, adding it if missing.
pub fn set_name(name: &mut Name, name_id: NameId, selector: Selector, text: &str) {
    let existing = name.name_record.iter_mut().find(|rec| {
        rec.name_id == name_id
            && rec.platform_id == selector.platform_id
            && rec.encoding_id == selector.encoding_id
            && rec.language_id == selector.language_id
    });
    match existing {
        Some(record) => record.string = text.to_owned().into(),
        None => name.name_record.push(NameRecord::new(
            selector.platform_id,
            selector.encoding_id,
            selector.language_id,
            name_id,
            text.to_owned().into(),
        )),
    }
}

/// The text of the first record with this id, on any platform.
pub fn first_name(name: &Name, name_id: NameId) -> Option<&str> {
    name.name_record
        .iter()
        .find(|rec| rec.name_id == name_id)
        .map(|rec| rec.string.as_str())
}
