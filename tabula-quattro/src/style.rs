//! Detecting which of the four family members a font is.

use std::fmt::{self, Display};
use std::str::FromStr;

use write_fonts::{tables::name::Name, types::NameId};

use crate::{scheme::WINDOWS_ENGLISH, Error};

/// One of the four members of the family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Regular, Style::Bold, Style::Italic, Style::BoldItalic];

    /// The subfamily name identifying this style.
    pub const fn label(self) -> &'static str {
        match self {
            Style::Regular => "Regular",
            Style::Bold => "Bold",
            Style::Italic => "Italic",
            Style::BoldItalic => "Bold Italic",
        }
    }

    /// The label as it appears in file names, without spaces.
    pub fn file_component(self) -> String {
        self.label().replace(' ', "")
    }

    pub const fn is_bold(self) -> bool {
        matches!(self, Style::Bold | Style::BoldItalic)
    }

    pub const fn is_italic(self) -> bool {
        matches!(self, Style::Italic | Style::BoldItalic)
    }

    /// Determine the style from the Windows subfamily name of a font.
    ///
    /// Only the first subfamily record with platform 3 and encoding 1 is
    /// consulted, in any language. The flags already set in the font are
    /// ignored, since they cannot be trusted.
    pub fn detect(name: &Name) -> Result<Style, Error> {
        let record = name
            .name_record
            .iter()
            .find(|rec| {
                rec.name_id == NameId::SUBFAMILY_NAME
                    && rec.platform_id == WINDOWS_ENGLISH.platform_id
                    && rec.encoding_id == WINDOWS_ENGLISH.encoding_id
            })
            .ok_or(Error::MissingName {
                name_id: NameId::SUBFAMILY_NAME,
                selector: Some(WINDOWS_ENGLISH),
            })?;
        record.string.parse()
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.label() == s)
            .ok_or_else(|| Error::UnrecognizedStyle(s.to_owned()))
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
