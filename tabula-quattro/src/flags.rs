//! Weight class, `fsSelection` and `macStyle` for each style.
//!
//! The upstream fonts do not carry reliable values for any of these, so
//! they are derived from the [`Style`] alone and written over whatever was
//! there before.
//!
//! See <https://learn.microsoft.com/en-us/typography/opentype/spec/namesmp>

use write_fonts::tables::{
    head::{Head, MacStyle},
    os2::{Os2, SelectionFlags},
};

use crate::Style;

/// `usWeightClass` of the non-bold styles.
pub const WEIGHT_NORMAL: u16 = 400;
/// `usWeightClass` of the bold styles.
pub const WEIGHT_BOLD: u16 = 700;

/// Bits 0 through 6 of `fsSelection`, the only ones owned by the style.
const STYLE_SELECTION_BITS: SelectionFlags = SelectionFlags::from_bits_truncate(0x007F);

/// The style-dependent values of the `OS/2` and `head` tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleFlags {
    pub weight_class: u16,
    pub selection: SelectionFlags,
    pub mac_style: MacStyle,
}

impl StyleFlags {
    /// Compute the flags for a style, independent of any existing font state.
    pub fn for_style(style: Style) -> Self {
        let mut flags = StyleFlags {
            weight_class: WEIGHT_NORMAL,
            selection: SelectionFlags::empty(),
            mac_style: MacStyle::empty(),
        };

        if style == Style::Regular {
            flags.selection |= SelectionFlags::REGULAR;
        }
        if style.is_bold() {
            flags.weight_class = WEIGHT_BOLD;
            flags.selection |= SelectionFlags::BOLD;
            flags.mac_style |= MacStyle::BOLD;
        }
        if style.is_italic() {
            flags.selection |= SelectionFlags::ITALIC;
            flags.mac_style |= MacStyle::ITALIC;
        }
        flags
    }

    /// Write the flags into a font's tables.
    ///
    /// Bits 0-6 of `fsSelection` and all of `macStyle` are replaced; the
    /// higher `fsSelection` bits (typo metrics, WWS, oblique) are kept.
    pub fn apply(&self, os2: &mut Os2, head: &mut Head) {
        os2.us_weight_class = self.weight_class;
        os2.fs_selection.remove(STYLE_SELECTION_BITS);
        os2.fs_selection.insert(self.selection);
        head.mac_style = self.mac_style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular() {
        let flags = StyleFlags::for_style(Style::Regular);
        assert_eq!(flags.weight_class, 400);
        assert_eq!(flags.selection.bits(), 1 << 6);
        assert_eq!(flags.mac_style.bits(), 0);
    }

    #[test]
    fn bold() {
        let flags = StyleFlags::for_style(Style::Bold);
        assert_eq!(flags.weight_class, 700);
        assert_eq!(flags.selection.bits(), 1 << 5);
        assert_eq!(flags.mac_style.bits(), 1 << 0);
    }

    #[test]
    fn italic() {
        let flags = StyleFlags::for_style(Style::Italic);
        assert_eq!(flags.weight_class, 400);
        assert_eq!(flags.selection.bits(), 1 << 0);
        assert_eq!(flags.mac_style.bits(), 1 << 1);
    }

    #[test]
    fn bold_italic() {
        let flags = StyleFlags::for_style(Style::BoldItalic);
        assert_eq!(flags.weight_class, 700);
        assert_eq!(flags.selection.bits(), (1 << 5) | (1 << 0));
        assert_eq!(flags.mac_style.bits(), (1 << 0) | (1 << 1));
    }

    #[test]
    fn apply_discards_stale_bits() {
        let mut os2 = Os2 {
            us_weight_class: 100,
            // italic, underscore, strikeout, bold, regular, use typo metrics
            fs_selection: SelectionFlags::from_bits_truncate(0b1111_0011),
            ..Default::default()
        };
        let mut head = Head {
            mac_style: MacStyle::BOLD | MacStyle::ITALIC,
            ..Default::default()
        };

        StyleFlags::for_style(Style::Regular).apply(&mut os2, &mut head);

        assert_eq!(os2.us_weight_class, 400);
        assert_eq!(
            os2.fs_selection,
            SelectionFlags::REGULAR | SelectionFlags::USE_TYPO_METRICS
        );
        assert_eq!(head.mac_style, MacStyle::empty());
    }

    #[test]
    fn apply_is_a_pure_function_of_style() {
        for style in Style::ALL {
            let mut fresh = (Os2::default(), Head::default());
            let mut stale = (
                Os2 {
                    us_weight_class: 900,
                    fs_selection: SelectionFlags::from_bits_truncate(0x7F),
                    ..Default::default()
                },
                Head {
                    mac_style: MacStyle::all(),
                    ..Default::default()
                },
            );
            let flags = StyleFlags::for_style(style);
            flags.apply(&mut fresh.0, &mut fresh.1);
            flags.apply(&mut stale.0, &mut stale.1);
            assert_eq!(fresh.0.us_weight_class, stale.0.us_weight_class);
            assert_eq!(fresh.0.fs_selection, stale.0.fs_selection);
            assert_eq!(fresh.1.mac_style, stale.1.mac_style);
        }
    }
}
