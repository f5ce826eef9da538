//! Editor control classification for entries.
//!
//! Every entry is presented with exactly one kind of control. The choice
//! depends on the section name, the entry name and the shape of the value,
//! and is made in one place by [`classify`] so front-ends never match on
//! names themselves.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Sections whose values are always edited as free text.
const TEXT_SECTIONS: &[&str] = &["Hotkeys", "Log"];

/// Entries whose values are always edited as free text.
const TEXT_ENTRIES: &[&str] = &["uTintMaskResolution"];

/// Entry selecting the editor font charset.
pub const CHARSET_ENTRY: &str = "nCharset";

/// Entry selecting the editor UI theme.
pub const THEME_ENTRY: &str = "uUIDarkThemeId";

/// Integer entries restricted to `0..=2`.
const SMALL_RANGE_ENTRIES: &[&str] = &["bUIDarkThemeID", "nGenerationVersion"];

const SMALL_RANGE: (i32, i32) = (0, 2);
const DEFAULT_RANGE: (i32, i32) = (0, 999_999);

/// A named constant offered by a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub name: &'static str,
    pub code: i32,
}

const fn choice(name: &'static str, code: i32) -> Choice {
    Choice { name, code }
}

/// Windows GDI font charsets.
pub const CHARSETS: &[Choice] = &[
    choice("ANSI_CHARSET", 0),
    choice("DEFAULT_CHARSET", 1),
    choice("SYMBOL_CHARSET", 2),
    choice("MAC_CHARSET", 77),
    choice("SHIFTJIS_CHARSET", 128),
    choice("HANGEUL_CHARSET", 129),
    choice("JOHAB_CHARSET", 130),
    choice("GB2312_CHARSET", 134),
    choice("CHINESEBIG5_CHARSET", 136),
    choice("GREEK_CHARSET", 161),
    choice("TURKISH_CHARSET", 162),
    choice("VIETNAMESE_CHARSET", 163),
    choice("HEBREW_CHARSET", 177),
    choice("ARABIC_CHARSET", 178),
    choice("BALTIC_CHARSET", 186),
    choice("RUSSIAN_CHARSET", 204),
    choice("THAI_CHARSET", 222),
    choice("EASTEUROPE_CHARSET", 238),
    choice("OEM_CHARSET", 255),
];

/// UI themes.
pub const THEMES: &[Choice] = &[
    choice("Lighter", 0),
    choice("Darker", 1),
    choice("Custom", 2),
];

/// The fixed enumerations a dropdown can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceTable {
    Charset,
    Theme,
}

impl ChoiceTable {
    pub fn choices(&self) -> &'static [Choice] {
        match self {
            Self::Charset => CHARSETS,
            Self::Theme => THEMES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Charset => "charset",
            Self::Theme => "theme",
        }
    }

    /// Choice with the given code.
    pub fn by_code(&self, code: i32) -> Option<Choice> {
        self.choices().iter().copied().find(|c| c.code == code)
    }

    /// Choice matching a name (case-insensitive) or a numeric code.
    pub fn lookup(&self, input: &str) -> Option<Choice> {
        let input = input.trim();
        if let Ok(code) = input.parse::<i32>() {
            return self.by_code(code);
        }
        self.choices()
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(input))
    }

    /// Preselected choice when the stored value matches nothing.
    fn fallback(&self) -> Option<Choice> {
        match self {
            Self::Charset => self.by_code(1),
            Self::Theme => None,
        }
    }
}

impl fmt::Display for ChoiceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChoiceTable {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "charset" | "charsets" => Ok(Self::Charset),
            "theme" | "themes" => Ok(Self::Theme),
            other => Err(format!("unknown choice table '{other}' (expected charset or theme)")),
        }
    }
}

/// The control used to edit an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WidgetKind {
    /// Boolean toggle.
    Checkbox { checked: bool },
    /// Pick one of a fixed set of named constants.
    Dropdown {
        table: ChoiceTable,
        selected: Option<Choice>,
    },
    /// Bounded integer.
    Stepper { min: i32, max: i32, value: i32 },
    /// Free text.
    Text,
}

impl WidgetKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Checkbox { .. } => "checkbox",
            Self::Dropdown { .. } => "dropdown",
            Self::Stepper { .. } => "stepper",
            Self::Text => "text",
        }
    }

    /// Validate user input for this control and return the text to store.
    ///
    /// # Errors
    /// Returns [`Error::InvalidValue`] when the input is not acceptable for
    /// the control.
    pub fn normalize(&self, key: &str, input: &str) -> Result<String> {
        let input = input.trim();

        match self {
            Self::Checkbox { .. } => parse_flag(input)
                .map(|flag| flag.to_string())
                .ok_or_else(|| Error::invalid(key, format!("'{input}' is not true or false"))),
            Self::Dropdown { table, .. } => table
                .lookup(input)
                .map(|c| c.code.to_string())
                .ok_or_else(|| {
                    let names: Vec<_> = table.choices().iter().map(|c| c.name).collect();
                    Error::invalid(
                        key,
                        format!("'{input}' is not a known {table}; expected one of {}", names.join(", ")),
                    )
                }),
            Self::Stepper { min, max, .. } => {
                let number: i32 = input
                    .parse()
                    .map_err(|_| Error::invalid(key, format!("'{input}' is not an integer")))?;
                if !(*min..=*max).contains(&number) {
                    return Err(Error::invalid(
                        key,
                        format!("{number} is outside the range {min}..={max}"),
                    ));
                }
                Ok(number.to_string())
            }
            Self::Text => {
                if input.contains(['\r', '\n']) {
                    return Err(Error::invalid(key, "value must be a single line"));
                }
                if input.contains(';') {
                    return Err(Error::invalid(
                        key,
                        "value cannot contain ';' because it starts an inline comment",
                    ));
                }
                Ok(input.to_string())
            }
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decide the control for an entry. The first matching rule wins.
///
/// # Example
/// ```
/// use ckpe_ini::widget::{classify, WidgetKind};
///
/// assert_eq!(classify("General", "bEnabled", "TRUE"), WidgetKind::Checkbox { checked: true });
/// assert_eq!(classify("Hotkeys", "bEnabled", "true"), WidgetKind::Text);
/// ```
pub fn classify(section: &str, entry: &str, value: &str) -> WidgetKind {
    if TEXT_SECTIONS.contains(&section) || TEXT_ENTRIES.contains(&entry) {
        return WidgetKind::Text;
    }

    if entry == CHARSET_ENTRY {
        return dropdown(ChoiceTable::Charset, value);
    }

    if entry == THEME_ENTRY {
        return dropdown(ChoiceTable::Theme, value);
    }

    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return WidgetKind::Checkbox {
            checked: value.eq_ignore_ascii_case("true"),
        };
    }

    if let Ok(number) = value.parse::<i32>() {
        let (min, max) = if SMALL_RANGE_ENTRIES.contains(&entry) {
            SMALL_RANGE
        } else {
            DEFAULT_RANGE
        };
        return WidgetKind::Stepper {
            min,
            max,
            value: number,
        };
    }

    WidgetKind::Text
}

fn dropdown(table: ChoiceTable, value: &str) -> WidgetKind {
    let selected = value
        .parse::<i32>()
        .ok()
        .and_then(|code| table.by_code(code))
        .or_else(|| table.fallback());
    WidgetKind::Dropdown { table, selected }
}

fn parse_flag(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hotkeys", "bEnabled", "true")]
    #[case("Log", "nLevel", "3")]
    #[case("General", "uTintMaskResolution", "2048")]
    #[case("General", "sName", "hello world")]
    fn test_classify_text(#[case] section: &str, #[case] entry: &str, #[case] value: &str) {
        assert_eq!(classify(section, entry, value), WidgetKind::Text);
    }

    #[rstest]
    #[case("true", true)]
    #[case("False", false)]
    #[case("TRUE", true)]
    fn test_classify_checkbox(#[case] value: &str, #[case] checked: bool) {
        assert_eq!(
            classify("General", "bFlag", value),
            WidgetKind::Checkbox { checked }
        );
    }

    #[test]
    fn test_classify_stepper_bounds() {
        assert_eq!(
            classify("General", "nGenerationVersion", "1"),
            WidgetKind::Stepper { min: 0, max: 2, value: 1 }
        );
        assert_eq!(
            classify("General", "bUIDarkThemeID", "0"),
            WidgetKind::Stepper { min: 0, max: 2, value: 0 }
        );
        assert_eq!(
            classify("General", "uCount", "42"),
            WidgetKind::Stepper { min: 0, max: 999_999, value: 42 }
        );
    }

    #[test]
    fn test_classify_charset_dropdown() {
        let kind = classify("CreationKit", CHARSET_ENTRY, "204");
        assert_eq!(
            kind,
            WidgetKind::Dropdown {
                table: ChoiceTable::Charset,
                selected: Some(Choice { name: "RUSSIAN_CHARSET", code: 204 }),
            }
        );
    }

    #[test]
    fn test_classify_charset_unknown_falls_back_to_default() {
        let WidgetKind::Dropdown { selected, .. } = classify("CreationKit", CHARSET_ENTRY, "abc")
        else {
            panic!("expected dropdown");
        };
        assert_eq!(selected.unwrap().name, "DEFAULT_CHARSET");
    }

    #[test]
    fn test_classify_theme_dropdown() {
        let kind = classify("CreationKit", THEME_ENTRY, "1");
        assert_eq!(
            kind,
            WidgetKind::Dropdown {
                table: ChoiceTable::Theme,
                selected: Some(Choice { name: "Darker", code: 1 }),
            }
        );
        let WidgetKind::Dropdown { selected, .. } = classify("CreationKit", THEME_ENTRY, "7") else {
            panic!("expected dropdown");
        };
        assert!(selected.is_none());
    }

    #[test]
    fn test_text_sections_win_over_named_entries() {
        assert_eq!(classify("Log", CHARSET_ENTRY, "1"), WidgetKind::Text);
    }

    #[test]
    fn test_tables() {
        assert_eq!(CHARSETS.len(), 19);
        assert_eq!(THEMES.len(), 3);
        assert_eq!(ChoiceTable::Theme.lookup("custom").unwrap().code, 2);
        assert_eq!(ChoiceTable::Charset.lookup("238").unwrap().name, "EASTEUROPE_CHARSET");
        assert!(ChoiceTable::Charset.lookup("3").is_none());
        assert_eq!("Themes".parse::<ChoiceTable>().unwrap(), ChoiceTable::Theme);
        assert!("fonts".parse::<ChoiceTable>().is_err());
    }

    #[rstest]
    #[case("yes", "true")]
    #[case("0", "false")]
    #[case(" TRUE ", "true")]
    fn test_normalize_checkbox(#[case] input: &str, #[case] expected: &str) {
        let kind = WidgetKind::Checkbox { checked: false };
        assert_eq!(kind.normalize("bFlag", input).unwrap(), expected);
    }

    #[test]
    fn test_normalize_checkbox_rejects_other_text() {
        let kind = WidgetKind::Checkbox { checked: false };
        assert!(kind.normalize("bFlag", "maybe").is_err());
    }

    #[test]
    fn test_normalize_dropdown_stores_code() {
        let kind = classify("CreationKit", CHARSET_ENTRY, "1");
        assert_eq!(kind.normalize(CHARSET_ENTRY, "greek_charset").unwrap(), "161");
        assert_eq!(kind.normalize(CHARSET_ENTRY, "0").unwrap(), "0");
        assert!(kind.normalize(CHARSET_ENTRY, "KLINGON").is_err());
    }

    #[test]
    fn test_normalize_stepper_enforces_bounds() {
        let kind = classify("General", "nGenerationVersion", "1");
        assert_eq!(kind.normalize("nGenerationVersion", "2").unwrap(), "2");
        assert!(kind.normalize("nGenerationVersion", "3").is_err());
        assert!(kind.normalize("nGenerationVersion", "-1").is_err());
        assert!(kind.normalize("nGenerationVersion", "two").is_err());
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(WidgetKind::Text.normalize("sPath", " a = b ").unwrap(), "a = b");
        assert!(WidgetKind::Text.normalize("sPath", "a;b").is_err());
        assert!(WidgetKind::Text.normalize("sPath", "a\nb").is_err());
    }
}
