//! Renaming tables for SDK type names, enum constants, and reserved words.
//!
//! The tables are built once (built-in entries plus optional overrides from
//! `pdbind.toml`) and are read-only for the rest of the process. Lookups are
//! exact-match; a name with no entry passes through unchanged.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::TableOverrides;
use crate::error::{Result, TranslateError};

/// Built-in type renames. Keys are de-spaced C type names with no pointer
/// markers (`const char` arrives here as `constchar`).
const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("bool", "boolean"),
    ("int", "cint"),
    ("unsignedint", "cuint"),
    ("short", "cshort"),
    ("unsignedshort", "cushort"),
    ("long", "clong"),
    ("unsignedlong", "culong"),
    ("constchar", "char"),
    ("constvoid", "void"),
    ("size_t", "csize"),
    ("float", "float32"),
    ("double", "float64"),
    ("uintptr_t", "usize"),
    ("intptr_t", "isize"),
    ("uint8_t", "uint8"),
    ("uint16_t", "uint16"),
    ("uint32_t", "uint32"),
    ("uint64_t", "uint64"),
    ("int8_t", "int8"),
    ("int16_t", "int16"),
    ("int32_t", "int32"),
    ("int64_t", "int64"),
    // Graphics
    ("LCDColor", "ColorOrPattern"),
    ("LCDPattern", "Pattern"),
    ("LCDSolidColor", "Color"),
    ("LCDLineCapStyle", "LineCapStyle"),
    ("LCDBitmapFlip", "Flip"),
    ("LCDFontLanguage", "FontLanguage"),
    ("LCDBitmapDrawMode", "DrawMode"),
    ("LCDPolygonFillRule", "PolygonFillRule"),
    ("LCDRect", "Rect"),
    ("LCDBitmap", "Bitmap"),
    ("LCDBitmapTable", "BitmapTable"),
    ("LCDFont", "Font"),
    ("LCDFontData", "FontData"),
    ("LCDFontPage", "FontPage"),
    ("LCDFontGlyph", "FontGlyph"),
    ("LCDTileMap", "TileMap"),
    ("LCDVideoPlayer", "VideoPlayer"),
    ("LCDStreamPlayer", "StreamPlayer"),
    // Text
    ("PDStringEncoding", "StringEncoding"),
    ("PDTextWrappingMode", "TextWrappingMode"),
    ("PDTextAlignment", "TextAlignment"),
    // System
    ("PDButtons", "Buttons"),
    ("PDSystemEvent", "SystemEvent"),
    ("PDLanguage", "Language"),
    ("PDPeripherals", "Peripherals"),
    ("PDMenuItem", "MenuItem"),
    ("PDCallbackFunction", "CallbackFunction"),
    ("PDMenuItemCallbackFunction", "MenuItemCallbackFunction"),
    ("PDDateTime", "DateTime"),
    // Files
    ("SDFile", "File"),
];

/// Built-in enum constant renames: the SDK's `k`-prefixed constants mapped to
/// their short name inside the enum's namespace.
const BUILTIN_CONSTANTS: &[(&str, &str)] = &[
    // FileOptions
    ("kFileRead", "Read"),
    ("kFileReadData", "ReadData"),
    ("kFileWrite", "Write"),
    ("kFileAppend", "Append"),
    // LCDBitmapFlip
    ("kBitmapUnflipped", "Unflipped"),
    ("kBitmapFlippedX", "FlippedX"),
    ("kBitmapFlippedY", "FlippedY"),
    ("kBitmapFlippedXY", "FlippedXY"),
    // LCDSolidColor
    ("kColorBlack", "Black"),
    ("kColorWhite", "White"),
    ("kColorClear", "Clear"),
    ("kColorXOR", "XOR"),
    // LCDBitmapDrawMode
    ("kDrawModeCopy", "Copy"),
    ("kDrawModeWhiteTransparent", "WhiteTransparent"),
    ("kDrawModeBlackTransparent", "BlackTransparent"),
    ("kDrawModeFillWhite", "FillWhite"),
    ("kDrawModeFillBlack", "FillBlack"),
    ("kDrawModeXOR", "XOR"),
    ("kDrawModeNXOR", "NXOR"),
    ("kDrawModeInverted", "Inverted"),
    // LCDLineCapStyle
    ("kLineCapStyleButt", "Butt"),
    ("kLineCapStyleSquare", "Square"),
    ("kLineCapStyleRound", "Round"),
    // LCDFontLanguage
    ("kLCDFontLanguageEnglish", "English"),
    ("kLCDFontLanguageJapanese", "Japanese"),
    ("kLCDFontLanguageUnknown", "Unknown"),
    // PDStringEncoding
    ("kASCIIEncoding", "ASCII"),
    ("kUTF8Encoding", "UTF8"),
    ("k16BitLEEncoding", "Bit16LE"),
    // LCDPolygonFillRule
    ("kPolygonFillNonZero", "NonZero"),
    ("kPolygonFillEvenOdd", "EvenOdd"),
    // PDTextWrappingMode
    ("kWrapClip", "Clip"),
    ("kWrapCharacter", "Character"),
    ("kWrapWord", "Word"),
    // PDTextAlignment
    ("kAlignTextLeft", "Left"),
    ("kAlignTextCenter", "Center"),
    ("kAlignTextRight", "Right"),
    // PDButtons
    ("kButtonLeft", "Left"),
    ("kButtonRight", "Right"),
    ("kButtonUp", "Up"),
    ("kButtonDown", "Down"),
    ("kButtonB", "B"),
    ("kButtonA", "A"),
    // PDLanguage
    ("kPDLanguageEnglish", "English"),
    ("kPDLanguageJapanese", "Japanese"),
    ("kPDLanguageUnknown", "Unknown"),
    // PDPeripherals
    ("kNone", "None"),
    ("kAccelerometer", "Accelerometer"),
    ("kAllPeripherals", "AllPeripherals"),
    // PDSystemEvent
    ("kEventInit", "Init"),
    ("kEventInitLua", "InitLua"),
    ("kEventLock", "Lock"),
    ("kEventUnlock", "Unlock"),
    ("kEventPause", "Pause"),
    ("kEventResume", "Resume"),
    ("kEventTerminate", "Terminate"),
    ("kEventKeyPressed", "KeyPressed"),
    ("kEventKeyReleased", "KeyReleased"),
    ("kEventLowPower", "LowPower"),
];

/// Nelua keywords that can plausibly appear as C identifiers.
const BUILTIN_RESERVED: &[&str] = &[
    "and",
    "defer",
    "elseif",
    "end",
    "fallthrough",
    "function",
    "global",
    "goto",
    "in",
    "local",
    "nil",
    "not",
    "or",
    "repeat",
    "switch",
    "then",
    "until",
];

/// Suffix appended to identifiers that collide with a reserved word.
pub const RESERVED_SUFFIX: &str = "_";

/// The type-name and constant-name renaming tables plus the reserved-word set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTables {
    types: BTreeMap<String, String>,
    constants: BTreeMap<String, String>,
    reserved: BTreeSet<String>,
}

impl RenameTables {
    /// The built-in tables for the Playdate C API.
    pub fn builtin() -> Self {
        RenameTables {
            types: owned_pairs(BUILTIN_TYPES),
            constants: owned_pairs(BUILTIN_CONSTANTS),
            reserved: BUILTIN_RESERVED.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Merge overrides over these tables. Override entries replace built-in
    /// entries with the same key.
    ///
    /// Fails if the merged tables would allow a chained rename.
    pub fn with_overrides(mut self, overrides: &TableOverrides) -> Result<Self> {
        for (k, v) in &overrides.types {
            self.types.insert(k.clone(), v.clone());
        }
        for (k, v) in &overrides.constants {
            self.constants.insert(k.clone(), v.clone());
        }
        self.reserved.extend(overrides.reserved.words.iter().cloned());
        self.validate()?;
        Ok(self)
    }

    /// Check that no value of either table is also a key of the same table.
    pub fn validate(&self) -> Result<()> {
        check_unchained("type", &self.types)?;
        check_unchained("constant", &self.constants)
    }

    /// Rename a de-starred type name, or return it unchanged.
    pub fn rename_type<'a>(&'a self, name: &'a str) -> &'a str {
        self.types.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Rename an enum constant, or return it unchanged.
    pub fn rename_constant<'a>(&'a self, name: &'a str) -> &'a str {
        self.constants.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Whether `name` collides with a reserved word of the binding language.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Return `name`, suffixed if it collides with a reserved word.
    pub fn safe_identifier(&self, name: &str) -> String {
        if self.is_reserved(name) {
            format!("{name}{RESERVED_SUFFIX}")
        } else {
            name.to_string()
        }
    }

    /// The type table, sorted by key.
    pub fn types(&self) -> &BTreeMap<String, String> {
        &self.types
    }

    /// The constant table, sorted by key.
    pub fn constants(&self) -> &BTreeMap<String, String> {
        &self.constants
    }

    /// The reserved-word set, sorted.
    pub fn reserved(&self) -> &BTreeSet<String> {
        &self.reserved
    }
}

impl Default for RenameTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned_pairs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn check_unchained(table: &'static str, map: &BTreeMap<String, String>) -> Result<()> {
    for (key, value) in map {
        if map.contains_key(value) {
            return Err(TranslateError::ChainedRename {
                table,
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_unchained() {
        let tables = RenameTables::builtin();
        tables.validate().unwrap();
        for value in tables.types().values() {
            assert!(!tables.types().contains_key(value), "type value {value} is a key");
        }
        for value in tables.constants().values() {
            assert!(
                !tables.constants().contains_key(value),
                "constant value {value} is a key"
            );
        }
    }

    #[test]
    fn lookups_pass_unknown_names_through() {
        let tables = RenameTables::builtin();
        assert_eq!(tables.rename_type("LCDBitmap"), "Bitmap");
        assert_eq!(tables.rename_type("FileStat"), "FileStat");
        assert_eq!(tables.rename_constant("kFileRead"), "Read");
        assert_eq!(tables.rename_constant("kSomethingNew"), "kSomethingNew");
    }

    #[test]
    fn reserved_words_get_suffix() {
        let tables = RenameTables::builtin();
        assert!(tables.is_reserved("end"));
        assert_eq!(tables.safe_identifier("end"), "end_");
        assert_eq!(tables.safe_identifier("len"), "len");
    }

    #[test]
    fn overrides_replace_and_extend() {
        let mut overrides = TableOverrides::default();
        overrides
            .types
            .insert("LCDBitmap".to_string(), "Image".to_string());
        overrides
            .constants
            .insert("kMenuItemChecked".to_string(), "Checked".to_string());
        overrides.reserved.words.push("record".to_string());

        let tables = RenameTables::builtin().with_overrides(&overrides).unwrap();
        assert_eq!(tables.rename_type("LCDBitmap"), "Image");
        assert_eq!(tables.rename_constant("kMenuItemChecked"), "Checked");
        assert!(tables.is_reserved("record"));
        assert!(tables.is_reserved("end"));
    }

    #[test]
    fn overrides_rejecting_chains() {
        let mut overrides = TableOverrides::default();
        // "cint" would become a key while "int" still maps to it.
        overrides
            .types
            .insert("cint".to_string(), "integer".to_string());

        let err = RenameTables::builtin().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, TranslateError::ChainedRename { table: "type", .. }));
    }
}
