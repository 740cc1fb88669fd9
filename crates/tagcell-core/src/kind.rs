//! Semantic kinds and shape overrides

use std::fmt;

/// The resolved rendering/editing category of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SemanticKind {
    /// Plain text (default)
    #[default]
    String,
    Date,
    Time,
    Timestamp,
    /// Number, including percent and currency subtypes
    Number,
    Button,
    ButtonList,
    Icon,
    Image,
    Color,
    Link,
    Bar,
    ProgressBar,
    Radio,
    /// Boolean rendered as a checkbox
    Checkbox,
    Chart,
    /// List of objects rendered as chips
    ChipList,
    Autocomplete,
    Combobox,
    Editor,
    Gauge,
    Knob,
    Rating,
    /// Text field with a lookup action
    Search,
    Configurator,
    /// Configurator over several values
    MultipleConfigurator,
}

/// How a kind's value is represented in canonical form.
///
/// Formatting and normalization dispatch on this, so every kind must map to
/// exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    Text,
    Number,
    Date,
    Time,
    Timestamp,
    Boolean,
    Color,
    List,
}

impl SemanticKind {
    /// All kinds, in declaration order
    pub const ALL: [SemanticKind; 26] = [
        SemanticKind::String,
        SemanticKind::Date,
        SemanticKind::Time,
        SemanticKind::Timestamp,
        SemanticKind::Number,
        SemanticKind::Button,
        SemanticKind::ButtonList,
        SemanticKind::Icon,
        SemanticKind::Image,
        SemanticKind::Color,
        SemanticKind::Link,
        SemanticKind::Bar,
        SemanticKind::ProgressBar,
        SemanticKind::Radio,
        SemanticKind::Checkbox,
        SemanticKind::Chart,
        SemanticKind::ChipList,
        SemanticKind::Autocomplete,
        SemanticKind::Combobox,
        SemanticKind::Editor,
        SemanticKind::Gauge,
        SemanticKind::Knob,
        SemanticKind::Rating,
        SemanticKind::Search,
        SemanticKind::Configurator,
        SemanticKind::MultipleConfigurator,
    ];

    /// Stable kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticKind::String => "string",
            SemanticKind::Date => "date",
            SemanticKind::Time => "time",
            SemanticKind::Timestamp => "timestamp",
            SemanticKind::Number => "number",
            SemanticKind::Button => "button",
            SemanticKind::ButtonList => "button-list",
            SemanticKind::Icon => "icon",
            SemanticKind::Image => "image",
            SemanticKind::Color => "color",
            SemanticKind::Link => "link",
            SemanticKind::Bar => "bar",
            SemanticKind::ProgressBar => "progress-bar",
            SemanticKind::Radio => "radio",
            SemanticKind::Checkbox => "checkbox",
            SemanticKind::Chart => "chart",
            SemanticKind::ChipList => "chip-list",
            SemanticKind::Autocomplete => "autocomplete",
            SemanticKind::Combobox => "combobox",
            SemanticKind::Editor => "editor",
            SemanticKind::Gauge => "gauge",
            SemanticKind::Knob => "knob",
            SemanticKind::Rating => "rating",
            SemanticKind::Search => "search",
            SemanticKind::Configurator => "configurator",
            SemanticKind::MultipleConfigurator => "multiple-configurator",
        }
    }

    /// Parse a kebab-case name (case-insensitive, `_` accepted for `-`)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }

    /// Canonical value representation for this kind
    pub fn value_class(&self) -> ValueClass {
        match self {
            SemanticKind::Date => ValueClass::Date,
            SemanticKind::Time => ValueClass::Time,
            SemanticKind::Timestamp => ValueClass::Timestamp,
            SemanticKind::Number
            | SemanticKind::ProgressBar
            | SemanticKind::Gauge
            | SemanticKind::Knob
            | SemanticKind::Rating => ValueClass::Number,
            SemanticKind::Checkbox => ValueClass::Boolean,
            SemanticKind::Color => ValueClass::Color,
            SemanticKind::ChipList => ValueClass::List,
            SemanticKind::String
            | SemanticKind::Button
            | SemanticKind::ButtonList
            | SemanticKind::Icon
            | SemanticKind::Image
            | SemanticKind::Link
            | SemanticKind::Bar
            | SemanticKind::Radio
            | SemanticKind::Chart
            | SemanticKind::Autocomplete
            | SemanticKind::Combobox
            | SemanticKind::Editor
            | SemanticKind::Search
            | SemanticKind::Configurator
            | SemanticKind::MultipleConfigurator => ValueClass::Text,
        }
    }

    /// Check if this is a date, time or timestamp kind
    pub fn is_temporal(&self) -> bool {
        matches!(
            self.value_class(),
            ValueClass::Date | ValueClass::Time | ValueClass::Timestamp
        )
    }

    /// Check if grids offer an inline editor for this kind
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            SemanticKind::String
                | SemanticKind::Number
                | SemanticKind::Date
                | SemanticKind::Time
                | SemanticKind::Checkbox
                | SemanticKind::Color
                | SemanticKind::Autocomplete
                | SemanticKind::Combobox
                | SemanticKind::Rating
                | SemanticKind::Search
        )
    }
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit per-cell or per-column rendering override.
///
/// Codes are the three-letter strings carried in `shape` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// ACP
    Autocomplete,
    /// BTN
    ButtonList,
    /// GRA
    Chart,
    /// CHK
    Checkbox,
    /// CHI
    Chip,
    /// CLP
    ColorPicker,
    /// CMB
    Combobox,
    /// EDT
    Editor,
    /// GAU
    Gauge,
    /// IMG
    Image,
    /// KNB
    Knob,
    /// PGB
    ProgressBar,
    /// RAD
    Radio,
    /// RTG
    Rating,
    /// ITX
    TextField,
    /// SRC
    Search,
    /// CFG
    Configurator,
    /// CFM
    MultipleConfigurator,
}

impl Shape {
    /// Parse a shape code, ignoring case and surrounding whitespace
    pub fn parse(code: &str) -> Option<Self> {
        let shape = match code.trim().to_ascii_uppercase().as_str() {
            "ACP" => Shape::Autocomplete,
            "BTN" => Shape::ButtonList,
            "GRA" => Shape::Chart,
            "CHK" => Shape::Checkbox,
            "CHI" => Shape::Chip,
            "CLP" => Shape::ColorPicker,
            "CMB" => Shape::Combobox,
            "EDT" => Shape::Editor,
            "GAU" => Shape::Gauge,
            "IMG" => Shape::Image,
            "KNB" => Shape::Knob,
            "PGB" => Shape::ProgressBar,
            "RAD" => Shape::Radio,
            "RTG" => Shape::Rating,
            "ITX" => Shape::TextField,
            "SRC" => Shape::Search,
            "CFG" => Shape::Configurator,
            "CFM" => Shape::MultipleConfigurator,
            _ => return None,
        };
        Some(shape)
    }

    /// The shape's code
    pub fn code(&self) -> &'static str {
        match self {
            Shape::Autocomplete => "ACP",
            Shape::ButtonList => "BTN",
            Shape::Chart => "GRA",
            Shape::Checkbox => "CHK",
            Shape::Chip => "CHI",
            Shape::ColorPicker => "CLP",
            Shape::Combobox => "CMB",
            Shape::Editor => "EDT",
            Shape::Gauge => "GAU",
            Shape::Image => "IMG",
            Shape::Knob => "KNB",
            Shape::ProgressBar => "PGB",
            Shape::Radio => "RAD",
            Shape::Rating => "RTG",
            Shape::TextField => "ITX",
            Shape::Search => "SRC",
            Shape::Configurator => "CFG",
            Shape::MultipleConfigurator => "CFM",
        }
    }

    /// The kind a cell with this shape resolves to
    pub fn kind(&self) -> SemanticKind {
        match self {
            Shape::Autocomplete => SemanticKind::Autocomplete,
            Shape::ButtonList => SemanticKind::ButtonList,
            Shape::Chart => SemanticKind::Chart,
            Shape::Checkbox => SemanticKind::Checkbox,
            Shape::Chip => SemanticKind::ChipList,
            Shape::ColorPicker => SemanticKind::Color,
            Shape::Combobox => SemanticKind::Combobox,
            Shape::Editor => SemanticKind::Editor,
            Shape::Gauge => SemanticKind::Gauge,
            Shape::Image => SemanticKind::Image,
            Shape::Knob => SemanticKind::Knob,
            Shape::ProgressBar => SemanticKind::ProgressBar,
            Shape::Radio => SemanticKind::Radio,
            Shape::Rating => SemanticKind::Rating,
            Shape::TextField => SemanticKind::String,
            Shape::Search => SemanticKind::Search,
            Shape::Configurator => SemanticKind::Configurator,
            Shape::MultipleConfigurator => SemanticKind::MultipleConfigurator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in SemanticKind::ALL {
            assert_eq!(SemanticKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(
            SemanticKind::from_name("PROGRESS_BAR"),
            Some(SemanticKind::ProgressBar)
        );
        assert_eq!(SemanticKind::from_name("spreadsheet"), None);
    }

    #[test]
    fn test_value_classes() {
        assert_eq!(SemanticKind::Number.value_class(), ValueClass::Number);
        assert_eq!(SemanticKind::ProgressBar.value_class(), ValueClass::Number);
        assert_eq!(SemanticKind::Checkbox.value_class(), ValueClass::Boolean);
        assert_eq!(SemanticKind::ChipList.value_class(), ValueClass::List);
        assert_eq!(SemanticKind::Icon.value_class(), ValueClass::Text);
        assert!(SemanticKind::Timestamp.is_temporal());
        assert!(!SemanticKind::Number.is_temporal());
    }

    #[test]
    fn test_shape_parse() {
        assert_eq!(Shape::parse("pgb"), Some(Shape::ProgressBar));
        assert_eq!(Shape::parse(" CLP "), Some(Shape::ColorPicker));
        assert_eq!(Shape::parse("src"), Some(Shape::Search));
        assert_eq!(Shape::parse("XYZ"), None);
        assert_eq!(Shape::parse(""), None);
    }

    #[test]
    fn test_shape_codes_round_trip() {
        let shapes = [
            Shape::Autocomplete,
            Shape::ButtonList,
            Shape::Chart,
            Shape::Checkbox,
            Shape::Chip,
            Shape::ColorPicker,
            Shape::Combobox,
            Shape::Editor,
            Shape::Gauge,
            Shape::Image,
            Shape::Knob,
            Shape::ProgressBar,
            Shape::Radio,
            Shape::Rating,
            Shape::TextField,
            Shape::Search,
            Shape::Configurator,
            Shape::MultipleConfigurator,
        ];
        for shape in shapes {
            assert_eq!(Shape::parse(shape.code()), Some(shape));
        }
        assert_eq!(Shape::TextField.kind(), SemanticKind::String);
        assert_eq!(Shape::Chip.kind(), SemanticKind::ChipList);
        assert_eq!(Shape::Configurator.kind(), SemanticKind::Configurator);
        assert_eq!(
            Shape::parse("CFM").map(|s| s.kind()),
            Some(SemanticKind::MultipleConfigurator)
        );
    }
}
