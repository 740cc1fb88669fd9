//! Object classifier
//!
//! Maps an [`ObjectTag`] to a [`SemanticKind`] through a single ordered rule
//! table. The first matching rule wins; several rules overlap (every `J4`
//! marker shares a `t`), so the order of [`RULES`] is part of the contract.

use tagcell_core::{ObjectTag, SemanticKind};

/// Version of the `(t, p)` vocabulary recognized by [`classify`].
///
/// Adding, removing or reordering a rule changes how existing data renders
/// and must bump this number.
pub const VOCABULARY_VERSION: u32 = 1;

/// A classification predicate over a validated tag
pub type Predicate = fn(&ObjectTag) -> bool;

/// Ordered classification table, first match wins
pub const RULES: &[(SemanticKind, Predicate)] = &[
    (SemanticKind::Button, is_button),
    (SemanticKind::Icon, is_icon),
    (SemanticKind::Image, is_image),
    (SemanticKind::Date, is_date),
    (SemanticKind::Time, is_time),
    (SemanticKind::Timestamp, is_timestamp),
    (SemanticKind::Number, is_number),
    (SemanticKind::Bar, is_bar),
    (SemanticKind::Chart, is_chart),
    (SemanticKind::Checkbox, is_checkbox),
    (SemanticKind::Color, is_color),
    (SemanticKind::Link, is_link),
    (SemanticKind::ProgressBar, is_progress_bar),
    (SemanticKind::Radio, is_radio),
    (SemanticKind::ChipList, is_object_list),
    (SemanticKind::Icon, is_vo_cod_ver),
];

/// Classify a tag. Absent, untyped, malformed and unknown tags are all
/// [`SemanticKind::String`].
pub fn classify(tag: Option<&ObjectTag>) -> SemanticKind {
    let Some(tag) = tag else {
        return SemanticKind::String;
    };
    if tag.is_untyped() {
        return SemanticKind::String;
    }
    if let Err(e) = tag.validate() {
        tracing::debug!("Classifying malformed tag as string: {e}");
        return SemanticKind::String;
    }

    RULES
        .iter()
        .find(|(_, matches)| matches(tag))
        .map(|(kind, _)| *kind)
        .unwrap_or(SemanticKind::String)
}

fn is_marker(tag: &ObjectTag, p: &str) -> bool {
    tag.t == "J4" && tag.p == p
}

pub fn is_button(tag: &ObjectTag) -> bool {
    is_marker(tag, "BTN")
}

pub fn is_icon(tag: &ObjectTag) -> bool {
    is_marker(tag, "ICO")
}

pub fn is_image(tag: &ObjectTag) -> bool {
    is_marker(tag, "IMG")
}

pub fn is_bar(tag: &ObjectTag) -> bool {
    is_marker(tag, "BAR")
}

pub fn is_chart(tag: &ObjectTag) -> bool {
    is_marker(tag, "GRA")
}

pub fn is_progress_bar(tag: &ObjectTag) -> bool {
    is_marker(tag, "PGB")
}

pub fn is_date(tag: &ObjectTag) -> bool {
    tag.t == "D8"
}

pub fn is_time(tag: &ObjectTag) -> bool {
    tag.t == "I1" || tag.t == "I2"
}

/// `I3` alone is not a timestamp; only `I3/2` is
pub fn is_timestamp(tag: &ObjectTag) -> bool {
    tag.t == "I3" && tag.p == "2"
}

pub fn is_number(tag: &ObjectTag) -> bool {
    tag.t == "NR" || tag.t == "NP"
}

pub fn is_checkbox(tag: &ObjectTag) -> bool {
    tag.t == "V2" && tag.p.eq_ignore_ascii_case("SI/NO")
}

pub fn is_color(tag: &ObjectTag) -> bool {
    tag.t == "J1" && tag.p == "COL"
}

pub fn is_link(tag: &ObjectTag) -> bool {
    tag.t == "J1" && tag.p == "URL"
}

pub fn is_radio(tag: &ObjectTag) -> bool {
    tag.t == "V3" && tag.p == "RAD"
}

/// Object lists render as chips
pub fn is_object_list(tag: &ObjectTag) -> bool {
    tag.t == "JL"
}

pub fn is_vo_cod_ver(tag: &ObjectTag) -> bool {
    tag.t == "VO" && tag.p == "COD_VER"
}

/// Check if a kind is a numeric-ish kind whose `k` is a number
pub fn is_numeric_kind(kind: SemanticKind) -> bool {
    kind.value_class() == tagcell_core::ValueClass::Number
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kind(t: &str, p: &str) -> SemanticKind {
        classify(Some(&ObjectTag::typed(t, p)))
    }

    #[test]
    fn test_vocabulary() {
        let table = [
            ("J4", "BTN", SemanticKind::Button),
            ("J4", "ICO", SemanticKind::Icon),
            ("J4", "IMG", SemanticKind::Image),
            ("D8", "*YYMD", SemanticKind::Date),
            ("D8", "", SemanticKind::Date),
            ("I1", "", SemanticKind::Time),
            ("I2", "H:M", SemanticKind::Time),
            ("I3", "2", SemanticKind::Timestamp),
            ("NR", "", SemanticKind::Number),
            ("NP", "2", SemanticKind::Number),
            ("J4", "BAR", SemanticKind::Bar),
            ("J4", "GRA", SemanticKind::Chart),
            ("V2", "SI/NO", SemanticKind::Checkbox),
            ("V2", "si/no", SemanticKind::Checkbox),
            ("J1", "COL", SemanticKind::Color),
            ("J1", "URL", SemanticKind::Link),
            ("J4", "PGB", SemanticKind::ProgressBar),
            ("V3", "RAD", SemanticKind::Radio),
            ("JL", "", SemanticKind::ChipList),
            ("VO", "COD_VER", SemanticKind::Icon),
        ];
        for (t, p, expected) in table {
            assert_eq!(kind(t, p), expected, "{t}/{p}");
        }
    }

    #[test]
    fn test_compound_conditions() {
        assert_eq!(kind("I3", "2"), SemanticKind::Timestamp);
        assert_eq!(kind("I3", "1"), SemanticKind::String);
        assert_eq!(kind("I3", ""), SemanticKind::String);
        assert_eq!(kind("J4", "XYZ"), SemanticKind::String);
        assert_eq!(kind("V2", "ON/OFF"), SemanticKind::String);
        assert_eq!(kind("VO", ""), SemanticKind::String);
    }

    #[test]
    fn test_absent_and_invalid_tags() {
        assert_eq!(classify(None), SemanticKind::String);
        assert_eq!(kind("", ""), SemanticKind::String);
        assert_eq!(kind("D8XXX", "*YYMD"), SemanticKind::String);
        assert_eq!(kind("D8", "*YY MD"), SemanticKind::String);
        assert_eq!(kind("d8", ""), SemanticKind::String);
    }

    #[test]
    fn test_rules_are_unique_in_order() {
        // Each predicate claims at least one tag that no earlier rule claims
        let samples = [
            ("J4", "BTN"),
            ("J4", "ICO"),
            ("J4", "IMG"),
            ("D8", ""),
            ("I1", ""),
            ("I3", "2"),
            ("NR", ""),
            ("J4", "BAR"),
            ("J4", "GRA"),
            ("V2", "SI/NO"),
            ("J1", "COL"),
            ("J1", "URL"),
            ("J4", "PGB"),
            ("V3", "RAD"),
            ("JL", ""),
            ("VO", "COD_VER"),
        ];
        assert_eq!(samples.len(), RULES.len());
        for (index, (t, p)) in samples.iter().enumerate() {
            let tag = ObjectTag::typed(*t, *p);
            let first = RULES.iter().position(|(_, m)| m(&tag));
            assert_eq!(first, Some(index), "{t}/{p}");
        }
    }

    #[test]
    fn test_numeric_kinds() {
        assert!(is_numeric_kind(SemanticKind::Number));
        assert!(is_numeric_kind(SemanticKind::ProgressBar));
        assert!(!is_numeric_kind(SemanticKind::Date));
    }
}
