//! Column types

use crate::object::ObjectTag;

/// Column metadata shared by all cells in a vertical slice.
///
/// `obj` and `shape` are fallbacks: they only apply to cells that carry
/// neither of their own.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Column {
    /// Column key, used by rows to address cells
    pub name: String,
    /// Header text
    pub title: String,
    /// Default object tag template
    pub obj: Option<ObjectTag>,
    /// Default icon resource
    pub icon: Option<String>,
    /// Default shape override code
    pub shape: Option<String>,
    /// Fixed number of decimals for numeric cells (None = infer from value)
    pub decimals: Option<u32>,
    /// Numeric subtype code (`P`, `VE`, `VL`, `VV`)
    pub number_type: Option<String>,
}

impl Column {
    /// Create a new column with default settings
    pub fn new<N: Into<String>, T: Into<String>>(name: N, title: T) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the default object tag
    pub fn with_obj(mut self, obj: ObjectTag) -> Self {
        self.obj = Some(obj);
        self
    }

    /// Set the default shape
    pub fn with_shape<S: Into<String>>(mut self, shape: S) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Set the default icon
    pub fn with_icon<S: Into<String>>(mut self, icon: S) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set fixed decimals
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Set the numeric subtype code
    pub fn with_number_type<S: Into<String>>(mut self, code: S) -> Self {
        self.number_type = Some(code.into());
        self
    }

    /// Title if set, otherwise the name
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let col = Column::new("AMOUNT", "Amount")
            .with_obj(ObjectTag::typed("NR", ""))
            .with_decimals(2)
            .with_number_type("VE");
        assert_eq!(col.decimals, Some(2));
        assert_eq!(col.number_type.as_deref(), Some("VE"));
        assert_eq!(col.obj.as_ref().map(|o| o.t.as_str()), Some("NR"));
        assert!(col.shape.is_none());
    }

    #[test]
    fn test_label_falls_back_to_name() {
        assert_eq!(Column::new("CODE", "").label(), "CODE");
        assert_eq!(Column::new("CODE", "Code").label(), "Code");
    }
}
