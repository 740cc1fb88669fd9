//! Object tags

use std::fmt;

use crate::error::{Error, Result};
use crate::{MAX_TAG_PARAM_LEN, MAX_TAG_TYPE_LEN};

/// The type descriptor attached to a cell value.
///
/// `t` is the primary type code (`D8` date, `NR` number, `J4` UI marker, ...),
/// `p` qualifies it (`BTN`, `ICO`, a date pattern such as `*YYMD`, ...) and
/// `k` carries the machine value in canonical, locale-independent form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectTag {
    /// Primary type code
    #[cfg_attr(feature = "serde", serde(default))]
    pub t: String,
    /// Secondary qualifier
    #[cfg_attr(feature = "serde", serde(default))]
    pub p: String,
    /// Canonical key/value payload
    #[cfg_attr(feature = "serde", serde(default))]
    pub k: String,
}

impl ObjectTag {
    /// Create a tag with a value
    pub fn new<T, P, K>(t: T, p: P, k: K) -> Self
    where
        T: Into<String>,
        P: Into<String>,
        K: Into<String>,
    {
        Self {
            t: t.into(),
            p: p.into(),
            k: k.into(),
        }
    }

    /// Create a tag template without a value (e.g. a column default)
    pub fn typed<T: Into<String>, P: Into<String>>(t: T, p: P) -> Self {
        Self::new(t, p, "")
    }

    /// Copy of this tag carrying another value
    pub fn with_k<K: Into<String>>(&self, k: K) -> Self {
        Self {
            t: self.t.clone(),
            p: self.p.clone(),
            k: k.into(),
        }
    }

    /// Check if the tag carries no type code
    pub fn is_untyped(&self) -> bool {
        self.t.is_empty()
    }

    /// Check the tag's shape.
    ///
    /// `t` must be at most [`MAX_TAG_TYPE_LEN`] ASCII alphanumerics (empty means
    /// untyped), `p` at most [`MAX_TAG_PARAM_LEN`] characters with no whitespace
    /// or control characters. `k` is free-form.
    pub fn validate(&self) -> Result<()> {
        if self.t.len() > MAX_TAG_TYPE_LEN || !self.t.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidObjectTag(format!("bad type code {:?}", self.t)));
        }
        if self.p.chars().count() > MAX_TAG_PARAM_LEN
            || self.p.chars().any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(Error::InvalidObjectTag(format!(
                "bad parameter {:?} for type {:?}",
                self.p, self.t
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ObjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.t, self.p, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_vocabulary() {
        assert!(ObjectTag::new("D8", "*YYMD", "2022-06-04").validate().is_ok());
        assert!(ObjectTag::typed("V2", "SI/NO").validate().is_ok());
        assert!(ObjectTag::typed("VO", "COD_VER").validate().is_ok());
        assert!(ObjectTag::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed() {
        assert!(ObjectTag::typed("D 8", "").validate().is_err());
        assert!(ObjectTag::typed("TOOLONG", "").validate().is_err());
        assert!(ObjectTag::typed("J4", "B T N").validate().is_err());
        assert!(ObjectTag::typed("J4", "BTN\n").validate().is_err());
    }

    #[test]
    fn test_with_k_keeps_type() {
        let template = ObjectTag::typed("NR", "");
        let tag = template.with_k("12.5");
        assert_eq!(tag.t, "NR");
        assert_eq!(tag.k, "12.5");
        assert!(template.k.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(ObjectTag::new("I3", "2", "x").to_string(), "I3;2;x");
    }
}
