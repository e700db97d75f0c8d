//! Typed attribute maps for nodes and edges.
//!
//! Attributes are opaque string-keyed scalars. Three keys carry meaning for
//! the analysis passes:
//!
//! | Key | On | Used by |
//! |-----|----|---------|
//! | [`keys::CLUB`] | node | homophily (preferred grouping) |
//! | [`keys::COLOR`] | node | homophily (fallback grouping) |
//! | [`keys::SIGN`] | edge | structural balance (`"+"` / `"-"`, default `"+"`) |
//!
//! Every other key is carried through untouched.

use std::collections::BTreeMap;
use std::fmt;

/// Well-known attribute keys.
pub mod keys {
    /// Node grouping attribute, preferred for homophily.
    pub const CLUB: &str = "club";
    /// Node grouping attribute, homophily fallback.
    pub const COLOR: &str = "color";
    /// Edge sign attribute.
    pub const SIGN: &str = "sign";
}

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
}

impl AttrValue {
    /// Text content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => write!(f, "{s}"),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

/// Sign of an edge in a signed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `"+"`
    Positive,
    /// `"-"`
    Negative,
}

impl Sign {
    /// Parse a sign attribute. Only the strings `"+"` and `"-"` are signs.
    pub fn from_attr(value: &AttrValue) -> Option<Self> {
        match value.as_str()? {
            "+" => Some(Sign::Positive),
            "-" => Some(Sign::Negative),
            _ => None,
        }
    }

    /// `+1` or `-1`.
    pub fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

/// String-keyed attribute map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: BTreeMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let _ = self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    /// Copy every entry of `other` into `self`, overwriting on collision.
    pub fn merge(&mut self, other: Attributes) {
        self.entries.extend(other.entries);
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `club` attribute.
    pub fn club(&self) -> Option<&AttrValue> {
        self.get(keys::CLUB)
    }

    /// The `color` attribute.
    pub fn color(&self) -> Option<&AttrValue> {
        self.get(keys::COLOR)
    }

    /// The edge sign.
    ///
    /// A missing `sign` reads as [`Sign::Positive`]. A present but
    /// unrecognized value comes back as `Err` with the raw value.
    pub fn sign(&self) -> std::result::Result<Sign, &AttrValue> {
        match self.get(keys::SIGN) {
            None => Ok(Sign::Positive),
            Some(v) => Sign::from_attr(v).ok_or(v),
        }
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, unused_results)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_defaults_to_positive() {
        let attrs = Attributes::new();
        assert_eq!(attrs.sign(), Ok(Sign::Positive));
    }

    #[test]
    fn test_sign_parsing() {
        assert_eq!(Attributes::new().with("sign", "-").sign(), Ok(Sign::Negative));
        assert_eq!(Attributes::new().with("sign", "+").sign(), Ok(Sign::Positive));

        let odd = Attributes::new().with("sign", "?");
        assert_eq!(odd.sign(), Err(&AttrValue::Str("?".into())));

        // Numeric signs are not recognized
        let numeric = Attributes::new().with("sign", 1i64);
        assert!(numeric.sign().is_err());
    }

    #[test]
    fn test_merge_overwrites() {
        let mut a = Attributes::new().with("club", "Mr. Hi").with("weight", 2i64);
        a.merge(Attributes::new().with("club", "Officer"));

        assert_eq!(a.len(), 2);
        assert_eq!(a.club().and_then(AttrValue::as_str), Some("Officer"));
        assert_eq!(a.get("weight"), Some(&AttrValue::Int(2)));
    }

    #[test]
    fn test_from_iterator() {
        let attrs: Attributes = [("color", "red"), ("shape", "box")].into_iter().collect();
        assert_eq!(attrs.color(), Some(&AttrValue::from("red")));
        assert!(attrs.contains_key("shape"));
    }

    #[test]
    fn test_remove_and_iterate() {
        let mut attrs = Attributes::new().with("sign", "-").with("club", "x");
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["club", "sign"]);

        assert_eq!(attrs.remove("sign"), Some(AttrValue::from("-")));
        assert_eq!(attrs.remove("sign"), None);
        assert_eq!(attrs.sign(), Ok(Sign::Positive));

        attrs.remove("club");
        assert!(attrs.is_empty());
    }
}
