//! Entity tuples and their canonical identity keys.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;
use smallvec::SmallVec;

/// Qualifier list. Most knowledge entities carry zero to a few qualifiers.
pub type Qualifiers = SmallVec<[String; 4]>;

/// A compound anatomical identifier: a primary entity plus an ordered list
/// of qualifying sub-entities (e.g. `["UBERON:0001759", ["ILX:0793559"]]`).
///
/// On the wire this is the JSON pair `[id, [qualifier, ...]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityTuple {
    pub id: String,
    pub qualifiers: Qualifiers,
}

impl EntityTuple {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), qualifiers: Qualifiers::new() }
    }

    pub fn with_qualifiers(mut self, qualifiers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.qualifiers = qualifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Canonical identity: the compact JSON text of `[id, [qualifiers...]]`.
    ///
    /// Two tuples share a key iff their id and qualifier sequence are equal.
    pub fn key(&self) -> NodeKey {
        let qualifiers = self.qualifiers.iter().cloned().map(Json::String).collect();
        let pair = Json::Array(vec![Json::String(self.id.clone()), Json::Array(qualifiers)]);
        NodeKey(pair.to_string())
    }

    /// Display label: the id followed by each qualifier, one per line.
    pub fn label(&self) -> String {
        let mut label = self.id.clone();
        for qualifier in &self.qualifiers {
            label.push('\n');
            label.push_str(qualifier);
        }
        label
    }
}

impl Serialize for EntityTuple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.id, &self.qualifiers).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EntityTuple {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (id, qualifiers) = <(String, Qualifiers)>::deserialize(deserializer)?;
        Ok(Self { id, qualifiers })
    }
}

/// Node identity key: the canonical serialization of an [`EntityTuple`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&EntityTuple> for NodeKey {
    fn from(tuple: &EntityTuple) -> Self {
        tuple.key()
    }
}

impl AsRef<str> for NodeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_json_text() {
        let t = EntityTuple::new("UBERON:0001759").with_qualifiers(["ILX:0793559"]);
        assert_eq!(t.key(), r#"["UBERON:0001759",["ILX:0793559"]]"#);
        assert_eq!(EntityTuple::new("A").key(), r#"["A",[]]"#);
    }

    #[test]
    fn test_key_escapes_quotes() {
        let t = EntityTuple::new("a\"b");
        assert_eq!(t.key(), r#"["a\"b",[]]"#);
    }

    #[test]
    fn test_key_is_order_sensitive() {
        let ab = EntityTuple::new("X").with_qualifiers(["a", "b"]);
        let ba = EntityTuple::new("X").with_qualifiers(["b", "a"]);
        assert_ne!(ab.key(), ba.key());
    }

    #[test]
    fn test_label() {
        let t = EntityTuple::new("X").with_qualifiers(["a", "b"]);
        assert_eq!(t.label(), "X\na\nb");
        assert_eq!(EntityTuple::new("X").label(), "X");
    }

    #[test]
    fn test_wire_shape() {
        let t: EntityTuple = serde_json::from_str(r#"["X", ["a", "b"]]"#).unwrap();
        assert_eq!(t, EntityTuple::new("X").with_qualifiers(["a", "b"]));
        assert_eq!(serde_json::to_string(&t).unwrap(), t.key().as_str());
    }

    #[test]
    fn test_rejects_non_pair() {
        assert!(serde_json::from_str::<EntityTuple>(r#""X""#).is_err());
        assert!(serde_json::from_str::<EntityTuple>(r#"["X"]"#).is_err());
    }
}
