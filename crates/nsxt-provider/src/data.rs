// ── Resource attribute tree ──
//
// Holds the attribute values of one resource as handed over by the host
// engine. Reads decode an attribute into typed records exactly once; writes
// encode typed records back into the tree for the engine to persist.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::ProviderError;

/// Attribute tree of one resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    attrs: Map<String, Value>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object; any other value is rejected.
    pub fn from_value(value: Value) -> Result<Self, ProviderError> {
        match value {
            Value::Object(attrs) => Ok(Self { attrs }),
            other => Err(ProviderError::InvalidRoot {
                found: other.to_string(),
            }),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.attrs)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.attrs
    }

    /// Raw attribute value, `None` when unset.
    pub fn get_raw(&self, attr: &str) -> Option<&Value> {
        self.attrs.get(attr).filter(|v| !v.is_null())
    }

    /// Decode a single-valued attribute. Unset decodes as `None`.
    pub fn get<T: DeserializeOwned>(&self, attr: &str) -> Result<Option<T>, ProviderError> {
        self.get_raw(attr)
            .map(|v| T::deserialize(v).map_err(|e| ProviderError::decode(attr, &e)))
            .transpose()
    }

    /// Decode an ordered collection attribute. Unset decodes as empty.
    pub fn get_list<T: DeserializeOwned>(&self, attr: &str) -> Result<Vec<T>, ProviderError> {
        Ok(self.get(attr)?.unwrap_or_default())
    }

    /// Decode an unordered collection attribute.
    ///
    /// Duplicate elements collapse to their first occurrence, as the host
    /// engine's set type would.
    pub fn get_set<T>(&self, attr: &str) -> Result<Vec<T>, ProviderError>
    where
        T: DeserializeOwned + PartialEq,
    {
        let items: Vec<T> = self.get_list(attr)?;
        let total = items.len();
        let mut unique = Vec::with_capacity(total);
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        if unique.len() != total {
            trace!(attr, dropped = total - unique.len(), "collapsed duplicate set elements");
        }
        Ok(unique)
    }

    /// Store an attribute value.
    pub fn set<T: Serialize + ?Sized>(&mut self, attr: &str, value: &T) -> Result<(), ProviderError> {
        let encoded = serde_json::to_value(value).map_err(|e| ProviderError::Encode {
            attribute: attr.to_owned(),
            message: e.to_string(),
        })?;
        self.attrs.insert(attr.to_owned(), encoded);
        Ok(())
    }
}

impl TryFrom<Value> for ResourceData {
    type Error = ProviderError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::TagAttr;

    #[test]
    fn root_must_be_object() {
        assert!(matches!(
            ResourceData::from_value(json!([1, 2])),
            Err(ProviderError::InvalidRoot { .. })
        ));
    }

    #[test]
    fn unset_and_null_collections_are_empty() {
        let d = ResourceData::from_value(json!({"tag": null})).unwrap();
        assert!(d.get_list::<TagAttr>("tag").unwrap().is_empty());
        assert!(d.get_set::<TagAttr>("missing").unwrap().is_empty());
    }

    #[test]
    fn set_collapses_duplicates_keeping_order() {
        let d = ResourceData::from_value(json!({
            "tag": [
                {"scope": "a", "tag": "1"},
                {"scope": "b", "tag": "2"},
                {"scope": "a", "tag": "1"}
            ]
        }))
        .unwrap();

        let tags: Vec<TagAttr> = d.get_set("tag").unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].scope, "a");
        assert_eq!(tags[1].scope, "b");
    }

    #[test]
    fn shape_mismatch_names_attribute() {
        let d = ResourceData::from_value(json!({"tag": "oops"})).unwrap();
        match d.get_list::<TagAttr>("tag") {
            Err(ProviderError::Decode { attribute, .. }) => assert_eq!(attribute, "tag"),
            other => panic!("expected Decode error, got: {other:?}"),
        }
    }

    #[test]
    fn set_then_get_raw() {
        let mut d = ResourceData::new();
        d.set("display_name", "ls-web").unwrap();
        assert_eq!(d.get_raw("display_name"), Some(&json!("ls-web")));
        assert_eq!(d.into_value(), json!({"display_name": "ls-web"}));
    }
}
