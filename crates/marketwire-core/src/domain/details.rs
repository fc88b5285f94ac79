use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat reference-data record. Nested objects from the API are folded into
/// dot-joined keys (`address.city`); arrays and scalars are kept verbatim.
///
/// When a literal dotted key collides with a flattened path, the value seen
/// first in the object's key order is kept and a warning is logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerDetails {
    fields: BTreeMap<String, Value>,
}

impl TickerDetails {
    /// Flattens a JSON object into a record.
    pub fn from_object(object: Map<String, Value>) -> Self {
        let mut fields = BTreeMap::new();
        flatten_into(&mut fields, None, object);
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn ticker(&self) -> Option<&str> {
        self.get_str("ticker")
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    pub fn market(&self) -> Option<&str> {
        self.get_str("market")
    }

    pub fn primary_exchange(&self) -> Option<&str> {
        self.get_str("primary_exchange")
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.fields
    }
}

fn flatten_into(
    out: &mut BTreeMap<String, Value>,
    prefix: Option<&str>,
    object: Map<String, Value>,
) {
    for (key, value) in object {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };

        match value {
            // empty objects are kept so the key is not lost
            Value::Object(nested) if !nested.is_empty() => flatten_into(out, Some(&path), nested),
            other => {
                if out.contains_key(&path) {
                    log::warn!("duplicate ticker details key '{path}'; keeping the first value");
                } else {
                    out.insert(path, other);
                }
            }
        }
    }
}
