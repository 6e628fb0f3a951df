use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Ordered sequence of items; the unit of read/write against a store.
pub type Collection = Vec<Item>;

/// A persisted record.
///
/// Records are untyped beyond being JSON objects. `id` and `name` are read
/// out of the object on demand, so a stored record with a numeric id or a
/// non-string name still loads and is written back exactly as found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, JsonValue>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), JsonValue::String(id.into()));
        fields.insert("name".to_string(), JsonValue::String(name.into()));
        Self { fields }
    }

    /// Builds an item from a create payload under the given id.
    ///
    /// `id` comes first; a client-supplied `id` is dropped and every other
    /// field keeps its value and position.
    pub fn from_new(id: impl Into<String>, new_item: NewItem) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), JsonValue::String(id.into()));
        fields.extend(
            new_item
                .fields
                .into_iter()
                .filter(|(key, _)| key != "id"),
        );
        Self { fields }
    }

    pub fn id(&self) -> Option<&JsonValue> {
        self.fields.get("id")
    }

    /// The id as path text: strings verbatim, numbers in their JSON form.
    pub fn id_text(&self) -> Option<String> {
        match self.id()? {
            JsonValue::String(id) => Some(id.clone()),
            JsonValue::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        match self.id() {
            Some(JsonValue::String(stored)) => stored == id,
            Some(JsonValue::Number(stored)) => stored.to_string() == id,
            _ => false,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(JsonValue::as_str)
    }
}

/// Create payload: any JSON object, carried verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NewItem {
    fields: Map<String, JsonValue>,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), JsonValue::String(name.into()));
        Self { fields }
    }
}
