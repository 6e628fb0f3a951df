//! Operations over an already-loaded collection.

use crate::core::{Item, NewItem};
use uuid::Uuid;

/// Fresh opaque identifier for a new item.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// First item whose id reads as `id`. String ids compare as opaque text;
/// numeric ids stored by hand compare by their decimal form.
pub fn find_by_id<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.has_id(id))
}

/// Assigns a generated id to `new_item`, appends it and returns the stored record.
pub fn append_new(items: &mut Vec<Item>, new_item: NewItem) -> Item {
    let item = Item::from_new(generate_id(), new_item);
    items.push(item.clone());
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(items: serde_json::Value) -> Vec<Item> {
        serde_json::from_value(items).expect("items")
    }

    #[test]
    fn find_returns_first_match() {
        let items = decode(json!([
            {"id": "a", "name": "alpha"},
            {"id": "dup", "name": "first"},
            {"id": "dup", "name": "second", "rank": 2}
        ]));

        let found = find_by_id(&items, "dup").expect("present");
        assert_eq!(found.name(), Some("first"));
        assert!(find_by_id(&items, "missing").is_none());
    }

    #[test]
    fn numeric_ids_are_reachable_from_path_text() {
        let items = decode(json!([{"id": "42", "name": "text"}, {"id": 7, "name": "number"}]));
        assert_eq!(find_by_id(&items, "42").and_then(Item::name), Some("text"));
        assert_eq!(find_by_id(&items, "7").and_then(Item::name), Some("number"));
        assert!(find_by_id(&items, "042").is_none());
    }

    #[test]
    fn append_new_adds_to_the_end_with_generated_id() {
        let mut items = vec![Item::new("a", "alpha")];
        let payload: NewItem =
            serde_json::from_value(json!({"id": "client", "name": "Widget"})).expect("payload");

        let created = append_new(&mut items, payload);

        assert_eq!(items.len(), 2);
        assert_eq!(items.last(), Some(&created));
        let id = created.id_text().expect("generated id");
        assert_ne!(id, "client");
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids = (0..256).map(|_| generate_id()).collect::<std::collections::HashSet<_>>();
        assert_eq!(ids.len(), 256);
    }
}
