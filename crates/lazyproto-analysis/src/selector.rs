//! Lazy-candidate selection: joins source usage against the schema.

use std::collections::{BTreeMap, BTreeSet};

use lazyproto_core::events::{FieldDecisionEvent, LazyEventHandler};
use lazyproto_core::types::collections::FxHashSet;

use crate::schema::SchemaModel;

/// Message name → field names to annotate. Sorted, so annotation and reports
/// are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LazyCandidates {
    by_message: BTreeMap<String, BTreeSet<String>>,
}

impl LazyCandidates {
    pub fn insert(&mut self, message: &str, field: &str) {
        self.by_message
            .entry(message.to_string())
            .or_default()
            .insert(field.to_string());
    }

    pub fn fields(&self, message: &str) -> Option<&BTreeSet<String>> {
        self.by_message.get(message)
    }

    pub fn total(&self) -> usize {
        self.by_message.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_message.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.by_message.iter()
    }
}

/// `lower_snake` → `PascalCase`, the way accessor names are generated:
/// each `_`-separated segment gets an upper-case first letter and a
/// lower-cased remainder.
pub fn snake_to_pascal(name: &str) -> String {
    name.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Used types that are not enums, i.e. the messages worth inspecting.
pub fn filter_enum_types(used_types: &BTreeSet<String>, schema: &SchemaModel) -> BTreeSet<String> {
    used_types
        .iter()
        .filter(|name| !schema.is_enum(name))
        .cloned()
        .collect()
}

/// Selects every field of a used message whose accessor is never called.
///
/// Types absent from the schema are skipped without complaint; the naming
/// heuristic lets some external types through.
pub fn select_candidates(
    used_types: &BTreeSet<String>,
    schema: &SchemaModel,
    used_getters: &FxHashSet<String>,
    handler: &dyn LazyEventHandler,
) -> LazyCandidates {
    let mut candidates = LazyCandidates::default();

    for message in filter_enum_types(used_types, schema) {
        let Some(fields) = schema.fields(&message) else {
            tracing::trace!(%message, "referenced type not declared in schema");
            continue;
        };

        for field in fields {
            let used = used_getters.contains(&snake_to_pascal(&field.name));
            handler.on_field_decision(&FieldDecisionEvent {
                message: message.clone(),
                field: field.name.clone(),
                field_type: field.declared_type.clone(),
                used,
            });
            if !used {
                candidates.insert(&message, &field.name);
            }
        }
    }

    tracing::info!(
        total = candidates.total(),
        messages = candidates.by_message.len(),
        "lazy candidates selected"
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_to_pascal() {
        assert_eq!(snake_to_pascal("header"), "Header");
        assert_eq!(snake_to_pascal("s2_cell_id"), "S2CellId");
        assert_eq!(snake_to_pascal("pokemon_display"), "PokemonDisplay");
        assert_eq!(snake_to_pascal("_private"), "Private");
        assert_eq!(snake_to_pascal("a__b"), "AB");
        assert_eq!(snake_to_pascal("eTag_value"), "EtagValue");
    }

    #[test]
    fn test_candidates_total_and_order() {
        let mut candidates = LazyCandidates::default();
        candidates.insert("B", "y");
        candidates.insert("A", "x");
        candidates.insert("A", "x");
        candidates.insert("A", "w");
        assert_eq!(candidates.total(), 3);
        let messages: Vec<&String> = candidates.iter().map(|(m, _)| m).collect();
        assert_eq!(messages, vec!["A", "B"]);
    }
}
