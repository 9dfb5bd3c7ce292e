// ABOUTME: Collection queries that apply a conjunction of filters to sequences and mappings
// ABOUTME: filter selects matching elements, first_match finds a single matching element

use super::predicate::{all_match, Filter};
use crate::value::{Mapping, Result, Value, ValueError};

/// Select the elements of a sequence, or the entries of a mapping, that satisfy
/// every filter. Sequences keep their order; the input is never modified.
pub fn filter(collection: &Value, filters: &[Filter]) -> Result<Value> {
    match collection {
        Value::Sequence(items) => {
            let mut selected = Vec::with_capacity(items.len());
            for item in items {
                if all_match(filters, item)? {
                    selected.push(item.clone());
                }
            }
            Ok(Value::Sequence(selected))
        }
        Value::Mapping(map) => {
            let mut selected = Mapping::new();
            for (key, value) in map {
                if all_match(filters, value)? {
                    selected.insert(key.clone(), value.clone());
                }
            }
            Ok(Value::Mapping(selected))
        }
        other => Err(ValueError::UnsupportedType {
            found: other.kind(),
        }),
    }
}

/// Find an element satisfying every filter, or [`Value::Absent`] if none does.
///
/// Sequences are searched left to right. For mappings any matching value may be
/// returned when several match.
pub fn first_match(collection: &Value, filters: &[Filter]) -> Result<Value> {
    match collection {
        Value::Sequence(items) => find(items.iter(), filters),
        Value::Mapping(map) => find(map.values(), filters),
        other => Err(ValueError::UnsupportedType {
            found: other.kind(),
        }),
    }
}

fn find<'a>(candidates: impl Iterator<Item = &'a Value>, filters: &[Filter]) -> Result<Value> {
    for candidate in candidates {
        if all_match(filters, candidate)? {
            return Ok(candidate.clone());
        }
    }
    Ok(Value::Absent)
}
