// ABOUTME: Ad hoc sequence and mapping construction used while rendering
// ABOUTME: Only set_mapping mutates its input; every other builder returns a new collection

use super::error::{Result, ValueError};
use super::{Mapping, Sequence, Value};

/// New sequence holding the values in order.
pub fn make_sequence(values: Vec<Value>) -> Sequence {
    values
}

/// New sequence equal to `sequence` followed by `values`.
pub fn append_values(sequence: &[Value], values: Vec<Value>) -> Sequence {
    let mut appended = Vec::with_capacity(sequence.len() + values.len());
    appended.extend_from_slice(sequence);
    appended.extend(values);
    appended
}

/// Build a mapping from a flattened `key, value, ...` list.
///
/// Later duplicate keys overwrite earlier ones.
pub fn make_mapping(pairs: Vec<Value>) -> Result<Mapping> {
    let mut mapping = Mapping::with_capacity(pairs.len() / 2);
    set_mapping(&mut mapping, pairs)?;
    Ok(mapping)
}

/// Insert a flattened `key, value, ...` list into `mapping` in place.
///
/// The whole list is validated before anything is inserted.
pub fn set_mapping(mapping: &mut Mapping, pairs: Vec<Value>) -> Result<&mut Mapping> {
    let entries = into_entries(pairs)?;
    mapping.extend(entries);
    Ok(mapping)
}

fn into_entries(pairs: Vec<Value>) -> Result<Vec<(String, Value)>> {
    if pairs.len() % 2 != 0 {
        return Err(ValueError::Arity { count: pairs.len() });
    }

    let mut entries = Vec::with_capacity(pairs.len() / 2);
    let mut iter = pairs.into_iter().enumerate();
    while let (Some((position, key)), Some((_, value))) = (iter.next(), iter.next()) {
        match key {
            Value::String(key) => entries.push((key, value)),
            other => {
                return Err(ValueError::KeyType {
                    position,
                    found: other.kind(),
                })
            }
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v<T: Into<Value>>(x: T) -> Value {
        x.into()
    }

    #[test]
    fn test_make_sequence_keeps_order() {
        let seq = make_sequence(vec![v(3i64), v("b"), v(true)]);
        assert_eq!(seq, vec![v(3i64), v("b"), v(true)]);
        assert!(make_sequence(Vec::new()).is_empty());
    }

    #[test]
    fn test_append_does_not_touch_input() {
        let original = vec![v(1i64), v(2i64)];
        let appended = append_values(&original, vec![v(3i64), v(4i64)]);
        assert_eq!(appended, vec![v(1i64), v(2i64), v(3i64), v(4i64)]);
        assert_eq!(original.len(), 2);
    }

    #[test]
    fn test_make_mapping() {
        let map = make_mapping(vec![v("a"), v(1i64), v("b"), v(2i64)]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], v(1i64));
        assert_eq!(map["b"], v(2i64));
    }

    #[test]
    fn test_make_mapping_duplicates_overwrite() {
        let map = make_mapping(vec![v("a"), v(1i64), v("a"), v(2i64)]).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], v(2i64));
    }

    #[test]
    fn test_make_mapping_odd_count() {
        let err = make_mapping(vec![v("a"), v(1i64), v("b")]).unwrap_err();
        assert_eq!(err, ValueError::Arity { count: 3 });
    }

    #[test]
    fn test_make_mapping_non_string_key() {
        let err = make_mapping(vec![v("a"), v(1i64), v(2i64), v("b")]).unwrap_err();
        assert_eq!(
            err,
            ValueError::KeyType {
                position: 2,
                found: "int64"
            }
        );
    }

    #[test]
    fn test_set_mapping_mutates_in_place() {
        let mut map = make_mapping(vec![v("a"), v(1i64)]).unwrap();
        let returned: *const Mapping = set_mapping(&mut map, vec![v("c"), v(3i64)]).unwrap();
        assert!(std::ptr::eq(returned, &map));
        assert_eq!(map["c"], v(3i64));
        assert_eq!(map["a"], v(1i64));
    }

    #[test]
    fn test_set_mapping_validates_before_inserting() {
        let mut map = Mapping::new();
        let result = set_mapping(&mut map, vec![v("a"), v(1i64), v(false), v(2i64)]);
        assert!(result.is_err());
        assert!(map.is_empty());
    }
}
