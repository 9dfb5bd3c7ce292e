// ABOUTME: Filter predicates over runtime values and their and/or/not combinators
// ABOUTME: Each variant captures only its construction parameters and evaluates purely

use serde::{Deserialize, Serialize};

use crate::value::{to_display_string, to_int, Result, Value, ValueError};

/// A boolean predicate over a [`Value`].
///
/// Filters are plain data: they can be cloned, compared and serialized, which is
/// how they travel through the template engine between helper calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    /// Candidate is identical in shape and value to `value`.
    Eq { value: Value },
    /// Candidate is a mapping whose `key` entry satisfies every filter.
    MapValue { key: String, filters: Vec<Filter> },
    /// Candidate is a sequence whose element at `index` satisfies every filter.
    SliceValue { index: i64, filters: Vec<Filter> },
    /// Candidate coerced to an integer satisfies every filter.
    ToInt { filters: Vec<Filter> },
    /// Candidate rendered as a display string satisfies every filter.
    ToString { filters: Vec<Filter> },
    And { filters: Vec<Filter> },
    Or { filters: Vec<Filter> },
    Not { filter: Box<Filter> },
}

impl Filter {
    pub fn equals(value: impl Into<Value>) -> Self {
        Filter::Eq {
            value: value.into(),
        }
    }

    pub fn map_field(key: impl Into<String>, filters: Vec<Filter>) -> Self {
        Filter::MapValue {
            key: key.into(),
            filters,
        }
    }

    pub fn sequence_field(index: i64, filters: Vec<Filter>) -> Self {
        Filter::SliceValue { index, filters }
    }

    pub fn as_int(filters: Vec<Filter>) -> Self {
        Filter::ToInt { filters }
    }

    pub fn as_display_string(filters: Vec<Filter>) -> Self {
        Filter::ToString { filters }
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::And { filters }
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Filter::Or { filters }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(filter: Filter) -> Self {
        Filter::Not {
            filter: Box::new(filter),
        }
    }

    /// Test `candidate` against this filter.
    pub fn matches(&self, candidate: &Value) -> Result<bool> {
        match self {
            Filter::Eq { value } => Ok(value == candidate),
            Filter::MapValue { key, filters } => match candidate {
                Value::Mapping(map) => {
                    let absent = Value::Absent;
                    all_match(filters, map.get(key).unwrap_or(&absent))
                }
                other => Err(ValueError::TypeMismatch {
                    expected: "mapping",
                    found: other.kind(),
                }),
            },
            Filter::SliceValue { index, filters } => match candidate {
                Value::Sequence(items) => {
                    let element = usize::try_from(*index)
                        .ok()
                        .and_then(|i| items.get(i))
                        .ok_or(ValueError::Index {
                            index: *index,
                            len: items.len(),
                        })?;
                    all_match(filters, element)
                }
                other => Err(ValueError::TypeMismatch {
                    expected: "sequence",
                    found: other.kind(),
                }),
            },
            Filter::ToInt { filters } => {
                let coerced = Value::from(to_int(candidate)?);
                all_match(filters, &coerced)
            }
            Filter::ToString { filters } => {
                let coerced = Value::from(to_display_string(candidate));
                all_match(filters, &coerced)
            }
            Filter::And { filters } => all_match(filters, candidate),
            Filter::Or { filters } => any_match(filters, candidate),
            Filter::Not { filter } => Ok(!filter.matches(candidate)?),
        }
    }
}

/// Conjunction with left-to-right short-circuit; vacuously true.
pub fn all_match(filters: &[Filter], candidate: &Value) -> Result<bool> {
    for filter in filters {
        if !filter.matches(candidate)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Disjunction with left-to-right short-circuit; vacuously false.
pub fn any_match(filters: &[Filter], candidate: &Value) -> Result<bool> {
    for filter in filters {
        if filter.matches(candidate)? {
            return Ok(true);
        }
    }
    Ok(false)
}
