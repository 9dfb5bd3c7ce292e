// ABOUTME: Catalog of callable template functions and their argument plumbing
// ABOUTME: Defines Arg/Args, the Function signature, FunctionSet entries and the category modules

pub mod base64;
pub mod error;
pub mod filter;
pub mod io;
pub mod library;
pub mod mapslice;
pub mod math;
pub mod regexp;
pub mod string;
pub mod value;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::filter::Filter;
use crate::value::{to_display_string, Mapping, Sequence, Value};

pub use error::{FunctionError, Result};
pub use library::{CategoryGroup, Library, LibraryBuilder};

/// Key marking a filter encoded as JSON inside the template engine.
pub const FILTER_KEY: &str = "$filter";

/// A catalog function: consumes its arguments, yields a value or a filter.
pub type Function = fn(Args) -> Result<Arg>;

/// One argument or result of a catalog function.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Filter(Filter),
}

impl Arg {
    /// Decode a template parameter. Objects of the form `{"$filter": ...}` that
    /// describe a valid filter become filters, everything else is a value.
    pub fn from_json(json: &JsonValue) -> Self {
        if let JsonValue::Object(obj) = json {
            if obj.len() == 1 {
                if let Some(Ok(filter)) = obj.get(FILTER_KEY).map(Filter::deserialize) {
                    return Arg::Filter(filter);
                }
            }
        }
        Arg::Value(Value::from(json))
    }

    pub fn to_json(&self) -> Result<JsonValue> {
        match self {
            Arg::Value(value) => Ok(JsonValue::from(value)),
            Arg::Filter(filter) => {
                let encoded = serde_json::to_value(filter)
                    .map_err(|e| FunctionError::Encode(e.to_string()))?;
                let mut obj = serde_json::Map::new();
                obj.insert(FILTER_KEY.to_string(), encoded);
                Ok(JsonValue::Object(obj))
            }
        }
    }

    pub fn to_display_string(&self) -> String {
        match self {
            Arg::Value(value) => to_display_string(value),
            Arg::Filter(_) => "<filter>".to_string(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Arg::Value(value) => value.kind(),
            Arg::Filter(_) => "filter",
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<Filter> for Arg {
    fn from(filter: Filter) -> Self {
        Arg::Filter(filter)
    }
}

/// Positional argument cursor handed to a [`Function`].
///
/// Accessors consume arguments left to right and report the 1-based position of
/// anything missing or of the wrong shape.
#[derive(Debug)]
pub struct Args {
    function: &'static str,
    items: std::vec::IntoIter<Arg>,
    position: usize,
}

impl Args {
    pub fn new(function: &'static str, items: Vec<Arg>) -> Self {
        Self {
            function,
            items: items.into_iter(),
            position: 0,
        }
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    fn next_arg(&mut self) -> Result<Arg> {
        self.position += 1;
        self.items.next().ok_or(FunctionError::MissingArgument {
            function: self.function,
            position: self.position,
        })
    }

    fn invalid(&self, expected: &'static str, found: &'static str) -> FunctionError {
        FunctionError::InvalidArgument {
            function: self.function,
            position: self.position,
            expected,
            found,
        }
    }

    pub fn value(&mut self) -> Result<Value> {
        match self.next_arg()? {
            Arg::Value(value) => Ok(value),
            other => Err(self.invalid("value", other.kind())),
        }
    }

    pub fn string(&mut self) -> Result<String> {
        match self.value()? {
            Value::String(s) => Ok(s),
            other => Err(self.invalid("string", other.kind())),
        }
    }

    pub fn int(&mut self) -> Result<i64> {
        match self.value()? {
            Value::Integer(i) => Ok(i.get()),
            other => Err(self.invalid("int", other.kind())),
        }
    }

    pub fn sequence(&mut self) -> Result<Sequence> {
        match self.value()? {
            Value::Sequence(items) => Ok(items),
            other => Err(self.invalid("sequence", other.kind())),
        }
    }

    pub fn mapping(&mut self) -> Result<Mapping> {
        match self.value()? {
            Value::Mapping(map) => Ok(map),
            other => Err(self.invalid("mapping", other.kind())),
        }
    }

    pub fn filter(&mut self) -> Result<Filter> {
        match self.next_arg()? {
            Arg::Filter(filter) => Ok(filter),
            other => Err(self.invalid("filter", other.kind())),
        }
    }

    pub fn rest_values(&mut self) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(self.remaining());
        while self.remaining() > 0 {
            values.push(self.value()?);
        }
        Ok(values)
    }

    pub fn rest_strings(&mut self) -> Result<Vec<String>> {
        let mut strings = Vec::with_capacity(self.remaining());
        while self.remaining() > 0 {
            strings.push(self.string()?);
        }
        Ok(strings)
    }

    pub fn rest_filters(&mut self) -> Result<Vec<Filter>> {
        let mut filters = Vec::with_capacity(self.remaining());
        while self.remaining() > 0 {
            filters.push(self.filter()?);
        }
        Ok(filters)
    }

    /// Fail if any argument was left unconsumed.
    pub fn finish(self) -> Result<()> {
        if self.remaining() > 0 {
            return Err(FunctionError::UnexpectedArgument {
                function: self.function,
                position: self.position + 1,
            });
        }
        Ok(())
    }
}

/// A documented group of functions sharing one syntax line.
#[derive(Debug, Clone)]
pub struct FunctionSet {
    pub category: &'static str,
    pub syntax: &'static str,
    pub description: Vec<&'static str>,
    pub functions: IndexMap<&'static str, Function>,
}

impl FunctionSet {
    pub fn new(category: &'static str, syntax: &'static str, description: &[&'static str]) -> Self {
        Self {
            category,
            syntax,
            description: description.to_vec(),
            functions: IndexMap::new(),
        }
    }

    pub fn with_function(mut self, name: &'static str, function: Function) -> Self {
        self.functions.insert(name, function);
        self
    }
}

/// Invoke `function` registered as `name` on already-decoded arguments.
pub fn call(name: &'static str, function: Function, args: Vec<Arg>) -> Result<Arg> {
    function(Args::new(name, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_round_trips_through_json() {
        let arg = Arg::Filter(Filter::map_field("id", vec![Filter::equals(2i64)]));
        let json = arg.to_json().unwrap();
        assert!(json.get(FILTER_KEY).is_some());
        assert_eq!(Arg::from_json(&json), arg);
    }

    #[test]
    fn test_plain_objects_stay_values() {
        let json = json!({"$filter": {"op": "bogus"}});
        assert!(matches!(Arg::from_json(&json), Arg::Value(Value::Mapping(_))));

        let json = json!({"$filter": {"op": "eq", "value": 1}, "other": 2});
        assert!(matches!(Arg::from_json(&json), Arg::Value(_)));

        assert_eq!(Arg::from_json(&json!("x")), Arg::Value(Value::from("x")));
    }

    #[test]
    fn test_args_accessors() {
        let mut args = Args::new(
            "demo",
            vec![
                Arg::Value(Value::from("s")),
                Arg::Value(Value::from(3i64)),
                Arg::Filter(Filter::equals(1i64)),
            ],
        );
        assert_eq!(args.string().unwrap(), "s");
        assert_eq!(args.int().unwrap(), 3);
        assert_eq!(args.filter().unwrap(), Filter::equals(1i64));
        args.finish().unwrap();
    }

    #[test]
    fn test_args_errors_report_position() {
        let mut args = Args::new("demo", vec![Arg::Value(Value::from(1i64))]);
        assert_eq!(
            args.string().unwrap_err(),
            FunctionError::InvalidArgument {
                function: "demo",
                position: 1,
                expected: "string",
                found: "int64",
            }
        );
        assert_eq!(
            args.value().unwrap_err(),
            FunctionError::MissingArgument {
                function: "demo",
                position: 2,
            }
        );

        let mut args = Args::new("demo", vec![Arg::Value(Value::Absent); 2]);
        args.value().unwrap();
        assert_eq!(
            args.finish().unwrap_err(),
            FunctionError::UnexpectedArgument {
                function: "demo",
                position: 2,
            }
        );
    }

    #[test]
    fn test_rest_filters_rejects_values() {
        let mut args = Args::new(
            "demo",
            vec![
                Arg::Filter(Filter::and(vec![])),
                Arg::Value(Value::from(1i64)),
            ],
        );
        assert!(matches!(
            args.rest_filters(),
            Err(FunctionError::InvalidArgument {
                position: 2,
                expected: "filter",
                ..
            })
        ));
    }
}
