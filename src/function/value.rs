// ABOUTME: Value inspection functions: exists, has_value and default
// ABOUTME: Lets templates test for missing data and fall back to defaults

use super::{Arg, Args, FunctionSet, Result};
use crate::value::Value;

const CATEGORY: &str = "Value";

pub fn function_sets() -> Vec<FunctionSet> {
    vec![
        FunctionSet::new(
            CATEGORY,
            "exists <value any>",
            &["Returns true if value is not absent, false otherwise"],
        )
        .with_function("exists", exists),
        FunctionSet::new(
            CATEGORY,
            "has_value <value any>",
            &["Same as exists but also returns false if value is an empty string"],
        )
        .with_function("has_value", has_value_fn),
        FunctionSet::new(
            CATEGORY,
            "default <default any> <value any>",
            &["If has_value value returns true, returns value otherwise returns default"],
        )
        .with_function("default", default),
    ]
}

pub fn has_value(value: &Value) -> bool {
    match value {
        Value::Absent => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn exists(mut args: Args) -> Result<Arg> {
    let value = args.value()?;
    args.finish()?;
    Ok(Arg::Value(Value::Bool(!value.is_absent())))
}

fn has_value_fn(mut args: Args) -> Result<Arg> {
    let value = args.value()?;
    args.finish()?;
    Ok(Arg::Value(Value::Bool(has_value(&value))))
}

fn default(mut args: Args) -> Result<Arg> {
    let fallback = args.value()?;
    let value = args.value()?;
    args.finish()?;
    Ok(Arg::Value(if has_value(&value) { value } else { fallback }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{call, Function};

    fn run(name: &'static str, f: Function, args: Vec<Value>) -> Value {
        match call(name, f, args.into_iter().map(Arg::Value).collect()).unwrap() {
            Arg::Value(v) => v,
            Arg::Filter(_) => panic!("expected a value"),
        }
    }

    #[test]
    fn test_exists() {
        assert_eq!(run("exists", exists, vec![Value::Absent]), Value::from(false));
        assert_eq!(run("exists", exists, vec![Value::from("")]), Value::from(true));
    }

    #[test]
    fn test_has_value() {
        assert_eq!(
            run("has_value", has_value_fn, vec![Value::from("")]),
            Value::from(false)
        );
        assert_eq!(
            run("has_value", has_value_fn, vec![Value::from(0i64)]),
            Value::from(true)
        );
    }

    #[test]
    fn test_default() {
        assert_eq!(
            run("default", default, vec![Value::from("fb"), Value::Absent]),
            Value::from("fb")
        );
        assert_eq!(
            run("default", default, vec![Value::from("fb"), Value::from("")]),
            Value::from("fb")
        );
        assert_eq!(
            run("default", default, vec![Value::from("fb"), Value::from("v")]),
            Value::from("v")
        );
    }
}
