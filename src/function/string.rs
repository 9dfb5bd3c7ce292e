// ABOUTME: String manipulation functions for templates
// ABOUTME: Splitting, concatenation, trimming, case conversion and replacement

use super::{Arg, Args, FunctionSet, Result};
use crate::value::Value;

const CATEGORY: &str = "String";

pub fn function_sets() -> Vec<FunctionSet> {
    vec![
        FunctionSet::new(
            CATEGORY,
            "split <sep string> <value string>",
            &["Splits value on sep and returns a slice containing each part"],
        )
        .with_function("split", split),
        FunctionSet::new(
            CATEGORY,
            "concat <str1 string> ... <strN string>",
            &["Returns all its arguments concatenated"],
        )
        .with_function("concat", concat),
        FunctionSet::new(
            CATEGORY,
            "trim_prefix <prefix string> <s string>",
            &["Removes the prefix from s. Does nothing if s does not start with prefix"],
        )
        .with_function("trim_prefix", trim_prefix),
        FunctionSet::new(
            CATEGORY,
            "trim_suffix <suffix string> <s string>",
            &["Removes the suffix from s. Does nothing if s does not end with suffix"],
        )
        .with_function("trim_suffix", trim_suffix),
        FunctionSet::new(CATEGORY, "to_upper <value string>", &["Converts value to upper case"])
            .with_function("to_upper", to_upper),
        FunctionSet::new(CATEGORY, "to_lower <value string>", &["Converts value to lower case"])
            .with_function("to_lower", to_lower),
        FunctionSet::new(
            CATEGORY,
            "to_upper_first <value string>",
            &["Converts the first character of value to upper case and leaves the rest untouched"],
        )
        .with_function("to_upper_first", to_upper_first),
        FunctionSet::new(
            CATEGORY,
            "to_lower_first <value string>",
            &["Converts the first character of value to lower case and leaves the rest untouched"],
        )
        .with_function("to_lower_first", to_lower_first),
        FunctionSet::new(
            CATEGORY,
            "replace <old string> <new string> <n int> <s string>",
            &[
                "Returns a copy of s with the first n non-overlapping instances of old replaced by new.",
                "A negative n replaces every instance",
            ],
        )
        .with_function("replace", replace),
        FunctionSet::new(
            CATEGORY,
            "replace_all <old string> <new string> <s string>",
            &["Returns a copy of s with all non-overlapping instances of old replaced by new"],
        )
        .with_function("replace_all", replace_all),
        FunctionSet::new(
            CATEGORY,
            "to_camel_case <s string>",
            &["Converts a snake_case string to CamelCase"],
        )
        .with_function("to_camel_case", to_camel_case_fn),
        FunctionSet::new(
            CATEGORY,
            "to_snake_case <s string>",
            &["Converts a CamelCase string to snake_case"],
        )
        .with_function("to_snake_case", to_snake_case_fn),
    ]
}

fn string_result(s: String) -> Result<Arg> {
    Ok(Arg::Value(Value::String(s)))
}

fn split(mut args: Args) -> Result<Arg> {
    let sep = args.string()?;
    let s = args.string()?;
    args.finish()?;
    let parts = s.split(sep.as_str()).map(Value::from).collect::<Vec<_>>();
    Ok(Arg::Value(Value::Sequence(parts)))
}

fn concat(mut args: Args) -> Result<Arg> {
    let first = args.string()?;
    let rest = args.rest_strings()?;
    string_result(rest.iter().fold(first, |mut acc, s| {
        acc.push_str(s);
        acc
    }))
}

fn trim_prefix(mut args: Args) -> Result<Arg> {
    let prefix = args.string()?;
    let s = args.string()?;
    args.finish()?;
    let trimmed = s.strip_prefix(prefix.as_str()).unwrap_or(s.as_str()).to_string();
    string_result(trimmed)
}

fn trim_suffix(mut args: Args) -> Result<Arg> {
    let suffix = args.string()?;
    let s = args.string()?;
    args.finish()?;
    let trimmed = s.strip_suffix(suffix.as_str()).unwrap_or(s.as_str()).to_string();
    string_result(trimmed)
}

fn to_upper(mut args: Args) -> Result<Arg> {
    let s = args.string()?;
    args.finish()?;
    string_result(s.to_uppercase())
}

fn to_lower(mut args: Args) -> Result<Arg> {
    let s = args.string()?;
    args.finish()?;
    string_result(s.to_lowercase())
}

fn map_first_char(s: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}

fn to_upper_first(mut args: Args) -> Result<Arg> {
    let s = args.string()?;
    args.finish()?;
    string_result(map_first_char(&s, |c| c.to_uppercase().collect()))
}

fn to_lower_first(mut args: Args) -> Result<Arg> {
    let s = args.string()?;
    args.finish()?;
    string_result(map_first_char(&s, |c| c.to_lowercase().collect()))
}

fn replace(mut args: Args) -> Result<Arg> {
    let old = args.string()?;
    let new = args.string()?;
    let n = args.int()?;
    let s = args.string()?;
    args.finish()?;
    let replaced = match usize::try_from(n) {
        Ok(n) => s.replacen(old.as_str(), &new, n),
        Err(_) => s.replace(old.as_str(), &new),
    };
    string_result(replaced)
}

fn replace_all(mut args: Args) -> Result<Arg> {
    let old = args.string()?;
    let new = args.string()?;
    let s = args.string()?;
    args.finish()?;
    string_result(s.replace(old.as_str(), &new))
}

/// Capitalise every run of ASCII letters and drop everything else.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            if at_word_start {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_lowercase());
            }
            at_word_start = false;
        } else {
            at_word_start = true;
        }
    }
    out
}

/// Lowercase every `Upper lower*` run and join the runs with underscores.
/// Characters outside such runs are dropped.
pub fn to_snake_case(s: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            words.extend(current.take());
            current = Some(c.to_ascii_lowercase().to_string());
        } else if c.is_ascii_lowercase() {
            if let Some(word) = current.as_mut() {
                word.push(c);
            }
        } else {
            words.extend(current.take());
        }
    }
    words.extend(current);
    words.join("_")
}

fn to_camel_case_fn(mut args: Args) -> Result<Arg> {
    let s = args.string()?;
    args.finish()?;
    string_result(to_camel_case(&s))
}

fn to_snake_case_fn(mut args: Args) -> Result<Arg> {
    let s = args.string()?;
    args.finish()?;
    string_result(to_snake_case(&s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{call, Function, FunctionError};

    fn run(name: &'static str, f: Function, args: Vec<Value>) -> Result<Value> {
        match call(name, f, args.into_iter().map(Arg::Value).collect())? {
            Arg::Value(v) => Ok(v),
            Arg::Filter(_) => panic!("expected a value"),
        }
    }

    fn s(v: &str) -> Value {
        Value::from(v)
    }

    #[test]
    fn test_split() {
        assert_eq!(
            run("split", split, vec![s(","), s("a,b,,c")]).unwrap(),
            Value::from(vec![s("a"), s("b"), s(""), s("c")])
        );
    }

    #[test]
    fn test_concat() {
        assert_eq!(
            run("concat", concat, vec![s("a"), s("b"), s("c")]).unwrap(),
            s("abc")
        );
        assert_eq!(run("concat", concat, vec![s("only")]).unwrap(), s("only"));
        assert!(matches!(
            run("concat", concat, vec![]),
            Err(FunctionError::MissingArgument { .. })
        ));
        assert!(matches!(
            run("concat", concat, vec![s("a"), Value::from(1i64)]),
            Err(FunctionError::InvalidArgument { position: 2, .. })
        ));
    }

    #[test]
    fn test_trim() {
        assert_eq!(
            run("trim_prefix", trim_prefix, vec![s("pre-"), s("pre-fix")]).unwrap(),
            s("fix")
        );
        assert_eq!(
            run("trim_prefix", trim_prefix, vec![s("x"), s("pre-fix")]).unwrap(),
            s("pre-fix")
        );
        assert_eq!(
            run("trim_suffix", trim_suffix, vec![s(".txt"), s("file.txt")]).unwrap(),
            s("file")
        );
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(run("to_upper", to_upper, vec![s("abc")]).unwrap(), s("ABC"));
        assert_eq!(run("to_lower", to_lower, vec![s("ABC")]).unwrap(), s("abc"));
        assert_eq!(
            run("to_upper_first", to_upper_first, vec![s("hello world")]).unwrap(),
            s("Hello world")
        );
        assert_eq!(
            run("to_lower_first", to_lower_first, vec![s("HELLO")]).unwrap(),
            s("hELLO")
        );
        assert_eq!(run("to_upper_first", to_upper_first, vec![s("")]).unwrap(), s(""));
    }

    #[test]
    fn test_replace() {
        let args = |n: i64| vec![s("a"), s("x"), Value::from(n), s("banana")];
        assert_eq!(run("replace", replace, args(1)).unwrap(), s("bxnana"));
        assert_eq!(run("replace", replace, args(2)).unwrap(), s("bxnxna"));
        assert_eq!(run("replace", replace, args(0)).unwrap(), s("banana"));
        assert_eq!(run("replace", replace, args(-1)).unwrap(), s("bxnxnx"));
        assert_eq!(
            run("replace_all", replace_all, vec![s("an"), s("AN"), s("banana")]).unwrap(),
            s("bANANa")
        );
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("hello_world"), "HelloWorld");
        assert_eq!(to_camel_case("HELLO_big_WORLD"), "HelloBigWorld");
        assert_eq!(to_camel_case("user-id 2 name"), "UserIdName");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("UserID"), "user_i_d");
        assert_eq!(to_snake_case("Hello World"), "hello_world");
        // Leading lowercase text does not start a word.
        assert_eq!(to_snake_case("myValue"), "value");
    }
}
