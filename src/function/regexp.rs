// ABOUTME: Regular expression functions backed by the regex crate
// ABOUTME: Matching, finding and replacing with patterns supplied by the template

use regex::Regex;

use super::{Arg, Args, FunctionError, FunctionSet, Result};
use crate::value::Value;

const CATEGORY: &str = "Regular Expressions";

pub fn function_sets() -> Vec<FunctionSet> {
    vec![
        FunctionSet::new(
            CATEGORY,
            "regexp_match <regexp string> <s string>",
            &["Returns true if s contains a match of regexp"],
        )
        .with_function("regexp_match", regexp_match),
        FunctionSet::new(
            CATEGORY,
            "regexp_find_all <regexp string> <s string>",
            &["Returns a slice of every non-overlapping match of regexp in s"],
        )
        .with_function("regexp_find_all", regexp_find_all),
        FunctionSet::new(
            CATEGORY,
            "regexp_replace_all <regexp string> <replacement string> <s string>",
            &[
                "Replaces every match of regexp in s with replacement.",
                "$1, $name and ${name} in replacement expand to capture groups",
            ],
        )
        .with_function("regexp_replace_all", regexp_replace_all),
    ]
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| FunctionError::Pattern(e.to_string()))
}

fn regexp_match(mut args: Args) -> Result<Arg> {
    let re = compile(&args.string()?)?;
    let s = args.string()?;
    args.finish()?;
    Ok(Arg::Value(Value::Bool(re.is_match(&s))))
}

fn regexp_find_all(mut args: Args) -> Result<Arg> {
    let re = compile(&args.string()?)?;
    let s = args.string()?;
    args.finish()?;
    let matches = re.find_iter(&s).map(|m| Value::from(m.as_str())).collect();
    Ok(Arg::Value(Value::Sequence(matches)))
}

fn regexp_replace_all(mut args: Args) -> Result<Arg> {
    let re = compile(&args.string()?)?;
    let replacement = args.string()?;
    let s = args.string()?;
    args.finish()?;
    let replaced = re.replace_all(&s, replacement.as_str()).into_owned();
    Ok(Arg::Value(Value::String(replaced)))
}
