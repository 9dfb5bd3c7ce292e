// ABOUTME: Integer arithmetic functions: add, sub, mul and div
// ABOUTME: Arguments are coerced to integers and folded from left to right

use super::{Arg, Args, FunctionError, FunctionSet, Result};
use crate::value::{to_int, Value};

const CATEGORY: &str = "Math";

pub fn function_sets() -> Vec<FunctionSet> {
    vec![FunctionSet::new(
        CATEGORY,
        "add|sub|mul|div <v1 int> ... <vN int>",
        &[
            "Returns the result of the addition/subtraction/multiplication/division of the ints.",
            "Arguments are converted like filter_to_int. No arguments yields 0",
        ],
    )
    .with_function("add", add)
    .with_function("sub", sub)
    .with_function("mul", mul)
    .with_function("div", div)]
}

fn fold(mut args: Args, op: impl Fn(i64, i64) -> Result<i64>) -> Result<Arg> {
    let mut ints = args
        .rest_values()?
        .iter()
        .map(to_int)
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter();

    let mut acc = ints.next().unwrap_or(0);
    for v in ints {
        acc = op(acc, v)?;
    }
    Ok(Arg::Value(Value::from(acc)))
}

fn add(args: Args) -> Result<Arg> {
    fold(args, |acc, v| Ok(acc.wrapping_add(v)))
}

fn sub(args: Args) -> Result<Arg> {
    fold(args, |acc, v| Ok(acc.wrapping_sub(v)))
}

fn mul(args: Args) -> Result<Arg> {
    fold(args, |acc, v| Ok(acc.wrapping_mul(v)))
}

fn div(args: Args) -> Result<Arg> {
    fold(args, |acc, v| {
        if v == 0 {
            return Err(FunctionError::DivisionByZero);
        }
        Ok(acc.wrapping_div(v))
    })
}
