// ABOUTME: Filter constructor functions exposed to templates
// ABOUTME: Each filter_* call returns a Filter for use with filter or first_match

use super::{Arg, Args, FunctionSet, Result};
use crate::filter::Filter;

const CATEGORY: &str = "Filter";

pub fn function_sets() -> Vec<FunctionSet> {
    vec![
        FunctionSet::new(
            CATEGORY,
            "filter_map_value <key string> <filter1 Filter> ... <filterN Filter>",
            &[
                "Use with filter or first_match. Returns a Filter matching maps whose value at key matches all the filters.",
                "A missing key is tested as nothing",
            ],
        )
        .with_function("filter_map_value", filter_map_value),
        FunctionSet::new(
            CATEGORY,
            "filter_slice_value <index int> <filter1 Filter> ... <filterN Filter>",
            &[
                "Use with filter or first_match. Returns a Filter matching slices whose element at index matches all the filters.",
                "An out of range index fails the render",
            ],
        )
        .with_function("filter_slice_value", filter_slice_value),
        FunctionSet::new(
            CATEGORY,
            "filter_eq <v any>",
            &["Use with filter or first_match. Returns a Filter matching values equal to v, including their type"],
        )
        .with_function("filter_eq", filter_eq),
        FunctionSet::new(
            CATEGORY,
            "filter_not <filter Filter>",
            &["Use with filter or first_match. Returns a Filter negating the given filter"],
        )
        .with_function("filter_not", filter_not),
        FunctionSet::new(
            CATEGORY,
            "filter_or <filter1 Filter> ... <filterN Filter>",
            &["Use with filter or first_match. Returns a Filter matching if any of the filters matches"],
        )
        .with_function("filter_or", filter_or),
        FunctionSet::new(
            CATEGORY,
            "filter_and <filter1 Filter> ... <filterN Filter>",
            &["Use with filter or first_match. Returns a Filter matching if all the filters match"],
        )
        .with_function("filter_and", filter_and),
        FunctionSet::new(
            CATEGORY,
            "filter_to_int <filter1 Filter> ... <filterN Filter>",
            &[
                "Use with filter or first_match. Returns a Filter converting the value to an int before testing it against the filters.",
                "Floats are truncated and strings are parsed as base 10",
            ],
        )
        .with_function("filter_to_int", filter_to_int),
        FunctionSet::new(
            CATEGORY,
            "filter_to_string <filter1 Filter> ... <filterN Filter>",
            &["Use with filter or first_match. Returns a Filter converting the value to its display string before testing it against the filters"],
        )
        .with_function("filter_to_string", filter_to_string),
    ]
}

fn filter_map_value(mut args: Args) -> Result<Arg> {
    let key = args.string()?;
    let filters = args.rest_filters()?;
    Ok(Arg::Filter(Filter::map_field(key, filters)))
}

fn filter_slice_value(mut args: Args) -> Result<Arg> {
    let index = args.int()?;
    let filters = args.rest_filters()?;
    Ok(Arg::Filter(Filter::sequence_field(index, filters)))
}

fn filter_eq(mut args: Args) -> Result<Arg> {
    let value = args.value()?;
    args.finish()?;
    Ok(Arg::Filter(Filter::equals(value)))
}

fn filter_not(mut args: Args) -> Result<Arg> {
    let filter = args.filter()?;
    args.finish()?;
    Ok(Arg::Filter(Filter::not(filter)))
}

fn filter_or(mut args: Args) -> Result<Arg> {
    Ok(Arg::Filter(Filter::or(args.rest_filters()?)))
}

fn filter_and(mut args: Args) -> Result<Arg> {
    Ok(Arg::Filter(Filter::and(args.rest_filters()?)))
}

fn filter_to_int(mut args: Args) -> Result<Arg> {
    Ok(Arg::Filter(Filter::as_int(args.rest_filters()?)))
}

fn filter_to_string(mut args: Args) -> Result<Arg> {
    Ok(Arg::Filter(Filter::as_display_string(args.rest_filters()?)))
}
