// ABOUTME: Map and slice functions: builders plus the filter and first_match queries
// ABOUTME: Thin argument-decoding wrappers over value::builders and filter::query

use super::{Arg, Args, FunctionSet, Result};
use crate::filter;
use crate::value::{self, Value};

const CATEGORY: &str = "Maps and slices";

pub fn function_sets() -> Vec<FunctionSet> {
    vec![
        FunctionSet::new(
            CATEGORY,
            "make_slice <val1 any> ... <valN any>",
            &["Returns a slice containing all the arguments"],
        )
        .with_function("make_slice", make_slice),
        FunctionSet::new(
            CATEGORY,
            "append <s []any> <val1 any> ... <valN any>",
            &["Appends val1 to valN to the slice s, and returns the resulting slice"],
        )
        .with_function("append", append),
        FunctionSet::new(
            CATEGORY,
            "map <key1 string> <val1 any> ... <keyN string> <valN any>",
            &["Builds a new map with the given keys and values"],
        )
        .with_function("map", map),
        FunctionSet::new(
            CATEGORY,
            "set <m map[string]any> <key1 string> <val1 any> ... <keyN string> <valN any>",
            &["Sets the given keys and values to the map m, and returns it"],
        )
        .with_function("set", set),
        FunctionSet::new(
            CATEGORY,
            "filter <v map[string]any|[]any> <filter1 Filter> ... <filterN Filter>",
            &["Returns a new map/slice containing the elements matching the filters. Filters are built using filter_* functions"],
        )
        .with_function("filter", filter_fn),
        FunctionSet::new(
            CATEGORY,
            "first_match <v map[string]any|[]any> <filter1 Filter> ... <filterN Filter>",
            &["Returns the first value of v which matches all the filters, or nothing. Filters are built using filter_* functions"],
        )
        .with_function("first_match", first_match_fn),
    ]
}

fn make_slice(mut args: Args) -> Result<Arg> {
    let values = args.rest_values()?;
    Ok(Arg::Value(Value::Sequence(value::make_sequence(values))))
}

fn append(mut args: Args) -> Result<Arg> {
    let sequence = args.sequence()?;
    let values = args.rest_values()?;
    Ok(Arg::Value(Value::Sequence(value::append_values(
        &sequence, values,
    ))))
}

fn map(mut args: Args) -> Result<Arg> {
    let pairs = args.rest_values()?;
    Ok(Arg::Value(Value::Mapping(value::make_mapping(pairs)?)))
}

// Template parameters are owned copies, so the updated mapping is handed back.
fn set(mut args: Args) -> Result<Arg> {
    let mut mapping = args.mapping()?;
    let pairs = args.rest_values()?;
    value::set_mapping(&mut mapping, pairs)?;
    Ok(Arg::Value(Value::Mapping(mapping)))
}

fn filter_fn(mut args: Args) -> Result<Arg> {
    let collection = args.value()?;
    let filters = args.rest_filters()?;
    Ok(Arg::Value(filter::filter(&collection, &filters)?))
}

fn first_match_fn(mut args: Args) -> Result<Arg> {
    let collection = args.value()?;
    let filters = args.rest_filters()?;
    Ok(Arg::Value(filter::first_match(&collection, &filters)?))
}
