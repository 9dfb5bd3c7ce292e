// ABOUTME: Filter sublanguage for querying dynamically-typed collections
// ABOUTME: Exports predicates, combinators, and the filter/first_match queries

pub mod predicate;
pub mod query;

pub use predicate::{all_match, any_match, Filter};
pub use query::{filter, first_match};
