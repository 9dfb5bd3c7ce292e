// ABOUTME: Function library assembled once at startup and read-only afterwards
// ABOUTME: Provides the builder, the merged name namespace, and category grouping for help output

use indexmap::IndexMap;
use tracing::debug;

use super::{base64, filter, io, mapslice, math, regexp, string, value};
use super::{Function, FunctionSet};

/// Ordered, immutable catalog of function sets.
#[derive(Debug, Clone, Default)]
pub struct Library {
    sets: Vec<FunctionSet>,
}

/// Function sets sharing a category, in registration order.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub category: &'static str,
    pub sets: Vec<&'a FunctionSet>,
}

/// Collects function sets before freezing them into a [`Library`].
#[derive(Debug, Default)]
pub struct LibraryBuilder {
    sets: Vec<FunctionSet>,
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a function set. Names are not checked for collisions.
    pub fn register(mut self, set: FunctionSet) -> Self {
        self.sets.push(set);
        self
    }

    pub fn register_all(mut self, sets: impl IntoIterator<Item = FunctionSet>) -> Self {
        self.sets.extend(sets);
        self
    }

    pub fn build(self) -> Library {
        debug!("Built function library with {} function sets", self.sets.len());
        Library { sets: self.sets }
    }
}

impl Library {
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// Library with every built-in category.
    pub fn standard() -> Self {
        Self::builder()
            .register_all(value::function_sets())
            .register_all(string::function_sets())
            .register_all(regexp::function_sets())
            .register_all(math::function_sets())
            .register_all(base64::function_sets())
            .register_all(io::function_sets())
            .register_all(mapslice::function_sets())
            .register_all(filter::function_sets())
            .build()
    }

    pub fn sets(&self) -> &[FunctionSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Every exposed name with its binding. When two sets bind the same name the
    /// one registered last wins.
    pub fn namespace(&self) -> IndexMap<&'static str, Function> {
        let mut namespace = IndexMap::new();
        for set in &self.sets {
            for (name, function) in &set.functions {
                namespace.insert(*name, *function);
            }
        }
        namespace
    }

    /// Look up a single name with the same precedence as [`Library::namespace`].
    pub fn get(&self, name: &str) -> Option<Function> {
        self.sets
            .iter()
            .rev()
            .find_map(|set| set.functions.get(name).copied())
    }

    /// Group sets by category in first-seen order. Only used for documentation.
    pub fn by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        let mut index: IndexMap<&'static str, usize> = IndexMap::new();

        for set in &self.sets {
            match index.get(set.category).copied() {
                Some(i) => groups[i].sets.push(set),
                None => {
                    index.insert(set.category, groups.len());
                    groups.push(CategoryGroup {
                        category: set.category,
                        sets: vec![set],
                    });
                }
            }
        }

        groups
    }
}
