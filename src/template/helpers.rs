// ABOUTME: Handlebars helper that exposes one catalog function to templates
// ABOUTME: Decodes helper params into Args, calls the function and renders or returns the result

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    ScopedJson,
};
use tracing::trace;

use crate::function::{call, Arg, Function, Library};
use crate::value::Value;

/// Bridges a catalog [`Function`] into the handlebars helper protocol.
///
/// Used as a subexpression, the helper yields its result as JSON so that it
/// can feed `#each`, `#if` or another helper. Filters survive that trip as
/// `{"$filter": ...}` objects. Used directly in a mustache, the helper writes
/// the display form of its result.
#[derive(Clone, Copy)]
pub struct CatalogHelper {
    name: &'static str,
    function: Function,
}

impl CatalogHelper {
    pub fn new(name: &'static str, function: Function) -> Self {
        Self { name, function }
    }

    fn invoke(&self, h: &Helper) -> std::result::Result<Arg, RenderError> {
        // Only subexpression results can carry filters; context data is always a value.
        let args: Vec<Arg> = h
            .params()
            .iter()
            .map(|p| match p.relative_path() {
                Some(_) => Arg::Value(Value::from(p.value())),
                None => Arg::from_json(p.value()),
            })
            .collect();
        trace!("calling {} with {} argument(s)", self.name, args.len());
        call(self.name, self.function, args)
            .map_err(|e| RenderError::new(format!("Error calling {}: {}", self.name, e)))
    }
}

impl HelperDef for CatalogHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> std::result::Result<ScopedJson<'reg, 'rc>, RenderError> {
        let result = self.invoke(h)?;
        let json = result
            .to_json()
            .map_err(|e| RenderError::new(format!("Error calling {}: {}", self.name, e)))?;
        Ok(ScopedJson::Derived(json))
    }

    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        r: &'reg Handlebars<'reg>,
        _: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let rendered = match self.invoke(h)? {
            Arg::Value(Value::Absent) => return Ok(()),
            other => other.to_display_string(),
        };
        if rc.is_disable_escape() {
            out.write(&rendered)?;
        } else {
            out.write(&r.get_escape_fn()(&rendered))?;
        }
        Ok(())
    }
}

/// Register every name of the library namespace as a helper.
pub fn register_library(handlebars: &mut Handlebars<'static>, library: &Library) -> usize {
    let namespace = library.namespace();
    for (&name, &function) in &namespace {
        handlebars.register_helper(name, Box::new(CatalogHelper::new(name, function)));
    }
    namespace.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        register_library(&mut handlebars, &Library::standard());
        handlebars
    }

    #[test]
    fn test_helper_writes_display_string() {
        let hb = registry();
        let out = hb
            .render_template(r#"{{concat "a" "b"}} {{make_slice 1 "x"}}"#, &json!({}))
            .unwrap();
        assert_eq!(out, "ab [1 x]");
    }

    #[test]
    fn test_absent_results_render_nothing() {
        let hb = registry();
        let out = hb
            .render_template(
                r#"[{{first_match items (filter_eq 9)}}]"#,
                &json!({"items": [1, 2]}),
            )
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_subexpressions_carry_filters() {
        let hb = registry();
        let out = hb
            .render_template(
                r#"{{#each (filter items (filter_not (filter_eq 2)))}}{{this}};{{/each}}"#,
                &json!({"items": [1, 2, 3]}),
            )
            .unwrap();
        assert_eq!(out, "1;3;");
    }

    #[test]
    fn test_context_data_shaped_like_a_filter_stays_data() {
        let hb = registry();
        let context = json!({"obj": {"$filter": {"op": "eq", "value": 1}}});
        let out = hb
            .render_template(r#"{{exists obj}} {{has_value obj}}"#, &context)
            .unwrap();
        assert_eq!(out, "true true");
    }

    #[test]
    fn test_errors_name_the_helper() {
        let hb = registry();
        let err = hb
            .render_template(r#"{{div 1 0}}"#, &json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("Error calling div"));
    }
}
