//! Method rendering: one blocking and one asynchronous declaration per method.

use apigen_ir::{MethodDescriptor, ParameterDescriptor, ParameterLocation};

use super::{MemberRenderer, path::placeholders};
use crate::{
    PathDefect, RenderError,
    builder::{RenderBuffer, substitute},
    comment::DocBlock,
    language::VerbStyle,
    naming::CasingRule,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallForm {
    Blocking,
    Async,
}

/// Everything both forms share, resolved before any text is written.
#[derive(Debug)]
struct MethodPlan<'m> {
    name: String,
    return_type: String,
    uri: &'m str,
    verb: &'static str,
    /// `(type, identifier)` in declared order
    params: Vec<(String, String)>,
    bindings: Vec<Binding<'m>>,
    body: Option<String>,
    doc: DocBlock,
}

#[derive(Debug)]
enum Binding<'m> {
    Path { wire: &'m str, ident: String },
    Query { wire: &'m str, ident: String },
}

impl MemberRenderer<'_> {
    /// Render the blocking and asynchronous forms of a method.
    ///
    /// All checks run before the first character is written, so a defective
    /// method never leaves a partial declaration behind.
    pub fn render_method(
        &self,
        buf: &mut RenderBuffer,
        method: &MethodDescriptor,
    ) -> Result<(), RenderError> {
        let plan = self.plan_method(method)?;

        self.render_form(buf, &plan, CallForm::Blocking)?;
        buf.blank();
        self.render_form(buf, &plan, CallForm::Async)
    }

    fn plan_method<'m>(
        &self,
        method: &'m MethodDescriptor,
    ) -> Result<MethodPlan<'m>, RenderError> {
        let visible: Vec<&ParameterDescriptor> = method.visible_params().collect();

        let bodies: Vec<&ParameterDescriptor> = visible
            .iter()
            .copied()
            .filter(|p| p.location == ParameterLocation::Body)
            .collect();
        if bodies.len() > 1 {
            return Err(RenderError::AmbiguousBodyBinding {
                names: bodies.iter().map(|p| p.name.clone()).collect(),
            });
        }

        check_path_template(&method.uri, &visible).map_err(|defect| {
            RenderError::MalformedPathTemplate {
                uri: method.uri.clone(),
                defect,
            }
        })?;

        let naming = &self.language.naming;
        let return_type = self.types.map_type(&method.response_type)?;

        let mut params = Vec::with_capacity(visible.len());
        let mut bindings = Vec::new();
        let mut body = None;
        let mut doc = DocBlock::new(method.summary.as_str()).paragraph(&method.description);

        for param in &visible {
            let ty = self.types.map_type(&param.type_name)?;
            let ident = naming.identifier(&param.name, CasingRule::AsDeclared);

            match param.location {
                ParameterLocation::Path => bindings.push(Binding::Path {
                    wire: &param.raw_name,
                    ident: ident.clone(),
                }),
                ParameterLocation::Query => bindings.push(Binding::Query {
                    wire: &param.raw_name,
                    ident: ident.clone(),
                }),
                ParameterLocation::Body => body = Some(ident.clone()),
            }

            doc = doc.tag(self.comments.param_tag(&ident, &param.comment));
            params.push((ty, ident));
        }
        doc = doc.tag(self.comments.returns_tag(&return_type));

        let syntax = &self.language.syntax.method;
        Ok(MethodPlan {
            name: naming.identifier(&method.name, syntax.name_casing),
            return_type,
            uri: &method.uri,
            verb: match syntax.verb_style {
                VerbStyle::Upper => method.verb.as_str(),
                VerbStyle::Pascal => method.verb.as_pascal(),
            },
            params,
            bindings,
            body,
            doc,
        })
    }

    fn render_form(
        &self,
        buf: &mut RenderBuffer,
        plan: &MethodPlan<'_>,
        form: CallForm,
    ) -> Result<(), RenderError> {
        let syntax = &self.language.syntax.method;
        let (signature, params_close, call) = match form {
            CallForm::Blocking => (
                syntax.sync_signature,
                syntax.sync_params_close,
                syntax.sync_call,
            ),
            CallForm::Async => (
                syntax.async_signature,
                syntax.async_params_close,
                syntax.async_call,
            ),
        };

        self.render_doc(buf, &plan.doc);

        buf.write_indent();
        buf.write(&substitute(
            signature,
            &[plan.return_type.as_str(), plan.name.as_str()],
        )?);
        for (ty, ident) in &plan.params {
            buf.write(&substitute(syntax.parameter, &[ty.as_str(), ident.as_str()])?);
            buf.write(syntax.separator);
        }
        if !plan.params.is_empty() {
            buf.backtrack(syntax.separator.chars().count())?;
        }
        buf.write_line(params_close);
        buf.emit(syntax.body_open, &[])?;

        buf.indent();
        buf.line_with(syntax.path_init, &[plan.uri])?;
        for binding in &plan.bindings {
            let (template, wire, ident) = match binding {
                Binding::Path { wire, ident } => (syntax.path_binding, *wire, ident),
                Binding::Query { wire, ident } => (syntax.query_binding, *wire, ident),
            };
            buf.line_with(template, &[wire, ident.as_str()])?;
        }
        let body = plan.body.as_deref().unwrap_or(syntax.no_body);
        buf.line_with(
            call,
            &[
                plan.return_type.as_str(),
                plan.verb,
                body,
                plan.return_type.as_str(),
            ],
        )?;
        buf.dedent();

        buf.emit(syntax.close, &[])?;
        Ok(())
    }
}

/// Check that placeholders and visible path parameters pair up one to one.
fn check_path_template(uri: &str, visible: &[&ParameterDescriptor]) -> Result<(), PathDefect> {
    let names = placeholders(uri)?;
    let path_params: Vec<&str> = visible
        .iter()
        .filter(|p| p.location == ParameterLocation::Path)
        .map(|p| p.raw_name.as_str())
        .collect();

    for name in &names {
        match path_params.iter().filter(|raw| *raw == name).count() {
            0 => return Err(PathDefect::UnmatchedPlaceholder(name.to_string())),
            1 => {}
            _ => return Err(PathDefect::DuplicatePlaceholder(name.to_string())),
        }
    }

    if let Some(unbound) = path_params.iter().find(|raw| !names.contains(*raw)) {
        return Err(PathDefect::UnboundParameter(unbound.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use apigen_ir::{ApiModel, HttpVerb, SchemaDescriptor};

    use super::*;
    use crate::{render::MemberRenderer, testing, types::TypeMapper};

    fn render(method: &MethodDescriptor) -> Result<String, RenderError> {
        let language = testing::language();
        let model = ApiModel::new().with_schema(SchemaDescriptor::new("Item"));
        let types = TypeMapper::for_model(&language.types, &model);
        let renderer = MemberRenderer::new(&language, &types, 100);

        let mut buf = RenderBuffer::new(language.indent);
        renderer.render_method(&mut buf, method)?;
        Ok(buf.finish())
    }

    fn create_item() -> MethodDescriptor {
        MethodDescriptor::new(
            "CreateItem",
            HttpVerb::Post,
            "/companies/{companyId}/items",
            "Item",
        )
        .with_param(ParameterDescriptor::path("companyId", "integer"))
        .with_param(ParameterDescriptor::query("include", "string").with_raw_name("$include"))
        .with_param(ParameterDescriptor::body("model", "Item"))
    }

    #[test]
    fn test_get_by_id() {
        let output = render(&testing::get_by_id()).unwrap();
        assert_eq!(
            output,
            r#"/**
 * Retrieve an item
 *
 * @param id The item id
 * @return Item
 */
Item getById(int id) {
    path = "/items/{id}";
    path.applyField("id", id);
    return call<Item>("GET", path, null);
}

/**
 * Retrieve an item
 *
 * @param id The item id
 * @return Item
 */
Future<Item> getByIdAsync(int id) {
    path = "/items/{id}";
    path.applyField("id", id);
    return submit<Item>("GET", path, null);
}
"#
        );
    }

    #[test]
    fn test_forms_bind_identically() {
        let output = render(&create_item()).unwrap();
        let (blocking, asynchronous) = output.split_at(output.find("Future<").unwrap());

        let bindings = |text: &str| -> Vec<String> {
            text.lines()
                .filter(|line| line.contains("path"))
                .map(|line| line.replace("submit", "call"))
                .collect()
        };
        assert_eq!(bindings(blocking), bindings(asynchronous));
        assert_eq!(bindings(blocking).len(), 4);
    }

    #[test]
    fn test_parameter_list_has_no_trailing_separator() {
        let output = render(&create_item()).unwrap();
        assert!(output.contains("Item createItem(int companyId, String include, Item model) {"));
        assert!(output.contains(
            "Future<Item> createItemAsync(int companyId, String include, Item model) {"
        ));
        assert!(!output.contains(", )"));
    }

    #[test]
    fn test_bindings_by_location() {
        let output = render(&create_item()).unwrap();
        assert_eq!(output.matches("path.applyField(\"companyId\", companyId);").count(), 2);
        assert_eq!(output.matches("path.addQuery(\"$include\", include);").count(), 2);
        assert!(output.contains("return call<Item>(\"POST\", path, model);"));
        assert!(output.contains("return submit<Item>(\"POST\", path, model);"));
        assert!(!output.contains("\"model\""));
    }

    #[test]
    fn test_zero_parameters() {
        let method = MethodDescriptor::new("Ping", HttpVerb::Get, "/utilities/ping", "string");
        let output = render(&method).unwrap();
        assert!(output.contains("String ping() {"));
        assert!(output.contains("Future<String> pingAsync() {"));
        assert!(output.contains("return call<String>(\"GET\", path, null);"));
    }

    #[test]
    fn test_excluded_parameter_is_hidden() {
        let method = testing::get_by_id().with_param(
            ParameterDescriptor::query("clientId", "string")
                .with_raw_name("X-Client")
                .with_comment("Client identification")
                .excluded(),
        );
        let output = render(&method).unwrap();
        assert!(output.contains("Item getById(int id) {"));
        assert!(!output.contains("clientId"));
        assert!(!output.contains("X-Client"));
    }

    #[test]
    fn test_reserved_parameter_name_escaped() {
        let method = MethodDescriptor::new("List", HttpVerb::Get, "/items", "list<Item>")
            .with_param(ParameterDescriptor::query("default", "boolean?"));
        let output = render(&method).unwrap();
        assert!(output.contains("List<Item> list(boolean? _default) {"));
        assert!(output.contains("path.addQuery(\"default\", _default);"));
    }

    #[test]
    fn test_two_body_parameters_rejected() {
        let method = create_item().with_param(ParameterDescriptor::body("extra", "string"));
        assert_eq!(
            render(&method).unwrap_err(),
            RenderError::AmbiguousBodyBinding {
                names: vec!["model".into(), "extra".into()]
            }
        );
    }

    #[test]
    fn test_failure_writes_nothing() {
        let language = testing::language();
        let types = TypeMapper::new(&language.types);
        let renderer = MemberRenderer::new(&language, &types, 100);
        let mut buf = RenderBuffer::new(language.indent);
        buf.write_line("// before");

        let method = MethodDescriptor::new("Broken", HttpVerb::Get, "/x", "Widget");
        assert!(renderer.render_method(&mut buf, &method).is_err());
        assert_eq!(buf.as_str(), "// before\n");
    }

    #[test]
    fn test_unknown_parameter_type() {
        let method = testing::get_by_id().with_param(ParameterDescriptor::query("w", "Widget"));
        assert_eq!(
            render(&method).unwrap_err(),
            RenderError::UnknownTypeReference {
                type_name: "Widget".into()
            }
        );
    }

    #[test]
    fn test_placeholder_without_path_parameter() {
        let method = MethodDescriptor::new("Get", HttpVerb::Get, "/items/{id}", "Item")
            .with_param(ParameterDescriptor::query("id", "integer"));
        assert_eq!(
            render(&method).unwrap_err(),
            RenderError::MalformedPathTemplate {
                uri: "/items/{id}".into(),
                defect: PathDefect::UnmatchedPlaceholder("id".into()),
            }
        );
    }

    #[test]
    fn test_body_parameter_as_placeholder() {
        let method = MethodDescriptor::new("Put", HttpVerb::Put, "/items/{model}", "Item")
            .with_param(ParameterDescriptor::body("model", "Item"));
        assert!(matches!(
            render(&method).unwrap_err(),
            RenderError::MalformedPathTemplate {
                defect: PathDefect::UnmatchedPlaceholder(_),
                ..
            }
        ));
    }

    #[test]
    fn test_path_parameter_without_placeholder() {
        let method = MethodDescriptor::new("Get", HttpVerb::Get, "/items", "Item")
            .with_param(ParameterDescriptor::path("id", "integer"));
        assert_eq!(
            render(&method).unwrap_err(),
            RenderError::MalformedPathTemplate {
                uri: "/items".into(),
                defect: PathDefect::UnboundParameter("id".into()),
            }
        );
    }

    #[test]
    fn test_excluded_path_parameter_leaves_placeholder_unmatched() {
        let method = MethodDescriptor::new("Get", HttpVerb::Get, "/tenants/{tenant}", "Item")
            .with_param(ParameterDescriptor::path("tenant", "string").excluded());
        assert!(matches!(
            render(&method).unwrap_err(),
            RenderError::MalformedPathTemplate { .. }
        ));
    }

    #[test]
    fn test_path_binding_uses_wire_name() {
        let method = MethodDescriptor::new("Get", HttpVerb::Get, "/items/{item_id}", "Item")
            .with_param(ParameterDescriptor::path("itemId", "integer").with_raw_name("item_id"));
        let output = render(&method).unwrap();
        assert!(output.contains("Item get(int itemId) {"));
        assert!(output.contains("path.applyField(\"item_id\", itemId);"));
    }
}
