//! A compact language definition for engine tests.

use std::borrow::Cow;

use apigen_ir::{
    ApiModel, EnumDescriptor, HttpVerb, MethodDescriptor, ParameterDescriptor, PropertyDescriptor,
    SchemaDescriptor,
};
use indexmap::IndexMap;

use crate::{
    builder::Indent,
    comment::CommentStyle,
    language::{
        EnumSyntax, MethodSyntax, PropertyDocs, PropertySyntax, Syntax, TargetLanguage,
        UnitSyntax, VerbStyle,
    },
    naming::{CasingRule, NamingConvention},
    types::{ScalarNames, TypeTable},
};

static SYNTAX: Syntax = Syntax {
    client: UnitSyntax {
        preamble: &[(0, "package {0};"), (0, "")],
        open: &[(0, "class {1} {")],
        close: &[(0, "}")],
        doc_depth: 0,
        member_depth: 1,
        directory: None,
    },
    schema: UnitSyntax {
        preamble: &[(0, "package {0}.models;"), (0, "")],
        open: &[(0, "class {1} {")],
        close: &[(0, "}")],
        doc_depth: 0,
        member_depth: 1,
        directory: Some("models"),
    },
    enumeration: UnitSyntax {
        preamble: &[(0, "package {0}.enums;"), (0, "")],
        open: &[(0, "enum {1} {")],
        close: &[(0, "}")],
        doc_depth: 0,
        member_depth: 1,
        directory: Some("enums"),
    },
    method: MethodSyntax {
        name_casing: CasingRule::FirstCharLower,
        sync_signature: "{0} {1}(",
        async_signature: "Future<{0}> {1}Async(",
        parameter: "{0} {1}",
        separator: ", ",
        sync_params_close: ") {",
        async_params_close: ") {",
        body_open: &[],
        path_init: "path = \"{0}\";",
        path_binding: "path.applyField(\"{0}\", {1});",
        query_binding: "path.addQuery(\"{0}\", {1});",
        sync_call: "return call<{0}>(\"{1}\", path, {2});",
        async_call: "return submit<{0}>(\"{1}\", path, {2});",
        no_body: "null",
        verb_style: VerbStyle::Upper,
        close: &[(0, "}")],
    },
    property: PropertySyntax {
        field: "private {0} {1};",
        open: &[],
        getter: &[(0, "{0} get{2}() { return {1}; }")],
        setter: &[(0, "void set{2}({0} value) { {1} = value; }")],
        close: &[],
        blank_between_accessors: false,
        docs: PropertyDocs::OnAccessors {
            getter: "Getter for {0}",
            setter: "Setter for {0}",
        },
    },
    enum_values: EnumSyntax {
        constant: "{0}({1})",
        separator: ",\n",
        terminator: ";",
        empty_terminator: ";",
        lookup_open: &[(0, ""), (1, "static {0} fromValue(int value) {"), (2, "switch (value) {")],
        lookup_entry: Some("case {0}: return {1}.{2};"),
        entry_depth: 3,
        entry_separator: "\n",
        lookup_close: &[(2, "}"), (2, "return null;"), (1, "}")],
    },
};

pub(crate) fn language() -> TargetLanguage {
    let mut external = IndexMap::new();
    external.insert("FileResult".to_string(), "FileResult".to_string());

    TargetLanguage {
        name: "test",
        extension: "txt",
        indent: Indent::spaces(4),
        types: TypeTable {
            scalars: ScalarNames {
                string: Cow::Borrowed("String"),
                boolean: Cow::Borrowed("boolean"),
                byte: Cow::Borrowed("byte"),
                short: Cow::Borrowed("short"),
                integer: Cow::Borrowed("int"),
                long: Cow::Borrowed("long"),
                float: Cow::Borrowed("float"),
                double: Cow::Borrowed("double"),
                decimal: Cow::Borrowed("BigDecimal"),
                char: Cow::Borrowed("char"),
                date: Cow::Borrowed("Date"),
                datetime: Cow::Borrowed("Date"),
                binary: Cow::Borrowed("byte[]"),
            },
            list: Cow::Borrowed("List<{0}>"),
            nullable: Cow::Borrowed("{0}?"),
            external,
        },
        naming: NamingConvention {
            reserved_words: &["class", "default"],
            escape_reserved: |name| format!("_{}", name),
        },
        comments: CommentStyle {
            open: Some("/**"),
            prefix: " * ",
            close: Some(" */"),
            summary: None,
            blank_before_tags: true,
            param_tag: |name, text| format!("@param {} {}", name, text),
            returns_tag: |text| format!("@return {}", text),
            escape: |text| text.replace("*/", "*&#47;"),
        },
        syntax: &SYNTAX,
    }
}

/// `GetById`: `GET /items/{id}` returning `Item`.
pub(crate) fn get_by_id() -> MethodDescriptor {
    MethodDescriptor::new("GetById", HttpVerb::Get, "/items/{id}", "Item")
        .with_summary("Retrieve an item")
        .with_param(ParameterDescriptor::path("id", "integer").with_comment("The item id"))
}

pub(crate) fn item_model() -> ApiModel {
    ApiModel::new()
        .with_method(get_by_id())
        .with_schema(
            SchemaDescriptor::new("Item")
                .with_property(PropertyDescriptor::new("id", "integer"))
                .with_property(PropertyDescriptor::new("name", "string")),
        )
        .with_enum(
            EnumDescriptor::new("Status")
                .with_value("Active", 1)
                .with_value("Inactive", 2),
        )
}
