//! C# syntax templates and XML documentation style.

use apigen_codegen::{
    comment::CommentStyle,
    language::{
        EnumSyntax, MethodSyntax, PropertyDocs, PropertySyntax, Syntax, UnitSyntax, VerbStyle,
    },
    naming::CasingRule,
};

/// Escape XML markup, leaving entity references that are already escaped.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (index, c) in text.char_indices() {
        match c {
            '&' if starts_with_entity(&text[index..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn starts_with_entity(text: &str) -> bool {
    let Some(end) = text.find(';') else {
        return false;
    };
    match &text[1..end] {
        "amp" | "lt" | "gt" | "quot" | "apos" => true,
        name => name
            .strip_prefix('#')
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())),
    }
}

/// XML documentation comment style.
pub const XML_DOC: CommentStyle = CommentStyle {
    open: None,
    prefix: "/// ",
    close: None,
    summary: Some(("<summary>", "</summary>")),
    blank_before_tags: false,
    param_tag: |name, text| format!("<param name=\"{}\">{}</param>", name, text),
    returns_tag: |text| format!("<returns>{}</returns>", text),
    escape: escape_xml,
};

/// C# source templates.
///
/// Every unit lives in a block-scoped namespace, so members sit two levels deep.
pub static CSHARP_SYNTAX: Syntax = Syntax {
    client: UnitSyntax {
        preamble: &[
            (0, "using System;"),
            (0, "using System.Collections.Generic;"),
            (0, "using System.Threading.Tasks;"),
            (0, "using {0}.Models;"),
            (0, "using {0}.Enums;"),
            (0, ""),
            (0, "namespace {0}"),
            (0, "{"),
        ],
        open: &[(1, "public partial class {1}"), (1, "{")],
        close: &[(1, "}"), (0, "}")],
        doc_depth: 1,
        member_depth: 2,
        directory: None,
    },
    schema: UnitSyntax {
        preamble: &[
            (0, "using System;"),
            (0, "using System.Collections.Generic;"),
            (0, "using {0}.Enums;"),
            (0, ""),
            (0, "namespace {0}.Models"),
            (0, "{"),
        ],
        open: &[(1, "public class {1}"), (1, "{")],
        close: &[(1, "}"), (0, "}")],
        doc_depth: 1,
        member_depth: 2,
        directory: Some("Models"),
    },
    enumeration: UnitSyntax {
        preamble: &[
            (0, "using System.Collections.Generic;"),
            (0, ""),
            (0, "namespace {0}.Enums"),
            (0, "{"),
        ],
        open: &[(1, "public enum {1}"), (1, "{")],
        // Closes the lookup class opened after the enum body
        close: &[(1, "}"), (0, "}")],
        doc_depth: 1,
        member_depth: 2,
        directory: Some("Enums"),
    },
    method: MethodSyntax {
        name_casing: CasingRule::AsDeclared,
        sync_signature: "public {0} {1}(",
        async_signature: "public async Task<{0}> {1}Async(",
        parameter: "{0} {1}",
        separator: ", ",
        sync_params_close: ")",
        async_params_close: ")",
        body_open: &[(0, "{")],
        path_init: "var path = new ApiPath(\"{0}\");",
        path_binding: "path.ApplyField(\"{0}\", {1});",
        query_binding: "path.AddQuery(\"{0}\", {1});",
        sync_call: "return RestCall<{0}>(\"{1}\", path, {2});",
        async_call: "return await RestCallAsync<{0}>(\"{1}\", path, {2}).ConfigureAwait(false);",
        no_body: "null",
        verb_style: VerbStyle::Pascal,
        close: &[(0, "}")],
    },
    property: PropertySyntax {
        field: "private {0} _{3};",
        open: &[(0, "public {0} {2}"), (0, "{")],
        getter: &[(1, "get { return _{3}; }")],
        setter: &[(1, "set { _{3} = value; }")],
        close: &[(0, "}")],
        blank_between_accessors: false,
        docs: PropertyDocs::OnProperty,
    },
    enum_values: EnumSyntax {
        constant: "{0} = {1}",
        separator: ",\n\n",
        terminator: "",
        empty_terminator: "",
        lookup_open: &[
            (1, "}"),
            (0, ""),
            (1, "/// <summary>"),
            (1, "/// Reverse lookup from integer value to <see cref=\"{0}\"/>"),
            (1, "/// </summary>"),
            (1, "public static class {0}Lookup"),
            (1, "{"),
            (2, "private static readonly Dictionary<int, {0}> ByValue = new()"),
            (2, "{"),
        ],
        lookup_entry: Some("{ {0}, {1}.{2} }"),
        entry_depth: 3,
        entry_separator: ",\n",
        lookup_close: &[
            (2, "};"),
            (0, ""),
            (2, "/// <summary>"),
            (2, "/// Look up the constant declared with an integer value"),
            (2, "/// </summary>"),
            (2, "/// <returns>False when no constant has this value</returns>"),
            (2, "public static bool TryFromValue(int value, out {0} result)"),
            (2, "{"),
            (3, "return ByValue.TryGetValue(value, out result);"),
            (2, "}"),
        ],
    },
};
