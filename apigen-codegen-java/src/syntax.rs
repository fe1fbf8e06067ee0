//! Java syntax templates and Javadoc style.

use apigen_codegen::{
    comment::CommentStyle,
    language::{
        EnumSyntax, MethodSyntax, PropertyDocs, PropertySyntax, Syntax, UnitSyntax, VerbStyle,
    },
    naming::CasingRule,
};

fn escape_javadoc(text: &str) -> String {
    text.replace("*/", "*&#47;")
}

/// Javadoc comment style.
pub const JAVADOC: CommentStyle = CommentStyle {
    open: Some("/**"),
    prefix: " * ",
    close: Some(" */"),
    summary: None,
    blank_before_tags: true,
    param_tag: |name, text| format!("@param {} {}", name, text),
    returns_tag: |text| format!("@return {}", text),
    escape: escape_javadoc,
};

/// Java source templates.
pub static JAVA_SYNTAX: Syntax = Syntax {
    client: UnitSyntax {
        preamble: &[
            (0, "package {0};"),
            (0, ""),
            (0, "import {0}.models.*;"),
            (0, "import {0}.enums.*;"),
            (0, "import com.google.gson.reflect.TypeToken;"),
            (0, "import java.math.BigDecimal;"),
            (0, "import java.util.*;"),
            (0, "import java.util.concurrent.ExecutorService;"),
            (0, "import java.util.concurrent.Future;"),
            (0, ""),
        ],
        open: &[
            (0, "public class {1} {"),
            (1, "private final ExecutorService threadPool;"),
            (1, "private final RestCallFactory restCallFactory;"),
            (0, ""),
            (1, "public {1}(ExecutorService threadPool, RestCallFactory restCallFactory) {"),
            (2, "this.threadPool = threadPool;"),
            (2, "this.restCallFactory = restCallFactory;"),
            (1, "}"),
            (0, ""),
        ],
        close: &[(0, "}")],
        doc_depth: 0,
        member_depth: 1,
        directory: None,
    },
    schema: UnitSyntax {
        preamble: &[
            (0, "package {0}.models;"),
            (0, ""),
            (0, "import {0}.JsonSerializer;"),
            (0, "import {0}.enums.*;"),
            (0, "import java.math.BigDecimal;"),
            (0, "import java.util.*;"),
            (0, ""),
        ],
        open: &[(0, "public class {1} {")],
        close: &[
            (0, ""),
            (1, "/**"),
            (1, " * @return A JSON string representation of this object"),
            (1, " */"),
            (1, "@Override"),
            (1, "public String toString() {"),
            (2, "return JsonSerializer.serialize(this);"),
            (1, "}"),
            (0, "}"),
        ],
        doc_depth: 0,
        member_depth: 1,
        directory: Some("models"),
    },
    enumeration: UnitSyntax {
        preamble: &[
            (0, "package {0}.enums;"),
            (0, ""),
            (0, "import java.util.HashMap;"),
            (0, "import java.util.Optional;"),
            (0, ""),
        ],
        open: &[(0, "public enum {1} {")],
        close: &[(0, "}")],
        doc_depth: 0,
        member_depth: 1,
        directory: Some("enums"),
    },
    method: MethodSyntax {
        name_casing: CasingRule::FirstCharLower,
        sync_signature: "public {0} {1}(",
        async_signature: "public Future<{0}> {1}Async(",
        parameter: "{0} {1}",
        separator: ", ",
        sync_params_close: ") throws Exception {",
        async_params_close: ") {",
        body_open: &[],
        path_init: "ApiPath path = new ApiPath(\"{0}\");",
        path_binding: "path.applyField(\"{0}\", {1});",
        query_binding: "path.addQuery(\"{0}\", {1});",
        sync_call: "return ((RestCall<{0}>)restCallFactory.createRestCall(\"{1}\", path, {2}, \
                    new TypeToken<{3}>(){})).call();",
        async_call: "return this.threadPool.submit((RestCall<{0}>)restCallFactory\
                     .createRestCall(\"{1}\", path, {2}, new TypeToken<{3}>(){}));",
        no_body: "null",
        verb_style: VerbStyle::Upper,
        close: &[(0, "}")],
    },
    property: PropertySyntax {
        field: "private {0} {1};",
        open: &[],
        getter: &[
            (0, "public {0} get{2}() {"),
            (1, "return this.{1};"),
            (0, "}"),
        ],
        setter: &[
            (0, "public void set{2}({0} value) {"),
            (1, "this.{1} = value;"),
            (0, "}"),
        ],
        close: &[],
        blank_between_accessors: true,
        docs: PropertyDocs::OnAccessors {
            getter: "Getter for {0}",
            setter: "Setter for {0}",
        },
    },
    enum_values: EnumSyntax {
        constant: "{0}({1})",
        separator: ",\n\n",
        terminator: ";",
        empty_terminator: ";",
        lookup_open: &[
            (0, ""),
            (1, "private final int value;"),
            (1, "private static final HashMap<Integer, {0}> byValue = new HashMap<>();"),
            (0, ""),
            (1, "{0}(int value) {"),
            (2, "this.value = value;"),
            (1, "}"),
            (0, ""),
            (1, "static {"),
            (2, "for ({0} item : values()) {"),
            (3, "byValue.putIfAbsent(item.value, item);"),
            (2, "}"),
            (1, "}"),
            (0, ""),
            (1, "/**"),
            (1, " * Look up the constant declared with an integer value"),
            (1, " *"),
            (1, " * @param value The integer value"),
            (1, " * @return The constant, or empty when no constant has this value"),
            (1, " */"),
            (1, "public static Optional<{0}> fromValue(int value) {"),
            (2, "return Optional.ofNullable(byValue.get(value));"),
            (1, "}"),
            (0, ""),
            (1, "public int getValue() {"),
            (2, "return value;"),
            (1, "}"),
        ],
        lookup_entry: None,
        entry_depth: 0,
        entry_separator: "",
        lookup_close: &[],
    },
};
