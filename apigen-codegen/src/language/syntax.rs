//! Syntax templates.
//!
//! Every template uses positional placeholders (see
//! [`substitute`](crate::builder::substitute)); the placeholder meaning is
//! documented on each field. Multi-line [`Template`]s carry their own
//! indent depths.

use crate::{builder::Template, naming::CasingRule};

/// All templates of one language.
#[derive(Debug)]
pub struct Syntax {
    pub client: UnitSyntax,
    pub schema: UnitSyntax,
    pub enumeration: UnitSyntax,
    pub method: MethodSyntax,
    pub property: PropertySyntax,
    pub enum_values: EnumSyntax,
}

/// Framing of one source unit.
///
/// Templates take `{0}` = namespace and `{1}` = unit name and are emitted
/// from indent level zero.
#[derive(Debug)]
pub struct UnitSyntax {
    /// Package declaration and imports
    pub preamble: Template,
    /// Type declaration up to and including its opening brace
    pub open: Template,
    pub close: Template,
    /// Indent level of the type's doc comment
    pub doc_depth: usize,
    /// Indent level of members
    pub member_depth: usize,
    /// Subdirectory of the output holding this kind of unit
    pub directory: Option<&'static str>,
}

/// How the HTTP verb is spelled in call statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbStyle {
    /// `GET`
    Upper,
    /// `Get`
    Pascal,
}

/// Method templates. Each method renders twice: blocking, then asynchronous.
#[derive(Debug)]
pub struct MethodSyntax {
    pub name_casing: CasingRule,
    /// `{0}` = return type, `{1}` = method name
    pub sync_signature: &'static str,
    /// `{0}` = return type, `{1}` = method name
    pub async_signature: &'static str,
    /// `{0}` = type, `{1}` = identifier
    pub parameter: &'static str,
    /// Written after every parameter, backtracked after the last
    pub separator: &'static str,
    pub sync_params_close: &'static str,
    pub async_params_close: &'static str,
    /// Lines between the signature and the body
    pub body_open: Template,
    /// `{0}` = URI template
    pub path_init: &'static str,
    /// `{0}` = wire name, `{1}` = identifier
    pub path_binding: &'static str,
    /// `{0}` = wire name, `{1}` = identifier
    pub query_binding: &'static str,
    /// `{0}` = return type, `{1}` = verb, `{2}` = body, `{3}` = return type
    pub sync_call: &'static str,
    /// `{0}` = return type, `{1}` = verb, `{2}` = body, `{3}` = return type
    pub async_call: &'static str,
    /// Body argument when the method has no body parameter
    pub no_body: &'static str,
    pub verb_style: VerbStyle,
    pub close: Template,
}

/// Where property documentation goes.
#[derive(Debug, Clone, Copy)]
pub enum PropertyDocs {
    /// One doc comment on the property declaration
    OnProperty,
    /// A doc comment on each accessor; `{0}` = field identifier
    OnAccessors {
        getter: &'static str,
        setter: &'static str,
    },
}

/// Property templates.
///
/// `{0}` = type, `{1}` = field identifier, `{2}` = accessor suffix,
/// `{3}` = unescaped lower-cased name.
#[derive(Debug)]
pub struct PropertySyntax {
    pub field: &'static str,
    pub open: Template,
    pub getter: Template,
    pub setter: Template,
    pub close: Template,
    /// Separate the getter and setter with a blank line
    pub blank_between_accessors: bool,
    pub docs: PropertyDocs,
}

/// Enumeration templates.
#[derive(Debug)]
pub struct EnumSyntax {
    /// `{0}` = constant name, `{1}` = integer value
    pub constant: &'static str,
    /// Written after every constant, backtracked after the last
    pub separator: &'static str,
    /// Written after the last constant
    pub terminator: &'static str,
    /// Written as a line when there are no constants at all
    pub empty_terminator: &'static str,
    /// Reverse lookup framing, emitted from indent level zero; `{0}` = enum name
    pub lookup_open: Template,
    /// One entry per distinct value: `{0}` = value, `{1}` = enum name, `{2}` = constant
    pub lookup_entry: Option<&'static str>,
    pub entry_depth: usize,
    pub entry_separator: &'static str,
    pub lookup_close: Template,
}
