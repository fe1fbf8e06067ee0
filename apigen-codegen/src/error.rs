//! Rendering errors.

use std::fmt;

use thiserror::Error;

use crate::UnitKind;

/// A deterministic defect in the model or a language definition that stops
/// one source unit from rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unknown type reference '{type_name}'")]
    UnknownTypeReference { type_name: String },

    #[error("more than one body parameter: {}", names.join(", "))]
    AmbiguousBodyBinding { names: Vec<String> },

    #[error("malformed path template '{uri}': {defect}")]
    MalformedPathTemplate { uri: String, defect: PathDefect },

    /// Generated enums are backed by a 32-bit integer.
    #[error("enum value {value} does not fit in a 32-bit integer")]
    EnumValueOutOfRange { value: i64 },

    #[error("cannot backtrack {requested} characters, only {available} written")]
    BacktrackUnderflow { requested: usize, available: usize },

    #[error("invalid template line '{template}': {reason}")]
    LineTemplate { template: String, reason: String },
}

/// What is wrong with a URI template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDefect {
    /// A `{placeholder}` with no path parameter of that wire name.
    UnmatchedPlaceholder(String),
    /// A path parameter whose wire name never appears as a placeholder.
    UnboundParameter(String),
    DuplicatePlaceholder(String),
    /// A `{` without its closing `}`.
    Unterminated,
}

impl fmt::Display for PathDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathDefect::UnmatchedPlaceholder(name) => {
                write!(f, "placeholder '{{{}}}' has no matching path parameter", name)
            }
            PathDefect::UnboundParameter(name) => {
                write!(f, "path parameter '{}' has no placeholder", name)
            }
            PathDefect::DuplicatePlaceholder(name) => {
                write!(f, "placeholder '{{{}}}' appears more than once", name)
            }
            PathDefect::Unterminated => f.write_str("unterminated placeholder"),
        }
    }
}

/// A render error located at the unit (and member) that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    pub unit: String,
    pub kind: UnitKind,
    /// Method, property or enum value being rendered when the error occurred
    pub member: Option<String>,
    pub error: RenderError,
}

impl fmt::Display for UnitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.unit)?;
        if let Some(member) = &self.member {
            write!(f, ", member '{}'", member)?;
        }
        write!(f, ": {}", self.error)
    }
}

impl std::error::Error for UnitFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_messages() {
        let err = RenderError::AmbiguousBodyBinding {
            names: vec!["model".into(), "extra".into()],
        };
        assert_eq!(err.to_string(), "more than one body parameter: model, extra");

        let err = RenderError::MalformedPathTemplate {
            uri: "/items/{id}".into(),
            defect: PathDefect::UnmatchedPlaceholder("id".into()),
        };
        assert_eq!(
            err.to_string(),
            "malformed path template '/items/{id}': placeholder '{id}' has no matching path parameter"
        );

        let err = RenderError::EnumValueOutOfRange {
            value: 3_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "enum value 3000000000 does not fit in a 32-bit integer"
        );
    }

    #[test]
    fn test_unit_failure_display() {
        let failure = UnitFailure {
            unit: "ExampleClient".into(),
            kind: UnitKind::Client,
            member: Some("CreateItem".into()),
            error: RenderError::UnknownTypeReference {
                type_name: "Widget".into(),
            },
        };
        assert_eq!(
            failure.to_string(),
            "client 'ExampleClient', member 'CreateItem': unknown type reference 'Widget'"
        );
    }
}
