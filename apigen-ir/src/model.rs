//! API model descriptors.
//!
//! Descriptors are plain data. The manifest loader deserializes them from
//! JSON or TOML and the rendering engine only ever reads them.

use serde::{Deserialize, Serialize};

use crate::{HttpVerb, ParameterLocation};

/// Root of an API description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiModel {
    /// Optional API version string, carried through to reports.
    #[serde(default)]
    pub version: Option<String>,
    /// Methods aggregated into the client unit, in declared order.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Data-transfer schemas, one unit each.
    #[serde(default)]
    pub schemas: Vec<SchemaDescriptor>,
    /// Enumerations, one unit each.
    #[serde(default)]
    pub enums: Vec<EnumDescriptor>,
}

impl ApiModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_schema(mut self, schema: SchemaDescriptor) -> Self {
        self.schemas.push(schema);
        self
    }

    pub fn with_enum(mut self, descriptor: EnumDescriptor) -> Self {
        self.enums.push(descriptor);
        self
    }

    /// Find a schema by name.
    pub fn schema(&self, name: &str) -> Option<&SchemaDescriptor> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// Find an enum by name.
    pub fn enumeration(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enums.iter().find(|e| e.name == name)
    }
}

/// One HTTP API operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MethodDescriptor {
    /// Method name as declared in the model (e.g., "GetById")
    pub name: String,
    pub verb: HttpVerb,
    /// URI template with `{name}` placeholders for path parameters
    pub uri: String,
    #[serde(default)]
    pub params: Vec<ParameterDescriptor>,
    /// Abstract type name of the response payload
    pub response_type: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    /// Grouping tag used by documentation, not by rendering
    #[serde(default)]
    pub category: Option<String>,
}

impl MethodDescriptor {
    pub fn new(
        name: impl Into<String>,
        verb: HttpVerb,
        uri: impl Into<String>,
        response_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            verb,
            uri: uri.into(),
            params: Vec::new(),
            response_type: response_type.into(),
            summary: String::new(),
            description: String::new(),
            category: None,
        }
    }

    pub fn with_param(mut self, param: ParameterDescriptor) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parameters that appear in the public signature, in declared order.
    pub fn visible_params(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.params.iter().filter(|p| !p.exclude_from_signature)
    }
}

/// One parameter of a method.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ParameterDescriptor {
    /// Target-safe name used in signatures
    pub name: String,
    /// Wire name: the URI placeholder or query key
    pub raw_name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub location: ParameterLocation,
    #[serde(default)]
    pub comment: String,
    /// Supplied by the transport layer instead of the caller
    #[serde(default)]
    pub exclude_from_signature: bool,
}

impl ParameterDescriptor {
    /// Create a parameter whose wire name equals its clean name.
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        location: ParameterLocation,
    ) -> Self {
        let name = name.into();
        Self {
            raw_name: name.clone(),
            name,
            type_name: type_name.into(),
            location,
            comment: String::new(),
            exclude_from_signature: false,
        }
    }

    pub fn path(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, type_name, ParameterLocation::Path)
    }

    pub fn query(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, type_name, ParameterLocation::Query)
    }

    pub fn body(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, type_name, ParameterLocation::Body)
    }

    pub fn with_raw_name(mut self, raw_name: impl Into<String>) -> Self {
        self.raw_name = raw_name.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Mark the parameter as hidden from the public signature.
    pub fn excluded(mut self) -> Self {
        self.exclude_from_signature = true;
        self
    }
}

/// A data-transfer object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SchemaDescriptor {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl SchemaDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PropertyDescriptor {
    /// Property name, possibly carrying a dotted package qualifier
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub comment: String,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// An enumeration with explicit integer values.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnumDescriptor {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: String::new(),
            values: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push(EnumValue::new(name, value));
        self
    }

    pub fn with_documented_value(
        mut self,
        name: impl Into<String>,
        value: i64,
        comment: impl Into<String>,
    ) -> Self {
        self.values.push(EnumValue::new(name, value).with_comment(comment));
        self
    }
}

/// One `(name, value, comment)` entry of an enumeration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
    #[serde(default)]
    pub comment: String,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
