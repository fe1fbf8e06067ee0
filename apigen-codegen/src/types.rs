//! Abstract type names and their mapping to target type syntax.
//!
//! The model speaks a closed vocabulary of type names: scalars,
//! `list<T>`, `T?`, and names of schemas and enums declared in the model.
//! A [`TypeTable`] supplies the target spelling for each, and the
//! [`TypeMapper`] applies it. Names outside the vocabulary are errors.

use std::{borrow::Cow, collections::HashSet};

use apigen_ir::ApiModel;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{RenderError, builder::substitute};

/// Built-in scalar type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    String,
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    /// Arbitrary-precision decimal
    Decimal,
    Char,
    Date,
    DateTime,
    /// Opaque binary blob
    Binary,
}

impl Scalar {
    pub const ALL: [Scalar; 13] = [
        Scalar::String,
        Scalar::Boolean,
        Scalar::Byte,
        Scalar::Short,
        Scalar::Integer,
        Scalar::Long,
        Scalar::Float,
        Scalar::Double,
        Scalar::Decimal,
        Scalar::Char,
        Scalar::Date,
        Scalar::DateTime,
        Scalar::Binary,
    ];

    /// The abstract name as it appears in models.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scalar::String => "string",
            Scalar::Boolean => "boolean",
            Scalar::Byte => "byte",
            Scalar::Short => "short",
            Scalar::Integer => "integer",
            Scalar::Long => "long",
            Scalar::Float => "float",
            Scalar::Double => "double",
            Scalar::Decimal => "decimal",
            Scalar::Char => "char",
            Scalar::Date => "date",
            Scalar::DateTime => "datetime",
            Scalar::Binary => "binary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

/// A parsed abstract type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbstractType {
    Scalar(Scalar),
    List(Box<AbstractType>),
    Nullable(Box<AbstractType>),
    /// A schema, enum or external type
    Named(String),
}

impl AbstractType {
    /// Parse an abstract type name.
    ///
    /// Nested nullability (`T??`) and malformed names are reported as
    /// unknown type references.
    pub fn parse(name: &str) -> Result<Self, RenderError> {
        let unknown = || RenderError::UnknownTypeReference {
            type_name: name.to_string(),
        };
        let trimmed = name.trim();

        if let Some(inner) = trimmed.strip_suffix('?') {
            return match Self::parse(inner)? {
                AbstractType::Nullable(_) => Err(unknown()),
                inner => Ok(AbstractType::Nullable(Box::new(inner))),
            };
        }

        if let Some(inner) = trimmed
            .strip_prefix("list<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Ok(AbstractType::List(Box::new(Self::parse(inner)?)));
        }

        if let Some(scalar) = Scalar::from_name(trimmed) {
            return Ok(AbstractType::Scalar(scalar));
        }

        let mut chars = trimmed.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if starts_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Ok(AbstractType::Named(trimmed.to_string()))
        } else {
            Err(unknown())
        }
    }
}

/// Target spelling of every scalar. One required field per scalar keeps a
/// table total by construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarNames {
    pub string: Cow<'static, str>,
    pub boolean: Cow<'static, str>,
    pub byte: Cow<'static, str>,
    pub short: Cow<'static, str>,
    pub integer: Cow<'static, str>,
    pub long: Cow<'static, str>,
    pub float: Cow<'static, str>,
    pub double: Cow<'static, str>,
    pub decimal: Cow<'static, str>,
    pub char: Cow<'static, str>,
    pub date: Cow<'static, str>,
    pub datetime: Cow<'static, str>,
    pub binary: Cow<'static, str>,
}

impl ScalarNames {
    pub fn get(&self, scalar: Scalar) -> &str {
        match scalar {
            Scalar::String => &self.string,
            Scalar::Boolean => &self.boolean,
            Scalar::Byte => &self.byte,
            Scalar::Short => &self.short,
            Scalar::Integer => &self.integer,
            Scalar::Long => &self.long,
            Scalar::Float => &self.float,
            Scalar::Double => &self.double,
            Scalar::Decimal => &self.decimal,
            Scalar::Char => &self.char,
            Scalar::Date => &self.date,
            Scalar::DateTime => &self.datetime,
            Scalar::Binary => &self.binary,
        }
    }
}

/// Target-language type table.
///
/// ```toml
/// list = "List<{0}>"
/// nullable = "{0}?"
///
/// [scalars]
/// string = "string"
/// # ... one entry per scalar
///
/// [external]
/// FileResult = "FileResult"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeTable {
    pub scalars: ScalarNames,
    /// Collection template, `{0}` is the element type
    pub list: Cow<'static, str>,
    /// Nullable template, `{0}` is the wrapped type
    pub nullable: Cow<'static, str>,
    /// Named types provided by the runtime library rather than the model
    #[serde(default)]
    pub external: IndexMap<String, String>,
}

impl TypeTable {
    /// Load a table from TOML.
    pub fn from_toml_str(content: &str) -> eyre::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Maps abstract type names to target syntax for one model.
#[derive(Debug, Clone)]
pub struct TypeMapper<'a> {
    table: &'a TypeTable,
    named: HashSet<&'a str>,
}

impl<'a> TypeMapper<'a> {
    /// A mapper that knows no named types beyond the table's externals.
    pub fn new(table: &'a TypeTable) -> Self {
        Self {
            table,
            named: HashSet::new(),
        }
    }

    /// A mapper that resolves the schemas and enums declared in `model`.
    pub fn for_model(table: &'a TypeTable, model: &'a ApiModel) -> Self {
        let mut mapper = Self::new(table);
        mapper.named.extend(model.schemas.iter().map(|s| s.name.as_str()));
        mapper.named.extend(model.enums.iter().map(|e| e.name.as_str()));
        mapper
    }

    /// Register an additional named type.
    pub fn with_named(mut self, name: &'a str) -> Self {
        self.named.insert(name);
        self
    }

    /// Map an abstract type name to target syntax.
    pub fn map_type(&self, name: &str) -> Result<String, RenderError> {
        self.map(&AbstractType::parse(name)?)
    }

    pub fn map(&self, ty: &AbstractType) -> Result<String, RenderError> {
        match ty {
            AbstractType::Scalar(scalar) => Ok(self.table.scalars.get(*scalar).to_string()),
            AbstractType::List(inner) => {
                substitute(&self.table.list, &[self.map(inner)?.as_str()])
            }
            AbstractType::Nullable(inner) => {
                substitute(&self.table.nullable, &[self.map(inner)?.as_str()])
            }
            AbstractType::Named(name) => {
                if let Some(external) = self.table.external.get(name) {
                    Ok(external.clone())
                } else if self.named.contains(name.as_str()) {
                    Ok(name.clone())
                } else {
                    Err(RenderError::UnknownTypeReference {
                        type_name: name.clone(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use apigen_ir::{EnumDescriptor, SchemaDescriptor};

    use super::*;

    const TABLE: &str = r#"
list = "List<{0}>"
nullable = "{0}?"

[scalars]
string = "string"
boolean = "bool"
byte = "byte"
short = "short"
integer = "int"
long = "long"
float = "float"
double = "double"
decimal = "decimal"
char = "char"
date = "DateTime"
datetime = "DateTime"
binary = "byte[]"

[external]
FileResult = "FileResult"
"#;

    fn table() -> TypeTable {
        TypeTable::from_toml_str(TABLE).unwrap()
    }

    #[test]
    fn test_scalar_names_round_trip() {
        for scalar in Scalar::ALL {
            assert_eq!(Scalar::from_name(scalar.as_str()), Some(scalar));
        }
        assert_eq!(Scalar::from_name("int"), None);
    }

    #[test]
    fn test_parse_abstract_types() {
        assert_eq!(
            AbstractType::parse("integer").unwrap(),
            AbstractType::Scalar(Scalar::Integer)
        );
        assert_eq!(
            AbstractType::parse("list<Item?>").unwrap(),
            AbstractType::List(Box::new(AbstractType::Nullable(Box::new(
                AbstractType::Named("Item".into())
            ))))
        );
        assert_eq!(
            AbstractType::parse("list<integer>?").unwrap(),
            AbstractType::Nullable(Box::new(AbstractType::List(Box::new(
                AbstractType::Scalar(Scalar::Integer)
            ))))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(AbstractType::parse("integer??").is_err());
        assert!(AbstractType::parse("list<").is_err());
        assert!(AbstractType::parse("map<string, integer>").is_err());
        assert!(AbstractType::parse("").is_err());
    }

    #[test]
    fn test_map_every_scalar() {
        let table = table();
        let mapper = TypeMapper::new(&table);
        for scalar in Scalar::ALL {
            assert!(mapper.map_type(scalar.as_str()).is_ok());
        }
        assert_eq!(mapper.map_type("decimal").unwrap(), "decimal");
        assert_eq!(mapper.map_type("binary").unwrap(), "byte[]");
    }

    #[test]
    fn test_map_composites() {
        let table = table();
        let mapper = TypeMapper::new(&table).with_named("Item");
        assert_eq!(mapper.map_type("list<Item>").unwrap(), "List<Item>");
        assert_eq!(mapper.map_type("integer?").unwrap(), "int?");
        assert_eq!(mapper.map_type("list<long?>").unwrap(), "List<long?>");
        assert_eq!(mapper.map_type("FileResult").unwrap(), "FileResult");
    }

    #[test]
    fn test_map_model_names() {
        let table = table();
        let model = ApiModel::new()
            .with_schema(SchemaDescriptor::new("Address"))
            .with_enum(EnumDescriptor::new("Status"));
        let mapper = TypeMapper::for_model(&table, &model);

        assert_eq!(mapper.map_type("Address").unwrap(), "Address");
        assert_eq!(mapper.map_type("list<Status>").unwrap(), "List<Status>");
    }

    #[test]
    fn test_unknown_type_is_error() {
        let table = table();
        let mapper = TypeMapper::new(&table);
        assert_eq!(
            mapper.map_type("list<Widget>").unwrap_err(),
            RenderError::UnknownTypeReference {
                type_name: "Widget".into()
            }
        );
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let table = table();
        let mapper = TypeMapper::new(&table).with_named("Item");
        let first = mapper.map_type("list<Item?>").unwrap();
        let second = mapper.map_type("list<Item?>").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_table_requires_every_scalar() {
        let partial = TABLE.replace("binary = \"byte[]\"\n", "");
        assert!(TypeTable::from_toml_str(&partial).is_err());
    }
}
