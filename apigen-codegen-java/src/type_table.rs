//! Java type table.

use std::borrow::Cow;

use apigen_codegen::types::{ScalarNames, TypeTable};
use indexmap::IndexMap;

/// Build the Java type table.
///
/// Scalars map to boxed types so they can appear as generic arguments.
pub fn java_type_table() -> TypeTable {
    let mut external = IndexMap::new();
    external.insert("FileResult".to_string(), "FileResult".to_string());

    TypeTable {
        scalars: ScalarNames {
            string: Cow::Borrowed("String"),
            boolean: Cow::Borrowed("Boolean"),
            byte: Cow::Borrowed("Byte"),
            short: Cow::Borrowed("Short"),
            integer: Cow::Borrowed("Integer"),
            long: Cow::Borrowed("Long"),
            float: Cow::Borrowed("Float"),
            double: Cow::Borrowed("Double"),
            decimal: Cow::Borrowed("BigDecimal"),
            char: Cow::Borrowed("Character"),
            date: Cow::Borrowed("Date"),
            datetime: Cow::Borrowed("Date"),
            binary: Cow::Borrowed("byte[]"),
        },
        list: Cow::Borrowed("ArrayList<{0}>"),
        nullable: Cow::Borrowed("{0}"),
        external,
    }
}

#[cfg(test)]
mod tests {
    use apigen_codegen::{RenderError, types::TypeMapper};

    use super::*;

    #[test]
    fn test_java_scalars_are_boxed() {
        let table = java_type_table();
        let mapper = TypeMapper::new(&table);
        assert_eq!(mapper.map_type("integer").unwrap(), "Integer");
        assert_eq!(mapper.map_type("boolean").unwrap(), "Boolean");
        assert_eq!(mapper.map_type("decimal").unwrap(), "BigDecimal");
        assert_eq!(mapper.map_type("binary").unwrap(), "byte[]");
    }

    #[test]
    fn test_java_composites() {
        let table = java_type_table();
        let mapper = TypeMapper::new(&table).with_named("Address");
        assert_eq!(mapper.map_type("list<Address>").unwrap(), "ArrayList<Address>");
        assert_eq!(mapper.map_type("long?").unwrap(), "Long");
        assert_eq!(mapper.map_type("FileResult").unwrap(), "FileResult");
    }

    #[test]
    fn test_java_unknown_type() {
        let table = java_type_table();
        let mapper = TypeMapper::new(&table);
        assert!(matches!(
            mapper.map_type("list<Widget>"),
            Err(RenderError::UnknownTypeReference { type_name }) if type_name == "Widget"
        ));
    }
}
