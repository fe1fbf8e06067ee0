//! C# type table.

use std::borrow::Cow;

use apigen_codegen::types::{ScalarNames, TypeTable};
use indexmap::IndexMap;

/// Build the C# type table.
pub fn csharp_type_table() -> TypeTable {
    let mut external = IndexMap::new();
    external.insert("FileResult".to_string(), "FileResult".to_string());

    TypeTable {
        scalars: ScalarNames {
            string: Cow::Borrowed("string"),
            boolean: Cow::Borrowed("bool"),
            byte: Cow::Borrowed("byte"),
            short: Cow::Borrowed("short"),
            integer: Cow::Borrowed("int"),
            long: Cow::Borrowed("long"),
            float: Cow::Borrowed("float"),
            double: Cow::Borrowed("double"),
            decimal: Cow::Borrowed("decimal"),
            char: Cow::Borrowed("char"),
            date: Cow::Borrowed("DateTime"),
            datetime: Cow::Borrowed("DateTime"),
            binary: Cow::Borrowed("byte[]"),
        },
        list: Cow::Borrowed("List<{0}>"),
        nullable: Cow::Borrowed("{0}?"),
        external,
    }
}
