//! URI template placeholders.

use crate::PathDefect;

/// Extract the `{name}` placeholders of a URI template in order.
pub fn placeholders(uri: &str) -> Result<Vec<&str>, PathDefect> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = uri;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or(PathDefect::Unterminated)?;
        let name = &after[..close];

        if name.contains('{') {
            return Err(PathDefect::Unterminated);
        }
        if name.is_empty() {
            return Err(PathDefect::UnmatchedPlaceholder(String::new()));
        }
        if names.contains(&name) {
            return Err(PathDefect::DuplicatePlaceholder(name.to_string()));
        }

        names.push(name);
        rest = &after[close + 1..];
    }

    Ok(names)
}
