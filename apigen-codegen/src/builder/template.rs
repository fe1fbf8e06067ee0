//! Positional placeholder templates.

use crate::RenderError;

/// A multi-line template: each entry is an indent depth (relative to the
/// buffer's current level) and one line of text. An empty text emits a
/// blank line without indentation.
pub type Template = &'static [(usize, &'static str)];

/// Substitute `{0}`, `{1}`, ... in `template` with `args`, left to right.
///
/// Only a brace followed by decimal digits and a closing brace is a
/// placeholder; every other brace is copied through, so templates can carry
/// the target language's own `{` and `}` verbatim. Each placeholder may be
/// used at most once, and must have a matching argument.
pub fn substitute(template: &str, args: &[&str]) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits == 0 || !after[digits..].starts_with('}') {
            out.push('{');
            rest = after;
            continue;
        }

        let placeholder = &after[..digits];
        let error = |reason: String| RenderError::LineTemplate {
            template: template.to_string(),
            reason,
        };
        let index: usize = placeholder
            .parse()
            .map_err(|_| error(format!("placeholder {{{}}} is out of range", placeholder)))?;

        match used.get_mut(index) {
            None => {
                return Err(error(format!(
                    "placeholder {{{}}} has no argument ({} supplied)",
                    index,
                    args.len()
                )));
            }
            Some(true) => {
                return Err(error(format!(
                    "placeholder {{{}}} is used more than once",
                    index
                )));
            }
            Some(slot) => {
                *slot = true;
                out.push_str(args[index]);
            }
        }

        rest = &after[digits + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
