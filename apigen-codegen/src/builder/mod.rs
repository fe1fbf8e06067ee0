//! Text emission primitives.
//!
//! - [`RenderBuffer`] - Append-only text buffer with indentation and backtrack
//! - [`Template`] - Multi-line positional templates emitted through the buffer
//! - [`substitute`] - `{0}`, `{1}`, ... placeholder substitution
//! - [`Indent`] - Indentation configuration

mod buffer;
mod indent;
mod template;

pub use buffer::RenderBuffer;
pub use indent::Indent;
pub use template::{Template, substitute};
