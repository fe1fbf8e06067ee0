//! Documentation comment formatting.
//!
//! Free text from the model is escaped for the target comment syntax,
//! reflowed to the wrap width and framed with the language's markers.

/// Default wrap width for documentation comments, in columns.
pub const DEFAULT_WRAP_WIDTH: usize = 100;

/// Text never wraps narrower than this, however deep the indentation.
const MIN_TEXT_WIDTH: usize = 20;

/// How one language frames documentation comments.
#[derive(Debug, Clone, Copy)]
pub struct CommentStyle {
    /// Line opening the block (e.g. `/**`)
    pub open: Option<&'static str>,
    /// Marker prefixed to every content line (e.g. ` * ` or `/// `)
    pub prefix: &'static str,
    /// Line closing the block (e.g. ` */`)
    pub close: Option<&'static str>,
    /// Element wrapped around the description (e.g. `<summary>`)
    pub summary: Option<(&'static str, &'static str)>,
    /// Separate the description from the tags with an empty comment line
    pub blank_before_tags: bool,
    /// Format a parameter tag from a name and escaped description
    pub param_tag: fn(&str, &str) -> String,
    /// Format a return tag from an escaped description
    pub returns_tag: fn(&str) -> String,
    /// Escape free text so it cannot terminate or corrupt the comment
    pub escape: fn(&str) -> String,
}

/// Description text plus pre-formatted tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    pub text: String,
    pub tags: Vec<String>,
}

impl DocBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    /// Append a paragraph, skipping empty text.
    pub fn paragraph(mut self, text: &str) -> Self {
        if text.trim().is_empty() {
            return self;
        }
        if !self.text.trim().is_empty() {
            self.text.push_str("\n\n");
        }
        self.text.push_str(text);
        self
    }

    pub fn tag(mut self, tag: String) -> Self {
        self.tags.push(tag);
        self
    }
}

/// Reflows documentation into comment lines for one language.
#[derive(Debug, Clone, Copy)]
pub struct CommentFormatter {
    style: CommentStyle,
    wrap_width: usize,
}

impl CommentFormatter {
    pub fn new(style: CommentStyle, wrap_width: usize) -> Self {
        Self { style, wrap_width }
    }

    pub fn style(&self) -> &CommentStyle {
        &self.style
    }

    /// Format free text as a comment block indented by `indent_columns` spaces.
    ///
    /// Text without content yields no lines at all.
    pub fn format(&self, text: &str, indent_columns: usize) -> Vec<String> {
        self.format_doc(&DocBlock::new(text), indent_columns)
    }

    /// Format a description with tags.
    pub fn format_doc(&self, doc: &DocBlock, indent_columns: usize) -> Vec<String> {
        let width = self.text_width(indent_columns);
        let body = reflow(&(self.style.escape)(&doc.text), width);
        let tags: Vec<String> = doc
            .tags
            .iter()
            .flat_map(|tag| reflow(tag, width))
            .collect();

        if body.is_empty() && tags.is_empty() {
            return Vec::new();
        }

        let indent = " ".repeat(indent_columns);
        let marker = |text: &str| {
            if text.is_empty() {
                format!("{}{}", indent, self.style.prefix.trim_end())
            } else {
                format!("{}{}{}", indent, self.style.prefix, text)
            }
        };

        let mut lines = Vec::new();
        if let Some(open) = self.style.open {
            lines.push(format!("{}{}", indent, open));
        }
        if !body.is_empty() {
            if let Some((open, _)) = self.style.summary {
                lines.push(marker(open));
            }
            lines.extend(body.iter().map(|line| marker(line.as_str())));
            if let Some((_, close)) = self.style.summary {
                lines.push(marker(close));
            }
            if !tags.is_empty() && self.style.blank_before_tags {
                lines.push(marker(""));
            }
        }
        lines.extend(tags.iter().map(|line| marker(line.as_str())));
        if let Some(close) = self.style.close {
            lines.push(format!("{}{}", indent, close));
        }
        lines
    }

    /// Build a parameter tag, escaping the description.
    pub fn param_tag(&self, name: &str, text: &str) -> String {
        (self.style.param_tag)(name, &(self.style.escape)(text))
    }

    /// Build a return tag, escaping the description.
    pub fn returns_tag(&self, text: &str) -> String {
        (self.style.returns_tag)(&(self.style.escape)(text))
    }

    fn text_width(&self, indent_columns: usize) -> usize {
        self.wrap_width
            .saturating_sub(indent_columns + self.style.prefix.chars().count())
            .max(MIN_TEXT_WIDTH)
    }
}

/// Greedily wrap `text` to lines of at most `width` characters.
///
/// Blank lines separate paragraphs and come out as a single empty entry;
/// line breaks inside a paragraph are treated as spaces. A word longer than
/// `width` gets a line of its own rather than being split.
pub fn reflow(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in paragraphs(text) {
        if !lines.is_empty() {
            lines.push(String::new());
        }

        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.iter().flat_map(|line| line.split_whitespace()) {
            let word_len = word.chars().count();
            if current_len > 0 && current_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
        lines.push(current);
    }

    lines
}

/// Split text into paragraphs of non-blank lines.
fn paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut result = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        result.push(current);
    }

    result
}
