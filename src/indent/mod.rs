//! Indentation computation
//!
//! Everything here is a pure function over a [`DocumentView`] plus an
//! explicit [`IndentOptions`] value; there is no ambient settings lookup.
//! The style of an indent (tabs vs spaces) is always derived from its
//! last character, never stored.

use unicode_width::UnicodeWidthChar;

use crate::buffer::DocumentView;

/// Indentation preferences for a file type.
///
/// Supplied by the host's style settings per invocation; immutable for the
/// duration of one decision. Sizes of zero are treated as 1 at the use
/// site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentOptions {
    /// Prefer tab characters when indenting a document with no existing
    /// indentation
    pub use_tab_char: bool,
    /// Width of one indent level, in columns
    pub indent_size: usize,
    /// Width a tab character occupies, in columns
    pub tab_size: usize,
}

impl Default for IndentOptions {
    /// Create default indent options
    fn default() -> Self {
        IndentOptions {
            use_tab_char: false,
            indent_size: 4,
            tab_size: 4,
        }
    }
}

/// Leading run of space/tab characters of `line`.
pub fn line_indent(view: &impl DocumentView, line: usize) -> String {
    view.line_text(line)
        .chars()
        .take_while(|&c| c == ' ' || c == '\t')
        .collect()
}

/// First non-empty line indent in the document, scanning from line 0.
///
/// Used as a style oracle when the current line is unindented: whatever
/// convention the document already uses wins over configured preferences.
/// Returns the empty string only when no line in the document has a
/// non-empty indent. A line consisting entirely of blanks counts.
pub fn infer_document_indent(view: &impl DocumentView) -> String {
    for line in 0..view.line_count() {
        let indent = line_indent(view, line);
        if !indent.is_empty() {
            return indent;
        }
    }
    String::new()
}

/// Compute the indent for a fresh line one level deeper than `old_indent`.
///
/// `old_indent` is the literal base the new level is appended to. When it
/// is empty the document is scanned for an existing indent whose style
/// (read from its last character) decides tabs vs spaces; the configured
/// `use_tab_char` only applies to a document with no indentation at all.
pub fn next_indent(
    view: &impl DocumentView,
    old_indent: &str,
    options: &IndentOptions,
) -> String {
    let inferred;
    let effective = if old_indent.is_empty() {
        inferred = infer_document_indent(view);
        inferred.as_str()
    } else {
        old_indent
    };

    let uses_spaces = effective.ends_with(' ');
    let first_indent = effective.is_empty();

    let indent_size = options.indent_size.max(1);
    let tab_size = options.tab_size.max(1);

    if first_indent && options.use_tab_char || !first_indent && !uses_spaces {
        let tab_count = tab_count(indent_size, tab_size);
        format!("{}{}", old_indent, "\t".repeat(tab_count))
    } else {
        format!("{}{}", old_indent, " ".repeat(indent_size))
    }
}

/// Number of tabs covering one indent level: `ceil(indent_size / tab_size)`.
/// Both sizes must be non-zero; the result is always at least 1.
fn tab_count(indent_size: usize, tab_size: usize) -> usize {
    let mut count = indent_size / tab_size;
    if indent_size % tab_size != 0 {
        count += 1;
    }
    count
}

/// Logical column of the caret placed just after `indent`.
///
/// Tabs contribute `tab_width` columns; every other character its display
/// width. Raw character count is wrong as soon as tabs are present.
pub fn logical_column(indent: &str, tab_width: usize) -> usize {
    indent
        .chars()
        .map(|c| {
            if c == '\t' {
                tab_width
            } else {
                c.width().unwrap_or(1)
            }
        })
        .sum()
}
