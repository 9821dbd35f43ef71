//! Document abstraction layer
//!
//! This module defines the traits through which the enter handler reads and
//! mutates the host's text buffer, decoupling the engine from the storage
//! representation. Hosts may back these with gap buffers, ropes, piece
//! tables, or any other structure.
//!
//! ## Indexing model
//!
//! All offsets are **code-point based** using Unicode scalar values. Lines
//! are 0-based; `line_start`/`line_end` delimit a line's content without its
//! trailing newline.
//!
//! ## Mutation semantics
//!
//! `insert_at_caret` leaves the caret immediately after the inserted text
//! and increments the document revision by exactly 1. The enter handler
//! performs at most one insertion per keystroke, and any caret reposition
//! it requests afterwards refers to post-insertion coordinates.

use crate::error::{codes, AutoindentError, ErrorKind, Result};

/// Read-only view of a document at a specific revision.
pub trait DocumentView {
    /// Total number of code-points in the document.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of logical lines. An empty document has one (empty) line.
    fn line_count(&self) -> usize;

    /// Code-point offset of the start of `line` (0-based). Out-of-range
    /// lines clamp to the end of the document.
    fn line_start(&self, line: usize) -> usize;

    /// Code-point offset just past the last content character of `line`,
    /// excluding the trailing newline.
    fn line_end(&self, line: usize) -> usize;

    /// Line number containing `offset`. An offset at the very end of the
    /// document belongs to the last line.
    fn line_of_offset(&self, offset: usize) -> usize;

    /// Contents of `line` without the trailing newline.
    fn line_text(&self, line: usize) -> String;

    /// Character at `offset`, if in bounds.
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Whether the document accepts mutations.
    fn is_writable(&self) -> bool;
}

/// Mutable document interface used by the enter handler.
pub trait DocumentEdit: DocumentView {
    /// Current caret position (code-point offset).
    fn caret(&self) -> usize;

    /// Insert UTF-8 text at the caret. The caret ends up immediately after
    /// the inserted text. Increments revision by 1.
    fn insert_at_caret(&mut self, text: &str) -> Result<()>;
}

/// Plain in-memory document with a line-start table.
///
/// Reference implementation of [`DocumentView`] / [`DocumentEdit`]; hosts
/// with their own buffer wire these traits to it instead.
#[derive(Debug, Clone)]
pub struct TextDocument {
    chars: Vec<char>,
    /// Offset of the first character of each line; always starts with 0.
    line_starts: Vec<usize>,
    caret: usize,
    read_only: bool,
    /// Monotonic revision counter for change detection
    revision: u64,
}

impl TextDocument {
    /// Create an empty writable document.
    pub fn new() -> Self {
        Self::from_str("")
    }

    /// Create a document from initial text, caret at offset 0.
    pub fn from_str(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let line_starts = Self::scan_line_starts(&chars);
        TextDocument {
            chars,
            line_starts,
            caret: 0,
            read_only: false,
            revision: 0,
        }
    }

    fn scan_line_starts(chars: &[char]) -> Vec<usize> {
        let mut starts = vec![0];
        for (i, &ch) in chars.iter().enumerate() {
            if ch == '\n' {
                starts.push(i + 1);
            }
        }
        starts
    }

    /// Mark the document read-only (viewer buffers, protected files).
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Move the caret to `pos`.
    pub fn set_caret(&mut self, pos: usize) -> Result<()> {
        if pos > self.chars.len() {
            return Err(AutoindentError::new(
                ErrorKind::Caret,
                codes::CARET_OUT_OF_BOUNDS,
                format!("caret {} out of bounds (len: {})", pos, self.chars.len()),
            ));
        }
        self.caret = pos;
        Ok(())
    }

    /// Current revision; increments on every successful insertion.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Full document content.
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentView for TextDocument {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.chars.len())
    }

    fn line_end(&self, line: usize) -> usize {
        match self.line_starts.get(line + 1) {
            // The character before the next line start is the newline itself.
            Some(&next_start) => next_start - 1,
            None => self.chars.len(),
        }
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.chars.len());
        // partition_point gives the first line starting after `offset`.
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    fn line_text(&self, line: usize) -> String {
        let start = self.line_start(line);
        let end = self.line_end(line);
        self.chars[start..end].iter().collect()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    fn is_writable(&self) -> bool {
        !self.read_only
    }
}

impl DocumentEdit for TextDocument {
    fn caret(&self) -> usize {
        self.caret
    }

    fn insert_at_caret(&mut self, text: &str) -> Result<()> {
        if self.read_only {
            return Err(AutoindentError::new(
                ErrorKind::Buffer,
                codes::READ_ONLY,
                "cannot insert into a read-only document",
            ));
        }
        let inserted: Vec<char> = text.chars().collect();
        let at = self.caret;
        self.chars.splice(at..at, inserted.iter().copied());
        self.caret = at + inserted.len();
        self.line_starts = Self::scan_line_starts(&self.chars);
        self.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
