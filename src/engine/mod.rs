//! Enter decision engine
//! Decides what happens to text and caret when the line-break key is
//! pressed in a source-code buffer, before generic newline insertion runs
//!
//! ## Invariants
//!
//! - The handler never mutates the buffer on a `Continue` outcome.
//! - At most one insertion is issued per keystroke; a caret reposition,
//!   if any, happens after the insertion and uses post-insertion
//!   coordinates.
//! - The decision context is rebuilt from scratch every invocation; no
//!   state is cached across keystrokes.
//! - The handler is language-aware but host-agnostic: everything it needs
//!   arrives through [`HostSession`] and [`DocumentEdit`].

use log::{debug, trace};

use crate::buffer::DocumentEdit;
use crate::error::Result;
use crate::indent::{line_indent, logical_column, next_indent, IndentOptions};
use crate::language::{LanguageId, LanguageSpec};
use crate::token::{nearest_non_whitespace, TokenCursor};

/// Result of offering a keystroke to the handler.
///
/// The host dispatch loop offers the keystroke to a list of handlers and
/// stops at the first `Stop`; this engine knows nothing about its
/// siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Defer to the next handler or the default behavior; nothing was
    /// inserted and the caret was not touched
    Continue,
    /// The keystroke was fully handled; no further handler should run
    Stop,
}

/// Caret position as line plus display column.
///
/// The column is measured in display-width units: a tab counts as the
/// configured tab width, not as one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalPosition {
    /// 0-based line number
    pub line: usize,
    /// 0-based display column
    pub column: usize,
}

impl LogicalPosition {
    /// Create a logical position.
    pub const fn new(line: usize, column: usize) -> Self {
        LogicalPosition { line, column }
    }
}

/// Host capabilities the handler consumes for one keystroke.
///
/// Everything is read-only except `commit_structure` (reconcile pending
/// structural analysis before tokens are read) and `move_caret_to`.
pub trait HostSession {
    /// Cursor into the host's token stream.
    type Cursor<'a>: TokenCursor
    where
        Self: 'a;

    /// Whether an active editing session could be resolved at all.
    fn session_active(&self) -> bool;

    /// Languages present in the buffer (multi-language files list all of
    /// them).
    fn buffer_languages(&self) -> &[LanguageId];

    /// Whether the buffer is open in read-only/viewer mode.
    fn is_viewer(&self) -> bool;

    /// Whether a structural formatter is registered for `language`.
    fn has_formatter(&self, language: LanguageId) -> bool;

    /// Display width of a tab character.
    fn tab_width(&self) -> usize;

    /// Bring structural analysis of the buffer up to date with pending
    /// edits. Called before any token is read.
    fn commit_structure(&mut self);

    /// Token cursor positioned at the token covering `offset`.
    fn tokens_at(&self, offset: usize) -> Self::Cursor<'_>;

    /// Reposition the caret. Only called after this keystroke's
    /// insertion, with post-insertion coordinates.
    fn move_caret_to(&mut self, position: LogicalPosition) -> Result<()>;
}

/// Enter-key handler for one registered language.
///
/// Constructed once at language registration time from a
/// [`LanguageSpec`]; holds no per-keystroke state.
pub struct EnterHandler {
    spec: LanguageSpec,
}

impl EnterHandler {
    /// Create a handler for a registered language.
    pub fn new(spec: LanguageSpec) -> Self {
        EnterHandler { spec }
    }

    /// The language this handler is responsible for.
    #[must_use]
    pub fn language(&self) -> LanguageId {
        self.spec.id()
    }

    /// Decide the enter keystroke.
    ///
    /// Returns `Outcome::Continue` without touching the buffer when any
    /// precondition fails (no session, wrong language, viewer mode,
    /// read-only document, caret at offset 0) or when a structural
    /// formatter should handle the keystroke instead. Otherwise inserts
    /// the newline with the decided indentation (and comment prefix, if
    /// continuing a line comment), optionally repositions the caret, and
    /// returns `Outcome::Stop`.
    ///
    /// Errors surface only from rejected collaborator operations; guard
    /// failures are never errors.
    pub fn preprocess_enter<S, D>(
        &self,
        session: &mut S,
        document: &mut D,
        options: &IndentOptions,
    ) -> Result<Outcome>
    where
        S: HostSession,
        D: DocumentEdit,
    {
        if !session.session_active() {
            return Ok(Outcome::Continue);
        }
        if !session.buffer_languages().contains(&self.spec.id()) {
            return Ok(Outcome::Continue);
        }
        if session.is_viewer() {
            return Ok(Outcome::Continue);
        }
        if !document.is_writable() {
            return Ok(Outcome::Continue);
        }
        let caret = document.caret();
        if caret == 0 {
            return Ok(Outcome::Continue);
        }

        session.commit_structure();

        let line = document.line_of_offset(caret);
        let line_start = document.line_start(line);
        let previous_line_start = if line > 0 {
            document.line_start(line - 1)
        } else {
            line_start
        };

        // Classify the token before the caret, bounded by the previous
        // line's start: a token that began even earlier counts as a
        // crossed line boundary.
        let (preceding, preceding_start) = {
            let mut cursor = session.tokens_at(caret - 1);
            let kind = nearest_non_whitespace(
                &mut cursor,
                previous_line_start,
                self.spec.whitespace_tokens(),
            );
            (kind, cursor.token_start())
        };

        let indent = line_indent(document, line);

        // Enter in line comment
        if preceding == Some(self.spec.line_comment_token()) {
            let line_end = document.line_end(line);
            let rest: String = (caret..line_end)
                .filter_map(|offset| document.char_at(offset))
                .collect();
            if !rest.trim().is_empty() {
                debug!("splitting line comment on line {}", line);
                document.insert_at_caret(&format!(
                    "\n{}{}",
                    indent,
                    self.spec.line_comment_prefix()
                ))?;
                session.move_caret_to(LogicalPosition::new(line + 1, 1))?;
                return Ok(Outcome::Stop);
            } else if preceding_start.is_some_and(|start| start < line_start) {
                debug!("comment began on an earlier line; copying indent only");
                document.insert_at_caret(&format!("\n{}", indent))?;
                return Ok(Outcome::Stop);
            }
            // Comment started on this line with nothing after the caret:
            // treat as the normal case.
        }

        if session.has_formatter(self.spec.id()) {
            trace!("language {} has a formatter; deferring", self.spec.id());
            return Ok(Outcome::Continue);
        }

        if preceding.is_some_and(|kind| self.spec.indent_trigger_tokens().contains(kind)) {
            let new_indent = next_indent(document, &indent, options);
            debug!("indent trigger before caret; indenting to {:?}", new_indent);
            document.insert_at_caret(&format!("\n{}", new_indent))?;
            return Ok(Outcome::Stop);
        }

        trace!("copying current indent {:?}", indent);
        let column = logical_column(&indent, session.tab_width());
        document.insert_at_caret(&format!("\n{}", indent))?;
        session.move_caret_to(LogicalPosition::new(line + 1, column))?;
        Ok(Outcome::Stop)
    }
}
