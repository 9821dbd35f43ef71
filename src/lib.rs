//! autoindent - Language-aware Enter-key indentation engine
//!
//! Decides, per Enter keystroke in a source-code buffer, whether to defer
//! to a structural formatter, continue a line-comment prefix, insert a
//! freshly computed indent level, or copy the current line's indent
//! unchanged - and places the caret consistently with mixed tab/space
//! indentation. The host supplies the buffer, the token stream, and the
//! style settings through the traits in [`buffer`], [`engine`], and
//! [`token`]; the engine supplies exactly one insertion and at most one
//! caret move per handled keystroke.

pub mod buffer;
pub mod engine;
pub mod error;
pub mod indent;
pub mod language;
pub mod token;
