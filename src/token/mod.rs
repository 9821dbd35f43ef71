//! Lexical token classification
//!
//! The engine never lexes text itself: it consumes pre-classified token
//! spans produced by the host's lexer (a highlighter, tree-sitter, or a
//! hand-written tokenizer). Token types are opaque equality-comparable
//! tags; the engine only ever asks "is this type in that set".
//!
//! The backward scanner walks a [`TokenCursor`] from the token under the
//! caret toward the start of the stream, bounded by a line-start offset,
//! and is how the engine distinguishes "caret after a comment" from
//! "caret at true start of line" from "caret after a block opener".

use std::fmt;

#[cfg(feature = "treesitter")]
pub mod tree_sitter;

/// Opaque classification tag assigned to a span of text by a language's
/// lexer. Compared only for equality; the name is for registration and
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenType(&'static str);

impl TokenType {
    /// Create a token type from its registration name.
    pub const fn new(name: &'static str) -> Self {
        TokenType(name)
    }

    /// The registration name of this type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of token types, built once at language registration time.
///
/// Registrations hold a handful of types, so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet(Vec<TokenType>);

impl TokenSet {
    /// Create a set from a slice of types.
    pub fn new(types: &[TokenType]) -> Self {
        TokenSet(types.to_vec())
    }

    /// The empty set.
    pub fn empty() -> Self {
        TokenSet(Vec::new())
    }

    /// Whether `kind` is a member of this set.
    #[must_use]
    pub fn contains(&self, kind: TokenType) -> bool {
        self.0.contains(&kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A classified span of text, in code-point offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Lexical classification of the span
    pub kind: TokenType,
    /// Offset of the first character of the span
    pub start: usize,
    /// Length of the span in code-points
    pub len: usize,
}

impl Token {
    /// Create a token span.
    pub const fn new(kind: TokenType, start: usize, len: usize) -> Self {
        Token { kind, start, len }
    }

    /// Offset just past the last character of the span.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Positioned, backward-movable view into a token stream.
///
/// Mirrors the narrow contract the engine needs from a host highlighter
/// iterator: inspect the current token, step toward the stream start,
/// detect exhaustion. A retreat past the first token exhausts the cursor;
/// there is no way back, which is fine because every keystroke builds a
/// fresh cursor.
pub trait TokenCursor {
    /// True once the cursor has retreated past the first token.
    fn at_end(&self) -> bool;

    /// Type of the current token, or `None` when exhausted.
    fn token_type(&self) -> Option<TokenType>;

    /// Start offset of the current token, or `None` when exhausted.
    fn token_start(&self) -> Option<usize>;

    /// Step to the previous token.
    fn retreat(&mut self);
}

/// [`TokenCursor`] over an immutable slice of token spans.
///
/// The spans must be sorted by start offset and are expected to tile the
/// region being scanned (hosts whose lexers skip whitespace synthesize
/// whitespace spans for the gaps; see [`tree_sitter`] for one such
/// bridge).
#[derive(Debug, Clone)]
pub struct SliceTokenCursor<'a> {
    tokens: &'a [Token],
    /// Index of the current token; `None` once exhausted.
    pos: Option<usize>,
}

impl<'a> SliceTokenCursor<'a> {
    /// Position the cursor at the token covering `offset`: the last token
    /// whose start is at or before `offset`. Exhausted from the start if
    /// every token begins after `offset` (or the slice is empty).
    pub fn positioned_at(tokens: &'a [Token], offset: usize) -> Self {
        let after = tokens.partition_point(|t| t.start <= offset);
        SliceTokenCursor {
            tokens,
            pos: after.checked_sub(1),
        }
    }

    /// Current token span, if not exhausted.
    #[must_use]
    pub fn token(&self) -> Option<Token> {
        self.pos.map(|i| self.tokens[i])
    }
}

impl TokenCursor for SliceTokenCursor<'_> {
    fn at_end(&self) -> bool {
        self.pos.is_none()
    }

    fn token_type(&self) -> Option<TokenType> {
        self.token().map(|t| t.kind)
    }

    fn token_start(&self) -> Option<usize> {
        self.token().map(|t| t.start)
    }

    fn retreat(&mut self) {
        self.pos = self.pos.and_then(|i| i.checked_sub(1));
    }
}

/// Walk `cursor` backward for the nearest token that is not in
/// `whitespace`, without crossing `boundary`.
///
/// Returns `None` when the stream is exhausted or when the current token
/// starts before `boundary` (the scan crossed a line boundary). On
/// success the cursor is left positioned at the returned token, so the
/// caller can read its start offset.
pub fn nearest_non_whitespace<C: TokenCursor>(
    cursor: &mut C,
    boundary: usize,
    whitespace: &TokenSet,
) -> Option<TokenType> {
    while !cursor.at_end() {
        let start = cursor.token_start()?;
        if start < boundary {
            return None;
        }
        let kind = cursor.token_type()?;
        if !whitespace.contains(kind) {
            return Some(kind);
        }
        cursor.retreat();
    }
    None
}
