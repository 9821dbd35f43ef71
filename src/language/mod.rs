//! Per-language registration
//!
//! A [`LanguageSpec`] is the capability record a language plugin builds
//! once at registration time and hands to the enter handler: which token
//! types its lexer emits for whitespace, which single type marks an
//! end-of-line comment (and the literal prefix to re-insert when such a
//! comment is split), and after which types the next line deserves a
//! deeper indent.

use std::fmt;

use crate::error::{codes, AutoindentError, ErrorKind, Result};
use crate::token::{TokenSet, TokenType};

/// Identity of a registered language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageId(&'static str);

impl LanguageId {
    /// Create a language id from its registration name.
    pub const fn new(name: &'static str) -> Self {
        LanguageId(name)
    }

    /// The registration name of this language.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token classification sets and comment shape for one language.
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    id: LanguageId,
    whitespace_tokens: TokenSet,
    line_comment_token: TokenType,
    line_comment_prefix: String,
    indent_trigger_tokens: TokenSet,
}

impl LanguageSpec {
    /// Register a language's token classification.
    ///
    /// `line_comment_prefix` is the literal text re-inserted when a line
    /// comment is split mid-body (typically the comment leader plus one
    /// space, e.g. `"// "`); it must be non-empty.
    pub fn new(
        id: LanguageId,
        whitespace_tokens: TokenSet,
        line_comment_token: TokenType,
        line_comment_prefix: impl Into<String>,
        indent_trigger_tokens: TokenSet,
    ) -> Result<Self> {
        let line_comment_prefix = line_comment_prefix.into();
        if line_comment_prefix.is_empty() {
            return Err(AutoindentError::new(
                ErrorKind::Language,
                codes::EMPTY_COMMENT_PREFIX,
                format!("language '{}' registered an empty line-comment prefix", id),
            ));
        }
        Ok(LanguageSpec {
            id,
            whitespace_tokens,
            line_comment_token,
            line_comment_prefix,
            indent_trigger_tokens,
        })
    }

    /// Identity of the registered language.
    #[must_use]
    pub fn id(&self) -> LanguageId {
        self.id
    }

    /// Token types the lexer emits for whitespace runs.
    #[must_use]
    pub fn whitespace_tokens(&self) -> &TokenSet {
        &self.whitespace_tokens
    }

    /// The token type marking an end-of-line comment.
    #[must_use]
    pub fn line_comment_token(&self) -> TokenType {
        self.line_comment_token
    }

    /// Literal prefix re-inserted when a line comment is split.
    #[must_use]
    pub fn line_comment_prefix(&self) -> &str {
        &self.line_comment_prefix
    }

    /// Token types after which the next line deserves a deeper indent.
    #[must_use]
    pub fn indent_trigger_tokens(&self) -> &TokenSet {
        &self.indent_trigger_tokens
    }
}
