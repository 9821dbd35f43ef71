//! Bridge from tree-sitter parse trees to token spans
//!
//! Tree-sitter emits no whitespace nodes, so the bridge flattens the
//! tree's leaves into [`Token`] spans and synthesizes whitespace spans
//! for the gaps between them, giving [`crate::token::SliceTokenCursor`] a
//! stream that tiles the source. Node kinds become token type names verbatim, so a
//! language registration against this bridge uses the grammar's kind
//! strings (e.g. `"{"`, `"line_comment"`).

use tree_sitter::{Node, Tree};

use crate::token::{Token, TokenType};

/// Token type synthesized for the gaps between leaves.
pub const WHITESPACE: TokenType = TokenType::new("whitespace");

/// Flatten `tree` over `source` into token spans in code-point offsets.
///
/// Spans are sorted and contiguous from offset 0 to the end of `source`.
/// Zero-width leaves (error-recovery MISSING nodes) are dropped.
pub fn flatten(tree: &Tree, source: &str) -> Vec<Token> {
    // Byte offset of each character, for byte-to-code-point conversion
    let char_offsets: Vec<usize> = source.char_indices().map(|(offset, _)| offset).collect();
    let to_char = |byte: usize| char_offsets.partition_point(|&offset| offset < byte);

    let mut leaves = Vec::new();
    collect_leaves(tree.root_node(), &mut leaves);

    let mut tokens = Vec::new();
    let mut covered = 0;
    for (start_byte, end_byte, kind) in leaves {
        if end_byte <= start_byte {
            continue;
        }
        let start = to_char(start_byte);
        let end = to_char(end_byte);
        if start > covered {
            tokens.push(Token::new(WHITESPACE, covered, start - covered));
        }
        tokens.push(Token::new(TokenType::new(kind), start, end - start));
        covered = end;
    }

    let total = source.chars().count();
    if total > covered {
        tokens.push(Token::new(WHITESPACE, covered, total - covered));
    }
    tokens
}

fn collect_leaves(node: Node, out: &mut Vec<(usize, usize, &'static str)>) {
    if node.child_count() == 0 {
        out.push((node.start_byte(), node.end_byte(), node.kind()));
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_leaves(child, out);
    }
}

#[cfg(test)]
#[path = "tree_sitter_tests.rs"]
mod tests;
