//! One analysis pass: tokenize, parse, and derive what the views need.
//!
//! An [`Analysis`] is rebuilt from scratch on every edit. Nothing in it is
//! shared with the previous pass, so callers can simply replace the old value.

use crate::parser::{parse, tokenize, Category, OutlineRow, SyntaxNode, Token};
use tracing::debug;

/// Tokens and tree produced from one snapshot of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub tree: SyntaxNode,
}

/// One row of the token listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub name: String,
    pub category: Category,
    pub text: String,
}

impl Analysis {
    pub fn run(source: &str) -> Self {
        let tokens = tokenize(source);
        let tree = parse(&tokens);
        debug!(
            chars = source.chars().count(),
            tokens = tokens.len(),
            nodes = tree.node_count(),
            "analysis pass"
        );
        Analysis { tokens, tree }
    }

    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    pub fn outline(&self) -> Vec<OutlineRow> {
        self.tree.outline()
    }

    /// Category of the token covering each character of `source`.
    ///
    /// `source` must be the text this analysis was run on. Characters that
    /// were whitespace or skipped map to `None`.
    pub fn highlight_map(&self, source: &str) -> Vec<Option<Category>> {
        let mut map = vec![None; source.chars().count()];
        for token in &self.tokens {
            let end = token.end.min(map.len());
            for slot in map.iter_mut().take(end).skip(token.start) {
                *slot = Some(token.category);
            }
        }
        map
    }

    /// Token listing: 1-based name, category, quoted text
    pub fn token_rows(&self) -> Vec<TokenRow> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, token)| TokenRow {
                name: format!("Token {}", i + 1),
                category: token.category,
                text: format!("{:?}", token.text),
            })
            .collect()
    }
}
