//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its cursor helpers, and the
//! top-level parse loop.
//!
//! # Parser Architecture
//!
//! Single-token lookahead recursive descent over the filtered token sequence:
//! - This module: Parser state (tokens + position), helpers, program loop
//! - `declarations`: typed declarations, function definitions, parameter lists
//! - `statements`: statement dispatch, blocks, `if`, `while`, `return`
//!
//! The parser only moves forward and never fails. Malformed input degrades
//! into placeholder nodes or is dropped, and every loop iteration consumes at
//! least one token, so parsing always returns a root node.
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::{NodeKind, SyntaxNode};
use crate::parser::lexer::{tokenize, Category, Token};

/// Characters of a comment kept in its statement label
pub const COMMENT_LABEL_CHARS: usize = 30;

/// Parse a token sequence into a syntax tree.
pub fn parse(tokens: &[Token]) -> SyntaxNode {
    Parser::new(tokens.to_vec()).parse_program()
}

/// Recursive descent parser for the C skeleton grammar
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Build a parser over `tokens`; whitespace tokens are filtered out.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        tokens.retain(|t| t.category != Category::Whitespace);
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(tokenize(source))
    }

    /// Parse the entire program
    pub fn parse_program(&mut self) -> SyntaxNode {
        let mut root = SyntaxNode::new(NodeKind::Program, "Program");

        while let Some(token) = self.current() {
            match token.category {
                Category::Comment => {
                    let head: String = token.text.chars().take(COMMENT_LABEL_CHARS).collect();
                    root.push(SyntaxNode::new(
                        NodeKind::ExpressionStatement,
                        format!("Comment: {head}..."),
                    ));
                    self.advance();
                }
                Category::Preprocessor => {
                    root.push(SyntaxNode::new(
                        NodeKind::ExpressionStatement,
                        format!("Preprocessor: {}", token.text),
                    ));
                    self.advance();
                }
                _ => match self.parse_statement() {
                    Some(statement) => root.push(statement),
                    None => self.advance(),
                },
            }
        }

        root
    }

    // ===== Helper methods =====

    pub(crate) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Current token has exactly this category and text
    pub(crate) fn check(&self, category: Category, text: &str) -> bool {
        self.current().is_some_and(|t| t.is(category, text))
    }

    pub(crate) fn check_separator(&self, text: &str) -> bool {
        self.check(Category::Separator, text)
    }

    /// Consume the current token if it is the separator `text`
    pub(crate) fn match_separator(&mut self, text: &str) -> bool {
        if self.check_separator(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Take the current token if it has `category`
    pub(crate) fn take(&mut self, category: Category) -> Option<Token> {
        let token = self.current().filter(|t| t.category == category)?.clone();
        self.advance();
        Some(token)
    }

    /// Skip up to and including the next `;` (or to the end of input)
    pub(crate) fn skip_past_semicolon(&mut self) {
        while self.current().is_some() && !self.check_separator(";") {
            self.advance();
        }
        self.match_separator(";");
    }

    /// Skip up to and including the next `)` (or to the end of input)
    pub(crate) fn skip_past_rparen(&mut self) {
        while self.current().is_some() && !self.check_separator(")") {
            self.advance();
        }
        self.match_separator(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_source(source: &str) -> SyntaxNode {
        Parser::from_source(source).parse_program()
    }

    fn leaf(kind: NodeKind, label: &str) -> SyntaxNode {
        SyntaxNode::new(kind, label)
    }

    #[test]
    fn test_parse_empty() {
        let root = parse(&[]);
        assert_eq!(root.kind, NodeKind::Program);
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_parse_variable_with_initializer() {
        let root = parse_source("int x = 5;");
        assert_eq!(root.children.len(), 1);
        let decl = &root.children[0];
        assert_eq!(decl.kind, NodeKind::VarDecl);
        assert_eq!(decl.label, "Variable: x");
        assert_eq!(decl.children[0], leaf(NodeKind::Type, "int"));
        assert_eq!(decl.children[1], leaf(NodeKind::Identifier, "x"));
        assert_eq!(
            decl.children[2],
            leaf(NodeKind::Assignment, "Assignment").with_child(leaf(NodeKind::Constant, "5"))
        );
    }

    #[test]
    fn test_parse_simple_function() {
        let root = parse_source("void f(int a) { return a; }");
        assert_eq!(root.children.len(), 1);
        let func = &root.children[0];
        assert_eq!(func.kind, NodeKind::FunctionDef);
        assert_eq!(func.label, "Function: f");
        assert_eq!(func.children.len(), 4);
        assert_eq!(func.children[0], leaf(NodeKind::Type, "void"));
        assert_eq!(func.children[1], leaf(NodeKind::Identifier, "f"));
        assert_eq!(
            func.children[2],
            leaf(NodeKind::ParamList, "Parameters").with_child(leaf(NodeKind::Param, "int a"))
        );
        let body = &func.children[3];
        assert_eq!(body.kind, NodeKind::Block);
        assert_eq!(
            body.children,
            vec![leaf(NodeKind::Return, "Return Statement")
                .with_child(leaf(NodeKind::Identifier, "a"))]
        );
    }

    #[test]
    fn test_comment_label_is_truncated() {
        let comment = "// this comment is definitely longer than thirty characters";
        let root = parse_source(comment);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].kind, NodeKind::ExpressionStatement);
        assert_eq!(
            root.children[0].label,
            "Comment: // this comment is definitely ..."
        );
    }

    #[test]
    fn test_preprocessor_statement() {
        let root = parse_source("#include <stdio.h>\n");
        assert_eq!(
            root.children,
            vec![leaf(NodeKind::ExpressionStatement, "Preprocessor: #include <stdio.h>")]
        );
    }

    #[test]
    fn test_lone_semicolons_produce_nothing() {
        let root = parse_source(";;;");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_missing_identifier_yields_invalid() {
        let root = parse_source("int ;");
        assert_eq!(
            root.children,
            vec![leaf(NodeKind::ExpressionStatement, "Invalid")]
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "int main() { int y = 2; while (y) { y; } return 0; }";
        assert_eq!(parse_source(source), parse_source(source));
    }
}
