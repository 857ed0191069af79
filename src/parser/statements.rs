//! Statement parsing implementation
//!
//! This module handles statement dispatch and the statements the skeleton
//! grammar recognizes:
//!
//! - Typed declarations (delegated to `declarations`)
//! - Control flow: `if`, `while` (condition scan only, no nesting)
//! - Jump statements: `return`
//! - Blocks: `{ ... }`
//! - Everything else: a flat expression statement of its atoms
//!
//! # Grammar
//!
//! ```text
//! statement  ::= declaration | if_stmt | while_stmt | return_stmt | expr_stmt
//! if_stmt    ::= "if" "(" atom* ")" block?
//! while_stmt ::= "while" "(" any* ")" block?
//! return     ::= "return" value_atom? skip-to ";"
//! expr_stmt  ::= (atom | other)* (";" | "}")
//! block      ::= "{" statement* "}"
//! ```
//!
//! `for` has no dedicated path and falls through to `expr_stmt`. The condition
//! scan of `if`/`while` stops at the first `)`, so nested parentheses end it
//! early.

use crate::parser::ast::{NodeKind, SyntaxNode};
use crate::parser::lexer::Category;
use crate::parser::parse::Parser;

/// Reserved words that start a declaration or function definition
pub const TYPE_KEYWORDS: [&str; 5] = ["int", "float", "char", "double", "void"];

impl Parser {
    /// Parse a statement; `None` when nothing worth a node was found.
    pub(crate) fn parse_statement(&mut self) -> Option<SyntaxNode> {
        let token = self.current()?;

        if token.category == Category::ReservedWord {
            match token.text.as_str() {
                text if TYPE_KEYWORDS.contains(&text) => {
                    return Some(self.parse_declaration_or_function());
                }
                "if" => return Some(self.parse_if_statement()),
                "while" => return Some(self.parse_while_statement()),
                "return" => return Some(self.parse_return_statement()),
                _ => {}
            }
        }

        self.parse_expression_statement()
    }

    /// Parse `{ statements }`; `None` when the current token is not `{`.
    pub(crate) fn parse_block(&mut self) -> Option<SyntaxNode> {
        if !self.match_separator("{") {
            return None;
        }

        let mut block = SyntaxNode::new(NodeKind::Block, "Code Block");
        while self.current().is_some() && !self.check_separator("}") {
            match self.parse_statement() {
                Some(statement) => block.push(statement),
                None => self.advance(),
            }
        }
        self.match_separator("}");

        Some(block)
    }

    pub(crate) fn parse_if_statement(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Conditional, "If Statement");
        self.advance(); // consume 'if'

        if self.match_separator("(") {
            let mut condition = SyntaxNode::new(NodeKind::Expression, "Condition");
            while let Some(token) = self.current() {
                if token.is(Category::Separator, ")") {
                    break;
                }
                if is_atom(token.category) {
                    condition.push(SyntaxNode::new(NodeKind::Constant, token.text.clone()));
                }
                self.advance();
            }
            self.match_separator(")");
            node.push(condition);
        }

        if let Some(body) = self.parse_block() {
            node.push(body);
        }

        node
    }

    pub(crate) fn parse_while_statement(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::WhileLoop, "While Loop");
        self.advance(); // consume 'while'

        if self.match_separator("(") {
            // Condition contents are not modeled.
            self.skip_past_rparen();
            node.push(SyntaxNode::new(NodeKind::Expression, "Condition"));
        }

        if let Some(body) = self.parse_block() {
            node.push(body);
        }

        node
    }

    pub(crate) fn parse_return_statement(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Return, "Return Statement");
        self.advance(); // consume 'return'

        if let Some(value) = self.parse_value_atom() {
            node.push(value);
        }
        self.skip_past_semicolon();

        node
    }

    /// A single identifier, numeric literal or string literal
    pub(crate) fn parse_value_atom(&mut self) -> Option<SyntaxNode> {
        let token = self.current()?;
        let kind = match token.category {
            Category::Identifier => NodeKind::Identifier,
            Category::NumericLiteral | Category::StringLiteral => NodeKind::Constant,
            _ => return None,
        };
        let node = SyntaxNode::new(kind, token.text.clone());
        self.advance();
        Some(node)
    }

    /// Collect identifier/number atoms up to `;` or `}`.
    ///
    /// A terminating `;` is consumed only when something was collected; an
    /// empty statement is left for the caller to step over.
    pub(crate) fn parse_expression_statement(&mut self) -> Option<SyntaxNode> {
        let mut expr = SyntaxNode::new(NodeKind::Expression, "Expression");

        while let Some(token) = self.current() {
            if token.is(Category::Separator, ";") || token.is(Category::Separator, "}") {
                break;
            }
            if is_atom(token.category) {
                expr.push(SyntaxNode::new(NodeKind::Constant, token.text.clone()));
            }
            self.advance();
        }

        if expr.children.is_empty() {
            return None;
        }
        self.match_separator(";");
        Some(expr)
    }
}

fn is_atom(category: Category) -> bool {
    matches!(category, Category::Identifier | Category::NumericLiteral)
}
