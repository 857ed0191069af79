//! Declaration parsing implementation
//!
//! This module handles statements that start with a type keyword:
//!
//! - Function definitions: `type name(params) { ... }`
//! - Variable declarations: `type name;`, `type name = atom;`, `type name[...];`
//! - Parameter lists: `(type name, type name, ...)`
//!
//! # Grammar
//!
//! ```text
//! declaration  ::= type identifier ( function_def | var_decl )
//! function_def ::= "(" params ")" block?
//! var_decl     ::= "[" skip-to ";" | "=" value_atom skip-to ";" | skip-to ";"
//! params       ::= ( type identifier ","? | other )*
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{NodeKind, SyntaxNode};
use crate::parser::lexer::{Category, Token};
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a declaration or function definition starting at a type keyword
    pub(crate) fn parse_declaration_or_function(&mut self) -> SyntaxNode {
        let Some(type_token) = self.take(Category::ReservedWord) else {
            return SyntaxNode::new(NodeKind::ExpressionStatement, "Invalid");
        };

        let Some(name_token) = self.take(Category::Identifier) else {
            return SyntaxNode::new(NodeKind::ExpressionStatement, "Invalid");
        };

        if self.check_separator("(") {
            self.parse_function_definition(&type_token, &name_token)
        } else {
            self.parse_variable_declaration(&type_token, &name_token)
        }
    }

    /// Parse function definition: type name(params) { body }
    pub(crate) fn parse_function_definition(
        &mut self,
        type_token: &Token,
        name_token: &Token,
    ) -> SyntaxNode {
        let mut func = SyntaxNode::new(
            NodeKind::FunctionDef,
            format!("Function: {}", name_token.text),
        );
        func.push(SyntaxNode::new(NodeKind::Type, type_token.text.clone()));
        func.push(SyntaxNode::new(NodeKind::Identifier, name_token.text.clone()));

        if self.match_separator("(") {
            func.push(self.parse_parameter_list());
        }

        if let Some(body) = self.parse_block() {
            func.push(body);
        }

        func
    }

    /// Parse the parameters after `(` up to and including `)`
    ///
    /// Only `type name` pairs become parameters; anything else inside the
    /// parentheses is stepped over one token at a time.
    pub(crate) fn parse_parameter_list(&mut self) -> SyntaxNode {
        let mut params = SyntaxNode::new(NodeKind::ParamList, "Parameters");

        while self.current().is_some() && !self.check_separator(")") {
            if let Some(param_type) = self.take(Category::ReservedWord) {
                if let Some(param_name) = self.take(Category::Identifier) {
                    params.push(SyntaxNode::new(
                        NodeKind::Param,
                        format!("{} {}", param_type.text, param_name.text),
                    ));
                }
            } else {
                self.advance();
            }

            self.match_separator(",");
        }
        self.match_separator(")");

        params
    }

    /// Parse the remainder of `type name ...;`
    pub(crate) fn parse_variable_declaration(
        &mut self,
        type_token: &Token,
        name_token: &Token,
    ) -> SyntaxNode {
        let mut decl = SyntaxNode::new(
            NodeKind::VarDecl,
            format!("Variable: {}", name_token.text),
        );
        decl.push(SyntaxNode::new(NodeKind::Type, type_token.text.clone()));
        decl.push(SyntaxNode::new(NodeKind::Identifier, name_token.text.clone()));

        if self.check(Category::Operator, "=") {
            self.advance();
            if let Some(value) = self.parse_value_atom() {
                decl.push(SyntaxNode::new(NodeKind::Assignment, "Assignment").with_child(value));
            }
        }
        // Array subscripts, extra declarators and compound initializers are
        // not modeled.
        self.skip_past_semicolon();

        decl
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{NodeKind, SyntaxNode};
    use crate::parser::parse::Parser;

    fn parse_source(source: &str) -> SyntaxNode {
        Parser::from_source(source).parse_program()
    }

    fn param_labels(list: &SyntaxNode) -> Vec<&str> {
        list.children.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_two_parameters() {
        let root = parse_source("int add(int a, float b) { return a; }");
        let func = &root.children[0];
        assert_eq!(func.kind, NodeKind::FunctionDef);
        assert_eq!(param_labels(&func.children[2]), vec!["int a", "float b"]);
    }

    #[test]
    fn test_malformed_parameters_are_skipped() {
        let root = parse_source("int f(int *p, char c, 3, void) { }");
        let params = &root.children[0].children[2];
        assert_eq!(param_labels(params), vec!["char c"]);
        assert_eq!(root.children[0].children[3].kind, NodeKind::Block);
    }

    #[test]
    fn test_function_prototype_has_no_body() {
        let root = parse_source("int f(void); int x;");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].children.len(), 3);
        assert_eq!(root.children[1].label, "Variable: x");
    }

    #[test]
    fn test_array_declaration_skips_subscript() {
        let root = parse_source("char msg[] = \"hi\"; int n;");
        let decl = &root.children[0];
        assert_eq!(decl.kind, NodeKind::VarDecl);
        assert_eq!(decl.children.len(), 2);
        assert_eq!(root.children[1].label, "Variable: n");
    }

    #[test]
    fn test_initializer_takes_single_atom() {
        let root = parse_source("float pi = 3.14159 * 2; int z;");
        let decl = &root.children[0];
        assert_eq!(
            decl.children[2],
            SyntaxNode::new(NodeKind::Assignment, "Assignment")
                .with_child(SyntaxNode::new(NodeKind::Constant, "3.14159"))
        );
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn test_identifier_initializer() {
        let root = parse_source("int y = x;");
        assert_eq!(
            root.children[0].children[2].children,
            vec![SyntaxNode::new(NodeKind::Identifier, "x")]
        );
    }

    #[test]
    fn test_non_atom_initializer_has_no_assignment() {
        let root = parse_source("char c = 'X';");
        assert_eq!(root.children[0].children.len(), 2);
    }

    #[test]
    fn test_declaration_without_semicolon_consumes_rest() {
        let root = parse_source("int x = 5 int y;");
        assert_eq!(root.children.len(), 1);
    }
}
