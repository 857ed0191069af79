// Syntax tree definitions for the structure viewer

use std::fmt;

/// Node kinds produced by the parser
///
/// `ForLoop`, `BinaryOp` and `UnaryOp` are grammar slots: the skeleton parser
/// never builds them, but renderers still have names for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    FunctionDef,
    VarDecl,
    ParamList,
    Param,
    ExpressionStatement,
    Conditional,
    WhileLoop,
    ForLoop,
    Return,
    Expression,
    BinaryOp,
    UnaryOp,
    Assignment,
    Constant,
    Identifier,
    Type,
    Block,
}

impl NodeKind {
    /// Human-readable name used by tree renderers
    pub fn display_name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::FunctionDef => "Function Definition",
            NodeKind::VarDecl => "Variable Declaration",
            NodeKind::ParamList => "Parameter List",
            NodeKind::Param => "Parameter",
            NodeKind::ExpressionStatement => "Statement",
            NodeKind::Conditional => "Conditional",
            NodeKind::WhileLoop => "While Loop",
            NodeKind::ForLoop => "For Loop",
            NodeKind::Return => "Return",
            NodeKind::Expression => "Expression",
            NodeKind::BinaryOp => "Binary Operation",
            NodeKind::UnaryOp => "Unary Operation",
            NodeKind::Assignment => "Assignment",
            NodeKind::Constant => "Constant",
            NodeKind::Identifier => "Identifier",
            NodeKind::Type => "Type",
            NodeKind::Block => "Block",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A tree element: kind, optional label, and the children it owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub label: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        SyntaxNode {
            kind,
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }

    /// `"<kind name>: <label>"`, or just the kind name for an empty label
    pub fn display_label(&self) -> String {
        if self.label.is_empty() {
            self.kind.display_name().to_string()
        } else {
            format!("{}: {}", self.kind.display_name(), self.label)
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SyntaxNode::node_count).sum::<usize>()
    }

    /// Pre-order flattening into rows for list-style rendering
    pub fn outline(&self) -> Vec<OutlineRow> {
        let mut rows = Vec::with_capacity(self.node_count());
        self.collect_rows(0, &mut rows);
        rows
    }

    fn collect_rows(&self, depth: usize, rows: &mut Vec<OutlineRow>) {
        rows.push(OutlineRow {
            depth,
            kind: self.kind,
            text: self.display_label(),
        });
        for child in &self.children {
            child.collect_rows(depth + 1, rows);
        }
    }
}

/// One rendered line of a flattened tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub depth: usize,
    pub kind: NodeKind,
    pub text: String,
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.outline() {
            writeln!(f, "{:indent$}{}", "", row.text, indent = row.depth * 2)?;
        }
        Ok(())
    }
}
