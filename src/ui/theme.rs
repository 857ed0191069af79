use crate::parser::{Category, NodeKind};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub operator: Color,
    pub char_literal: Color,
    pub preprocessor: Color,
    pub separator: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color, // Cyan for type names
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(166, 227, 161),         // Green for strings
    number: Color::Rgb(243, 139, 168),         // Red for numbers
    operator: Color::Rgb(203, 166, 247),       // Purple for operators
    char_literal: Color::Rgb(250, 179, 135),   // Orange for characters
    preprocessor: Color::Rgb(210, 15, 57),     // Dark red for directives
    separator: Color::Rgb(185, 140, 110),      // Brown for separators
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
};

/// Style applied to text covered by a token of `category`
pub fn category_style(category: Category) -> Style {
    let t = &DEFAULT_THEME;
    match category {
        Category::ReservedWord => Style::default()
            .fg(t.keyword)
            .add_modifier(Modifier::BOLD),
        Category::Identifier | Category::Whitespace => Style::default().fg(t.fg),
        Category::NumericLiteral => Style::default().fg(t.number),
        Category::Operator => Style::default().fg(t.operator),
        Category::StringLiteral => Style::default().fg(t.string),
        Category::CharLiteral => Style::default().fg(t.char_literal),
        Category::Comment => Style::default()
            .fg(t.comment)
            .add_modifier(Modifier::ITALIC),
        Category::Preprocessor => Style::default()
            .fg(t.preprocessor)
            .add_modifier(Modifier::BOLD),
        Category::Separator => Style::default().fg(t.separator),
    }
}

/// Style for a row of the syntax tree outline
pub fn node_style(kind: NodeKind) -> Style {
    let t = &DEFAULT_THEME;
    match kind {
        NodeKind::Program => Style::default().fg(t.primary).add_modifier(Modifier::BOLD),
        NodeKind::FunctionDef => Style::default().fg(t.function).add_modifier(Modifier::BOLD),
        NodeKind::VarDecl | NodeKind::Param | NodeKind::ParamList => Style::default().fg(t.secondary),
        NodeKind::Conditional | NodeKind::WhileLoop | NodeKind::ForLoop | NodeKind::Return => {
            Style::default().fg(t.keyword)
        }
        NodeKind::Type => Style::default().fg(t.type_name),
        NodeKind::Constant => Style::default().fg(t.number),
        NodeKind::ExpressionStatement => Style::default().fg(t.comment),
        NodeKind::Expression
        | NodeKind::BinaryOp
        | NodeKind::UnaryOp
        | NodeKind::Assignment
        | NodeKind::Identifier
        | NodeKind::Block => Style::default().fg(t.fg),
    }
}

pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
