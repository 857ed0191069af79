//! C source front end
//!
//! This module turns C source text into a structural skeleton tree:
//! - [`lexer`]: Tokenization (source text → categorized tokens)
//! - [`parse`]: Parsing (tokens → [`ast::SyntaxNode`] tree)
//! - [`ast`]: Node model
//!
//! # Supported C Subset
//!
//! The tree captures program structure only:
//! - Declarations of `int`, `float`, `char`, `double`, `void` variables and functions
//! - Parameter lists of `type name` pairs
//! - `if` and `while` with their blocks, `return` with a single value atom
//! - Comments and preprocessor directives as opaque top-level statements
//! - Everything else as flat expression statements of identifiers and numbers
//!
//! No operator precedence, arrays, `for` loops or multi-declarator statements
//! are modeled.
//!
//! # Parser Implementation
//!
//! Hand-written rule-table lexer and single-lookahead recursive descent
//! parser. Neither stage can fail: both always return a (possibly partial)
//! result for any input, including text mid-edit.

pub mod ast;
mod declarations;
pub mod lexer;
pub mod parse;
mod statements;

pub use ast::{NodeKind, OutlineRow, SyntaxNode};
pub use lexer::{tokenize, Category, Lexer, Step, Token};
pub use parse::{parse, Parser};
