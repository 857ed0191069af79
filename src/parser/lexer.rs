//! Lexer (tokenizer) for C source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser
//! and by the highlighter. Matching is driven by a fixed, priority-ordered rule
//! table: at every cursor position the rules are tried in order, each anchored
//! exactly at the cursor, and the first one that matches wins.
//!
//! The lexer never fails. A character that no rule accepts is dropped and the
//! cursor moves on by one, so every call terminates and returns a (possibly
//! partial) token sequence.

use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::OnceLock;
use tracing::trace;

/// Lexical category attached to every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ReservedWord,
    Identifier,
    NumericLiteral,
    Operator,
    StringLiteral,
    CharLiteral,
    Comment,
    Preprocessor,
    Separator,
    Whitespace,
}

impl Category {
    /// Every category, in the order the rule table tries them.
    pub const ALL: [Category; 10] = [
        Category::Comment,
        Category::Preprocessor,
        Category::StringLiteral,
        Category::CharLiteral,
        Category::ReservedWord,
        Category::NumericLiteral,
        Category::Operator,
        Category::Separator,
        Category::Identifier,
        Category::Whitespace,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::ReservedWord => "Reserved Word",
            Category::Identifier => "Identifier",
            Category::NumericLiteral => "Numeric Literal",
            Category::Operator => "Operator",
            Category::StringLiteral => "String Literal",
            Category::CharLiteral => "Character Literal",
            Category::Comment => "Comment",
            Category::Preprocessor => "Preprocessor Directive",
            Category::Separator => "Separator",
            Category::Whitespace => "Whitespace",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified, positioned substring of the source.
///
/// `start..end` is a half-open range of *character* offsets (not bytes) into
/// the text the lexer was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub category: Category,
    pub text: String,
}

impl Token {
    pub fn is(&self, category: Category, text: &str) -> bool {
        self.category == category && self.text == text
    }
}

/// Tab-separated `start..end`, category name and quoted text.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}\t{}\t{:?}", self.start, self.end, self.category, self.text)
    }
}

/// One iteration of the lexer loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A rule matched. Whitespace matches are reported here too.
    Matched(Token),
    /// No rule matched; the character at `offset` was dropped.
    Skipped { offset: usize, ch: char },
}

impl Step {
    /// Character range consumed by this step.
    pub fn span(&self) -> (usize, usize) {
        match self {
            Step::Matched(token) => (token.start, token.end),
            Step::Skipped { offset, .. } => (*offset, offset + 1),
        }
    }
}

/// C89 keyword set.
pub const RESERVED_WORDS: [&str; 32] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if", "int",
    "long", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "typedef", "union", "unsigned", "void", "volatile",
    "while",
];

fn reserved_words() -> &'static FxHashSet<&'static str> {
    static WORDS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| RESERVED_WORDS.iter().copied().collect())
}

pub fn is_reserved_word(word: &str) -> bool {
    reserved_words().contains(word)
}

const MULTI_CHAR_OPERATORS: [&str; 10] =
    ["==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "++", "--"];
const SINGLE_CHAR_OPERATORS: &str = "+-*/%=<>!&|^~?:";
const SEPARATORS: &str = "(){}[];,.";

/// A rule returns the end offset of a match anchored at the cursor.
type Rule = fn(&Lexer) -> Option<usize>;

const RULES: [(Category, Rule); 10] = [
    (Category::Comment, Lexer::match_comment),
    (Category::Preprocessor, Lexer::match_preprocessor),
    (Category::StringLiteral, Lexer::match_string),
    (Category::CharLiteral, Lexer::match_char),
    (Category::ReservedWord, Lexer::match_reserved_word),
    (Category::NumericLiteral, Lexer::match_number),
    (Category::Operator, Lexer::match_operator),
    (Category::Separator, Lexer::match_separator),
    (Category::Identifier, Lexer::match_identifier),
    (Category::Whitespace, Lexer::match_whitespace),
];

/// Word characters for boundary purposes: Unicode alphanumerics and `_`.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

/// Tokenize `source`, dropping whitespace and unrecognized characters.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Lexer for C source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the remaining input into the emitted token sequence.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref()
            .filter_map(|step| match step {
                Step::Matched(token) if token.category != Category::Whitespace => Some(token),
                _ => None,
            })
            .collect()
    }

    /// Run one iteration of the lexer loop at the current cursor.
    ///
    /// Always advances the cursor by at least one character.
    fn step(&mut self) -> Option<Step> {
        if self.is_at_end() {
            return None;
        }

        let start = self.position;
        for (category, rule) in RULES {
            if let Some(end) = rule(self) {
                debug_assert!(end > start, "rule {category:?} matched empty text");
                self.position = end;
                return Some(Step::Matched(Token {
                    start,
                    end,
                    category,
                    text: self.input[start..end].iter().collect(),
                }));
            }
        }

        let ch = self.input[start];
        trace!(offset = start, ?ch, "skipping unrecognized character");
        self.position += 1;
        Some(Step::Skipped { offset: start, ch })
    }

    // ===== Rules =====

    /// `// ...` to end of line, or `/* ... */` up to the nearest `*/`.
    ///
    /// An unterminated block comment does not match; the `/` then falls
    /// through to the operator rule.
    fn match_comment(&self) -> Option<usize> {
        if self.peek() != Some('/') {
            return None;
        }
        match self.peek_ahead(1) {
            Some('/') => Some(self.find_from(self.position + 2, '\n').unwrap_or(self.input.len())),
            Some('*') => {
                let mut i = self.position + 2;
                while i + 1 < self.input.len() {
                    if self.input[i] == '*' && self.input[i + 1] == '/' {
                        return Some(i + 2);
                    }
                    i += 1;
                }
                None
            }
            _ => None,
        }
    }

    /// `#`, optional whitespace, a word, then the rest of the line.
    fn match_preprocessor(&self) -> Option<usize> {
        if self.peek() != Some('#') {
            return None;
        }
        let mut i = self.position + 1;
        while self.char_at(i).is_some_and(is_space) {
            i += 1;
        }
        if !self.char_at(i).is_some_and(is_word_char) {
            return None;
        }
        Some(self.find_from(i, '\n').unwrap_or(self.input.len()))
    }

    fn match_string(&self) -> Option<usize> {
        if self.peek() != Some('"') {
            return None;
        }
        let mut i = self.position + 1;
        loop {
            match self.char_at(i)? {
                '"' => return Some(i + 1),
                '\\' => match self.char_at(i + 1) {
                    Some(ch) if ch != '\n' => i += 2,
                    _ => return None,
                },
                _ => i += 1,
            }
        }
    }

    fn match_char(&self) -> Option<usize> {
        if self.peek() != Some('\'') {
            return None;
        }
        let body_end = match self.char_at(self.position + 1)? {
            '\\' => match self.char_at(self.position + 2) {
                Some(ch) if ch != '\n' => self.position + 3,
                _ => return None,
            },
            '\'' => return None,
            _ => self.position + 2,
        };
        (self.char_at(body_end) == Some('\'')).then_some(body_end + 1)
    }

    fn match_reserved_word(&self) -> Option<usize> {
        if !self.at_word_start() {
            return None;
        }
        let end = self.word_end(self.position);
        let word: String = self.input[self.position..end].iter().collect();
        is_reserved_word(&word).then_some(end)
    }

    /// Digits, optional `.digits`, optional exponent, bounded on both sides.
    ///
    /// When the longest form is glued to a following word character the
    /// shorter forms are tried in turn, so `3.14abc` still yields `3`.
    fn match_number(&self) -> Option<usize> {
        if !self.at_word_start() || !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        let int_end = self.digits_end(self.position);
        let fraction_end = (self.char_at(int_end) == Some('.')
            && self.char_at(int_end + 1).is_some_and(|c| c.is_ascii_digit()))
        .then(|| self.digits_end(int_end + 1));

        let mut candidates = Vec::with_capacity(4);
        if let Some(frac) = fraction_end {
            candidates.extend(self.exponent_end(frac));
            candidates.push(frac);
        }
        candidates.extend(self.exponent_end(int_end));
        candidates.push(int_end);

        candidates.into_iter().find(|&end| self.at_word_end(end))
    }

    fn match_operator(&self) -> Option<usize> {
        let first = self.peek()?;
        if let Some(second) = self.peek_ahead(1) {
            let pair: String = [first, second].iter().collect();
            if MULTI_CHAR_OPERATORS.contains(&pair.as_str()) {
                return Some(self.position + 2);
            }
        }
        SINGLE_CHAR_OPERATORS.contains(first).then_some(self.position + 1)
    }

    fn match_separator(&self) -> Option<usize> {
        let ch = self.peek()?;
        SEPARATORS.contains(ch).then_some(self.position + 1)
    }

    fn match_identifier(&self) -> Option<usize> {
        if !self.at_word_start() {
            return None;
        }
        let first = self.peek()?;
        if !(first.is_ascii_alphabetic() || first == '_') {
            return None;
        }
        let mut end = self.position + 1;
        while self.char_at(end).is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            end += 1;
        }
        self.at_word_end(end).then_some(end)
    }

    fn match_whitespace(&self) -> Option<usize> {
        let mut end = self.position;
        while self.char_at(end).is_some_and(is_space) {
            end += 1;
        }
        (end > self.position).then_some(end)
    }

    // ===== Helpers =====

    fn exponent_end(&self, at: usize) -> Option<usize> {
        if !matches!(self.char_at(at), Some('e' | 'E')) {
            return None;
        }
        let mut i = at + 1;
        if matches!(self.char_at(i), Some('+' | '-')) {
            i += 1;
        }
        self.char_at(i)
            .is_some_and(|c| c.is_ascii_digit())
            .then(|| self.digits_end(i))
    }

    fn digits_end(&self, from: usize) -> usize {
        let mut i = from;
        while self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
            i += 1;
        }
        i
    }

    fn word_end(&self, from: usize) -> usize {
        let mut i = from;
        while self.char_at(i).is_some_and(is_word_char) {
            i += 1;
        }
        i
    }

    /// The cursor sits on a word character not preceded by one.
    fn at_word_start(&self) -> bool {
        let before = self.position > 0 && is_word_char(self.input[self.position - 1]);
        !before && self.peek().is_some_and(is_word_char)
    }

    /// `end` directly follows a word character and is not itself one.
    fn at_word_end(&self, end: usize) -> bool {
        !self.char_at(end).is_some_and(is_word_char)
    }

    fn find_from(&self, from: usize, target: char) -> Option<usize> {
        self.input
            .get(from..)?
            .iter()
            .position(|&c| c == target)
            .map(|i| from + i)
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.input.get(index).copied()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.char_at(self.position)
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.char_at(self.position + n)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

impl Iterator for Lexer {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(source: &str) -> Vec<(Category, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.category, t.text))
            .collect()
    }

    fn single(source: &str) -> (Category, String) {
        let tokens = categories(source);
        assert_eq!(tokens.len(), 1, "expected one token for {source:?}, got {tokens:?}");
        tokens.into_iter().next().unwrap()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = categories("int main() { return 0; }");
        let expected = [
            (Category::ReservedWord, "int"),
            (Category::Identifier, "main"),
            (Category::Separator, "("),
            (Category::Separator, ")"),
            (Category::Separator, "{"),
            (Category::ReservedWord, "return"),
            (Category::NumericLiteral, "0"),
            (Category::Separator, ";"),
            (Category::Separator, "}"),
        ];
        assert_eq!(tokens.len(), expected.len());
        for ((cat, text), (want_cat, want_text)) in tokens.iter().zip(expected) {
            assert_eq!(*cat, want_cat);
            assert_eq!(text, want_text);
        }
    }

    #[test]
    fn test_keyword_boundary() {
        assert_eq!(single("int"), (Category::ReservedWord, "int".into()));
        assert_eq!(single("integer"), (Category::Identifier, "integer".into()));
        assert_eq!(single("do"), (Category::ReservedWord, "do".into()));
        assert_eq!(single("double"), (Category::ReservedWord, "double".into()));
        assert_eq!(single("_if"), (Category::Identifier, "_if".into()));
    }

    #[test]
    fn test_operators() {
        let tokens = categories("== != <= >= && || << >> ++ --");
        assert_eq!(tokens.len(), 10);
        assert!(tokens.iter().all(|(c, t)| *c == Category::Operator && t.len() == 2));
        assert_eq!(single("=="), (Category::Operator, "==".into()));
    }

    #[test]
    fn test_compound_assignment_splits() {
        // `+=` is not in the multi-character set.
        let tokens = categories("+=");
        assert_eq!(
            tokens,
            vec![
                (Category::Operator, "+".to_string()),
                (Category::Operator, "=".to_string())
            ]
        );
    }

    #[test]
    fn test_numeric_literals() {
        assert_eq!(single("3.14159"), (Category::NumericLiteral, "3.14159".into()));
        assert_eq!(single("1e10"), (Category::NumericLiteral, "1e10".into()));
        assert_eq!(single("2.5E-3"), (Category::NumericLiteral, "2.5E-3".into()));
        assert_eq!(single("42"), (Category::NumericLiteral, "42".into()));
    }

    #[test]
    fn test_number_backs_off_to_shorter_form() {
        let tokens = categories("3.x");
        assert_eq!(tokens[0], (Category::NumericLiteral, "3".to_string()));
        assert_eq!(tokens[1], (Category::Separator, ".".to_string()));
        assert_eq!(tokens[2], (Category::Identifier, "x".to_string()));
    }

    #[test]
    fn test_number_glued_to_word_is_dropped() {
        assert!(tokenize("5int").is_empty());
        assert!(tokenize("12abc").is_empty());
    }

    #[test]
    fn test_string_literal() {
        let source = r#""a\"b""#;
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, Category::StringLiteral);
        assert_eq!(tokens[0].text, source);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 6));
    }

    #[test]
    fn test_unterminated_string_falls_through() {
        let tokens = categories("\"abc");
        assert_eq!(tokens, vec![(Category::Identifier, "abc".to_string())]);
    }

    #[test]
    fn test_escaped_newline_breaks_string() {
        let tokens = categories("\"a\\\nb\"");
        assert_eq!(
            tokens,
            vec![
                (Category::Identifier, "a".to_string()),
                (Category::Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(single("'X'"), (Category::CharLiteral, "'X'".into()));
        assert_eq!(single(r"'\n'"), (Category::CharLiteral, r"'\n'".into()));
        // Two characters between the quotes is not a character literal.
        assert!(!categories("'ab'").iter().any(|(c, _)| *c == Category::CharLiteral));
    }

    #[test]
    fn test_comments() {
        let tokens = categories("int x; // comment\nint y; /* block\ncomment */ int z;");
        assert_eq!(tokens[3], (Category::Comment, "// comment".to_string()));
        assert_eq!(tokens[7], (Category::Comment, "/* block\ncomment */".to_string()));
        assert_eq!(tokens[9], (Category::Identifier, "z".to_string()));
    }

    #[test]
    fn test_block_comment_is_lazy() {
        let tokens = categories("/* a */ x /* b */");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].1, "/* a */");
        assert_eq!(tokens[2].1, "/* b */");
    }

    #[test]
    fn test_unterminated_block_comment_lexes_as_operators() {
        let tokens = categories("/* open");
        assert_eq!(
            tokens,
            vec![
                (Category::Operator, "/".to_string()),
                (Category::Operator, "*".to_string()),
                (Category::Identifier, "open".to_string()),
            ]
        );
    }

    #[test]
    fn test_preprocessor_directive() {
        let tokens = categories("#include <stdio.h>\nint x;");
        assert_eq!(tokens[0], (Category::Preprocessor, "#include <stdio.h>".to_string()));
        assert_eq!(tokens[1], (Category::ReservedWord, "int".to_string()));

        assert_eq!(single("#  define N 10"), (Category::Preprocessor, "#  define N 10".into()));
        // Whitespace between `#` and the name may span lines.
        let tokens = categories("#\ninclude x\ny");
        assert_eq!(
            tokens,
            vec![
                (Category::Preprocessor, "#\ninclude x".to_string()),
                (Category::Identifier, "y".to_string()),
            ]
        );
        assert_eq!(
            single("#\x1creturn 0"),
            (Category::Preprocessor, "#\x1creturn 0".into())
        );

        // A bare `#` is not a directive and no other rule accepts it.
        assert!(tokenize("#").is_empty());
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        let steps: Vec<Step> = Lexer::new("a @ b").collect();
        assert!(steps.contains(&Step::Skipped { offset: 2, ch: '@' }));
        let tokens = categories("a @ b");
        assert_eq!(
            tokens,
            vec![
                (Category::Identifier, "a".to_string()),
                (Category::Identifier, "b".to_string())
            ]
        );
    }

    #[test]
    fn test_offsets_are_char_indexed() {
        let tokens = tokenize("\"é\" x");
        assert_eq!((tokens[0].start, tokens[0].end), (0, 3));
        assert_eq!((tokens[1].start, tokens[1].end), (4, 5));
    }

    #[test]
    fn test_steps_cover_source() {
        let source = "int a = 'c'; @ /* x */ \"s\\\"\" 1.5e+3";
        let mut cursor = 0;
        for step in Lexer::new(source) {
            let (start, end) = step.span();
            assert_eq!(start, cursor);
            cursor = end;
        }
        assert_eq!(cursor, source.chars().count());
    }

    #[test]
    fn test_information_separators_are_whitespace() {
        let steps: Vec<Step> = Lexer::new("a\x1f\x1cb").collect();
        assert_eq!(steps.len(), 3);
        assert!(matches!(&steps[1], Step::Matched(t) if t.category == Category::Whitespace && t.end == 3));
    }

    #[test]
    fn test_all_lists_every_category_once() {
        let unique: FxHashSet<Category> = Category::ALL.into_iter().collect();
        assert_eq!(unique.len(), Category::ALL.len());
        let order: Vec<Category> = RULES.iter().map(|(category, _)| *category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("x +");
        assert_eq!(tokens[1].to_string(), "2..3\tOperator\t\"+\"");
    }

    #[test]
    fn test_whitespace_not_emitted() {
        assert!(tokenize(" \t\n  ").is_empty());
        assert!(tokenize("").is_empty());
    }
}
