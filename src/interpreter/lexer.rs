use logos::Logos;

use crate::error::TokenizeError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Patterns are matched longest-prefix-first, with fixed tokens taking
/// priority over the generic name pattern, so `true` lexes as a boolean
/// literal and `foreach` as a keyword rather than as names.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"hello"`. No escape sequences.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `var`
    #[token("var")]
    Var,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `foreach`
    #[token("foreach")]
    Foreach,
    /// `return`
    #[token("return")]
    Return,
    /// `def`
    #[token("def")]
    Def,
    /// `input`
    #[token("input")]
    Input,
    /// `output`
    #[token("output")]
    Output,
    /// Identifier tokens; variable, constant or function names such as `x`,
    /// `MAX` or `square`. Type names (`number`, `boolean`, `string`) also
    /// lex as names; the parsers give them meaning by position.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `<--`, the foreach binding arrow.
    #[token("<--")]
    Arrow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equal,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `#`
    #[token("#")]
    Hash,
    /// `-`
    #[token("-")]
    Minus,
    /// `@`
    #[token("@")]
    At,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// The lexical sort of a token.
///
/// Sorts classify tokens by their syntactic role. The reordering pass uses
/// them to tell operands from operators and structure from content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sort {
    /// A numeric literal.
    Number,
    /// A string literal.
    Str,
    /// A boolean literal.
    Bool,
    /// A reserved word or piece of statement punctuation.
    Keyword,
    /// A variable, constant, type or function name.
    Name,
    /// `(` or `)`.
    Paren,
    /// `[` or `]`.
    Bracket,
    /// `{` or `}`.
    Brace,
    /// A prefix operator (`-`, `@`).
    UnaryOp,
    /// An infix operator, including `,`, `?` and `:`.
    BinaryOp,
}

impl Token {
    /// Returns the lexical sort of this token.
    #[must_use]
    pub const fn sort(&self) -> Sort {
        match self {
            Self::Number(_) => Sort::Number,
            Self::Str(_) => Sort::Str,
            Self::Bool(_) => Sort::Bool,
            Self::Var
            | Self::If
            | Self::Else
            | Self::While
            | Self::Foreach
            | Self::Return
            | Self::Def
            | Self::Input
            | Self::Output
            | Self::Arrow
            | Self::Semicolon => Sort::Keyword,
            Self::Name(_) => Sort::Name,
            Self::LParen | Self::RParen => Sort::Paren,
            Self::LBracket | Self::RBracket => Sort::Bracket,
            Self::LBrace | Self::RBrace => Sort::Brace,
            Self::Minus | Self::At => Sort::UnaryOp,
            Self::Comma
            | Self::Question
            | Self::Colon
            | Self::Equal
            | Self::Less
            | Self::Greater
            | Self::Ampersand
            | Self::Plus
            | Self::Star
            | Self::Hash => Sort::BinaryOp,
            Self::Comment | Self::NewLine | Self::Ignored => Sort::Keyword,
        }
    }
}

impl std::fmt::Display for Token {
    /// Prints the token's source text.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", crate::ast::format_number(*n)),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Var => write!(f, "var"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Foreach => write!(f, "foreach"),
            Self::Return => write!(f, "return"),
            Self::Def => write!(f, "def"),
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Arrow => write!(f, "<--"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::Question => write!(f, "?"),
            Self::Colon => write!(f, ":"),
            Self::Equal => write!(f, "="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Ampersand => write!(f, "&"),
            Self::Plus => write!(f, "+"),
            Self::Star => write!(f, "*"),
            Self::Hash => write!(f, "#"),
            Self::Minus => write!(f, "-"),
            Self::At => write!(f, "@"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes a source string into an ordered token sequence.
///
/// Each token is paired with the source line it starts on. Scanning is
/// linear: every character is consumed exactly once, either by a token or by
/// skipped whitespace and comments.
///
/// # Errors
/// Returns a [`TokenizeError`] carrying the unconsumed remainder when no
/// lexical pattern matches non-empty input.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(TokenizeError { remainder: format!("{}{}", lexer.slice(), lexer.remainder()),
                                       line:      lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    Some(slice[1..slice.len() - 1].to_string())
}

/// Parses a boolean literal from the current token slice.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
