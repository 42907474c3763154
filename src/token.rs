//! Tokens produced by the lexer and consumed by the parser.

/// The closed set of lexical categories the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Illegal,
    Eof,

    Ident,
    Int,

    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    Lt,
    Gt,
    Eq,
    NotEq,
    LtEq,
    GtEq,

    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    Function,
    Var,
    True,
    False,
    If,
    Else,
    Return,
}

/// A single token: its kind plus the exact source text that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }
}

/// Maps an identifier's source spelling to a keyword kind, or `None` if it
/// is an ordinary identifier.
pub fn lookup_ident(ident: &str) -> TokenKind {
    match ident {
        "funksion" => TokenKind::Function,
        "var" => TokenKind::Var,
        "vertet" => TokenKind::True,
        "falso" => TokenKind::False,
        "nese" => TokenKind::If,
        "perndryshe" => TokenKind::Else,
        "kthen" => TokenKind::Return,
        _ => TokenKind::Ident,
    }
}
