use std::collections::HashMap;
use std::fmt::Display;

use once_cell::sync::Lazy;

/// All token kinds of the Solara language. Accented and unaccented
/// spellings of the same keyword (`função`/`funcao`, `até`/`ate`, …)
/// collapse into a single kind; the concrete spelling survives in the
/// token literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    Illegal,
    Eof,

    Ident,
    Int,
    Float,
    Str,
    Comment,
    Newline,

    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Percent,

    Lt,
    Gt,
    Eq,
    NotEq,
    Lte,
    Gte,

    Comma,
    Semicolon,
    Colon,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    Numero,
    Texto,
    Booleano,
    Lista,
    Mapa,
    Funcao,
    Retorne,
    Se,
    Senao,
    Para,
    Ate,
    Fim,
    E,
    Ou,
    Nao,
    Verdadeiro,
    Falso,
    Imprimir,
    Include,
    Install,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Str => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lte => "<=",
            TokenKind::Gte => ">=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Numero => "numero",
            TokenKind::Texto => "texto",
            TokenKind::Booleano => "booleano",
            TokenKind::Lista => "lista",
            TokenKind::Mapa => "mapa",
            TokenKind::Funcao => "função",
            TokenKind::Retorne => "retorne",
            TokenKind::Se => "se",
            TokenKind::Senao => "senão",
            TokenKind::Para => "para",
            TokenKind::Ate => "até",
            TokenKind::Fim => "fim",
            TokenKind::E => "e",
            TokenKind::Ou => "ou",
            TokenKind::Nao => "não",
            TokenKind::Verdadeiro => "verdadeiro",
            TokenKind::Falso => "falso",
            TokenKind::Imprimir => "imprimir",
            TokenKind::Include => "include",
            TokenKind::Install => "install",
        };
        f.write_str(repr)
    }
}

/// A single token, carrying the line and column at which scanning of it
/// began. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            col,
        }
    }

    pub fn eof(line: usize, col: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, col)
    }
}

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("numero", TokenKind::Numero);
    m.insert("texto", TokenKind::Texto);
    m.insert("booleano", TokenKind::Booleano);
    m.insert("lista", TokenKind::Lista);
    m.insert("mapa", TokenKind::Mapa);
    m.insert("função", TokenKind::Funcao);
    m.insert("funcao", TokenKind::Funcao);
    m.insert("retorne", TokenKind::Retorne);
    m.insert("se", TokenKind::Se);
    m.insert("senão", TokenKind::Senao);
    m.insert("senao", TokenKind::Senao);
    m.insert("para", TokenKind::Para);
    m.insert("até", TokenKind::Ate);
    m.insert("ate", TokenKind::Ate);
    m.insert("fim", TokenKind::Fim);
    m.insert("e", TokenKind::E);
    m.insert("ou", TokenKind::Ou);
    m.insert("não", TokenKind::Nao);
    m.insert("nao", TokenKind::Nao);
    m.insert("verdadeiro", TokenKind::Verdadeiro);
    m.insert("falso", TokenKind::Falso);
    m.insert("imprimir", TokenKind::Imprimir);
    m.insert("include", TokenKind::Include);
    m.insert("install", TokenKind::Install);
    m
});

/// Look a completed identifier up in the keyword table.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}
