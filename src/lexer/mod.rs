//! # Lexer
//!
//! Byte-cursor scanner for Solara source text. Tokens are produced lazily
//! via [`Lexer::next_token`]; once the input is exhausted the lexer keeps
//! returning `EOF` tokens. Newlines are significant and surface as their
//! own token kind, `::` starts a line comment, and a byte that matches no
//! rule becomes an `ILLEGAL` token instead of aborting the scan.

mod token;

pub use token::*;

/// The scanner. A single cursor advances byte by byte over the input;
/// identifiers may contain any byte ≥ 128, which keeps the accented
/// keywords (`função`, `até`, `não`, …) intact without a full Unicode
/// class table.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    read_position: usize,
    ch: u8,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
            line: 1,
            col: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.ch == b'\n' {
            self.line += 1;
            self.col = 0;
        }
        self.ch = self
            .input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0);
        self.position = self.read_position;
        self.read_position += 1;
        self.col += 1;
    }

    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\r') {
            self.read_char();
        }
    }

    /// Produce the next token. The position recorded on the token is the
    /// line/column at which scanning of it began.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let (line, col) = (self.line, self.col);

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==", line, col)
                } else {
                    Token::new(TokenKind::Assign, "=", line, col)
                }
            }
            b'+' => Token::new(TokenKind::Plus, "+", line, col),
            b'-' => Token::new(TokenKind::Minus, "-", line, col),
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=", line, col)
                } else {
                    Token::new(TokenKind::Bang, "!", line, col)
                }
            }
            b'*' => Token::new(TokenKind::Asterisk, "*", line, col),
            b'/' => Token::new(TokenKind::Slash, "/", line, col),
            b'%' => Token::new(TokenKind::Percent, "%", line, col),
            b'<' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Lte, "<=", line, col)
                } else {
                    Token::new(TokenKind::Lt, "<", line, col)
                }
            }
            b'>' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Gte, ">=", line, col)
                } else {
                    Token::new(TokenKind::Gt, ">", line, col)
                }
            }
            b',' => Token::new(TokenKind::Comma, ",", line, col),
            b';' => Token::new(TokenKind::Semicolon, ";", line, col),
            b':' => {
                if self.peek_char() == b':' {
                    self.read_char();
                    self.read_char();
                    let comment = self.read_comment();
                    Token::new(TokenKind::Comment, comment, line, col)
                } else {
                    Token::new(TokenKind::Colon, ":", line, col)
                }
            }
            b'(' => Token::new(TokenKind::LParen, "(", line, col),
            b')' => Token::new(TokenKind::RParen, ")", line, col),
            b'{' => Token::new(TokenKind::LBrace, "{", line, col),
            b'}' => Token::new(TokenKind::RBrace, "}", line, col),
            b'[' => Token::new(TokenKind::LBracket, "[", line, col),
            b']' => Token::new(TokenKind::RBracket, "]", line, col),
            b'"' => {
                let literal = self.read_string();
                Token::new(TokenKind::Str, literal, line, col)
            }
            b'\n' => Token::new(TokenKind::Newline, "\n", line, col),
            0 => return Token::eof(line, col),
            ch if is_letter(ch) => {
                let literal = self.read_identifier();
                let kind = lookup_ident(literal);
                return Token::new(kind, literal, line, col);
            }
            ch if ch.is_ascii_digit() => {
                let (kind, literal) = self.read_number();
                return Token::new(kind, literal, line, col);
            }
            ch => Token::new(TokenKind::Illegal, (ch as char).to_string(), line, col),
        };

        self.read_char();
        token
    }

    fn read_comment(&mut self) -> &'a str {
        let start = self.position;
        while self.ch != b'\n' && self.ch != 0 {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    fn read_number(&mut self) -> (TokenKind, &'a str) {
        let start = self.position;
        let mut kind = TokenKind::Int;

        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        if self.ch == b'.' && self.peek_char().is_ascii_digit() {
            kind = TokenKind::Float;
            self.read_char();
            while self.ch.is_ascii_digit() {
                self.read_char();
            }
        }

        (kind, &self.input[start..self.position])
    }

    fn read_string(&mut self) -> &'a str {
        let start = self.position + 1;
        loop {
            self.read_char();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }
        &self.input[start..self.position]
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_' || ch >= 128
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = vec![];
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex_all(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_operators_and_punctuation() {
        let kinds = kinds("= + - ! * / % < > == != <= >= , ; : ( ) { } [ ]");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Bang,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::Lte,
                TokenKind::Gte,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_var_statement() {
        let tokens = lex_all("numero idade = 42");
        let literals: Vec<&str> = tokens.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(literals, vec!["numero", "idade", "=", "42", ""]);
        assert_eq!(tokens[0].kind, TokenKind::Numero);
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[3].kind, TokenKind::Int);
    }

    #[test]
    fn test_accented_keywords() {
        let kinds = kinds("função f() fim se senão até não");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Funcao,
                TokenKind::Ident,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Fim,
                TokenKind::Se,
                TokenKind::Senao,
                TokenKind::Ate,
                TokenKind::Nao,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = lex_all("7 3.14 10.");
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].literal, "7");
        assert_eq!(tokens[1].kind, TokenKind::Float);
        assert_eq!(tokens[1].literal, "3.14");
        // a dot not followed by a digit is no float continuation
        assert_eq!(tokens[2].kind, TokenKind::Int);
        assert_eq!(tokens[2].literal, "10");
        assert_eq!(tokens[3].kind, TokenKind::Illegal);
        assert_eq!(tokens[3].literal, ".");
    }

    #[test]
    fn test_string_literal_without_escapes() {
        let tokens = lex_all("\"olá \\n mundo\"");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].literal, "olá \\n mundo");
    }

    #[test]
    fn test_unterminated_string_closes_at_eof() {
        let tokens = lex_all("\"aberto");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].literal, "aberto");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_comment_consumes_until_newline() {
        let tokens = lex_all("x :: um comentário\ny");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[1].literal, " um comentário");
        // the newline terminating a comment is consumed with it
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[2].literal, "y");
    }

    #[test]
    fn test_newline_token_and_positions() {
        let tokens = lex_all("a\n b");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Ident, "a", 1, 1),
                Token::new(TokenKind::Newline, "\n", 1, 2),
                Token::new(TokenKind::Ident, "b", 2, 2),
                Token::eof(2, 3),
            ]
        );
    }

    #[test]
    fn test_illegal_byte() {
        let tokens = lex_all("1 @ 2");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "@");
        assert_eq!(tokens[2].kind, TokenKind::Int);
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
