//! Dart tokenizer built on logos
//!
//! Only the token classes call detection needs are distinguished. String
//! literals and block comments are finished by callbacks, since Dart nests
//! both (`${ ... }` inside strings, `/* /* */ */` in comments).

use logos::{Lexer, Logos};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    /// A single string literal, including any `r` prefix and its quotes
    String { interpolated: bool },
    /// One of `( ) [ ] { } , : . ;`
    Punct(char),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}

/// Raw token from logos, trivia included
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // The opening quote; the callback consumes the rest of the literal
    #[regex(r#"r?('|"|'''|""")"#, string_literal)]
    String(bool),

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,

    #[regex(r"[0-9][0-9a-zA-Z_]*")]
    Number,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,

    // Operators and any other single character
    #[regex(r#"[^ \t\r\n\fa-zA-Z0-9_$'"()\[\]{},:.;]"#)]
    Other,
}

impl RawToken {
    fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::LineComment | RawToken::BlockComment => return None,
            RawToken::String(interpolated) => TokenKind::String { interpolated },
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Number | RawToken::Other => TokenKind::Other,
            RawToken::LParen => TokenKind::Punct('('),
            RawToken::RParen => TokenKind::Punct(')'),
            RawToken::LBracket => TokenKind::Punct('['),
            RawToken::RBracket => TokenKind::Punct(']'),
            RawToken::LBrace => TokenKind::Punct('{'),
            RawToken::RBrace => TokenKind::Punct('}'),
            RawToken::Comma => TokenKind::Punct(','),
            RawToken::Colon => TokenKind::Punct(':'),
            RawToken::Dot => TokenKind::Punct('.'),
            RawToken::Semicolon => TokenKind::Punct(';'),
        };
        Some(kind)
    }
}

/// Split Dart source into tokens, dropping whitespace and comments.
/// Never fails: unterminated strings and comments run to the end of input.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(raw) => match raw.kind() {
                Some(kind) => kind,
                None => continue,
            },
            Err(()) => TokenKind::Other,
        };
        tokens.push(Token {
            kind,
            span: lexer.span(),
        });
    }

    tokens
}

fn block_comment(lex: &mut Lexer<RawToken>) {
    let len = block_comment_len(lex.remainder().as_bytes());
    lex.bump(len);
}

fn string_literal(lex: &mut Lexer<RawToken>) -> Option<bool> {
    let opening = lex.slice();
    let raw = opening.starts_with('r');
    let quotes = opening.trim_start_matches('r').as_bytes();
    let quote = quotes[0];
    let triple = quotes.len() == 3;

    let (len, interpolated) = string_body_len(lex.remainder().as_bytes(), quote, triple, raw);
    lex.bump(len);
    Some(interpolated)
}

// Length of a block comment body after its opening `/*`. Dart block
// comments nest.
fn block_comment_len(rest: &[u8]) -> usize {
    let mut pos = 0;
    let mut depth = 1;
    while depth > 0 && pos < rest.len() {
        match (rest[pos], rest.get(pos + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                pos += 2;
            }
            (b'*', Some(b'/')) => {
                depth -= 1;
                pos += 2;
            }
            _ => pos += 1,
        }
    }
    pos.min(rest.len())
}

// Length of a string literal after its opening quotes, and whether it
// interpolates. Only ASCII bytes end a scan, so every returned length is a
// char boundary.
fn string_body_len(rest: &[u8], quote: u8, triple: bool, raw: bool) -> (usize, bool) {
    let mut pos = 0;
    let mut interpolated = false;

    while pos < rest.len() {
        let c = rest[pos];
        if c == quote {
            if !triple {
                return (pos + 1, interpolated);
            }
            if rest.get(pos + 1) == Some(&quote) && rest.get(pos + 2) == Some(&quote) {
                return (pos + 3, interpolated);
            }
            pos += 1;
        } else if c == b'\n' && !triple {
            // Unterminated single-line string
            return (pos, interpolated);
        } else if c == b'\\' && !raw {
            pos += 2;
        } else if c == b'$' && !raw {
            pos += 1;
            match rest.get(pos) {
                Some(b'{') => {
                    pos += 1 + interpolation_len(&rest[pos + 1..]);
                    interpolated = true;
                }
                Some(b) if b.is_ascii_alphabetic() || *b == b'_' => interpolated = true,
                _ => {}
            }
        } else {
            pos += 1;
        }
    }

    (rest.len(), interpolated)
}

// Length of a `${ ... }` body after the `${`, through the matching brace
fn interpolation_len(rest: &[u8]) -> usize {
    let mut pos = 0;
    let mut depth = 1;

    while pos < rest.len() {
        let raw = rest[pos] == b'r' && matches!(rest.get(pos + 1), Some(b'\'' | b'"'));
        let start = if raw { pos + 1 } else { pos };
        match (rest[start], rest.get(start + 1)) {
            (b'\'' | b'"', _) => {
                let quote = rest[start];
                let triple =
                    rest.get(start + 1) == Some(&quote) && rest.get(start + 2) == Some(&quote);
                let body = start + if triple { 3 } else { 1 };
                let (len, _) = string_body_len(&rest[body..], quote, triple, raw);
                pos = body + len;
            }
            (b'/', Some(b'/')) => {
                while pos < rest.len() && rest[pos] != b'\n' {
                    pos += 1;
                }
            }
            (b'/', Some(b'*')) => pos += 2 + block_comment_len(&rest[pos + 2..]),
            (b'{', _) => {
                depth += 1;
                pos += 1;
            }
            (b'}', _) => {
                depth -= 1;
                pos += 1;
                if depth == 0 {
                    return pos;
                }
            }
            _ => pos += 1,
        }
    }

    rest.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind, &source[t.span]))
            .collect()
    }

    #[test]
    fn test_identifiers_and_punctuation() {
        let tokens = kinds("test('a', () {});");
        assert_eq!(tokens[0], (TokenKind::Identifier, "test"));
        assert_eq!(tokens[1], (TokenKind::Punct('('), "("));
        assert_eq!(
            tokens[2],
            (TokenKind::String { interpolated: false }, "'a'")
        );
        assert_eq!(tokens[3], (TokenKind::Punct(','), ","));
        assert_eq!(tokens.last().unwrap(), &(TokenKind::Punct(';'), ";"));
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = kinds("// test('x')\n/* outer /* inner */ still */ main");
        assert_eq!(tokens, vec![(TokenKind::Identifier, "main")]);
    }

    #[test]
    fn test_string_forms() {
        // The trailing space keeps the last Dart literal clear of the
        // raw-string delimiter
        let source = r##"'it''s' "say \"hi\"" r'c:\dir' '''multi
line''' """x""" "##;
        let tokens = kinds(source);
        let strings: Vec<&str> = tokens.iter().map(|(_, text)| *text).collect();
        assert_eq!(
            strings,
            vec![
                "'it'",
                "'s'",
                r#""say \"hi\"""#,
                r"r'c:\dir'",
                "'''multi\nline'''",
                r#""""x""""#,
            ]
        );
    }

    #[test]
    fn test_closed_triple_quote_at_end_of_input() {
        let tokens = kinds(r#""""x""""#);
        assert_eq!(
            tokens,
            vec![(TokenKind::String { interpolated: false }, r#""""x""""#)]
        );
    }

    #[test]
    fn test_interpolation_is_detected() {
        let tokens = kinds(r#"'plain $' 'with $name' 'expr ${a + '}'} end'"#);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].0, TokenKind::String { interpolated: false });
        assert_eq!(tokens[1].0, TokenKind::String { interpolated: true });
        assert_eq!(tokens[2].0, TokenKind::String { interpolated: true });
        assert_eq!(tokens[2].1, r#"'expr ${a + '}'} end'"#);
    }

    #[test]
    fn test_raw_strings_do_not_interpolate() {
        let tokens = kinds(r"r'$name \n'");
        assert_eq!(tokens, vec![(TokenKind::String { interpolated: false }, r"r'$name \n'")]);
    }

    #[test]
    fn test_identifier_starting_with_r() {
        let tokens = kinds("run(r)");
        assert_eq!(tokens[0], (TokenKind::Identifier, "run"));
        assert_eq!(tokens[2], (TokenKind::Identifier, "r"));
    }

    #[test]
    fn test_unterminated_string_stops_at_newline() {
        let tokens = kinds("'open\nnext");
        assert_eq!(tokens[0].1, "'open");
        assert_eq!(tokens[1], (TokenKind::Identifier, "next"));
    }

    #[test]
    fn test_non_ascii_is_other() {
        let tokens = kinds("é test");
        assert_eq!(tokens[0], (TokenKind::Other, "é"));
        assert_eq!(tokens[1], (TokenKind::Identifier, "test"));
    }
}
