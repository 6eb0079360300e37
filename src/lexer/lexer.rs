use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{
    errors::errors::{Diagnostic, LexError},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
}

/// Scanner state for a single pass over one source text.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    source: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            diagnostics: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn error(&mut self, error: LexError) {
        self.diagnostics.push(Diagnostic::new(error, self.line));
    }

    /// Pushes a token without a literal whose lexeme is the next `len` bytes.
    fn push_simple(&mut self, kind: TokenKind, len: usize) {
        let lexeme = text(&self.source[self.pos..self.pos + len]);
        self.push(MK_TOKEN!(kind, lexeme, None, self.line));
        self.advance_n(len);
    }

    pub fn at(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn remainder(&self) -> &'a [u8] {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Lexeme text; bytes that are not UTF-8 are replaced with U+FFFD.
fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Canonical decimal form of a number lexeme: `123` -> `123.0`,
/// `123.450` -> `123.45`, `1.000` -> `1.0`.
pub fn canonical_number(lexeme: &str) -> String {
    match lexeme.split_once('.') {
        None => format!("{}.0", lexeme),
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", integer)
            } else {
                format!("{}.{}", integer, fraction)
            }
        }
    }
}

fn operator_handler(lexer: &mut Lexer, single: TokenKind, double: TokenKind) {
    if lexer.peek() == Some(b'=') {
        lexer.push_simple(double, 2);
    } else {
        lexer.push_simple(single, 1);
    }
}

fn slash_handler(lexer: &mut Lexer) {
    if lexer.peek() != Some(b'/') {
        lexer.push_simple(TokenKind::Slash, 1);
        return;
    }

    // The newline is left for the main loop so it bumps the line counter.
    while let Some(byte) = lexer.at() {
        if byte == b'\n' {
            break;
        }
        lexer.advance_n(1);
    }
}

fn string_handler(lexer: &mut Lexer) {
    let bytes = lexer.source;
    let start = lexer.pos;
    let start_line = lexer.line;

    let mut literal = Vec::new();
    let mut segment_start = start + 1;
    let mut pos = start + 1;

    loop {
        match bytes.get(pos) {
            None => {
                lexer.pos = pos;
                lexer.error(LexError::UnterminatedString);
                return;
            }
            Some(b'"') => break,
            Some(b'\\') if matches!(bytes.get(pos + 1), Some(b'"') | Some(b'\\')) => {
                // Drop the backslash, keep the escaped character.
                literal.extend_from_slice(&bytes[segment_start..pos]);
                segment_start = pos + 1;
                pos += 2;
            }
            Some(b'\n') => {
                lexer.line += 1;
                pos += 1;
            }
            Some(_) => pos += 1,
        }
    }

    literal.extend_from_slice(&bytes[segment_start..pos]);
    let lexeme = text(&bytes[start..=pos]);

    lexer.push(MK_TOKEN!(
        TokenKind::String,
        lexeme,
        Some(Literal::String(text(&literal))),
        start_line
    ));
    lexer.pos = pos + 1;
}

fn number_handler(lexer: &mut Lexer) {
    let Some(matched) = NUMBER_PATTERN.find(lexer.remainder()) else {
        unexpected_handler(lexer);
        return;
    };

    let lexeme = text(matched.as_bytes());
    let literal = canonical_number(&lexeme);

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        lexeme,
        Some(Literal::Number(literal)),
        lexer.line
    ));
    lexer.advance_n(matched.end());
}

fn symbol_handler(lexer: &mut Lexer) {
    let Some(matched) = SYMBOL_PATTERN.find(lexer.remainder()) else {
        unexpected_handler(lexer);
        return;
    };

    let value = text(matched.as_bytes());
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value, None, lexer.line));
    lexer.advance_n(matched.end());
}

fn unexpected_handler(lexer: &mut Lexer) {
    // Multi-byte characters are reported once per byte.
    if let Some(byte) = lexer.at() {
        lexer.error(LexError::UnexpectedCharacter { byte });
    }
    lexer.advance_n(1);
}

/// Scans `source` into tokens and lexical diagnostics.
///
/// Input is treated as raw bytes and need not be valid UTF-8. Scanning
/// never stops early: every error is recorded and the returned token
/// sequence always ends with a single `EOF` token.
pub fn tokenize(source: impl AsRef<[u8]>) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lex = Lexer::new(source.as_ref());

    while let Some(byte) = lex.at() {
        match byte {
            b'\n' => {
                lex.line += 1;
                lex.advance_n(1);
            }
            b' ' | b'\r' | b'\t' => lex.advance_n(1),
            b'/' => slash_handler(&mut lex),
            b'"' => string_handler(&mut lex),
            b'0'..=b'9' => number_handler(&mut lex),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => symbol_handler(&mut lex),
            _ => {
                if let Some(kind) = TokenKind::single_char(byte) {
                    lex.push_simple(kind, 1);
                } else if let Some((single, double)) = TokenKind::with_optional_equal(byte) {
                    operator_handler(&mut lex, single, double);
                } else {
                    unexpected_handler(&mut lex);
                }
            }
        }
    }

    debug_assert!(lex.at_eof());
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, lex.line));
    (lex.tokens, lex.diagnostics)
}
