//! Pull-based scanner over an in-memory source buffer.
//!
//! One [`Scanner`] walks the buffer left to right exactly once,
//! producing one token per [`Scanner::scan_token`] call. Malformed
//! input never aborts the scan: it is reported as an ordinary token of
//! kind [`TokenKind::Error`] and the cursor keeps moving, so repeated
//! calls always make progress and eventually settle on
//! [`TokenKind::Eof`].

use crate::token::{Token, TokenKind, keyword_kind};

/// A double's 53-bit mantissa holds 53/4 = 13.25 hex digits. The 13th
/// digit only partially contributes, so 12 is the longest hex literal
/// guaranteed to fit without precision loss.
pub const MAX_HEX_DIGITS: usize = 12;

/// Binary digits map one-to-one onto mantissa bits.
pub const MAX_BINARY_DIGITS: usize = 53;

/// Octal digits carry 3 bits each; 53/3 is just under 18, so 17 whole
/// digits fit.
pub const MAX_OCTAL_DIGITS: usize = 17;

// Error-token messages. These are the token text itself, so they must
// stay in sync with the digit limits above (checked by unit tests).
const HEX_LIMIT_MESSAGE: &str =
    "Hexadecimal number literal must have at least one digit/letter and at most 12.";
const BINARY_LIMIT_MESSAGE: &str =
    "Binary number literal must have at least one digit and at most 53.";
const OCTAL_LIMIT_MESSAGE: &str =
    "Octal number literal must have at least one digit and at most 17.";
const UNTERMINATED_STRING_MESSAGE: &str = "Unterminated string.";
const UNEXPECTED_CHARACTER_MESSAGE: &str = "Unexpected character.";

/// Error produced by the collecting [`tokenize`] entry point.
///
/// The pull API never fails; this exists for callers that want the
/// whole stream up front and treat the first malformed lexeme as fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}")]
pub struct ScanError {
    pub message: String,
    pub line: usize,
}

/// Scan a whole source string into a token vector, stopping at the
/// first malformed lexeme. The `Eof` token is not included.
///
/// # Errors
///
/// Returns `ScanError` for an unexpected character, a malformed
/// alternate-base numeral, or an unterminated string.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ScanError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan_token();
        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Error => {
                return Err(ScanError {
                    message: token.text.to_string(),
                    line: token.line,
                });
            }
            _ => tokens.push(token),
        }
    }
    Ok(tokens)
}

const fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

const fn is_identifier_continue(byte: u8) -> bool {
    is_identifier_start(byte) || byte.is_ascii_digit()
}

/// Stateful cursor over one immutable source buffer.
///
/// Each scanner owns its cursor, line counter, and first-on-line
/// latch; scanning several sources at once just means several
/// independent scanners.
pub struct Scanner<'a> {
    source: &'a str,
    /// Offset of the token currently being built.
    start: usize,
    /// Offset of the next unread byte.
    pos: usize,
    line: usize,
    /// Pending flag for the next-produced token; latched by the
    /// whitespace skipper on every newline, cleared when a token is
    /// built.
    first_on_line: bool,
}

impl<'a> Scanner<'a> {
    /// Bind a new scanner to a source buffer, with the cursor at the
    /// start and the line counter at 1.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
            line: 1,
            // The very first token is by definition first on its line.
            first_on_line: true,
        }
    }

    /// Produce the next token.
    ///
    /// Never fails and never panics: malformed input comes back as a
    /// [`TokenKind::Error`] token with the cursor already past the
    /// offending bytes, and once the end of input is reached every
    /// further call produces [`TokenKind::Eof`].
    pub fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.start = self.pos;

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let byte = self.advance();

        if byte.is_ascii_digit() {
            return self.number(byte);
        }
        if is_identifier_start(byte) {
            return self.identifier();
        }

        match byte {
            b'(' => self.make_token(TokenKind::OpenParen),
            b')' => self.make_token(TokenKind::CloseParen),
            b'{' => self.make_token(TokenKind::OpenBrace),
            b'}' => self.make_token(TokenKind::CloseBrace),
            b'[' => self.make_token(TokenKind::OpenBracket),
            b']' => self.make_token(TokenKind::CloseBracket),
            b',' => self.make_token(TokenKind::Comma),
            b':' => self.make_token(TokenKind::Colon),
            b';' => self.make_token(TokenKind::Semicolon),
            b'?' => self.make_token(TokenKind::Question),
            b'.' => {
                let kind = if self.match_byte(b'.') {
                    if self.match_byte(b'.') {
                        TokenKind::DotDotDot
                    } else {
                        TokenKind::DotDot
                    }
                } else {
                    TokenKind::Dot
                };
                self.make_token(kind)
            }
            b'+' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::PlusEqual
                } else if self.match_byte(b'+') {
                    TokenKind::PlusPlus
                } else {
                    TokenKind::Plus
                };
                self.make_token(kind)
            }
            b'-' => {
                let kind = if self.match_byte(b'>') {
                    TokenKind::Arrow
                } else if self.match_byte(b'-') {
                    TokenKind::MinusMinus
                } else if self.match_byte(b'=') {
                    TokenKind::MinusEqual
                } else {
                    TokenKind::Minus
                };
                self.make_token(kind)
            }
            b'*' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::StarEqual
                } else {
                    TokenKind::Star
                };
                self.make_token(kind)
            }
            b'/' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::SlashEqual
                } else {
                    TokenKind::Slash
                };
                self.make_token(kind)
            }
            b'%' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::PercentEqual
                } else {
                    TokenKind::Percent
                };
                self.make_token(kind)
            }
            b'=' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.make_token(kind)
            }
            b'!' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.make_token(kind)
            }
            b'<' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.make_token(kind)
            }
            b'>' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.make_token(kind)
            }
            b'"' => self.string(),
            _ => self.error_token(UNEXPECTED_CHARACTER_MESSAGE),
        }
    }

    /// Byte offset of the first character of the line a token sits on.
    ///
    /// Walks backward from the token's start offset to the nearest
    /// newline. Works on tokens from a scan that has already finished;
    /// the scanner's cursor is untouched.
    #[must_use]
    pub fn line_start(&self, token: &Token<'_>) -> usize {
        let upto = token.offset.min(self.source.len());
        memchr::memrchr(b'\n', &self.source.as_bytes()[..upto]).map_or(0, |newline| newline + 1)
    }

    /// The full source line containing a token, without its newline.
    /// Intended for diagnostic display next to an error token.
    #[must_use]
    pub fn line_text(&self, token: &Token<'_>) -> &'a str {
        let start = self.line_start(token);
        let end = memchr::memchr(b'\n', &self.source.as_bytes()[start..])
            .map_or(self.source.len(), |newline| start + newline);
        &self.source[start..end]
    }

    // ------------------------------------------------------------
    // Cursor primitives.
    // ------------------------------------------------------------

    const fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn byte_at(&self, index: usize) -> u8 {
        // NUL doubles as the out-of-bounds sentinel; it matches no
        // lexeme rule, so comparisons against it always fail.
        self.source.as_bytes().get(index).copied().unwrap_or(b'\0')
    }

    fn peek(&self) -> u8 {
        self.byte_at(self.pos)
    }

    fn peek_next(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    fn advance(&mut self) -> u8 {
        let byte = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        byte
    }

    /// Advance only if the next byte is `expected`. Never moves the
    /// cursor on a failed match.
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.pos += 1;
        true
    }

    // ------------------------------------------------------------
    // Token construction.
    // ------------------------------------------------------------

    fn make_token(&mut self, kind: TokenKind) -> Token<'a> {
        let token = Token {
            kind,
            text: &self.source[self.start..self.pos],
            offset: self.start,
            line: self.line,
            is_first_on_line: self.first_on_line,
        };
        self.first_on_line = false;
        log::trace!("token {:?} {:?} line {}", token.kind, token.text, token.line);
        token
    }

    /// Build an error token. Its text is the diagnostic message, not a
    /// span of source; `offset` still points at the offending lexeme.
    fn error_token(&mut self, message: &'static str) -> Token<'a> {
        let token = Token {
            kind: TokenKind::Error,
            text: message,
            offset: self.start,
            line: self.line,
            is_first_on_line: self.first_on_line,
        };
        self.first_on_line = false;
        log::trace!("error token {:?} line {}", token.text, token.line);
        token
    }

    // ------------------------------------------------------------
    // Lexeme scanners.
    // ------------------------------------------------------------

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\r' | b'\t' => {
                    self.advance();
                }
                b'\n' => {
                    self.line += 1;
                    self.first_on_line = true;
                    self.advance();
                }
                b'/' if self.peek_next() == b'/' => {
                    // Comment runs to the end of the line; the newline
                    // itself is left for the next loop iteration.
                    while self.peek() != b'\n' && !self.is_at_end() {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn identifier(&mut self) -> Token<'a> {
        while is_identifier_continue(self.peek()) {
            self.advance();
        }
        // Keyword lookup runs on the full maximal run, so a reserved
        // word is never recognized as a prefix of a longer identifier.
        let lexeme = &self.source[self.start..self.pos];
        self.make_token(keyword_kind(lexeme).unwrap_or(TokenKind::Identifier))
    }

    fn number(&mut self, first: u8) -> Token<'a> {
        if first != b'0' {
            return self.decimal();
        }

        match self.peek() {
            b'x' | b'X' => {
                self.advance();
                self.based_literal(|byte| byte.is_ascii_hexdigit(), MAX_HEX_DIGITS, HEX_LIMIT_MESSAGE)
            }
            b'b' | b'B' => {
                self.advance();
                self.based_literal(
                    |byte| byte == b'0' || byte == b'1',
                    MAX_BINARY_DIGITS,
                    BINARY_LIMIT_MESSAGE,
                )
            }
            b'o' | b'O' => {
                self.advance();
                self.based_literal(
                    |byte| (b'0'..=b'7').contains(&byte),
                    MAX_OCTAL_DIGITS,
                    OCTAL_LIMIT_MESSAGE,
                )
            }
            // A leading zero without a base marker is plain decimal,
            // so `0`, `0.5` and `05` all scan fine.
            _ => self.decimal(),
        }
    }

    fn decimal(&mut self) -> Token<'a> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A fractional part needs at least one digit after the dot;
        // a bare trailing `.` belongs to the dot operators.
        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Scan a maximal run of digits for one alternate base and apply
    /// the digit-count precision policy. The count check is deliberate:
    /// it looks at literal length only, never at the parsed value, so
    /// redundant leading zeros count against the limit.
    fn based_literal(
        &mut self,
        is_base_digit: impl Fn(u8) -> bool,
        max_digits: usize,
        message: &'static str,
    ) -> Token<'a> {
        let mut count = 0;
        while is_base_digit(self.peek()) {
            self.advance();
            count += 1;
        }

        if count == 0 || count > max_digits {
            return self.error_token(message);
        }
        self.make_token(TokenKind::Number)
    }

    fn string(&mut self) -> Token<'a> {
        // A literal may span lines; the token reports the line of the
        // opening quote, while the counter keeps tracking the cursor.
        let opening_line = self.line;

        while self.peek() != b'"' && !self.is_at_end() {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            // A backslash shields whatever follows from terminating
            // the literal; escape decoding happens in a later stage.
            if self.peek() == b'\\' {
                self.advance();
                if self.is_at_end() {
                    break;
                }
            }
            self.advance();
        }

        if self.is_at_end() {
            return self.error_token(UNTERMINATED_STRING_MESSAGE);
        }

        self.advance(); // closing quote
        let mut token = self.make_token(TokenKind::String);
        token.line = opening_line;
        token
    }
}
