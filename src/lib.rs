//! Lexical scanner for the slate scripting language.
//!
//! Turns a source string into a stream of classified tokens for a
//! downstream parser. The scanner is pull-based: it walks the buffer
//! once, left to right, and hands out one token per request. Malformed
//! input becomes ordinary [`TokenKind::Error`] tokens rather than
//! failures, so the consumer decides how to react.
//!
//! # Quick start
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use slate_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let x = 1 + 2;");
//! let token = scanner.scan_token();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.text, "let");
//! assert_eq!(token.line, 1);
//! ```
//!
//! ## Scan everything up front
//!
//! ```
//! use slate_lexer::tokenize;
//!
//! let tokens = tokenize("print \"hello\";").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].text, "\"hello\"");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod scanner;
pub mod token;

pub use scanner::{
    MAX_BINARY_DIGITS, MAX_HEX_DIGITS, MAX_OCTAL_DIGITS, ScanError, Scanner, tokenize,
};
pub use token::{Token, TokenKind, keyword_kind};
