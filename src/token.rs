/// Token kinds produced by the scanner.
///
/// This is the full closed set the downstream parser matches on;
/// `Other` is reserved for the parser's own use and is never produced
/// by the scanner itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `or`
    Or,
    /// `and`
    And,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Bang,
    /// `?`
    Question,

    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,

    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `...`
    DotDotDot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `=`
    Equal,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,

    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    StarEqual,
    /// `/=`
    SlashEqual,
    /// `%=`
    PercentEqual,

    /// `->`
    Arrow,

    /// `true`
    True,
    /// `false`
    False,
    /// `nil`
    Nil,
    /// `if`
    If,
    /// `import`
    Import,
    /// `from`
    From,
    /// `else`
    Else,
    /// `while`
    While,
    /// `for`
    For,
    /// `break`
    Break,
    /// `skip`
    Skip,
    /// `class`
    Class,
    /// `static`
    Static,
    /// `this`
    This,
    /// `print`
    Print,
    /// `fn`
    Fn,
    /// `ret`
    Ret,
    /// `let`
    Let,
    /// `const`
    Const,
    /// `ctor`
    Ctor,
    /// `base`
    Base,
    /// `try`
    Try,
    /// `throw`
    Throw,
    /// `catch`
    Catch,
    /// `is`
    Is,
    /// `in`
    In,

    /// Identifier: `[a-zA-Z_][a-zA-Z_0-9]*`.
    Identifier,
    /// Numeric literal, decimal or `0x`/`0b`/`0o` prefixed.
    Number,
    /// Double-quoted string literal, quotes included in the text.
    String,
    /// Reserved for the parser; never produced by the scanner.
    Other,
    /// Malformed input; the token text is the diagnostic message.
    Error,
    /// End of input. Scanning past it keeps producing `Eof`.
    Eof,
}

/// Reserved words, keyed by the full lexeme. Lookup happens once per
/// identifier after the maximal run has been consumed, so prefixes like
/// `forest` or `fna` never match.
static KEYWORDS: phf::Map<&'static str, TokenKind> = phf::phf_map! {
    "or" =>     TokenKind::Or,
    "and" =>    TokenKind::And,
    "true" =>   TokenKind::True,
    "false" =>  TokenKind::False,
    "nil" =>    TokenKind::Nil,
    "if" =>     TokenKind::If,
    "import" => TokenKind::Import,
    "from" =>   TokenKind::From,
    "else" =>   TokenKind::Else,
    "while" =>  TokenKind::While,
    "for" =>    TokenKind::For,
    "break" =>  TokenKind::Break,
    "skip" =>   TokenKind::Skip,
    "class" =>  TokenKind::Class,
    "static" => TokenKind::Static,
    "this" =>   TokenKind::This,
    "print" =>  TokenKind::Print,
    "fn" =>     TokenKind::Fn,
    "ret" =>    TokenKind::Ret,
    "let" =>    TokenKind::Let,
    "const" =>  TokenKind::Const,
    "ctor" =>   TokenKind::Ctor,
    "base" =>   TokenKind::Base,
    "try" =>    TokenKind::Try,
    "throw" =>  TokenKind::Throw,
    "catch" =>  TokenKind::Catch,
    "is" =>     TokenKind::Is,
    "in" =>     TokenKind::In,
};

/// Look up the keyword kind for an identifier lexeme, if it is one.
#[must_use]
pub fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    KEYWORDS.get(lexeme).copied()
}

/// A single token: a classified, borrowed view into the source buffer.
///
/// `text` borrows from the scanned source for every kind except
/// [`TokenKind::Error`], where it is the diagnostic message instead of
/// a source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the lexeme start in the source buffer. For error
    /// tokens this is where the offending lexeme began; for `Eof` it is
    /// the source length.
    pub offset: usize,
    /// 1-based line on which the token begins.
    pub line: usize,
    /// True iff this is the first token since the last consumed
    /// newline (or the first token of the buffer).
    pub is_first_on_line: bool,
}
