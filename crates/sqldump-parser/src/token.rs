// Token tree produced by the dump tokenizer.
//
// A statement is a flat token sequence; parenthesized sub-expressions nest as
// `Token::Group`, which always carries its own `(` and `)` delimiter tokens as
// first and last element.

use std::borrow::Cow;
use std::fmt;

use crate::keyword::Keyword;

/// Single-character punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Comma,
    LeftParen,
    RightParen,
    Equal,
    Dot,
}

impl Delimiter {
    /// Delimiter for a source byte, if it is one.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b',' => Some(Self::Comma),
            b'(' => Some(Self::LeftParen),
            b')' => Some(Self::RightParen),
            b'=' => Some(Self::Equal),
            b'.' => Some(Self::Dot),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::LeftParen => '(',
            Self::RightParen => ')',
            Self::Equal => '=',
            Self::Dot => '.',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A lexical unit of dump text.
#[derive(Debug, Clone)]
pub enum Token {
    /// Bare or backtick-quoted name.
    Identifier(String),
    /// Reserved word.
    Keyword(Keyword),
    Delimiter(Delimiter),
    Integer(i64),
    Real(f64),
    /// Quoted string with escapes already resolved.
    String(String),
    /// Parenthesized tokens, bounded by `(` and `)` delimiter tokens.
    Group(Vec<Token>),
}

impl Token {
    /// Plain text form: the name, spelling or decoded literal without any
    /// quoting. Groups render as their canonical form.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Identifier(name) | Self::String(name) => Cow::Borrowed(name),
            Self::Keyword(keyword) => Cow::Borrowed(keyword.as_str()),
            Self::Delimiter(_) | Self::Integer(_) | Self::Real(_) | Self::Group(_) => {
                Cow::Owned(self.to_string())
            }
        }
    }

    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&[Token]> {
        match self {
            Self::Group(tokens) => Some(tokens),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Self::Keyword(k) if *k == keyword)
    }

    #[must_use]
    pub fn is_delimiter(&self, delimiter: Delimiter) -> bool {
        matches!(self, Self::Delimiter(d) if *d == delimiter)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Identifier(a), Self::Identifier(b)) | (Self::String(a), Self::String(b)) => {
                a == b
            }
            (Self::Keyword(a), Self::Keyword(b)) => a == b,
            (Self::Delimiter(a), Self::Delimiter(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a.to_bits() == b.to_bits(),
            (Self::Group(a), Self::Group(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Token {}

/// Whether a name can be written bare and still read back as an identifier.
fn is_plain_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        && !Keyword::is_keyword(name)
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("'")?;
    for ch in text.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            other => write!(f, "{other}")?,
        }
    }
    f.write_str("'")
}

fn write_joined(f: &mut fmt::Formatter<'_>, tokens: &[Token]) -> fmt::Result {
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{token}")?;
    }
    Ok(())
}

/// Canonical single-spaced rendering that tokenizes back to an equal token.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) if is_plain_name(name) => f.write_str(name),
            Self::Identifier(name) => write!(f, "`{name}`"),
            Self::Keyword(keyword) => f.write_str(keyword.as_str()),
            Self::Delimiter(delimiter) => write!(f, "{delimiter}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => {
                let text = v.to_string();
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
            Self::String(text) => write_quoted(f, text),
            Self::Group(tokens) => write_joined(f, tokens),
        }
    }
}

/// One `;`-terminated unit of dump text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statement {
    tokens: Vec<Token>,
}

impl Statement {
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Text of the first token, used to classify the statement.
    #[must_use]
    pub fn command(&self) -> Option<Cow<'_, str>> {
        self.tokens.first().map(Token::text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(inner: Vec<Token>) -> Token {
        let mut tokens = vec![Token::Delimiter(Delimiter::LeftParen)];
        tokens.extend(inner);
        tokens.push(Token::Delimiter(Delimiter::RightParen));
        Token::Group(tokens)
    }

    #[test]
    fn reals_compare_by_bits() {
        assert_eq!(Token::Real(1.5), Token::Real(1.5));
        assert_ne!(Token::Real(0.0), Token::Real(-0.0));
        assert_eq!(Token::Real(f64::NAN), Token::Real(f64::NAN));
        assert_ne!(Token::Real(1.0), Token::Integer(1));
    }

    #[test]
    fn identifier_quoting() {
        assert_eq!(Token::Identifier("users".to_owned()).to_string(), "users");
        assert_eq!(Token::Identifier("values".to_owned()).to_string(), "`values`");
        assert_eq!(Token::Identifier("my table".to_owned()).to_string(), "`my table`");
        assert_eq!(Token::Identifier("1st".to_owned()).to_string(), "`1st`");
        assert_eq!(Token::Identifier(String::new()).to_string(), "``");
    }

    #[test]
    fn literal_rendering() {
        assert_eq!(Token::Integer(-7).to_string(), "-7");
        assert_eq!(Token::Real(3.0).to_string(), "3.0");
        assert_eq!(Token::Real(1234.5678).to_string(), "1234.5678");
        assert_eq!(
            Token::String("it's\n\\ok\t\u{8}".to_owned()).to_string(),
            r"'it\'s\n\\ok\t\b'"
        );
        assert_eq!(Token::Keyword(Keyword::Values).to_string(), "VALUES");
    }

    #[test]
    fn group_rendering() {
        let varchar = group(vec![Token::Integer(255)]);
        assert_eq!(varchar.to_string(), "( 255 )");
        assert_eq!(group(vec![]).to_string(), "( )");
    }

    #[test]
    fn statement_command() {
        let stmt = Statement::new(vec![
            Token::Keyword(Keyword::Insert),
            Token::Keyword(Keyword::Into),
            Token::Identifier("t".to_owned()),
            Token::Keyword(Keyword::Values),
            group(vec![
                Token::Integer(1),
                Token::Delimiter(Delimiter::Comma),
                Token::Keyword(Keyword::Null),
            ]),
        ]);
        assert_eq!(stmt.command().as_deref(), Some("INSERT"));
        assert_eq!(stmt.len(), 5);
        assert_eq!(stmt.to_string(), "INSERT INTO t VALUES ( 1 , NULL )");
        assert!(Statement::default().command().is_none());
        assert!(Statement::default().is_empty());
    }

    #[test]
    fn accessors() {
        let t = Token::Identifier("id".to_owned());
        assert_eq!(t.as_identifier(), Some("id"));
        assert!(t.as_group().is_none());
        assert!(Token::Keyword(Keyword::Into).is_keyword(Keyword::Into));
        assert!(!Token::Identifier("INTO".to_owned()).is_keyword(Keyword::Into));
        assert!(Token::Delimiter(Delimiter::Comma).is_delimiter(Delimiter::Comma));
        assert_eq!(Delimiter::from_byte(b'='), Some(Delimiter::Equal));
        assert_eq!(Delimiter::from_byte(b';'), None);
        assert_eq!(Token::Integer(42).text(), "42");
        assert_eq!(Token::String("x y".to_owned()).text(), "x y");
    }
}
