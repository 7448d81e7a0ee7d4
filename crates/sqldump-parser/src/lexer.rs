// Tokenizer and group parser.
//
// Reads one statement at a time from a scan cursor: skips whitespace and
// comments, recognizes tokens by their first byte and folds parenthesized
// runs into nested groups. Any lexical or structural failure ends the
// session; there is no resynchronization.

use std::io::Read;
use std::iter::FusedIterator;

use sqldump_buffer::{ScanCursor, SliceCursor, StreamCursor};
use sqldump_error::{DumpError, Result};
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::keyword::Keyword;
use crate::token::{Delimiter, Statement, Token};

const STATEMENT_TERMINATOR: u8 = b';';
const GROUP_CLOSE: u8 = b')';

const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Dump tokenizer producing one [`Statement`] per `;`-terminated unit.
pub struct Lexer<C> {
    cursor: C,
    config: ParserConfig,
    statements: usize,
    done: bool,
}

impl<'a> Lexer<SliceCursor<'a>> {
    /// Tokenize text that is already in memory.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::with_config(SliceCursor::new(source), ParserConfig::default())
    }

    /// Tokenize in-memory bytes. Invalid UTF-8 inside tokens is replaced
    /// with U+FFFD.
    #[must_use]
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self::with_config(SliceCursor::from_bytes(source), ParserConfig::default())
    }
}

impl<R: Read> Lexer<StreamCursor<R>> {
    /// Tokenize a stream, keeping only a working window in memory.
    pub fn from_reader(reader: R) -> Self {
        Self::from_reader_with_config(reader, ParserConfig::default())
    }

    pub fn from_reader_with_config(reader: R, config: ParserConfig) -> Self {
        Self::with_config(StreamCursor::with_config(reader, config.buffer), config)
    }
}

impl<C: ScanCursor> Lexer<C> {
    pub const fn with_config(cursor: C, config: ParserConfig) -> Self {
        Self {
            cursor,
            config,
            statements: 0,
            done: false,
        }
    }

    /// Absolute input offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Statements produced so far.
    pub const fn statements(&self) -> usize {
        self.statements
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Read the next statement, or `None` at end of input.
    ///
    /// After an error the session is over and every later call returns
    /// `Ok(None)`.
    pub fn next_statement(&mut self) -> Result<Option<Statement>> {
        if self.done {
            return Ok(None);
        }
        let result = self.read_statement();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result
    }

    /// Feed every statement to `f`, stopping at the first error from either
    /// side. Errors from `f` come back exactly as `f` returned them.
    ///
    /// Returns the number of statements handed to `f`.
    pub fn drive<E, F>(&mut self, mut f: F) -> std::result::Result<usize, E>
    where
        E: From<DumpError>,
        F: FnMut(Statement) -> std::result::Result<(), E>,
    {
        let mut count = 0;
        while let Some(statement) = self.next_statement()? {
            f(statement)?;
            count += 1;
        }
        Ok(count)
    }

    fn read_statement(&mut self) -> Result<Option<Statement>> {
        self.skip_whitespace_and_comments()?;
        if self.cursor.is_at_end()? {
            debug!(
                statements = self.statements,
                bytes = self.cursor.position(),
                "dump tokenized"
            );
            return Ok(None);
        }

        let offset = self.cursor.position();
        let mut tokens = Vec::new();
        self.parse_group_body(&mut tokens, STATEMENT_TERMINATOR, 0)?;
        let statement = Statement::new(tokens);
        self.statements += 1;
        let command = statement.command();
        trace!(
            offset,
            tokens = statement.len(),
            command = command.as_deref().unwrap_or(""),
            "statement"
        );
        Ok(Some(statement))
    }

    // -----------------------------------------------------------------------
    // Whitespace and comments
    // -----------------------------------------------------------------------

    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            let blank = self.cursor.scan_while(0, is_whitespace)?;
            if blank > 0 {
                self.cursor.advance(blank)?;
            }

            match (self.cursor.peek(0)?, self.cursor.peek(1)?) {
                (Some(b'-'), Some(b'-')) => match self.cursor.find(b"\n", 2)? {
                    Some(end) => self.cursor.advance(end + 1)?,
                    None => self.cursor.skip_rest()?,
                },
                (Some(b'/'), Some(b'*')) => match self.cursor.find(b"*/", 2)? {
                    Some(end) => self.cursor.advance(end + 2)?,
                    None => {
                        return Err(DumpError::UnterminatedComment {
                            offset: self.cursor.position(),
                            excerpt: self.excerpt(),
                        });
                    }
                },
                _ => return Ok(()),
            }
        }
    }

    // -----------------------------------------------------------------------
    // Groups
    // -----------------------------------------------------------------------

    /// Collect tokens until `closing` (consumed) or end of input.
    fn parse_group_body(&mut self, tokens: &mut Vec<Token>, closing: u8, depth: usize) -> Result<()> {
        while let Some(byte) = self.cursor.peek(0)? {
            if byte == closing {
                return self.cursor.advance(1);
            }
            let token = self.next_token(byte, depth)?;
            tokens.push(token);
            self.skip_whitespace_and_comments()?;
        }

        // The last statement of a dump may omit its `;`.
        if closing == STATEMENT_TERMINATOR {
            return Ok(());
        }
        Err(DumpError::MissingDelimiter {
            expected: char::from(closing),
            offset: self.cursor.position(),
            excerpt: self.excerpt(),
        })
    }

    fn parse_group(&mut self, depth: usize) -> Result<Token> {
        if depth >= self.config.max_depth {
            return Err(DumpError::NestingTooDeep {
                max: self.config.max_depth,
                offset: self.cursor.position(),
                excerpt: self.excerpt(),
            });
        }
        self.cursor.advance(1)?;
        self.skip_whitespace_and_comments()?;

        let mut tokens = vec![Token::Delimiter(Delimiter::LeftParen)];
        self.parse_group_body(&mut tokens, GROUP_CLOSE, depth + 1)?;
        tokens.push(Token::Delimiter(Delimiter::RightParen));
        Ok(Token::Group(tokens))
    }

    // -----------------------------------------------------------------------
    // Tokens
    // -----------------------------------------------------------------------

    fn next_token(&mut self, byte: u8, depth: usize) -> Result<Token> {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' => self.lex_word(),
            b'0'..=b'9' => self.lex_number(),
            b'\'' | b'"' => self.lex_string(byte),
            b'`' => self.lex_quoted_identifier(),
            b'(' => self.parse_group(depth),
            b',' => self.lex_delimiter(Delimiter::Comma),
            b'=' => self.lex_delimiter(Delimiter::Equal),
            b'.' => self.lex_delimiter(Delimiter::Dot),
            _ => {
                let excerpt = self.excerpt();
                Err(DumpError::UnexpectedCharacter {
                    found: excerpt.chars().next().unwrap_or(char::from(byte)),
                    offset: self.cursor.position(),
                    excerpt,
                })
            }
        }
    }

    fn lex_delimiter(&mut self, delimiter: Delimiter) -> Result<Token> {
        self.cursor.advance(1)?;
        Ok(Token::Delimiter(delimiter))
    }

    fn lex_word(&mut self) -> Result<Token> {
        let end = self.cursor.scan_while(1, is_word_byte)?;
        let word = self.text(0, end)?;
        self.cursor.advance(end)?;
        Ok(Keyword::lookup(&word).map_or(Token::Identifier(word), Token::Keyword))
    }

    /// Digit run, optionally followed by `.` and a fractional digit run.
    fn lex_number(&mut self) -> Result<Token> {
        let mut end = self.cursor.scan_while(1, |b| b.is_ascii_digit())?;
        let is_real = self.cursor.peek(end)? == Some(b'.')
            && self.cursor.peek(end + 1)?.is_some_and(|b| b.is_ascii_digit());
        if is_real {
            end = self.cursor.scan_while(end + 2, |b| b.is_ascii_digit())?;
        }

        let literal = self.text(0, end)?;
        let token = if is_real {
            literal
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Token::Real)
        } else {
            literal.parse().ok().map(Token::Integer)
        };
        let Some(token) = token else {
            return Err(DumpError::InvalidNumber {
                literal,
                offset: self.cursor.position(),
                excerpt: self.excerpt(),
            });
        };
        self.cursor.advance(end)?;
        Ok(token)
    }

    /// Quoted string; `\b \t \r \n` are control escapes, any other escaped
    /// byte stands for itself.
    fn lex_string(&mut self, quote: u8) -> Result<Token> {
        let mut text = Vec::new();
        let mut at = 1;
        loop {
            let Some(hit) = self.cursor.find_byte2(quote, b'\\', at)? else {
                return Err(self.unterminated_string(quote));
            };
            text.extend_from_slice(self.cursor.slice(at, hit)?);
            if self.cursor.peek(hit)? == Some(quote) {
                self.cursor.advance(hit + 1)?;
                break;
            }
            let Some(escaped) = self.cursor.peek(hit + 1)? else {
                return Err(self.unterminated_string(quote));
            };
            text.push(match escaped {
                b'b' => 0x08,
                b't' => b'\t',
                b'r' => b'\r',
                b'n' => b'\n',
                other => other,
            });
            at = hit + 2;
        }
        Ok(Token::String(String::from_utf8_lossy(&text).into_owned()))
    }

    fn lex_quoted_identifier(&mut self) -> Result<Token> {
        let Some(end) = self.cursor.find(b"`", 1)? else {
            return Err(DumpError::UnterminatedIdentifier {
                offset: self.cursor.position(),
                excerpt: self.excerpt(),
            });
        };
        let name = self.text(1, end)?;
        self.cursor.advance(end + 1)?;
        Ok(Token::Identifier(name))
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn text(&mut self, start: usize, end: usize) -> Result<String> {
        Ok(String::from_utf8_lossy(self.cursor.slice(start, end)?).into_owned())
    }

    fn excerpt(&mut self) -> String {
        self.cursor.excerpt(self.config.excerpt_len)
    }

    fn unterminated_string(&mut self, quote: u8) -> DumpError {
        DumpError::UnterminatedString {
            quote: char::from(quote),
            offset: self.cursor.position(),
            excerpt: self.excerpt(),
        }
    }
}

impl<C: ScanCursor> Iterator for Lexer<C> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_statement().transpose()
    }
}

impl<C: ScanCursor> FusedIterator for Lexer<C> {}
