use thiserror::Error;

/// Primary error type for sqldump operations.
///
/// Every failure aborts the parse session: there is no resynchronization
/// after a lexical, structural or semantic error. Positional variants carry
/// the absolute byte offset and a short excerpt of the unconsumed input.
#[derive(Error, Debug)]
pub enum DumpError {
    // === Lexical Errors ===
    /// `/*` without a matching `*/` before end of input.
    #[error("unterminated comment at offset {offset} ({excerpt})")]
    UnterminatedComment { offset: usize, excerpt: String },

    /// Quoted string without a closing quote.
    #[error("no closing delimiter for string {quote} at offset {offset} ({excerpt})")]
    UnterminatedString {
        quote: char,
        offset: usize,
        excerpt: String,
    },

    /// Backtick identifier without a closing backtick.
    #[error("no closing backtick at offset {offset} ({excerpt})")]
    UnterminatedIdentifier { offset: usize, excerpt: String },

    /// Character that cannot start any token.
    #[error("unexpected \"{found}\" at offset {offset} ({excerpt})")]
    UnexpectedCharacter {
        found: char,
        offset: usize,
        excerpt: String,
    },

    /// Numeric literal that does not fit the target type.
    #[error("invalid numeric literal {literal} at offset {offset} ({excerpt})")]
    InvalidNumber {
        literal: String,
        offset: usize,
        excerpt: String,
    },

    // === Structural Errors ===
    /// Input ended inside a group.
    #[error("group closing delimiter \"{expected}\" not found at offset {offset} ({excerpt})")]
    MissingDelimiter {
        expected: char,
        offset: usize,
        excerpt: String,
    },

    /// Parenthesis nesting exceeds the configured depth.
    #[error("groups nested deeper than {max} at offset {offset} ({excerpt})")]
    NestingTooDeep {
        max: usize,
        offset: usize,
        excerpt: String,
    },

    // === Semantic Errors ===
    /// INSERT statement with fewer tokens than the shortest valid form.
    #[error("statement is too short: {statement}")]
    StatementTooShort { statement: String },

    /// `INSERT` not followed by `INTO`.
    #[error("\"INSERT\" is not followed by \"INTO\": {statement}")]
    MissingInto { statement: String },

    /// Table name position holds something other than an identifier.
    #[error("table name expected, \"{found}\" found: {statement}")]
    ExpectedTableName { found: String, statement: String },

    /// Neither a column list nor `VALUES` after the table name.
    #[error("\"INSERT\" statement doesn't include column names or \"VALUES\" keyword: {statement}")]
    MissingColumnsOrValues { statement: String },

    /// Column list not followed by `VALUES`.
    #[error("\"INSERT\" statement doesn't include \"VALUES\" keyword: {statement}")]
    MissingValues { statement: String },

    /// `VALUES` keyword with no tuple after it, or a dangling comma.
    #[error("values tuple expected at end of statement: {statement}")]
    MissingTuple { statement: String },

    /// Token where a tuple or a tuple separator was expected.
    #[error("{expected} expected, \"{found}\" found: {statement}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        statement: String,
    },

    /// Tuple or column list that is not a well-formed group.
    #[error("failed to parse tuple ({tuple}), {detail}")]
    MalformedTuple { tuple: String, detail: String },

    /// Tuple arity differs from the resolved column list.
    #[error("tuple for table {table} has {values} values but {columns} columns are known")]
    ArityMismatch {
        table: String,
        columns: usize,
        values: usize,
    },

    /// Column list naming the same column more than once.
    #[error("column {column} is listed more than once for table {table}")]
    DuplicateColumn { table: String, column: String },

    // === Buffer Contract Violations ===
    /// Access below the streaming buffer's discard offset.
    #[error("position {position} is in discarded data (discard offset {floor})")]
    DiscardedRegion { position: usize, floor: usize },

    /// Range with `start > end` or past the end of input.
    #[error("invalid range {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    /// Range handle invalidated by a later discard.
    #[error("range starting at {start} was invalidated by a discard up to {floor}")]
    StaleRange { start: usize, floor: usize },

    // === I/O Errors ===
    /// Failure reading the underlying source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`DumpError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Tokenizer failures: comments, quoting, numbers, stray characters.
    Lexical,
    /// Group balance failures.
    Structural,
    /// INSERT / CREATE TABLE shape failures.
    Semantic,
    /// Programming-contract violations against the streaming buffer.
    Contract,
    /// Failures of the underlying source.
    Io,
}

impl DumpError {
    /// Classify this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnterminatedComment { .. }
            | Self::UnterminatedString { .. }
            | Self::UnterminatedIdentifier { .. }
            | Self::UnexpectedCharacter { .. }
            | Self::InvalidNumber { .. } => ErrorCategory::Lexical,
            Self::MissingDelimiter { .. } | Self::NestingTooDeep { .. } => {
                ErrorCategory::Structural
            }
            Self::StatementTooShort { .. }
            | Self::MissingInto { .. }
            | Self::ExpectedTableName { .. }
            | Self::MissingColumnsOrValues { .. }
            | Self::MissingValues { .. }
            | Self::MissingTuple { .. }
            | Self::UnexpectedToken { .. }
            | Self::MalformedTuple { .. }
            | Self::ArityMismatch { .. }
            | Self::DuplicateColumn { .. } => ErrorCategory::Semantic,
            Self::DiscardedRegion { .. } | Self::InvalidRange { .. } | Self::StaleRange { .. } => {
                ErrorCategory::Contract
            }
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    /// Absolute input offset for positional errors.
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnterminatedComment { offset, .. }
            | Self::UnterminatedString { offset, .. }
            | Self::UnterminatedIdentifier { offset, .. }
            | Self::UnexpectedCharacter { offset, .. }
            | Self::InvalidNumber { offset, .. }
            | Self::MissingDelimiter { offset, .. }
            | Self::NestingTooDeep { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Short excerpt of the input following the error position.
    pub fn excerpt(&self) -> Option<&str> {
        match self {
            Self::UnterminatedComment { excerpt, .. }
            | Self::UnterminatedString { excerpt, .. }
            | Self::UnterminatedIdentifier { excerpt, .. }
            | Self::UnexpectedCharacter { excerpt, .. }
            | Self::InvalidNumber { excerpt, .. }
            | Self::MissingDelimiter { excerpt, .. }
            | Self::NestingTooDeep { excerpt, .. } => Some(excerpt),
            _ => None,
        }
    }

    /// Whether this error comes from the tokenizer or group parser.
    pub const fn is_syntax(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Lexical | ErrorCategory::Structural
        )
    }

    /// Recover the original I/O error, or give the error back unchanged.
    pub fn into_io(self) -> std::result::Result<std::io::Error, Self> {
        match self {
            Self::Io(err) => Ok(err),
            other => Err(other),
        }
    }

    /// Create a malformed-tuple error.
    pub fn malformed_tuple(tuple: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedTuple {
            tuple: tuple.into(),
            detail: detail.into(),
        }
    }
}

/// Result type alias using `DumpError`.
pub type Result<T> = std::result::Result<T, DumpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_lexical() {
        let err = DumpError::UnterminatedComment {
            offset: 12,
            excerpt: "/* never closed".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unterminated comment at offset 12 (/* never closed)"
        );

        let err = DumpError::UnexpectedCharacter {
            found: '#',
            offset: 0,
            excerpt: "#x".to_owned(),
        };
        assert_eq!(err.to_string(), "unexpected \"#\" at offset 0 (#x)");
    }

    #[test]
    fn error_display_semantic() {
        let err = DumpError::ArityMismatch {
            table: "users".to_owned(),
            columns: 2,
            values: 1,
        };
        assert_eq!(
            err.to_string(),
            "tuple for table users has 1 values but 2 columns are known"
        );

        let err = DumpError::malformed_tuple("( 1 2 )", "bad delimiter at index #3");
        assert_eq!(
            err.to_string(),
            "failed to parse tuple (( 1 2 )), bad delimiter at index #3"
        );
    }

    #[test]
    fn category_mapping() {
        let lexical = DumpError::InvalidNumber {
            literal: "99999999999999999999".to_owned(),
            offset: 3,
            excerpt: String::new(),
        };
        assert_eq!(lexical.category(), ErrorCategory::Lexical);
        assert!(lexical.is_syntax());

        let structural = DumpError::MissingDelimiter {
            expected: ')',
            offset: 9,
            excerpt: String::new(),
        };
        assert_eq!(structural.category(), ErrorCategory::Structural);
        assert!(structural.is_syntax());

        let duplicate = DumpError::DuplicateColumn {
            table: "t".to_owned(),
            column: "a".to_owned(),
        };
        assert_eq!(duplicate.category(), ErrorCategory::Semantic);
        assert_eq!(
            duplicate.to_string(),
            "column a is listed more than once for table t"
        );

        let semantic = DumpError::MissingInto {
            statement: "INSERT t".to_owned(),
        };
        assert_eq!(semantic.category(), ErrorCategory::Semantic);
        assert!(!semantic.is_syntax());

        let contract = DumpError::DiscardedRegion {
            position: 1,
            floor: 10,
        };
        assert_eq!(contract.category(), ErrorCategory::Contract);
    }

    #[test]
    fn offset_and_excerpt() {
        let err = DumpError::UnterminatedString {
            quote: '\'',
            offset: 42,
            excerpt: "'abc".to_owned(),
        };
        assert_eq!(err.offset(), Some(42));
        assert_eq!(err.excerpt(), Some("'abc"));

        let err = DumpError::StatementTooShort {
            statement: "INSERT INTO t".to_owned(),
        };
        assert_eq!(err.offset(), None);
        assert_eq!(err.excerpt(), None);
    }

    #[test]
    fn io_error_roundtrip() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "pipe closed");
        let err: DumpError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::Io);

        let back = err.into_io().expect("io variant");
        assert_eq!(back.kind(), std::io::ErrorKind::UnexpectedEof);
        assert_eq!(back.to_string(), "pipe closed");

        let other = DumpError::MissingValues {
            statement: String::new(),
        };
        assert!(other.into_io().is_err());
    }
}
