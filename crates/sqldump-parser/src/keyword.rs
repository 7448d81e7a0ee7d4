// Reserved keyword registry.
//
// A fixed, case-insensitive table of reserved words: SQL reserved words, the
// MySQL column types that show up in dump DDL, and the DML/DDL verbs. Words
// found here tokenize as [`Keyword`]; every other bare word is an identifier.

use std::fmt;

/// A reserved SQL keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    Abort,
    All,
    Allocate,
    Alter,
    Analyse,
    Analyze,
    And,
    Any,
    As,
    Asc,
    AutoIncrement,
    Between,
    Bigint,
    Binary,
    Bit,
    Blob,
    Both,
    Case,
    Cast,
    Char,
    Character,
    Check,
    Cluster,
    Coalesce,
    Collate,
    Collation,
    Column,
    Constraint,
    Copy,
    Create,
    Cross,
    Current,
    CurrentCatalog,
    CurrentDate,
    CurrentDb,
    CurrentSchema,
    CurrentSid,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    CurrentUserid,
    CurrentUseroid,
    Date,
    Datetime,
    Deallocate,
    Dec,
    Decimal,
    Decode,
    Default,
    Delete,
    Desc,
    Distinct,
    Distribute,
    Do,
    Double,
    Drop,
    Else,
    End,
    Enum,
    Except,
    Exclude,
    Exists,
    Explain,
    Express,
    Extend,
    External,
    Extract,
    False,
    First,
    Float,
    Following,
    For,
    Foreign,
    From,
    Full,
    Function,
    Genstats,
    Global,
    Group,
    GroupBy,
    Having,
    IdentifierCase,
    Ilike,
    In,
    Index,
    Initially,
    Inner,
    InnerJoin,
    Inout,
    Insert,
    Int,
    Integer,
    Intersect,
    Interval,
    Into,
    Join,
    Key,
    Leading,
    Left,
    LeftJoin,
    Like,
    Limit,
    Load,
    Local,
    Lock,
    Longblob,
    Longtext,
    Mediumblob,
    Mediumint,
    Mediumtext,
    Minus,
    Move,
    Natural,
    Nchar,
    New,
    Not,
    Notnull,
    Null,
    Nulls,
    Numeric,
    Nvl,
    Off,
    Offset,
    Old,
    On,
    Online,
    Only,
    Or,
    Order,
    Others,
    Out,
    Outer,
    OuterJoin,
    Over,
    Overlaps,
    Partition,
    Position,
    Preceding,
    Precision,
    Preserve,
    Primary,
    Real,
    Reset,
    Reuse,
    Right,
    RightJoin,
    Rows,
    Select,
    SessionUser,
    Set,
    Setof,
    Show,
    Smallint,
    Some,
    Table,
    Text,
    Then,
    Ties,
    Time,
    Timestamp,
    Tinyblob,
    Tinyint,
    Tinytext,
    To,
    Trailing,
    Transaction,
    Trigger,
    Trim,
    True,
    Unbounded,
    Union,
    Unique,
    Update,
    User,
    Using,
    Vacuum,
    Values,
    Varbinary,
    Varchar,
    Verbose,
    Version,
    View,
    When,
    Where,
    With,
    Write,
    Year,
}

impl Keyword {
    /// Every keyword, in alphabetical order of spelling.
    pub const ALL: &'static [Self] = &[
        Self::Abort,
        Self::All,
        Self::Allocate,
        Self::Alter,
        Self::Analyse,
        Self::Analyze,
        Self::And,
        Self::Any,
        Self::As,
        Self::Asc,
        Self::AutoIncrement,
        Self::Between,
        Self::Bigint,
        Self::Binary,
        Self::Bit,
        Self::Blob,
        Self::Both,
        Self::Case,
        Self::Cast,
        Self::Char,
        Self::Character,
        Self::Check,
        Self::Cluster,
        Self::Coalesce,
        Self::Collate,
        Self::Collation,
        Self::Column,
        Self::Constraint,
        Self::Copy,
        Self::Create,
        Self::Cross,
        Self::Current,
        Self::CurrentCatalog,
        Self::CurrentDate,
        Self::CurrentDb,
        Self::CurrentSchema,
        Self::CurrentSid,
        Self::CurrentTime,
        Self::CurrentTimestamp,
        Self::CurrentUser,
        Self::CurrentUserid,
        Self::CurrentUseroid,
        Self::Date,
        Self::Datetime,
        Self::Deallocate,
        Self::Dec,
        Self::Decimal,
        Self::Decode,
        Self::Default,
        Self::Delete,
        Self::Desc,
        Self::Distinct,
        Self::Distribute,
        Self::Do,
        Self::Double,
        Self::Drop,
        Self::Else,
        Self::End,
        Self::Enum,
        Self::Except,
        Self::Exclude,
        Self::Exists,
        Self::Explain,
        Self::Express,
        Self::Extend,
        Self::External,
        Self::Extract,
        Self::False,
        Self::First,
        Self::Float,
        Self::Following,
        Self::For,
        Self::Foreign,
        Self::From,
        Self::Full,
        Self::Function,
        Self::Genstats,
        Self::Global,
        Self::Group,
        Self::GroupBy,
        Self::Having,
        Self::IdentifierCase,
        Self::Ilike,
        Self::In,
        Self::Index,
        Self::Initially,
        Self::Inner,
        Self::InnerJoin,
        Self::Inout,
        Self::Insert,
        Self::Int,
        Self::Integer,
        Self::Intersect,
        Self::Interval,
        Self::Into,
        Self::Join,
        Self::Key,
        Self::Leading,
        Self::Left,
        Self::LeftJoin,
        Self::Like,
        Self::Limit,
        Self::Load,
        Self::Local,
        Self::Lock,
        Self::Longblob,
        Self::Longtext,
        Self::Mediumblob,
        Self::Mediumint,
        Self::Mediumtext,
        Self::Minus,
        Self::Move,
        Self::Natural,
        Self::Nchar,
        Self::New,
        Self::Not,
        Self::Notnull,
        Self::Null,
        Self::Nulls,
        Self::Numeric,
        Self::Nvl,
        Self::Off,
        Self::Offset,
        Self::Old,
        Self::On,
        Self::Online,
        Self::Only,
        Self::Or,
        Self::Order,
        Self::Others,
        Self::Out,
        Self::Outer,
        Self::OuterJoin,
        Self::Over,
        Self::Overlaps,
        Self::Partition,
        Self::Position,
        Self::Preceding,
        Self::Precision,
        Self::Preserve,
        Self::Primary,
        Self::Real,
        Self::Reset,
        Self::Reuse,
        Self::Right,
        Self::RightJoin,
        Self::Rows,
        Self::Select,
        Self::SessionUser,
        Self::Set,
        Self::Setof,
        Self::Show,
        Self::Smallint,
        Self::Some,
        Self::Table,
        Self::Text,
        Self::Then,
        Self::Ties,
        Self::Time,
        Self::Timestamp,
        Self::Tinyblob,
        Self::Tinyint,
        Self::Tinytext,
        Self::To,
        Self::Trailing,
        Self::Transaction,
        Self::Trigger,
        Self::Trim,
        Self::True,
        Self::Unbounded,
        Self::Union,
        Self::Unique,
        Self::Update,
        Self::User,
        Self::Using,
        Self::Vacuum,
        Self::Values,
        Self::Varbinary,
        Self::Varchar,
        Self::Verbose,
        Self::Version,
        Self::View,
        Self::When,
        Self::Where,
        Self::With,
        Self::Write,
        Self::Year,
    ];

    /// Look up a word, ignoring ASCII case.
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "ABORT" => Some(Self::Abort),
            "ALL" => Some(Self::All),
            "ALLOCATE" => Some(Self::Allocate),
            "ALTER" => Some(Self::Alter),
            "ANALYSE" => Some(Self::Analyse),
            "ANALYZE" => Some(Self::Analyze),
            "AND" => Some(Self::And),
            "ANY" => Some(Self::Any),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "AUTO_INCREMENT" => Some(Self::AutoIncrement),
            "BETWEEN" => Some(Self::Between),
            "BIGINT" => Some(Self::Bigint),
            "BINARY" => Some(Self::Binary),
            "BIT" => Some(Self::Bit),
            "BLOB" => Some(Self::Blob),
            "BOTH" => Some(Self::Both),
            "CASE" => Some(Self::Case),
            "CAST" => Some(Self::Cast),
            "CHAR" => Some(Self::Char),
            "CHARACTER" => Some(Self::Character),
            "CHECK" => Some(Self::Check),
            "CLUSTER" => Some(Self::Cluster),
            "COALESCE" => Some(Self::Coalesce),
            "COLLATE" => Some(Self::Collate),
            "COLLATION" => Some(Self::Collation),
            "COLUMN" => Some(Self::Column),
            "CONSTRAINT" => Some(Self::Constraint),
            "COPY" => Some(Self::Copy),
            "CREATE" => Some(Self::Create),
            "CROSS" => Some(Self::Cross),
            "CURRENT" => Some(Self::Current),
            "CURRENT_CATALOG" => Some(Self::CurrentCatalog),
            "CURRENT_DATE" => Some(Self::CurrentDate),
            "CURRENT_DB" => Some(Self::CurrentDb),
            "CURRENT_SCHEMA" => Some(Self::CurrentSchema),
            "CURRENT_SID" => Some(Self::CurrentSid),
            "CURRENT_TIME" => Some(Self::CurrentTime),
            "CURRENT_TIMESTAMP" => Some(Self::CurrentTimestamp),
            "CURRENT_USER" => Some(Self::CurrentUser),
            "CURRENT_USERID" => Some(Self::CurrentUserid),
            "CURRENT_USEROID" => Some(Self::CurrentUseroid),
            "DATE" => Some(Self::Date),
            "DATETIME" => Some(Self::Datetime),
            "DEALLOCATE" => Some(Self::Deallocate),
            "DEC" => Some(Self::Dec),
            "DECIMAL" => Some(Self::Decimal),
            "DECODE" => Some(Self::Decode),
            "DEFAULT" => Some(Self::Default),
            "DELETE" => Some(Self::Delete),
            "DESC" => Some(Self::Desc),
            "DISTINCT" => Some(Self::Distinct),
            "DISTRIBUTE" => Some(Self::Distribute),
            "DO" => Some(Self::Do),
            "DOUBLE" => Some(Self::Double),
            "DROP" => Some(Self::Drop),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "ENUM" => Some(Self::Enum),
            "EXCEPT" => Some(Self::Except),
            "EXCLUDE" => Some(Self::Exclude),
            "EXISTS" => Some(Self::Exists),
            "EXPLAIN" => Some(Self::Explain),
            "EXPRESS" => Some(Self::Express),
            "EXTEND" => Some(Self::Extend),
            "EXTERNAL" => Some(Self::External),
            "EXTRACT" => Some(Self::Extract),
            "FALSE" => Some(Self::False),
            "FIRST" => Some(Self::First),
            "FLOAT" => Some(Self::Float),
            "FOLLOWING" => Some(Self::Following),
            "FOR" => Some(Self::For),
            "FOREIGN" => Some(Self::Foreign),
            "FROM" => Some(Self::From),
            "FULL" => Some(Self::Full),
            "FUNCTION" => Some(Self::Function),
            "GENSTATS" => Some(Self::Genstats),
            "GLOBAL" => Some(Self::Global),
            "GROUP" => Some(Self::Group),
            "GROUP_BY" => Some(Self::GroupBy),
            "HAVING" => Some(Self::Having),
            "IDENTIFIER_CASE" => Some(Self::IdentifierCase),
            "ILIKE" => Some(Self::Ilike),
            "IN" => Some(Self::In),
            "INDEX" => Some(Self::Index),
            "INITIALLY" => Some(Self::Initially),
            "INNER" => Some(Self::Inner),
            "INNER_JOIN" => Some(Self::InnerJoin),
            "INOUT" => Some(Self::Inout),
            "INSERT" => Some(Self::Insert),
            "INT" => Some(Self::Int),
            "INTEGER" => Some(Self::Integer),
            "INTERSECT" => Some(Self::Intersect),
            "INTERVAL" => Some(Self::Interval),
            "INTO" => Some(Self::Into),
            "JOIN" => Some(Self::Join),
            "KEY" => Some(Self::Key),
            "LEADING" => Some(Self::Leading),
            "LEFT" => Some(Self::Left),
            "LEFT_JOIN" => Some(Self::LeftJoin),
            "LIKE" => Some(Self::Like),
            "LIMIT" => Some(Self::Limit),
            "LOAD" => Some(Self::Load),
            "LOCAL" => Some(Self::Local),
            "LOCK" => Some(Self::Lock),
            "LONGBLOB" => Some(Self::Longblob),
            "LONGTEXT" => Some(Self::Longtext),
            "MEDIUMBLOB" => Some(Self::Mediumblob),
            "MEDIUMINT" => Some(Self::Mediumint),
            "MEDIUMTEXT" => Some(Self::Mediumtext),
            "MINUS" => Some(Self::Minus),
            "MOVE" => Some(Self::Move),
            "NATURAL" => Some(Self::Natural),
            "NCHAR" => Some(Self::Nchar),
            "NEW" => Some(Self::New),
            "NOT" => Some(Self::Not),
            "NOTNULL" => Some(Self::Notnull),
            "NULL" => Some(Self::Null),
            "NULLS" => Some(Self::Nulls),
            "NUMERIC" => Some(Self::Numeric),
            "NVL" => Some(Self::Nvl),
            "OFF" => Some(Self::Off),
            "OFFSET" => Some(Self::Offset),
            "OLD" => Some(Self::Old),
            "ON" => Some(Self::On),
            "ONLINE" => Some(Self::Online),
            "ONLY" => Some(Self::Only),
            "OR" => Some(Self::Or),
            "ORDER" => Some(Self::Order),
            "OTHERS" => Some(Self::Others),
            "OUT" => Some(Self::Out),
            "OUTER" => Some(Self::Outer),
            "OUTER_JOIN" => Some(Self::OuterJoin),
            "OVER" => Some(Self::Over),
            "OVERLAPS" => Some(Self::Overlaps),
            "PARTITION" => Some(Self::Partition),
            "POSITION" => Some(Self::Position),
            "PRECEDING" => Some(Self::Preceding),
            "PRECISION" => Some(Self::Precision),
            "PRESERVE" => Some(Self::Preserve),
            "PRIMARY" => Some(Self::Primary),
            "REAL" => Some(Self::Real),
            "RESET" => Some(Self::Reset),
            "REUSE" => Some(Self::Reuse),
            "RIGHT" => Some(Self::Right),
            "RIGHT_JOIN" => Some(Self::RightJoin),
            "ROWS" => Some(Self::Rows),
            "SELECT" => Some(Self::Select),
            "SESSION_USER" => Some(Self::SessionUser),
            "SET" => Some(Self::Set),
            "SETOF" => Some(Self::Setof),
            "SHOW" => Some(Self::Show),
            "SMALLINT" => Some(Self::Smallint),
            "SOME" => Some(Self::Some),
            "TABLE" => Some(Self::Table),
            "TEXT" => Some(Self::Text),
            "THEN" => Some(Self::Then),
            "TIES" => Some(Self::Ties),
            "TIME" => Some(Self::Time),
            "TIMESTAMP" => Some(Self::Timestamp),
            "TINYBLOB" => Some(Self::Tinyblob),
            "TINYINT" => Some(Self::Tinyint),
            "TINYTEXT" => Some(Self::Tinytext),
            "TO" => Some(Self::To),
            "TRAILING" => Some(Self::Trailing),
            "TRANSACTION" => Some(Self::Transaction),
            "TRIGGER" => Some(Self::Trigger),
            "TRIM" => Some(Self::Trim),
            "TRUE" => Some(Self::True),
            "UNBOUNDED" => Some(Self::Unbounded),
            "UNION" => Some(Self::Union),
            "UNIQUE" => Some(Self::Unique),
            "UPDATE" => Some(Self::Update),
            "USER" => Some(Self::User),
            "USING" => Some(Self::Using),
            "VACUUM" => Some(Self::Vacuum),
            "VALUES" => Some(Self::Values),
            "VARBINARY" => Some(Self::Varbinary),
            "VARCHAR" => Some(Self::Varchar),
            "VERBOSE" => Some(Self::Verbose),
            "VERSION" => Some(Self::Version),
            "VIEW" => Some(Self::View),
            "WHEN" => Some(Self::When),
            "WHERE" => Some(Self::Where),
            "WITH" => Some(Self::With),
            "WRITE" => Some(Self::Write),
            "YEAR" => Some(Self::Year),
            _ => None,
        }
    }

    /// Whether `word` is a reserved keyword, ignoring ASCII case.
    #[must_use]
    pub fn is_keyword(word: &str) -> bool {
        Self::lookup(word).is_some()
    }

    /// Canonical uppercase spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "ABORT",
            Self::All => "ALL",
            Self::Allocate => "ALLOCATE",
            Self::Alter => "ALTER",
            Self::Analyse => "ANALYSE",
            Self::Analyze => "ANALYZE",
            Self::And => "AND",
            Self::Any => "ANY",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::AutoIncrement => "AUTO_INCREMENT",
            Self::Between => "BETWEEN",
            Self::Bigint => "BIGINT",
            Self::Binary => "BINARY",
            Self::Bit => "BIT",
            Self::Blob => "BLOB",
            Self::Both => "BOTH",
            Self::Case => "CASE",
            Self::Cast => "CAST",
            Self::Char => "CHAR",
            Self::Character => "CHARACTER",
            Self::Check => "CHECK",
            Self::Cluster => "CLUSTER",
            Self::Coalesce => "COALESCE",
            Self::Collate => "COLLATE",
            Self::Collation => "COLLATION",
            Self::Column => "COLUMN",
            Self::Constraint => "CONSTRAINT",
            Self::Copy => "COPY",
            Self::Create => "CREATE",
            Self::Cross => "CROSS",
            Self::Current => "CURRENT",
            Self::CurrentCatalog => "CURRENT_CATALOG",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentDb => "CURRENT_DB",
            Self::CurrentSchema => "CURRENT_SCHEMA",
            Self::CurrentSid => "CURRENT_SID",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::CurrentUser => "CURRENT_USER",
            Self::CurrentUserid => "CURRENT_USERID",
            Self::CurrentUseroid => "CURRENT_USEROID",
            Self::Date => "DATE",
            Self::Datetime => "DATETIME",
            Self::Deallocate => "DEALLOCATE",
            Self::Dec => "DEC",
            Self::Decimal => "DECIMAL",
            Self::Decode => "DECODE",
            Self::Default => "DEFAULT",
            Self::Delete => "DELETE",
            Self::Desc => "DESC",
            Self::Distinct => "DISTINCT",
            Self::Distribute => "DISTRIBUTE",
            Self::Do => "DO",
            Self::Double => "DOUBLE",
            Self::Drop => "DROP",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Enum => "ENUM",
            Self::Except => "EXCEPT",
            Self::Exclude => "EXCLUDE",
            Self::Exists => "EXISTS",
            Self::Explain => "EXPLAIN",
            Self::Express => "EXPRESS",
            Self::Extend => "EXTEND",
            Self::External => "EXTERNAL",
            Self::Extract => "EXTRACT",
            Self::False => "FALSE",
            Self::First => "FIRST",
            Self::Float => "FLOAT",
            Self::Following => "FOLLOWING",
            Self::For => "FOR",
            Self::Foreign => "FOREIGN",
            Self::From => "FROM",
            Self::Full => "FULL",
            Self::Function => "FUNCTION",
            Self::Genstats => "GENSTATS",
            Self::Global => "GLOBAL",
            Self::Group => "GROUP",
            Self::GroupBy => "GROUP_BY",
            Self::Having => "HAVING",
            Self::IdentifierCase => "IDENTIFIER_CASE",
            Self::Ilike => "ILIKE",
            Self::In => "IN",
            Self::Index => "INDEX",
            Self::Initially => "INITIALLY",
            Self::Inner => "INNER",
            Self::InnerJoin => "INNER_JOIN",
            Self::Inout => "INOUT",
            Self::Insert => "INSERT",
            Self::Int => "INT",
            Self::Integer => "INTEGER",
            Self::Intersect => "INTERSECT",
            Self::Interval => "INTERVAL",
            Self::Into => "INTO",
            Self::Join => "JOIN",
            Self::Key => "KEY",
            Self::Leading => "LEADING",
            Self::Left => "LEFT",
            Self::LeftJoin => "LEFT_JOIN",
            Self::Like => "LIKE",
            Self::Limit => "LIMIT",
            Self::Load => "LOAD",
            Self::Local => "LOCAL",
            Self::Lock => "LOCK",
            Self::Longblob => "LONGBLOB",
            Self::Longtext => "LONGTEXT",
            Self::Mediumblob => "MEDIUMBLOB",
            Self::Mediumint => "MEDIUMINT",
            Self::Mediumtext => "MEDIUMTEXT",
            Self::Minus => "MINUS",
            Self::Move => "MOVE",
            Self::Natural => "NATURAL",
            Self::Nchar => "NCHAR",
            Self::New => "NEW",
            Self::Not => "NOT",
            Self::Notnull => "NOTNULL",
            Self::Null => "NULL",
            Self::Nulls => "NULLS",
            Self::Numeric => "NUMERIC",
            Self::Nvl => "NVL",
            Self::Off => "OFF",
            Self::Offset => "OFFSET",
            Self::Old => "OLD",
            Self::On => "ON",
            Self::Online => "ONLINE",
            Self::Only => "ONLY",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Others => "OTHERS",
            Self::Out => "OUT",
            Self::Outer => "OUTER",
            Self::OuterJoin => "OUTER_JOIN",
            Self::Over => "OVER",
            Self::Overlaps => "OVERLAPS",
            Self::Partition => "PARTITION",
            Self::Position => "POSITION",
            Self::Preceding => "PRECEDING",
            Self::Precision => "PRECISION",
            Self::Preserve => "PRESERVE",
            Self::Primary => "PRIMARY",
            Self::Real => "REAL",
            Self::Reset => "RESET",
            Self::Reuse => "REUSE",
            Self::Right => "RIGHT",
            Self::RightJoin => "RIGHT_JOIN",
            Self::Rows => "ROWS",
            Self::Select => "SELECT",
            Self::SessionUser => "SESSION_USER",
            Self::Set => "SET",
            Self::Setof => "SETOF",
            Self::Show => "SHOW",
            Self::Smallint => "SMALLINT",
            Self::Some => "SOME",
            Self::Table => "TABLE",
            Self::Text => "TEXT",
            Self::Then => "THEN",
            Self::Ties => "TIES",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Tinyblob => "TINYBLOB",
            Self::Tinyint => "TINYINT",
            Self::Tinytext => "TINYTEXT",
            Self::To => "TO",
            Self::Trailing => "TRAILING",
            Self::Transaction => "TRANSACTION",
            Self::Trigger => "TRIGGER",
            Self::Trim => "TRIM",
            Self::True => "TRUE",
            Self::Unbounded => "UNBOUNDED",
            Self::Union => "UNION",
            Self::Unique => "UNIQUE",
            Self::Update => "UPDATE",
            Self::User => "USER",
            Self::Using => "USING",
            Self::Vacuum => "VACUUM",
            Self::Values => "VALUES",
            Self::Varbinary => "VARBINARY",
            Self::Varchar => "VARCHAR",
            Self::Verbose => "VERBOSE",
            Self::Version => "VERSION",
            Self::View => "VIEW",
            Self::When => "WHEN",
            Self::Where => "WHERE",
            Self::With => "WITH",
            Self::Write => "WRITE",
            Self::Year => "YEAR",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
