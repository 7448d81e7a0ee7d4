//! Public API facade for sqldump.
//!
//! Extracts rows from SQL dumps without running them against a database.
//! Dump text is tokenized one statement at a time, `CREATE TABLE`
//! statements teach the extractor each table's column order, and every
//! INSERT tuple of a selected table reaches a [`RowSink`] as an ordered
//! [`Row`].
//!
//! ```
//! use sqldump::{RowCollector, TableSelection, Value};
//!
//! let sql = "CREATE TABLE t (a INT, b TEXT);\nINSERT INTO t VALUES (1, 'x'), (2, NULL);";
//! let mut sink = RowCollector::new();
//! let stats = sqldump::extract_str(sql, TableSelection::only(["t"]), &mut sink)?;
//!
//! assert_eq!(stats.rows, 2);
//! assert_eq!(sink.rows[0].1.get("b"), Some(&Value::Text("x".into())));
//! assert_eq!(sink.rows[1].1.get("b"), Some(&Value::Null));
//! # Ok::<(), sqldump::DumpError>(())
//! ```
//!
//! Large dumps go through [`extract_reader`], which keeps only a bounded
//! window of the input in memory. Sinks pick their own error type; anything
//! a sink returns comes back from the call unchanged.

use std::io::Read;

pub use sqldump_buffer::{BufferConfig, ScanCursor, SliceCursor, StreamBuffer, StreamCursor};
pub use sqldump_error::{DumpError, ErrorCategory, Result};
pub use sqldump_extract::{
    Command, ExtractStats, FnSink, InsertExtractor, Row, RowCollector, RowSink, SchemaRegistry,
    TableSelection, Value, from_fn,
};
pub use sqldump_parser::{
    Delimiter, Keyword, Lexer, ParserConfig, Statement, Token, parse_reader, parse_str,
};

/// Extract rows from an in-memory dump into `sink`.
pub fn extract_str<S: RowSink>(
    sql: &str,
    tables: TableSelection,
    sink: S,
) -> std::result::Result<ExtractStats, S::Error> {
    InsertExtractor::new(tables, sink).extract_str(sql)
}

/// Extract rows from a streamed dump into `sink`.
pub fn extract_reader<R: Read, S: RowSink>(
    reader: R,
    tables: TableSelection,
    sink: S,
) -> std::result::Result<ExtractStats, S::Error> {
    InsertExtractor::new(tables, sink).extract_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_str_with_closure_sink() {
        let mut names = Vec::new();
        let stats = extract_str(
            "INSERT INTO users (id, name, age) VALUES (1, 'Alice', 30), (2, 'Bob', 25);",
            TableSelection::only(["users", "libgenrelist"]),
            from_fn(|table: &str, row: Row| {
                assert_eq!(table, "users");
                assert_eq!(row.columns().collect::<Vec<_>>(), ["id", "name", "age"]);
                names.push(row.get("name").and_then(Value::as_text).map(str::to_owned));
                Ok::<(), DumpError>(())
            }),
        )
        .expect("extraction should succeed");

        assert_eq!(stats.rows, 2);
        assert_eq!(names, [Some("Alice".to_owned()), Some("Bob".to_owned())]);
    }

    #[test]
    fn test_extract_reader_positional() {
        let sql = "INSERT INTO `libgenrelist` VALUES (1,'sf_history','Альтернативная история','Фантастика'),\
                   (2,'sf_action','Боевая фантастика','Фантастика');";
        let mut sink = RowCollector::new();
        extract_reader(sql.as_bytes(), TableSelection::only(["libgenrelist"]), &mut sink)
            .expect("extraction should succeed");

        let first = &sink.rows[0].1;
        assert_eq!(first.columns().collect::<Vec<_>>(), ["#0", "#1", "#2", "#3"]);
        assert_eq!(first.get("#2"), Some(&Value::Text("Альтернативная история".to_owned())));
        assert_eq!(sink.rows[1].1.get("#0"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_parse_str_reexport() {
        let statements = parse_str("SELECT 1; SELECT 2").expect("should parse");
        assert_eq!(statements.len(), 2);
        assert_eq!(Command::of(&statements[0]), Command::Other);
    }
}
