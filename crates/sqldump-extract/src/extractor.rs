// Statement dispatch and extraction session.

use std::io::Read;

use sqldump_buffer::{ScanCursor, SliceCursor};
use sqldump_parser::{Lexer, ParserConfig, Statement};
use tracing::{debug, trace};

use crate::dispatch::Command;
use crate::insert::{ensure_unique_columns, extract_insert, table_definition};
use crate::schema::{SchemaRegistry, TableSelection};
use crate::sink::RowSink;

/// Counters for one extractor, accumulated over every input it processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Statements seen, including empty and ignored ones.
    pub statements: usize,
    /// Table schemas recorded from `CREATE TABLE`.
    pub schemas: usize,
    /// Rows handed to the sink.
    pub rows: usize,
    /// INSERT statements for tables outside the selection.
    pub skipped: usize,
}

/// Turns a dump's `CREATE TABLE` and INSERT statements into sink events.
///
/// Schemas learned from `CREATE TABLE` persist across inputs, so a schema
/// dump and a data dump can be fed one after the other.
pub struct InsertExtractor<S> {
    selection: TableSelection,
    schema: SchemaRegistry,
    sink: S,
    config: ParserConfig,
    stats: ExtractStats,
}

impl<S: RowSink> InsertExtractor<S> {
    pub fn new(selection: TableSelection, sink: S) -> Self {
        Self::with_config(selection, sink, ParserConfig::default())
    }

    pub fn with_config(selection: TableSelection, sink: S, config: ParserConfig) -> Self {
        Self {
            selection,
            schema: SchemaRegistry::new(),
            sink,
            config,
            stats: ExtractStats::default(),
        }
    }

    /// Dispatch one statement by its command.
    pub fn handle_statement(&mut self, statement: &Statement) -> Result<(), S::Error> {
        self.stats.statements += 1;
        match Command::of(statement) {
            Command::Create => self.handle_create(statement),
            Command::Insert => self.handle_insert(statement),
            Command::Other => Ok(()),
        }
    }

    /// Extract from an in-memory dump.
    pub fn extract_str(&mut self, sql: &str) -> Result<ExtractStats, S::Error> {
        let mut lexer = Lexer::with_config(SliceCursor::new(sql), self.config);
        self.run(&mut lexer)
    }

    /// Extract from a streamed dump.
    pub fn extract_reader<R: Read>(&mut self, reader: R) -> Result<ExtractStats, S::Error> {
        let mut lexer = Lexer::from_reader_with_config(reader, self.config);
        self.run(&mut lexer)
    }

    /// Fields recorded for `table`, looked up case-insensitively.
    pub fn schema(&self, table: &str) -> Option<&[String]> {
        self.schema.fields(table)
    }

    pub const fn schemas(&self) -> &SchemaRegistry {
        &self.schema
    }

    pub const fn stats(&self) -> ExtractStats {
        self.stats
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn run<C: ScanCursor>(&mut self, lexer: &mut Lexer<C>) -> Result<ExtractStats, S::Error> {
        lexer.drive(|statement| self.handle_statement(&statement))?;
        debug!(
            statements = self.stats.statements,
            schemas = self.stats.schemas,
            rows = self.stats.rows,
            skipped = self.stats.skipped,
            "extraction finished"
        );
        Ok(self.stats)
    }

    fn handle_create(&mut self, statement: &Statement) -> Result<(), S::Error> {
        let Some(definition) = table_definition(statement, &self.selection) else {
            return Ok(());
        };
        let table = definition.name.to_lowercase();
        ensure_unique_columns(&table, &definition.fields)?;
        self.sink.on_create_table(&table, &definition.fields)?;

        if definition.fields.is_empty() {
            let dropped = self.schema.forget(&table).is_some();
            debug!(table = %table, dropped, "table definition without fields, schema not recorded");
            return Ok(());
        }
        debug!(table = %table, fields = definition.fields.len(), "schema learned");
        self.schema.define(&table, definition.fields);
        self.stats.schemas += 1;
        Ok(())
    }

    fn handle_insert(&mut self, statement: &Statement) -> Result<(), S::Error> {
        let Self {
            selection,
            schema,
            sink,
            stats,
            ..
        } = self;
        match extract_insert(statement, selection, schema, |table, row| {
            sink.on_insert(table, row)
        })? {
            Some(rows) => stats.rows += rows,
            None => {
                stats.skipped += 1;
                trace!(statement = stats.statements, "insert into unselected table skipped");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqldump_error::DumpError;

    use super::*;
    use crate::sink::RowCollector;
    use crate::value::Value;

    fn extractor(tables: &[&str]) -> InsertExtractor<RowCollector> {
        InsertExtractor::new(TableSelection::only(tables.iter().copied()), RowCollector::new())
    }

    #[test]
    fn schema_resolves_columns() {
        let mut ex = extractor(&["t"]);
        let stats = ex
            .extract_str("CREATE TABLE t (a INT, b INT, c INT);\nINSERT INTO t VALUES (1,2,3);")
            .unwrap();
        assert_eq!(
            stats,
            ExtractStats {
                statements: 2,
                schemas: 1,
                rows: 1,
                skipped: 0
            }
        );

        let mut explicit = extractor(&["t"]);
        explicit.extract_str("INSERT INTO t (a,b,c) VALUES (1,2,3);").unwrap();
        assert_eq!(ex.sink().rows, explicit.sink().rows);
        assert_eq!(
            ex.sink().rows[0].1.columns().collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
        assert_eq!(ex.schema("T").map(<[String]>::len), Some(3));
    }

    #[test]
    fn create_reports_lowercase_insert_keeps_spelling() {
        let mut ex = extractor(&["Users"]);
        ex.extract_str("CREATE TABLE Users (id INT); INSERT INTO Users VALUES (7);")
            .unwrap();
        let sink = ex.into_sink();
        assert_eq!(sink.tables, [("users".to_owned(), vec!["id".to_owned()])]);
        assert_eq!(sink.rows[0].0, "Users");
        assert_eq!(sink.rows[0].1.get("id"), Some(&Value::Integer(7)));
    }

    #[test]
    fn unselected_tables_produce_nothing() {
        let mut ex = extractor(&["users"]);
        let stats = ex
            .extract_str("CREATE TABLE other_table (a); INSERT INTO other_table VALUES (1);")
            .unwrap();
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.rows, 0);
        assert!(ex.sink().tables.is_empty());
        assert!(ex.schemas().is_empty());
    }

    #[test]
    fn field_less_definition_is_reported_not_recorded() {
        let mut ex = extractor(&["t"]);
        ex.extract_str("CREATE TABLE t (PRIMARY KEY (a)); INSERT INTO t VALUES (1);")
            .unwrap();
        assert_eq!(ex.sink().tables, [("t".to_owned(), Vec::new())]);
        assert_eq!(ex.schema("t"), None);
        assert_eq!(ex.sink().rows[0].1.columns().collect::<Vec<_>>(), ["#0"]);
    }

    #[test]
    fn later_definition_replaces_schema() {
        let mut ex = extractor(&["t"]);
        ex.extract_str("CREATE TABLE t (a, b); CREATE TABLE t (x); INSERT INTO t VALUES (1);")
            .unwrap();
        assert_eq!(ex.schema("t"), Some(&["x".to_owned()][..]));
        assert_eq!(ex.stats().schemas, 2);
        assert_eq!(ex.sink().rows[0].1.get("x"), Some(&Value::Integer(1)));
    }

    #[test]
    fn repeated_field_in_definition_is_fatal() {
        let mut ex = extractor(&["t"]);
        let err = ex
            .extract_str("CREATE TABLE t (a INT, b INT, a TEXT); INSERT INTO t VALUES (1, 2, 3);")
            .unwrap_err();
        assert!(matches!(err, DumpError::DuplicateColumn { ref column, .. } if column == "a"));
        assert!(ex.sink().tables.is_empty());
        assert_eq!(ex.schema("t"), None);
    }

    #[test]
    fn field_less_redefinition_drops_schema() {
        let mut ex = extractor(&["t"]);
        ex.extract_str(
            "CREATE TABLE t (a, b); CREATE TABLE t (PRIMARY KEY (x)); INSERT INTO t VALUES (1);",
        )
        .unwrap();
        assert_eq!(ex.schema("t"), None);
        assert_eq!(ex.stats().schemas, 1);
        let row = &ex.sink().rows[0].1;
        assert_eq!(row.columns().collect::<Vec<_>>(), ["#0"]);
        assert_eq!(row.get("#0"), Some(&Value::Integer(1)));
    }

    #[test]
    fn schema_persists_across_inputs() {
        let mut ex = extractor(&["t"]);
        ex.extract_str("CREATE TABLE t (a);").unwrap();
        let stats = ex.extract_reader(&b"INSERT INTO t VALUES ('x');"[..]).unwrap();
        assert_eq!(stats.statements, 2);
        assert_eq!(ex.sink().rows[0].1.get("a"), Some(&Value::from("x")));
    }

    #[test]
    fn arity_mismatch_is_fatal() {
        let mut ex = extractor(&["t"]);
        let err = ex
            .extract_str("INSERT INTO t (a,b) VALUES (1);")
            .unwrap_err();
        assert!(matches!(err, DumpError::ArityMismatch { columns: 2, values: 1, .. }));
        assert!(ex.sink().rows.is_empty());
    }

    #[test]
    fn handle_statement_ignores_other_commands() {
        let mut ex = extractor(&["t"]);
        for statement in sqldump_parser::parse_str("DROP TABLE t;; SET NAMES utf8;").unwrap() {
            ex.handle_statement(&statement).unwrap();
        }
        assert_eq!(ex.stats().statements, 3);
        assert!(ex.sink().rows.is_empty());
    }
}
