// Row consumers.

use std::marker::PhantomData;

use sqldump_error::DumpError;

use crate::value::Row;

/// Receiver of extraction events.
///
/// Errors returned from a callback abort the session and reach the caller
/// unchanged. Extraction failures are converted into the sink's error type
/// through `From<DumpError>`.
pub trait RowSink {
    type Error: From<DumpError>;

    /// A `CREATE TABLE` for a selected table. `table` is lowercased.
    fn on_create_table(&mut self, table: &str, fields: &[String]) -> Result<(), Self::Error> {
        let _ = (table, fields);
        Ok(())
    }

    /// One INSERT tuple. `table` is spelled as in the statement.
    fn on_insert(&mut self, table: &str, row: Row) -> Result<(), Self::Error>;
}

impl<S: RowSink + ?Sized> RowSink for &mut S {
    type Error = S::Error;

    fn on_create_table(&mut self, table: &str, fields: &[String]) -> Result<(), Self::Error> {
        (**self).on_create_table(table, fields)
    }

    fn on_insert(&mut self, table: &str, row: Row) -> Result<(), Self::Error> {
        (**self).on_insert(table, row)
    }
}

/// Sink that forwards rows to a closure and ignores table definitions.
pub struct FnSink<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Adapt an insert callback into a [`RowSink`].
pub const fn from_fn<F, E>(f: F) -> FnSink<F, E>
where
    F: FnMut(&str, Row) -> Result<(), E>,
    E: From<DumpError>,
{
    FnSink {
        f,
        _error: PhantomData,
    }
}

impl<F, E> RowSink for FnSink<F, E>
where
    F: FnMut(&str, Row) -> Result<(), E>,
    E: From<DumpError>,
{
    type Error = E;

    fn on_insert(&mut self, table: &str, row: Row) -> Result<(), E> {
        (self.f)(table, row)
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RowCollector {
    /// `(lowercased table, fields)` per reported `CREATE TABLE`.
    pub tables: Vec<(String, Vec<String>)>,
    /// `(table, row)` per INSERT tuple, in source order.
    pub rows: Vec<(String, Row)>,
}

impl RowCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows inserted into `table`, in source order.
    pub fn rows_for<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a Row> + 'a {
        self.rows
            .iter()
            .filter(move |(name, _)| name == table)
            .map(|(_, row)| row)
    }
}

impl RowSink for RowCollector {
    type Error = DumpError;

    fn on_create_table(&mut self, table: &str, fields: &[String]) -> Result<(), DumpError> {
        self.tables.push((table.to_owned(), fields.to_vec()));
        Ok(())
    }

    fn on_insert(&mut self, table: &str, row: Row) -> Result<(), DumpError> {
        self.rows.push((table.to_owned(), row));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn collector_records_events() {
        let mut collector = RowCollector::new();
        collector.on_create_table("t", &["a".to_owned()]).unwrap();
        let row: Row = [("a", Value::Integer(1))].into_iter().collect();
        collector.on_insert("t", row.clone()).unwrap();
        collector.on_insert("u", Row::new()).unwrap();

        assert_eq!(collector.tables, [("t".to_owned(), vec!["a".to_owned()])]);
        assert_eq!(collector.rows_for("t").collect::<Vec<_>>(), [&row]);
        assert_eq!(collector.rows_for("u").count(), 1);
    }

    #[test]
    fn fn_sink_forwards_rows_and_errors() {
        let mut seen = Vec::new();
        {
            let mut sink = from_fn(|table: &str, row: Row| {
                seen.push((table.to_owned(), row.len()));
                if table == "bad" {
                    return Err(DumpError::malformed_tuple("()", "rejected"));
                }
                Ok(())
            });
            sink.on_create_table("t", &[]).unwrap();
            sink.on_insert("t", Row::new()).unwrap();
            assert!(sink.on_insert("bad", Row::new()).is_err());
        }
        assert_eq!(seen, [("t".to_owned(), 0), ("bad".to_owned(), 0)]);
    }

    #[test]
    fn mutable_reference_is_a_sink() {
        fn feed<S: RowSink>(mut sink: S) -> Result<(), S::Error> {
            sink.on_insert("t", Row::new())
        }
        let mut collector = RowCollector::new();
        feed(&mut collector).unwrap();
        assert_eq!(collector.rows.len(), 1);
    }
}
