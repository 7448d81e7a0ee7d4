// Row extraction from tokenized SQL dumps.
//
// Dispatches statements by command, learns table schemas from
// `CREATE TABLE`, and turns every INSERT tuple of a selected table into an
// ordered row delivered to a `RowSink`.

pub mod dispatch;
pub mod extractor;
mod insert;
pub mod schema;
pub mod sink;
pub mod value;

pub use dispatch::Command;
pub use extractor::{ExtractStats, InsertExtractor};
pub use schema::{SchemaRegistry, TableSelection};
pub use sink::{FnSink, RowCollector, RowSink, from_fn};
pub use value::{Row, Value};
