// SQL dump tokenizer.
//
// Turns dump text into one flat token sequence per statement, with
// parenthesized runs nested as groups. No SQL semantics live here.

pub mod config;
pub mod keyword;
pub mod lexer;
pub mod token;

use std::io::Read;

pub use config::ParserConfig;
pub use keyword::Keyword;
pub use lexer::Lexer;
use sqldump_error::Result;
pub use token::{Delimiter, Statement, Token};

/// Tokenize an in-memory dump into its statements.
pub fn parse_str(source: &str) -> Result<Vec<Statement>> {
    Lexer::new(source).collect()
}

/// Tokenize a streamed dump into its statements.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Statement>> {
    Lexer::from_reader(reader).collect()
}
